/*!
 * Account Primitives
 *
 * Mutable balances guarded by per-account locks, with deadlock-free
 * pairwise transfers.
 *
 * ## Locking Rules
 *
 * 1. **One lock per account**: a balance is read or written only while its
 *    own mutex is held
 * 2. **Global order**: multi-account operations lock in ascending id order
 *    (address breaks ties), via [`crate::core::sync`]
 * 3. **Scoped release**: every lock is a guard released on drop, so no exit
 *    path can leak a held lock
 *
 * Overdrafts are allowed. No operation validates the sign of an amount.
 */

mod account;
mod registry;

pub use account::{Account, AccountSnapshot};
pub use registry::AccountRegistry;
