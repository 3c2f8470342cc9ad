/*!
 * Synchronization Primitives
 *
 * Lock acquisition helpers shared by the account types:
 * - Pairwise locking in a global order (transfers)
 * - Whole-set locking in the same order (consistent snapshots)
 *
 * # Architecture
 *
 * Every multi-lock acquisition in the crate goes through this module, so
 * there is exactly one definition of the global order. Any two threads that
 * lock overlapping sets always take the shared locks in the same sequence,
 * which rules out circular wait.
 */

pub mod locks;

pub use locks::{acquisition_order, lock_all_ordered, lock_pair, LockOrder, PairGuard};
