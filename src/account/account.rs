/*!
 * Account
 * A balance holder with an exclusive lock
 */

use crate::core::sync::{lock_pair, PairGuard};
use crate::core::types::{AccountId, Balance};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Point-in-time view of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: AccountId,
    pub balance: Balance,
}

/// Account with a lock-guarded balance
///
/// All operations take `&self`; share across threads with `Arc<Account>`.
/// Operations on one account are linearizable.
///
/// # Example
///
/// ```
/// use sync_primitives::{Account, AccountId};
///
/// let a = Account::new(AccountId(1), 100);
/// let b = Account::new(AccountId(2), 50);
/// a.transfer(&b, 30);
/// assert_eq!(a.balance(), 70);
/// assert_eq!(b.balance(), 80);
/// ```
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Mutex<Balance>,
}

impl Account {
    /// Create an account with an initial balance
    pub fn new(id: AccountId, initial: Balance) -> Self {
        Self {
            id,
            balance: Mutex::new(initial),
        }
    }

    /// Immutable identity
    #[inline]
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Current balance
    ///
    /// The value held at some instant during the call; it may be stale by
    /// the time the caller looks at it.
    #[inline]
    pub fn balance(&self) -> Balance {
        *self.balance.lock()
    }

    /// Balance together with the id
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            balance: self.balance(),
        }
    }

    /// Add `amount` to the balance. Negative amounts withdraw.
    ///
    /// Balances wrap on overflow rather than panic.
    pub fn deposit(&self, amount: Balance) {
        let mut balance = self.balance.lock();
        *balance = balance.wrapping_add(amount);
        trace!(account = %self.id, amount, balance = *balance, "deposit");
    }

    /// Subtract `amount` from the balance. No overdraft check.
    pub fn withdraw(&self, amount: Balance) {
        let mut balance = self.balance.lock();
        *balance = balance.wrapping_sub(amount);
        trace!(account = %self.id, amount, balance = *balance, "withdraw");
    }

    /// Move `amount` from this account to `target`
    ///
    /// Both locks are held while either balance changes, taken in global id
    /// order regardless of direction, so `a.transfer(&b, x)` racing
    /// `b.transfer(&a, y)` cannot deadlock.
    ///
    /// Transferring to the same account takes its lock once and leaves the
    /// balance unchanged. Both new balances are computed before either is
    /// written, with wrapping arithmetic, so a transfer is never half-applied.
    pub fn transfer(&self, target: &Account, amount: Balance) {
        match lock_pair(self.id, &self.balance, target.id, &target.balance) {
            PairGuard::Distinct(mut from, mut to) => {
                let debited = from.wrapping_sub(amount);
                let credited = to.wrapping_add(amount);
                *from = debited;
                *to = credited;
                trace!(
                    from = %self.id,
                    to = %target.id,
                    amount,
                    "transfer"
                );
            }
            PairGuard::Shared(_guard) => {
                trace!(account = %self.id, amount, "self-transfer, balance unchanged");
            }
        }
    }

    /// Balance mutex, for ordered multi-account locking
    pub(crate) fn balance_lock(&self) -> &Mutex<Balance> {
        &self.balance
    }

    #[cfg(test)]
    fn lock_balance(&self) -> parking_lot::MutexGuard<'_, Balance> {
        self.balance.lock()
    }
}
