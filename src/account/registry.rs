/*!
 * Account Registry
 * Id-keyed account table with consistent multi-account snapshots
 */

use super::{Account, AccountSnapshot};
use crate::core::errors::AccountError;
use crate::core::id::{AccountIdGenerator, IdGenerator};
use crate::core::sync::lock_all_ordered;
use crate::core::types::{AccountId, AccountResult, Balance};
use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Registry of shared accounts
///
/// Cloning is cheap and shares the same table.
#[derive(Clone)]
pub struct AccountRegistry {
    accounts: Arc<DashMap<AccountId, Arc<Account>, RandomState>>,
    ids: AccountIdGenerator,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::with_ids(AccountIdGenerator::default())
    }

    fn with_ids(ids: AccountIdGenerator) -> Self {
        info!(first_id = %ids.current(), "Initializing account registry");
        Self {
            accounts: Arc::new(DashMap::with_hasher(RandomState::new())),
            ids,
        }
    }

    /// Open a new account with a fresh id
    ///
    /// Fails with [`AccountError::IdsExhausted`] once the id space is used up.
    pub fn open(&self, initial: Balance) -> AccountResult<Arc<Account>> {
        loop {
            let id = self.ids.next().ok_or(AccountError::IdsExhausted)?;
            // Ids may already be taken by `insert`
            if let Entry::Vacant(slot) = self.accounts.entry(id) {
                let account = Arc::new(Account::new(id, initial));
                slot.insert(account.clone());
                debug!(account = %id, initial, "Opened account");
                return Ok(account);
            }
        }
    }

    /// Register an account built by the caller
    pub fn insert(&self, account: Account) -> AccountResult<Arc<Account>> {
        let id = account.id();
        match self.accounts.entry(id) {
            Entry::Occupied(_) => Err(AccountError::DuplicateId(id)),
            Entry::Vacant(slot) => {
                let account = Arc::new(account);
                slot.insert(account.clone());
                debug!(account = %id, "Registered account");
                Ok(account)
            }
        }
    }

    /// Look up an account
    pub fn get(&self, id: AccountId) -> AccountResult<Arc<Account>> {
        self.accounts
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(AccountError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Transfer between two registered accounts
    pub fn transfer(&self, from: AccountId, to: AccountId, amount: Balance) -> AccountResult<()> {
        let source = self.get(from)?;
        let target = self.get(to)?;
        source.transfer(&target, amount);
        Ok(())
    }

    /// Consistent view of every account, sorted by id
    ///
    /// Locks all accounts in global order before reading any balance, so
    /// no transfer can be observed half-applied.
    pub fn snapshot(&self) -> Vec<AccountSnapshot> {
        // Clone out first; shard locks are never held while taking account locks
        let accounts: Vec<Arc<Account>> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        let guards = lock_all_ordered(
            accounts
                .iter()
                .map(|account| (account.id(), account.balance_lock())),
        );

        guards
            .iter()
            .map(|(id, balance)| AccountSnapshot {
                id: *id,
                balance: **balance,
            })
            .collect()
    }

    /// Sum of all balances at a single instant
    ///
    /// Wraps on overflow, matching per-account balance arithmetic.
    pub fn total_balance(&self) -> Balance {
        self.snapshot()
            .iter()
            .fold(0, |total: Balance, s| total.wrapping_add(s.balance))
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::thread;

    #[test]
    fn test_open_assigns_sequential_ids() {
        let registry = AccountRegistry::new();

        let a = registry.open(10).unwrap();
        let b = registry.open(20).unwrap();

        assert_eq!(a.id(), AccountId(1));
        assert_eq!(b.id(), AccountId(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_open_skips_inserted_ids() {
        let registry = AccountRegistry::new();
        registry.insert(Account::new(AccountId(1), 0)).unwrap();

        let opened = registry.open(5).unwrap();
        assert_eq!(opened.id(), AccountId(2));
    }

    #[test]
    fn test_open_fails_when_ids_exhausted() {
        let registry = AccountRegistry::with_ids(AccountIdGenerator::new(u32::MAX - 2));
        registry.insert(Account::new(AccountId(u32::MAX - 1), 0)).unwrap();

        let last = registry.open(0).unwrap();
        assert_eq!(last.id(), AccountId(u32::MAX - 2));

        // MAX - 1 is taken and MAX is never issued
        assert_eq!(registry.open(0).unwrap_err(), AccountError::IdsExhausted);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_total_balance_wraps() {
        let registry = AccountRegistry::new();
        registry.insert(Account::new(AccountId(1), i64::MAX)).unwrap();
        registry.insert(Account::new(AccountId(2), 0)).unwrap();

        registry.transfer(AccountId(2), AccountId(1), 1).unwrap();
        assert_eq!(registry.total_balance(), i64::MAX);
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let registry = AccountRegistry::new();
        registry.insert(Account::new(AccountId(4), 0)).unwrap();

        let err = registry.insert(Account::new(AccountId(4), 1)).unwrap_err();
        assert_eq!(err, AccountError::DuplicateId(AccountId(4)));
    }

    #[test]
    fn test_transfer_unknown_account() {
        let registry = AccountRegistry::new();
        let a = registry.open(100).unwrap();

        let err = registry.transfer(a.id(), AccountId(99), 1).unwrap_err();
        assert_eq!(err, AccountError::NotFound(AccountId(99)));
        assert_eq!(a.balance(), 100);
    }

    #[test]
    fn test_snapshot_sorted() {
        let registry = AccountRegistry::new();
        registry.insert(Account::new(AccountId(3), 30)).unwrap();
        registry.insert(Account::new(AccountId(1), 10)).unwrap();

        assert_eq!(
            registry.snapshot(),
            vec![
                AccountSnapshot { id: AccountId(1), balance: 10 },
                AccountSnapshot { id: AccountId(3), balance: 30 },
            ]
        );
    }

    #[test]
    fn test_total_consistent_under_transfers() {
        let registry = AccountRegistry::new();
        let ids: Vec<_> = (0..4).map(|_| registry.open(1_000).unwrap().id()).collect();

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let registry = registry.clone();
                let ids = ids.clone();
                thread::spawn(move || {
                    for i in 0..2_000 {
                        let from = ids[(t + i) % ids.len()];
                        let to = ids[(t + i * 3 + 1) % ids.len()];
                        registry.transfer(from, to, 7).unwrap();
                    }
                })
            })
            .collect();

        for _ in 0..200 {
            assert_eq!(registry.total_balance(), 4_000);
        }

        for writer in writers {
            writer.join().unwrap();
        }
        assert_eq!(registry.total_balance(), 4_000);
    }
}
