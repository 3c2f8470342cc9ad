/*!
 * ID Generation
 * Atomic account id allocation
 */

use super::types::AccountId;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Generic ID generator interface
pub trait IdGenerator<T> {
    /// Next unused ID, or `None` once the space is exhausted
    fn next(&self) -> Option<T>;

    /// Value the next call would return (for debugging)
    fn current(&self) -> T;
}

/// Lock-free account id counter
///
/// Never wraps: after `u32::MAX - 1` is issued, `next` returns `None`.
#[derive(Debug, Clone)]
pub struct AccountIdGenerator {
    counter: Arc<AtomicU32>,
}

impl AccountIdGenerator {
    /// Create new generator starting at given value
    #[inline]
    pub fn new(start: u32) -> Self {
        Self {
            counter: Arc::new(AtomicU32::new(start)),
        }
    }
}

impl Default for AccountIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator<AccountId> for AccountIdGenerator {
    #[inline]
    fn next(&self) -> Option<AccountId> {
        self.counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .ok()
            .map(AccountId)
    }

    #[inline]
    fn current(&self) -> AccountId {
        AccountId(self.counter.load(Ordering::SeqCst))
    }
}
