/*!
 * Ordered Lock Acquisition
 * Acquires several mutexes in one global order to prevent deadlock
 */

use parking_lot::{Mutex, MutexGuard};
use std::cmp::Ordering;

/// Which of two locks must be taken first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOrder {
    /// Acquire the left lock, then the right
    LeftFirst,
    /// Acquire the right lock, then the left
    RightFirst,
    /// Both sides name the same lock; acquire it once
    Same,
}

/// Decide acquisition order from two ordering keys
///
/// Pure and symmetric: `acquisition_order(a, b)` and `acquisition_order(b, a)`
/// always pick the same physical lock first, whichever side calls.
#[inline]
pub fn acquisition_order<K: Ord>(left: K, right: K) -> LockOrder {
    match left.cmp(&right) {
        Ordering::Less => LockOrder::LeftFirst,
        Ordering::Greater => LockOrder::RightFirst,
        Ordering::Equal => LockOrder::Same,
    }
}

/// Guards returned by [`lock_pair`], always in caller (left, right) order
pub enum PairGuard<'a, T> {
    /// Two distinct locks are held
    Distinct(MutexGuard<'a, T>, MutexGuard<'a, T>),
    /// Left and right were the same mutex; held once
    Shared(MutexGuard<'a, T>),
}

#[inline]
fn address<T>(mutex: &Mutex<T>) -> usize {
    mutex as *const Mutex<T> as usize
}

/// Lock two mutexes in global order
///
/// Order is by `key` first; equal keys on distinct mutexes fall back to the
/// mutex address so the order stays total. Passing the same mutex twice takes
/// it once and returns [`PairGuard::Shared`]. Both guards release on drop.
pub fn lock_pair<'a, K: Ord, T>(
    left_key: K,
    left: &'a Mutex<T>,
    right_key: K,
    right: &'a Mutex<T>,
) -> PairGuard<'a, T> {
    if std::ptr::eq(left, right) {
        return PairGuard::Shared(left.lock());
    }

    match acquisition_order((left_key, address(left)), (right_key, address(right))) {
        LockOrder::LeftFirst => {
            let first = left.lock();
            let second = right.lock();
            PairGuard::Distinct(first, second)
        }
        LockOrder::RightFirst => {
            let first = right.lock();
            let second = left.lock();
            PairGuard::Distinct(second, first)
        }
        // Distinct addresses never compare equal
        LockOrder::Same => unreachable!("distinct mutexes share an address"),
    }
}

/// Lock every mutex in the set in global order
///
/// Uses the same (key, address) order as [`lock_pair`], so it can run
/// alongside concurrent pairwise acquisitions without deadlock. Repeated
/// mutexes are locked once. Guards are returned in acquisition order.
pub fn lock_all_ordered<'a, K, T, I>(items: I) -> Vec<(K, MutexGuard<'a, T>)>
where
    K: Ord + Copy,
    I: IntoIterator<Item = (K, &'a Mutex<T>)>,
{
    let mut ordered: Vec<(K, &'a Mutex<T>)> = items.into_iter().collect();
    ordered.sort_by(|a, b| (a.0, address(a.1)).cmp(&(b.0, address(b.1))));
    ordered.dedup_by(|a, b| std::ptr::eq(a.1, b.1));

    ordered
        .into_iter()
        .map(|(key, mutex)| (key, mutex.lock()))
        .collect()
}
