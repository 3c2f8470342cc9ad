/*!
 * Lock-Based Synchronization Primitives
 *
 * Ordered multi-lock acquisition over `parking_lot` mutexes
 */

mod ordered;

// Re-export public API
pub use ordered::{acquisition_order, lock_all_ordered, lock_pair, LockOrder, PairGuard};
