/*!
 * Core Module
 * Fundamental types, error handling and lock ordering
 */

pub mod env;
pub mod errors;
pub mod id;
pub mod sync;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use types::*;
