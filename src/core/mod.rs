/*!
 * Core Module
 * Shared types, error taxonomy, and branch hints
 */

pub mod errors;
pub mod hints;
pub mod types;

// Re-export for convenience
pub use errors::MemError;
pub use types::{Alignment, MemResult, Size};
