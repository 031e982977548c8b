/*!
 * Core Types
 * Common types used across the planner
 */

/// Byte count for size computations and allocation requests
pub type Size = usize;

/// Byte alignment for allocation requests; valid values are powers of two
pub type Alignment = usize;

/// Common result type for memory planning operations
pub type MemResult<T> = Result<T, super::errors::MemError>;
