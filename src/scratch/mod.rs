/*!
 * Hybrid Scratch Allocation
 * Stack-first placement for bounded temporaries with heap fallback
 */

pub mod buffer;
pub mod pad;

// Re-export for convenience
pub use buffer::{with_scratch, ScratchBuffer};
pub use pad::{exceeds_stack_limit, ScratchPad, SmallBuffer, SCRATCH_STACK_LIMIT};
