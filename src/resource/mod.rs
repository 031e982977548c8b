/*!
 * Memory Resources
 * The allocator capability, its heap upstream, and the bounded resources
 * layered on top
 */

pub mod bump;
pub mod events;
pub mod heap;
pub mod instrument;
pub mod owned;
pub mod traits;

// Re-export for convenience
pub use bump::BumpResource;
pub use events::{AllocationEvent, AllocationObserver, AllocationOp, LogObserver};
pub use heap::{heap_resource, HeapResource};
pub use instrument::{InstrumentedResource, ResourceStats};
pub use owned::OwnedAlloc;
pub use traits::MemoryResource;
