/*!
 * Tensor Memory Planning Library
 * Hash-container footprint estimation, hybrid stack-or-heap scratch
 * buffers, and bump allocation resources for tensor runtime hot paths
 */

#![cfg_attr(feature = "nightly", feature(core_intrinsics))]

pub mod containers;
pub mod core;
pub mod resource;
pub mod scratch;
pub mod sizing;

// Re-exports
pub use self::core::{MemError, MemResult};
pub use containers::{map_slot_size, set_slot_size, InlineHashMap, InlineHashSet, InlineVec};
pub use resource::{
    heap_resource, AllocationEvent, AllocationObserver, AllocationOp, BumpResource, HeapResource,
    InstrumentedResource, LogObserver, MemoryResource, OwnedAlloc, ResourceStats,
};
pub use scratch::{
    exceeds_stack_limit, with_scratch, ScratchBuffer, ScratchPad, SmallBuffer, SCRATCH_STACK_LIMIT,
};
pub use sizing::{
    estimate_hash_map_storage, estimate_hash_set_storage, estimate_hash_storage, plan_array_bytes,
    GROUP_CLONED_BYTES,
};
