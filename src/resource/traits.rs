/*!
 * Resource Traits
 * The allocator capability bounded resources wrap and serve
 */

use crate::core::{Alignment, MemResult, Size};
use std::ptr::NonNull;

/// Memory resource interface: size and alignment in, pointer out.
///
/// Implementations take `&self` and keep any bookkeeping behind interior
/// mutability; the stateful resources in this crate use [`Cell`] and are
/// therefore `!Sync`, matching their single-owner, frame-scoped model.
/// Sharing one instance across threads is a compile error, not a data
/// race.
///
/// [`Cell`]: std::cell::Cell
pub trait MemoryResource {
    /// Allocate `size` bytes aligned to `align`.
    ///
    /// Returned pointers always satisfy `address % align == 0`. Zero-size
    /// requests succeed with a dangling, aligned pointer that must not be
    /// dereferenced.
    ///
    /// # Errors
    /// `AlignmentViolation` when `align` is not a power of two, rejected
    /// before any allocation attempt; `AllocationFailure` when storage
    /// cannot be obtained. Failures propagate to the caller unchanged —
    /// a request is never retried or downgraded to a smaller size.
    fn allocate(&self, size: Size, align: Alignment) -> MemResult<NonNull<u8>>;

    /// Return an allocation previously obtained from this resource.
    ///
    /// # Safety
    /// `ptr` must come from an `allocate(size, align)` call on this
    /// resource (or one it delegated to) with the same `size` and `align`,
    /// and must not be used after this call.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: Size, align: Alignment);

    /// True only when `other` is this very instance.
    ///
    /// Two distinct resources are never interchangeable, even when
    /// configured identically, because they manage distinct storage.
    fn is_equal(&self, other: &dyn MemoryResource) -> bool {
        std::ptr::addr_eq(self as *const Self, other as *const dyn MemoryResource)
    }
}
