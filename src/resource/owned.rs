/*!
 * Owned Allocations
 * RAII guard pairing an allocation with the resource that served it
 */

use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::core::{Alignment, MemError, MemResult, Size};

use super::traits::MemoryResource;

/// An allocation that hands itself back to its resource on drop.
///
/// Carries the pointer together with the resource, size, and alignment it
/// was obtained with, so the deallocate call is always well-formed and
/// happens exactly once.
pub struct OwnedAlloc<'r> {
    resource: &'r dyn MemoryResource,
    ptr: NonNull<u8>,
    size: Size,
    align: Alignment,
}

impl std::fmt::Debug for OwnedAlloc<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedAlloc")
            .field("ptr", &self.ptr)
            .field("size", &self.size)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

impl<'r> OwnedAlloc<'r> {
    /// Allocate `size` bytes at `align` from `resource`.
    ///
    /// # Errors
    /// Propagates the resource's alignment and allocation failures.
    pub fn new(resource: &'r dyn MemoryResource, size: Size, align: Alignment) -> MemResult<Self> {
        let ptr = resource.allocate(size, align)?;
        Ok(Self {
            resource,
            ptr,
            size,
            align,
        })
    }

    /// Allocate storage for `count` elements of `element_size` bytes.
    ///
    /// The resource aligns natively, so no carving headroom is added; only
    /// the element arithmetic is checked.
    ///
    /// # Errors
    /// `ArithmeticOverflow` when `count * element_size` exceeds `usize`,
    /// plus the resource's own failures.
    pub fn for_array(
        resource: &'r dyn MemoryResource,
        count: usize,
        element_size: usize,
        align: Alignment,
    ) -> MemResult<Self> {
        let size = count
            .checked_mul(element_size)
            .ok_or(MemError::ArithmeticOverflow {
                context: "owned array size",
            })?;
        Self::new(resource, size, align)
    }

    /// Pointer to the first byte.
    #[must_use]
    pub fn as_ptr(&self) -> NonNull<u8> {
        self.ptr
    }

    /// Allocation size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// True for zero-size allocations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Alignment the allocation was made with.
    #[must_use]
    pub const fn align(&self) -> usize {
        self.align
    }

    /// The allocation as an uninitialized byte slice.
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<u8>] {
        // SAFETY: the guard uniquely owns `size` bytes at `ptr` until drop.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.size) }
    }
}

impl Drop for OwnedAlloc<'_> {
    fn drop(&mut self) {
        // SAFETY: ptr came from this resource with this size and
        // alignment, and the guard is its only owner.
        unsafe { self.resource.deallocate(self.ptr, self.size, self.align) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::heap::heap_resource;

    #[test]
    fn test_owned_alloc_is_aligned_and_writable() {
        let heap = heap_resource();
        let mut owned = OwnedAlloc::new(heap, 64, 64).unwrap();
        assert_eq!(owned.as_ptr().as_ptr() as usize % 64, 0);
        assert_eq!(owned.len(), 64);
        assert!(!owned.is_empty());

        for slot in owned.as_uninit_slice_mut() {
            slot.write(0xAB);
        }
    }

    #[test]
    fn test_for_array_checks_overflow() {
        let heap = heap_resource();
        let err = OwnedAlloc::for_array(heap, usize::MAX, 2, 8).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_for_array_sizes_elements() {
        let heap = heap_resource();
        let owned = OwnedAlloc::for_array(heap, 12, 8, 16).unwrap();
        assert_eq!(owned.len(), 96);
        assert_eq!(owned.align(), 16);
    }
}
