/*!
 * Heap Resource
 * Global-allocator upstream for bounded resources
 */

use log::error;
use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

use crate::core::{Alignment, MemError, MemResult, Size};

use super::traits::MemoryResource;

/// The process heap as a [`MemoryResource`].
///
/// Stateless wrapper over the global allocator and the default upstream
/// for every bounded resource in this crate. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapResource;

/// The process-wide heap resource instance.
#[must_use]
pub fn heap_resource() -> &'static HeapResource {
    static HEAP: HeapResource = HeapResource;
    &HEAP
}

fn layout_for(size: Size, align: Alignment) -> MemResult<Layout> {
    if !align.is_power_of_two() {
        return Err(MemError::AlignmentViolation { alignment: align });
    }
    // Rejects sizes that would overflow when padded to the alignment.
    Layout::from_size_align(size, align).map_err(|_| MemError::ArithmeticOverflow {
        context: "heap allocation layout",
    })
}

impl MemoryResource for HeapResource {
    fn allocate(&self, size: Size, align: Alignment) -> MemResult<NonNull<u8>> {
        let layout = layout_for(size, align)?;
        if size == 0 {
            // The global allocator rejects zero-size layouts; hand out a
            // dangling aligned pointer instead.
            // SAFETY: a power-of-two alignment is a non-zero address.
            return Ok(unsafe { NonNull::new_unchecked(align as *mut u8) });
        }

        // SAFETY: the layout has non-zero size.
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr).ok_or_else(|| {
            error!("heap allocation failed: {size} bytes at alignment {align}");
            MemError::AllocationFailure {
                requested: size,
                alignment: align,
            }
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: Size, align: Alignment) {
        // Zero-size pointers are dangling and were never allocated.
        if size == 0 {
            return;
        }
        // SAFETY: caller contract guarantees ptr came from allocate(size,
        // align), so the layout reconstructs exactly.
        unsafe { dealloc(ptr.as_ptr(), Layout::from_size_align_unchecked(size, align)) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_respects_alignment() {
        let heap = heap_resource();
        for align in [1usize, 2, 8, 64, 4096] {
            let ptr = heap.allocate(128, align).unwrap();
            assert_eq!(ptr.as_ptr() as usize % align, 0);
            unsafe { heap.deallocate(ptr, 128, align) };
        }
    }

    #[test]
    fn test_zero_size_is_dangling() {
        let heap = heap_resource();
        let ptr = heap.allocate(0, 16).unwrap();
        assert_eq!(ptr.as_ptr() as usize % 16, 0);
        unsafe { heap.deallocate(ptr, 0, 16) };
    }

    #[test]
    fn test_rejects_bad_alignment() {
        let heap = heap_resource();
        assert_eq!(
            heap.allocate(64, 3),
            Err(MemError::AlignmentViolation { alignment: 3 })
        );
    }

    #[test]
    fn test_oversized_layout_fails_closed() {
        let heap = heap_resource();
        let err = heap.allocate(usize::MAX, 4096).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_equal_only_to_itself() {
        let heap = heap_resource();
        let mut buf = vec![std::mem::MaybeUninit::<u8>::uninit(); 16];
        let bump = crate::resource::bump::BumpResource::with_default_upstream(&mut buf);
        assert!(heap.is_equal(heap));
        assert!(!heap.is_equal(&bump));
        assert!(!bump.is_equal(heap));
    }
}
