/*!
 * Hybrid Stack/Heap Scratch Buffers
 * Frame-bounded placement for small temporaries with transparent heap fallback
 */

use log::trace;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::core::MemResult;
use crate::sizing::layout::{carve_aligned, plan_array_bytes};

use super::pad::{exceeds_stack_limit, ScratchPad};

/// Scratch storage for one allocation request.
///
/// `Stack` borrows a caller-frame [`ScratchPad`], so the region cannot
/// outlive the acquiring frame; moving it out of that scope is a borrow
/// error. `Heap` owns its storage and may outlive the frame. Contents are
/// never initialized by this type.
#[derive(Debug)]
pub enum ScratchBuffer<'frame> {
    /// Carved from a caller-frame pad.
    Stack(&'frame mut [MaybeUninit<u8>]),
    /// Independently owned allocation, freed on drop.
    Heap(Box<[MaybeUninit<u8>]>),
}

impl<'frame> ScratchBuffer<'frame> {
    /// Place a `size`-byte scratch request.
    ///
    /// Requests up to [`SCRATCH_STACK_LIMIT`](super::pad::SCRATCH_STACK_LIMIT)
    /// bytes are carved from `pad`; larger ones get an owned heap buffer of
    /// exactly `size` bytes. No initialization is performed either way.
    pub fn acquire(pad: &'frame mut ScratchPad, size: usize) -> Self {
        if exceeds_stack_limit(size) {
            Self::heap(size)
        } else {
            Self::Stack(&mut pad.as_uninit_slice_mut()[..size])
        }
    }

    /// Place scratch for `count` elements of `element_size` bytes, with
    /// headroom so an `alignment`-aligned array region can be carved from
    /// it afterwards via [`aligned_region`](Self::aligned_region).
    ///
    /// # Errors
    /// Propagates the planner's overflow and alignment failures.
    pub fn acquire_planned(
        pad: &'frame mut ScratchPad,
        count: usize,
        element_size: usize,
        alignment: usize,
    ) -> MemResult<Self> {
        let total = plan_array_bytes(count, element_size, alignment)?;
        Ok(Self::acquire(pad, total))
    }

    /// Owned heap scratch of exactly `size` bytes.
    #[must_use]
    pub fn heap(size: usize) -> Self {
        trace!("placing {size} byte scratch region on the heap");
        Self::Heap(Box::new_uninit_slice(size))
    }

    /// Raw pointer to the start of the region.
    #[inline]
    pub fn data_pointer(&mut self) -> NonNull<u8> {
        let ptr = self.as_uninit_slice_mut().as_mut_ptr().cast::<u8>();
        // SAFETY: slice pointers are non-null even for empty slices.
        unsafe { NonNull::new_unchecked(ptr) }
    }

    /// Usable bytes in the region.
    #[inline]
    #[must_use]
    pub fn capacity_in_bytes(&self) -> usize {
        match self {
            Self::Stack(region) => region.len(),
            Self::Heap(buf) => buf.len(),
        }
    }

    /// The whole region as an uninitialized byte slice.
    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<u8>] {
        match self {
            Self::Stack(region) => region,
            Self::Heap(buf) => &mut buf[..],
        }
    }

    /// First `align`-aligned `size`-byte sub-region, or `None` when the
    /// region is too short for one.
    pub fn aligned_region(
        &mut self,
        size: usize,
        align: usize,
    ) -> Option<&mut [MaybeUninit<u8>]> {
        carve_aligned(self.as_uninit_slice_mut(), size, align)
    }

    /// True when the region lives on the caller's frame.
    #[must_use]
    pub fn is_stack(&self) -> bool {
        matches!(self, Self::Stack(_))
    }

    /// True when the region owns heap storage.
    #[must_use]
    pub fn is_heap(&self) -> bool {
        matches!(self, Self::Heap(_))
    }
}

/// Run `f` with scratch storage for `size` bytes.
///
/// The pad for small requests lives on this function's frame, so the
/// closure receives a region it structurally cannot store elsewhere; large
/// requests skip the pad and go straight to the heap.
#[inline]
pub fn with_scratch<R, F>(size: usize, f: F) -> R
where
    F: for<'frame> FnOnce(ScratchBuffer<'frame>) -> R,
{
    if exceeds_stack_limit(size) {
        f(ScratchBuffer::heap(size))
    } else {
        let mut pad = ScratchPad::new();
        f(ScratchBuffer::acquire(&mut pad, size))
    }
}

#[cfg(test)]
mod tests {
    use super::super::pad::SCRATCH_STACK_LIMIT;
    use super::*;

    #[test]
    fn test_acquire_places_by_threshold() {
        let mut pad = ScratchPad::new();
        let buf = ScratchBuffer::acquire(&mut pad, SCRATCH_STACK_LIMIT);
        assert!(buf.is_stack());
        assert_eq!(buf.capacity_in_bytes(), SCRATCH_STACK_LIMIT);

        let mut pad = ScratchPad::new();
        let buf = ScratchBuffer::acquire(&mut pad, SCRATCH_STACK_LIMIT + 1);
        assert!(buf.is_heap());
        assert_eq!(buf.capacity_in_bytes(), SCRATCH_STACK_LIMIT + 1);
    }

    #[test]
    fn test_with_scratch_returns_closure_result() {
        let sum = with_scratch(64, |mut buf| {
            let region = buf.as_uninit_slice_mut();
            for (i, slot) in region.iter_mut().enumerate() {
                slot.write(i as u8);
            }
            region.len()
        });
        assert_eq!(sum, 64);
    }

    #[test]
    fn test_aligned_region_within_planned_scratch() {
        let mut pad = ScratchPad::new();
        let mut buf = ScratchBuffer::acquire_planned(&mut pad, 8, 8, 64).unwrap();
        let region = buf.aligned_region(64, 64).unwrap();
        assert_eq!(region.as_ptr() as usize % 64, 0);
        assert_eq!(region.len(), 64);
    }
}
