/*!
 * Bump Resource
 * Monotonic allocation over a borrowed buffer with upstream fallback
 */

use log::trace;
use std::cell::Cell;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::core::hints::{likely, unlikely};
use crate::core::{Alignment, MemError, MemResult, Size};
use crate::sizing::layout::align_offset_for;

use super::heap::heap_resource;
use super::traits::MemoryResource;

/// Bump allocator over a borrowed byte span.
///
/// Serves requests by advancing a cursor through the span. Local
/// deallocation is a no-op — the span is reclaimed all at once by
/// [`reset`](Self::reset) or when the resource is dropped. A request that
/// does not fit the remaining span is delegated entirely to the upstream
/// resource; a single request is never split across the two stores, so
/// every pointer has exactly one owner to hand it back to.
///
/// The resource borrows the span for `'buf` and cannot outlive it.
pub struct BumpResource<'buf> {
    base: NonNull<u8>,
    capacity: usize,
    used: Cell<usize>,
    upstream: &'buf dyn MemoryResource,
    /// Holds the unique borrow of the span for the resource's lifetime.
    _buffer: PhantomData<&'buf mut [MaybeUninit<u8>]>,
}

impl<'buf> BumpResource<'buf> {
    /// Wrap `buffer` as bump storage with an explicit upstream.
    pub fn new(buffer: &'buf mut [MaybeUninit<u8>], upstream: &'buf dyn MemoryResource) -> Self {
        let capacity = buffer.len();
        // SAFETY: slice pointers are non-null even for empty slices.
        let base = unsafe { NonNull::new_unchecked(buffer.as_mut_ptr().cast::<u8>()) };
        Self {
            base,
            capacity,
            used: Cell::new(0),
            upstream,
            _buffer: PhantomData,
        }
    }

    /// Wrap `buffer` with the process heap as upstream.
    pub fn with_default_upstream(buffer: &'buf mut [MaybeUninit<u8>]) -> Self {
        Self::new(buffer, heap_resource())
    }

    /// The resource consulted when the span cannot satisfy a request.
    #[must_use]
    pub fn upstream(&self) -> &dyn MemoryResource {
        self.upstream
    }

    /// Bytes in the borrowed span.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes consumed from the span, alignment padding included.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used.get()
    }

    /// Bytes still available in the span.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.used.get()
    }

    /// Rewind the cursor, reclaiming every local allocation at once.
    ///
    /// Pointers previously served from the span must not be used after
    /// this call. Upstream allocations are untouched and remain the
    /// caller's to return.
    pub fn reset(&self) {
        trace!("bump reset: reclaiming {} bytes", self.used.get());
        self.used.set(0);
    }

    /// True when `ptr` points into the borrowed span.
    fn contains(&self, ptr: NonNull<u8>) -> bool {
        let addr = ptr.as_ptr() as usize;
        let base = self.base.as_ptr() as usize;
        addr >= base && addr < base + self.capacity
    }
}

impl MemoryResource for BumpResource<'_> {
    fn allocate(&self, size: Size, align: Alignment) -> MemResult<NonNull<u8>> {
        if unlikely(!align.is_power_of_two()) {
            return Err(MemError::AlignmentViolation { alignment: align });
        }
        if unlikely(size == 0) {
            // Zero-size requests never move the cursor or touch upstream;
            // any aligned dangling pointer will do.
            // SAFETY: a power-of-two alignment is a non-zero address.
            return Ok(unsafe { NonNull::new_unchecked(align as *mut u8) });
        }

        let used = self.used.get();
        let padding = align_offset_for(self.base.as_ptr() as usize + used, align);

        if let Some(needed) = padding.checked_add(size) {
            if likely(needed <= self.capacity - used) {
                self.used.set(used + needed);
                // SAFETY: used + padding < used + needed <= capacity, so
                // the offset pointer stays inside the borrowed span.
                let ptr = unsafe { self.base.as_ptr().add(used + padding) };
                // SAFETY: offsetting a non-null base within its span stays
                // non-null.
                return Ok(unsafe { NonNull::new_unchecked(ptr) });
            }
        }

        // Insufficient room: the whole request goes upstream, never a
        // local slice plus an upstream remainder.
        trace!(
            "bump span exhausted ({} of {} bytes used), delegating {size} bytes upstream",
            used,
            self.capacity,
        );
        self.upstream.allocate(size, align)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: Size, align: Alignment) {
        // Local memory is reclaimed only by reset() or drop; zero-size
        // pointers are dangling and were never allocated.
        if size == 0 || self.contains(ptr) {
            return;
        }
        // SAFETY: a non-local pointer was served by our upstream with the
        // caller's size and alignment; forward it verbatim.
        unsafe { self.upstream.deallocate(ptr, size, align) };
    }
}
