/*!
 * Fixed-Size Frame Pads
 * Caller-frame storage that stack scratch regions are carved from
 */

use std::mem::MaybeUninit;

/// Largest request served from a caller-frame pad; anything bigger is
/// placed on the heap.
pub const SCRATCH_STACK_LIMIT: usize = 4 * 1024;

/// True when a request of `size` bytes must be placed on the heap.
#[inline]
#[must_use]
pub fn exceeds_stack_limit(size: usize) -> bool {
    size > SCRATCH_STACK_LIMIT
}

/// Fixed-capacity uninitialized buffer meant to live on the caller's frame.
///
/// The storage is never initialized by this type; callers write before
/// they read, usually through a scratch region carved from the buffer.
pub struct SmallBuffer<T, const N: usize> {
    storage: [MaybeUninit<T>; N],
}

impl<T, const N: usize> SmallBuffer<T, N> {
    /// Create an uninitialized buffer.
    #[inline]
    pub fn new() -> Self {
        Self {
            // SAFETY: an array of MaybeUninit is valid in any byte state.
            storage: unsafe { MaybeUninit::uninit().assume_init() },
        }
    }

    /// Number of element slots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// True when the buffer has no slots.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Byte footprint of the element storage.
    #[inline]
    #[must_use]
    pub const fn size_in_bytes(&self) -> usize {
        N * std::mem::size_of::<T>()
    }

    /// Raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr().cast()
    }

    /// The storage as an uninitialized slice.
    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.storage
    }
}

impl<T, const N: usize> Default for SmallBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte pad sized to the stack limit, the backing store for stack scratch
/// regions.
pub type ScratchPad = SmallBuffer<u8, SCRATCH_STACK_LIMIT>;
