/*!
 * Aligned Allocation Planning
 * Checked size math for carving aligned regions out of raw byte spans
 */

use crate::core::{MemError, MemResult};
use std::mem::MaybeUninit;

/// Total bytes to request so that an `alignment`-aligned region of
/// `count * element_size` bytes can be carved out of ANY raw allocation of
/// the returned length, regardless of the raw buffer's own alignment.
///
/// # Errors
/// `MemError::AlignmentViolation` when `alignment` is not a power of two,
/// before any arithmetic. `MemError::ArithmeticOverflow` when the total
/// exceeds `usize`; callers must treat that as "cannot satisfy", never
/// degrade the request.
pub fn plan_array_bytes(count: usize, element_size: usize, alignment: usize) -> MemResult<usize> {
    if !alignment.is_power_of_two() {
        return Err(MemError::AlignmentViolation { alignment });
    }

    let payload = count
        .checked_mul(element_size)
        .ok_or(MemError::ArithmeticOverflow {
            context: "array byte size",
        })?;

    payload
        .checked_add(alignment - 1)
        .ok_or(MemError::ArithmeticOverflow {
            context: "alignment headroom",
        })
}

/// Bytes to advance `addr` to the next multiple of `align`.
///
/// `align` must be a power of two.
#[inline]
#[must_use]
pub fn align_offset_for(addr: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    addr.wrapping_neg() & (align - 1)
}

/// Carve the first `align`-aligned `size`-byte sub-span out of `span`.
///
/// Returns `None` when the span is too short to hold an aligned region of
/// that size. A span sized by [`plan_array_bytes`] always carves
/// successfully. `align` must be a power of two.
pub fn carve_aligned(
    span: &mut [MaybeUninit<u8>],
    size: usize,
    align: usize,
) -> Option<&mut [MaybeUninit<u8>]> {
    debug_assert!(align.is_power_of_two());

    let offset = align_offset_for(span.as_ptr() as usize, align);
    let end = offset.checked_add(size)?;
    if end > span.len() {
        return None;
    }
    Some(&mut span[offset..end])
}
