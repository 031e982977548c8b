/*!
 * Hash Container Size Estimation
 * Ahead-of-population byte footprint for open-addressing tables
 */

use crate::containers::{map_slot_size, set_slot_size};
use crate::core::{MemError, MemResult};

/// Control bytes mirrored past the end of the table so group-wise probing
/// can scan a full block without wrapping.
///
/// This constant belongs to the probing scheme the estimate models
/// (group-scanned with lookahead). A table with a different probing scheme
/// needs its own overhead value.
pub const GROUP_CLONED_BYTES: usize = 15;

/// Estimate the backing storage for an open-addressing hash container
/// before it is populated.
///
/// Models a table that grows to capacities of form `2^k - 1` and keeps one
/// control byte per slot, a sentinel byte, and [`GROUP_CLONED_BYTES`] of
/// cloned tail ahead of the slot array. Knowing the footprint up front lets
/// callers reserve the container on a scratch buffer and bring the number
/// of heap allocations down to zero.
///
/// The result is an advisory upper bound for pre-allocation, not a
/// bit-exact footprint of every table revision.
///
/// # Panics
/// Panics if `slot_size` is zero.
///
/// # Errors
/// Returns `MemError::ArithmeticOverflow` when any intermediate value
/// exceeds `usize`.
pub fn estimate_hash_storage(slot_size: usize, element_count: usize) -> MemResult<usize> {
    assert!(slot_size > 0, "slot_size must be non-zero");

    // Round capacity up to the next 2^k - 1 by setting every bit below the
    // highest set bit. An empty table still reserves one slot.
    let capacity = if element_count == 0 {
        1
    } else {
        usize::MAX >> element_count.leading_zeros()
    };

    // One control byte per slot, a sentinel, and the cloned group tail.
    let control_bytes =
        capacity
            .checked_add(1 + GROUP_CLONED_BYTES)
            .ok_or(MemError::ArithmeticOverflow {
                context: "hash control bytes",
            })?;

    // The slot array starts at the next multiple of the slot size.
    let slot_offset =
        round_up_to_multiple(control_bytes, slot_size).ok_or(MemError::ArithmeticOverflow {
            context: "hash slot offset",
        })?;

    let slot_bytes = capacity
        .checked_mul(slot_size)
        .ok_or(MemError::ArithmeticOverflow {
            context: "hash slot array",
        })?;

    slot_offset
        .checked_add(slot_bytes)
        .ok_or(MemError::ArithmeticOverflow {
            context: "hash storage total",
        })
}

/// Estimate backing storage for an [`InlineHashSet`] holding
/// `element_count` values of type `T`.
///
/// [`InlineHashSet`]: crate::containers::InlineHashSet
#[inline]
pub fn estimate_hash_set_storage<T>(element_count: usize) -> MemResult<usize> {
    estimate_hash_storage(set_slot_size::<T>(), element_count)
}

/// Estimate backing storage for an [`InlineHashMap`] holding
/// `element_count` entries.
///
/// [`InlineHashMap`]: crate::containers::InlineHashMap
#[inline]
pub fn estimate_hash_map_storage<K, V>(element_count: usize) -> MemResult<usize> {
    estimate_hash_storage(map_slot_size::<K, V>(), element_count)
}

/// Round `n` up to the next multiple of `multiple`.
///
/// Works for any non-zero multiple, not just powers of two.
#[inline]
fn round_up_to_multiple(n: usize, multiple: usize) -> Option<usize> {
    debug_assert!(multiple > 0);
    let padded = n.checked_add(multiple - 1)?;
    Some(padded - padded % multiple)
}
