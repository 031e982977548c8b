/*!
 * Size Planning Tests
 * Estimator layout vectors and planner overflow behavior
 */

use pretty_assertions::assert_eq;
use tensor_mem::sizing::{
    estimate_hash_map_storage, estimate_hash_set_storage, estimate_hash_storage, plan_array_bytes,
};
use tensor_mem::{map_slot_size, set_slot_size, MemError};

#[test]
fn test_known_layout_vectors() {
    // slot 8, one element: capacity 1, control 1+1+15=17, offset 24.
    assert_eq!(estimate_hash_storage(8, 1), Ok(32));
    // slot 16, five elements: capacity 7, control 23, offset 32.
    assert_eq!(estimate_hash_storage(16, 5), Ok(144));
}

#[test]
fn test_empty_table_reserves_one_slot() {
    for slot_size in [1usize, 4, 8, 16, 24, 64] {
        assert_eq!(
            estimate_hash_storage(slot_size, 0),
            estimate_hash_storage(slot_size, 1),
            "slot_size {slot_size}"
        );
    }
}

#[test]
fn test_capacity_rounds_to_all_ones() {
    // Counts sharing an all-ones capacity share an estimate; crossing a
    // power of two jumps it.
    assert_eq!(estimate_hash_storage(8, 5), estimate_hash_storage(8, 7));
    assert!(estimate_hash_storage(8, 7).unwrap() < estimate_hash_storage(8, 8).unwrap());
    assert_eq!(estimate_hash_storage(8, 8), estimate_hash_storage(8, 15));

    // capacity 15: control 15+16=31, offset 32, slots 120.
    assert_eq!(estimate_hash_storage(8, 8), Ok(152));
}

#[test]
fn test_estimate_monotonic_over_small_range() {
    for slot_size in [1usize, 3, 8, 16] {
        let mut prev = 0;
        for n in 0..200 {
            let estimate = estimate_hash_storage(slot_size, n).unwrap();
            assert!(
                estimate >= prev,
                "estimate regressed at slot_size {slot_size}, n {n}"
            );
            prev = estimate;
        }
    }
}

#[test]
fn test_estimate_covers_raw_slot_storage() {
    for slot_size in [1usize, 8, 16, 40] {
        for n in [0usize, 1, 2, 7, 8, 100, 4096] {
            let estimate = estimate_hash_storage(slot_size, n).unwrap();
            assert!(estimate >= n * slot_size);
        }
    }
}

#[test]
fn test_odd_slot_sizes_round_offset_to_multiple() {
    // slot 24, one element: control 17 rounds to 24, plus one slot.
    assert_eq!(estimate_hash_storage(24, 1), Ok(48));
    // slot 5, one element: control 17 rounds to 20, plus one slot.
    assert_eq!(estimate_hash_storage(5, 1), Ok(25));
}

#[test]
fn test_estimate_overflow_fails_closed() {
    let err = estimate_hash_storage(8, usize::MAX).unwrap_err();
    assert!(err.is_overflow());

    let err = estimate_hash_storage(usize::MAX, 2).unwrap_err();
    assert!(err.is_overflow());
}

#[test]
fn test_typed_wrappers_match_slot_sizes() {
    assert_eq!(
        estimate_hash_set_storage::<u64>(100),
        estimate_hash_storage(set_slot_size::<u64>(), 100)
    );
    assert_eq!(
        estimate_hash_map_storage::<u32, u32>(100),
        estimate_hash_storage(map_slot_size::<u32, u32>(), 100)
    );
    // Zero-sized slots are charged one byte, not rejected.
    assert_eq!(
        estimate_hash_set_storage::<()>(10),
        estimate_hash_storage(1, 10)
    );
}

#[test]
fn test_plan_array_bytes_adds_headroom() {
    assert_eq!(plan_array_bytes(10, 4, 8), Ok(47));
    assert_eq!(plan_array_bytes(0, 16, 64), Ok(63));
    assert_eq!(plan_array_bytes(1, 1, 1), Ok(1));
}

#[test]
fn test_plan_rejects_non_power_of_two_alignment() {
    assert_eq!(
        plan_array_bytes(16, 4, 3),
        Err(MemError::AlignmentViolation { alignment: 3 })
    );
    assert_eq!(
        plan_array_bytes(16, 4, 0),
        Err(MemError::AlignmentViolation { alignment: 0 })
    );
}

#[test]
fn test_plan_overflow_fails_closed() {
    let err = plan_array_bytes(usize::MAX / 2, usize::MAX / 2, 64).unwrap_err();
    assert!(err.is_overflow());

    // The payload fits but the alignment headroom does not.
    let err = plan_array_bytes(usize::MAX, 1, 64).unwrap_err();
    assert!(err.is_overflow());
}
