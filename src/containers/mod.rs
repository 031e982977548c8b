/*!
 * Inline Containers
 * Aliases for the containers the size estimator models
 */

use smallvec::SmallVec;

/// Vector with `N` elements of inline storage before spilling to the heap.
pub type InlineVec<T, const N: usize> = SmallVec<[T; N]>;

/// Open-addressing hash set with the crate's default hasher.
pub type InlineHashSet<T> = ahash::AHashSet<T>;

/// Open-addressing hash map with the crate's default hasher.
pub type InlineHashMap<K, V> = ahash::AHashMap<K, V>;

/// Slot size an [`InlineHashSet`] of `T` feeds the estimator.
///
/// Zero-sized types are charged one byte per slot.
#[must_use]
pub const fn set_slot_size<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        1
    } else {
        size
    }
}

/// Slot size an [`InlineHashMap`] of `K -> V` feeds the estimator, using
/// the packed `(K, V)` pair as the slot type.
#[must_use]
pub const fn map_slot_size<K, V>() -> usize {
    let size = std::mem::size_of::<(K, V)>();
    if size == 0 {
        1
    } else {
        size
    }
}
