/*!
 * Size Planning
 * Checked byte-footprint math for hash containers and aligned buffers
 */

pub mod hash;
pub mod layout;

// Re-export for convenience
pub use hash::{
    estimate_hash_map_storage, estimate_hash_set_storage, estimate_hash_storage,
    GROUP_CLONED_BYTES,
};
pub use layout::{align_offset_for, carve_aligned, plan_array_bytes};
