/*!
 * Compiler Optimization Hints
 * Branch prediction hints for allocation hot paths
 */

/// Hint to the compiler that this branch is likely to be taken
///
/// On nightly with the `nightly` feature this maps to LLVM's `llvm.expect`
/// intrinsic; on stable the cold-function trick steers code layout the
/// same direction.
#[inline(always)]
#[must_use]
pub fn likely(b: bool) -> bool {
    #[cfg(feature = "nightly")]
    {
        core::intrinsics::likely(b)
    }
    #[cfg(not(feature = "nightly"))]
    {
        if !b {
            cold_path();
        }
        b
    }
}

/// Hint to the compiler that this branch is unlikely to be taken
///
/// Use for error paths and delegation fallbacks off the hot path.
#[inline(always)]
#[must_use]
pub fn unlikely(b: bool) -> bool {
    #[cfg(feature = "nightly")]
    {
        core::intrinsics::unlikely(b)
    }
    #[cfg(not(feature = "nightly"))]
    {
        if b {
            cold_path();
        }
        b
    }
}

/// Calling a cold function from a branch marks that branch unlikely
#[cold]
#[inline(never)]
#[cfg(not(feature = "nightly"))]
fn cold_path() {}

/// Prevent the compiler from optimizing away or const-folding a value
pub use std::hint::black_box;
