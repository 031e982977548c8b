/*!
 * Error Types
 * Failure taxonomy for size planning and allocation
 */

use thiserror::Error;

/// Memory planning errors
///
/// Every failure is reported synchronously at the call site; nothing here
/// is fatal to the process, and no operation recovers internally by
/// truncating a size or rounding down a count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemError {
    #[error("Arithmetic overflow computing {context}")]
    ArithmeticOverflow { context: &'static str },

    #[error("Allocation failure: requested {requested} bytes at alignment {alignment}")]
    AllocationFailure { requested: usize, alignment: usize },

    #[error("Alignment violation: {alignment} is not a power of two")]
    AlignmentViolation { alignment: usize },
}

impl MemError {
    /// True when a size computation exceeded the representable range
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::ArithmeticOverflow { .. })
    }

    /// True when an upstream allocator could not satisfy a request
    #[must_use]
    pub const fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }

    /// True when a requested alignment was rejected
    #[must_use]
    pub const fn is_alignment_violation(&self) -> bool {
        matches!(self, Self::AlignmentViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MemError::ArithmeticOverflow {
            context: "slot array",
        };
        assert_eq!(err.to_string(), "Arithmetic overflow computing slot array");

        let err = MemError::AllocationFailure {
            requested: 256,
            alignment: 64,
        };
        assert_eq!(
            err.to_string(),
            "Allocation failure: requested 256 bytes at alignment 64"
        );

        let err = MemError::AlignmentViolation { alignment: 3 };
        assert_eq!(
            err.to_string(),
            "Alignment violation: 3 is not a power of two"
        );
    }

    #[test]
    fn test_classification_helpers() {
        assert!(MemError::ArithmeticOverflow { context: "x" }.is_overflow());
        assert!(!MemError::AlignmentViolation { alignment: 3 }.is_overflow());
        assert!(MemError::AllocationFailure {
            requested: 1,
            alignment: 1
        }
        .is_allocation_failure());
        assert!(MemError::AlignmentViolation { alignment: 0 }.is_alignment_violation());
    }
}
