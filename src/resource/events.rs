/*!
 * Allocation Events
 * Injectable structured diagnostics for instrumented resources
 */

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an observed resource call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationOp {
    Allocate,
    Deallocate,
}

impl fmt::Display for AllocationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationOp::Allocate => write!(f, "allocate"),
            AllocationOp::Deallocate => write!(f, "deallocate"),
        }
    }
}

/// One observed allocate or deallocate call.
///
/// `bytes` is the requested size, before any padding or placement
/// decisions by the resource that served the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationEvent<'a> {
    /// Name of the instrumented resource that saw the call.
    pub resource: &'a str,
    /// Which operation was observed.
    pub op: AllocationOp,
    /// Requested bytes.
    pub bytes: usize,
}

/// Sink for allocation events.
///
/// Observers are injected into instrumented resources so diagnostics flow
/// to a destination the caller chose rather than a global stream. An
/// observer must not allocate from the resource it is observing.
pub trait AllocationObserver {
    /// Record one event.
    fn record(&self, event: AllocationEvent<'_>);
}

/// Default observer: forwards events to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl AllocationObserver for LogObserver {
    fn record(&self, event: AllocationEvent<'_>) {
        debug!("{} : {} : {} bytes", event.resource, event.op, event.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_display_matches_wire_names() {
        assert_eq!(AllocationOp::Allocate.to_string(), "allocate");
        assert_eq!(AllocationOp::Deallocate.to_string(), "deallocate");
    }
}
