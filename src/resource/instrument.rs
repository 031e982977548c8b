/*!
 * Instrumented Resource
 * Byte-counting decorator over any memory resource
 */

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::ptr::NonNull;

use crate::core::{Alignment, MemResult, Size};

use super::events::{AllocationEvent, AllocationObserver, AllocationOp, LogObserver};
use super::traits::MemoryResource;

/// Decorator that counts requested bytes and emits one event per call.
///
/// Counters track requested sizes — what callers asked for, not what the
/// inner resource padded them to — and only ever grow. The request is
/// counted and the event emitted before forwarding, so a request the
/// inner resource then fails is still visible in diagnostics. Neither the
/// counters nor the observer influence the outcome of any call.
pub struct InstrumentedResource<'a> {
    name: String,
    inner: &'a dyn MemoryResource,
    observer: &'a dyn AllocationObserver,
    total_allocated: Cell<usize>,
    total_deallocated: Cell<usize>,
}

impl<'a> InstrumentedResource<'a> {
    /// Wrap `inner`, emitting events through the default [`LogObserver`].
    pub fn new(name: impl Into<String>, inner: &'a dyn MemoryResource) -> Self {
        static LOG: LogObserver = LogObserver;
        Self::with_observer(name, inner, &LOG)
    }

    /// Wrap `inner` with an injected observer.
    pub fn with_observer(
        name: impl Into<String>,
        inner: &'a dyn MemoryResource,
        observer: &'a dyn AllocationObserver,
    ) -> Self {
        Self {
            name: name.into(),
            inner,
            observer,
            total_allocated: Cell::new(0),
            total_deallocated: Cell::new(0),
        }
    }

    /// Name carried on every emitted event.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of requested bytes across every allocate call.
    #[must_use]
    pub fn total_allocated(&self) -> usize {
        self.total_allocated.get()
    }

    /// Sum of requested bytes across every deallocate call.
    #[must_use]
    pub fn total_deallocated(&self) -> usize {
        self.total_deallocated.get()
    }

    /// Snapshot of both counters.
    #[must_use]
    pub fn stats(&self) -> ResourceStats {
        ResourceStats {
            total_allocated: self.total_allocated.get(),
            total_deallocated: self.total_deallocated.get(),
        }
    }

    fn observe(&self, op: AllocationOp, bytes: usize) {
        self.observer.record(AllocationEvent {
            resource: &self.name,
            op,
            bytes,
        });
    }
}

impl MemoryResource for InstrumentedResource<'_> {
    fn allocate(&self, size: Size, align: Alignment) -> MemResult<NonNull<u8>> {
        self.total_allocated
            .set(self.total_allocated.get().saturating_add(size));
        self.observe(AllocationOp::Allocate, size);
        self.inner.allocate(size, align)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: Size, align: Alignment) {
        self.total_deallocated
            .set(self.total_deallocated.get().saturating_add(size));
        self.observe(AllocationOp::Deallocate, size);
        // SAFETY: the caller contract is forwarded verbatim to the inner
        // resource.
        unsafe { self.inner.deallocate(ptr, size, align) };
    }
}

/// Counter snapshot for an instrumented resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStats {
    pub total_allocated: usize,
    pub total_deallocated: usize,
}

impl ResourceStats {
    /// Bytes requested but not yet handed back.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.total_allocated.saturating_sub(self.total_deallocated)
    }
}
