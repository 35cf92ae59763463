//! Cookbook event emitter port.
//!
//! This port abstracts progress reporting so the download pipeline can emit
//! events without knowing whether they end up on a terminal, in a log, or
//! nowhere at all.

use crate::events::CookbookEvent;

/// Port for emitting cookbook download events.
///
/// Implementations must not block; the pipeline calls `emit` inline between
/// transfers.
pub trait CookbookEventEmitter: Send + Sync {
    /// Emit a cookbook event.
    fn emit(&self, event: CookbookEvent);
}

/// A no-op emitter for tests and library callers that do not need progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCookbookEmitter;

impl NoopCookbookEmitter {
    /// Create a new no-op emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CookbookEventEmitter for NoopCookbookEmitter {
    fn emit(&self, _event: CookbookEvent) {
        // Intentionally do nothing
    }
}
