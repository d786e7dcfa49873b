//! Liveness guard for the render thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Guard that keeps `thread_stopped` in sync with render-thread lifetime.
pub(super) struct RenderThreadGuard {
    stopped: Arc<AtomicBool>,
}

impl RenderThreadGuard {
    /// Mark the thread as running.
    pub(super) fn new(stopped: Arc<AtomicBool>) -> Self {
        stopped.store(false, Ordering::SeqCst);
        Self { stopped }
    }
}

impl Drop for RenderThreadGuard {
    fn drop(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}
