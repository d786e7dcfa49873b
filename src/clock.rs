//! Playback clock collaborator for the render loop.

use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Source of the current media time.
///
/// The OSD borrows a shared clock handle for the lifetime of an open
/// session and queries it once per render iteration.
pub trait MediaClock: Send + Sync {
    /// Current media time in milliseconds.
    fn media_time_ms(&self) -> i64;
}

/// Pause-aware playback clock.
///
/// Time advances from a base position anchored to an [`Instant`]; pausing
/// freezes the reported position until `play` re-anchors it.
#[derive(Clone)]
pub struct PlaybackClock {
    inner: Arc<Mutex<ClockInner>>,
}

struct ClockInner {
    base_pts_ms: i64,
    base_instant: Instant,
    paused: bool,
    paused_at_ms: i64,
}

impl PlaybackClock {
    /// Create a clock paused at position zero.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ClockInner {
                base_pts_ms: 0,
                base_instant: Instant::now(),
                paused: true,
                paused_at_ms: 0,
            })),
        }
    }

    /// Current playback position in milliseconds.
    pub fn now_ms(&self) -> i64 {
        let inner = self.inner.lock().unwrap();
        Self::now_locked(&inner)
    }

    /// Jump to the given position without changing the paused state.
    pub fn seek(&self, pts_ms: i64) {
        let mut inner = self.inner.lock().unwrap();
        inner.base_pts_ms = pts_ms;
        inner.base_instant = Instant::now();
        inner.paused_at_ms = pts_ms;
    }

    /// Resume advancing from the paused position.
    pub fn play(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.paused {
            inner.base_pts_ms = inner.paused_at_ms;
            inner.base_instant = Instant::now();
            inner.paused = false;
        }
    }

    /// Freeze the reported position.
    pub fn pause(&self) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.paused {
            inner.paused_at_ms = Self::now_locked(&inner);
            inner.paused = true;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.inner.lock().unwrap().paused
    }

    fn now_locked(inner: &ClockInner) -> i64 {
        if inner.paused {
            inner.paused_at_ms
        } else {
            inner.base_pts_ms + inner.base_instant.elapsed().as_millis() as i64
        }
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaClock for PlaybackClock {
    fn media_time_ms(&self) -> i64 {
        self.now_ms()
    }
}
