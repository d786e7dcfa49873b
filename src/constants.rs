//! Shared constants for overlay defaults.

/// Interval between render-loop refresh ticks (ms).
///
/// The displayed position can lag the playback clock by up to this much,
/// and stop/toggle requests are observed within the same bound.
pub const RENDER_LOOP_REFRESH_MS: u64 = 500;

/// Decoded subtitle text lines retained per session before the oldest
/// entries are dropped.
pub const TEXT_LINE_QUEUE_CAPACITY: usize = 32;
