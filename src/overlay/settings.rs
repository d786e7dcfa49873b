//! Session settings for the OSD overlay.

use serde::Deserialize;

use crate::constants::{RENDER_LOOP_REFRESH_MS, TEXT_LINE_QUEUE_CAPACITY};
use crate::error::OsdError;
use crate::render::OverlayLayout;

/// Tunable parameters for an OSD session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OsdSettings {
    /// Interval between render-loop refresh ticks (ms).
    pub refresh_ms: u64,
    /// Decoded subtitle lines retained before the oldest entries drop.
    pub text_queue_capacity: usize,
    /// Renderer construction layout.
    pub layout: OverlayLayout,
}

impl Default for OsdSettings {
    fn default() -> Self {
        Self {
            refresh_ms: RENDER_LOOP_REFRESH_MS,
            text_queue_capacity: TEXT_LINE_QUEUE_CAPACITY,
            layout: OverlayLayout::default(),
        }
    }
}

impl OsdSettings {
    /// Parse settings from a JSON document.
    ///
    /// Absent fields fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self, OsdError> {
        serde_json::from_str(text).map_err(OsdError::from)
    }
}
