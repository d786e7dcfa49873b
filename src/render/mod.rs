//! Renderer collaborator seam for the overlay.
//!
//! Font loading, glyph rasterization, and pixel compositing live behind
//! [`TextRenderer`]; the render loop only prepares lines and shows or hides
//! the prepared content.

use std::path::Path;

use serde::Deserialize;

use crate::error::OsdError;

/// Construction-time layout for an overlay renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlayLayout {
    /// Prepared line sets the renderer may hold at once.
    pub buffer_size: usize,
    /// Fractional horizontal screen offset.
    pub x: f32,
    /// Fractional vertical screen offset.
    pub y: f32,
    pub centered: bool,
    /// Text brightness byte.
    pub white_level: u8,
    /// Background box opacity byte.
    pub box_opacity: u8,
    pub max_lines: usize,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            buffer_size: 1,
            x: 0.0,
            y: 0.8,
            centered: false,
            white_level: 0xDD,
            box_opacity: 0x80,
            max_lines: 1,
        }
    }
}

/// Text renderer driven by the render loop.
///
/// A renderer instance is owned by exactly one render thread for its whole
/// lifetime. Dropping it must remove any content it still has on screen;
/// the loop relies on this when exiting without a final `hide`.
pub trait TextRenderer: Send {
    /// Lay out the given lines as the next content to display.
    fn prepare(&mut self, lines: &[String]) -> Result<(), OsdError>;

    /// Display the most recently prepared content.
    fn show_next(&mut self) -> Result<(), OsdError>;

    /// Discard prepared but not yet shown content.
    fn unprepare(&mut self);

    /// Remove the overlay from the screen.
    fn hide(&mut self) -> Result<(), OsdError>;
}

/// Factory constructing a renderer on the render thread.
///
/// Construction failures (a missing font file, an unavailable display
/// surface) surface as [`OsdError::Precondition`] and terminate the loop
/// before its first iteration.
pub trait RendererFactory: Send + Sync {
    fn create_renderer(
        &self,
        font_path: &Path,
        font_size: f32,
        layout: &OverlayLayout,
    ) -> Result<Box<dyn TextRenderer>, OsdError>;
}
