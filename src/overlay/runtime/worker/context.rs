//! Shared runtime context captured at thread spawn time.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::MediaClock;
use crate::render::{OverlayLayout, RendererFactory};

use super::super::super::OsdCommand;

/// Captured state passed from `PlayerOsd::initialize_render_thread` into
/// the detached render thread.
pub(in crate::overlay::runtime) struct ThreadContext {
    pub(in crate::overlay::runtime) commands: Receiver<OsdCommand>,
    pub(in crate::overlay::runtime) clock: Arc<dyn MediaClock>,
    pub(in crate::overlay::runtime) renderer_factory: Arc<dyn RendererFactory>,
    pub(in crate::overlay::runtime) thread_stopped: Arc<AtomicBool>,
    pub(in crate::overlay::runtime) font_path: PathBuf,
    pub(in crate::overlay::runtime) font_size: f32,
    pub(in crate::overlay::runtime) layout: OverlayLayout,
    pub(in crate::overlay::runtime) refresh: Duration,
    pub(in crate::overlay::runtime) total_time_ms: i64,
}
