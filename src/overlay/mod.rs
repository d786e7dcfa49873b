//! On-screen-display overlay session.
//!
//! [`PlayerOsd`] owns the background render thread that periodically formats
//! the current playback position over the video output. Operations mirror
//! the player's transport surface: `open` starts a session, `toggle` flips
//! visibility, `flush` requests a reset, `close` stops and joins.

mod controls;
mod runtime;
mod settings;

pub use settings::OsdSettings;

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::codec::OverlayTextCodec;
use crate::render::RendererFactory;

/// Command consumed by the render loop, at most one per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OsdCommand {
    Show,
    Hide,
    Flush,
    Stop,
}

/// On-screen-display session owning the background render thread.
///
/// At most one render loop is active per session. Configuration passed to
/// [`PlayerOsd::open`] is fixed for the lifetime of that loop.
pub struct PlayerOsd {
    settings: OsdSettings,
    renderer_factory: Arc<dyn RendererFactory>,
    codec: OverlayTextCodec,
    text_lines: Arc<Mutex<VecDeque<String>>>,
    show: AtomicBool,
    thread_stopped: Arc<AtomicBool>,
    command_tx: Option<Sender<OsdCommand>>,
    render_thread_handle: Option<JoinHandle<()>>,
}

impl PlayerOsd {
    /// Create a session with default settings.
    pub fn new(renderer_factory: Arc<dyn RendererFactory>) -> Self {
        Self::with_settings(renderer_factory, OsdSettings::default())
    }

    /// Create a session with explicit settings.
    pub fn with_settings(renderer_factory: Arc<dyn RendererFactory>, settings: OsdSettings) -> Self {
        Self {
            settings,
            renderer_factory,
            codec: OverlayTextCodec::new(),
            text_lines: Arc::new(Mutex::new(VecDeque::new())),
            show: AtomicBool::new(false),
            thread_stopped: Arc::new(AtomicBool::new(true)),
            command_tx: None,
            render_thread_handle: None,
        }
    }
}

impl Drop for PlayerOsd {
    fn drop(&mut self) {
        self.close();
    }
}
