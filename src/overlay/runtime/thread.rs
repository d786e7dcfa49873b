//! Render-thread bootstrap for `PlayerOsd`.

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::clock::MediaClock;
use crate::error::OsdError;

use super::super::PlayerOsd;
use super::worker::{run_render_thread, ThreadContext};

impl PlayerOsd {
    /// Build the captured context and spawn a fresh render thread.
    ///
    /// On success the command sender and join handle are stored on the
    /// session; on spawn failure all liveness state is rolled back.
    pub(in crate::overlay) fn initialize_render_thread(
        &mut self,
        font_path: PathBuf,
        font_size: f32,
        clock: Arc<dyn MediaClock>,
        total_time_ms: i64,
    ) -> Result<(), OsdError> {
        self.thread_stopped.store(false, Ordering::SeqCst);

        let (command_tx, command_rx) = mpsc::channel();
        let context = ThreadContext {
            commands: command_rx,
            clock,
            renderer_factory: self.renderer_factory.clone(),
            thread_stopped: self.thread_stopped.clone(),
            font_path,
            font_size,
            layout: self.settings.layout.clone(),
            refresh: Duration::from_millis(self.settings.refresh_ms),
            total_time_ms,
        };

        let spawned = thread::Builder::new()
            .name("osd-render".to_string())
            .spawn(move || run_render_thread(context));

        match spawned {
            Ok(handle) => {
                self.command_tx = Some(command_tx);
                self.render_thread_handle = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.thread_stopped.store(true, Ordering::SeqCst);
                Err(OsdError::Thread(err))
            }
        }
    }
}
