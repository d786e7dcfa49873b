//! Session lifecycle and control operations for `PlayerOsd`.

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::{error, warn};

use crate::clock::MediaClock;
use crate::codec::TextPacket;

use super::{OsdCommand, PlayerOsd};

impl PlayerOsd {
    /// Start the render thread for a new session.
    ///
    /// Visibility always starts hidden. Returns `false`, without panicking,
    /// when a loop is already active or the thread could not be spawned.
    ///
    /// # Arguments
    ///
    /// * `font_path` - Font file handed to the renderer.
    /// * `font_size` - Font size handed to the renderer.
    /// * `clock` - Shared playback clock queried each iteration.
    /// * `total_time_ms` - Total stream duration, fixed for the session.
    pub fn open(
        &mut self,
        font_path: impl Into<PathBuf>,
        font_size: f32,
        clock: Arc<dyn MediaClock>,
        total_time_ms: i64,
    ) -> bool {
        if self.is_running() {
            warn!("OSD open requested while a render loop is active");
            return false;
        }
        // A crashed or finished loop still holds a joinable handle.
        self.close();

        self.show.store(false, Ordering::Relaxed);
        if let Err(err) =
            self.initialize_render_thread(font_path.into(), font_size, clock, total_time_ms)
        {
            error!("failed to start OSD render thread: {}", err);
            return false;
        }
        true
    }

    /// Stop the render thread and wait for it to exit.
    ///
    /// Idempotent; closing an already-stopped session is a no-op.
    pub fn close(&mut self) {
        if let Some(command_tx) = self.command_tx.take() {
            let _ = command_tx.send(OsdCommand::Stop);
        }
        if let Some(handle) = self.render_thread_handle.take() {
            if handle.join().is_err() {
                error!("OSD render thread panicked");
            }
        }
    }

    /// Flip overlay visibility.
    pub fn toggle(&self) {
        let shown = !self.show.fetch_xor(true, Ordering::Relaxed);
        self.send_command(if shown {
            OsdCommand::Show
        } else {
            OsdCommand::Hide
        });
    }

    /// Request a render-state reset on the next loop iteration.
    pub fn flush(&self) {
        self.send_command(OsdCommand::Flush);
    }

    /// Decode a subtitle text packet and retain its display-ready lines.
    ///
    /// Returns whether the packet produced any lines. Retained lines are
    /// drained by the owner via [`PlayerOsd::take_text_lines`]; the render
    /// loop itself never consumes them.
    pub fn add_packet(&self, packet: &TextPacket) -> bool {
        let lines = self.codec.decode_lines(packet);
        if lines.is_empty() {
            return false;
        }

        let mut queue = self.text_lines.lock().unwrap();
        for line in lines {
            if queue.len() >= self.settings.text_queue_capacity {
                queue.pop_front();
            }
            queue.push_back(line);
        }
        true
    }

    /// Drain the decoded subtitle lines retained by [`PlayerOsd::add_packet`].
    pub fn take_text_lines(&self) -> Vec<String> {
        self.text_lines.lock().unwrap().drain(..).collect()
    }

    /// Return true while the render thread is alive.
    pub fn is_running(&self) -> bool {
        self.render_thread_handle.is_some() && !self.thread_stopped.load(Ordering::SeqCst)
    }

    fn send_command(&self, command: OsdCommand) {
        if let Some(command_tx) = &self.command_tx {
            let _ = command_tx.send(command);
        }
    }
}
