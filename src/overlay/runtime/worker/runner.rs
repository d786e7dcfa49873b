//! Render loop implementation.

use std::sync::mpsc::RecvTimeoutError;

use log::{debug, error};

use crate::error::OsdError;
use crate::render::TextRenderer;
use crate::tools::timecode::Timecode;

use super::super::super::OsdCommand;
use super::context::ThreadContext;
use super::guard::RenderThreadGuard;

/// Run the render thread to completion.
///
/// Any error escaping the loop body is caught here: an error carrying a
/// user-facing message prints that message to the console first, then the
/// error is logged with its kind tag. The session is marked stopped either
/// way and never restarts itself.
pub(in crate::overlay::runtime) fn run_render_thread(ctx: ThreadContext) {
    let _thread_guard = RenderThreadGuard::new(ctx.thread_stopped.clone());

    if let Err(err) = render_loop(&ctx) {
        if let Some(message) = err.user_message() {
            println!("Error: {}", message);
        }
        error!("OSD render loop threw {} ({})", err.kind_name(), err);
    }
}

/// Periodic command/render loop.
///
/// The renderer lives for exactly the scope of this function; dropping it
/// on exit removes any remaining on-screen content.
///
/// # Arguments
///
/// * `ctx` - Captured shared state and configuration for this run.
fn render_loop(ctx: &ThreadContext) -> Result<(), OsdError> {
    let mut renderer =
        ctx.renderer_factory
            .create_renderer(&ctx.font_path, ctx.font_size, &ctx.layout)?;

    // The total time is fixed for the session, so its timecode is computed
    // once rather than per iteration.
    let total = Timecode::from_ms(ctx.total_time_ms);
    let mut visible = false;

    loop {
        match ctx.commands.recv_timeout(ctx.refresh) {
            Ok(OsdCommand::Show) => visible = true,
            Ok(OsdCommand::Hide) => visible = false,
            Ok(OsdCommand::Flush) => {
                // Reset requests carry no renderer-side action; visible
                // content is rebuilt from the clock on every tick.
                debug!("OSD flush requested");
            }
            Ok(OsdCommand::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }

        render_tick(renderer.as_mut(), ctx, visible, &total)?;
    }

    Ok(())
}

/// Refresh or clear the overlay for one iteration.
///
/// # Arguments
///
/// * `renderer` - Renderer owned by this loop.
/// * `ctx` - Captured shared state, queried for the current media time.
/// * `visible` - Whether the overlay is currently toggled on.
/// * `total` - Precomputed total-time timecode.
fn render_tick(
    renderer: &mut dyn TextRenderer,
    ctx: &ThreadContext,
    visible: bool,
    total: &Timecode,
) -> Result<(), OsdError> {
    if visible {
        let position = Timecode::from_ms(ctx.clock.media_time_ms());
        let lines = vec![format!("{}/{}", position, total)];
        renderer.prepare(&lines)?;
        renderer.show_next()?;
    } else {
        renderer.unprepare();
        renderer.hide()?;
    }
    Ok(())
}
