//! Internal runtime plumbing for the OSD render thread.
//!
//! The runtime is split so construction-time concerns stay separate from
//! the long-lived render loop:
//! - [`thread`] handles thread bootstrap and shared state capture.
//! - [`worker`] runs the periodic command/render loop.

mod thread;
mod worker;
