//! Human display seam.
//!
//! The core crate never touches a terminal or window. A frontend provides a
//! [`DisplayFactory`]; the environment invokes it the first time
//! `render(RenderMode::Human)` is called, so headless use never opens a
//! display.

use serde::Serialize;

use crate::frame::Frame;

/// Episode counters shown next to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EpisodeStatus {
    pub score: u32,
    pub steps: u32,
    pub done: bool,
}

/// A visible output for rendered frames.
pub trait HumanDisplay {
    /// Show `frame` with the current episode counters.
    fn present(&mut self, frame: &Frame, status: EpisodeStatus) -> anyhow::Result<()>;

    /// Release the display. Called at most once.
    fn close(&mut self) -> anyhow::Result<()>;
}

/// Opens a display on demand.
pub type DisplayFactory = Box<dyn FnMut() -> anyhow::Result<Box<dyn HumanDisplay>>>;
