//! `HumanDisplay` backed by the terminal.
//!
//! The terminal is only switched to raw mode / the alternate screen when the
//! display is created, which the environment defers to the first
//! `render(RenderMode::Human)`.

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::{DisplayFactory, EpisodeStatus, Frame, HumanDisplay};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    /// Take over the terminal.
    pub fn open() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter().context("failed to prepare terminal")?;
        Ok(Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        })
    }
}

impl HumanDisplay for TerminalDisplay {
    fn present(&mut self, frame: &Frame, status: EpisodeStatus) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(frame, status, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn close(&mut self) -> Result<()> {
        self.renderer.exit().context("failed to restore terminal")
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        if let Err(err) = self.renderer.exit() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

/// Factory for `SnakeEnv::with_display`.
pub fn terminal_display_factory() -> DisplayFactory {
    Box::new(|| -> Result<Box<dyn HumanDisplay>> { Ok(Box::new(TerminalDisplay::open()?)) })
}
