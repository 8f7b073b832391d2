//! GameView: maps an observation frame into a terminal framebuffer.
//!
//! The view samples the pixel frame once per grid cell, so the terminal shows
//! exactly what an agent observes. This module is pure (no I/O).

use crate::core::{EpisodeStatus, Frame};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BACKGROUND_COLOR, CELL_SIZE, RED};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the snake grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 24);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the grid of `frame` with its border.
    pub fn frame_size(&self, frame: &Frame) -> (u16, u16) {
        let (cols, rows) = grid_dims(frame);
        (
            cols.saturating_mul(self.cell_w).saturating_add(2),
            rows.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        frame: &Frame,
        status: EpisodeStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (cols, rows) = grid_dims(frame);
        let (frame_w, frame_h) = self.frame_size(frame);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..rows {
            for x in 0..cols {
                let px = (x as i32 * CELL_SIZE + CELL_SIZE / 2) as usize;
                let py = (y as i32 * CELL_SIZE + CELL_SIZE / 2) as usize;
                match frame.pixel(px, py) {
                    Some(color) if color != BACKGROUND_COLOR => {
                        self.draw_filled_cell(fb, start_x, start_y, x, y, color)
                    }
                    _ => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        self.draw_side_panel(fb, status, viewport, start_x, start_y, frame_w);

        if status.done {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME HAS ENDED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, status: EpisodeStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(60, 60, 70),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, ' ', style);
    }

    fn draw_filled_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: Rgb,
    ) {
        let style = CellStyle {
            fg: color,
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: EpisodeStatus,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, status.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STEPS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, status.steps, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: RED,
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn grid_dims(frame: &Frame) -> (u16, u16) {
    let cell = CELL_SIZE as usize;
    let clamp = |n: usize| u16::try_from(n / cell).unwrap_or(u16::MAX);
    (clamp(frame.width()), clamp(frame.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GREEN, WHITE};

    fn frame_with_cells() -> Frame {
        let mut frame = Frame::new(200, 200);
        frame.fill_rect(100, 50, 10, 10, GREEN);
        frame.fill_rect(0, 0, 10, 10, WHITE);
        frame
    }

    #[test]
    fn frame_size_includes_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(&Frame::new(200, 200)), (42, 22));
        assert_eq!(view.frame_size(&Frame::new(110, 60)), (24, 8));
    }

    #[test]
    fn filled_cells_take_pixel_color() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&frame_with_cells(), EpisodeStatus::default(), Viewport::new(42, 22));

        // Cell (10, 5) -> columns 1 + 10*2 .. +2, row 1 + 5.
        let snake = fb.get(21, 6).unwrap();
        assert_eq!(snake.ch, '█');
        assert_eq!(snake.style.fg, GREEN);
        assert_eq!(fb.get(22, 6).unwrap().style.fg, GREEN);

        let food = fb.get(1, 1).unwrap();
        assert_eq!(food.style.fg, WHITE);

        assert_eq!(fb.get(3, 1).unwrap().ch, ' ');
    }

    #[test]
    fn very_wide_frame_saturates() {
        let view = GameView::default();
        let wide = Frame::new(400_000, 10);
        assert_eq!(view.frame_size(&wide), (u16::MAX, 3));

        let widest = Frame::new(700_000, 10);
        assert_eq!(grid_dims(&widest), (u16::MAX, 1));

        let fb = view.render(&wide, EpisodeStatus::default(), Viewport::new(80, 24));
        assert_eq!(fb.get(0, 10).unwrap().ch, '┌');
    }

    #[test]
    fn done_status_draws_banner() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let status = EpisodeStatus {
            score: 3,
            steps: 40,
            done: true,
        };
        let fb = view.render(&Frame::new(200, 200), status, Viewport::new(42, 22));
        assert!(fb.row_text(11).contains("GAME HAS ENDED"));
    }
}
