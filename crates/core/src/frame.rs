//! Pixel buffer used both as the observation and as the display source.
//!
//! Layout is row-major `[height][width][3]`, matching the usual
//! `(H, W, C)` image convention of RL observation spaces.

use crate::types::{Rgb, OBS_CHANNELS};

/// Owned RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Create a black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * OBS_CHANNELS],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `[height, width, channels]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, OBS_CHANNELS]
    }

    /// Raw channel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * OBS_CHANNELS)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.idx(x, y)
            .map(|i| Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.data[i] = color.r;
            self.data[i + 1] = color.g;
            self.data[i + 2] = color.b;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(OBS_CHANNELS) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    /// Fill a rectangle, clipped to the frame.
    ///
    /// Rectangles partly or fully outside the frame are allowed; only the
    /// visible part is drawn.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = (x.saturating_add(w)).clamp(0, self.width as i32) as usize;
        let y1 = (y.saturating_add(h)).clamp(0, self.height as i32) as usize;
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, GREEN, WHITE};

    #[test]
    fn new_frame_is_black_with_hwc_shape() {
        let frame = Frame::new(30, 20);
        assert_eq!(frame.shape(), [20, 30, 3]);
        assert_eq!(frame.as_bytes().len(), 20 * 30 * 3);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn pixel_layout_is_row_major() {
        let mut frame = Frame::new(4, 3);
        frame.set_pixel(1, 2, WHITE);
        let i = (2 * 4 + 1) * 3;
        assert_eq!(&frame.as_bytes()[i..i + 3], &[255, 255, 255]);
        assert_eq!(frame.pixel(1, 2), Some(WHITE));
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut frame = Frame::new(20, 20);
        frame.fill_rect(15, -5, 10, 10, GREEN);

        assert_eq!(frame.pixel(15, 0), Some(GREEN));
        assert_eq!(frame.pixel(19, 4), Some(GREEN));
        assert_eq!(frame.pixel(14, 0), Some(BLACK));
        assert_eq!(frame.pixel(15, 5), Some(BLACK));
    }

    #[test]
    fn fill_rect_fully_outside_is_noop() {
        let mut frame = Frame::new(20, 20);
        frame.fill_rect(20, 0, 10, 10, GREEN);
        frame.fill_rect(-10, 0, 10, 10, GREEN);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut frame = Frame::new(3, 3);
        frame.set_pixel(0, 0, GREEN);
        frame.fill(BLACK);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }
}
