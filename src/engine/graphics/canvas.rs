//! Backend-neutral 2D drawing.

use image::{Rgba, RgbaImage};

/// Axis-aligned filled rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [u8; 4],
}

impl FilledRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: [u8; 4]) -> Self {
        Self { x, y, width, height, color }
    }
}

pub trait Canvas {
    fn clear(&mut self, color: [u8; 4]);
    fn fill_rect(&mut self, rect: &FilledRect);

    fn fill_rects(&mut self, rects: &[FilledRect]) {
        for rect in rects {
            self.fill_rect(rect);
        }
    }
}

/// CPU canvas backed by an RGBA image. Used for screenshots.
pub struct RgbaCanvas {
    image: RgbaImage,
}

impl RgbaCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Canvas for RgbaCanvas {
    fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(color);
        }
    }

    fn fill_rect(&mut self, rect: &FilledRect) {
        let (w, h) = (self.image.width() as f32, self.image.height() as f32);
        let x0 = rect.x.floor().clamp(0.0, w) as u32;
        let y0 = rect.y.floor().clamp(0.0, h) as u32;
        let x1 = (rect.x + rect.width).floor().clamp(0.0, w) as u32;
        let y1 = (rect.y + rect.height).floor().clamp(0.0, h) as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, Rgba(rect.color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    #[test]
    fn fill_covers_exactly_the_rect() {
        let mut canvas = RgbaCanvas::new(10, 10);
        canvas.clear(BLACK);
        canvas.fill_rect(&FilledRect::new(2.0, 3.0, 4.0, 2.0, RED));
        assert_eq!(canvas.pixel(2, 3), Some(RED));
        assert_eq!(canvas.pixel(5, 4), Some(RED));
        assert_eq!(canvas.pixel(6, 4), Some(BLACK));
        assert_eq!(canvas.pixel(5, 5), Some(BLACK));
        assert_eq!(canvas.pixel(1, 3), Some(BLACK));
    }

    #[test]
    fn rects_are_clipped() {
        let mut canvas = RgbaCanvas::new(4, 4);
        canvas.clear(BLACK);
        canvas.fill_rect(&FilledRect::new(-10.0, -10.0, 12.0, 12.0, RED));
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some(BLACK));

        canvas.fill_rect(&FilledRect::new(3.0, 3.0, 100.0, 100.0, RED));
        assert_eq!(canvas.pixel(3, 3), Some(RED));
        assert_eq!(canvas.pixel(4, 4), None);
    }

    #[test]
    fn later_rects_paint_over_earlier_ones() {
        let blue = [0, 0, 255, 255];
        let mut canvas = RgbaCanvas::new(4, 4);
        canvas.fill_rects(&[
            FilledRect::new(0.0, 0.0, 4.0, 4.0, blue),
            FilledRect::new(1.0, 1.0, 1.0, 1.0, RED),
        ]);
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(blue));
    }
}
