//! Raster surface for the particle field
//!
//! The framebuffer holds one color per raster pixel. A pixel covers
//! `UNITS_PER_PIXEL` surface units on each axis, and a terminal cell shows
//! two pixels stacked with a `▀` half block.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use trovul_field::{Point, Rgb, Rgba, Surface, Viewport};

use crate::layout::{CELL_HEIGHT, CELL_WIDTH};
use crate::theme::to_color;

/// Surface units per raster pixel
pub const UNITS_PER_PIXEL: f32 = 8.0;

/// Alpha-blended framebuffer implementing the drawing surface
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    size: Viewport,
    width_px: usize,
    height_px: usize,
    pixels: Vec<Rgb>,
    background: Rgb,
    fill: Rgb,
    stroke: Rgba,
    line_width: f32,
    alpha: f32,
}

impl PixelCanvas {
    /// Canvas of `width` x `height` surface units
    pub fn new(width: f32, height: f32, background: Rgb) -> Self {
        let mut canvas = Self {
            size: Viewport::default(),
            width_px: 0,
            height_px: 0,
            pixels: Vec::new(),
            background,
            fill: background,
            stroke: background.with_alpha(1.0),
            line_width: 1.0,
            alpha: 1.0,
        };
        canvas.resize(width, height);
        canvas
    }

    /// Canvas covering a terminal area of `cols` x `rows` cells
    pub fn for_cells(cols: u16, rows: u16, background: Rgb) -> Self {
        Self::new(cols as f32 * CELL_WIDTH, rows as f32 * CELL_HEIGHT, background)
    }

    pub fn width_px(&self) -> usize {
        self.width_px
    }

    pub fn height_px(&self) -> usize {
        self.height_px
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Color of the pixel at (`x`, `y`), if inside the canvas
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width_px && y < self.height_px {
            Some(self.pixels[y * self.width_px + x])
        } else {
            None
        }
    }

    /// Pixel span covering `[start, start + len)` units, clipped to `limit`
    fn span(start: f32, len: f32, limit: usize) -> (usize, usize) {
        let first = (start / UNITS_PER_PIXEL).floor().max(0.0);
        let last = ((start + len) / UNITS_PER_PIXEL).ceil().max(0.0);
        ((first as usize).min(limit), (last as usize).min(limit))
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width_px || y as usize >= self.height_px {
            return;
        }
        let idx = y as usize * self.width_px + x as usize;
        self.pixels[idx] = self.pixels[idx].blend(color, alpha);
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, width: f32, height: f32) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        self.size = Viewport::new(width, height);
        self.width_px = (width / UNITS_PER_PIXEL).ceil() as usize;
        self.height_px = (height / UNITS_PER_PIXEL).ceil() as usize;
        self.pixels = vec![self.background; self.width_px * self.height_px];
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (x0, x1) = Self::span(x, width, self.width_px);
        let (y0, y1) = Self::span(y, height, self.height_px);
        for row in y0..y1 {
            let start = row * self.width_px;
            self.pixels[start + x0..start + x1].fill(self.background);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(x, width, self.width_px);
        let (y0, y1) = Self::span(y, height, self.height_px);
        for row in y0..y1 {
            for col in x0..x1 {
                self.blend_pixel(col as i64, row as i64, self.fill, self.alpha);
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let alpha = self.stroke.alpha * self.alpha;
        if alpha <= 0.0 || self.line_width <= 0.0 {
            return;
        }

        // Bresenham over pixel centers
        let mut x0 = (from.x / UNITS_PER_PIXEL).floor() as i64;
        let mut y0 = (from.y / UNITS_PER_PIXEL).floor() as i64;
        let x1 = (to.x / UNITS_PER_PIXEL).floor() as i64;
        let y1 = (to.y / UNITS_PER_PIXEL).floor() as i64;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x0, y0, self.stroke.rgb, alpha);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn set_stroke(&mut self, color: Rgba, width: f32) {
        self.stroke = color;
        self.line_width = width;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

/// Blits a `PixelCanvas` into the terminal with half blocks
pub struct CanvasWidget<'a> {
    canvas: &'a PixelCanvas,
}

impl<'a> CanvasWidget<'a> {
    pub fn new(canvas: &'a PixelCanvas) -> Self {
        Self { canvas }
    }
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = self.canvas.background();

        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as usize;
                let top = self.canvas.pixel(x, row as usize * 2).unwrap_or(background);
                let bottom = self
                    .canvas
                    .pixel(x, row as usize * 2 + 1)
                    .unwrap_or(background);

                buf[(area.x + col, area.y + row)]
                    .set_char('▀')
                    .set_fg(to_color(top))
                    .set_bg(to_color(bottom));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    const BG: Rgb = Rgb::new(0, 0, 0);
    const VIOLET: Rgb = Rgb::new(139, 92, 246);

    #[test]
    fn test_cell_geometry() {
        let canvas = PixelCanvas::for_cells(10, 5, BG);
        assert_eq!(canvas.size(), Viewport::new(80.0, 80.0));
        assert_eq!(canvas.width_px(), 10);
        assert_eq!(canvas.height_px(), 10);
    }

    #[test]
    fn test_fill_rect_blends() {
        let mut canvas = PixelCanvas::new(80.0, 80.0, BG);
        canvas.set_fill_color(VIOLET);
        canvas.set_global_alpha(1.0);
        canvas.fill_rect(12.0, 12.0, 4.0, 4.0);
        assert_eq!(canvas.pixel(1, 1), Some(VIOLET));
        assert_eq!(canvas.pixel(2, 1), Some(BG));

        canvas.set_global_alpha(0.5);
        canvas.fill_rect(16.0, 16.0, 4.0, 4.0);
        assert_eq!(canvas.pixel(2, 2), Some(BG.blend(VIOLET, 0.5)));
    }

    #[test]
    fn test_offscreen_fill_is_clipped() {
        let mut canvas = PixelCanvas::new(80.0, 80.0, BG);
        canvas.set_fill_color(VIOLET);
        canvas.fill_rect(-20.0, -20.0, 8.0, 8.0);
        canvas.fill_rect(200.0, 10.0, 8.0, 8.0);
        assert!((0..10).all(|x| (0..10).all(|y| canvas.pixel(x, y) == Some(BG))));
    }

    #[test]
    fn test_clear_restores_background() {
        let mut canvas = PixelCanvas::new(80.0, 80.0, BG);
        canvas.set_fill_color(VIOLET);
        canvas.fill_rect(0.0, 0.0, 80.0, 80.0);
        canvas.clear_rect(0.0, 0.0, 80.0, 80.0);
        assert_eq!(canvas.pixel(5, 5), Some(BG));
    }

    #[test]
    fn test_stroke_line_endpoints() {
        let mut canvas = PixelCanvas::new(80.0, 80.0, BG);
        canvas.set_stroke(VIOLET.with_alpha(1.0), 1.0);
        canvas.stroke_line(Point::new(4.0, 4.0), Point::new(76.0, 4.0));
        assert!((0..10).all(|x| canvas.pixel(x, 0) == Some(VIOLET)));
        assert_eq!(canvas.pixel(0, 1), Some(BG));
    }

    #[test]
    fn test_resize_reallocates() {
        let mut canvas = PixelCanvas::new(80.0, 80.0, BG);
        canvas.resize(40.0, 16.0);
        assert_eq!(canvas.width_px(), 5);
        assert_eq!(canvas.height_px(), 2);
        assert_eq!(canvas.pixel(5, 0), None);
    }

    #[test]
    fn test_widget_half_blocks() {
        let mut canvas = PixelCanvas::for_cells(2, 1, BG);
        canvas.set_fill_color(VIOLET);
        canvas.fill_rect(0.0, 0.0, 8.0, 8.0);

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        CanvasWidget::new(&canvas).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(139, 92, 246));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
    }
}
