//! Drawing surface contract
//!
//! The field draws through an immediate-mode 2D raster API: clear, fill and
//! stroke calls, a current fill and stroke style, and a global alpha factor
//! applied to everything drawn after it is set.

use crate::color::{Rgb, Rgba};
use crate::geometry::{Point, Viewport};

/// Addressable 2D raster surface
pub trait Surface {
    /// Current size in surface units
    fn size(&self) -> Viewport;

    /// Resize the surface; callers keep this in sync with the viewport
    fn resize(&mut self, width: f32, height: f32);

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a rectangle with the current fill color and global alpha
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Stroke a straight line with the current stroke style and global alpha
    fn stroke_line(&mut self, from: Point, to: Point);

    fn set_fill_color(&mut self, color: Rgb);

    fn set_stroke(&mut self, color: Rgba, width: f32);

    fn set_global_alpha(&mut self, alpha: f32);
}

/// A single recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: f32, height: f32 },
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    StrokeLine { from: Point, to: Point },
    SetFillColor(Rgb),
    SetStroke { color: Rgba, width: f32 },
    SetGlobalAlpha(f32),
}

/// Headless surface that records every call
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Viewport::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands recorded since creation or the last `take_commands`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.size = Viewport::new(width, height);
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke(&mut self, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::SetStroke { color, width });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
    }
}
