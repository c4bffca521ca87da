//! The drawing target the simulation renders into.

use crate::color::Srgb;

/// A 2D drawing surface. Its dimensions double as the culling bounds.
///
/// Implementations clip shapes that fall partly or wholly outside the
/// surface; callers never pre-clip.
pub trait RenderSurface {
    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;

    /// Fills the area `[0, width] x [0, height]` with `color`.
    fn clear(&mut self, width: f64, height: f64, color: Srgb);

    /// Fills the axis-aligned rectangle with top-left corner `(x, y)`.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Srgb);

    /// Fills the disc centered on `(cx, cy)`.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb);
}

/// One recorded [`RenderSurface`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64, color: Srgb },
    Rect { x: f64, y: f64, w: f64, h: f64, color: Srgb },
    Circle { cx: f64, cy: f64, radius: f64, color: Srgb },
}

/// A surface that records draw calls instead of rasterizing them.
///
/// Used by tests and headless runs that only need the call stream.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Calls recorded since the last [`RecordingSurface::take`].
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains and returns the recorded calls.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, width: f64, height: f64, color: Srgb) {
        self.commands.push(DrawCommand::Clear {
            width,
            height,
            color,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Srgb) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }
}
