#![deny(unsafe_code)]
//! Software render surface for particle-fields.
//!
//! [`RasterSurface`] rasterizes the simulation's draw calls into an RGBA8
//! buffer so headless runs can produce images. With the `png` feature
//! (default on) the buffer can be written out via [`snapshot::write_png`].

#[cfg(feature = "png")]
pub mod snapshot;

use std::ops::Range;

use particle_fields_core::error::SimError;
use particle_fields_core::{RenderSurface, Srgb, MAX_DIMENSION};

/// An RGBA8 pixel buffer implementing [`RenderSurface`].
///
/// A pixel is covered by a shape when its center `(px + 0.5, py + 0.5)` lies
/// inside it. Shapes are clipped to the buffer; fills are opaque.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Creates a transparent-black surface.
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero,
    /// exceeds [`MAX_DIMENSION`], or the buffer size overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, SimError> {
        let side = 1..=MAX_DIMENSION;
        if !(side.contains(&width) && side.contains(&height)) {
            return Err(SimError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(SimError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major RGBA8 data, `width * height * 4` bytes.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Number of pixels whose RGB equals `color` (alpha ignored).
    pub fn count_color(&self, color: Srgb) -> usize {
        let rgb = color.to_rgb8();
        self.pixels
            .chunks_exact(4)
            .filter(|px| px[..3] == rgb)
            .count()
    }

    fn put(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = (y * self.width + x) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    fn fill_span(&mut self, xs: Range<usize>, ys: Range<usize>, color: Srgb) {
        let rgba = opaque(color);
        for y in ys {
            for x in xs.clone() {
                self.put(x, y, rgba);
            }
        }
    }
}

impl RenderSurface for RasterSurface {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn clear(&mut self, width: f64, height: f64, color: Srgb) {
        self.fill_rect(0.0, 0.0, width, height, color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Srgb) {
        let (Some(xs), Some(ys)) = (covered(x, w, self.width), covered(y, h, self.height)) else {
            return;
        };
        self.fill_span(xs, ys, color);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb) {
        let diameter = radius * 2.0;
        let (Some(xs), Some(ys)) = (
            covered(cx - radius, diameter, self.width),
            covered(cy - radius, diameter, self.height),
        ) else {
            return;
        };
        let rgba = opaque(color);
        let r2 = radius * radius;
        for py in ys {
            let dy = py as f64 + 0.5 - cy;
            for px in xs.clone() {
                let dx = px as f64 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    self.put(px, py, rgba);
                }
            }
        }
    }
}

/// Pixel indices whose centers fall in `[start, start + len)`, clipped to
/// `0..limit`. `None` when nothing is covered or the input is not finite.
fn covered(start: f64, len: f64, limit: usize) -> Option<Range<usize>> {
    if !(start.is_finite() && len.is_finite()) || len <= 0.0 {
        return None;
    }
    let max = limit as f64;
    let first = (start - 0.5).ceil().clamp(0.0, max) as usize;
    let end = (start + len - 0.5).ceil().clamp(0.0, max) as usize;
    (first < end).then_some(first..end)
}

fn opaque(color: Srgb) -> [u8; 4] {
    let [r, g, b] = color.to_rgb8();
    [r, g, b, 255]
}
