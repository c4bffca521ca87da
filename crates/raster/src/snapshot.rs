//! PNG output for a [`RasterSurface`].
//!
//! Feature-gated behind `png` (default on) so builds that only need the
//! pixel buffer do not pull in the `image` crate.

use std::path::Path;

use particle_fields_core::error::SimError;

use crate::RasterSurface;

/// Writes the surface as a PNG image.
///
/// Returns `SimError::InvalidDimensions` if the surface dimensions overflow
/// `u32`, or `SimError::Io` on encode or write failure.
pub fn write_png(surface: &RasterSurface, path: &Path) -> Result<(), SimError> {
    let (width, height) = surface.dimensions();
    let w = u32::try_from(width).map_err(|_| SimError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| SimError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, surface.data().to_vec())
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}
