//! Draws the simulation state onto a [`RenderSurface`].
//!
//! Layering, bottom to top: background, particles, fields, emitters.

use crate::config::SimConfig;
use crate::emitter::Emitter;
use crate::field::Field;
use crate::particle::Particle;
use crate::surface::RenderSurface;

/// Clears the surface and draws one frame.
///
/// Particles are `particle_size` squares anchored at their top-left corner.
/// Fields and emitters are `object_size` radius discs.
pub fn draw_frame<S: RenderSurface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    fields: &[Field],
    emitters: &[Emitter],
    config: &SimConfig,
) {
    let theme = &config.theme;
    let (width, height) = (surface.width(), surface.height());
    surface.clear(width, height, theme.background);

    let size = config.particle_size;
    for p in particles {
        surface.fill_rect(p.position.x, p.position.y, size, size, theme.particle);
    }

    for field in fields {
        let pos = field.position();
        surface.fill_circle(pos.x, pos.y, config.object_size, field.draw_color(theme));
    }

    for emitter in emitters {
        surface.fill_circle(
            emitter.position.x,
            emitter.position.y,
            config.object_size,
            theme.emitter,
        );
    }
}
