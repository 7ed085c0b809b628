use rand::Rng;

use crate::engine::particles::{Particle, ParticleKind};

use super::{
    RenderError,
    canvas::Canvas,
    palette::{self, WHITE},
};

const RAIN_WIDTH: f32 = 1.5;
const SNOW_SHIMMER: (f32, f32) = (0.5, 0.9);

pub fn paint<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    particles: &[Particle],
    pouring: bool,
    rng: &mut R,
) -> Result<(), RenderError> {
    canvas.clear();
    let slant = if pouring { -5.0 } else { -2.0 };
    for p in particles {
        match p.kind {
            ParticleKind::Rain { length, alpha, .. } => canvas.stroke_line(
                (p.x, p.y),
                (p.x + slant, p.y + length),
                RAIN_WIDTH,
                palette::RAIN_STREAK.fade(alpha),
            )?,
            ParticleKind::Snow { radius, .. } => {
                let shimmer = rng.random_range(SNOW_SHIMMER.0..SNOW_SHIMMER.1);
                canvas.fill_disc(p.x, p.y, radius, WHITE.fade(shimmer))?;
            }
            ParticleKind::Debris {
                radius, rotation, ..
            } => canvas.fill_rotated_rect(
                (p.x, p.y),
                (radius * 2.0, radius),
                rotation,
                palette::DEBRIS,
            )?,
            ParticleKind::Dust { radius, alpha, .. } => {
                canvas.fill_disc(p.x, p.y, radius, WHITE.fade(alpha))?;
            }
            ParticleKind::Fog { radius, alpha, .. } => {
                canvas.fill_disc(p.x, p.y, radius, palette::FOG_PATCH.fade(alpha))?;
            }
        }
    }
    Ok(())
}
