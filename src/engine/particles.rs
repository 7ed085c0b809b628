use std::f32::consts::TAU;

use rand::Rng;

use crate::domain::weather::{RainClass, RecipeEntry};

use super::Viewport;

/// Particles never sit further than this outside the viewport, on any axis.
pub const VIEWPORT_MARGIN: f32 = 160.0;

const RAIN_LENGTH: (f32, f32) = (10.0, 30.0);
const RAIN_FALL_MODERATE: (f32, f32) = (15.0, 25.0);
const RAIN_FALL_FAST: (f32, f32) = (25.0, 40.0);
const RAIN_ALPHA: (f32, f32) = (0.2, 0.6);
const RAIN_EDGE: f32 = 20.0;

const SNOW_RADIUS: (f32, f32) = (1.0, 4.0);
const SNOW_FALL: (f32, f32) = (0.5, 2.0);
const SNOW_SWAY_AMPLITUDE: f32 = 0.5;
const SNOW_RESPAWN_Y: f32 = -5.0;

const DEBRIS_BAND: f32 = 200.0;
const DEBRIS_RADIUS: (f32, f32) = (2.0, 5.0);
const DEBRIS_VX: (f32, f32) = (3.0, 8.0);
const DEBRIS_VY: (f32, f32) = (-1.0, 1.0);
const DEBRIS_ROTATION: (f32, f32) = (0.0, 6.0);
const DEBRIS_SPIN: f32 = 0.1;
const DEBRIS_EDGE: f32 = 10.0;

const DUST_RADIUS: (f32, f32) = (0.5, 2.0);
const DUST_VELOCITY: (f32, f32) = (-0.5, 0.5);
const DUST_ALPHA: (f32, f32) = (0.3, 0.7);

const FOG_RADIUS: (f32, f32) = (50.0, 150.0);
const FOG_VX: (f32, f32) = (0.1, 0.5);
const FOG_ALPHA: (f32, f32) = (0.01, 0.05);

// Empty ranges collapse to `min`.
pub(crate) fn span<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: (f32, f32)) -> f32 {
    span(rng, range.0, range.1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleTag {
    Rain,
    Snow,
    Debris,
    Dust,
    Fog,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleKind {
    Rain { length: f32, fall: f32, alpha: f32 },
    Snow { radius: f32, fall: f32, sway: f32 },
    Debris { radius: f32, vx: f32, vy: f32, rotation: f32 },
    Dust { radius: f32, vx: f32, vy: f32, alpha: f32 },
    Fog { radius: f32, vx: f32, alpha: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub kind: ParticleKind,
}

#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    pub viewport: Viewport,
    pub time: f64,
    pub pouring: bool,
}

impl Particle {
    pub fn rain<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, class: RainClass) -> Self {
        let fall = match class {
            RainClass::Moderate => RAIN_FALL_MODERATE,
            RainClass::Fast => RAIN_FALL_FAST,
        };
        Self {
            x: span(rng, 0.0, viewport.width),
            y: span(rng, 0.0, viewport.height),
            kind: ParticleKind::Rain {
                length: sample(rng, RAIN_LENGTH),
                fall: sample(rng, fall),
                alpha: sample(rng, RAIN_ALPHA),
            },
        }
    }

    pub fn snow<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: span(rng, 0.0, viewport.width),
            y: span(rng, 0.0, viewport.height),
            kind: ParticleKind::Snow {
                radius: sample(rng, SNOW_RADIUS),
                fall: sample(rng, SNOW_FALL),
                sway: span(rng, 0.0, TAU),
            },
        }
    }

    pub fn debris<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let top = (viewport.height - DEBRIS_BAND).max(0.0);
        Self {
            x: span(rng, 0.0, viewport.width),
            y: span(rng, top, viewport.height),
            kind: ParticleKind::Debris {
                radius: sample(rng, DEBRIS_RADIUS),
                vx: sample(rng, DEBRIS_VX),
                vy: sample(rng, DEBRIS_VY),
                rotation: sample(rng, DEBRIS_ROTATION),
            },
        }
    }

    pub fn dust<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: span(rng, 0.0, viewport.width),
            y: span(rng, 0.0, viewport.height),
            kind: ParticleKind::Dust {
                radius: sample(rng, DUST_RADIUS),
                vx: sample(rng, DUST_VELOCITY),
                vy: sample(rng, DUST_VELOCITY),
                alpha: sample(rng, DUST_ALPHA),
            },
        }
    }

    pub fn fog<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: span(rng, 0.0, viewport.width),
            y: span(rng, 0.0, viewport.height),
            kind: ParticleKind::Fog {
                radius: sample(rng, FOG_RADIUS),
                vx: sample(rng, FOG_VX),
                alpha: sample(rng, FOG_ALPHA),
            },
        }
    }

    #[must_use]
    pub fn tag(&self) -> ParticleTag {
        match self.kind {
            ParticleKind::Rain { .. } => ParticleTag::Rain,
            ParticleKind::Snow { .. } => ParticleTag::Snow,
            ParticleKind::Debris { .. } => ParticleTag::Debris,
            ParticleKind::Dust { .. } => ParticleTag::Dust,
            ParticleKind::Fog { .. } => ParticleTag::Fog,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn step<R: Rng + ?Sized>(&mut self, ctx: StepContext, rng: &mut R) {
        let Viewport { width, height } = ctx.viewport;
        match &mut self.kind {
            ParticleKind::Rain { length, fall, .. } => {
                self.y += *fall;
                self.x -= if ctx.pouring { 2.0 } else { 1.0 };
                if self.y > height {
                    self.y = -*length;
                    self.x = span(rng, 0.0, width);
                } else if self.x < -RAIN_EDGE {
                    self.x = width;
                } else if self.x > width + RAIN_EDGE {
                    self.x = -RAIN_EDGE;
                }
            }
            ParticleKind::Snow { radius, fall, sway } => {
                self.y += *fall;
                self.x += (ctx.time + f64::from(*sway)).sin() as f32 * SNOW_SWAY_AMPLITUDE;
                if self.y > height {
                    self.y = SNOW_RESPAWN_Y;
                    self.x = span(rng, 0.0, width);
                } else if self.x < -*radius {
                    self.x = width + *radius;
                } else if self.x > width + *radius {
                    self.x = -*radius;
                }
            }
            ParticleKind::Debris {
                vx, vy, rotation, ..
            } => {
                self.x += *vx + (ctx.time * 2.0).sin() as f32 * 2.0;
                self.y += *vy;
                *rotation += DEBRIS_SPIN;
                if self.x > width {
                    self.x = -DEBRIS_EDGE;
                }
                if self.y > height + DEBRIS_EDGE {
                    self.y = -DEBRIS_EDGE;
                } else if self.y < -DEBRIS_EDGE {
                    self.y = height + DEBRIS_EDGE;
                }
            }
            ParticleKind::Dust { vx, vy, .. } => {
                self.x += *vx;
                self.y += *vy;
                bounce(&mut self.x, vx, width);
                bounce(&mut self.y, vy, height);
            }
            ParticleKind::Fog { radius, vx, .. } => {
                self.x += *vx;
                if self.x > width + *radius {
                    self.x = -*radius;
                }
                if self.y > height + *radius {
                    self.y = span(rng, 0.0, height);
                }
            }
        }
    }
}

fn bounce(pos: &mut f32, velocity: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        *velocity = velocity.abs();
    } else if *pos > extent {
        *pos = extent;
        *velocity = -velocity.abs();
    }
}

pub fn populate<R: Rng + ?Sized>(
    recipe: &[RecipeEntry],
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Particle> {
    let total = recipe.iter().map(|entry| entry.count()).sum();
    let mut particles = Vec::with_capacity(total);
    for entry in recipe {
        match *entry {
            RecipeEntry::Rain(class, n) => {
                particles.extend((0..n).map(|_| Particle::rain(rng, viewport, class)));
            }
            RecipeEntry::Snow(n) => particles.extend((0..n).map(|_| Particle::snow(rng, viewport))),
            RecipeEntry::Debris(n) => {
                particles.extend((0..n).map(|_| Particle::debris(rng, viewport)));
            }
            RecipeEntry::Dust(n) => particles.extend((0..n).map(|_| Particle::dust(rng, viewport))),
            RecipeEntry::Fog(n) => particles.extend((0..n).map(|_| Particle::fog(rng, viewport))),
        }
    }
    particles
}
