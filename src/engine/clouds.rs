use rand::Rng;

use super::{Viewport, particles::span};

pub const DEFAULT_CLOUD_COUNT: usize = 40;

const SEED_X: (f32, f32) = (-100.0, 1200.0);
const SEED_Y: (f32, f32) = (-50.0, 300.0);
const RADIUS: (f32, f32) = (20.0, 80.0);
const DRIFT: (f32, f32) = (0.1, 0.4);
const RESET_TOP: f32 = -50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub drift: f32,
}

impl Cloud {
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: span(rng, SEED_X.0, SEED_X.1),
            y: span(rng, SEED_Y.0, SEED_Y.1),
            radius: span(rng, RADIUS.0, RADIUS.1),
            drift: span(rng, DRIFT.0, DRIFT.1),
        }
    }

    pub fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.x += self.drift;
        if self.x > viewport.width + self.radius {
            self.x = -self.radius;
            self.y = span(rng, RESET_TOP, viewport.height / 2.0);
        }
    }
}

pub fn seed_field<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Cloud> {
    (0..count).map(|_| Cloud::seeded(rng)).collect()
}
