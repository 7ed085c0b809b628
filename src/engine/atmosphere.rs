use rand::Rng;
use tracing::debug;

use crate::domain::weather::WeatherState;

use super::{
    Viewport,
    clouds::{self, Cloud},
    lightning::{FlashTuning, Lightning},
    particles::{self, Particle, StepContext},
};

#[derive(Debug, Clone, Default)]
pub struct Atmosphere {
    weather: Option<WeatherState>,
    particles: Vec<Particle>,
    clouds: Vec<Cloud>,
    clouds_seeded: bool,
    lightning: Lightning,
    time: f64,
    viewport: Viewport,
}

impl Atmosphere {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn weather(&self) -> Option<&WeatherState> {
        self.weather.as_ref()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    #[must_use]
    pub fn lightning(&self) -> f32 {
        self.lightning.intensity()
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_weather<R: Rng + ?Sized>(&mut self, label: &str, rng: &mut R) -> bool {
        self.set_state(WeatherState::from_label(label), rng)
    }

    pub fn set_state<R: Rng + ?Sized>(&mut self, state: WeatherState, rng: &mut R) -> bool {
        if self.weather.as_ref() == Some(&state) {
            return false;
        }
        self.particles = particles::populate(state.recipe(), self.viewport, rng);
        if !state.has_lightning() {
            self.lightning.clear();
        }
        debug!(
            weather = %state,
            particles = self.particles.len(),
            known = state.is_known(),
            "weather changed"
        );
        self.weather = Some(state);
        true
    }

    pub fn seed_clouds<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> bool {
        if self.clouds_seeded {
            return false;
        }
        self.clouds = clouds::seed_field(count, rng);
        self.clouds_seeded = true;
        true
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) {
        self.time += dt;
        let ctx = StepContext {
            viewport: self.viewport,
            time: self.time,
            pouring: self.weather.as_ref().is_some_and(WeatherState::is_pouring),
        };
        for cloud in &mut self.clouds {
            cloud.step(self.viewport, rng);
        }
        for particle in &mut self.particles {
            particle.step(ctx, rng);
        }
    }

    pub fn step_lightning<R: Rng + ?Sized>(&mut self, tuning: FlashTuning, rng: &mut R) {
        let active = self
            .weather
            .as_ref()
            .is_some_and(WeatherState::has_lightning);
        self.lightning.step(active, tuning, rng);
    }
}
