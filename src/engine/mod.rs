pub mod atmosphere;
pub mod clouds;
pub mod config;
pub mod error;
pub mod frames;
pub mod lightning;
pub mod particles;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

use crate::{
    domain::weather::WeatherState,
    render::{self, Layers, RenderError, SurfaceSet},
};

pub use atmosphere::Atmosphere;
pub use config::EngineConfig;
pub use error::EngineError;
pub use frames::{FrameHandle, FrameQueue, FrameScheduler};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn sanitized(width: f32, height: f32) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: clean(width),
            height: clean(height),
        }
    }
}

fn valid_ratio(ratio: f32) -> Result<f32, EngineError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(EngineError::InvalidPixelRatio(ratio))
    }
}

pub struct WeatherEngine<F: FrameScheduler = FrameQueue, R: Rng = StdRng> {
    config: EngineConfig,
    atmosphere: Atmosphere,
    layers: Layers,
    scheduler: F,
    rng: R,
    pending: Option<FrameHandle>,
    ticks: u64,
    skipped_frames: u64,
}

impl<F: FrameScheduler> WeatherEngine<F, StdRng> {
    pub fn new(
        surfaces: SurfaceSet<'_>,
        scheduler: F,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        Self::with_rng(surfaces, scheduler, config, StdRng::from_os_rng())
    }
}

impl<F: FrameScheduler, R: Rng> WeatherEngine<F, R> {
    pub fn with_rng(
        surfaces: SurfaceSet<'_>,
        scheduler: F,
        config: EngineConfig,
        rng: R,
    ) -> Result<Self, EngineError> {
        valid_ratio(config.pixel_ratio)?;
        let layers =
            Layers::acquire(surfaces).map_err(|layer| EngineError::SurfaceUnavailable { layer })?;
        Ok(Self {
            config,
            atmosphere: Atmosphere::default(),
            layers,
            scheduler,
            rng,
            pending: None,
            ticks: 0,
            skipped_frames: 0,
        })
    }

    pub fn start(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if self
            .atmosphere
            .seed_clouds(self.config.cloud_count, &mut self.rng)
        {
            debug!(clouds = self.config.cloud_count, "cloud field seeded");
        }
        self.pending = Some(self.scheduler.request_frame());
        debug!("engine started");
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            debug!(ticks = self.ticks, "engine stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Frame callback. Runs one tick and reschedules when `handle` is the
    /// pending frame; anything else is ignored and `false` returned.
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        self.tick();
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    fn tick(&mut self) {
        self.atmosphere.advance(self.config.time_step, &mut self.rng);
        self.render_or_skip();
        self.atmosphere
            .step_lightning(self.config.flash_tuning(), &mut self.rng);
        self.ticks += 1;
    }

    pub fn render(&mut self) -> Result<(), RenderError> {
        render::paint_frame(
            &mut self.layers,
            &self.atmosphere,
            self.config.flash_threshold,
            &mut self.rng,
        )
    }

    fn render_or_skip(&mut self) {
        if let Err(err) = self.render() {
            self.skipped_frames += 1;
            warn!(error = %err, skipped = self.skipped_frames, "frame skipped");
        }
    }

    /// Set the logical size and repaint at once. A layer whose buffer cannot
    /// be allocated is detached and reported after the repaint.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        let viewport = Viewport::sanitized(width, height);
        self.atmosphere.set_viewport(viewport);
        let mut failures = self
            .layers
            .resize(viewport.width, viewport.height, self.config.pixel_ratio)
            .into_iter();
        debug!(
            width = viewport.width,
            height = viewport.height,
            ratio = self.config.pixel_ratio,
            "viewport resized"
        );
        self.render_or_skip();

        let first = failures.next();
        for (layer, err) in failures {
            warn!(layer = layer.name(), error = %err, "layer detached");
        }
        match first {
            Some((layer, source)) => Err(EngineError::Resize { layer, source }),
            None => Ok(()),
        }
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) -> Result<(), EngineError> {
        self.config.pixel_ratio = valid_ratio(ratio)?;
        Ok(())
    }

    pub fn set_weather(&mut self, label: &str) -> bool {
        self.atmosphere.set_weather(label, &mut self.rng)
    }

    pub fn set_state(&mut self, state: WeatherState) -> bool {
        self.atmosphere.set_state(state, &mut self.rng)
    }

    #[must_use]
    pub fn weather(&self) -> Option<&WeatherState> {
        self.atmosphere.weather()
    }

    #[must_use]
    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    #[must_use]
    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }
}

impl<R: Rng> WeatherEngine<FrameQueue, R> {
    pub fn pump(&mut self) -> bool {
        match self.scheduler.take_due() {
            Some(handle) => self.on_frame(handle),
            None => false,
        }
    }
}
