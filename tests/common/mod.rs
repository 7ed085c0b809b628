#![allow(dead_code)]

use atmos_backdrop::{
    app::{settings::RuntimeSettings, state::AppState},
    cli::Cli,
    domain::weather::WeatherState,
    engine::{EngineConfig, FrameHandle, FrameQueue, FrameScheduler, WeatherEngine},
    render::{Canvas, ContextOptions, OffscreenSurface, Surface, SurfaceSet},
};
use rand::{SeedableRng, rngs::StdRng};

pub fn seeded_cli() -> Cli {
    Cli {
        weather: None,
        fps: 30,
        scale: 0.25,
        no_flash: false,
        seed: Some(11),
        demo: false,
        demo_interval: 5,
        log_file: None,
    }
}

pub fn app_state(weather: &str, cols: u16, rows: u16) -> AppState {
    let settings = RuntimeSettings {
        weather: WeatherState::from_label(weather),
        ..RuntimeSettings::default()
    };
    AppState::new(&seeded_cli(), settings, (cols, rows)).expect("app state")
}

#[derive(Debug, Default)]
pub struct RecordingScheduler {
    next: u64,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

impl RecordingScheduler {
    pub fn last_requested(&self) -> Option<FrameHandle> {
        self.requested.last().copied()
    }
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

pub struct DeadSurface;

impl Surface for DeadSurface {
    fn context_2d(&mut self, _options: ContextOptions) -> Option<Canvas> {
        None
    }
}

pub fn engine_with<F: FrameScheduler>(
    scheduler: F,
    config: EngineConfig,
    seed: u64,
) -> WeatherEngine<F, StdRng> {
    let (mut bg, mut scene, mut fx) = (OffscreenSurface, OffscreenSurface, OffscreenSurface);
    WeatherEngine::with_rng(
        SurfaceSet {
            background: &mut bg,
            scene: &mut scene,
            effects: &mut fx,
        },
        scheduler,
        config,
        StdRng::seed_from_u64(seed),
    )
    .expect("offscreen engine")
}

pub fn queued_engine(seed: u64) -> WeatherEngine<FrameQueue, StdRng> {
    engine_with(FrameQueue::new(), EngineConfig::default(), seed)
}
