use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{
    app::{
        events::{AppEvent, start_demo_task, start_frame_task},
        settings::RuntimeSettings,
    },
    cli::Cli,
    domain::weather::WeatherState,
    engine::{EngineConfig, FrameQueue, WeatherEngine},
    render::{OffscreenSurface, SurfaceSet},
};

pub const STATUS_ROWS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Paused,
    Quit,
}

pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub engine: WeatherEngine<FrameQueue, StdRng>,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub flash_enabled: bool,
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(cli: &Cli, settings: RuntimeSettings, terminal_size: (u16, u16)) -> Result<Self> {
        let config = EngineConfig {
            pixel_ratio: settings.scale,
            ..settings.engine.clone()
        };
        let rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let (mut bg, mut scene, mut fx) = (OffscreenSurface, OffscreenSurface, OffscreenSurface);
        let engine = WeatherEngine::with_rng(
            SurfaceSet {
                background: &mut bg,
                scene: &mut scene,
                effects: &mut fx,
            },
            FrameQueue::new(),
            config,
            rng,
        )
        .context("creating weather engine failed")?;

        let mut state = Self {
            mode: AppMode::Running,
            running: true,
            engine,
            flash_enabled: !settings.no_flash,
            settings,
            settings_path: None,
            terminal_size,
        };
        state.resize_backdrop(terminal_size.0, terminal_size.1);
        state.engine.set_state(state.settings.weather.clone());
        if let Err(err) = state.engine.render() {
            warn!(error = %err, "initial paint failed");
        }
        Ok(state)
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone(), self.settings.fps);
                if cli.demo {
                    start_demo_task(tx.clone(), cli.demo_interval);
                }
                self.engine.start();
                info!(
                    weather = %self.settings.weather,
                    fps = self.settings.fps,
                    scale = self.settings.scale,
                    demo = cli.demo,
                    "backdrop started"
                );
            }
            AppEvent::TickFrame => {
                self.engine.pump();
            }
            AppEvent::CycleWeather => self.cycle_weather(1),
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.engine.stop();
                self.mode = AppMode::Quit;
                info!(ticks = self.engine.ticks(), "backdrop stopped");
            }
        }
        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => tx.send(AppEvent::Quit).await?,
                KeyCode::Left => self.cycle_weather(-1),
                KeyCode::Right => self.cycle_weather(1),
                _ => match command_char(key) {
                    Some('q') => tx.send(AppEvent::Quit).await?,
                    Some('h') => self.cycle_weather(-1),
                    Some('l') => self.cycle_weather(1),
                    Some(' ') => self.toggle_pause(),
                    Some('f') => self.flash_enabled = !self.flash_enabled,
                    _ => {}
                },
            },
            Event::Resize(cols, rows) => self.resize_backdrop(cols, rows),
            _ => {}
        }
        Ok(())
    }

    pub fn cycle_weather(&mut self, direction: i8) {
        let next = self
            .engine
            .weather()
            .map_or(WeatherState::Sunny, |current| current.cycle(direction));
        self.settings.weather = next.clone();
        self.engine.set_state(next);
        if self.mode == AppMode::Paused
            && let Err(err) = self.engine.render()
        {
            warn!(error = %err, "repaint after weather change failed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.mode {
            AppMode::Running => {
                self.engine.stop();
                self.mode = AppMode::Paused;
            }
            AppMode::Paused => {
                self.engine.start();
                self.mode = AppMode::Running;
            }
            AppMode::Quit => {}
        }
    }

    pub fn resize_backdrop(&mut self, cols: u16, rows: u16) {
        self.terminal_size = (cols, rows);
        let scale = self.settings.scale;
        let pixel_rows = rows.saturating_sub(STATUS_ROWS).saturating_mul(2);
        if let Err(err) = self
            .engine
            .resize(f32::from(cols) / scale, f32::from(pixel_rows) / scale)
        {
            warn!(error = %err, "backdrop resize failed");
        }
    }

    pub fn settings_snapshot(&self) -> RuntimeSettings {
        RuntimeSettings {
            no_flash: !self.flash_enabled,
            ..self.settings.clone()
        }
    }
}

fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}
