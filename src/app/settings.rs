use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, DEFAULT_FPS, DEFAULT_SCALE},
    domain::weather::WeatherState,
    engine::EngineConfig,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub weather: WeatherState,
    pub fps: u8,
    pub scale: f32,
    pub no_flash: bool,
    pub engine: EngineConfig,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            weather: WeatherState::Sunny,
            fps: DEFAULT_FPS,
            scale: DEFAULT_SCALE,
            no_flash: false,
            engine: EngineConfig::default(),
        }
    }
}

impl RuntimeSettings {
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self::default().with_cli_overrides(cli)
    }

    #[must_use]
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(weather) = &cli.weather {
            self.weather = WeatherState::from_label(weather);
        }
        if cli.fps != DEFAULT_FPS {
            self.fps = cli.fps;
        }
        if cli.scale != DEFAULT_SCALE {
            self.scale = cli.scale;
        }
        if cli.no_flash {
            self.no_flash = true;
        }
        self.sanitized()
    }

    fn sanitized(mut self) -> Self {
        self.fps = self.fps.clamp(15, 60);
        if !(self.scale.is_finite() && self.scale > 0.0 && self.scale <= 4.0) {
            self.scale = DEFAULT_SCALE;
        }
        let defaults = EngineConfig::default();
        if !(self.engine.time_step.is_finite() && self.engine.time_step > 0.0) {
            self.engine.time_step = defaults.time_step;
        }
        if !(self.engine.flash_decay.is_finite() && (0.0..1.0).contains(&self.engine.flash_decay))
        {
            self.engine.flash_decay = defaults.flash_decay;
        }
        self
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    let Some(path) = settings_path() else {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    };
    (load_from_path(cli, &path), Some(path))
}

pub fn load_from_path(cli: &Cli, path: &Path) -> RuntimeSettings {
    let saved = fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str::<RuntimeSettings>(&content).ok())
        .unwrap_or_default();
    saved.with_cli_overrides(cli)
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    resolve_settings_path(
        std::env::var_os("ATMOS_BACKDROP_CONFIG_DIR"),
        std::env::var_os("HOME"),
    )
}

pub(crate) fn resolve_settings_path(
    config_dir: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    if let Some(base) = config_dir {
        return Some(PathBuf::from(base).join("settings.json"));
    }
    Some(
        PathBuf::from(home?)
            .join(".config")
            .join("atmos-backdrop")
            .join("settings.json"),
    )
}
