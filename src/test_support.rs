use crate::{
    app::{settings::RuntimeSettings, state::AppState},
    cli::{Cli, DEFAULT_DEMO_INTERVAL, DEFAULT_FPS, DEFAULT_SCALE},
    domain::weather::WeatherState,
};

pub(crate) fn default_cli() -> Cli {
    Cli {
        weather: None,
        fps: DEFAULT_FPS,
        scale: DEFAULT_SCALE,
        no_flash: false,
        seed: Some(7),
        demo: false,
        demo_interval: DEFAULT_DEMO_INTERVAL,
        log_file: None,
    }
}

pub(crate) fn seeded_state(weather: &str, terminal_size: (u16, u16)) -> AppState {
    let settings = RuntimeSettings {
        weather: WeatherState::from_label(weather),
        ..RuntimeSettings::default()
    };
    AppState::new(&default_cli(), settings, terminal_size).expect("seeded app state")
}
