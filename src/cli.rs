#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_FPS: u8 = 30;
pub const DEFAULT_SCALE: f32 = 0.25;
pub const DEFAULT_DEMO_INTERVAL: u64 = 5;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "atmos-backdrop",
    version,
    about = "Animated weather backdrop for the terminal"
)]
pub struct Cli {
    /// Weather label (sunny, rainy, pouring, snowy-rainy, ...)
    pub weather: Option<String>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Canvas pixels per logical pixel; one terminal half-cell is one canvas pixel
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = parse_scale)]
    pub scale: f32,

    /// Hide the lightning flash layer
    #[arg(long)]
    pub no_flash: bool,

    /// Seed for a reproducible animation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cycle through every weather state
    #[arg(long)]
    pub demo: bool,

    /// Seconds per weather state in demo mode
    #[arg(long, default_value_t = DEFAULT_DEMO_INTERVAL, value_parser = clap::value_parser!(u64).range(1..))]
    pub demo_interval: u64,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_scale(raw: &str) -> Result<f32, String> {
    let scale: f32 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if scale.is_finite() && scale > 0.0 && scale <= 4.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be in (0, 4], got {scale}"))
    }
}
