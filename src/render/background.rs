use std::f32::consts::FRAC_PI_4;
use std::f64::consts::TAU;

use crate::{
    domain::weather::{SkyKind, WeatherState},
    engine::clouds::Cloud,
};

use super::{
    RenderError,
    canvas::Canvas,
    palette::{self, Rgba},
};

const SUN_X: f32 = 0.85;
const SUN_Y: f32 = 0.15;
const SUN_INNER_RADIUS: f32 = 10.0;
const RAY_COUNT: usize = 8;
const RAY_HALF_WIDTH: f32 = 100.0;
const RAY_SPIN: f64 = 0.05;

pub fn paint(
    canvas: &mut Canvas,
    weather: Option<&WeatherState>,
    clouds: &[Cloud],
    time: f64,
) -> Result<(), RenderError> {
    let (width, height) = canvas.logical_size();
    let sky = weather.map_or(SkyKind::Unstyled, WeatherState::sky);
    let stops = palette::sky_stops(sky);
    let sun = (width * SUN_X, height * SUN_Y);

    match sky {
        SkyKind::Day | SkyKind::Night => {
            canvas.fill_radial_gradient(sun, SUN_INNER_RADIUS, width, stops)?;
        }
        SkyKind::Unstyled => canvas.fill_color(palette::UNSTYLED)?,
        _ => canvas.fill_vertical_gradient(stops)?,
    }

    if weather.is_some_and(WeatherState::has_sun_rays) {
        paint_rays(canvas, sun, width, time)?;
    }
    if let Some(mood) = weather.and_then(WeatherState::cloud_mood) {
        paint_clouds(canvas, clouds, palette::cloud_core(mood))?;
    }
    Ok(())
}

fn paint_rays(
    canvas: &mut Canvas,
    sun: (f32, f32),
    width: f32,
    time: f64,
) -> Result<(), RenderError> {
    let wedge = [
        (0.0, 0.0),
        (width, -RAY_HALF_WIDTH),
        (width, RAY_HALF_WIDTH),
    ];
    #[allow(clippy::cast_possible_truncation)]
    let spin = (time * RAY_SPIN).rem_euclid(TAU) as f32;
    for i in 1..=RAY_COUNT {
        #[allow(clippy::cast_precision_loss)]
        let angle = spin + FRAC_PI_4 * i as f32;
        canvas.fill_polygon(&wedge, sun, angle, palette::SUN_RAY)?;
    }
    Ok(())
}

fn paint_clouds(canvas: &mut Canvas, clouds: &[Cloud], core: Rgba) -> Result<(), RenderError> {
    for cloud in clouds {
        canvas.fill_soft_disc(cloud.x, cloud.y, cloud.radius, core)?;
    }
    Ok(())
}
