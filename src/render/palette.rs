#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use tiny_skia::Color;

use crate::domain::weather::{CloudMood, SkyKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn fade(self, alpha: f32) -> Self {
        Self {
            a: (self.a * alpha).clamp(0.0, 1.0),
            ..self
        }
    }

    #[must_use]
    pub fn to_skia(self) -> Color {
        Color::from_rgba(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            self.a.clamp(0.0, 1.0),
        )
        .unwrap_or(Color::TRANSPARENT)
    }
}

pub const WHITE: Rgba = Rgba::rgba(255, 255, 255, 1.0);
pub const UNSTYLED: Rgba = Rgba::hex(0x33_33_33);

pub const SUN_RAY: Rgba = Rgba::rgba(255, 255, 200, 0.05);
pub const RAIN_STREAK: Rgba = Rgba::rgba(255, 255, 255, 0.5);
pub const DEBRIS: Rgba = Rgba::rgba(30, 30, 30, 0.5);
pub const FOG_PATCH: Rgba = Rgba::rgba(255, 255, 255, 0.1);

pub type Stops = &'static [(f32, Rgba)];

const DAY_SKY: Stops = &[
    (0.0, Rgba::hex(0xff_d7_00)),
    (0.2, Rgba::hex(0xff_aa_00)),
    (1.0, Rgba::hex(0x4d_a6_ff)),
];
const NIGHT_SKY: Stops = &[(0.0, Rgba::hex(0x2b_32_b2)), (1.0, Rgba::hex(0x14_88_cc))];
const STORM_SKY: Stops = &[(0.0, Rgba::hex(0x1a_1a_2e)), (1.0, Rgba::hex(0x16_21_3e))];
const SNOW_SKY: Stops = &[(0.0, Rgba::hex(0xa8_c0_ff)), (1.0, Rgba::hex(0x3f_2b_96))];
const OVERCAST_SKY: Stops = &[(0.0, Rgba::hex(0x75_7f_9a)), (1.0, Rgba::hex(0xd7_dd_e8))];
const WIND_SKY: Stops = &[(0.0, Rgba::hex(0x48_55_63)), (1.0, Rgba::hex(0x29_32_3c))];
const FOG_SKY: Stops = &[(0.0, Rgba::hex(0x8e_9e_ab)), (1.0, Rgba::hex(0xee_f2_f3))];
const UNSTYLED_SKY: Stops = &[(0.0, UNSTYLED), (1.0, UNSTYLED)];

#[must_use]
pub fn sky_stops(sky: SkyKind) -> Stops {
    match sky {
        SkyKind::Day => DAY_SKY,
        SkyKind::Night => NIGHT_SKY,
        SkyKind::Storm => STORM_SKY,
        SkyKind::Snow => SNOW_SKY,
        SkyKind::Overcast => OVERCAST_SKY,
        SkyKind::Wind => WIND_SKY,
        SkyKind::Fog => FOG_SKY,
        SkyKind::Unstyled => UNSTYLED_SKY,
    }
}

#[must_use]
pub fn cloud_core(mood: CloudMood) -> Rgba {
    match mood {
        CloudMood::Fluffy => Rgba::rgba(255, 255, 255, 0.4),
        CloudMood::Heavy => Rgba::rgba(30, 30, 40, 0.6),
        CloudMood::Grey => Rgba::rgba(240, 240, 255, 0.3),
        CloudMood::Dusty => Rgba::rgba(100, 100, 100, 0.4),
    }
}
