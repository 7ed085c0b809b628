use serde::{Deserialize, Serialize};

use super::{clouds::DEFAULT_CLOUD_COUNT, lightning::FlashTuning};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub cloud_count: usize,
    pub time_step: f64,
    pub flash_chance: f64,
    pub flash_peak: f32,
    pub flash_decay: f32,
    pub flash_threshold: f32,
    pub pixel_ratio: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let flash = FlashTuning::default();
        Self {
            cloud_count: DEFAULT_CLOUD_COUNT,
            time_step: 0.016,
            flash_chance: flash.chance,
            flash_peak: flash.peak,
            flash_decay: flash.decay,
            flash_threshold: 0.01,
            pixel_ratio: 1.0,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn flash_tuning(&self) -> FlashTuning {
        FlashTuning {
            chance: self.flash_chance.clamp(0.0, 1.0),
            peak: self.flash_peak,
            decay: self.flash_decay,
        }
    }
}
