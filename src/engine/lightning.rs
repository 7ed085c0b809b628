use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashTuning {
    pub chance: f64,
    pub peak: f32,
    pub decay: f32,
}

impl Default for FlashTuning {
    fn default() -> Self {
        Self {
            chance: 0.01,
            peak: 0.8,
            decay: 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Lightning {
    intensity: f32,
}

impl Lightning {
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn clear(&mut self) {
        self.intensity = 0.0;
    }

    pub fn step<R: Rng + ?Sized>(&mut self, active: bool, tuning: FlashTuning, rng: &mut R) {
        if !active {
            self.intensity = 0.0;
            return;
        }
        if rng.random_bool(tuning.chance.clamp(0.0, 1.0)) {
            self.intensity = tuning.peak;
        }
        self.intensity = (self.intensity * tuning.decay).clamp(0.0, 1.0);
    }
}
