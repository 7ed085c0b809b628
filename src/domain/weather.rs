use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherState {
    Sunny,
    ClearNight,
    Cloudy,
    PartlyCloudy,
    Rainy,
    Pouring,
    Lightning,
    LightningRainy,
    Snowy,
    SnowyRainy,
    Windy,
    WindyVariant,
    Fog,
    Hail,
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyKind {
    Day,
    Night,
    Storm,
    Snow,
    Overcast,
    Wind,
    Fog,
    Unstyled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudMood {
    Fluffy,
    Heavy,
    Grey,
    Dusty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainClass {
    Moderate,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeEntry {
    Rain(RainClass, usize),
    Snow(usize),
    Debris(usize),
    Dust(usize),
    Fog(usize),
}

impl RecipeEntry {
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::Rain(_, n) | Self::Snow(n) | Self::Debris(n) | Self::Dust(n) | Self::Fog(n) => n,
        }
    }
}

impl WeatherState {
    pub const ALL: [WeatherState; 14] = [
        Self::Sunny,
        Self::ClearNight,
        Self::Cloudy,
        Self::PartlyCloudy,
        Self::Rainy,
        Self::Pouring,
        Self::Lightning,
        Self::LightningRainy,
        Self::Snowy,
        Self::SnowyRainy,
        Self::Windy,
        Self::WindyVariant,
        Self::Fog,
        Self::Hail,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "sunny" => Self::Sunny,
            "clear-night" => Self::ClearNight,
            "cloudy" => Self::Cloudy,
            "partlycloudy" => Self::PartlyCloudy,
            "rainy" => Self::Rainy,
            "pouring" => Self::Pouring,
            "lightning" => Self::Lightning,
            "lightning-rainy" => Self::LightningRainy,
            "snowy" => Self::Snowy,
            "snowy-rainy" => Self::SnowyRainy,
            "windy" => Self::Windy,
            "windy-variant" => Self::WindyVariant,
            "fog" => Self::Fog,
            "hail" => Self::Hail,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Sunny => "sunny",
            Self::ClearNight => "clear-night",
            Self::Cloudy => "cloudy",
            Self::PartlyCloudy => "partlycloudy",
            Self::Rainy => "rainy",
            Self::Pouring => "pouring",
            Self::Lightning => "lightning",
            Self::LightningRainy => "lightning-rainy",
            Self::Snowy => "snowy",
            Self::SnowyRainy => "snowy-rainy",
            Self::Windy => "windy",
            Self::WindyVariant => "windy-variant",
            Self::Fog => "fog",
            Self::Hail => "hail",
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    #[must_use]
    pub fn has_lightning(&self) -> bool {
        matches!(self, Self::Lightning | Self::LightningRainy)
    }

    #[must_use]
    pub fn is_pouring(&self) -> bool {
        matches!(self, Self::Pouring)
    }

    #[must_use]
    pub fn recipe(&self) -> &'static [RecipeEntry] {
        match self {
            Self::Rainy | Self::LightningRainy => &[RecipeEntry::Rain(RainClass::Moderate, 100)],
            Self::Pouring => &[RecipeEntry::Rain(RainClass::Fast, 200)],
            Self::Snowy => &[RecipeEntry::Snow(80)],
            Self::SnowyRainy => &[
                RecipeEntry::Snow(70),
                RecipeEntry::Rain(RainClass::Moderate, 70),
            ],
            Self::Windy | Self::WindyVariant => &[RecipeEntry::Debris(30)],
            Self::Sunny | Self::ClearNight => &[RecipeEntry::Dust(20)],
            Self::Fog => &[RecipeEntry::Fog(50)],
            Self::Cloudy
            | Self::PartlyCloudy
            | Self::Lightning
            | Self::Hail
            | Self::Other(_) => &[],
        }
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.recipe().iter().map(|entry| entry.count()).sum()
    }

    #[must_use]
    pub fn sky(&self) -> SkyKind {
        match self {
            Self::Sunny | Self::PartlyCloudy => SkyKind::Day,
            Self::ClearNight => SkyKind::Night,
            Self::Rainy | Self::Pouring | Self::Lightning | Self::LightningRainy | Self::Hail => {
                SkyKind::Storm
            }
            Self::Snowy | Self::SnowyRainy => SkyKind::Snow,
            Self::Cloudy => SkyKind::Overcast,
            Self::Windy | Self::WindyVariant => SkyKind::Wind,
            Self::Fog => SkyKind::Fog,
            Self::Other(_) => SkyKind::Unstyled,
        }
    }

    #[must_use]
    pub fn cloud_mood(&self) -> Option<CloudMood> {
        match self {
            Self::PartlyCloudy => Some(CloudMood::Fluffy),
            Self::Rainy | Self::Pouring | Self::Lightning | Self::LightningRainy | Self::Hail => {
                Some(CloudMood::Heavy)
            }
            Self::Cloudy => Some(CloudMood::Grey),
            Self::Windy | Self::WindyVariant => Some(CloudMood::Dusty),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_sun_rays(&self) -> bool {
        matches!(self, Self::Sunny | Self::PartlyCloudy)
    }

    /// Next known state in [`WeatherState::ALL`], wrapping around. Unknown
    /// labels step to the first or last entry.
    #[must_use]
    pub fn cycle(&self, direction: i8) -> Self {
        let len = Self::ALL.len();
        let next = match Self::ALL.iter().position(|state| state == self) {
            Some(idx) if direction >= 0 => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None if direction >= 0 => 0,
            None => len - 1,
        };
        Self::ALL[next].clone()
    }
}

impl From<String> for WeatherState {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for WeatherState {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<WeatherState> for String {
    fn from(state: WeatherState) -> Self {
        state.label().to_string()
    }
}

impl fmt::Display for WeatherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
