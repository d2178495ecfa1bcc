use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season for a zero-based season count; wraps every four.
    #[must_use]
    pub fn from_index(idx: u64) -> Season {
        match idx % 4 {
            0 => Season::Spring,
            1 => Season::Summer,
            2 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Multiplier applied to flora growth and spread.
    #[must_use]
    pub fn growth_multiplier(&self) -> f32 {
        match self {
            Season::Spring => 1.5,
            Season::Summer => 1.0,
            Season::Autumn => 0.6,
            Season::Winter => 0.2,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Dawn,
    Day,
    Dusk,
    Night,
}

impl TimeOfDay {
    /// Phase for a fraction of the day in `[0, 1)`.
    #[must_use]
    pub fn from_fraction(frac: f32) -> TimeOfDay {
        if frac < 0.2 {
            TimeOfDay::Dawn
        } else if frac < 0.6 {
            TimeOfDay::Day
        } else if frac < 0.8 {
            TimeOfDay::Dusk
        } else {
            TimeOfDay::Night
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Dawn => "dawn",
            TimeOfDay::Day => "day",
            TimeOfDay::Dusk => "dusk",
            TimeOfDay::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeatherKind {
    Rain,
    Drought,
    Storm,
}

impl WeatherKind {
    /// Roll order when several kinds fire on the same tick.
    pub const ALL: [WeatherKind; 3] = [WeatherKind::Rain, WeatherKind::Drought, WeatherKind::Storm];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WeatherKind::Rain => "rain",
            WeatherKind::Drought => "drought",
            WeatherKind::Storm => "storm",
        }
    }
}

/// The single active weather event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherEvent {
    pub kind: WeatherKind,
    pub remaining: u32,
    /// Growth multiplier for rain and drought, energy damage for storms.
    pub magnitude: f32,
}
