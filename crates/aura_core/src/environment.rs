use crate::config::{WeatherConfig, WorldConfig};
use aura_data::{Season, TimeOfDay, WeatherEvent, WeatherKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Monotonic tick counter with the derived calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldClock {
    pub tick: u64,
    pub day_length: u64,
    pub season_length: u64,
}

impl WorldClock {
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            tick: 0,
            day_length: config.day_length.max(1),
            season_length: config.season_length.max(1),
        }
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Position within the current day in `[0, 1)`.
    #[must_use]
    pub fn day_fraction(&self) -> f32 {
        (self.tick % self.day_length) as f32 / self.day_length as f32
    }

    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_fraction(self.day_fraction())
    }

    #[must_use]
    pub fn season(&self) -> Season {
        Season::from_index(self.tick / self.season_length)
    }
}

/// Calendar plus the weather generator.
///
/// At most one weather event is active. New events are only drawn while the
/// sky is clear, but the roll itself is consumed every tick so the random
/// stream does not depend on the weather history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub clock: WorldClock,
    pub weather: Option<WeatherEvent>,
    #[serde(skip)]
    seen: BTreeSet<WeatherKind>,
}

impl Environment {
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            clock: WorldClock::new(config),
            weather: None,
            seen: BTreeSet::new(),
        }
    }

    /// Start-of-tick step: advance the clock, then roll for new weather.
    pub fn advance<R: Rng>(&mut self, config: &WeatherConfig, rng: &mut R) -> Option<WeatherKind> {
        self.clock.advance();

        let mut fired = None;
        for kind in WeatherKind::ALL {
            let hit = rng.gen::<f32>() < config.probability(kind);
            if hit && fired.is_none() {
                fired = Some(kind);
            }
        }

        let started = match (self.weather, fired) {
            (None, Some(kind)) => {
                self.start(kind, config);
                Some(kind)
            }
            _ => None,
        };

        if let Some(event) = self.weather {
            self.seen.insert(event.kind);
        }
        started
    }

    /// End-of-tick step: count down the active event and clear it at zero.
    pub fn finish_tick(&mut self) -> Option<WeatherKind> {
        let event = self.weather.as_mut()?;
        event.remaining = event.remaining.saturating_sub(1);
        if event.remaining == 0 {
            let kind = event.kind;
            self.weather = None;
            tracing::info!(tick = self.clock.tick, weather = kind.name(), "Weather cleared");
            return Some(kind);
        }
        None
    }

    /// Starts an event immediately. Refused while another event is active.
    pub fn force_weather(&mut self, kind: WeatherKind, config: &WeatherConfig) -> bool {
        if self.weather.is_some() {
            return false;
        }
        self.start(kind, config);
        self.seen.insert(kind);
        true
    }

    fn start(&mut self, kind: WeatherKind, config: &WeatherConfig) {
        self.weather = Some(WeatherEvent {
            kind,
            remaining: config.duration(kind).max(1),
            magnitude: config.magnitude(kind),
        });
        tracing::info!(
            tick = self.clock.tick,
            weather = kind.name(),
            duration = config.duration(kind),
            "Weather event started"
        );
    }

    #[must_use]
    pub fn active_kind(&self) -> Option<WeatherKind> {
        self.weather.map(|w| w.kind)
    }

    /// Weather factor on flora growth and spread. Storms leave plants alone.
    #[must_use]
    pub fn weather_multiplier(&self) -> f32 {
        match self.weather {
            Some(WeatherEvent {
                kind: WeatherKind::Rain | WeatherKind::Drought,
                magnitude,
                ..
            }) => magnitude,
            _ => 1.0,
        }
    }

    #[must_use]
    pub fn season_multiplier(&self) -> f32 {
        self.clock.season().growth_multiplier()
    }

    #[must_use]
    pub fn growth_multiplier(&self) -> f32 {
        self.season_multiplier() * self.weather_multiplier()
    }

    /// Storm damage per struck creature, when a storm is active.
    #[must_use]
    pub fn storm_damage(&self) -> Option<f32> {
        match self.weather {
            Some(WeatherEvent {
                kind: WeatherKind::Storm,
                magnitude,
                ..
            }) => Some(magnitude),
            _ => None,
        }
    }

    /// Kinds active at any point since the previous call, plus the current one.
    pub fn take_seen_events(&mut self) -> BTreeSet<WeatherKind> {
        let mut seen = std::mem::take(&mut self.seen);
        if let Some(kind) = self.active_kind() {
            seen.insert(kind);
        }
        seen
    }
}
