use super::entity::{FaunaSpecies, FloraKind};
use super::environment::{Season, TimeOfDay, WeatherKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Why a creature left the simulation.
pub enum DeathCause {
    /// Energy ran out through metabolism or movement.
    Starvation,
    /// Caught and eaten by another creature.
    Predation,
    /// Exceeded the configured maximum age.
    OldAge,
    /// Storm damage pushed energy to zero.
    Storm,
}

impl DeathCause {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DeathCause::Starvation => "starvation",
            DeathCause::Predation => "predation",
            DeathCause::OldAge => "old_age",
            DeathCause::Storm => "storm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Cumulative fauna deaths split by cause.
pub struct DeathTally {
    pub starvation: u64,
    pub predation: u64,
    pub old_age: u64,
    pub storm: u64,
}

impl DeathTally {
    pub fn record(&mut self, cause: DeathCause) {
        match cause {
            DeathCause::Starvation => self.starvation += 1,
            DeathCause::Predation => self.predation += 1,
            DeathCause::OldAge => self.old_age += 1,
            DeathCause::Storm => self.storm += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.starvation + self.predation + self.old_age + self.storm
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Live entity counts for one tick.
pub struct SpeciesCounts {
    pub herbivores: usize,
    pub predators: usize,
    pub omnivores: usize,
    pub grass: usize,
    pub bushes: usize,
    pub trees: usize,
}

impl SpeciesCounts {
    pub fn add_fauna(&mut self, species: FaunaSpecies) {
        match species {
            FaunaSpecies::Herbivore => self.herbivores += 1,
            FaunaSpecies::Predator => self.predators += 1,
            FaunaSpecies::Omnivore => self.omnivores += 1,
        }
    }

    pub fn add_flora(&mut self, kind: FloraKind) {
        match kind {
            FloraKind::Grass => self.grass += 1,
            FloraKind::Bush => self.bushes += 1,
            FloraKind::Tree => self.trees += 1,
        }
    }

    #[must_use]
    pub fn fauna(&self, species: FaunaSpecies) -> usize {
        match species {
            FaunaSpecies::Herbivore => self.herbivores,
            FaunaSpecies::Predator => self.predators,
            FaunaSpecies::Omnivore => self.omnivores,
        }
    }

    #[must_use]
    pub fn fauna_total(&self) -> usize {
        self.herbivores + self.predators + self.omnivores
    }

    #[must_use]
    pub fn flora_total(&self) -> usize {
        self.grass + self.bushes + self.trees
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Mean heritable traits over live fauna; zero when none are alive.
pub struct TraitAverages {
    pub speed: f32,
    pub vision: f32,
    pub size: f32,
    pub metabolism: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Most recent per-tick samples, oldest first.
pub struct PopulationHistory {
    pub herbivores: Vec<usize>,
    pub predators: Vec<usize>,
    pub omnivores: Vec<usize>,
    pub flora: Vec<usize>,
    pub avg_energy: Vec<f32>,
    pub avg_speed: Vec<f32>,
    pub avg_vision: Vec<f32>,
    pub avg_size: Vec<f32>,
    /// Births during each tick, not the running total.
    pub births: Vec<u64>,
    /// Deaths during each tick, not the running total.
    pub deaths: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Immutable per-tick statistics published by the world.
pub struct StatsSnapshot {
    /// Tick the snapshot was taken at.
    pub tick: u64,
    pub season: Season,
    pub time_of_day: TimeOfDay,
    pub weather: Option<WeatherKind>,
    /// Combined season and weather multiplier applied to flora growth.
    pub growth_multiplier: f32,
    pub counts: SpeciesCounts,
    pub traits: TraitAverages,
    /// Mean fauna energy.
    pub avg_energy: f32,
    /// Shannon index over fauna species proportions.
    pub biodiversity: f64,
    /// Cumulative fauna births since world creation.
    pub births: u64,
    /// Cumulative fauna deaths since world creation.
    pub deaths: u64,
    pub deaths_by_cause: DeathTally,
    pub flora_spawned: u64,
    pub flora_removed: u64,
    /// Largest live fauna count observed so far.
    pub peak_population: usize,
    pub max_generation: u32,
    /// Mean soil nutrient level over all cells.
    pub avg_nutrients: f32,
    pub history: PopulationHistory,
}
