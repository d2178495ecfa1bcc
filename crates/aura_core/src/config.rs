//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to a `config.toml` file.
//! Every section carries defaults, so a file only needs the keys it changes.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 80
//! height = 60
//! seed = 42
//!
//! [fauna.predator]
//! initial_count = 0
//!
//! [weather]
//! storm_probability = 0.0
//! ```

use crate::error::{ConfigError, Result};
use aura_data::{FaunaSpecies, FloraKind, GrowthStage, Traits, WeatherKind};
use serde::{Deserialize, Serialize};

macro_rules! ensure {
    ($cond:expr, $field:expr, $reason:expr) => {
        if !$cond {
            return Err(ConfigError::out_of_range($field, $reason));
        }
    };
}

fn check_probability(field: &'static str, value: f32) -> Result<()> {
    ensure!((0.0..=1.0).contains(&value), field, format!("must be in [0, 1] (got {value})"));
    Ok(())
}

/// Grid dimensions, calendar lengths and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    /// Ticks per day/night cycle.
    pub day_length: u64,
    /// Ticks per season.
    pub season_length: u64,
    pub seed: Option<u64>,
    /// Side of a spatial index bucket, in grid cells.
    pub index_cell_size: u16,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            day_length: 100,
            season_length: 500,
            seed: None,
            index_cell_size: 8,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TraitRange {
    pub min: f32,
    pub max: f32,
}

impl TraitRange {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Species-specific caps on heritable traits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TraitBounds {
    pub speed: TraitRange,
    pub vision: TraitRange,
    pub size: TraitRange,
    pub metabolism: TraitRange,
}

impl TraitBounds {
    #[must_use]
    pub fn clamp(&self, traits: Traits) -> Traits {
        Traits {
            speed: self.speed.clamp(traits.speed),
            vision: self.vision.clamp(traits.vision),
            size: self.size.clamp(traits.size),
            metabolism: self.metabolism.clamp(traits.metabolism),
        }
    }

    #[must_use]
    pub fn contains(&self, traits: &Traits) -> bool {
        self.speed.contains(traits.speed)
            && self.vision.contains(traits.vision)
            && self.size.contains(traits.size)
            && self.metabolism.contains(traits.metabolism)
    }

    fn ranges(&self) -> [(&'static str, TraitRange); 4] {
        [
            ("speed", self.speed),
            ("vision", self.vision),
            ("size", self.size),
            ("metabolism", self.metabolism),
        ]
    }
}

/// Per-species parameters, including the edibility row for the species.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeciesConfig {
    pub initial_count: usize,
    /// Founder traits before the initial jitter.
    pub traits: Traits,
    pub bounds: TraitBounds,
    pub mutation_rate: f32,
    pub eats_flora: bool,
    pub prey: Vec<FaunaSpecies>,
    /// Largest bite taken from a plant.
    pub energy_from_flora: f32,
    pub energy_from_prey: f32,
    pub hunt_success_rate: f32,
}

impl SpeciesConfig {
    #[must_use]
    pub fn hunts(&self, species: FaunaSpecies) -> bool {
        self.prey.contains(&species)
    }

    fn herbivore() -> Self {
        Self {
            initial_count: 30,
            traits: Traits {
                speed: 1.0,
                vision: 6.0,
                size: 1.0,
                metabolism: 0.8,
            },
            bounds: TraitBounds {
                speed: TraitRange::new(0.5, 2.5),
                vision: TraitRange::new(2.0, 12.0),
                size: TraitRange::new(0.5, 2.0),
                metabolism: TraitRange::new(0.4, 2.0),
            },
            mutation_rate: 0.1,
            eats_flora: true,
            prey: Vec::new(),
            energy_from_flora: 25.0,
            energy_from_prey: 0.0,
            hunt_success_rate: 0.0,
        }
    }

    fn predator() -> Self {
        Self {
            initial_count: 8,
            traits: Traits {
                speed: 1.5,
                vision: 6.0,
                size: 1.5,
                metabolism: 1.2,
            },
            bounds: TraitBounds {
                speed: TraitRange::new(0.5, 3.0),
                vision: TraitRange::new(2.0, 14.0),
                size: TraitRange::new(0.5, 3.0),
                metabolism: TraitRange::new(0.4, 2.5),
            },
            mutation_rate: 0.1,
            eats_flora: false,
            prey: vec![FaunaSpecies::Herbivore, FaunaSpecies::Omnivore],
            energy_from_flora: 0.0,
            energy_from_prey: 50.0,
            hunt_success_rate: 0.4,
        }
    }

    fn omnivore() -> Self {
        Self {
            initial_count: 5,
            traits: Traits {
                speed: 1.2,
                vision: 6.0,
                size: 1.2,
                metabolism: 1.0,
            },
            bounds: TraitBounds {
                speed: TraitRange::new(0.5, 2.8),
                vision: TraitRange::new(2.0, 13.0),
                size: TraitRange::new(0.5, 2.5),
                metabolism: TraitRange::new(0.4, 2.2),
            },
            mutation_rate: 0.1,
            eats_flora: true,
            prey: vec![FaunaSpecies::Herbivore],
            energy_from_flora: 15.0,
            energy_from_prey: 30.0,
            hunt_success_rate: 0.25,
        }
    }
}

/// Creature energy budget, lifecycle and reproduction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FaunaConfig {
    pub herbivore: SpeciesConfig,
    pub predator: SpeciesConfig,
    pub omnivore: SpeciesConfig,
    pub max_energy: f32,
    /// Founders start with `initial_energy + U[0, initial_energy_spread)`.
    pub initial_energy: f32,
    pub initial_energy_spread: f32,
    pub birth_energy: f32,
    pub max_age: u64,
    pub maturity_age: u64,
    pub reproduction_threshold: f32,
    pub reproduction_cost: f32,
    pub reproduction_cooldown: u32,
    /// Euclidean reach for a mating partner.
    pub mate_range: f32,
    pub base_metabolic_cost: f32,
    /// Energy per cell moved, scaled by size.
    pub move_cost: f32,
    /// Fraction of the base cost paid while resting.
    pub rest_cost_factor: f32,
    pub hunger_rate: f32,
    pub fear_decay: f32,
    pub failed_hunt_cost: f32,
    /// Cap on the size ratio bonus applied to hunt success.
    pub max_size_advantage: f32,
    /// Carcass energy per unit of size, returned to the soil on death.
    pub carcass_value: f32,
    pub crowding_normalization: f32,
}

impl Default for FaunaConfig {
    fn default() -> Self {
        Self {
            herbivore: SpeciesConfig::herbivore(),
            predator: SpeciesConfig::predator(),
            omnivore: SpeciesConfig::omnivore(),
            max_energy: 100.0,
            initial_energy: 70.0,
            initial_energy_spread: 20.0,
            birth_energy: 50.0,
            max_age: 800,
            maturity_age: 50,
            reproduction_threshold: 75.0,
            reproduction_cost: 40.0,
            reproduction_cooldown: 30,
            mate_range: 2.0,
            base_metabolic_cost: 0.3,
            move_cost: 0.1,
            rest_cost_factor: 0.5,
            hunger_rate: 0.005,
            fear_decay: 0.01,
            failed_hunt_cost: 2.0,
            max_size_advantage: 2.0,
            carcass_value: 10.0,
            crowding_normalization: 10.0,
        }
    }
}

impl FaunaConfig {
    #[must_use]
    pub fn species(&self, species: FaunaSpecies) -> &SpeciesConfig {
        match species {
            FaunaSpecies::Herbivore => &self.herbivore,
            FaunaSpecies::Predator => &self.predator,
            FaunaSpecies::Omnivore => &self.omnivore,
        }
    }

    pub fn species_mut(&mut self, species: FaunaSpecies) -> &mut SpeciesConfig {
        match species {
            FaunaSpecies::Herbivore => &mut self.herbivore,
            FaunaSpecies::Predator => &mut self.predator,
            FaunaSpecies::Omnivore => &mut self.omnivore,
        }
    }

    #[must_use]
    pub fn initial_total(&self) -> usize {
        FaunaSpecies::ALL
            .iter()
            .map(|s| self.species(*s).initial_count)
            .sum()
    }
}

/// Per-kind plant parameters. Thresholds are in accumulated growth units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FloraKindConfig {
    pub initial_count: usize,
    /// Food energy held by a fully grown plant.
    pub energy: f32,
    pub sprout_at: f32,
    pub mature_at: f32,
    pub decay_at: f32,
    pub max_age: u64,
    pub spread_probability: f32,
    /// Nutrients drawn from the cell each tick.
    pub nutrient_draw: f32,
    /// Ticks a decaying plant lingers before removal.
    pub decay_ticks: u32,
}

/// Plant growth, spreading and density.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FloraConfig {
    pub grass: FloraKindConfig,
    pub bush: FloraKindConfig,
    pub tree: FloraKindConfig,
    pub growth_rate: f32,
    pub seed_rate: f32,
    pub sprout_rate: f32,
    pub mature_rate: f32,
    /// Spreading stops once this fraction of cells holds a plant.
    pub max_density: f32,
    pub initial_mature_fraction: f32,
    /// Floor on the nutrient availability factor.
    pub min_availability: f32,
    /// Nutrients returned when a decayed plant is removed.
    pub decay_return: f32,
    /// Plants within this many cells count as neighbours for crowding.
    pub crowding_radius: u16,
    /// Growth slows once more than this many neighbours are nearby.
    pub crowding_limit: usize,
    pub crowding_penalty: f32,
}

impl Default for FloraConfig {
    fn default() -> Self {
        Self {
            grass: FloraKindConfig {
                initial_count: 200,
                energy: 10.0,
                sprout_at: 6.0,
                mature_at: 20.0,
                decay_at: 150.0,
                max_age: 200,
                spread_probability: 0.02,
                nutrient_draw: 0.005,
                decay_ticks: 10,
            },
            bush: FloraKindConfig {
                initial_count: 60,
                energy: 25.0,
                sprout_at: 18.0,
                mature_at: 60.0,
                decay_at: 400.0,
                max_age: 500,
                spread_probability: 0.015,
                nutrient_draw: 0.008,
                decay_ticks: 20,
            },
            tree: FloraKindConfig {
                initial_count: 20,
                energy: 50.0,
                sprout_at: 45.0,
                mature_at: 150.0,
                decay_at: 1200.0,
                max_age: 1500,
                spread_probability: 0.01,
                nutrient_draw: 0.012,
                decay_ticks: 40,
            },
            growth_rate: 1.0,
            seed_rate: 1.0,
            sprout_rate: 1.0,
            mature_rate: 0.5,
            max_density: 0.6,
            initial_mature_fraction: 0.6,
            min_availability: 0.1,
            decay_return: 0.15,
            crowding_radius: 2,
            crowding_limit: 4,
            crowding_penalty: 0.5,
        }
    }
}

impl FloraConfig {
    #[must_use]
    pub fn kind(&self, kind: FloraKind) -> &FloraKindConfig {
        match kind {
            FloraKind::Grass => &self.grass,
            FloraKind::Bush => &self.bush,
            FloraKind::Tree => &self.tree,
        }
    }

    pub fn kind_mut(&mut self, kind: FloraKind) -> &mut FloraKindConfig {
        match kind {
            FloraKind::Grass => &mut self.grass,
            FloraKind::Bush => &mut self.bush,
            FloraKind::Tree => &mut self.tree,
        }
    }

    /// Growth multiplier for a stage; decaying plants do not grow.
    #[must_use]
    pub fn stage_rate(&self, stage: GrowthStage) -> f32 {
        match stage {
            GrowthStage::Seed => self.seed_rate,
            GrowthStage::Sprout => self.sprout_rate,
            GrowthStage::Mature => self.mature_rate,
            GrowthStage::Decaying => 0.0,
        }
    }

    #[must_use]
    pub fn initial_total(&self) -> usize {
        FloraKind::ALL
            .iter()
            .map(|k| self.kind(*k).initial_count)
            .sum()
    }
}

/// Soil fertility field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NutrientConfig {
    pub initial_level: f32,
    pub max_level: f32,
    /// Added to every cell each tick, up to the maximum.
    pub regen_rate: f32,
    /// Nutrients produced per unit of energy in a carcass.
    pub nutrient_per_energy: f32,
    /// Fraction of carcass nutrients lost before reaching the soil.
    pub loss_fraction: f32,
}

impl Default for NutrientConfig {
    fn default() -> Self {
        Self {
            initial_level: 1.0,
            max_level: 1.0,
            regen_rate: 0.01,
            nutrient_per_energy: 0.005,
            loss_fraction: 0.1,
        }
    }
}

/// Stochastic weather generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WeatherConfig {
    pub rain_probability: f32,
    pub drought_probability: f32,
    pub storm_probability: f32,
    pub rain_duration: u32,
    pub rain_multiplier: f32,
    pub drought_duration: u32,
    pub drought_multiplier: f32,
    pub storm_duration: u32,
    /// Energy removed from a creature struck by a storm.
    pub storm_damage: f32,
    /// Per-creature chance of being struck each storm tick.
    pub storm_hit_chance: f32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            rain_probability: 0.005,
            drought_probability: 0.002,
            storm_probability: 0.001,
            rain_duration: 30,
            rain_multiplier: 2.0,
            drought_duration: 50,
            drought_multiplier: 0.3,
            storm_duration: 10,
            storm_damage: 20.0,
            storm_hit_chance: 0.05,
        }
    }
}

impl WeatherConfig {
    /// Disables random weather; events can still be forced.
    #[must_use]
    pub fn calm() -> Self {
        Self {
            rain_probability: 0.0,
            drought_probability: 0.0,
            storm_probability: 0.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn probability(&self, kind: WeatherKind) -> f32 {
        match kind {
            WeatherKind::Rain => self.rain_probability,
            WeatherKind::Drought => self.drought_probability,
            WeatherKind::Storm => self.storm_probability,
        }
    }

    #[must_use]
    pub fn duration(&self, kind: WeatherKind) -> u32 {
        match kind {
            WeatherKind::Rain => self.rain_duration,
            WeatherKind::Drought => self.drought_duration,
            WeatherKind::Storm => self.storm_duration,
        }
    }

    #[must_use]
    pub fn magnitude(&self, kind: WeatherKind) -> f32 {
        match kind {
            WeatherKind::Rain => self.rain_multiplier,
            WeatherKind::Drought => self.drought_multiplier,
            WeatherKind::Storm => self.storm_damage,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    /// Capacity of each history ring buffer.
    pub history_len: usize,
    /// Ticks between periodic performance log lines.
    pub log_interval: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            history_len: 100,
            log_interval: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub fauna: FaunaConfig,
    pub flora: FloraConfig,
    pub nutrients: NutrientConfig,
    pub weather: WeatherConfig,
    pub stats: StatsConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violation found. A world is never constructed from a
    /// configuration that fails here.
    pub fn validate(&self) -> Result<()> {
        self.validate_world()?;
        self.validate_fauna()?;
        self.validate_flora()?;
        self.validate_nutrients()?;
        self.validate_weather()?;

        if self.stats.history_len == 0 {
            return Err(ConfigError::dimension("stats.history_len", 0));
        }
        Ok(())
    }

    fn validate_world(&self) -> Result<()> {
        let w = &self.world;
        if w.width == 0 {
            return Err(ConfigError::dimension("world.width", 0));
        }
        if w.height == 0 {
            return Err(ConfigError::dimension("world.height", 0));
        }
        if w.day_length == 0 {
            return Err(ConfigError::dimension("world.day_length", 0));
        }
        if w.season_length == 0 {
            return Err(ConfigError::dimension("world.season_length", 0));
        }
        if w.index_cell_size == 0 {
            return Err(ConfigError::dimension("world.index_cell_size", 0));
        }
        Ok(())
    }

    fn validate_fauna(&self) -> Result<()> {
        let f = &self.fauna;
        ensure!(f.max_energy > 0.0, "fauna.max_energy", "must be positive");
        ensure!(
            f.initial_energy > 0.0 && f.initial_energy_spread >= 0.0,
            "fauna.initial_energy",
            "must be positive with a non-negative spread"
        );
        ensure!(
            f.initial_energy + f.initial_energy_spread <= f.max_energy,
            "fauna.initial_energy",
            "founders cannot start above max_energy"
        );
        ensure!(
            f.birth_energy > 0.0 && f.birth_energy <= f.max_energy,
            "fauna.birth_energy",
            "must be in (0, max_energy]"
        );
        ensure!(f.max_age > 0, "fauna.max_age", "must be positive");
        ensure!(
            f.reproduction_threshold >= 0.0 && f.reproduction_cost >= 0.0,
            "fauna.reproduction_threshold",
            "threshold and cost must be non-negative"
        );
        ensure!(f.mate_range >= 1.0, "fauna.mate_range", "must reach at least one cell");
        ensure!(
            f.base_metabolic_cost > 0.0,
            "fauna.base_metabolic_cost",
            "must be positive so energy drains every tick"
        );
        ensure!(f.move_cost >= 0.0, "fauna.move_cost", "must be non-negative");
        ensure!(
            f.rest_cost_factor > 0.0 && f.rest_cost_factor <= 1.0,
            "fauna.rest_cost_factor",
            "must be in (0, 1]"
        );
        ensure!(
            f.hunger_rate >= 0.0 && f.fear_decay >= 0.0 && f.failed_hunt_cost >= 0.0,
            "fauna.hunger_rate",
            "hunger, fear and hunt costs must be non-negative"
        );
        ensure!(
            f.max_size_advantage >= 1.0,
            "fauna.max_size_advantage",
            "must be at least 1"
        );
        ensure!(f.carcass_value >= 0.0, "fauna.carcass_value", "must be non-negative");
        ensure!(
            f.crowding_normalization > 0.0,
            "fauna.crowding_normalization",
            "must be positive"
        );

        for species in FaunaSpecies::ALL {
            let s = f.species(species);
            for (name, range) in s.bounds.ranges() {
                ensure!(
                    range.min > 0.0 && range.min <= range.max,
                    "fauna.bounds",
                    format!("{} {name} bounds must satisfy 0 < min <= max", species.name())
                );
            }
            if !s.bounds.contains(&s.traits) {
                return Err(ConfigError::inconsistent(format!(
                    "{} founder traits lie outside the trait bounds",
                    species.name()
                )));
            }
            check_probability("fauna.mutation_rate", s.mutation_rate)?;
            check_probability("fauna.hunt_success_rate", s.hunt_success_rate)?;
            ensure!(
                s.energy_from_flora >= 0.0 && s.energy_from_prey >= 0.0,
                "fauna.energy_from_flora",
                "food energy must be non-negative"
            );
            if s.hunts(species) {
                return Err(ConfigError::inconsistent(format!(
                    "{} cannot list itself as prey",
                    species.name()
                )));
            }
        }
        if f.predator.eats_flora {
            return Err(ConfigError::inconsistent("predators never eat flora"));
        }
        Ok(())
    }

    fn validate_flora(&self) -> Result<()> {
        let f = &self.flora;
        for kind in FloraKind::ALL {
            let k = f.kind(kind);
            ensure!(k.energy > 0.0, "flora.energy", format!("{} energy must be positive", kind.name()));
            ensure!(
                k.sprout_at > 0.0 && k.sprout_at <= k.mature_at && k.mature_at <= k.decay_at,
                "flora.thresholds",
                format!("{} needs 0 < sprout_at <= mature_at <= decay_at", kind.name())
            );
            ensure!(
                k.decay_ticks > 0,
                "flora.decay_ticks",
                format!("{} decay_ticks must be positive", kind.name())
            );
            ensure!(
                k.nutrient_draw >= 0.0,
                "flora.nutrient_draw",
                format!("{} nutrient_draw must be non-negative", kind.name())
            );
            check_probability("flora.spread_probability", k.spread_probability)?;
        }
        ensure!(
            f.growth_rate >= 0.0 && f.seed_rate >= 0.0 && f.sprout_rate >= 0.0 && f.mature_rate >= 0.0,
            "flora.growth_rate",
            "growth rates must be non-negative"
        );
        check_probability("flora.max_density", f.max_density)?;
        check_probability("flora.initial_mature_fraction", f.initial_mature_fraction)?;
        check_probability("flora.min_availability", f.min_availability)?;
        ensure!(f.decay_return >= 0.0, "flora.decay_return", "must be non-negative");
        check_probability("flora.crowding_penalty", f.crowding_penalty)?;

        let cells = usize::from(self.world.width) * usize::from(self.world.height);
        if f.initial_total() > cells {
            return Err(ConfigError::inconsistent(format!(
                "{} initial plants do not fit on {cells} cells",
                f.initial_total()
            )));
        }
        Ok(())
    }

    fn validate_nutrients(&self) -> Result<()> {
        let n = &self.nutrients;
        ensure!(n.max_level > 0.0, "nutrients.max_level", "must be positive");
        ensure!(
            n.initial_level >= 0.0 && n.initial_level <= n.max_level,
            "nutrients.initial_level",
            "must be in [0, max_level]"
        );
        ensure!(n.regen_rate >= 0.0, "nutrients.regen_rate", "must be non-negative");
        ensure!(
            n.nutrient_per_energy >= 0.0,
            "nutrients.nutrient_per_energy",
            "must be non-negative"
        );
        ensure!(
            (0.0..1.0).contains(&n.loss_fraction),
            "nutrients.loss_fraction",
            "must be in [0, 1)"
        );
        Ok(())
    }

    fn validate_weather(&self) -> Result<()> {
        let w = &self.weather;
        check_probability("weather.rain_probability", w.rain_probability)?;
        check_probability("weather.drought_probability", w.drought_probability)?;
        check_probability("weather.storm_probability", w.storm_probability)?;
        check_probability("weather.storm_hit_chance", w.storm_hit_chance)?;
        for kind in WeatherKind::ALL {
            if w.duration(kind) == 0 {
                return Err(ConfigError::dimension("weather.duration", 0));
            }
        }
        ensure!(
            w.rain_multiplier >= 0.0 && w.drought_multiplier >= 0.0 && w.storm_damage >= 0.0,
            "weather.magnitude",
            "multipliers and damage must be non-negative"
        );
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Digest of every behavioural parameter; the seed is excluded so runs
    /// with identical rules share a fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        let world = WorldConfig {
            seed: None,
            ..self.world.clone()
        };
        hasher.update(format!("{world:?}").as_bytes());
        hasher.update(format!("{:?}", self.fauna).as_bytes());
        hasher.update(format!("{:?}", self.flora).as_bytes());
        hasher.update(format!("{:?}", self.nutrients).as_bytes());
        hasher.update(format!("{:?}", self.weather).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_width_is_a_dimension_error() {
        let config = AppConfig {
            world: WorldConfig {
                width: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension {
                field: "world.width",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_day_length_rejected() {
        let config = AppConfig {
            world: WorldConfig {
                day_length: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_predator_eating_flora_rejected() {
        let mut config = AppConfig::default();
        config.fauna.predator.eats_flora = true;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_self_predation_rejected() {
        let mut config = AppConfig::default();
        config.fauna.omnivore.prey.push(FaunaSpecies::Omnivore);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probability_out_of_range() {
        let config = AppConfig {
            weather: WeatherConfig {
                rain_probability: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("weather.rain_probability"));
    }

    #[test]
    fn test_founder_traits_must_fit_bounds() {
        let mut config = AppConfig::default();
        config.fauna.herbivore.traits.speed = 10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_plants_for_grid() {
        let mut config = AppConfig::default();
        config.world.width = 4;
        config.world.height = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [world]
            width = 40
            height = 30
            seed = 7

            [fauna.predator]
            initial_count = 0
            traits = { speed = 1.5, vision = 6.0, size = 1.5, metabolism = 1.2 }
            bounds = { speed = { min = 0.5, max = 3.0 }, vision = { min = 2.0, max = 14.0 }, size = { min = 0.5, max = 3.0 }, metabolism = { min = 0.4, max = 2.5 } }
            mutation_rate = 0.1
            eats_flora = false
            prey = ["Herbivore"]
            energy_from_flora = 0.0
            energy_from_prey = 50.0
            hunt_success_rate = 0.4

            [flora.grass]
            initial_count = 50
            energy = 10.0
            sprout_at = 6.0
            mature_at = 20.0
            decay_at = 150.0
            max_age = 200
            spread_probability = 0.02
            nutrient_draw = 0.005
            decay_ticks = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.world.width, 40);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.fauna.predator.initial_count, 0);
        assert_eq!(config.fauna.herbivore.initial_count, 30);
        assert_eq!(config.flora.grass.initial_count, 50);
    }

    #[test]
    fn test_negative_count_fails_to_parse() {
        let result = AppConfig::from_toml(
            r#"
            [world]
            width = -5
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_fingerprint_ignores_seed_but_tracks_rules() {
        let a = AppConfig::default();
        let mut b = AppConfig::default();
        b.world.seed = Some(99);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);

        b.fauna.reproduction_cost = 10.0;
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
