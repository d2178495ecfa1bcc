#[macro_use]
pub mod macros;

use aura_data::{FaunaSpecies, FloraKind};
use aura_lib::model::config::{AppConfig, WeatherConfig};
use aura_lib::model::world::World;

/// Builds small, calm, empty worlds that individual tests populate.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.width = 32;
        config.world.height = 32;
        config.world.seed = Some(42);
        config.weather = WeatherConfig::calm();
        for species in FaunaSpecies::ALL {
            config.fauna.species_mut(species).initial_count = 0;
        }
        for kind in FloraKind::ALL {
            config.flora.kind_mut(kind).initial_count = 0;
        }
        Self { config }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_fauna(mut self, species: FaunaSpecies, count: usize) -> Self {
        self.config.fauna.species_mut(species).initial_count = count;
        self
    }

    pub fn with_flora(mut self, kind: FloraKind, count: usize) -> Self {
        self.config.flora.kind_mut(kind).initial_count = count;
        self
    }

    /// Every initial plant starts mature, i.e. edible and able to spread.
    pub fn with_mature_flora(mut self) -> Self {
        self.config.flora.initial_mature_fraction = 1.0;
        self
    }

    /// Every initial plant starts as a seed.
    pub fn with_seed_flora(mut self) -> Self {
        self.config.flora.initial_mature_fraction = 0.0;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> World {
        World::new(self.config).expect("Failed to create world in test builder")
    }
}
