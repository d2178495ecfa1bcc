use crate::model::config::AppConfig;
use crate::model::environment::Environment;
use crate::model::error::ConfigError;
use crate::model::lifecycle::{self, IdAllocator};
use crate::model::metrics::Metrics;
use crate::model::nutrients::NutrientGrid;
use crate::model::occupancy::Occupancy;
use crate::model::spatial_hash::SpatialHash;
use crate::model::systems::stats::StatsTracker;
use crate::model::world::World;
use aura_data::{FaunaSpecies, FloraKind, GrowthStage, Position, StatsSnapshot};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl World {
    /// Validates `config` and seeds the initial populations.
    ///
    /// Without a configured seed the RNG is seeded from entropy.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (width, height) = (config.world.width, config.world.height);
        let rng = config
            .world
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);

        tracing::info!(
            width,
            height,
            seed = ?config.world.seed,
            fingerprint = %config.fingerprint(),
            "Creating world"
        );

        let mut world = Self {
            width,
            height,
            ecs: hecs::World::new(),
            spatial: SpatialHash::new(config.world.index_cell_size, width, height),
            occupancy: Occupancy::new(width, height),
            nutrients: NutrientGrid::new(width, height, &config.nutrients),
            env: Environment::new(&config.world),
            stats: StatsTracker::new(config.stats.history_len),
            metrics: Metrics::new(config.stats.log_interval),
            ids: IdAllocator::default(),
            rng,
            last_stats: StatsSnapshot::default(),
            recent_deaths: Vec::new(),
            config,
        };

        world.populate();
        world.rebuild_index();
        let weather = world.env.active_kind();
        let growth_multiplier = world.env.growth_multiplier();
        world.last_stats = world.finalize_stats(weather, growth_multiplier);
        Ok(world)
    }

    fn populate(&mut self) {
        // Distinct cells for every plant; validation guarantees they fit.
        let mut cells: Vec<Position> = (0..i32::from(self.height))
            .flat_map(|y| (0..i32::from(self.width)).map(move |x| Position::new(x, y)))
            .collect();
        cells.shuffle(&mut self.rng);
        let mut free = cells.into_iter();

        for kind in FloraKind::ALL {
            let count = self.config.flora.kind(kind).initial_count;
            for pos in free.by_ref().take(count) {
                let mature = self
                    .rng
                    .gen_bool(f64::from(self.config.flora.initial_mature_fraction.clamp(0.0, 1.0)));
                let stage = if mature {
                    GrowthStage::Mature
                } else {
                    GrowthStage::Seed
                };
                self.occupancy.place_flora(pos);
                let id = self.ids.next_id();
                self.ecs
                    .spawn(lifecycle::create_plant(id, pos, kind, stage, &self.config.flora));
            }
        }

        for species in FaunaSpecies::ALL {
            for _ in 0..self.config.fauna.species(species).initial_count {
                let pos = Position::new(
                    self.rng.gen_range(0..i32::from(self.width)),
                    self.rng.gen_range(0..i32::from(self.height)),
                );
                let id = self.ids.next_id();
                let bundle =
                    lifecycle::create_founder_with_rng(id, pos, species, &self.config.fauna, &mut self.rng);
                self.ecs.spawn(bundle);
                self.occupancy.add_fauna(pos);
            }
        }
    }
}
