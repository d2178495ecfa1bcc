use crate::model::config::AppConfig;
use crate::model::environment::Environment;
use crate::model::lifecycle::IdAllocator;
use crate::model::metrics::Metrics;
use crate::model::nutrients::NutrientGrid;
use crate::model::occupancy::Occupancy;
use crate::model::spatial_hash::SpatialHash;
use crate::model::systems::biological::DeathRecord;
use crate::model::systems::stats::StatsTracker;
use aura_data::StatsSnapshot;
use rand_chacha::ChaCha8Rng;

pub mod finalize;
pub mod init;
pub mod state;
pub mod systems;
pub mod update;

pub use state::{FaunaComponents, FloraComponents};

/// The simulated ecosystem.
///
/// Owns every entity plus the layers they live on. One call to
/// [`World::tick`] runs the whole update in a fixed order: scheduler, flora,
/// fauna, index rebuild, stats. All randomness comes from one seeded RNG.
pub struct World {
    pub width: u16,
    pub height: u16,
    pub config: AppConfig,
    pub ecs: hecs::World,
    /// Rebuilt once per tick; stale within a tick.
    pub spatial: SpatialHash,
    /// Live cell occupancy, updated as entities move, spawn and die.
    pub occupancy: Occupancy,
    pub nutrients: NutrientGrid,
    pub env: Environment,
    pub stats: StatsTracker,
    pub metrics: Metrics,
    ids: IdAllocator,
    rng: ChaCha8Rng,
    last_stats: StatsSnapshot,
    recent_deaths: Vec<DeathRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_data::{FaunaSpecies, WeatherKind};
    use std::sync::atomic::AtomicBool;

    fn small_config(seed: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.world.width = 24;
        config.world.height = 24;
        config.world.seed = Some(seed);
        config.flora.grass.initial_count = 40;
        config.flora.bush.initial_count = 10;
        config.flora.tree.initial_count = 4;
        config.fauna.herbivore.initial_count = 8;
        config.fauna.predator.initial_count = 2;
        config.fauna.omnivore.initial_count = 2;
        config
    }

    #[test]
    fn test_world_populates_from_config() {
        let world = World::new(small_config(1)).unwrap();
        let stats = world.last_stats();
        assert_eq!(stats.counts.herbivores, 8);
        assert_eq!(stats.counts.predators, 2);
        assert_eq!(stats.counts.omnivores, 2);
        assert_eq!(stats.counts.flora_total(), 54);
        assert_eq!(world.occupancy.flora_count(), 54);
        assert_eq!(world.spatial.len(), 66);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let mut config = small_config(1);
        config.world.width = 0;
        assert!(World::new(config).is_err());
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut world = World::new(small_config(2)).unwrap();
        let stats = world.tick();
        assert_eq!(stats.tick, 1);
        assert_eq!(world.tick_count(), 1);
        assert_eq!(world.metrics.tick_count(), 1);
    }

    #[test]
    fn test_run_honours_stop_flag() {
        let mut world = World::new(small_config(3)).unwrap();
        let stop = AtomicBool::new(true);
        assert_eq!(world.run(10, &stop), 0);
        let go = AtomicBool::new(false);
        assert_eq!(world.run(5, &go), 5);
        assert_eq!(world.tick_count(), 5);
    }

    #[test]
    fn test_force_weather_reported_once() {
        let mut config = small_config(4);
        config.weather = crate::model::config::WeatherConfig::calm();
        config.weather.rain_duration = 1;
        let mut world = World::new(config).unwrap();
        assert!(world.force_weather(WeatherKind::Rain));
        world.tick();
        let events = world.events_since_last_snapshot();
        assert!(events.contains("rain"));
        assert!(world.events_since_last_snapshot().is_empty());
    }

    #[test]
    fn test_occupancy_matches_store_after_ticks() {
        let mut world = World::new(small_config(5)).unwrap();
        for _ in 0..30 {
            world.tick();
        }
        let fauna: usize = FaunaSpecies::ALL
            .iter()
            .map(|&s| world.last_stats().counts.fauna(s))
            .sum();
        let mut on_grid = 0usize;
        for y in 0..world.height as i32 {
            for x in 0..world.width as i32 {
                on_grid += usize::from(world.occupancy.fauna_at(aura_data::Position::new(x, y)));
            }
        }
        assert_eq!(on_grid, fauna);
        assert_eq!(world.occupancy.flora_count(), world.last_stats().counts.flora_total());
    }
}
