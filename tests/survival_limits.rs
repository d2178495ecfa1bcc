#[macro_use]
mod common;

use aura_data::{DeathCause, FaunaSpecies};
use common::WorldBuilder;

#[test]
fn test_extreme_metabolism_wipes_out_every_species() {
    let mut world = WorldBuilder::new()
        .with_seed(1)
        .with_fauna(FaunaSpecies::Herbivore, 12)
        .with_fauna(FaunaSpecies::Predator, 4)
        .with_fauna(FaunaSpecies::Omnivore, 4)
        .with_config(|c| c.fauna.base_metabolic_cost = 1000.0)
        .build();

    let stats = world.tick();

    assert_extinct!(world);
    assert_eq!(stats.counts.fauna_total(), 0);
    assert_eq!(stats.biodiversity, 0.0);
    assert_eq!(stats.births, 0);
    assert_eq!(stats.deaths, 20);
    assert_eq!(stats.deaths_by_cause.total(), 20);
    assert_eq!(stats.history.herbivores.last(), Some(&0));
    // Construction publishes a tick-0 sample before the first tick.
    assert_eq!(stats.history.deaths, vec![0, 20]);
    assert_eq!(stats.history.births, vec![0, 0]);
    assert_eq!(world.recent_deaths().len(), 20);
}

#[test]
fn test_deaths_balance_births_after_extinction() {
    let initial = 30;
    let mut world = WorldBuilder::new()
        .with_seed(31)
        .with_size(8, 8)
        .with_fauna(FaunaSpecies::Herbivore, initial)
        .with_config(|c| {
            c.fauna.base_metabolic_cost = 1.0;
            c.fauna.maturity_age = 3;
            c.fauna.max_age = 40;
            c.fauna.reproduction_threshold = 10.0;
            c.fauna.reproduction_cost = 15.0;
            c.fauna.reproduction_cooldown = 0;
            c.fauna.birth_energy = 20.0;
        })
        .build();

    for _ in 0..3000 {
        if world.fauna_count() == 0 {
            break;
        }
        world.tick();
    }

    assert_extinct!(world);
    let stats = world.last_stats();
    assert_eq!(stats.counts.herbivores, 0);
    assert_eq!(stats.biodiversity, 0.0);
    assert_eq!(stats.deaths, initial as u64 + stats.births);
    assert_eq!(stats.deaths_by_cause.total(), stats.deaths);
    assert!(stats.peak_population >= initial);
}

#[test]
fn test_old_age_is_enforced() {
    let mut world = WorldBuilder::new()
        .with_seed(4)
        .with_fauna(FaunaSpecies::Herbivore, 8)
        .with_config(|c| c.fauna.max_age = 3)
        .build();

    for _ in 0..3 {
        world.tick();
        assert!(world.recent_deaths().is_empty());
    }
    world.tick();

    assert_extinct!(world);
    assert_eq!(world.recent_deaths().len(), 8);
    for death in world.recent_deaths() {
        assert_eq!(death.cause, DeathCause::OldAge);
        assert_eq!(death.age, 4);
    }
}

#[test]
fn test_empty_world_ticks_quietly() {
    let mut world = WorldBuilder::new().build();
    for _ in 0..25 {
        let stats = world.tick();
        assert_eq!(stats.counts.fauna_total() + stats.counts.flora_total(), 0);
        assert_eq!(stats.avg_energy, 0.0);
    }
    assert_eq!(world.tick_count(), 25);
    assert!(world.snapshot_entities().is_empty());
}

#[test]
fn test_costly_mating_never_leaves_drained_creatures_alive() {
    let mut world = WorldBuilder::new()
        .with_seed(8)
        .with_size(8, 8)
        .with_fauna(FaunaSpecies::Herbivore, 40)
        .with_config(|c| {
            c.fauna.maturity_age = 0;
            c.fauna.reproduction_threshold = 1.0;
            c.fauna.reproduction_cost = 95.0;
            c.fauna.reproduction_cooldown = 0;
            c.fauna.mate_range = 8.0;
        })
        .build();

    for _ in 0..20 {
        world.tick();
        let drained: Vec<f32> = world
            .snapshot_entities()
            .iter()
            .filter(|e| e.is_fauna() && e.energy <= 0.0)
            .map(|e| e.energy)
            .collect();
        assert!(
            drained.is_empty(),
            "tick {}: live fauna with energy <= 0: {drained:?}",
            world.tick_count()
        );
        assert_eq!(world.last_stats().counts.fauna_total(), world.fauna_count());
    }
    let stats = world.last_stats();
    assert!(stats.births > 0, "mating never happened");
    assert!(stats.deaths_by_cause.starvation > 0);
}
