mod common;

use aura_data::{FaunaSpecies, FloraKind, GrowthStage, Position};
use aura_lib::model::snapshot::WorldSnapshot;
use common::WorldBuilder;
use std::collections::HashMap;

fn lively() -> WorldBuilder {
    WorldBuilder::new()
        .with_seed(99)
        .with_fauna(FaunaSpecies::Herbivore, 25)
        .with_fauna(FaunaSpecies::Predator, 5)
        .with_fauna(FaunaSpecies::Omnivore, 5)
        .with_flora(FloraKind::Grass, 150)
        .with_flora(FloraKind::Bush, 30)
        .with_flora(FloraKind::Tree, 10)
        .with_config(|c| {
            // Short-lived plants so every stage shows up within the run.
            c.flora.grass.sprout_at = 2.0;
            c.flora.grass.mature_at = 5.0;
            c.flora.grass.decay_at = 12.0;
            c.flora.grass.decay_ticks = 3;
        })
}

#[test]
fn test_flora_stages_never_regress() {
    let mut world = lively().build();
    let mut stages: HashMap<u64, GrowthStage> = HashMap::new();
    let mut saw_decay = false;

    for tick in 0..80 {
        world.tick();
        for entity in world.snapshot_entities() {
            let Some(stage) = entity.stage() else {
                continue;
            };
            saw_decay |= stage == GrowthStage::Decaying;
            if let Some(previous) = stages.insert(entity.id.0, stage) {
                assert!(
                    stage >= previous,
                    "plant {} went from {:?} to {:?} at tick {}",
                    entity.id,
                    previous,
                    stage,
                    tick
                );
            }
        }
    }
    assert!(saw_decay, "no plant ever reached the decaying stage");
}

#[test]
fn test_snapshot_is_idempotent_between_ticks() {
    let mut world = lively().build();
    for _ in 0..15 {
        world.tick();
    }
    let first = world.snapshot_entities();
    let second = world.snapshot_entities();
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(first.len(), world.fauna_count() + world.flora_count());
}

#[test]
fn test_layers_agree_with_the_store() {
    let mut world = lively().build();
    for _ in 0..60 {
        let stats = world.tick();

        let entities = world.snapshot_entities();
        assert_eq!(world.spatial.len(), entities.len());
        assert_eq!(world.occupancy.flora_count(), stats.counts.flora_total());

        let mut plants_per_cell: HashMap<Position, usize> = HashMap::new();
        let mut fauna_per_cell: HashMap<Position, u16> = HashMap::new();
        for e in &entities {
            let pos = Position::new(e.x, e.y);
            assert!(world.occupancy.in_bounds(pos));
            if e.is_fauna() {
                *fauna_per_cell.entry(pos).or_default() += 1;
            } else {
                *plants_per_cell.entry(pos).or_default() += 1;
            }
        }
        assert!(plants_per_cell.values().all(|&n| n == 1), "two plants share a cell");
        for (pos, n) in fauna_per_cell {
            assert_eq!(world.occupancy.fauna_at(pos), n);
        }
    }
}

#[test]
fn test_world_snapshot_serializes() {
    let mut world = lively().build();
    world.tick();
    let snapshot = world.create_snapshot();
    assert_eq!(snapshot.tick, 1);
    assert_eq!(snapshot.entities.len(), world.snapshot_entities().len());

    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    let back: WorldSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
    assert_eq!(back.entities, snapshot.entities);
    assert_eq!(back.stats, snapshot.stats);
}
