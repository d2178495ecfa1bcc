use crate::config::FaunaConfig;
use crate::spatial_hash::{Nearest, SpatialEntry, SpatialHash};
use aura_data::{
    Creature, EntityId, EntityKind, FaunaSpecies, Metabolism, Plant, Position, SENSORY_INPUTS,
};

/// Something a creature has noticed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub handle: hecs::Entity,
    pub id: EntityId,
    pub pos: Position,
    pub distance: f32,
}

/// What a creature knows about its surroundings before deciding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Perception {
    /// Nearest edible plant or huntable creature.
    pub food: Option<Target>,
    /// Nearest huntable creature only.
    pub prey: Option<Target>,
    pub threat: Option<Target>,
    pub mate: Option<Target>,
    pub crowding: f32,
}

pub struct PerceptionContext<'a> {
    pub ecs: &'a hecs::World,
    pub spatial: &'a SpatialHash,
    pub config: &'a FaunaConfig,
}

pub struct Observer {
    pub handle: hecs::Entity,
    pub id: EntityId,
    pub pos: Position,
    pub species: FaunaSpecies,
    pub vision: f32,
}

/// Index entries are as of the last rebuild, so every candidate is checked
/// against the store and measured from where it actually is now.
fn live_position(ecs: &hecs::World, entry: &SpatialEntry) -> Option<Position> {
    ecs.get::<&Position>(entry.handle).ok().map(|p| *p)
}

/// Scans the index within vision for food, threats, mates and kin.
///
/// One radius query fills all four slots. Creatures move during the phase,
/// so distances come from live positions rather than the indexed ones.
#[must_use]
pub fn perceive(ctx: &PerceptionContext<'_>, me: &Observer) -> Perception {
    let species_cfg = ctx.config.species(me.species);
    let mut food = Nearest::default();
    let mut prey = Nearest::default();
    let mut threat = Nearest::default();
    let mut mate = Nearest::default();
    let mut kin = 0usize;

    ctx.spatial.query_callback(me.pos, me.vision, |entry| {
        if entry.handle == me.handle {
            return;
        }
        let Some(pos) = live_position(ctx.ecs, entry) else {
            return;
        };
        let distance = me.pos.distance(&pos);
        if distance > me.vision {
            return;
        }
        let distance_sq = me.pos.distance_sq(&pos);
        let target = Target {
            handle: entry.handle,
            id: entry.id,
            pos,
            distance,
        };

        match entry.kind {
            EntityKind::Flora(_) => {
                let edible = species_cfg.eats_flora
                    && ctx
                        .ecs
                        .get::<&Plant>(entry.handle)
                        .is_ok_and(|p| p.stage.is_edible());
                if edible {
                    food.offer(distance_sq, entry.id, target);
                }
            }
            EntityKind::Fauna(other) => {
                if species_cfg.hunts(other) {
                    food.offer(distance_sq, entry.id, target);
                    prey.offer(distance_sq, entry.id, target);
                }
                if ctx.config.species(other).hunts(me.species) {
                    threat.offer(distance_sq, entry.id, target);
                }
                if other == me.species {
                    kin += 1;
                    let mature = ctx
                        .ecs
                        .get::<&Metabolism>(entry.handle)
                        .is_ok_and(|m| m.age >= ctx.config.maturity_age);
                    if mature {
                        mate.offer(distance_sq, entry.id, target);
                    }
                }
            }
        }
    });

    let crowding = if ctx.config.crowding_normalization > 0.0 {
        (kin as f32 / ctx.config.crowding_normalization).min(1.0)
    } else {
        0.0
    };

    Perception {
        food: food.into_inner(),
        prey: prey.into_inner(),
        threat: threat.into_inner(),
        mate: mate.into_inner(),
        crowding,
    }
}

/// Fear jumps to the current threat proximity and otherwise fades.
#[must_use]
pub fn update_fear(current: f32, threat: Option<&Target>, vision: f32, decay: f32) -> f32 {
    let proximity = threat.map_or(0.0, |t| 1.0 - normalized_distance(Some(t), vision));
    proximity.max(current - decay).clamp(0.0, 1.0)
}

/// Distance as a fraction of vision; 1 when nothing was sensed.
#[must_use]
pub fn normalized_distance(target: Option<&Target>, vision: f32) -> f32 {
    match target {
        Some(t) if vision > 0.0 => (t.distance / vision).min(1.0),
        _ => 1.0,
    }
}

/// Builds the brain's input vector: hunger, energy, fear, food, threat and
/// mate distances, day phase and crowding.
#[must_use]
pub fn sensory_inputs(
    creature: &Creature,
    metabolism: &Metabolism,
    perception: &Perception,
    day_fraction: f32,
) -> [f32; SENSORY_INPUTS] {
    let vision = creature.traits.vision;
    let energy = if metabolism.max_energy > 0.0 {
        metabolism.energy / metabolism.max_energy
    } else {
        0.0
    };
    [
        creature.hunger,
        energy,
        creature.fear,
        normalized_distance(perception.food.as_ref(), vision),
        normalized_distance(perception.threat.as_ref(), vision),
        normalized_distance(perception.mate.as_ref(), vision),
        day_fraction,
        perception.crowding,
    ]
}
