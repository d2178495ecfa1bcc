use crate::config::{AppConfig, FaunaConfig, NutrientConfig};
use crate::nutrients::NutrientGrid;
use aura_data::{Action, Creature, DeathCause, EntityId, FaunaSpecies, Metabolism, Position, Traits};
use serde::{Deserialize, Serialize};

/// Energy spent this tick: upkeep scaled by metabolism and size, plus a
/// per-cell movement charge scaled by size. Resting discounts the upkeep.
#[must_use]
pub fn metabolic_cost(traits: &Traits, action: Action, steps: u32, config: &FaunaConfig) -> f32 {
    let mut upkeep = config.base_metabolic_cost * traits.metabolism * traits.size;
    if action == Action::Rest {
        upkeep *= config.rest_cost_factor;
    }
    upkeep + config.move_cost * traits.size * steps as f32
}

/// Start-of-turn bookkeeping: ageing, cooldown and hunger.
pub fn age_one_tick(creature: &mut Creature, metabolism: &mut Metabolism, config: &FaunaConfig) {
    metabolism.age += 1;
    creature.cooldown = creature.cooldown.saturating_sub(1);
    creature.hunger = (creature.hunger + config.hunger_rate * creature.traits.metabolism).clamp(0.0, 1.0);
}

/// Credits food to a creature. Returns the energy actually absorbed.
pub fn feed(creature: &mut Creature, metabolism: &mut Metabolism, gained: f32) -> f32 {
    let before = metabolism.energy;
    metabolism.energy = (metabolism.energy + gained.max(0.0)).min(metabolism.max_energy);
    if metabolism.max_energy > 0.0 {
        creature.hunger = (creature.hunger - gained / metabolism.max_energy).clamp(0.0, 1.0);
    }
    metabolism.energy - before
}

/// Why a creature should die now, if it should.
#[must_use]
pub fn check_death(metabolism: &Metabolism, storm_hit: bool, config: &FaunaConfig) -> Option<DeathCause> {
    if metabolism.energy <= 0.0 {
        Some(if storm_hit {
            DeathCause::Storm
        } else {
            DeathCause::Starvation
        })
    } else if metabolism.age > config.max_age {
        Some(DeathCause::OldAge)
    } else {
        None
    }
}

/// Energy a carcass holds: whatever energy was left plus a size-based share.
#[must_use]
pub fn remains(energy: f32, size: f32, config: &FaunaConfig) -> f32 {
    energy.max(0.0) + size.max(0.0) * config.carcass_value
}

/// Nutrients a carcass is worth before any cell clamping.
#[must_use]
pub fn nutrient_value(remains: f32, config: &NutrientConfig) -> f32 {
    remains * config.nutrient_per_energy * (1.0 - config.loss_fraction)
}

/// One fauna death, as recorded by the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeathRecord {
    pub id: EntityId,
    pub species: FaunaSpecies,
    pub cause: DeathCause,
    pub position: Position,
    pub age: u64,
    pub remains: f32,
    /// Nutrients the cell actually accepted.
    pub credited: f32,
}

/// Returns a dead creature's remains to the soil under it.
pub fn decompose(
    id: EntityId,
    creature: &Creature,
    metabolism: &Metabolism,
    position: Position,
    cause: DeathCause,
    nutrients: &mut NutrientGrid,
    config: &AppConfig,
) -> DeathRecord {
    let remains = remains(metabolism.energy, creature.traits.size, &config.fauna);
    let credited = nutrients.deposit(position, nutrient_value(remains, &config.nutrients));
    DeathRecord {
        id,
        species: creature.species,
        cause,
        position,
        age: metabolism.age,
        remains,
        credited,
    }
}
