use crate::brain::BrainLogic;
use crate::config::{FaunaConfig, FloraConfig};
use crate::genetics::{self, Offspring};
use aura_data::{
    Action, Brain, Creature, EntityId, EntityKind, FaunaSpecies, FloraKind, GrowthStage,
    Identity, Metabolism, Plant, Position,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Components spawned for a plant.
pub type FloraBundle = (Identity, Position, EntityKind, Plant, Metabolism);
/// Components spawned for a creature.
pub type FaunaBundle = (Identity, Position, EntityKind, Creature, Brain, Metabolism);

/// Hands out entity ids in creation order. Ids are never reused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        self.next += 1;
        EntityId(self.next)
    }

    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// A plant at the start of `stage`. Mature plants carry their full energy,
/// younger ones energy proportional to their growth.
#[must_use]
pub fn create_plant(
    id: EntityId,
    pos: Position,
    kind: FloraKind,
    stage: GrowthStage,
    config: &FloraConfig,
) -> FloraBundle {
    let k = config.kind(kind);
    let growth = match stage {
        GrowthStage::Seed => 0.0,
        GrowthStage::Sprout => k.sprout_at,
        GrowthStage::Mature | GrowthStage::Decaying => k.mature_at,
    };
    let energy = if stage >= GrowthStage::Mature {
        k.energy
    } else {
        k.energy * (growth / k.mature_at).min(1.0)
    };
    (
        Identity { id, parents: None },
        pos,
        EntityKind::Flora(kind),
        Plant {
            kind,
            stage,
            growth,
            last_growth: 0.0,
            decay_timer: if stage == GrowthStage::Decaying {
                k.decay_ticks
            } else {
                0
            },
        },
        Metabolism {
            energy,
            max_energy: k.energy,
            age: 0,
            generation: 0,
            offspring_count: 0,
        },
    )
}

fn creature(species: FaunaSpecies, traits: aura_data::Traits) -> Creature {
    Creature {
        species,
        traits,
        hunger: 0.3,
        fear: 0.0,
        action: Action::Rest,
        cooldown: 0,
    }
}

/// A generation-zero creature with jittered founder traits and a random brain.
pub fn create_founder_with_rng<R: Rng>(
    id: EntityId,
    pos: Position,
    species: FaunaSpecies,
    config: &FaunaConfig,
    rng: &mut R,
) -> FaunaBundle {
    let s = config.species(species);
    let traits = genetics::mutate_traits(s.traits, &s.bounds, s.mutation_rate, rng);
    let brain = Brain::new_random_with_rng(rng);
    let energy = config.initial_energy + rng.gen::<f32>() * config.initial_energy_spread;
    (
        Identity { id, parents: None },
        pos,
        EntityKind::Fauna(species),
        creature(species, traits),
        brain,
        Metabolism {
            energy: energy.min(config.max_energy),
            max_energy: config.max_energy,
            age: 0,
            generation: 0,
            offspring_count: 0,
        },
    )
}

#[must_use]
pub fn create_offspring(
    id: EntityId,
    pos: Position,
    species: FaunaSpecies,
    parents: (EntityId, EntityId),
    generation: u32,
    offspring: Offspring,
    config: &FaunaConfig,
) -> FaunaBundle {
    (
        Identity {
            id,
            parents: Some(parents),
        },
        pos,
        EntityKind::Fauna(species),
        creature(species, offspring.traits),
        offspring.brain,
        Metabolism {
            energy: config.birth_energy,
            max_energy: config.max_energy,
            age: 0,
            generation,
            offspring_count: 0,
        },
    )
}
