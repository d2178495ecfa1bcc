//! Heredity: trait and weight crossover followed by bounded mutation.

use crate::brain::BrainLogic;
use crate::config::{FaunaConfig, SpeciesConfig, TraitBounds};
use aura_data::{Brain, Creature, Metabolism, Traits};
use rand::Rng;

/// Traits and brain handed to a newborn.
#[derive(Debug, Clone, PartialEq)]
pub struct Offspring {
    pub traits: Traits,
    pub brain: Brain,
}

/// Heritable material of one parent.
#[derive(Debug, Clone, Copy)]
pub struct Genome<'a> {
    pub traits: &'a Traits,
    pub brain: &'a Brain,
}

pub fn crossover_traits<R: Rng>(a: &Traits, b: &Traits, rng: &mut R) -> Traits {
    let mut pick = |x: f32, y: f32| if rng.gen_bool(0.5) { x } else { y };
    Traits {
        speed: pick(a.speed, b.speed),
        vision: pick(a.vision, b.vision),
        size: pick(a.size, b.size),
        metabolism: pick(a.metabolism, b.metabolism),
    }
}

/// Shifts each trait by `U[-1, 1] * rate * span` of its range, then clamps.
pub fn mutate_traits<R: Rng>(traits: Traits, bounds: &TraitBounds, rate: f32, rng: &mut R) -> Traits {
    if rate <= 0.0 {
        return bounds.clamp(traits);
    }
    let mut jitter = |value: f32, span: f32| value + rng.gen_range(-1.0f32..=1.0) * rate * span;
    bounds.clamp(Traits {
        speed: jitter(traits.speed, bounds.speed.span()),
        vision: jitter(traits.vision, bounds.vision.span()),
        size: jitter(traits.size, bounds.size.span()),
        metabolism: jitter(traits.metabolism, bounds.metabolism.span()),
    })
}

/// Uniform crossover of traits and weights, then mutation at the species rate.
pub fn breed<R: Rng>(a: Genome<'_>, b: Genome<'_>, species: &SpeciesConfig, rng: &mut R) -> Offspring {
    let traits = crossover_traits(a.traits, b.traits, rng);
    let traits = mutate_traits(traits, &species.bounds, species.mutation_rate, rng);

    let mut brain = a.brain.crossover_with_rng(b.brain, rng);
    brain.mutate_with_rng(species.mutation_rate, rng);

    Offspring { traits, brain }
}

/// Whether a creature can take part in reproduction this tick.
#[must_use]
pub fn is_fertile(creature: &Creature, metabolism: &Metabolism, config: &FaunaConfig) -> bool {
    creature.cooldown == 0
        && metabolism.age >= config.maturity_age
        && metabolism.energy >= config.reproduction_threshold
}
