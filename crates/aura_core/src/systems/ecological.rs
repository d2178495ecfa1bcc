//! Food-chain rules: who eats what and how hunts resolve.

use crate::config::{FaunaConfig, SpeciesConfig};
use aura_data::{EntityKind, Plant};
use rand::Rng;

/// Whether `eater` may consume an entity of `kind` at all.
#[must_use]
pub fn can_eat(eater: &SpeciesConfig, kind: EntityKind) -> bool {
    match kind {
        EntityKind::Flora(_) => eater.eats_flora,
        EntityKind::Fauna(prey) => eater.hunts(prey),
    }
}

/// Energy a bite takes out of a plant, never more than it holds.
#[must_use]
pub fn bite(appetite: f32, plant_energy: f32) -> f32 {
    appetite.max(0.0).min(plant_energy.max(0.0))
}

/// Takes a bite and reports whether the plant is now exhausted.
pub fn graze(plant: &Plant, plant_energy: &mut f32, appetite: f32) -> (f32, bool) {
    if !plant.stage.is_edible() {
        return (0.0, false);
    }
    let taken = bite(appetite, *plant_energy);
    *plant_energy -= taken;
    (taken, *plant_energy <= f32::EPSILON)
}

/// Hunt success: the species rate scaled by the size ratio, with the
/// advantage capped.
#[must_use]
pub fn hunt_chance(hunter: &SpeciesConfig, hunter_size: f32, prey_size: f32, config: &FaunaConfig) -> f64 {
    let ratio = if prey_size > 0.0 {
        (hunter_size / prey_size).min(config.max_size_advantage)
    } else {
        config.max_size_advantage
    };
    f64::from((hunter.hunt_success_rate * ratio).clamp(0.0, 1.0))
}

/// Rolls a hunt. The roll is drawn even when the chance is 0 or 1.
pub fn resolve_hunt<R: Rng>(chance: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use aura_data::{FaunaSpecies, FloraKind, GrowthStage};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_food_chain() {
        let fauna = AppConfig::default().fauna;
        let grass = EntityKind::Flora(FloraKind::Grass);
        let herbivore = EntityKind::Fauna(FaunaSpecies::Herbivore);
        let predator = EntityKind::Fauna(FaunaSpecies::Predator);

        assert!(can_eat(&fauna.herbivore, grass));
        assert!(!can_eat(&fauna.herbivore, herbivore));
        assert!(!can_eat(&fauna.predator, grass));
        assert!(can_eat(&fauna.predator, herbivore));
        assert!(!can_eat(&fauna.predator, predator));
        assert!(can_eat(&fauna.omnivore, grass));
        assert!(can_eat(&fauna.omnivore, herbivore));
    }

    #[test]
    fn test_graze_drains_plant() {
        let plant = Plant {
            kind: FloraKind::Bush,
            stage: GrowthStage::Mature,
            growth: 60.0,
            last_growth: 0.0,
            decay_timer: 0,
        };
        let mut energy = 20.0;
        assert_eq!(graze(&plant, &mut energy, 15.0), (15.0, false));
        assert_eq!(graze(&plant, &mut energy, 15.0), (5.0, true));
        assert_eq!(energy, 0.0);
    }

    #[test]
    fn test_seeds_cannot_be_grazed() {
        let plant = Plant {
            kind: FloraKind::Grass,
            stage: GrowthStage::Seed,
            growth: 0.0,
            last_growth: 0.0,
            decay_timer: 0,
        };
        let mut energy = 3.0;
        assert_eq!(graze(&plant, &mut energy, 10.0), (0.0, false));
        assert_eq!(energy, 3.0);
    }

    #[test]
    fn test_hunt_chance_size_advantage_is_capped() {
        let fauna = AppConfig::default().fauna;
        let rate = f64::from(fauna.predator.hunt_success_rate);
        let even = hunt_chance(&fauna.predator, 1.0, 1.0, &fauna);
        let huge = hunt_chance(&fauna.predator, 10.0, 1.0, &fauna);
        let small = hunt_chance(&fauna.predator, 0.5, 1.0, &fauna);
        assert!((even - rate).abs() < 1e-6);
        assert!((huge - rate * f64::from(fauna.max_size_advantage)).abs() < 1e-6);
        assert!(small < even);
    }

    #[test]
    fn test_resolve_hunt_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..50).all(|_| resolve_hunt(1.0, &mut rng)));
        assert!((0..50).all(|_| !resolve_hunt(0.0, &mut rng)));
    }
}
