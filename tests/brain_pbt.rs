use aura_core::brain::{BrainLogic, WEIGHT_LIMIT};
use aura_data::{Action, Brain, SENSORY_INPUTS};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn inputs() -> impl Strategy<Value = [f32; SENSORY_INPUTS]> {
    prop::array::uniform8(-10.0f32..10.0)
}

proptest! {
    #[test]
    fn forward_is_a_probability_distribution(seed in any::<u64>(), input in inputs()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let brain = Brain::new_random_with_rng(&mut rng);
        let probs = brain.forward(input);
        prop_assert!(probs.iter().all(|p| p.is_finite() && *p >= 0.0));
        prop_assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-4);
        prop_assert_eq!(probs, brain.forward(input));
    }

    #[test]
    fn mutation_respects_weight_limit(seed in any::<u64>(), rate in 0.0f32..1.0, rounds in 1usize..20) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut brain = Brain::new_random_with_rng(&mut rng);
        for _ in 0..rounds {
            brain.mutate_with_rng(rate, &mut rng);
        }
        prop_assert!(brain.weights().all(|w| w.is_finite() && w.abs() <= WEIGHT_LIMIT));
    }

    #[test]
    fn crossover_draws_every_weight_from_a_parent(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let a = Brain::new_random_with_rng(&mut rng);
        let b = Brain::new_random_with_rng(&mut rng);
        let child = a.crossover_with_rng(&b, &mut rng);
        for ((c, x), y) in child.weights().zip(a.weights()).zip(b.weights()) {
            prop_assert!(c == x || c == y);
        }
        prop_assert!(child.distance(&a) <= a.distance(&b) + 1e-6);
    }

    #[test]
    fn decide_same_seed_same_action(seed in any::<u64>(), input in inputs()) {
        let brain = Brain::new_random_with_rng(&mut ChaCha8Rng::seed_from_u64(seed));
        let first = brain.decide(input, &mut ChaCha8Rng::seed_from_u64(seed ^ 1));
        let second = brain.decide(input, &mut ChaCha8Rng::seed_from_u64(seed ^ 1));
        prop_assert_eq!(first, second);
        prop_assert!(Action::ALL.contains(&first));
    }
}

#[test]
fn test_brain_is_a_deep_copy() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let original = Brain::new_random_with_rng(&mut rng);
    let mut copy = original.clone();
    copy.mutate_with_rng(1.0, &mut rng);
    assert_ne!(original, copy);
    assert_eq!(original.distance(&original), 0.0);
}
