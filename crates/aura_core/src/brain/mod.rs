pub mod crossover;
pub mod forward;
pub mod mutation;

pub use aura_data::{Action, Brain, ACTION_OUTPUTS, HIDDEN_UNITS, SENSORY_INPUTS};
use rand::Rng;

/// Weights are clipped to this magnitude after every mutation.
pub const WEIGHT_LIMIT: f32 = 5.0;

/// Trait defining the decision logic for creature brains.
pub trait BrainLogic {
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self;

    /// Action probabilities for a sensory vector. Pure: identical inputs and
    /// weights always give the identical distribution.
    #[must_use]
    fn forward(&self, inputs: [f32; SENSORY_INPUTS]) -> [f32; ACTION_OUTPUTS];

    /// Samples an action from [`BrainLogic::forward`].
    fn decide<R: Rng>(&self, inputs: [f32; SENSORY_INPUTS], rng: &mut R) -> Action;

    /// Uniform per-weight crossover.
    #[must_use]
    fn crossover_with_rng<R: Rng>(&self, other: &Self, rng: &mut R) -> Self;

    /// Additive bounded mutation of every weight, scaled by `rate`.
    fn mutate_with_rng<R: Rng>(&mut self, rate: f32, rng: &mut R);

    /// Mean absolute weight difference.
    fn distance(&self, other: &Self) -> f32;
}

impl BrainLogic for Brain {
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut brain = Brain::default();
        for w in brain.weights_mut() {
            *w = rng.gen_range(-1.0..1.0);
        }
        brain
    }

    fn forward(&self, inputs: [f32; SENSORY_INPUTS]) -> [f32; ACTION_OUTPUTS] {
        forward::forward(self, inputs)
    }

    fn decide<R: Rng>(&self, inputs: [f32; SENSORY_INPUTS], rng: &mut R) -> Action {
        let probs = forward::forward(self, inputs);
        Action::from_index(forward::sample_index(&probs, rng))
    }

    fn crossover_with_rng<R: Rng>(&self, other: &Self, rng: &mut R) -> Self {
        crossover::brain_crossover_with_rng(self, other, rng)
    }

    fn mutate_with_rng<R: Rng>(&mut self, rate: f32, rng: &mut R) {
        mutation::mutate_with_rng(self, rate, rng);
    }

    fn distance(&self, other: &Self) -> f32 {
        let sum: f32 = self
            .weights()
            .zip(other.weights())
            .map(|(a, b)| (a - b).abs())
            .sum();
        sum / Brain::PARAMETERS as f32
    }
}
