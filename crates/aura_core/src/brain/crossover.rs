use super::*;
use rand::Rng;

/// Each weight and bias is taken from either parent with equal odds.
pub fn brain_crossover_with_rng<R: Rng>(brain: &Brain, other: &Brain, rng: &mut R) -> Brain {
    let mut child = brain.clone();
    for (w, theirs) in child.weights_mut().zip(other.weights()) {
        if rng.gen_bool(0.5) {
            *w = *theirs;
        }
    }
    child
}
