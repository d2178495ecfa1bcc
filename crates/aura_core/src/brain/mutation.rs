use super::*;
use rand::Rng;

pub fn mutate_with_rng<R: Rng>(brain: &mut Brain, rate: f32, rng: &mut R) {
    if rate <= 0.0 {
        return;
    }
    for w in brain.weights_mut() {
        *w += rng.gen_range(-1.0f32..=1.0) * rate;
        *w = w.clamp(-WEIGHT_LIMIT, WEIGHT_LIMIT);
    }
}
