use super::*;
use rand::Rng;

/// Non-finite inputs read as 0; everything else is clamped into `[0, 1]`.
#[inline]
fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn hidden_activations(brain: &Brain, inputs: [f32; SENSORY_INPUTS]) -> [f32; HIDDEN_UNITS] {
    let mut hidden = brain.hidden_bias;
    for (i, &raw) in inputs.iter().enumerate() {
        let x = sanitize(raw);
        if x == 0.0 {
            continue;
        }
        for (h, w) in hidden.iter_mut().zip(brain.input_hidden[i].iter()) {
            *h += x * w;
        }
    }
    for h in &mut hidden {
        *h = h.tanh();
    }
    hidden
}

pub fn forward(brain: &Brain, inputs: [f32; SENSORY_INPUTS]) -> [f32; ACTION_OUTPUTS] {
    let hidden = hidden_activations(brain, inputs);
    let mut logits = brain.output_bias;
    for (h, row) in hidden.iter().zip(brain.hidden_output.iter()) {
        for (o, w) in logits.iter_mut().zip(row.iter()) {
            *o += h * w;
        }
    }
    softmax(logits)
}

/// Numerically stable softmax; degenerate input yields the uniform distribution.
pub fn softmax(logits: [f32; ACTION_OUTPUTS]) -> [f32; ACTION_OUTPUTS] {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let uniform = [1.0 / ACTION_OUTPUTS as f32; ACTION_OUTPUTS];
    if !max.is_finite() {
        return uniform;
    }

    let mut out = [0.0; ACTION_OUTPUTS];
    let mut sum = 0.0;
    for (o, &l) in out.iter_mut().zip(logits.iter()) {
        *o = (l - max).exp();
        sum += *o;
    }
    if !sum.is_finite() || sum <= 0.0 {
        return uniform;
    }
    for o in &mut out {
        *o /= sum;
    }
    out
}

/// Inverse-CDF draw over a probability vector.
pub fn sample_index<R: Rng>(probs: &[f32; ACTION_OUTPUTS], rng: &mut R) -> usize {
    let r: f32 = rng.gen();
    let mut acc = 0.0;
    let mut last_nonzero = 0;
    for (i, &p) in probs.iter().enumerate() {
        if p > 0.0 {
            last_nonzero = i;
        }
        acc += p;
        if r < acc {
            return i;
        }
    }
    // Rounding left the cumulative sum just below 1.
    last_nonzero
}
