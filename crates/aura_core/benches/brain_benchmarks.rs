use aura_core::brain::BrainLogic;
use aura_data::{Brain, SENSORY_INPUTS};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Forward pass with mid-range inputs.
fn bench_brain_forward(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let brain = Brain::new_random_with_rng(&mut rng);
    let inputs = [0.5; SENSORY_INPUTS];

    c.bench_function("brain_forward", |b| {
        b.iter(|| black_box(brain.forward(black_box(inputs))))
    });
}

/// Forward pass plus the sampled decision.
fn bench_brain_decide(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let brain = Brain::new_random_with_rng(&mut rng);
    let inputs = [1.0; SENSORY_INPUTS];

    c.bench_function("brain_decide", |b| {
        b.iter(|| black_box(brain.decide(black_box(inputs), &mut rng)))
    });
}

fn bench_brain_creation(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("brain_creation", |b| {
        b.iter(|| black_box(Brain::new_random_with_rng(&mut rng)))
    });
}

fn bench_brain_crossover_and_mutation(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let p1 = Brain::new_random_with_rng(&mut rng);
    let p2 = Brain::new_random_with_rng(&mut rng);

    c.bench_function("brain_crossover_mutate", |b| {
        b.iter(|| {
            let mut child = p1.crossover_with_rng(&p2, &mut rng);
            child.mutate_with_rng(0.1, &mut rng);
            black_box(child)
        })
    });
}

criterion_group!(
    benches,
    bench_brain_forward,
    bench_brain_decide,
    bench_brain_creation,
    bench_brain_crossover_and_mutation
);
criterion_main!(benches);
