//! # Aura Core
//!
//! The simulation engine for Aura, a grid ecosystem of evolving fauna and
//! growing flora.
//!
//! This crate holds the deterministic per-entity logic:
//! - Fixed-topology neural brains (8 inputs, 12 hidden, 6 actions)
//! - Heredity: crossover and bounded mutation of traits and weights
//! - Flora growth stages, spreading and the soil nutrient cycle
//! - Day, season and weather scheduling
//! - Spatial hashing for radius and nearest-entity queries
//! - Population statistics and structured logging
//!
//! The `World` that drives a tick lives in the root `aura` crate; everything
//! here is a building block it calls with an explicit seeded RNG.
//!
//! ## Example
//!
//! ```
//! use aura_core::brain::BrainLogic;
//! use aura_data::{Brain, SENSORY_INPUTS};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let brain = Brain::new_random_with_rng(&mut rng);
//!
//! let probs = brain.forward([0.5; SENSORY_INPUTS]);
//! assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-5);
//! let action = brain.decide([0.5; SENSORY_INPUTS], &mut rng);
//! println!("chose {}", action.name());
//! ```

/// Feed-forward brain, crossover and mutation
pub mod brain;
/// Configuration sections, defaults and validation
pub mod config;
/// World clock, seasons and the weather generator
pub mod environment;
/// Configuration error type
pub mod error;
/// Trait and brain inheritance
pub mod genetics;
/// Entity construction (founders, offspring, plants) and id allocation
pub mod lifecycle;
/// Tick timing and logging setup
pub mod metrics;
/// Per-cell soil nutrients
pub mod nutrients;
/// Live per-cell occupancy for placement checks
pub mod occupancy;
/// Read-only views for consumers
pub mod snapshot;
/// Spatial hashing for proximity queries
pub mod spatial_hash;
/// Per-tick systems (perception, action, biology, ecology, flora, stats)
pub mod systems;

pub use brain::BrainLogic;
pub use config::AppConfig;
pub use error::ConfigError;
pub use metrics::{init_logging, Metrics};
