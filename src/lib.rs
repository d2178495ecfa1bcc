//! AURA: a seeded grid ecosystem.
//!
//! Flora grows and spreads over a nutrient field, fauna senses its
//! surroundings and picks actions through a small neural network, and a
//! clock with stochastic weather drives both. [`model::world::World`] owns
//! the whole simulation; everything else is re-exported from `aura_core`
//! and `aura_data`.
//!
//! ```no_run
//! use aura_lib::model::config::AppConfig;
//! use aura_lib::model::world::World;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(7);
//! let mut world = World::new(config).expect("default config is valid");
//! let stats = world.tick();
//! println!("{} creatures alive", stats.counts.fauna_total());
//! ```

pub mod model;
