//! Plain data types shared across the AURA workspace.
//!
//! Everything here is a serde-friendly value type. Behaviour lives in
//! `aura_core`, which implements its logic traits on these structs.

pub mod data;

pub use data::brain::{Brain, ACTION_OUTPUTS, HIDDEN_UNITS, SENSORY_INPUTS};
pub use data::entity::{
    Action, Creature, EntityId, EntityKind, FaunaSpecies, FloraKind, GrowthStage, Identity,
    Metabolism, Plant, Position, Traits,
};
pub use data::environment::{Season, TimeOfDay, WeatherEvent, WeatherKind};
pub use data::stats::{
    DeathCause, DeathTally, PopulationHistory, SpeciesCounts, StatsSnapshot, TraitAverages,
};
