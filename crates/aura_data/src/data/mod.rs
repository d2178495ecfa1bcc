//! Core data structures for the AURA simulation.

pub mod brain;
pub mod entity;
pub mod environment;
pub mod stats;
