/// Movement: wandering, approaching and retreating on the grid.
pub mod action;
/// Ageing, metabolic cost, feeding and death.
pub mod biological;
/// Food-chain rules and hunt resolution.
pub mod ecological;
/// Weather effects applied to individual creatures.
pub mod environment;
/// Plant growth, stage transitions and spreading.
pub mod flora;
/// Perception and the brain's sensory vector.
pub mod intel;
/// Census, diversity index and bounded history.
pub mod stats;
