pub use aura_core::BrainLogic;
pub mod brain {
    pub use aura_core::brain::*;
}
pub mod config {
    pub use aura_core::config::*;
}
pub mod environment {
    pub use aura_core::environment::*;
}
pub mod error {
    pub use aura_core::error::*;
}
pub mod genetics {
    pub use aura_core::genetics::*;
}
pub mod lifecycle {
    pub use aura_core::lifecycle::*;
}
pub mod metrics {
    pub use aura_core::metrics::*;
}
pub mod nutrients {
    pub use aura_core::nutrients::*;
}
pub mod occupancy {
    pub use aura_core::occupancy::*;
}
pub mod snapshot {
    pub use aura_core::snapshot::*;
}
pub mod spatial_hash {
    pub use aura_core::spatial_hash::*;
}
pub mod systems {
    pub use aura_core::systems::*;
}

pub mod world;
