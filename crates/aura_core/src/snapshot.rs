use aura_data::{
    Action, EntityId, FaunaSpecies, FloraKind, GrowthStage, Season, StatsSnapshot, TimeOfDay,
    Traits, WeatherEvent,
};
use serde::{Deserialize, Serialize};

/// Variant-specific part of an [`EntitySnapshot`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityView {
    Flora {
        kind: FloraKind,
        stage: GrowthStage,
        growth: f32,
    },
    Fauna {
        species: FaunaSpecies,
        traits: Traits,
        action: Action,
        hunger: f32,
        fear: f32,
    },
}

/// Read-only view of one live entity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub x: i32,
    pub y: i32,
    pub energy: f32,
    pub age: u64,
    pub generation: u32,
    #[serde(flatten)]
    pub view: EntityView,
}

impl EntitySnapshot {
    #[must_use]
    pub fn is_fauna(&self) -> bool {
        matches!(self.view, EntityView::Fauna { .. })
    }

    #[must_use]
    pub fn species(&self) -> Option<FaunaSpecies> {
        match self.view {
            EntityView::Fauna { species, .. } => Some(species),
            EntityView::Flora { .. } => None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Option<GrowthStage> {
        match self.view {
            EntityView::Flora { stage, .. } => Some(stage),
            EntityView::Fauna { .. } => None,
        }
    }
}

/// Everything a transport or renderer needs for one frame.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: u16,
    pub height: u16,
    pub season: Season,
    pub time_of_day: TimeOfDay,
    pub weather: Option<WeatherEvent>,
    pub entities: Vec<EntitySnapshot>,
    pub stats: StatsSnapshot,
}
