use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically assigned identifier, stable for the lifetime of an entity.
///
/// Arena handles are reused after despawn; this id never is, so it is the
/// key used for ordering, tie-breaks and external views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identification of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: EntityId,
    pub parents: Option<(EntityId, EntityId)>,
}

/// Integer grid cell occupied by an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_sq(&self, other: &Position) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn distance(&self, other: &Position) -> f32 {
        (self.distance_sq(other) as f32).sqrt()
    }

    /// Chebyshev distance; 1 means the cells touch, diagonals included.
    #[must_use]
    pub fn chebyshev(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Energy bookkeeping shared by flora and fauna.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metabolism {
    pub energy: f32,
    pub max_energy: f32,
    pub age: u64,
    pub generation: u32,
    pub offspring_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FloraKind {
    Grass,
    Bush,
    Tree,
}

impl FloraKind {
    pub const ALL: [FloraKind; 3] = [FloraKind::Grass, FloraKind::Bush, FloraKind::Tree];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FloraKind::Grass => "grass",
            FloraKind::Bush => "bush",
            FloraKind::Tree => "tree",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FaunaSpecies {
    Herbivore,
    Predator,
    Omnivore,
}

impl FaunaSpecies {
    pub const ALL: [FaunaSpecies; 3] = [
        FaunaSpecies::Herbivore,
        FaunaSpecies::Predator,
        FaunaSpecies::Omnivore,
    ];

    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            FaunaSpecies::Herbivore => 0,
            FaunaSpecies::Predator => 1,
            FaunaSpecies::Omnivore => 2,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FaunaSpecies::Herbivore => "herbivore",
            FaunaSpecies::Predator => "predator",
            FaunaSpecies::Omnivore => "omnivore",
        }
    }
}

/// Closed tag over the two entity variants.
///
/// Every live entity carries exactly one of these; per-tick logic dispatches
/// on it instead of probing for optional components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Flora(FloraKind),
    Fauna(FaunaSpecies),
}

impl EntityKind {
    #[must_use]
    pub fn is_flora(&self) -> bool {
        matches!(self, EntityKind::Flora(_))
    }

    #[must_use]
    pub fn species(&self) -> Option<FaunaSpecies> {
        match self {
            EntityKind::Fauna(s) => Some(*s),
            EntityKind::Flora(_) => None,
        }
    }
}

/// Lifecycle stage of a plant. Ordering follows the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GrowthStage {
    Seed,
    Sprout,
    Mature,
    Decaying,
}

impl GrowthStage {
    #[must_use]
    pub fn next(&self) -> Option<GrowthStage> {
        match self {
            GrowthStage::Seed => Some(GrowthStage::Sprout),
            GrowthStage::Sprout => Some(GrowthStage::Mature),
            GrowthStage::Mature => Some(GrowthStage::Decaying),
            GrowthStage::Decaying => None,
        }
    }

    /// Sprouts and mature plants can be grazed.
    #[must_use]
    pub fn is_edible(&self) -> bool {
        matches!(self, GrowthStage::Sprout | GrowthStage::Mature)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "seed",
            GrowthStage::Sprout => "sprout",
            GrowthStage::Mature => "mature",
            GrowthStage::Decaying => "decaying",
        }
    }
}

/// Flora variant data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub kind: FloraKind,
    pub stage: GrowthStage,
    pub growth: f32,
    /// Growth credited on the most recent tick.
    pub last_growth: f32,
    pub decay_timer: u32,
}

/// Heritable physical traits of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    pub speed: f32,
    pub vision: f32,
    pub size: f32,
    pub metabolism: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    Wander,
    Forage,
    Flee,
    Chase,
    Reproduce,
    #[default]
    Rest,
}

impl Action {
    /// Network output order.
    pub const ALL: [Action; 6] = [
        Action::Wander,
        Action::Forage,
        Action::Flee,
        Action::Chase,
        Action::Reproduce,
        Action::Rest,
    ];

    #[must_use]
    pub fn from_index(idx: usize) -> Action {
        Action::ALL.get(idx).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Wander => "wander",
            Action::Forage => "forage",
            Action::Flee => "flee",
            Action::Chase => "chase",
            Action::Reproduce => "reproduce",
            Action::Rest => "rest",
        }
    }
}

/// Fauna variant data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub species: FaunaSpecies,
    pub traits: Traits,
    /// 0 = sated, 1 = starving.
    pub hunger: f32,
    /// 0 = calm, 1 = predator adjacent.
    pub fear: f32,
    pub action: Action,
    /// Ticks until the creature may reproduce again.
    pub cooldown: u32,
}
