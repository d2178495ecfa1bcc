use crate::config::NutrientConfig;
use aura_data::Position;
use serde::{Deserialize, Serialize};

/// Per-cell soil fertility in `[0, max_level]`.
///
/// Flora draws from it, deaths deposit into it and every cell regenerates
/// slowly. Out-of-grid coordinates read as empty and swallow deposits.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NutrientGrid {
    pub width: u16,
    pub height: u16,
    pub max_level: f32,
    pub regen_rate: f32,
    cells: Vec<f32>,
}

impl NutrientGrid {
    #[must_use]
    pub fn new(width: u16, height: u16, config: &NutrientConfig) -> Self {
        let initial = config.initial_level.clamp(0.0, config.max_level);
        Self {
            width,
            height,
            max_level: config.max_level,
            regen_rate: config.regen_rate,
            cells: vec![initial; usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= i32::from(self.width) || pos.y >= i32::from(self.height)
        {
            return None;
        }
        Some(pos.y as usize * usize::from(self.width) + pos.x as usize)
    }

    #[must_use]
    pub fn level(&self, pos: Position) -> f32 {
        self.index(pos).map_or(0.0, |i| self.cells[i])
    }

    /// Fraction of the cell's capacity currently available.
    #[must_use]
    pub fn availability(&self, pos: Position) -> f32 {
        self.level(pos) / self.max_level
    }

    /// Removes up to `amount`; returns what was actually taken.
    pub fn draw(&mut self, pos: Position, amount: f32) -> f32 {
        let Some(i) = self.index(pos) else {
            return 0.0;
        };
        let taken = amount.max(0.0).min(self.cells[i]);
        self.cells[i] -= taken;
        taken
    }

    /// Adds up to `amount`; returns what the cell actually credited.
    pub fn deposit(&mut self, pos: Position, amount: f32) -> f32 {
        let Some(i) = self.index(pos) else {
            return 0.0;
        };
        let credited = amount.max(0.0).min(self.max_level - self.cells[i]);
        self.cells[i] += credited;
        credited
    }

    pub fn regenerate(&mut self) {
        if self.regen_rate <= 0.0 {
            return;
        }
        let (rate, max) = (self.regen_rate, self.max_level);
        for cell in &mut self.cells {
            *cell = (*cell + rate).min(max);
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.cells.iter().map(|&c| f64::from(c)).sum()
    }

    #[must_use]
    pub fn average(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        (self.total() / self.cells.len() as f64) as f32
    }
}
