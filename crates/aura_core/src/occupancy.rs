use aura_data::Position;

/// The eight cells surrounding a position, in a fixed scan order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Live per-cell occupancy, updated as entities spawn, move and die.
///
/// The spatial index is frozen for the duration of a tick; this grid answers
/// "is that neighbouring cell free right now" for spreading and births.
/// A cell holds at most one plant and any number of creatures.
#[derive(Clone, Debug)]
pub struct Occupancy {
    pub width: u16,
    pub height: u16,
    flora: Vec<bool>,
    fauna: Vec<u16>,
    flora_count: usize,
}

impl Occupancy {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let cells = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            flora: vec![false; cells],
            fauna: vec![0; cells],
            flora_count: 0,
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
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.flora.len()
    }

    #[must_use]
    pub fn flora_count(&self) -> usize {
        self.flora_count
    }

    #[must_use]
    pub fn flora_density(&self) -> f32 {
        if self.flora.is_empty() {
            return 1.0;
        }
        self.flora_count as f32 / self.flora.len() as f32
    }

    #[must_use]
    pub fn has_flora(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.flora[i])
    }

    /// Claims a cell for a plant; false when taken or off-grid.
    pub fn place_flora(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) if !self.flora[i] => {
                self.flora[i] = true;
                self.flora_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn clear_flora(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            if self.flora[i] {
                self.flora[i] = false;
                self.flora_count -= 1;
            }
        }
    }

    #[must_use]
    pub fn fauna_at(&self, pos: Position) -> u16 {
        self.index(pos).map_or(0, |i| self.fauna[i])
    }

    pub fn add_fauna(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.fauna[i] = self.fauna[i].saturating_add(1);
        }
    }

    pub fn remove_fauna(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.fauna[i] = self.fauna[i].saturating_sub(1);
        }
    }

    pub fn move_fauna(&mut self, from: Position, to: Position) {
        if from != to {
            self.remove_fauna(from);
            self.add_fauna(to);
        }
    }

    /// Plants within Euclidean `radius` of `pos`, not counting `pos` itself.
    #[must_use]
    pub fn flora_within(&self, pos: Position, radius: u16) -> usize {
        let r = i32::from(radius);
        let mut count = 0;
        for dy in -r..=r {
            for dx in -r..=r {
                if (dx, dy) == (0, 0) || dx * dx + dy * dy > r * r {
                    continue;
                }
                if self.has_flora(pos.offset(dx, dy)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// In-grid neighbours of `pos` accepted by `free`, in scan order.
    pub fn neighbors_where<F>(&self, pos: Position, mut free: F) -> Vec<Position>
    where
        F: FnMut(&Self, Position) -> bool,
    {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|p| self.in_bounds(*p) && free(self, *p))
            .collect()
    }
}
