use aura_data::{EntityId, EntityKind, Position};
use std::collections::HashSet;

/// One indexed entity: arena handle plus the data queries filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialEntry {
    pub handle: hecs::Entity,
    pub id: EntityId,
    pub pos: Position,
    pub kind: EntityKind,
}

#[derive(Clone, Debug)]
/// Bucket grid answering radius and nearest-entity queries over grid cells.
///
/// Each bucket covers `cell_size` x `cell_size` grid cells. A radius query
/// visits only the buckets overlapping the radius' bounding box, then filters
/// by Euclidean distance.
///
/// The world rebuilds the index once per tick after positions settle, so all
/// queries inside a tick observe the same snapshot. Entries can go stale
/// within a tick; callers confirm liveness against the arena.
///
/// # Examples
/// ```
/// use aura_core::spatial_hash::{SpatialEntry, SpatialHash};
/// use aura_data::{EntityId, EntityKind, FloraKind, Position};
///
/// let mut arena = hecs::World::new();
/// let handle = arena.spawn((0u8,));
/// let mut index = SpatialHash::new(5, 20, 20);
/// index.insert(SpatialEntry {
///     handle,
///     id: EntityId(1),
///     pos: Position::new(3, 4),
///     kind: EntityKind::Flora(FloraKind::Grass),
/// });
///
/// let mut nearby = Vec::new();
/// index.query_into(Position::new(0, 0), 5.0, &mut nearby);
/// assert_eq!(nearby.len(), 1);
/// ```
pub struct SpatialHash {
    pub cell_size: i32,
    pub width: u16,
    pub height: u16,
    pub cols: usize,
    pub rows: usize,
    buckets: Vec<Vec<SpatialEntry>>,
    len: usize,
}

impl SpatialHash {
    #[must_use]
    pub fn new(cell_size: u16, width: u16, height: u16) -> Self {
        let cell_size = i32::from(cell_size.max(1));
        let cols = (i32::from(width) + cell_size - 1) / cell_size;
        let rows = (i32::from(height) + cell_size - 1) / cell_size;
        let cols = cols.max(1) as usize;
        let rows = rows.max(1) as usize;
        Self {
            cell_size,
            width,
            height,
            cols,
            rows,
            buckets: vec![Vec::new(); cols * rows],
            len: 0,
        }
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < i32::from(self.width) && pos.y < i32::from(self.height)
    }

    #[inline]
    pub fn get_cell_idx(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        let cx = (pos.x / self.cell_size) as usize;
        let cy = (pos.y / self.cell_size) as usize;
        Some(cy * self.cols + cx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Adds an entry; out-of-grid positions are refused.
    pub fn insert(&mut self, entry: SpatialEntry) -> bool {
        match self.get_cell_idx(entry.pos) {
            Some(idx) => {
                self.buckets[idx].push(entry);
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with `id` from the bucket covering `pos`.
    pub fn remove(&mut self, id: EntityId, pos: Position) -> bool {
        let Some(idx) = self.get_cell_idx(pos) else {
            return false;
        };
        let bucket = &mut self.buckets[idx];
        match bucket.iter().position(|e| e.id == id) {
            Some(at) => {
                bucket.remove(at);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Replaces the whole index.
    ///
    /// # Panics
    /// An entry outside the grid or a repeated id is a broken world invariant.
    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = SpatialEntry>,
    {
        self.clear();
        let mut ids = HashSet::new();
        for entry in entries {
            assert!(
                ids.insert(entry.id),
                "duplicate entity id {} in spatial index",
                entry.id
            );
            let inserted = self.insert(entry);
            assert!(
                inserted,
                "entity {} at ({}, {}) lies outside the {}x{} grid",
                entry.id,
                entry.pos.x,
                entry.pos.y,
                self.width,
                self.height
            );
        }
    }

    fn bucket_range(&self, center: Position, radius: f32) -> (usize, usize, usize, usize) {
        let r = radius.max(0.0);
        let cs = self.cell_size as f32;
        let clamp_col = |v: f32| (v.floor() as i64).clamp(0, self.cols as i64 - 1) as usize;
        let clamp_row = |v: f32| (v.floor() as i64).clamp(0, self.rows as i64 - 1) as usize;
        (
            clamp_col((center.x as f32 - r) / cs),
            clamp_col((center.x as f32 + r) / cs),
            clamp_row((center.y as f32 - r) / cs),
            clamp_row((center.y as f32 + r) / cs),
        )
    }

    /// Calls `callback` for every entry within Euclidean `radius` of `center`.
    pub fn query_callback<F>(&self, center: Position, radius: f32, mut callback: F)
    where
        F: FnMut(&SpatialEntry),
    {
        if radius.is_nan() || radius < 0.0 {
            return;
        }
        let r_sq = f64::from(radius) * f64::from(radius);
        let (min_cx, max_cx, min_cy, max_cy) = self.bucket_range(center, radius);
        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                for entry in &self.buckets[cy * self.cols + cx] {
                    if center.distance_sq(&entry.pos) as f64 <= r_sq {
                        callback(entry);
                    }
                }
            }
        }
    }

    #[inline]
    pub fn query_into(&self, center: Position, radius: f32, result: &mut Vec<SpatialEntry>) {
        result.clear();
        self.query_callback(center, radius, |e| result.push(*e));
    }

    pub fn count_nearby<P>(&self, center: Position, radius: f32, mut predicate: P) -> usize
    where
        P: FnMut(&SpatialEntry) -> bool,
    {
        let mut count = 0;
        self.query_callback(center, radius, |e| {
            if predicate(e) {
                count += 1;
            }
        });
        count
    }

    /// Closest matching entry within `radius`; ties go to the lower id.
    pub fn nearest<P>(&self, center: Position, radius: f32, mut predicate: P) -> Option<SpatialEntry>
    where
        P: FnMut(&SpatialEntry) -> bool,
    {
        let mut best = Nearest::default();
        self.query_callback(center, radius, |e| {
            if predicate(e) {
                best.offer(center.distance_sq(&e.pos), e.id, *e);
            }
        });
        best.into_inner()
    }
}

/// Keeps the closest candidate offered so far, ordered by squared distance
/// and then by id, so the winner never depends on scan order.
#[derive(Debug, Clone, Copy)]
pub struct Nearest<T> {
    best: Option<(i64, EntityId, T)>,
}

impl<T> Default for Nearest<T> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<T> Nearest<T> {
    pub fn offer(&mut self, distance_sq: i64, id: EntityId, item: T) {
        let better = match &self.best {
            None => true,
            Some((d, best_id, _)) => (distance_sq, id) < (*d, *best_id),
        };
        if better {
            self.best = Some((distance_sq, id, item));
        }
    }

    pub fn into_inner(self) -> Option<T> {
        self.best.map(|(_, _, item)| item)
    }
}
