use aura_data::{Position, Traits};
use rand::Rng;

/// Grid extent used to keep moves on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(
            pos.x.clamp(0, i32::from(self.width) - 1),
            pos.y.clamp(0, i32::from(self.height) - 1),
        )
    }
}

/// A completed move: where the creature ended up and how many cells it crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub to: Position,
    pub steps: u32,
}

impl Movement {
    #[must_use]
    pub fn stay(at: Position) -> Self {
        Self { to: at, steps: 0 }
    }
}

/// Cells a creature may cross in one directed move.
#[must_use]
pub fn max_steps(traits: &Traits) -> u32 {
    if traits.speed.is_finite() {
        (traits.speed.floor() as u32).max(1)
    } else {
        1
    }
}

/// Zero or one cell in a random direction.
pub fn wander<R: Rng>(from: Position, bounds: Bounds, rng: &mut R) -> Movement {
    let dx = rng.gen_range(-1..=1);
    let dy = rng.gen_range(-1..=1);
    let to = bounds.clamp(from.offset(dx, dy));
    Movement {
        to,
        steps: u32::from(to != from),
    }
}

fn walk<D, S>(from: Position, steps: u32, bounds: Bounds, direction: D, stop: S) -> Movement
where
    D: Fn(Position) -> (i32, i32),
    S: Fn(Position) -> bool,
{
    let mut pos = from;
    let mut taken = 0;
    for _ in 0..steps {
        if stop(pos) {
            break;
        }
        let (dx, dy) = direction(pos);
        let next = bounds.clamp(pos.offset(dx, dy));
        if next == pos {
            break;
        }
        pos = next;
        taken += 1;
    }
    Movement { to: pos, steps: taken }
}

/// Moves toward `target`, stopping once adjacent.
#[must_use]
pub fn approach(from: Position, target: Position, steps: u32, bounds: Bounds) -> Movement {
    walk(
        from,
        steps,
        bounds,
        |p| ((target.x - p.x).signum(), (target.y - p.y).signum()),
        |p| p.chebyshev(&target) <= 1,
    )
}

/// Moves directly away from `threat`. Standing on the threat picks no direction.
#[must_use]
pub fn retreat(from: Position, threat: Position, steps: u32, bounds: Bounds) -> Movement {
    let dx = (from.x - threat.x).signum();
    let dy = (from.y - threat.y).signum();
    if dx == 0 && dy == 0 {
        return Movement::stay(from);
    }
    walk(from, steps, bounds, |_| (dx, dy), |_| false)
}
