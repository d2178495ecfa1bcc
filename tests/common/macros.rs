/// Asserts the live count of one fauna species in the latest stats.
#[macro_export]
macro_rules! assert_species_count {
    ($world:expr, $species:expr, $count:expr) => {
        assert_eq!(
            $world.last_stats().counts.fauna($species),
            $count,
            "{} count mismatch",
            $species.name()
        );
    };
}

/// Asserts that no fauna of any species is alive.
#[macro_export]
macro_rules! assert_extinct {
    ($world:expr) => {
        assert_eq!(
            $world.fauna_count(),
            0,
            "Expected every creature to be dead at tick {}",
            $world.tick_count()
        );
    };
}

/// Asserts that two floats are within `eps` of each other.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $eps:expr) => {
        let (l, r) = ($left, $right);
        assert!((l - r).abs() <= $eps, "{} is not within {} of {}", l, $eps, r);
    };
}
