use crate::model::world::World;
use aura_data::StatsSnapshot;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

impl World {
    /// Advances the simulation by one tick.
    ///
    /// Phases run in a fixed order:
    /// - Clock, weather and nutrient regeneration
    /// - Flora growth, spreading and removal
    /// - Fauna sense/decide/act in a shuffled order
    /// - Spatial index rebuild
    /// - Statistics
    ///
    /// # Returns
    /// The statistics snapshot published at the end of the tick.
    pub fn tick(&mut self) -> StatsSnapshot {
        let start = Instant::now();
        self.recent_deaths.clear();

        self.env.advance(&self.config.weather, &mut self.rng);
        self.nutrients.regenerate();

        self.update_flora();
        self.update_fauna();

        // The snapshot reports the conditions the tick ran under.
        let weather = self.env.active_kind();
        let growth_multiplier = self.env.growth_multiplier();
        self.env.finish_tick();

        self.rebuild_index();
        let stats = self.finalize_stats(weather, growth_multiplier);

        let fauna = stats.counts.fauna_total();
        let flora = stats.counts.flora_total();
        self.metrics.record_tick(start.elapsed(), fauna, flora);
        tracing::trace!(
            tick = stats.tick,
            fauna,
            flora,
            births = stats.births,
            deaths = stats.deaths,
            "Tick complete"
        );

        self.last_stats = stats.clone();
        stats
    }

    /// Runs up to `max_ticks` ticks, stopping early once `stop` is set.
    ///
    /// The flag is only checked between ticks. Returns the number of ticks run.
    pub fn run(&mut self, max_ticks: u64, stop: &AtomicBool) -> u64 {
        let mut ran = 0;
        while ran < max_ticks && !stop.load(Ordering::Relaxed) {
            self.tick();
            ran += 1;
        }
        ran
    }
}
