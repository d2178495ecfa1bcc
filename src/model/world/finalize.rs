use crate::model::spatial_hash::SpatialEntry;
use crate::model::systems::stats::{Census, TickContext};
use crate::model::world::World;
use aura_data::{
    Creature, EntityKind, FaunaSpecies, Identity, Metabolism, Plant, Position, StatsSnapshot, WeatherKind,
};

impl World {
    /// Rebuilds the spatial index from the store, inserting in id order.
    pub fn rebuild_index(&mut self) {
        let mut entries: Vec<SpatialEntry> = self
            .ecs
            .query::<(&Identity, &Position, &EntityKind)>()
            .iter()
            .map(|(handle, (identity, pos, kind))| SpatialEntry {
                handle,
                id: identity.id,
                pos: *pos,
                kind: *kind,
            })
            .collect();
        entries.sort_unstable_by_key(|e| e.id);
        self.spatial.rebuild(entries);
    }

    fn census(&self) -> Census {
        let mut census = Census::default();
        for (_handle, (creature, met)) in self.ecs.query::<(&Creature, &Metabolism)>().iter() {
            census.add_fauna(creature.species, &creature.traits, met.energy, met.generation);
        }
        for (_handle, plant) in self.ecs.query::<&Plant>().iter() {
            census.add_flora(plant.kind);
        }
        census
    }

    /// Reads the store once and publishes the tick's statistics.
    pub(crate) fn finalize_stats(&mut self, weather: Option<WeatherKind>, growth_multiplier: f32) -> StatsSnapshot {
        let census = self.census();
        let ctx = TickContext {
            tick: self.env.clock.tick,
            season: self.env.clock.season(),
            time_of_day: self.env.clock.time_of_day(),
            weather,
            growth_multiplier,
            avg_nutrients: self.nutrients.average(),
        };
        let stats = self.stats.ingest(&census, ctx);

        for species in FaunaSpecies::ALL {
            if self.last_stats.counts.fauna(species) > 0 && stats.counts.fauna(species) == 0 {
                tracing::info!(tick = stats.tick, species = species.name(), "Species went extinct");
            }
        }
        stats
    }
}
