use crate::model::snapshot::{EntitySnapshot, EntityView, WorldSnapshot};
use crate::model::systems::biological::DeathRecord;
use crate::model::world::World;
use aura_data::{StatsSnapshot, WeatherKind};
use std::collections::BTreeSet;

pub type FaunaComponents<'a> = (
    &'a aura_data::Identity,
    &'a aura_data::Position,
    &'a aura_data::Creature,
    &'a aura_data::Metabolism,
);

pub type FloraComponents<'a> = (
    &'a aura_data::Identity,
    &'a aura_data::Position,
    &'a aura_data::Plant,
    &'a aura_data::Metabolism,
);

impl World {
    /// Read-only views of every live entity, sorted by id.
    ///
    /// Never mutates the world; two calls between ticks return equal data.
    #[must_use]
    pub fn snapshot_entities(&self) -> Vec<EntitySnapshot> {
        let mut entities = Vec::with_capacity(self.ecs.len() as usize);

        for (_handle, (identity, pos, creature, met)) in self.ecs.query::<FaunaComponents>().iter() {
            entities.push(EntitySnapshot {
                id: identity.id,
                x: pos.x,
                y: pos.y,
                energy: met.energy,
                age: met.age,
                generation: met.generation,
                view: EntityView::Fauna {
                    species: creature.species,
                    traits: creature.traits,
                    action: creature.action,
                    hunger: creature.hunger,
                    fear: creature.fear,
                },
            });
        }
        for (_handle, (identity, pos, plant, met)) in self.ecs.query::<FloraComponents>().iter() {
            entities.push(EntitySnapshot {
                id: identity.id,
                x: pos.x,
                y: pos.y,
                energy: met.energy,
                age: met.age,
                generation: met.generation,
                view: EntityView::Flora {
                    kind: plant.kind,
                    stage: plant.stage,
                    growth: plant.growth,
                },
            });
        }

        entities.sort_unstable_by_key(|e| e.id);
        entities
    }

    /// One serializable frame: clock, weather, entities and the latest stats.
    #[must_use]
    pub fn create_snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.env.clock.tick,
            width: self.width,
            height: self.height,
            season: self.env.clock.season(),
            time_of_day: self.env.clock.time_of_day(),
            weather: self.env.weather,
            entities: self.snapshot_entities(),
            stats: self.last_stats.clone(),
        }
    }

    /// Names of weather events active at any tick since the previous call,
    /// plus the one active now.
    pub fn events_since_last_snapshot(&mut self) -> BTreeSet<&'static str> {
        self.env
            .take_seen_events()
            .into_iter()
            .map(|kind| kind.name())
            .collect()
    }

    /// Starts a weather event now. Returns false while another is active.
    pub fn force_weather(&mut self, kind: WeatherKind) -> bool {
        self.env.force_weather(kind, &self.config.weather)
    }

    /// Deaths recorded during the most recent tick.
    #[must_use]
    pub fn recent_deaths(&self) -> &[DeathRecord] {
        &self.recent_deaths
    }

    #[must_use]
    pub fn last_stats(&self) -> &StatsSnapshot {
        &self.last_stats
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.env.clock.tick
    }

    #[must_use]
    pub fn fauna_count(&self) -> usize {
        self.ecs.query::<&aura_data::Creature>().iter().count()
    }

    #[must_use]
    pub fn flora_count(&self) -> usize {
        self.ecs.query::<&aura_data::Plant>().iter().count()
    }
}
