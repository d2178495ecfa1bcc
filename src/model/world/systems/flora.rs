use crate::model::lifecycle;
use crate::model::systems::flora::{self, FloraOutcome, GrowthContext};
use crate::model::world::systems::sorted_handles;
use crate::model::world::World;
use aura_data::{GrowthStage, Metabolism, Plant, Position};

impl World {
    /// Grows every plant once, removes expired ones and lets mature ones seed
    /// their neighbourhood. Seeds planted this tick wait until the next one.
    pub(crate) fn update_flora(&mut self) {
        let handles = sorted_handles::<Plant>(&self.ecs);
        let ctx = GrowthContext {
            config: &self.config.flora,
            season_multiplier: self.env.season_multiplier(),
            weather_multiplier: self.env.weather_multiplier(),
        };

        for handle in handles {
            let Ok((plant, met, pos)) = self
                .ecs
                .query_one_mut::<(&mut Plant, &mut Metabolism, &Position)>(handle)
            else {
                continue;
            };
            let pos = *pos;
            let crowding = flora::crowding_multiplier(&self.occupancy, pos, ctx.config);
            let outcome = flora::grow(plant, met, pos, &mut self.nutrients, crowding, &ctx);
            let plant = *plant;

            match outcome {
                FloraOutcome::Expired => {
                    let despawned = self.ecs.despawn(handle);
                    debug_assert!(despawned.is_ok(), "expired plant {handle:?} was already gone");
                    self.occupancy.clear_flora(pos);
                    self.nutrients.deposit(pos, ctx.config.decay_return);
                    self.stats.record_flora_removal();
                    continue;
                }
                FloraOutcome::Advanced(stage) => {
                    tracing::trace!(x = pos.x, y = pos.y, kind = plant.kind.name(), stage = stage.name(), "Plant advanced");
                }
                FloraOutcome::Unchanged => {}
            }

            let Some(cell) = flora::try_spread(&plant, pos, &self.occupancy, &ctx, &mut self.rng) else {
                continue;
            };
            if self.occupancy.place_flora(cell) {
                let id = self.ids.next_id();
                self.ecs.spawn(lifecycle::create_plant(
                    id,
                    cell,
                    plant.kind,
                    GrowthStage::Seed,
                    ctx.config,
                ));
                self.stats.record_flora_spawn();
            }
        }
    }

    /// Removes a plant that was eaten down to nothing.
    pub(crate) fn remove_plant(&mut self, handle: hecs::Entity, pos: Position) {
        if self.ecs.despawn(handle).is_ok() {
            self.occupancy.clear_flora(pos);
            self.stats.record_flora_removal();
        }
    }
}
