use crate::model::brain::BrainLogic;
use crate::model::genetics::{self, Genome};
use crate::model::lifecycle;
use crate::model::systems::action::{self, Bounds, Movement};
use crate::model::systems::intel::{self, Observer, Perception, PerceptionContext, Target};
use crate::model::systems::{biological, ecological, environment};
use crate::model::world::systems::sorted_handles;
use crate::model::world::World;
use aura_data::{
    Action, Brain, Creature, DeathCause, EntityId, EntityKind, Identity, Metabolism, Plant, Position,
};
use rand::seq::SliceRandom;

/// Food within this distance can be eaten without moving: the creature's own
/// cell or any of the eight around it.
const REACH: f32 = std::f32::consts::SQRT_2;

/// A creature's state, copied out of the store for the length of its turn.
struct FaunaTurn {
    handle: hecs::Entity,
    identity: Identity,
    pos: Position,
    creature: Creature,
    metabolism: Metabolism,
}

impl World {
    /// Runs sense, decide and act for every creature alive at the start of
    /// the phase, in a freshly shuffled order. Creatures born this tick first
    /// act on the next one; creatures killed earlier in the phase are skipped.
    pub(crate) fn update_fauna(&mut self) {
        let mut handles = sorted_handles::<Creature>(&self.ecs);
        handles.shuffle(&mut self.rng);
        let day_fraction = self.env.clock.day_fraction();

        for handle in handles {
            let Ok(state) = self
                .ecs
                .query_one_mut::<(&Identity, &Position, &Creature, &Metabolism)>(handle)
                .map(|(i, p, c, m)| (*i, *p, *c, *m))
            else {
                continue;
            };
            let (identity, pos, creature, metabolism) = state;
            let turn = FaunaTurn {
                handle,
                identity,
                pos,
                creature,
                metabolism,
            };
            self.fauna_turn(turn, day_fraction);
        }
    }

    fn fauna_turn(&mut self, mut turn: FaunaTurn, day_fraction: f32) {
        biological::age_one_tick(&mut turn.creature, &mut turn.metabolism, &self.config.fauna);

        let perception = {
            let ctx = PerceptionContext {
                ecs: &self.ecs,
                spatial: &self.spatial,
                config: &self.config.fauna,
            };
            intel::perceive(
                &ctx,
                &Observer {
                    handle: turn.handle,
                    id: turn.identity.id,
                    pos: turn.pos,
                    species: turn.creature.species,
                    vision: turn.creature.traits.vision,
                },
            )
        };
        turn.creature.fear = intel::update_fear(
            turn.creature.fear,
            perception.threat.as_ref(),
            turn.creature.traits.vision,
            self.config.fauna.fear_decay,
        );

        let inputs = intel::sensory_inputs(&turn.creature, &turn.metabolism, &perception, day_fraction);
        let decision = match self.ecs.get::<&Brain>(turn.handle) {
            Ok(brain) => brain.decide(inputs, &mut self.rng),
            Err(_) => Action::Rest,
        };

        let bounds = Bounds {
            width: self.width,
            height: self.height,
        };
        let steps = action::max_steps(&turn.creature.traits);
        let movement = match decision {
            Action::Wander => action::wander(turn.pos, bounds, &mut self.rng),
            Action::Rest => Movement::stay(turn.pos),
            Action::Forage => match perception.food.filter(|t| t.distance <= REACH) {
                Some(food) => {
                    self.eat(&mut turn, food);
                    Movement::stay(turn.pos)
                }
                None => action::wander(turn.pos, bounds, &mut self.rng),
            },
            Action::Flee => match perception.threat {
                Some(threat) => action::retreat(turn.pos, threat.pos, steps, bounds),
                None => action::wander(turn.pos, bounds, &mut self.rng),
            },
            Action::Chase => match perception.prey {
                Some(prey) => action::approach(turn.pos, prey.pos, steps, bounds),
                None => action::wander(turn.pos, bounds, &mut self.rng),
            },
            Action::Reproduce => {
                self.reproduce(&mut turn, &perception);
                Movement::stay(turn.pos)
            }
        };

        if movement.to != turn.pos {
            self.occupancy.move_fauna(turn.pos, movement.to);
            turn.pos = movement.to;
        }
        turn.creature.action = decision;
        turn.metabolism.energy -=
            biological::metabolic_cost(&turn.creature.traits, decision, movement.steps, &self.config.fauna);

        let before_storm = turn.metabolism.energy;
        let storm_hit = match environment::storm_strike(&self.env, &self.config.weather, &mut self.rng) {
            Some(damage) => {
                turn.metabolism.energy -= damage;
                before_storm > 0.0 && turn.metabolism.energy <= 0.0
            }
            None => false,
        };

        match biological::check_death(&turn.metabolism, storm_hit, &self.config.fauna) {
            Some(cause) => self.kill(
                turn.handle,
                turn.identity.id,
                &turn.creature,
                &turn.metabolism,
                turn.pos,
                cause,
            ),
            None => {
                if let Ok((pos, creature, met)) = self
                    .ecs
                    .query_one_mut::<(&mut Position, &mut Creature, &mut Metabolism)>(turn.handle)
                {
                    *pos = turn.pos;
                    *creature = turn.creature;
                    *met = turn.metabolism;
                }
            }
        }
    }

    /// Consumes adjacent food: a bite from a plant or a hunt against a creature.
    fn eat(&mut self, turn: &mut FaunaTurn, food: Target) {
        let kind = match self.ecs.get::<&EntityKind>(food.handle) {
            Ok(kind) => *kind,
            Err(_) => return,
        };
        if !ecological::can_eat(self.config.fauna.species(turn.creature.species), kind) {
            return;
        }
        match kind {
            EntityKind::Flora(_) => self.graze(turn, food),
            EntityKind::Fauna(_) => self.hunt(turn, food),
        }
    }

    fn graze(&mut self, turn: &mut FaunaTurn, food: Target) {
        let appetite = self.config.fauna.species(turn.creature.species).energy_from_flora;
        let Ok((taken, exhausted, pos)) = self
            .ecs
            .query_one_mut::<(&Plant, &mut Metabolism, &Position)>(food.handle)
            .map(|(plant, met, pos)| {
                let (taken, exhausted) = ecological::graze(plant, &mut met.energy, appetite);
                (taken, exhausted, *pos)
            })
        else {
            return;
        };

        biological::feed(&mut turn.creature, &mut turn.metabolism, taken);
        if exhausted {
            self.remove_plant(food.handle, pos);
        }
    }

    fn hunt(&mut self, turn: &mut FaunaTurn, food: Target) {
        let Ok((prey_identity, prey, prey_met, prey_pos)) = self
            .ecs
            .query_one_mut::<(&Identity, &Creature, &Metabolism, &Position)>(food.handle)
            .map(|(i, c, m, p)| (*i, *c, *m, *p))
        else {
            return;
        };

        let hunter = self.config.fauna.species(turn.creature.species);
        let gain = hunter.energy_from_prey;
        let chance = ecological::hunt_chance(
            hunter,
            turn.creature.traits.size,
            prey.traits.size,
            &self.config.fauna,
        );

        let caught = ecological::resolve_hunt(chance, &mut self.rng);
        self.metrics
            .increment_counter(if caught { "hunts_succeeded" } else { "hunts_failed" });
        if caught {
            biological::feed(&mut turn.creature, &mut turn.metabolism, gain);
            self.kill(
                food.handle,
                prey_identity.id,
                &prey,
                &prey_met,
                prey_pos,
                DeathCause::Predation,
            );
        } else {
            turn.metabolism.energy -= self.config.fauna.failed_hunt_cost;
        }
    }

    /// Breeds with the nearest mate when both are fertile and a free cell is
    /// available next to the initiator. Anything short of that is a no-op.
    fn reproduce(&mut self, turn: &mut FaunaTurn, perception: &Perception) {
        let Some(mate) = perception
            .mate
            .filter(|m| m.distance <= self.config.fauna.mate_range)
        else {
            return;
        };
        if !genetics::is_fertile(&turn.creature, &turn.metabolism, &self.config.fauna) {
            return;
        }
        let Ok((mate_identity, mate_creature, mate_met)) = self
            .ecs
            .query_one_mut::<(&Identity, &Creature, &Metabolism)>(mate.handle)
            .map(|(i, c, m)| (*i, *c, *m))
        else {
            return;
        };
        if !genetics::is_fertile(&mate_creature, &mate_met, &self.config.fauna) {
            return;
        }

        let free = self.occupancy.neighbors_where(turn.pos, |occ, p| occ.fauna_at(p) == 0);
        let Some(&cell) = free.choose(&mut self.rng) else {
            return;
        };

        let species = turn.creature.species;
        let (offspring, drift) = {
            let (Ok(own_brain), Ok(mate_brain)) = (
                self.ecs.get::<&Brain>(turn.handle),
                self.ecs.get::<&Brain>(mate.handle),
            ) else {
                return;
            };
            let offspring = genetics::breed(
                Genome {
                    traits: &turn.creature.traits,
                    brain: &own_brain,
                },
                Genome {
                    traits: &mate_creature.traits,
                    brain: &mate_brain,
                },
                self.config.fauna.species(species),
                &mut self.rng,
            );
            let drift = offspring.brain.distance(&own_brain);
            (offspring, drift)
        };

        let generation = turn.metabolism.generation.max(mate_met.generation) + 1;
        let id = self.ids.next_id();
        self.ecs.spawn(lifecycle::create_offspring(
            id,
            cell,
            species,
            (turn.identity.id, mate_identity.id),
            generation,
            offspring,
            &self.config.fauna,
        ));
        self.occupancy.add_fauna(cell);
        self.stats.record_birth();

        let cost = self.config.fauna.reproduction_cost;
        let cooldown = self.config.fauna.reproduction_cooldown;
        turn.metabolism.energy -= cost;
        turn.metabolism.offspring_count += 1;
        turn.creature.cooldown = cooldown;
        let spent_mate = self
            .ecs
            .query_one_mut::<(&mut Creature, &mut Metabolism, &Position)>(mate.handle)
            .ok()
            .and_then(|(creature, met, pos)| {
                met.energy -= cost;
                met.offspring_count += 1;
                creature.cooldown = cooldown;
                (met.energy <= 0.0).then_some((*creature, *met, *pos))
            });
        // The mate may already have taken its turn, so it cannot wait for its
        // own death check.
        if let Some((creature, met, pos)) = spent_mate {
            self.kill(mate.handle, mate_identity.id, &creature, &met, pos, DeathCause::Starvation);
        }

        tracing::debug!(
            id = id.0,
            species = species.name(),
            generation,
            parents = ?(turn.identity.id.0, mate_identity.id.0),
            brain_drift = drift,
            "Creature born"
        );
    }

    /// Removes a creature and returns its remains to the soil under it.
    fn kill(
        &mut self,
        handle: hecs::Entity,
        id: EntityId,
        creature: &Creature,
        metabolism: &Metabolism,
        pos: Position,
        cause: DeathCause,
    ) {
        let record =
            biological::decompose(id, creature, metabolism, pos, cause, &mut self.nutrients, &self.config);
        self.stats.record_death(cause);
        tracing::debug!(
            id = id.0,
            species = creature.species.name(),
            cause = cause.name(),
            age = metabolism.age,
            credited = record.credited,
            "Creature died"
        );
        self.recent_deaths.push(record);
        self.occupancy.remove_fauna(pos);
        let despawned = self.ecs.despawn(handle);
        debug_assert!(despawned.is_ok(), "creature {} was killed twice", id.0);
    }
}
