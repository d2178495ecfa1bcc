use crate::config::WeatherConfig;
use crate::environment::Environment;
use rand::Rng;

/// Storm damage for one creature this tick, if it was struck.
///
/// No randomness is consumed when no storm is active.
pub fn storm_strike<R: Rng>(env: &Environment, config: &WeatherConfig, rng: &mut R) -> Option<f32> {
    let damage = env.storm_damage()?;
    let chance = f64::from(config.storm_hit_chance.clamp(0.0, 1.0));
    rng.gen_bool(chance).then_some(damage)
}
