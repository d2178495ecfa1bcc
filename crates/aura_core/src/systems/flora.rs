use crate::config::{FloraConfig, FloraKindConfig};
use crate::nutrients::NutrientGrid;
use crate::occupancy::Occupancy;
use aura_data::{GrowthStage, Metabolism, Plant, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Per-tick growth conditions shared by every plant.
#[derive(Debug, Clone, Copy)]
pub struct GrowthContext<'a> {
    pub config: &'a FloraConfig,
    pub season_multiplier: f32,
    pub weather_multiplier: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloraOutcome {
    Unchanged,
    Advanced(GrowthStage),
    /// Decay finished; the plant should be removed.
    Expired,
}

fn advance_stage(plant: &mut Plant, met: &mut Metabolism, kind: &FloraKindConfig) -> Option<GrowthStage> {
    let ready = match plant.stage {
        GrowthStage::Seed => plant.growth >= kind.sprout_at,
        GrowthStage::Sprout => plant.growth >= kind.mature_at,
        GrowthStage::Mature => plant.growth >= kind.decay_at || met.age > kind.max_age,
        GrowthStage::Decaying => false,
    };
    if !ready {
        return None;
    }
    let next = plant.stage.next()?;
    plant.stage = next;
    match next {
        GrowthStage::Mature => met.energy = kind.energy,
        GrowthStage::Decaying => plant.decay_timer = kind.decay_ticks,
        _ => {}
    }
    Some(next)
}

/// Growth factor from nearby plants: the crowding penalty once more than
/// `crowding_limit` of them stand within `crowding_radius`.
#[must_use]
pub fn crowding_multiplier(occupancy: &Occupancy, pos: Position, config: &FloraConfig) -> f32 {
    if occupancy.flora_within(pos, config.crowding_radius) > config.crowding_limit {
        config.crowding_penalty
    } else {
        1.0
    }
}

/// One tick of a plant's life: ageing, nutrient draw, growth, and at most
/// one stage transition. Decaying plants only count down.
pub fn grow(
    plant: &mut Plant,
    met: &mut Metabolism,
    pos: Position,
    nutrients: &mut NutrientGrid,
    crowding: f32,
    ctx: &GrowthContext<'_>,
) -> FloraOutcome {
    let kind = ctx.config.kind(plant.kind);
    met.age += 1;

    if plant.stage == GrowthStage::Decaying {
        plant.last_growth = 0.0;
        plant.decay_timer = plant.decay_timer.saturating_sub(1);
        if plant.decay_timer == 0 {
            met.energy = 0.0;
            return FloraOutcome::Expired;
        }
        met.energy = kind.energy * plant.decay_timer as f32 / kind.decay_ticks.max(1) as f32;
        return FloraOutcome::Unchanged;
    }

    let availability = nutrients.availability(pos).max(ctx.config.min_availability);
    nutrients.draw(pos, kind.nutrient_draw);

    let delta = ctx.config.growth_rate
        * ctx.config.stage_rate(plant.stage)
        * ctx.season_multiplier
        * availability
        * crowding
        * ctx.weather_multiplier;
    plant.growth += delta;
    plant.last_growth = delta;
    if kind.mature_at > 0.0 {
        met.energy = (met.energy + delta * kind.energy / kind.mature_at).min(kind.energy);
    }

    match advance_stage(plant, met, kind) {
        Some(stage) => FloraOutcome::Advanced(stage),
        None => FloraOutcome::Unchanged,
    }
}

/// Per-tick chance that a mature plant seeds a neighbour.
#[must_use]
pub fn spread_chance(kind: &FloraKindConfig, ctx: &GrowthContext<'_>) -> f64 {
    let p = kind.spread_probability * ctx.season_multiplier * ctx.weather_multiplier;
    f64::from(p.clamp(0.0, 1.0))
}

/// Rolls for spreading and picks a free neighbouring cell. The density cap is
/// checked before any randomness is consumed.
pub fn try_spread<R: Rng>(
    plant: &Plant,
    pos: Position,
    occupancy: &Occupancy,
    ctx: &GrowthContext<'_>,
    rng: &mut R,
) -> Option<Position> {
    if plant.stage != GrowthStage::Mature || occupancy.flora_density() >= ctx.config.max_density {
        return None;
    }
    if !rng.gen_bool(spread_chance(ctx.config.kind(plant.kind), ctx)) {
        return None;
    }
    let free = occupancy.neighbors_where(pos, |occ, p| !occ.has_flora(p));
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use aura_data::FloraKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seed(kind: FloraKind) -> (Plant, Metabolism) {
        (
            Plant {
                kind,
                stage: GrowthStage::Seed,
                growth: 0.0,
                last_growth: 0.0,
                decay_timer: 0,
            },
            Metabolism {
                energy: 0.0,
                max_energy: 10.0,
                age: 0,
                generation: 0,
                offspring_count: 0,
            },
        )
    }

    fn ctx(config: &FloraConfig, weather: f32) -> GrowthContext<'_> {
        GrowthContext {
            config,
            season_multiplier: 1.0,
            weather_multiplier: weather,
        }
    }

    #[test]
    fn test_seed_grows_through_every_stage_in_order() {
        let config = AppConfig::default();
        let mut soil = NutrientGrid::new(4, 4, &config.nutrients);
        let (mut plant, mut met) = seed(FloraKind::Grass);
        let growth = ctx(&config.flora, 1.0);
        let mut seen = vec![plant.stage];

        for _ in 0..10_000 {
            soil.regenerate();
            match grow(&mut plant, &mut met, Position::new(1, 1), &mut soil, 1.0, &growth) {
                FloraOutcome::Advanced(stage) => seen.push(stage),
                FloraOutcome::Expired => break,
                FloraOutcome::Unchanged => {}
            }
            assert!(met.energy <= config.flora.grass.energy + 1e-4);
        }
        assert_eq!(
            seen,
            vec![
                GrowthStage::Seed,
                GrowthStage::Sprout,
                GrowthStage::Mature,
                GrowthStage::Decaying
            ]
        );
        assert_eq!(met.energy, 0.0);
    }

    #[test]
    fn test_weather_scales_growth() {
        let config = AppConfig::default();
        let mut soil = NutrientGrid::new(4, 4, &config.nutrients);
        let (mut calm, mut calm_met) = seed(FloraKind::Tree);
        let (mut dry, mut dry_met) = seed(FloraKind::Tree);

        grow(&mut calm, &mut calm_met, Position::new(0, 0), &mut soil, 1.0, &ctx(&config.flora, 1.0));
        grow(&mut dry, &mut dry_met, Position::new(3, 3), &mut soil, 1.0, &ctx(&config.flora, 0.3));
        assert!((dry.last_growth / calm.last_growth - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_poor_soil_uses_minimum_availability() {
        let mut config = AppConfig::default();
        config.nutrients.initial_level = 0.0;
        let mut soil = NutrientGrid::new(2, 2, &config.nutrients);
        let (mut plant, mut met) = seed(FloraKind::Grass);
        grow(&mut plant, &mut met, Position::new(0, 0), &mut soil, 1.0, &ctx(&config.flora, 1.0));
        let expected = config.flora.growth_rate * config.flora.seed_rate * config.flora.min_availability;
        assert!((plant.last_growth - expected).abs() < 1e-6);
    }

    #[test]
    fn test_old_mature_plant_starts_decaying() {
        let config = AppConfig::default();
        let mut soil = NutrientGrid::new(2, 2, &config.nutrients);
        let (mut plant, mut met) = seed(FloraKind::Bush);
        plant.stage = GrowthStage::Mature;
        plant.growth = config.flora.bush.mature_at;
        met.age = config.flora.bush.max_age;

        let outcome = grow(&mut plant, &mut met, Position::new(0, 0), &mut soil, 1.0, &ctx(&config.flora, 1.0));
        assert_eq!(outcome, FloraOutcome::Advanced(GrowthStage::Decaying));
        assert_eq!(plant.decay_timer, config.flora.bush.decay_ticks);
    }

    #[test]
    fn test_crowded_plants_grow_at_half_rate() {
        let config = AppConfig::default();
        let mut occupancy = Occupancy::new(5, 5);
        let centre = Position::new(2, 2);
        for p in [(1, 1), (2, 1), (3, 1), (1, 2)] {
            occupancy.place_flora(Position::new(p.0, p.1));
        }
        assert_eq!(crowding_multiplier(&occupancy, centre, &config.flora), 1.0);

        occupancy.place_flora(Position::new(3, 2));
        let crowding = crowding_multiplier(&occupancy, centre, &config.flora);
        assert_eq!(crowding, 0.5);

        let mut soil = NutrientGrid::new(5, 5, &config.nutrients);
        let (mut open, mut open_met) = seed(FloraKind::Grass);
        let (mut packed, mut packed_met) = seed(FloraKind::Grass);
        let growth = ctx(&config.flora, 1.0);
        grow(&mut open, &mut open_met, Position::new(0, 4), &mut soil, 1.0, &growth);
        grow(&mut packed, &mut packed_met, centre, &mut soil, crowding, &growth);
        assert!((packed.last_growth / open.last_growth - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_only_mature_plants_spread() {
        let config = AppConfig::default();
        let occupancy = Occupancy::new(5, 5);
        let mut flora = config.flora.clone();
        flora.grass.spread_probability = 1.0;
        let growth = ctx(&flora, 1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let (mut plant, _) = seed(FloraKind::Grass);
        assert_eq!(try_spread(&plant, Position::new(2, 2), &occupancy, &growth, &mut rng), None);

        plant.stage = GrowthStage::Mature;
        let spot = try_spread(&plant, Position::new(2, 2), &occupancy, &growth, &mut rng);
        assert!(spot.is_some_and(|p| p.chebyshev(&Position::new(2, 2)) == 1));
    }

    #[test]
    fn test_spread_fails_without_free_neighbour() {
        let config = AppConfig::default();
        let mut occupancy = Occupancy::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (1, 1) {
                    occupancy.place_flora(Position::new(x, y));
                }
            }
        }
        let mut flora = config.flora.clone();
        flora.grass.spread_probability = 1.0;
        flora.max_density = 1.0;
        let (mut plant, _) = seed(FloraKind::Grass);
        plant.stage = GrowthStage::Mature;
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(
            try_spread(&plant, Position::new(1, 1), &occupancy, &ctx(&flora, 1.0), &mut rng),
            None
        );
    }
}
