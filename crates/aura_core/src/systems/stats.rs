use aura_data::{
    DeathCause, FaunaSpecies, FloraKind, PopulationHistory, SpeciesCounts, StatsSnapshot,
    TraitAverages, Traits,
};
use std::collections::VecDeque;

/// Shannon diversity `-Σ p ln p` over non-empty species.
///
/// Zero with fewer than two species present; `ln(k)` when `k` species are
/// equally represented.
#[must_use]
pub fn shannon_index(counts: &[usize]) -> f64 {
    let present: Vec<f64> = counts.iter().filter(|&&c| c > 0).map(|&c| c as f64).collect();
    if present.len() <= 1 {
        return 0.0;
    }
    let total: f64 = present.iter().sum();
    present
        .iter()
        .map(|&c| {
            let p = c / total;
            -p * p.ln()
        })
        .sum()
}

/// Fixed-capacity history buffer that drops its oldest sample.
#[derive(Debug, Clone)]
struct Ring<T> {
    cap: usize,
    items: VecDeque<T>,
}

impl<T: Copy> Ring<T> {
    fn new(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            items: VecDeque::with_capacity(cap.max(1)),
        }
    }

    fn push(&mut self, value: T) {
        if self.items.len() == self.cap {
            self.items.pop_front();
        }
        self.items.push_back(value);
    }

    fn to_vec(&self) -> Vec<T> {
        self.items.iter().copied().collect()
    }
}

/// Environment readings stamped onto each snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickContext {
    pub tick: u64,
    pub season: aura_data::Season,
    pub time_of_day: aura_data::TimeOfDay,
    pub weather: Option<aura_data::WeatherKind>,
    pub growth_multiplier: f32,
    pub avg_nutrients: f32,
}

/// Per-tick accumulator for the live population.
#[derive(Debug, Default)]
pub struct Census {
    counts: SpeciesCounts,
    trait_sum: [f64; 4],
    energy_sum: f64,
    max_generation: u32,
}

impl Census {
    pub fn add_fauna(&mut self, species: FaunaSpecies, traits: &Traits, energy: f32, generation: u32) {
        self.counts.add_fauna(species);
        self.trait_sum[0] += f64::from(traits.speed);
        self.trait_sum[1] += f64::from(traits.vision);
        self.trait_sum[2] += f64::from(traits.size);
        self.trait_sum[3] += f64::from(traits.metabolism);
        self.energy_sum += f64::from(energy);
        self.max_generation = self.max_generation.max(generation);
    }

    pub fn add_flora(&mut self, kind: FloraKind) {
        self.counts.add_flora(kind);
    }

    fn averages(&self) -> (TraitAverages, f32) {
        let n = self.counts.fauna_total();
        if n == 0 {
            return (TraitAverages::default(), 0.0);
        }
        let n = n as f64;
        let avg = |s: f64| (s / n) as f32;
        (
            TraitAverages {
                speed: avg(self.trait_sum[0]),
                vision: avg(self.trait_sum[1]),
                size: avg(self.trait_sum[2]),
                metabolism: avg(self.trait_sum[3]),
            },
            avg(self.energy_sum),
        )
    }
}

/// Cumulative counters plus bounded history.
///
/// Birth and death totals are bumped by the world as events happen and are
/// never recomputed from the population.
#[derive(Debug, Clone)]
pub struct StatsTracker {
    births: u64,
    deaths: u64,
    deaths_by_cause: aura_data::DeathTally,
    flora_spawned: u64,
    flora_removed: u64,
    peak_population: usize,
    max_generation: u32,
    /// Totals at the previous ingest, for per-tick deltas.
    births_seen: u64,
    deaths_seen: u64,
    herbivores: Ring<usize>,
    predators: Ring<usize>,
    omnivores: Ring<usize>,
    flora: Ring<usize>,
    avg_energy: Ring<f32>,
    avg_speed: Ring<f32>,
    avg_vision: Ring<f32>,
    avg_size: Ring<f32>,
    tick_births: Ring<u64>,
    tick_deaths: Ring<u64>,
}

impl StatsTracker {
    #[must_use]
    pub fn new(history_len: usize) -> Self {
        Self {
            births: 0,
            deaths: 0,
            deaths_by_cause: aura_data::DeathTally::default(),
            flora_spawned: 0,
            flora_removed: 0,
            peak_population: 0,
            max_generation: 0,
            births_seen: 0,
            deaths_seen: 0,
            herbivores: Ring::new(history_len),
            predators: Ring::new(history_len),
            omnivores: Ring::new(history_len),
            flora: Ring::new(history_len),
            avg_energy: Ring::new(history_len),
            avg_speed: Ring::new(history_len),
            avg_vision: Ring::new(history_len),
            avg_size: Ring::new(history_len),
            tick_births: Ring::new(history_len),
            tick_deaths: Ring::new(history_len),
        }
    }

    pub fn record_birth(&mut self) {
        self.births += 1;
    }

    pub fn record_death(&mut self, cause: DeathCause) {
        self.deaths += 1;
        self.deaths_by_cause.record(cause);
    }

    pub fn record_flora_spawn(&mut self) {
        self.flora_spawned += 1;
    }

    pub fn record_flora_removal(&mut self) {
        self.flora_removed += 1;
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    /// Folds one tick's census into the running state and publishes a snapshot.
    pub fn ingest(&mut self, census: &Census, ctx: TickContext) -> StatsSnapshot {
        let counts = census.counts;
        let (traits, avg_energy) = census.averages();

        self.peak_population = self.peak_population.max(counts.fauna_total());
        self.max_generation = self.max_generation.max(census.max_generation);
        self.herbivores.push(counts.herbivores);
        self.predators.push(counts.predators);
        self.omnivores.push(counts.omnivores);
        self.flora.push(counts.flora_total());
        self.avg_energy.push(avg_energy);
        self.avg_speed.push(traits.speed);
        self.avg_vision.push(traits.vision);
        self.avg_size.push(traits.size);
        self.tick_births.push(self.births - self.births_seen);
        self.tick_deaths.push(self.deaths - self.deaths_seen);
        self.births_seen = self.births;
        self.deaths_seen = self.deaths;

        let per_species: Vec<usize> = FaunaSpecies::ALL.iter().map(|&s| counts.fauna(s)).collect();

        StatsSnapshot {
            tick: ctx.tick,
            season: ctx.season,
            time_of_day: ctx.time_of_day,
            weather: ctx.weather,
            growth_multiplier: ctx.growth_multiplier,
            counts,
            traits,
            avg_energy,
            biodiversity: shannon_index(&per_species),
            births: self.births,
            deaths: self.deaths,
            deaths_by_cause: self.deaths_by_cause,
            flora_spawned: self.flora_spawned,
            flora_removed: self.flora_removed,
            peak_population: self.peak_population,
            max_generation: self.max_generation,
            avg_nutrients: ctx.avg_nutrients,
            history: PopulationHistory {
                herbivores: self.herbivores.to_vec(),
                predators: self.predators.to_vec(),
                omnivores: self.omnivores.to_vec(),
                flora: self.flora.to_vec(),
                avg_energy: self.avg_energy.to_vec(),
                avg_speed: self.avg_speed.to_vec(),
                avg_vision: self.avg_vision.to_vec(),
                avg_size: self.avg_size.to_vec(),
                births: self.tick_births.to_vec(),
                deaths: self.tick_deaths.to_vec(),
            },
        }
    }
}
