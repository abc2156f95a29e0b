//! Main ecosystem simulation: population ownership and tick sequencing.
//!
//! The ecosystem owns every moth, the predator, the cumulative counters and
//! the random source. Each call to [`Ecosystem::step`] runs, in order:
//! - the spawn gate (one offspring per elapsed `spawn_interval`, if below cap)
//! - the predator update
//! - the moth updates, in parallel with rayon
//! - collision and predation against a k-d tree of moth positions
//! - removal of fully faded moths
//! - statistics

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::error::{Result, SimError};
use super::event_log::EventLog;
use super::events::{self, EventQueue, SimulationEvent};
use super::geometric_utils::point_distance;
use super::moth::Moth;
use super::params::Params;
use super::predator::Predator;
use super::reproduction;
use super::spatial::SpatialIndex;
use super::stats::PopulationStats;
use super::survival;

/// Everything that happened during one [`Ecosystem::step`].
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    /// Events in the order they took effect.
    pub events: Vec<SimulationEvent>,
    /// Statistics after the step.
    pub stats: PopulationStats,
}

impl StepReport {
    /// Number of captures during the step.
    pub fn captures(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::MothCaptured { .. }))
            .count()
    }
}

/// The main ecosystem containing all simulation state.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// All moths present, living or fading.
    pub moths: Vec<Moth>,
    /// The single predator.
    pub predator: Predator,
    /// Cumulative number of alive-to-dead transitions.
    pub eaten_count: u64,
    /// Total simulation time elapsed.
    pub time: f32,
    /// Recent events for display.
    pub event_log: EventLog,
    params: Params,
    spawn_timer: f32,
    next_id: usize,
    stats: PopulationStats,
    rng: StdRng,
}

impl Ecosystem {
    /// Creates a new ecosystem with founder moths and a predator near the
    /// centre, using a generator seeded with `seed`.
    ///
    /// Fails if `params` does not validate.
    pub fn new(params: &Params, seed: u64) -> Result<Self> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    /// Creates a new ecosystem drawing all randomness from `rng`.
    pub fn with_rng(params: &Params, mut rng: StdRng) -> Result<Self> {
        params.validate()?;

        let moths: Vec<Moth> = (0..params.initial_population)
            .map(|id| Moth::new_random(id, params, &mut rng))
            .collect();
        let predator = Predator::new_random(params, &mut rng);
        let stats = PopulationStats::collect(0.0, &moths, 0, params);

        tracing::info!(
            moths = moths.len(),
            max_population = params.max_population,
            arena = params.arena_size,
            "ecosystem created"
        );

        Ok(Self {
            next_id: moths.len(),
            moths,
            predator,
            eaten_count: 0,
            time: 0.0,
            event_log: EventLog::default(),
            params: params.clone(),
            spawn_timer: 0.0,
            stats,
            rng,
        })
    }

    /// Parameters this ecosystem was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// All moths present, living or fading.
    pub fn moths(&self) -> &[Moth] {
        &self.moths
    }

    /// The predator.
    pub fn predator(&self) -> &Predator {
        &self.predator
    }

    /// Statistics as of the last completed step.
    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// A negative, NaN or infinite `dt` is rejected with
    /// [`SimError::InvalidTimestep`] before any state is touched.
    pub fn step(&mut self, dt: f32) -> Result<StepReport> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidTimestep(dt));
        }

        let mut queue = EventQueue::new();

        self.time += dt;
        self.spawn(dt, &mut queue);

        self.predator.advance(dt, &self.params, &mut self.rng);
        self.advance_moths(dt);

        self.detect_captures(&mut queue)?;
        let mut applied = events::apply_events(self, queue);
        applied.extend(self.cull());

        for event in &applied {
            self.event_log.record(self.time, event);
        }

        self.stats =
            PopulationStats::collect(self.time, &self.moths, self.eaten_count, &self.params);

        Ok(StepReport {
            events: applied,
            stats: self.stats,
        })
    }

    /// Runs up to `ticks` steps of `dt`, checking `stop` before each one.
    ///
    /// Returns the number of steps actually executed.
    pub fn run(&mut self, ticks: u64, dt: f32, mut stop: impl FnMut() -> bool) -> Result<u64> {
        let mut executed = 0;
        while executed < ticks {
            if stop() {
                tracing::debug!(executed, "stop requested");
                break;
            }
            self.step(dt)?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Spawns one offspring once `spawn_interval` of simulation time has
    /// accumulated and the population is below its cap.
    fn spawn(&mut self, dt: f32, queue: &mut EventQueue) {
        self.spawn_timer += dt;
        if self.spawn_timer < self.params.spawn_interval
            || self.moths.len() >= self.params.max_population
        {
            return;
        }

        let moth =
            reproduction::spawn_offspring(&self.moths, &self.params, self.next_id, &mut self.rng);
        self.next_id += 1;
        self.spawn_timer = 0.0;

        tracing::debug!(
            moth = moth.id,
            parent = ?moth.parent_id,
            gray = moth.gray,
            "moth spawned"
        );

        queue.push(SimulationEvent::MothSpawned {
            moth_id: moth.id,
            parent_id: moth.parent_id,
            gray: moth.gray,
        });
        self.moths.push(moth);
    }

    /// Moves every moth. Each moth gets its own generator seeded from the
    /// master generator in collection order, so the parallel pass is
    /// reproducible for a given seed.
    fn advance_moths(&mut self, dt: f32) {
        let seeds: Vec<u64> = (0..self.moths.len()).map(|_| self.rng.random()).collect();
        let params = &self.params;

        self.moths
            .par_iter_mut()
            .zip(seeds.into_par_iter())
            .for_each(|(moth, seed)| {
                let mut rng = StdRng::seed_from_u64(seed);
                moth.advance(dt, params, &mut rng);
            });
    }

    /// Rolls the survival model once for every living moth touching the
    /// predator and queues the captures.
    fn detect_captures(&mut self, queue: &mut EventQueue) -> Result<()> {
        let index = SpatialIndex::build(&self.moths)
            .map_err(|e| SimError::SpatialIndex(format!("{e:?}")))?;

        let reach = self.predator.radius + self.params.prey_radius;
        // pad the tree query so contacts exactly at `reach` are never dropped;
        // the exact test below decides
        let candidates = index.query_moths(&self.predator.pos, reach * 1.001 + 1e-3);

        for (_, idx) in candidates {
            let moth = &self.moths[idx];
            if !moth.is_alive() || point_distance(&moth.pos, &self.predator.pos) > reach {
                continue;
            }

            let assessment = survival::assess(moth, &self.params);
            let roll: f32 = self.rng.random();
            if roll < assessment.capture_probability {
                tracing::debug!(
                    moth = moth.id,
                    gray = moth.gray,
                    favorability = assessment.favorability,
                    probability = assessment.capture_probability,
                    "moth captured"
                );
                queue.push(SimulationEvent::MothCaptured {
                    moth_id: moth.id,
                    gray: moth.gray,
                    favorability: assessment.favorability,
                    capture_probability: assessment.capture_probability,
                });
            }
        }

        Ok(())
    }

    /// Removes moths whose fade has run out.
    fn cull(&mut self) -> Vec<SimulationEvent> {
        let params = &self.params;
        let mut removed = Vec::new();
        self.moths.retain(|moth| {
            let keep = !moth.is_faded(params);
            if !keep {
                removed.push(SimulationEvent::MothRemoved { moth_id: moth.id });
            }
            keep
        });
        removed
    }
}
