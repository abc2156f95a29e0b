use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{Result, SimError};

/// Which moths may be chosen as parents when an offspring is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParentSelection {
    /// Any moth still in the population, including captured moths that are
    /// still fading out.
    #[default]
    AnyPresent,
    /// Only moths that are still alive.
    LivingOnly,
}

/// Simulation parameters that control arena, moth and predator behavior.
///
/// All values are fixed once an [`Ecosystem`](super::ecosystem::Ecosystem)
/// has been constructed from them. Missing fields in a JSON config fall back
/// to [`Params::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Side length of the square arena (world units).
    pub arena_size: f32,
    /// Number of founder moths created at start.
    pub initial_population: usize,
    /// Population cap checked before each spawn.
    pub max_population: usize,
    /// Simulation seconds between spawn attempts.
    pub spawn_interval: f32,
    /// Moth body radius.
    pub prey_radius: f32,
    /// Width of the outline drawn around a moth; part of its wall margin.
    pub outline_width: f32,
    /// Upper bound of a moth's random-walk speed (units per second).
    pub wander_speed: f32,
    /// Predator catch radius.
    pub predator_radius: f32,
    /// Predator speed (units per second).
    pub predator_speed: f32,
    /// Scale of the predator's Brownian heading noise (radians per sqrt(second)).
    pub predator_turn_rate: f32,
    /// Half-width of the uniform jitter around the arena centre for the
    /// predator's starting position.
    pub predator_start_jitter: f32,
    /// Standard deviation of the Gaussian gray mutation.
    pub mutation_std: f32,
    /// Offspring are placed within this distance of their parent.
    pub spawn_near_radius: f32,
    /// Seconds for a captured moth to fade from 1 to 0.
    pub fade_duration: f32,
    /// Exponent `k` of the survival curve `similarity^(1/k)`.
    pub survival_exponent: f32,
    /// Moths whose fade drops to or below this value are removed.
    pub cull_threshold: f32,
    /// Parent pool used by the reproduction step.
    pub parent_selection: ParentSelection,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            arena_size: 600.0,
            initial_population: 300,
            max_population: 300,
            spawn_interval: 0.4,
            prey_radius: 6.0,
            outline_width: 2.0,
            wander_speed: 50.0,
            predator_radius: 40.0,
            predator_speed: 500.0,
            predator_turn_rate: 1.6,
            predator_start_jitter: 40.0,
            mutation_std: 0.06,
            spawn_near_radius: 64.0,
            fade_duration: 1.0,
            survival_exponent: 3.5,
            cull_threshold: 0.001,
            parent_selection: ParentSelection::AnyPresent,
        }
    }
}

impl Params {
    /// Distance a moth centre keeps from every wall.
    pub fn prey_margin(&self) -> f32 {
        self.prey_radius + self.outline_width
    }

    /// Checks every parameter and reports the first violation.
    pub fn validate(&self) -> Result<()> {
        if !(self.arena_size.is_finite() && self.arena_size > 1.0) {
            return Err(SimError::config(
                "arena_size",
                format!("must be finite and greater than 1, got {}", self.arena_size),
            ));
        }

        let non_negative = [
            ("prey_radius", self.prey_radius),
            ("outline_width", self.outline_width),
            ("wander_speed", self.wander_speed),
            ("predator_radius", self.predator_radius),
            ("predator_speed", self.predator_speed),
            ("predator_turn_rate", self.predator_turn_rate),
            ("predator_start_jitter", self.predator_start_jitter),
            ("mutation_std", self.mutation_std),
            ("spawn_near_radius", self.spawn_near_radius),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::config(
                    field,
                    format!("must be finite and non-negative, got {value}"),
                ));
            }
        }

        let positive = [
            ("spawn_interval", self.spawn_interval),
            ("fade_duration", self.fade_duration),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::config(
                    field,
                    format!("must be finite and positive, got {value}"),
                ));
            }
        }

        let half = self.arena_size / 2.0;
        if self.prey_margin() >= half {
            return Err(SimError::config(
                "prey_radius",
                format!(
                    "prey radius plus outline ({}) must be smaller than half the arena ({half})",
                    self.prey_margin()
                ),
            ));
        }
        if self.predator_radius >= half {
            return Err(SimError::config(
                "predator_radius",
                format!("must be smaller than half the arena ({half})"),
            ));
        }

        if !(self.survival_exponent.is_finite() && self.survival_exponent > 1.0) {
            return Err(SimError::config(
                "survival_exponent",
                format!("must be finite and greater than 1, got {}", self.survival_exponent),
            ));
        }

        if !(0.0..1.0).contains(&self.cull_threshold) {
            return Err(SimError::config(
                "cull_threshold",
                format!("must lie in [0, 1), got {}", self.cull_threshold),
            ));
        }

        if self.initial_population > self.max_population {
            return Err(SimError::config(
                "initial_population",
                format!(
                    "{} exceeds max_population {}",
                    self.initial_population, self.max_population
                ),
            ));
        }

        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Writes the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
