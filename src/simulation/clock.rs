//! Fixed-timestep driver that decouples simulation ticks from the frame rate.

use super::ecosystem::Ecosystem;
use super::error::{Result, SimError};
use super::events::SimulationEvent;

/// What a single [`FixedStepper::advance`] call did.
#[derive(Debug, Clone, Default)]
pub struct FrameOutcome {
    /// Number of simulation ticks executed this frame.
    pub ticks: u32,
    /// True if the stop signal ended the frame early.
    pub stopped: bool,
    /// True if backlog beyond `max_substeps` was discarded.
    pub dropped_backlog: bool,
    /// Events from all ticks of this frame, in order.
    pub events: Vec<SimulationEvent>,
}

/// Accumulates frame time and feeds it to an [`Ecosystem`] in whole ticks of
/// `fixed_dt`.
#[derive(Debug, Clone)]
pub struct FixedStepper {
    fixed_dt: f32,
    max_substeps: u32,
    accumulator: f32,
    /// Multiplier applied to incoming frame time.
    pub speed: f32,
}

impl FixedStepper {
    /// Creates a stepper running ticks of `fixed_dt` seconds, at most
    /// `max_substeps` per frame.
    pub fn new(fixed_dt: f32, max_substeps: u32) -> Result<Self> {
        if !(fixed_dt.is_finite() && fixed_dt > 0.0) {
            return Err(SimError::config(
                "fixed_dt",
                format!("must be finite and positive, got {fixed_dt}"),
            ));
        }
        if max_substeps == 0 {
            return Err(SimError::config("max_substeps", "must be at least 1"));
        }
        Ok(Self {
            fixed_dt,
            max_substeps,
            accumulator: 0.0,
            speed: 1.0,
        })
    }

    /// Length of one simulation tick.
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Simulation time waiting to be consumed.
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Adds `frame_dt * speed` to the accumulator and runs as many whole
    /// ticks as it covers, up to `max_substeps`.
    ///
    /// `stop` is checked before every tick; once it returns true no further
    /// tick starts. Backlog left over after `max_substeps` ticks is dropped
    /// down to less than one tick, so a stalled frame cannot snowball.
    pub fn advance(
        &mut self,
        ecosystem: &mut Ecosystem,
        frame_dt: f32,
        mut stop: impl FnMut() -> bool,
    ) -> Result<FrameOutcome> {
        let scaled = frame_dt * self.speed;
        if !(scaled.is_finite() && scaled >= 0.0) {
            return Err(SimError::InvalidTimestep(scaled));
        }

        self.accumulator += scaled;
        let mut outcome = FrameOutcome::default();

        while self.accumulator >= self.fixed_dt {
            if outcome.ticks == self.max_substeps {
                self.accumulator = self.accumulator.rem_euclid(self.fixed_dt);
                outcome.dropped_backlog = true;
                tracing::debug!(max_substeps = self.max_substeps, "dropping tick backlog");
                break;
            }
            if stop() {
                outcome.stopped = true;
                break;
            }
            let report = ecosystem.step(self.fixed_dt)?;
            self.accumulator -= self.fixed_dt;
            outcome.ticks += 1;
            outcome.events.extend(report.events);
        }

        Ok(outcome)
    }

    /// Discards any pending simulation time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
