//! The roaming predator: constant speed, Brownian turning, wall reflection.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::geometric_utils::{gaussian, normalize_angle, random_angle};
use super::locatable::Locatable;
use super::params::Params;

/// The single predator hunting moths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predator {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading in radians, kept in `[0, 2π)`.
    pub heading: f32,
    /// Speed in units per second.
    pub speed: f32,
    /// Catch radius.
    pub radius: f32,
}

impl Predator {
    /// Creates a predator at an explicit position and heading.
    pub fn new(x: f32, y: f32, heading: f32, params: &Params) -> Self {
        let mut predator = Self {
            pos: Array1::from_vec(vec![x, y]),
            heading: normalize_angle(heading),
            speed: params.predator_speed,
            radius: params.predator_radius,
        };
        predator.clamp_to_arena(params);
        predator
    }

    /// Creates a predator near the arena centre with a random heading.
    pub fn new_random<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Self {
        let center = params.arena_size / 2.0;
        let jitter = params.predator_start_jitter;
        let x = center + rng.random_range(-jitter..=jitter);
        let y = center + rng.random_range(-jitter..=jitter);
        let heading = random_angle(rng);
        Self::new(x, y, heading, params)
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> (f32, f32) {
        (self.heading.cos(), self.heading.sin())
    }

    /// Advances the predator by `dt` seconds.
    ///
    /// The heading takes a Gaussian step with deviation
    /// `turn_rate * sqrt(dt)`, so the angular variance grows linearly with
    /// elapsed time independent of the tick rate. After moving, each axis is
    /// checked separately: a wall contact clamps the coordinate and mirrors
    /// the heading (`π - θ` on the left/right walls, `-θ` on the top/bottom
    /// walls).
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, params: &Params, rng: &mut R) {
        self.heading += gaussian(rng, params.predator_turn_rate * dt.sqrt());

        let (dx, dy) = self.direction();
        self.pos[0] += dx * self.speed * dt;
        self.pos[1] += dy * self.speed * dt;

        let (lo, hi) = self.bounds(params);
        if bounce(&mut self.pos[0], dx, lo, hi) {
            self.heading = PI - self.heading;
        }
        if bounce(&mut self.pos[1], dy, lo, hi) {
            self.heading = -self.heading;
        }
        self.heading = normalize_angle(self.heading);
    }
}

/// Clamps `coord` to `[lo, hi]` and reports whether the heading component
/// `velocity` has to be mirrored: the coordinate crossed a wall, or sits on
/// one while still pointing into it.
fn bounce(coord: &mut f32, velocity: f32, lo: f32, hi: f32) -> bool {
    if *coord < lo || (*coord <= lo && velocity < 0.0) {
        *coord = lo;
        true
    } else if *coord > hi || (*coord >= hi && velocity > 0.0) {
        *coord = hi;
        true
    } else {
        false
    }
}

impl Locatable for Predator {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn margin(&self, _params: &Params) -> f32 {
        self.radius
    }
}
