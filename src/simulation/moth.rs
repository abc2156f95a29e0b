//! Moth state, random-walk motion and post-capture fade.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometric_utils::random_angle;
use super::locatable::Locatable;
use super::params::Params;

/// A single moth. Its gray value is the only heritable trait.
///
/// Captured moths stay in the population with `alive == false` until their
/// fade reaches zero, so they can still be drawn (and, depending on
/// [`ParentSelection`](super::params::ParentSelection), chosen as parents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moth {
    /// Unique identifier, assigned in creation order.
    pub id: usize,
    /// Founders are generation 0; offspring are one more than their parent.
    pub generation: u32,
    /// Parent id, `None` for founders.
    pub parent_id: Option<usize>,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Camouflage color in `[0, 1]` (0 = black, 1 = white).
    pub gray: f32,
    /// False once the predator has caught this moth.
    pub alive: bool,
    /// Visibility in `[0, 1]`; decays after capture.
    pub fade: f32,
}

impl Moth {
    /// Creates a moth, clamping the position into the arena and the gray
    /// value into `[0, 1]`.
    pub fn new(
        id: usize,
        generation: u32,
        parent_id: Option<usize>,
        x: f32,
        y: f32,
        gray: f32,
        params: &Params,
    ) -> Self {
        let mut moth = Self {
            id,
            generation,
            parent_id,
            pos: Array1::from_vec(vec![x, y]),
            gray: gray.clamp(0.0, 1.0),
            alive: true,
            fade: 1.0,
        };
        moth.clamp_to_arena(params);
        moth
    }

    /// Creates a founder moth at a uniform random position with a uniform
    /// random gray value.
    pub fn new_random<R: Rng + ?Sized>(id: usize, params: &Params, rng: &mut R) -> Self {
        let margin = params.prey_margin();
        let hi = params.arena_size - margin;
        let x = rng.random_range(margin..=hi);
        let y = rng.random_range(margin..=hi);
        let gray = rng.random::<f32>();
        Self::new(id, 0, None, x, y, gray, params)
    }

    /// Checks if the moth is alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Advances the moth by `dt` seconds.
    ///
    /// Living moths take one random-walk step: a uniform heading and a speed
    /// drawn from `[0.2, 1.0] * wander_speed`, clamped to the arena. Captured
    /// moths stay where they were caught and lose `dt / fade_duration` of
    /// their fade.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, params: &Params, rng: &mut R) {
        if self.alive {
            let angle = random_angle(rng);
            let speed = rng.random_range(0.2..=1.0) * params.wander_speed;
            self.pos[0] += angle.cos() * speed * dt;
            self.pos[1] += angle.sin() * speed * dt;
            self.clamp_to_arena(params);
        } else {
            self.fade = (self.fade - dt / params.fade_duration).max(0.0);
        }
    }

    /// Marks the moth as eaten.
    ///
    /// Returns `true` only on the alive-to-dead transition; repeated calls
    /// change nothing.
    pub fn mark_captured(&mut self) -> bool {
        let was_alive = self.alive;
        self.alive = false;
        was_alive
    }

    /// Checks whether the moth has faded out and should be removed.
    pub fn is_faded(&self, params: &Params) -> bool {
        self.fade <= params.cull_threshold
    }
}

impl Locatable for Moth {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn margin(&self, params: &Params) -> f32 {
        params.prey_margin()
    }
}
