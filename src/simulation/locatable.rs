//! Trait for entities that have a position inside the arena.
//!
//! Moths and the predator both keep their centre a fixed margin away from
//! every wall; this trait provides the shared accessors and the clamp.

use ndarray::Array1;

use super::geometric_utils;
use super::params::Params;

/// Trait for entities with a position confined to the arena.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Distance the entity's centre keeps from every wall.
    fn margin(&self, params: &Params) -> f32;

    /// Lowest and highest allowed coordinate on either axis.
    fn bounds(&self, params: &Params) -> (f32, f32) {
        let margin = self.margin(params);
        (margin, params.arena_size - margin)
    }

    /// Checks that the centre lies within [`Locatable::bounds`] on both axes.
    fn in_bounds(&self, params: &Params) -> bool {
        let (lo, hi) = self.bounds(params);
        self.pos().iter().all(|&c| (lo..=hi).contains(&c))
    }

    /// Clamps the centre into [`Locatable::bounds`].
    fn clamp_to_arena(&mut self, params: &Params) {
        let (lo, hi) = self.bounds(params);
        geometric_utils::clamp_mut(self.pos_mut(), lo, hi);
    }
}
