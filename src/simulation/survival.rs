//! Camouflage survival model.
//!
//! A moth touched by the predator is caught with probability
//! `1 - similarity^(1/k)`, where similarity is `1 - |gray - background|`.
//! The root flattens the curve near a perfect match: good camouflage is
//! strongly protective while mediocre camouflage still carries real risk.

use serde::{Deserialize, Serialize};

use super::background::favorability;
use super::moth::Moth;
use super::params::Params;

/// Closeness of a moth's gray to the background, in `[0, 1]`.
pub fn similarity(gray: f32, background: f32) -> f32 {
    (1.0 - (gray - background).abs()).clamp(0.0, 1.0)
}

/// Concave reshaping `similarity^(1/exponent)`.
pub fn scale_similarity(similarity: f32, exponent: f32) -> f32 {
    f64::from(similarity).powf(1.0 / f64::from(exponent)) as f32
}

/// Probability that a colliding moth is caught.
///
/// Zero exactly when `gray == background`, one when they are opposite, and
/// strictly increasing in `|gray - background|` in between. Evaluated in f64
/// so mismatches below f32 resolution around 1.0 still yield a nonzero risk.
pub fn capture_probability(gray: f32, background: f32, exponent: f32) -> f32 {
    let mismatch = f64::from((gray - background).abs()).min(1.0);
    let scaled = (1.0 - mismatch).powf(1.0 / f64::from(exponent));
    (1.0 - scaled).clamp(0.0, 1.0) as f32
}

/// Everything the survival model computed for one moth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Background gray under the moth.
    pub favorability: f32,
    /// `1 - |gray - favorability|`.
    pub similarity: f32,
    /// Chance the moth is caught on this collision.
    pub capture_probability: f32,
}

/// Evaluates the survival model at the moth's current position.
pub fn assess(moth: &Moth, params: &Params) -> Assessment {
    let favorability = favorability(moth.pos[0], params.arena_size);
    Assessment {
        favorability,
        similarity: similarity(moth.gray, favorability),
        capture_probability: capture_probability(
            moth.gray,
            favorability,
            params.survival_exponent,
        ),
    }
}
