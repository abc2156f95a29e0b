//! Population statistics read by the presentation layer each frame.

use serde::{Deserialize, Serialize};

use super::background::favorability;
use super::moth::Moth;
use super::params::Params;

/// Snapshot of the population after a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Simulation time in seconds.
    pub time: f32,
    /// Moths that have not been caught.
    pub alive: usize,
    /// All moths still present, including fading corpses.
    pub on_screen: usize,
    /// Cumulative number of captures.
    pub eaten: u64,
    /// Mean gray of living moths (0 when none are alive).
    pub mean_gray: f32,
    /// Mean background gray under living moths (0 when none are alive).
    pub mean_favorability: f32,
    /// Mean `|gray - background|` of living moths (0 when none are alive).
    pub mean_mismatch: f32,
    /// Highest generation among living moths.
    pub max_generation: u32,
}

impl PopulationStats {
    /// Computes statistics for the given population.
    pub fn collect(time: f32, moths: &[Moth], eaten: u64, params: &Params) -> Self {
        let mut stats = Self {
            time,
            on_screen: moths.len(),
            eaten,
            ..Self::default()
        };

        let mut gray_sum = 0.0_f64;
        let mut background_sum = 0.0_f64;
        let mut mismatch_sum = 0.0_f64;

        for moth in moths.iter().filter(|m| m.is_alive()) {
            let background = favorability(moth.pos[0], params.arena_size);
            stats.alive += 1;
            gray_sum += f64::from(moth.gray);
            background_sum += f64::from(background);
            mismatch_sum += f64::from((moth.gray - background).abs());
            stats.max_generation = stats.max_generation.max(moth.generation);
        }

        if stats.alive > 0 {
            let n = stats.alive as f64;
            stats.mean_gray = (gray_sum / n) as f32;
            stats.mean_favorability = (background_sum / n) as f32;
            stats.mean_mismatch = (mismatch_sum / n) as f32;
        }

        stats
    }
}
