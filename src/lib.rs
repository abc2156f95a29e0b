//! # Moth Sim - Camouflage Selection Simulation
//!
//! A predator roams a square arena hunting moths whose survival depends on
//! how well their gray color matches a left-to-right black-to-white
//! background. Moths reproduce with mutated offspring, so the population's
//! colors drift toward whatever background they happen to live on.
//!
//! ## Features
//!
//! - Random-walk moths with a single heritable gray trait
//! - Predator with Brownian turning and wall reflection
//! - Concave camouflage survival curve, one roll per collision
//! - Periodic reproduction with Gaussian mutation and a population cap
//! - Fade-out of captured moths before removal
//! - Seeded, reproducible runs; fixed-timestep driver
//! - Real-time visualization with egui/macroquad (binary `moth-sim`)
//!
//! ## Core Modules
//!
//! - [`simulation::ecosystem`] - Population ownership and tick sequencing
//! - [`simulation::moth`] - Moth state and motion
//! - [`simulation::predator`] - Predator motion
//! - [`simulation::survival`] - Capture probability
//! - [`simulation::reproduction`] - Offspring and mutation
//! - [`simulation::background`] - Background gradient

/// Core simulation logic and data structures.
pub mod simulation {
    /// Background gradient sampled by the survival model.
    pub mod background;
    /// Fixed-timestep driver for frame-based callers.
    pub mod clock;
    /// Main ecosystem simulation and tick sequencing.
    pub mod ecosystem;
    /// Error types for configuration and tick input.
    pub mod error;
    /// Recent-event buffer for display.
    pub mod event_log;
    /// Events produced by a tick.
    pub mod events;
    /// Geometric utility functions for distances, bounds and angles.
    pub mod geometric_utils;
    /// Trait for entities confined to the arena.
    ///
    /// The [`locatable::Locatable`] trait is implemented by both
    /// [`moth::Moth`] and [`predator::Predator`].
    pub mod locatable;
    /// Moth state, motion and fade.
    pub mod moth;
    /// Simulation parameters.
    pub mod params;
    /// The predator.
    pub mod predator;
    /// Offspring placement and mutation.
    pub mod reproduction;
    /// KD-tree index for collision queries.
    pub mod spatial;
    /// Population statistics.
    pub mod stats;
    /// Camouflage survival model.
    pub mod survival;
}
