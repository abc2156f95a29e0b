//! Event system for serial simulation state updates.
//!
//! Detection passes only read the population and record what happened; the
//! recorded events are then applied in order, so counters are updated in
//! exactly one place.

use serde::{Deserialize, Serialize};

use super::ecosystem::Ecosystem;

/// Something that happened to the population during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// A new moth joined the population.
    MothSpawned {
        /// ID of the new moth.
        moth_id: usize,
        /// ID of its parent, `None` for a founder.
        parent_id: Option<usize>,
        /// Gray value of the new moth.
        gray: f32,
    },
    /// The predator caught a moth.
    MothCaptured {
        /// ID of the captured moth.
        moth_id: usize,
        /// Gray value of the captured moth.
        gray: f32,
        /// Background gray where it was caught.
        favorability: f32,
        /// Capture probability that was rolled against.
        capture_probability: f32,
    },
    /// A faded moth was removed from the population.
    MothRemoved {
        /// ID of the removed moth.
        moth_id: usize,
    },
}

/// Queue for collecting simulation events before they are applied.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Checks whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SimulationEvent> {
        self.events.drain(..)
    }
}

/// Applies queued capture events to the ecosystem and returns every event
/// that took effect.
///
/// A capture only counts if it flips the moth from alive to dead, which
/// keeps `eaten_count` equal to the number of such transitions.
pub fn apply_events(state: &mut Ecosystem, mut queue: EventQueue) -> Vec<SimulationEvent> {
    let mut applied = Vec::with_capacity(queue.len());

    for event in queue.drain() {
        match event {
            SimulationEvent::MothCaptured { moth_id, .. } => {
                let transitioned = state
                    .moths
                    .iter_mut()
                    .find(|m| m.id == moth_id)
                    .is_some_and(|moth| moth.mark_captured());
                if transitioned {
                    state.eaten_count += 1;
                    applied.push(event);
                }
            }
            SimulationEvent::MothSpawned { .. } | SimulationEvent::MothRemoved { .. } => {
                applied.push(event);
            }
        }
    }

    applied
}
