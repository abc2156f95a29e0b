//! Event logging system for displaying recent simulation events.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::events::SimulationEvent;

/// A logged event for display in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Simulation time when the event occurred
    pub time: f32,
    /// Human-readable description of the event
    pub description: String,
    /// Color hint for the event (for UI display)
    pub color: EventColor,
}

/// Color categories for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventColor {
    /// Offspring and founders (green)
    Reproduction,
    /// Predator captures (red)
    Capture,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, time: f32, description: String, color: EventColor) {
        self.events.push_front(LoggedEvent {
            time,
            description,
            color,
        });

        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Formats and logs a simulation event. Removals are not logged; they
    /// would drown out everything else.
    pub fn record(&mut self, time: f32, event: &SimulationEvent) {
        match *event {
            SimulationEvent::MothSpawned {
                moth_id,
                parent_id: Some(parent),
                gray,
            } => self.log(
                time,
                format!("moth {moth_id} hatched from {parent} (gray {gray:.2})"),
                EventColor::Reproduction,
            ),
            SimulationEvent::MothSpawned {
                moth_id,
                parent_id: None,
                gray,
            } => self.log(
                time,
                format!("founder moth {moth_id} appeared (gray {gray:.2})"),
                EventColor::Reproduction,
            ),
            SimulationEvent::MothCaptured {
                moth_id,
                gray,
                favorability,
                capture_probability,
            } => self.log(
                time,
                format!(
                    "moth {moth_id} eaten (gray {gray:.2} on {favorability:.2}, p={capture_probability:.2})"
                ),
                EventColor::Capture,
            ),
            SimulationEvent::MothRemoved { .. } => {}
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }
}
