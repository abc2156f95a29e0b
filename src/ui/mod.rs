// UI module - handles all user interface rendering

mod events;
mod genesis;
mod moths;
mod stats;
mod ui;

// Re-export the public interface
pub use genesis::{GenesisAction, draw_genesis_screen};
pub use ui::{UIState, draw_ui, process_egui};
