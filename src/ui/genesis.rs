use egui_macroquad::egui;
use macroquad::prelude::*;
use moth_sim::simulation::params::{ParentSelection, Params};

use super::ui::UIState;

/// What the player asked for on the configuration screen this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisAction {
    None,
    Start,
    SaveConfig,
}

pub fn draw_genesis_screen(params: &mut Params, state: &mut UIState) -> GenesisAction {
    clear_background(LIGHTGRAY);

    let mut action = GenesisAction::None;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Moths vs Predator - Configuration");
                ui.add_space(10.0);

                ui.collapsing("Arena & Population", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.arena_size, 100.0..=2000.0)
                            .text("Arena Size"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.initial_population, 0..=2000)
                            .text("Initial Moths"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.max_population, 1..=2000)
                            .text("Max Moths"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.spawn_interval, 0.01..=5.0)
                            .text("Spawn Interval (s)"),
                    );
                });

                ui.collapsing("Moths", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.prey_radius, 1.0..=20.0).text("Moth Radius"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.outline_width, 0.0..=6.0)
                            .text("Outline Width"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.wander_speed, 0.0..=200.0)
                            .text("Wander Speed"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.fade_duration, 0.1..=5.0)
                            .text("Fade Duration (s)"),
                    );
                });

                ui.collapsing("Predator", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.predator_radius, 5.0..=150.0)
                            .text("Predator Radius"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.predator_speed, 0.0..=1500.0)
                            .text("Predator Speed"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.predator_turn_rate, 0.0..=10.0)
                            .text("Turn Rate"),
                    );
                });

                ui.collapsing("Selection & Heredity", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.survival_exponent, 1.01..=10.0)
                            .text("Survival Exponent k"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.mutation_std, 0.0..=0.5)
                            .text("Mutation Std"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.spawn_near_radius, 0.0..=300.0)
                            .text("Offspring Radius"),
                    );
                    ui.horizontal(|ui| {
                        ui.label("Parents:");
                        ui.radio_value(
                            &mut params.parent_selection,
                            ParentSelection::AnyPresent,
                            "Any present (incl. fading)",
                        );
                        ui.radio_value(
                            &mut params.parent_selection,
                            ParentSelection::LivingOnly,
                            "Living only",
                        );
                    });
                });

                ui.horizontal(|ui| {
                    ui.label("Seed:");
                    ui.add(egui::DragValue::new(&mut state.seed));
                });

                if let Some(ref msg) = state.status_message {
                    ui.colored_label(egui::Color32::from_rgb(255, 140, 100), msg);
                }

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Start Simulation").clicked() {
                        action = GenesisAction::Start;
                    }
                    if ui.button("💾 Save Config").clicked() {
                        action = GenesisAction::SaveConfig;
                    }
                    ui.label("Configure parameters above, then click to start");
                });
            });
        });
    });

    egui_macroquad::draw();

    action
}
