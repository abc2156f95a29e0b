use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use moth_sim::simulation::ecosystem::Ecosystem;
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    ecosystem: &Ecosystem,
) {
    let params = ecosystem.params();
    let stats = ecosystem.stats();

    let panel = egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            ui.label("Simulation Speed");
            ui.add(egui::Slider::new(&mut state.simulation_speed, 0.1..=20.0).text("x"));

            ui.separator();

            ui.label(format!("Time: {:.1}s", stats.time));
            ui.label(format!("Seed: {}", state.seed));
            ui.label(format!(
                "Moths alive: {} (on screen {}/{})",
                stats.alive, stats.on_screen, params.max_population
            ));
            ui.label(format!("Eaten: {}", stats.eaten));
            ui.label(format!("Max generation: {}", stats.max_generation));
            ui.label(format!(
                "Mean gray {:.3} on background {:.3}",
                stats.mean_gray, stats.mean_favorability
            ));

            ui.separator();

            ui.heading("Population");
            draw_population_plot(ui, &state.alive_history, &state.on_screen_history);

            ui.heading("Camouflage");
            draw_camouflage_plot(
                ui,
                &state.mean_gray_history,
                &state.mean_background_history,
            );

            ui.heading("Mean mismatch");
            draw_time_series_plot(
                ui,
                "mismatch_plot",
                &state.mismatch_history,
                "Time",
                "|gray - bg|",
            );

            ui.heading("Eaten");
            draw_time_series_plot(ui, "eaten_plot", &state.eaten_history, "Time", "Eaten");
        });

    state.stats_panel_width = panel.response.rect.width() * egui_ctx.pixels_per_point();
}

fn draw_time_series_plot(
    ui: &mut egui::Ui,
    id: &str,
    data: &VecDeque<(f64, f64)>,
    x_label: &str,
    y_label: &str,
) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
    let line = Line::new(points);

    Plot::new(id)
        .height(120.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| {
            format!("{}: {:.1}\n{}: {:.2}", x_label, value.x, y_label, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn draw_population_plot(
    ui: &mut egui::Ui,
    alive_data: &VecDeque<(f64, f64)>,
    on_screen_data: &VecDeque<(f64, f64)>,
) {
    if alive_data.is_empty() && on_screen_data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTime: {:.1}s\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            if !alive_data.is_empty() {
                let points: PlotPoints = alive_data.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(
                    Line::new(points)
                        .color(egui::Color32::from_rgb(100, 150, 255))
                        .name("Alive"),
                );
            }

            if !on_screen_data.is_empty() {
                let points: PlotPoints = on_screen_data.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(
                    Line::new(points)
                        .color(egui::Color32::from_rgb(150, 150, 150))
                        .name("On screen"),
                );
            }
        });
}

fn draw_camouflage_plot(
    ui: &mut egui::Ui,
    gray_data: &VecDeque<(f64, f64)>,
    background_data: &VecDeque<(f64, f64)>,
) {
    if gray_data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("camouflage_plot")
        .height(150.0)
        .show_axes([true, true])
        .include_y(0.0)
        .include_y(1.0)
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTime: {:.1}s\nGray: {:.3}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let points: PlotPoints = gray_data.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(240, 240, 240))
                    .name("Mean moth gray"),
            );

            let points: PlotPoints = background_data.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(255, 200, 100))
                    .name("Mean background"),
            );
        });
}
