use egui_macroquad::egui;
use moth_sim::simulation::ecosystem::Ecosystem;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub hovered_moth_id: Option<usize>,
    pub selected_moth_id: Option<usize>,
    pub stats_panel_width: f32,
    pub alive_history: VecDeque<(f64, f64)>,
    pub on_screen_history: VecDeque<(f64, f64)>,
    pub eaten_history: VecDeque<(f64, f64)>,
    pub mean_gray_history: VecDeque<(f64, f64)>,
    pub mean_background_history: VecDeque<(f64, f64)>,
    pub mismatch_history: VecDeque<(f64, f64)>,
    last_update_time: f32,
    update_interval: f32,
    pub reset_requested: bool,
    pub paused: bool,
    pub status_message: Option<String>,
    pub simulation_speed: f32,
    pub seed: u64,
}

impl UIState {
    pub fn new(seed: u64) -> Self {
        Self {
            hovered_moth_id: None,
            selected_moth_id: None,
            stats_panel_width: 300.0,
            alive_history: VecDeque::new(),
            on_screen_history: VecDeque::new(),
            eaten_history: VecDeque::new(),
            mean_gray_history: VecDeque::new(),
            mean_background_history: VecDeque::new(),
            mismatch_history: VecDeque::new(),
            last_update_time: 0.0,
            update_interval: 0.5, // Update every 0.5 simulated seconds
            reset_requested: false,
            paused: false,
            status_message: None,
            simulation_speed: 1.0,
            seed,
        }
    }

    /// Forgets all plotted history, e.g. after a reset.
    pub fn clear_history(&mut self) {
        self.alive_history.clear();
        self.on_screen_history.clear();
        self.eaten_history.clear();
        self.mean_gray_history.clear();
        self.mean_background_history.clear();
        self.mismatch_history.clear();
        self.last_update_time = 0.0;
        self.hovered_moth_id = None;
        self.selected_moth_id = None;
    }

    pub fn update_history(&mut self, ecosystem: &Ecosystem) {
        if ecosystem.time - self.last_update_time < self.update_interval {
            return;
        }
        self.last_update_time = ecosystem.time;

        let stats = ecosystem.stats();
        let t = f64::from(stats.time);

        push_bounded(&mut self.alive_history, (t, stats.alive as f64));
        push_bounded(&mut self.on_screen_history, (t, stats.on_screen as f64));
        push_bounded(&mut self.eaten_history, (t, stats.eaten as f64));

        if stats.alive > 0 {
            push_bounded(&mut self.mean_gray_history, (t, f64::from(stats.mean_gray)));
            push_bounded(
                &mut self.mean_background_history,
                (t, f64::from(stats.mean_favorability)),
            );
            push_bounded(&mut self.mismatch_history, (t, f64::from(stats.mean_mismatch)));
        }
    }
}

fn push_bounded(history: &mut VecDeque<(f64, f64)>, point: (f64, f64)) {
    history.push_back(point);
    if history.len() > MAX_HISTORY_POINTS {
        history.pop_front();
    }
}

pub fn draw_ui(state: &mut UIState, ecosystem: &Ecosystem) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(200, 200, 200);
        visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        visuals.widgets.active.fg_stroke.color = egui::Color32::WHITE;
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, ecosystem);
        super::events::draw_events_panel(egui_ctx, ecosystem);

        // Detail panel - show selected moth, or hovered if nothing selected
        let display_id = state.selected_moth_id.or(state.hovered_moth_id);
        if let Some(moth_id) = display_id {
            if let Some(moth) = ecosystem.moths().iter().find(|m| m.id == moth_id) {
                super::moths::draw_moth_detail_panel(
                    egui_ctx,
                    moth,
                    ecosystem.params(),
                    state.selected_moth_id.is_some(),
                );
            } else if state.selected_moth_id == Some(moth_id) {
                // Selected moth faded out, clear selection
                state.selected_moth_id = None;
            }
        }
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
