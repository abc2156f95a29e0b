use egui_macroquad::egui;
use moth_sim::simulation::moth::Moth;
use moth_sim::simulation::params::Params;
use moth_sim::simulation::survival;

pub(super) fn draw_moth_detail_panel(
    egui_ctx: &egui::Context,
    moth: &Moth,
    params: &Params,
    is_selected: bool,
) {
    let title = if is_selected {
        format!("Moth #{} [SELECTED]", moth.id)
    } else {
        format!("Moth #{} (hover)", moth.id)
    };

    let assessment = survival::assess(moth, params);

    egui::Window::new(title)
        .default_pos([20.0, 60.0])
        .resizable(false)
        .show(egui_ctx, |ui| {
            if is_selected {
                ui.label("Click elsewhere to deselect");
                ui.separator();
            }
            ui.label(if moth.alive {
                "Status: alive".to_owned()
            } else {
                format!("Status: eaten (fade {:.2})", moth.fade)
            });
            ui.label(format!("Generation: {}", moth.generation));
            match moth.parent_id {
                Some(parent) => ui.label(format!("Parent: #{parent}")),
                None => ui.label("Parent: founder"),
            };
            ui.label(format!("Position: ({:.1}, {:.1})", moth.pos[0], moth.pos[1]));

            ui.separator();
            ui.heading("Camouflage");
            draw_gray_bar(ui, "Moth", moth.gray);
            draw_gray_bar(ui, "Background", assessment.favorability);
            ui.label(format!("Similarity: {:.3}", assessment.similarity));
            ui.label(format!(
                "Capture chance on contact: {:.1}%",
                assessment.capture_probability * 100.0
            ));
        });
}

/// A swatch in the given gray plus its numeric value.
fn draw_gray_bar(ui: &mut egui::Ui, label: &str, value: f32) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 14.0), egui::Sense::hover());
        let v = (value.clamp(0.0, 1.0) * 255.0) as u8;
        ui.painter()
            .rect_filled(rect, 2.0, egui::Color32::from_rgb(v, v, v));
        ui.label(format!("{label}: {value:.3}"));
    });
}
