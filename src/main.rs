use clap::Parser;
use macroquad::prelude::*;
use std::path::PathBuf;

use moth_sim::simulation::clock::FixedStepper;
use moth_sim::simulation::ecosystem::Ecosystem;
use moth_sim::simulation::locatable::Locatable;
use moth_sim::simulation::params::Params;

mod graphics;
mod ui;

const CONFIG_OUT: &str = "moth-config.json";
const MAX_SUBSTEPS: u32 = 8;

/// Interactive moth camouflage simulation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with simulation parameters (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation tick length in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Skip the configuration screen and start immediately
    #[arg(long)]
    start: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Natural selection: moths vs predator".to_owned(),
        window_width: 920,
        window_height: 600,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut params = match args.config.as_deref() {
        Some(path) => match Params::from_json_file(path) {
            Ok(params) => params,
            Err(e) => {
                tracing::error!("failed to load {}: {e}", path.display());
                return;
            }
        },
        None => Params::default(),
    };

    let mut stepper = match FixedStepper::new(args.dt, MAX_SUBSTEPS) {
        Ok(stepper) => stepper,
        Err(e) => {
            tracing::error!("{e}");
            return;
        }
    };

    let mut ui_state = ui::UIState::new(args.seed.unwrap_or_else(::rand::random));
    let mut ecosystem: Option<Ecosystem> = None;
    let mut gradient: Option<Texture2D> = None;
    let mut start_requested = args.start;

    tracing::info!("starting moth simulation viewer");

    loop {
        let Some(eco) = ecosystem.as_mut() else {
            if !start_requested {
                match ui::draw_genesis_screen(&mut params, &mut ui_state) {
                    ui::GenesisAction::Start => start_requested = true,
                    ui::GenesisAction::SaveConfig => {
                        ui_state.status_message = Some(match params.save_to_file(CONFIG_OUT) {
                            Ok(()) => format!("Saved config to {CONFIG_OUT}"),
                            Err(e) => format!("Save failed: {e}"),
                        });
                    }
                    ui::GenesisAction::None => {}
                }
            }

            if start_requested {
                start_requested = false;
                match Ecosystem::new(&params, ui_state.seed) {
                    Ok(new_ecosystem) => {
                        tracing::info!(seed = ui_state.seed, "simulation started");
                        gradient = Some(graphics::gradient_texture(&params));
                        ui_state.clear_history();
                        ui_state.status_message = None;
                        stepper.reset();
                        ecosystem = Some(new_ecosystem);
                    }
                    Err(e) => {
                        tracing::warn!("{e}");
                        ui_state.status_message = Some(e.to_string());
                    }
                }
            }

            next_frame().await;
            continue;
        };

        let quit = is_key_pressed(KeyCode::Escape);
        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }

        if !ui_state.paused {
            stepper.speed = ui_state.simulation_speed;
            match stepper.advance(eco, get_frame_time(), || quit) {
                Ok(outcome) if outcome.dropped_backlog => {
                    tracing::debug!(ticks = outcome.ticks, "simulation running behind");
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("skipping frame: {e}"),
            }
        }
        if quit {
            break;
        }

        ui_state.update_history(eco);

        clear_background(DARKGRAY);
        let viewport = graphics::Viewport::fit(eco.params(), ui_state.stats_panel_width);
        if let Some(texture) = gradient.as_ref() {
            graphics::draw_background(texture, eco.params(), &viewport);
        }
        graphics::draw_moths(eco, &viewport);
        graphics::draw_predator(eco, &viewport);
        graphics::draw_hud(eco, &viewport);

        update_pointer(&mut ui_state, eco, &viewport);

        ui::draw_ui(&mut ui_state, eco);
        ui::process_egui();

        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            ui_state.paused = false;
            ecosystem = None;
        }

        next_frame().await;
    }

    tracing::info!("viewer closed");
}

/// Tracks which moth is under the mouse and selects it on click.
fn update_pointer(state: &mut ui::UIState, ecosystem: &Ecosystem, viewport: &graphics::Viewport) {
    let (mx, my) = mouse_position();
    let wx = (mx - viewport.offset_x) / viewport.scale;
    let wy = (my - viewport.offset_y) / viewport.scale;
    let pick_radius = ecosystem.params().prey_margin() * 1.5;

    state.hovered_moth_id = ecosystem
        .moths()
        .iter()
        .map(|m| (m.id, (m.pos()[0] - wx).hypot(m.pos()[1] - wy)))
        .filter(|&(_, d)| d <= pick_radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id);

    let inside_arena = mx < screen_width() - state.stats_panel_width;
    if is_mouse_button_pressed(MouseButton::Left) && inside_arena {
        state.selected_moth_id = state.hovered_moth_id;
    }
}
