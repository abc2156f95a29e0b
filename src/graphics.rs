use macroquad::prelude::*;
use ndarray::Array1;

use moth_sim::simulation::background::favorability;
use moth_sim::simulation::ecosystem::Ecosystem;
use moth_sim::simulation::params::Params;

const PREDATOR_EDGE: Color = Color::new(1.0, 0.0, 1.0, 1.0);
const GRADIENT_COLUMNS: f32 = 1024.0;

/// Square screen region the arena is drawn into.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Viewport {
    /// Fits the arena into the screen area left of the stats panel.
    pub fn fit(params: &Params, panel_width: f32) -> Self {
        let available_w = (screen_width() - panel_width).max(1.0);
        let available_h = screen_height();
        let side = available_w.min(available_h);
        Self {
            offset_x: (available_w - side) / 2.0,
            offset_y: (available_h - side) / 2.0,
            scale: side / params.arena_size,
        }
    }

    pub fn side(&self, params: &Params) -> f32 {
        params.arena_size * self.scale
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, viewport: &Viewport) -> Self::Output;
}

impl ToScreen for Array1<f32> {
    type Output = Vec2;
    fn to_screen(&self, viewport: &Viewport) -> Vec2 {
        vec2(
            viewport.offset_x + self[0] * viewport.scale,
            viewport.offset_y + self[1] * viewport.scale,
        )
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, viewport: &Viewport) -> f32 {
        self * viewport.scale
    }
}

/// One-pixel-high texture of the background gradient, stretched when drawn.
pub fn gradient_texture(params: &Params) -> Texture2D {
    let columns = params.arena_size.clamp(2.0, GRADIENT_COLUMNS) as u16;
    let mut image = Image::gen_image_color(columns, 1, BLACK);
    for col in 0..columns {
        let x = f32::from(col) / f32::from(columns - 1) * (params.arena_size - 1.0);
        let v = favorability(x, params.arena_size);
        image.set_pixel(u32::from(col), 0, Color::new(v, v, v, 1.0));
    }
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Linear);
    texture
}

pub fn draw_background(texture: &Texture2D, params: &Params, viewport: &Viewport) {
    let side = viewport.side(params);
    draw_texture_ex(
        texture,
        viewport.offset_x,
        viewport.offset_y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(side, side)),
            ..Default::default()
        },
    );
}

pub fn draw_moths(ecosystem: &Ecosystem, viewport: &Viewport) {
    let params = ecosystem.params();
    let radius = params.prey_radius.to_screen(viewport);
    let outline = params.outline_width.to_screen(viewport);

    for moth in ecosystem.moths().iter().filter(|m| m.fade > 0.0) {
        let center = moth.pos.to_screen(viewport);

        // outline contrasts with the moth itself, not with the background
        let outline_color = if moth.gray > 0.5 {
            Color::new(0.0, 0.0, 0.0, moth.fade)
        } else {
            Color::new(1.0, 1.0, 1.0, moth.fade)
        };

        draw_circle_lines(
            center.x,
            center.y,
            radius + outline / 2.0,
            outline,
            outline_color,
        );
        draw_circle(
            center.x,
            center.y,
            radius,
            Color::new(moth.gray, moth.gray, moth.gray, moth.fade),
        );
    }
}

pub fn draw_predator(ecosystem: &Ecosystem, viewport: &Viewport) {
    let predator = ecosystem.predator();
    let center = predator.pos.to_screen(viewport);
    draw_circle_lines(
        center.x,
        center.y,
        predator.radius.to_screen(viewport),
        2.0,
        PREDATOR_EDGE,
    );
}

/// Two-line translucent banner across the top of the arena.
pub fn draw_hud(ecosystem: &Ecosystem, viewport: &Viewport) {
    let params = ecosystem.params();
    let stats = ecosystem.stats();

    draw_rectangle(
        viewport.offset_x,
        viewport.offset_y,
        viewport.side(params),
        42.0,
        Color::from_rgba(0, 0, 0, 160),
    );
    draw_text(
        &format!(
            "Spawn interval: {:.2}s  |  Predator speed: {:.1}/s",
            params.spawn_interval, params.predator_speed
        ),
        viewport.offset_x + 6.0,
        viewport.offset_y + 16.0,
        20.0,
        WHITE,
    );
    draw_text(
        &format!(
            "Moths alive: {}  |  On-screen: {}  |  Eaten: {}",
            stats.alive, stats.on_screen, stats.eaten
        ),
        viewport.offset_x + 6.0,
        viewport.offset_y + 34.0,
        20.0,
        WHITE,
    );
}
