use macroquad::prelude::*;

use crate::constants::{PANEL_WIDTH, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Projectile Launch Lab",
        18.0,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        "Adjust velocity, angle and gravity, then press Launch",
        left,
        TITLE_Y,
        20,
        DARKGRAY,
        font,
    );

    draw_results_block(state, screen_h, font);
}

fn draw_results_block(state: &AppRuntime, screen_h: f32, font: Option<&Font>) {
    let value_color = Color::from_rgba(54, 123, 245, 255);
    let mut y = (screen_h - 200.0).max(360.0);

    draw_ui_text("Results", 24.0, y, 24, DARKGRAY, font);
    for (label, value) in state.panel.rows() {
        y += 30.0;
        draw_ui_text(label, 24.0, y, 20, DARKGRAY, font);
        let size = measure_text(value, font, 20, 1.0);
        draw_ui_text(
            value,
            18.0 + PANEL_WIDTH - size.width - 6.0,
            y,
            20,
            value_color,
            font,
        );
    }

    y += 36.0;
    let status = if state.is_animating() {
        "Projectile in flight"
    } else {
        "Ready"
    };
    draw_ui_text(status, 24.0, y, 18, GRAY, font);
}
