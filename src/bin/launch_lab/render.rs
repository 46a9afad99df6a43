use macroquad::prelude::*;
use projectile_lab::core::sampler::TrajectorySample;
use projectile_lab::core::window::AxisBounds;

use crate::constants::{
    CURVE_COLOR, CURVE_FILL_COLOR, MARKER_COLOR, MARKER_RADIUS, X_GRID_LINES, Y_GRID_LINES,
};

/// Screen rectangle the chart is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn to_screen(&self, sample: TrajectorySample, bounds: AxisBounds) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (sample.distance_m / bounds.max_distance_m) as f32 * plot_w;
        let y = self.bottom - (sample.height_m / bounds.max_height_m) as f32 * plot_h;
        vec2(x, y)
    }
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(area: PlotArea, bounds: AxisBounds, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        let label = format_axis_value(t as f64 * bounds.max_distance_m, bounds.max_distance_m);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        let label = format_axis_value(t as f64 * bounds.max_height_m, bounds.max_height_m);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        area.right - 130.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

/// Draws the full curve with the area beneath it shaded.
pub(crate) fn draw_trajectory(samples: &[TrajectorySample], area: PlotArea, bounds: AxisBounds) {
    if samples.len() < 2 {
        return;
    }
    let points: Vec<Vec2> = samples
        .iter()
        .map(|sample| area.to_screen(*sample, bounds))
        .collect();

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        draw_triangle(a, b, vec2(b.x, area.bottom), CURVE_FILL_COLOR);
        draw_triangle(a, vec2(b.x, area.bottom), vec2(a.x, area.bottom), CURVE_FILL_COLOR);
    }
    for pair in points.windows(2) {
        draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, 3.0, CURVE_COLOR);
    }
}

pub(crate) fn draw_marker(position: TrajectorySample, area: PlotArea, bounds: AxisBounds) {
    let p = area.to_screen(position, bounds);
    draw_circle(p.x, p.y, MARKER_RADIUS, MARKER_COLOR);
    draw_circle_lines(p.x, p.y, MARKER_RADIUS, 2.0, MAROON);
}
