use macroquad::prelude::*;
use tracing::{debug, warn};

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{
    PlotArea, draw_axis_tick_labels, draw_grid, draw_marker, draw_trajectory,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Launch Lab".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        // The step scheduled by the previous frame runs before any new launch, so a
        // relaunch never shares a frame with the run it replaces.
        state.advance_animation();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        if state.refresh_if_inputs_changed() {
            debug!(
                range_m = state.result.max_range_m,
                height_m = state.result.max_height_m,
                "inputs changed"
            );
        }
        if actions.launch && state.launch_button.enabled {
            state.launch();
        }

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(area, Color::from_rgba(227, 231, 236, 255));
        draw_axis_tick_labels(area, state.bounds, ui_font.as_ref());
        draw_trajectory(&state.samples, area, state.bounds);
        if let Some(position) = state.marker.position {
            draw_marker(position, area, state.bounds);
        }
        draw_hud(&state, area.left, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
