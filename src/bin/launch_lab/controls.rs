use std::ops::Range;

use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use projectile_lab::core::report::{angle_caption, speed_caption};

use crate::constants::{ANGLE_RANGE_DEG, PANEL_WIDTH, SPEED_RANGE_MPS};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
    }
}

/// Sliders move in whole units so the caption always shows the value being evaluated.
pub(crate) fn snap_to_whole(value: f32, range: Range<f32>) -> f32 {
    value.round().clamp(range.start, range.end)
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let launch_enabled = state.launch_button.enabled;

    widgets::Window::new(hash!(), vec2(18.0, 90.0), vec2(PANEL_WIDTH, 230.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.label(
                None,
                &format!(
                    "Initial velocity: {}",
                    speed_caption(state.inputs.speed_mps as f64)
                ),
            );
            ui.slider(
                hash!(),
                "Velocity",
                SPEED_RANGE_MPS,
                &mut state.inputs.speed_mps,
            );
            ui.label(
                None,
                &format!(
                    "Launch angle: {}",
                    angle_caption(state.inputs.angle_deg as f64)
                ),
            );
            ui.slider(hash!(), "Angle", ANGLE_RANGE_DEG, &mut state.inputs.angle_deg);
            ui.input_text(hash!(), "Gravity (m/s^2)", &mut state.inputs.gravity_text);
            ui.separator();
            let label = if launch_enabled {
                "Launch (Space)"
            } else {
                "Launching..."
            };
            if ui.button(None, label) && launch_enabled {
                actions.launch = true;
            }
        });

    state.inputs.speed_mps = snap_to_whole(state.inputs.speed_mps, SPEED_RANGE_MPS);
    state.inputs.angle_deg = snap_to_whole(state.inputs.angle_deg, ANGLE_RANGE_DEG);

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_values_snap_to_captioned_number() {
        assert_eq!(snap_to_whole(44.6, ANGLE_RANGE_DEG), 45.0);
        assert_eq!(snap_to_whole(44.4, ANGLE_RANGE_DEG), 44.0);
        assert_eq!(snap_to_whole(19.5, SPEED_RANGE_MPS), 20.0);
    }

    #[test]
    fn snapped_values_stay_in_range() {
        assert_eq!(snap_to_whole(-3.2, ANGLE_RANGE_DEG), 0.0);
        assert_eq!(snap_to_whole(90.4, ANGLE_RANGE_DEG), 90.0);
        assert_eq!(snap_to_whole(0.2, SPEED_RANGE_MPS), 1.0);
        assert_eq!(snap_to_whole(140.0, SPEED_RANGE_MPS), 100.0);
    }

    #[test]
    fn caption_matches_evaluated_angle() {
        let angle = snap_to_whole(44.6, ANGLE_RANGE_DEG);
        assert_eq!(angle_caption(angle as f64), "45°");
        assert_eq!(angle as f64, 45.0);
    }
}
