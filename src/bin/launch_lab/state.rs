use projectile_lab::core::animator::{
    FrameToken, LaunchAnimator, LaunchControl, PositionSink, StepResult,
};
use projectile_lab::core::kinematics::{KinematicsResult, LaunchParameters, evaluate};
use projectile_lab::core::report::ResultsPanel;
use projectile_lab::core::sampler::{SamplerConfig, TrajectorySample, sample_trajectory};
use projectile_lab::core::window::AxisBounds;
use tracing::debug;

use crate::constants::{DEFAULT_ANGLE_DEG, DEFAULT_GRAVITY_TEXT, DEFAULT_SPEED_MPS};

/// Projectile dot drawn on top of the chart.
#[derive(Default)]
pub(crate) struct ProjectileMarker {
    pub(crate) position: Option<TrajectorySample>,
}

impl PositionSink for ProjectileMarker {
    fn show_position(&mut self, sample: TrajectorySample) {
        self.position = Some(sample);
    }

    fn rest_at(&mut self, sample: TrajectorySample) {
        self.position = Some(sample);
    }
}

pub(crate) struct LaunchButton {
    pub(crate) enabled: bool,
}

impl LaunchControl for LaunchButton {
    fn set_launch_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[derive(Clone, PartialEq)]
pub(crate) struct InputSnapshot {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) gravity_text: String,
}

impl InputSnapshot {
    fn params(&self) -> LaunchParameters {
        LaunchParameters::from_inputs(
            self.speed_mps as f64,
            self.angle_deg as f64,
            &self.gravity_text,
        )
    }
}

pub(crate) struct AppRuntime {
    pub(crate) inputs: InputSnapshot,
    last_inputs: InputSnapshot,
    pub(crate) result: KinematicsResult,
    pub(crate) panel: ResultsPanel,
    pub(crate) samples: Vec<TrajectorySample>,
    pub(crate) bounds: AxisBounds,
    pub(crate) marker: ProjectileMarker,
    pub(crate) launch_button: LaunchButton,
    animator: LaunchAnimator,
    pending_frame: Option<FrameToken>,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let inputs = InputSnapshot {
            speed_mps: DEFAULT_SPEED_MPS,
            angle_deg: DEFAULT_ANGLE_DEG,
            gravity_text: DEFAULT_GRAVITY_TEXT.to_string(),
        };
        let result = evaluate(inputs.params());
        Self {
            last_inputs: inputs.clone(),
            inputs,
            result,
            panel: ResultsPanel::from_result(&result),
            samples: sample_trajectory(&result, SamplerConfig::default()),
            bounds: AxisBounds::for_result(&result),
            marker: ProjectileMarker::default(),
            launch_button: LaunchButton { enabled: true },
            animator: LaunchAnimator::new(),
            pending_frame: None,
        }
    }

    /// Rebuilds the curve when any control changed since the last frame. The chart is
    /// redrawn from scratch, so an idle marker is cleared with it.
    pub(crate) fn refresh_if_inputs_changed(&mut self) -> bool {
        if self.inputs == self.last_inputs {
            return false;
        }
        self.last_inputs = self.inputs.clone();
        self.recompute();
        if !self.animator.is_running() {
            self.marker.position = None;
        }
        true
    }

    fn recompute(&mut self) {
        let params = self.inputs.params();
        debug!(?params, "recomputing trajectory");
        self.result = evaluate(params);
        self.panel = ResultsPanel::from_result(&self.result);
        self.samples = sample_trajectory(&self.result, SamplerConfig::default());
        self.bounds = AxisBounds::for_result(&self.result);
    }

    pub(crate) fn launch(&mut self) {
        self.recompute();
        self.pending_frame = self.animator.start(
            self.samples.clone(),
            &mut self.marker,
            &mut self.launch_button,
        );
    }

    /// Runs one animation step for this display frame.
    pub(crate) fn advance_animation(&mut self) {
        let Some(token) = self.pending_frame.take() else {
            return;
        };
        if let StepResult::Continue(next) =
            self.animator
                .step(token, &mut self.marker, &mut self.launch_button)
        {
            self.pending_frame = Some(next);
        }
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animator.is_running()
    }
}
