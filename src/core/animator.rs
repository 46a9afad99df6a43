//! Frame-stepped launch animation.
//!
//! The host owns the frame clock and calls [`LaunchAnimator::step`] once per display refresh
//! with the token returned by the previous call. Starting a new run bumps the run id, so a
//! token held from an older run is rejected without emitting anything.

use tracing::{debug, info};

use crate::core::sampler::TrajectorySample;

pub const TOTAL_FRAMES: u32 = 120;

/// Renderer side of the animation.
pub trait PositionSink {
    /// Replaces the projectile marker for the current frame.
    fn show_position(&mut self, sample: TrajectorySample);
    /// Places the marker at its final resting position once the run completes.
    fn rest_at(&mut self, sample: TrajectorySample);
}

/// Control surface that owns the launch trigger.
pub trait LaunchControl {
    fn set_launch_enabled(&mut self, enabled: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorPhase {
    Idle,
    Running,
}

/// Continuation for the next scheduled step of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken {
    run_id: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Continue(FrameToken),
    Finished,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub current_frame: u32,
    pub total_frames: u32,
    pub samples: Vec<TrajectorySample>,
}

impl AnimationState {
    fn sample_for_current_frame(&self) -> TrajectorySample {
        let progress = self.current_frame as f64 / self.total_frames as f64;
        let last = self.samples.len() - 1;
        let index = ((progress * last as f64).floor() as usize).min(last);
        self.samples[index]
    }
}

pub struct LaunchAnimator {
    total_frames: u32,
    run_id: u64,
    active: Option<AnimationState>,
}

impl Default for LaunchAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchAnimator {
    pub fn new() -> Self {
        Self::with_total_frames(TOTAL_FRAMES)
    }

    pub fn with_total_frames(total_frames: u32) -> Self {
        Self {
            total_frames: total_frames.max(1),
            run_id: 0,
            active: None,
        }
    }

    pub fn phase(&self) -> AnimatorPhase {
        if self.active.is_some() {
            AnimatorPhase::Running
        } else {
            AnimatorPhase::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_frame(&self) -> Option<u32> {
        self.active.as_ref().map(|state| state.current_frame)
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.active.as_ref()
    }

    /// Begins a new run, superseding any run still in flight.
    ///
    /// A trajectory with fewer than two samples has no motion to show: the marker rests on
    /// the single sample (if any), the control is handed back and `None` is returned.
    pub fn start(
        &mut self,
        samples: Vec<TrajectorySample>,
        sink: &mut impl PositionSink,
        control: &mut impl LaunchControl,
    ) -> Option<FrameToken> {
        self.cancel();
        self.run_id += 1;
        control.set_launch_enabled(false);

        if samples.len() < 2 {
            debug!(run = self.run_id, samples = samples.len(), "nothing to animate");
            if let Some(sample) = samples.first().copied() {
                sink.rest_at(sample);
            }
            control.set_launch_enabled(true);
            return None;
        }

        info!(
            run = self.run_id,
            samples = samples.len(),
            frames = self.total_frames,
            "launch started"
        );
        self.active = Some(AnimationState {
            current_frame: 0,
            total_frames: self.total_frames,
            samples,
        });
        Some(FrameToken {
            run_id: self.run_id,
        })
    }

    /// Drops the pending continuation. Tokens handed out earlier become stale.
    pub fn cancel(&mut self) {
        if let Some(state) = self.active.take() {
            info!(
                run = self.run_id,
                frame = state.current_frame,
                "launch cancelled"
            );
            self.run_id += 1;
        }
    }

    pub fn step(
        &mut self,
        token: FrameToken,
        sink: &mut impl PositionSink,
        control: &mut impl LaunchControl,
    ) -> StepResult {
        if token.run_id != self.run_id {
            return StepResult::Cancelled;
        }
        let Some(state) = self.active.as_mut() else {
            return StepResult::Cancelled;
        };

        sink.show_position(state.sample_for_current_frame());
        state.current_frame += 1;
        if state.current_frame <= state.total_frames {
            return StepResult::Continue(token);
        }

        if let Some(last) = state.samples.last().copied() {
            sink.rest_at(last);
        }
        self.active = None;
        control.set_launch_enabled(true);
        info!(run = self.run_id, "launch finished");
        StepResult::Finished
    }
}
