use std::f64::consts::PI;

use tracing::debug;

pub const DEFAULT_GRAVITY_MPS2: f64 = 9.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
}

impl LaunchParameters {
    /// Builds parameters from raw control values. The gravity field is free text, so it
    /// goes through [`resolve_gravity`] and never fails.
    pub fn from_inputs(speed_mps: f64, angle_deg: f64, gravity_text: &str) -> Self {
        Self {
            speed_mps,
            angle_deg,
            gravity_mps2: resolve_gravity(gravity_text),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicsResult {
    pub speed_mps: f64,
    pub angle_rad: f64,
    pub gravity_mps2: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub time_of_flight_s: f64,
    pub max_range_m: f64,
    pub max_height_m: f64,
}

impl KinematicsResult {
    pub fn position_at(&self, time_s: f64) -> (f64, f64) {
        let x = self.vx_mps * time_s;
        let y = (self.vy_mps * time_s) - (0.5 * self.gravity_mps2 * time_s * time_s);
        (x, y)
    }
}

/// Parses the gravity text field, substituting standard gravity for anything that is not a
/// positive finite number.
pub fn resolve_gravity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(g) if g.is_finite() && g > 0.0 => g,
        _ => {
            debug!(input = raw, "unusable gravity input, using {DEFAULT_GRAVITY_MPS2}");
            DEFAULT_GRAVITY_MPS2
        }
    }
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.angle_deg * (PI / 180.0);
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

pub fn evaluate(params: LaunchParameters) -> KinematicsResult {
    let g = params.gravity_mps2;
    let (vx, vy) = velocity_components(params);

    // A launch at or below the horizon never leaves the ground.
    let (time_of_flight_s, max_height_m) = if vy > 0.0 {
        ((2.0 * vy) / g, (vy * vy) / (2.0 * g))
    } else {
        (0.0, 0.0)
    };

    KinematicsResult {
        speed_mps: params.speed_mps,
        angle_rad: params.angle_deg * (PI / 180.0),
        gravity_mps2: g,
        vx_mps: vx,
        vy_mps: vy,
        time_of_flight_s,
        max_range_m: vx * time_of_flight_s,
        max_height_m,
    }
}
