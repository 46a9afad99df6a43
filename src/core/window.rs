use crate::core::kinematics::KinematicsResult;

pub const AXIS_STEP_M: f64 = 10.0;

/// Rounds a data maximum up to the next multiple of ten. Empty or flat data still gets a
/// window of ten meters.
pub fn axis_bound(raw_max: f64) -> f64 {
    let bound = (raw_max / AXIS_STEP_M).ceil() * AXIS_STEP_M;
    if bound > 0.0 { bound } else { AXIS_STEP_M }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub max_distance_m: f64,
    pub max_height_m: f64,
}

impl AxisBounds {
    pub fn for_result(result: &KinematicsResult) -> Self {
        Self {
            max_distance_m: axis_bound(result.max_range_m),
            max_height_m: axis_bound(result.max_height_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::{LaunchParameters, evaluate};

    #[test]
    fn rounds_up_to_next_ten() {
        assert_eq!(axis_bound(40.812), 50.0);
        assert_eq!(axis_bound(10.203), 20.0);
        assert_eq!(axis_bound(0.01), 10.0);
    }

    #[test]
    fn exact_multiples_are_kept() {
        assert_eq!(axis_bound(30.0), 30.0);
        assert_eq!(axis_bound(100.0), 100.0);
    }

    #[test]
    fn empty_or_invalid_maximum_gets_minimum_window() {
        assert_eq!(axis_bound(0.0), 10.0);
        assert_eq!(axis_bound(-4.0), 10.0);
        assert_eq!(axis_bound(f64::NAN), 10.0);
    }

    #[test]
    fn bounds_follow_kinematics() {
        let bounds = AxisBounds::for_result(&evaluate(LaunchParameters {
            speed_mps: 20.0,
            angle_deg: 45.0,
            gravity_mps2: 9.8,
        }));

        assert_eq!(
            bounds,
            AxisBounds {
                max_distance_m: 50.0,
                max_height_m: 20.0,
            }
        );
    }

    #[test]
    fn flat_launch_uses_minimum_window() {
        let bounds = AxisBounds::for_result(&evaluate(LaunchParameters {
            speed_mps: 10.0,
            angle_deg: 0.0,
            gravity_mps2: 9.8,
        }));

        assert_eq!(bounds.max_distance_m, 10.0);
        assert_eq!(bounds.max_height_m, 10.0);
    }
}
