use crate::core::kinematics::KinematicsResult;

pub const DEFAULT_STEP_COUNT: usize = 100;
pub const DEFAULT_HEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub distance_m: f64,
    pub height_m: f64,
}

impl TrajectorySample {
    pub const ORIGIN: Self = Self {
        distance_m: 0.0,
        height_m: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    pub step_count: usize,
    /// How far below ground a computed height may fall and still count as ground contact,
    /// as a fraction of the peak height (peaks under one meter are scaled as one meter).
    pub height_tolerance: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            height_tolerance: DEFAULT_HEIGHT_TOLERANCE,
        }
    }
}

impl SamplerConfig {
    /// Depth below ground, in meters, still accepted for this trajectory.
    pub fn ground_tolerance_m(&self, result: &KinematicsResult) -> f64 {
        self.height_tolerance * result.max_height_m.max(1.0)
    }
}

pub fn sample_trajectory(result: &KinematicsResult, config: SamplerConfig) -> Vec<TrajectorySample> {
    let time_of_flight_s = result.time_of_flight_s;
    if !time_of_flight_s.is_finite() || time_of_flight_s <= 0.0 {
        return vec![TrajectorySample::ORIGIN];
    }

    let step_count = config.step_count.max(1);
    let tolerance_m = config.ground_tolerance_m(result);
    (0..=step_count)
        .filter_map(|i| {
            let t = (i as f64 / step_count as f64) * time_of_flight_s;
            let (x, y) = result.position_at(t);
            (y >= -tolerance_m).then(|| TrajectorySample {
                distance_m: x,
                height_m: y.max(0.0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::{LaunchParameters, evaluate};

    fn launch(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> KinematicsResult {
        evaluate(LaunchParameters {
            speed_mps,
            angle_deg,
            gravity_mps2,
        })
    }

    #[test]
    fn produces_step_count_plus_one_points() {
        let samples = sample_trajectory(&launch(20.0, 45.0, 9.8), SamplerConfig::default());

        assert_eq!(samples.len(), DEFAULT_STEP_COUNT + 1);
        assert_eq!(samples[0], TrajectorySample::ORIGIN);
    }

    #[test]
    fn distance_never_decreases_and_heights_stay_above_ground() {
        let samples = sample_trajectory(&launch(47.0, 38.0, 9.8), SamplerConfig::default());

        for pair in samples.windows(2) {
            assert!(pair[1].distance_m >= pair[0].distance_m);
        }
        assert!(samples.iter().all(|s| s.height_m >= 0.0));
    }

    #[test]
    fn last_sample_touches_ground() {
        let config = SamplerConfig::default();
        let speeds = [0.5, 3.0, 17.3, 73.444, 250.0, 999.0];
        let gravities = [0.001, 0.37, 1.62, 9.8, 24.79, 1000.0];
        let angles = (1..=89).map(f64::from).chain([0.4, 89.37]);

        for angle in angles {
            for speed in speeds {
                for g in gravities {
                    let result = launch(speed, angle, g);
                    let samples = sample_trajectory(&result, config);
                    let last = samples.last().copied().unwrap_or(TrajectorySample::ORIGIN);

                    assert_eq!(
                        samples.len(),
                        DEFAULT_STEP_COUNT + 1,
                        "v={speed} angle={angle} g={g}"
                    );
                    assert!(
                        last.height_m <= config.ground_tolerance_m(&result),
                        "v={speed} angle={angle} g={g} last height {}",
                        last.height_m
                    );
                    assert!(
                        (last.distance_m - result.max_range_m).abs() <= 1e-9 * result.max_range_m
                    );
                }
            }
        }
    }

    #[test]
    fn low_gravity_near_vertical_launch_keeps_landing_point() {
        let result = launch(73.444, 89.37, 0.001);
        let samples = sample_trajectory(&result, SamplerConfig::default());
        let last = samples.last().copied().unwrap_or(TrajectorySample::ORIGIN);

        assert_eq!(samples.len(), DEFAULT_STEP_COUNT + 1);
        assert!(last.height_m < 1e-3);
        assert!(result.max_height_m > 1e5);
    }

    #[test]
    fn sampling_is_repeatable() {
        let result = launch(20.0, 45.0, 9.8);

        assert_eq!(
            sample_trajectory(&result, SamplerConfig::default()),
            sample_trajectory(&result, SamplerConfig::default())
        );
    }

    #[test]
    fn flat_launch_is_a_single_point() {
        let samples = sample_trajectory(&launch(10.0, 0.0, 9.8), SamplerConfig::default());

        assert_eq!(samples, vec![TrajectorySample::ORIGIN]);
    }

    #[test]
    fn vertical_launch_stays_on_the_axis() {
        let samples = sample_trajectory(&launch(30.0, 90.0, 9.8), SamplerConfig::default());

        assert_eq!(samples.len(), DEFAULT_STEP_COUNT + 1);
        assert!(samples.iter().all(|s| s.distance_m.abs() < 1e-9));
    }

    #[test]
    fn drops_points_below_tolerance() {
        // Overshoot the landing time so the final point ends up underground.
        let mut result = launch(20.0, 45.0, 9.8);
        result.time_of_flight_s *= 1.05;
        let samples = sample_trajectory(&result, SamplerConfig::default());

        assert!(samples.len() < DEFAULT_STEP_COUNT + 1);
        assert!(samples.iter().all(|s| s.height_m >= 0.0));
    }

    #[test]
    fn tolerance_absorbs_small_overshoot_and_clamps() {
        let mut result = launch(20.0, 45.0, 9.8);
        result.time_of_flight_s *= 1.0 + 1e-7;
        let strict = sample_trajectory(
            &result,
            SamplerConfig {
                height_tolerance: 0.0,
                ..SamplerConfig::default()
            },
        );
        let loose = sample_trajectory(
            &result,
            SamplerConfig {
                height_tolerance: 1e-3,
                ..SamplerConfig::default()
            },
        );

        assert_eq!(strict.len(), DEFAULT_STEP_COUNT);
        assert_eq!(loose.len(), DEFAULT_STEP_COUNT + 1);
        assert_eq!(loose[DEFAULT_STEP_COUNT].height_m, 0.0);
    }

    #[test]
    fn zero_step_count_still_samples_both_ends() {
        let samples = sample_trajectory(
            &launch(20.0, 45.0, 9.8),
            SamplerConfig {
                step_count: 0,
                ..SamplerConfig::default()
            },
        );

        assert_eq!(samples.len(), 2);
    }
}
