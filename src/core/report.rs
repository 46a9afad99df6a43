use crate::core::kinematics::KinematicsResult;

/// Display strings for the results panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsPanel {
    pub range: String,
    pub max_height: String,
    pub flight_time: String,
    pub vx: String,
    pub vy: String,
}

impl ResultsPanel {
    pub fn from_result(result: &KinematicsResult) -> Self {
        Self {
            range: format!("{:.2} m", result.max_range_m),
            max_height: format!("{:.2} m", result.max_height_m),
            flight_time: format!("{:.2} s", result.time_of_flight_s),
            vx: format!("{:.2} m/s", result.vx_mps),
            vy: format!("{:.2} m/s", result.vy_mps),
        }
    }

    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Max range", self.range.as_str()),
            ("Max height", self.max_height.as_str()),
            ("Time of flight", self.flight_time.as_str()),
            ("Horizontal velocity", self.vx.as_str()),
            ("Vertical velocity", self.vy.as_str()),
        ]
    }
}

pub fn speed_caption(speed_mps: f64) -> String {
    format!("{speed_mps:.0} m/s")
}

pub fn angle_caption(angle_deg: f64) -> String {
    format!("{angle_deg:.0}°")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::{LaunchParameters, evaluate};

    #[test]
    fn formats_two_decimals_with_units() {
        let panel = ResultsPanel::from_result(&evaluate(LaunchParameters {
            speed_mps: 20.0,
            angle_deg: 45.0,
            gravity_mps2: 9.8,
        }));

        assert_eq!(panel.range, "40.82 m");
        assert_eq!(panel.max_height, "10.20 m");
        assert_eq!(panel.flight_time, "2.89 s");
        assert_eq!(panel.vx, "14.14 m/s");
        assert_eq!(panel.vy, "14.14 m/s");
        assert_eq!(panel.rows()[2], ("Time of flight", "2.89 s"));
    }

    #[test]
    fn captions_match_slider_values() {
        assert_eq!(speed_caption(20.0), "20 m/s");
        assert_eq!(angle_caption(45.0), "45°");
    }
}
