use serde::{Deserialize, Serialize};

use crate::types::{AreaRange, ThresholdRange};

/// Parameters of a detection run.
///
/// Only `threshold` is exposed on the command line; the rest are fixed for
/// the tool but kept here so library callers can change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub threshold: ThresholdRange,
    pub area: AreaRange,
    /// Polygon approximation tolerance as a fraction of the perimeter
    pub approx_tolerance: f64,
    /// Inclusive aspect-ratio band for a four-vertex polygon to count as square
    pub square_aspect: (f64, f64),
    pub marker_radius: i32,
    pub marker_color: [u8; 3],
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: ThresholdRange::default(),
            area: AreaRange::default(),
            approx_tolerance: 0.04,
            square_aspect: (0.95, 1.05),
            marker_radius: 3,
            marker_color: [0, 255, 0],
        }
    }
}

impl DetectorConfig {
    pub fn with_threshold(mut self, threshold: ThresholdRange) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_area(mut self, area: AreaRange) -> Self {
        self.area = area;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = DetectorConfig::default().with_threshold(ThresholdRange::new(90, 255));
        let json = serde_json::to_string(&config).unwrap();
        let back: DetectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_with_bad_area_bounds_is_rejected() {
        let mut value = serde_json::to_value(DetectorConfig::default()).unwrap();
        value["area"] = serde_json::json!({ "min": 60.0, "max": 15.0 });
        assert!(serde_json::from_value::<DetectorConfig>(value).is_err());
    }
}
