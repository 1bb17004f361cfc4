use std::{fmt, str::FromStr};

use imageproc::point::Point;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{DetectorError, Result};

/// Binary threshold parameters as given on the command line.
///
/// `min` is the cutoff a pixel must exceed, `max` is the value written for
/// pixels that do. This is not a band-pass filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRange {
    pub min: i32,
    pub max: i32,
}

impl ThresholdRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Default for ThresholdRange {
    fn default() -> Self {
        Self { min: 60, max: 185 }
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.min, self.max)
    }
}

impl FromStr for ThresholdRange {
    type Err = DetectorError;

    /// Parse the `[min,max]` form.
    fn from_str(s: &str) -> Result<Self> {
        let fail = |reason: &str| DetectorError::RangeParse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| fail("expected the form [min,max]"))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(fail("expected exactly two comma-separated integers"));
        }

        let min = parts[0]
            .parse::<i32>()
            .map_err(|e| fail(&format!("min '{}' is not an integer ({e})", parts[0])))?;
        let max = parts[1]
            .parse::<i32>()
            .map_err(|e| fail(&format!("max '{}' is not an integer ({e})", parts[1])))?;

        Ok(Self { min, max })
    }
}

/// Open interval of accepted contour areas (zeroth moments).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AreaBounds")]
pub struct AreaRange {
    pub min: f64,
    pub max: f64,
}

impl AreaRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min >= 0.0 && min < max) {
            return Err(DetectorError::InvalidAreaRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Strict on both ends.
    pub fn contains(&self, area: f64) -> bool {
        area > self.min && area < self.max
    }
}

/// Unchecked wire form of [`AreaRange`].
#[derive(Deserialize)]
struct AreaBounds {
    min: f64,
    max: f64,
}

impl TryFrom<AreaBounds> for AreaRange {
    type Error = DetectorError;

    fn try_from(bounds: AreaBounds) -> Result<Self> {
        Self::new(bounds.min, bounds.max)
    }
}

impl Default for AreaRange {
    fn default() -> Self {
        Self { min: 15.0, max: 60.0 }
    }
}

/// A closed boundary curve, stored with only its direction-change points.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Zeroth and first spatial moments of a contour polygon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// Area of the contour polygon.
    pub fn area(&self) -> f64 {
        self.m00
    }

    /// Centroid truncated toward zero, `None` for a zero-area contour.
    pub fn centroid(&self) -> Option<(i32, i32)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some(((self.m10 / self.m00) as i32, (self.m01 / self.m00) as i32))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShapeLabel {
    Triangle,
    Square,
    Rectangle,
    Pentagon,
    Circle,
}

/// One accepted contour. Only `index`, `x` and `y` go to the table file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroidRecord {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub area: f64,
    pub shape: ShapeLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Accepted records in acceptance order
    pub records: Vec<CentroidRecord>,
    /// Number of contours found before area filtering
    pub contour_count: usize,
    pub image_width: u32,
    pub image_height: u32,
}

impl Detection {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }
}
