use geo::{EuclideanDistance, EuclideanLength, Simplify};
use geo_types::{Coord, Line, LineString, Point};
use crate::{
    traits::ShapeClassifier,
    types::{Contour, ShapeLabel},
};

/// Vertex-count shape classifier.
///
/// The contour is reduced with a closed Douglas-Peucker pass whose tolerance
/// is a fraction of the perimeter; the surviving vertex count picks the label.
#[derive(Debug, Clone)]
pub struct PolygonShapeClassifier {
    pub tolerance: f64,
    pub square_aspect: (f64, f64),
}

impl Default for PolygonShapeClassifier {
    fn default() -> Self {
        Self {
            tolerance: 0.04,
            square_aspect: (0.95, 1.05),
        }
    }
}

impl ShapeClassifier for PolygonShapeClassifier {
    fn classify(&self, contour: &Contour) -> ShapeLabel {
        let epsilon = self.tolerance * perimeter(contour);
        let approx = approximate_polygon(contour, epsilon);

        match approx.len() {
            3 => ShapeLabel::Triangle,
            4 => {
                let ar = aspect_ratio(&approx);
                let (low, high) = self.square_aspect;
                if ar >= low && ar <= high {
                    ShapeLabel::Square
                } else {
                    ShapeLabel::Rectangle
                }
            }
            5 => ShapeLabel::Pentagon,
            _ => ShapeLabel::Circle,
        }
    }
}

fn to_coords(contour: &Contour) -> Vec<Coord<f64>> {
    contour
        .points
        .iter()
        .map(|p| Coord { x: p.x as f64, y: p.y as f64 })
        .collect()
}

/// Closed arc length of the contour.
pub fn perimeter(contour: &Contour) -> f64 {
    if contour.len() < 2 {
        return 0.0;
    }
    let mut ring = LineString::new(to_coords(contour));
    ring.close();
    ring.euclidean_length()
}

fn farthest_from(coords: &[Coord<f64>], origin: usize) -> usize {
    let o = Point::from(coords[origin]);
    let mut best = origin;
    let mut best_dist = 0.0;
    for (i, c) in coords.iter().enumerate() {
        let d = o.euclidean_distance(&Point::from(*c));
        if d > best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

fn within_epsilon(vertex: Coord<f64>, prev: Coord<f64>, next: Coord<f64>, epsilon: f64) -> bool {
    Point::from(vertex).euclidean_distance(&Line::new(prev, next)) <= epsilon
}

/// Closed Douglas-Peucker approximation.
///
/// The ring is split at two extreme points, each half simplified as an open
/// chain, and the split points themselves are dropped when they sit within
/// `epsilon` of the segment joining their neighbours.
pub fn approximate_polygon(contour: &Contour, epsilon: f64) -> Vec<Coord<f64>> {
    let coords = to_coords(contour);
    let n = coords.len();
    if n <= 2 {
        return coords;
    }

    let a = farthest_from(&coords, 0);
    let b = farthest_from(&coords, a);
    if a == b {
        return vec![coords[a]];
    }

    let ring: Vec<Coord<f64>> = coords[a..].iter().chain(&coords[..a]).copied().collect();
    let split = (b + n - a) % n;

    let first = LineString::new(ring[..=split].to_vec()).simplify(&epsilon);
    let mut second_coords = ring[split..].to_vec();
    second_coords.push(ring[0]);
    let second = LineString::new(second_coords).simplify(&epsilon);

    let mut approx: Vec<Coord<f64>> = first.0[..first.0.len() - 1]
        .iter()
        .chain(&second.0[..second.0.len() - 1])
        .copied()
        .collect();

    // The split points are never tested by the per-half passes.
    let split_at = first.0.len() - 1;
    for idx in [split_at, 0] {
        let len = approx.len();
        if len <= 3 {
            break;
        }
        let prev = approx[(idx + len - 1) % len];
        let next = approx[(idx + 1) % len];
        if within_epsilon(approx[idx], prev, next, epsilon) {
            approx.remove(idx);
        }
    }

    approx
}

/// Width over height of the integer bounding box of the vertices.
fn aspect_ratio(vertices: &[Coord<f64>]) -> f64 {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in vertices {
        min_x = min_x.min(c.x);
        min_y = min_y.min(c.y);
        max_x = max_x.max(c.x);
        max_y = max_y.max(c.y);
    }
    let width = max_x - min_x + 1.0;
    let height = max_y - min_y + 1.0;
    width / height
}
