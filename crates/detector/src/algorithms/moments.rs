use crate::types::{Contour, Moments};

/// Polygon moments of a closed contour via Green's theorem.
///
/// The sign is normalised so `m00` is never negative whatever the winding.
pub fn contour_moments(contour: &Contour) -> Moments {
    let points = &contour.points;
    if points.len() < 3 {
        return Moments::default();
    }

    let mut a00 = 0.0;
    let mut a10 = 0.0;
    let mut a01 = 0.0;

    for (i, curr) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        let (x0, y0) = (curr.x as f64, curr.y as f64);
        let (x1, y1) = (next.x as f64, next.y as f64);

        let cross = x0 * y1 - x1 * y0;
        a00 += cross;
        a10 += cross * (x0 + x1);
        a01 += cross * (y0 + y1);
    }

    let sign = if a00 < 0.0 { -1.0 } else { 1.0 };
    Moments {
        m00: sign * a00 / 2.0,
        m10: sign * a10 / 6.0,
        m01: sign * a01 / 6.0,
    }
}
