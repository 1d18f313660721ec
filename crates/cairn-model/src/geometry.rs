//! Polyline offsetting.

use crate::point::Point;

/// Compute a path parallel to `points`, displaced sideways by `dy`.
///
/// The result has the same number of points as the input. Interior
/// points are placed on the miter of the two adjacent segment normals;
/// end points are displaced along the normal of their single segment.
/// Positive `dy` offsets to the right of the direction of travel,
/// negative to the left.
///
/// Used to draw several parallel strokes from one base geometry, e.g.
/// the two casing lines of a road.
///
/// Inputs with fewer than two points have no direction and are
/// returned unchanged.
#[must_use]
pub fn parallel_path(points: &[Point], dy: f64) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let segments = points.len() - 1;

    // Unit direction vector of each segment. Zero-length segments keep
    // a unit divisor so they cannot poison the join computation.
    let mut unit = Vec::with_capacity(segments);
    for window in points.windows(2) {
        let dx = window[1].x - window[0].x;
        let dv = window[1].y - window[0].y;
        let mut length = dx.hypot(dv);
        if length == 0.0 {
            length = 1.0;
        }
        unit.push(Point::new(dx / length, dv / length));
    }

    let mut offset = Vec::with_capacity(points.len());
    offset.push(Point::new(
        points[0].x - dy * unit[0].y,
        points[0].y + dy * unit[0].x,
    ));

    // Interior points sit on the miter between the two adjacent
    // segments; the scale factor stretches the averaged normal so the
    // offset path stays at distance `dy` from both segments.
    for k in 1..segments {
        let scale = dy / (1.0 + unit[k].x * unit[k - 1].x + unit[k].y * unit[k - 1].y);
        offset.push(Point::new(
            points[k].x - scale * (unit[k].y + unit[k - 1].y),
            points[k].y + scale * (unit[k].x + unit[k - 1].x),
        ));
    }

    offset.push(Point::new(
        points[segments].x - dy * unit[segments - 1].y,
        points[segments].y + dy * unit[segments - 1].x,
    ));

    offset
}
