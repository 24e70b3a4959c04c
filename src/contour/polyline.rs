use crate::geometry::LineSegment;
use crate::math::distance_2d::distance_2d;
use crate::math::{Point3, CONNECT_EPSILON};

use super::Contour;

/// Builds a contour of straight segments from an ordered run of points.
///
/// Consecutive points closer than [`CONNECT_EPSILON`] in the XY plane are
/// skipped rather than emitted as zero-length segments. With `close` set,
/// one segment from the last point back to the first is appended, unless
/// the two already coincide.
#[must_use]
pub fn contour_from_polyline(points: &[Point3], close: bool) -> Contour {
    contour_from_polyline_with_epsilon(points, close, CONNECT_EPSILON)
}

/// Same as [`contour_from_polyline`], with a caller-chosen tolerance that
/// also becomes the built contour's connectivity tolerance.
#[must_use]
pub fn contour_from_polyline_with_epsilon(
    points: &[Point3],
    close: bool,
    epsilon: f64,
) -> Contour {
    let mut contour = Contour::with_epsilon(epsilon);
    for pair in points.windows(2) {
        if distance_2d(&pair[0], &pair[1]) > epsilon {
            contour.add_segment(LineSegment::new(pair[0], pair[1]));
        }
    }
    if close {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if distance_2d(first, last) > epsilon {
                contour.add_segment(LineSegment::new(*last, *first));
            }
        }
    }
    contour
}
