use super::Point3;

/// Returns the Euclidean distance between two points in the XY plane.
///
/// The z coordinate is ignored entirely; contour connectivity is a 2D
/// notion even though points carry a z.
#[must_use]
pub fn distance_2d(a: &Point3, b: &Point3) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Returns the full 3D Euclidean distance between two points.
#[must_use]
pub fn distance_3d(a: &Point3, b: &Point3) -> f64 {
    (a - b).norm()
}
