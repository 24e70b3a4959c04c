//! Circle solving for 2D arc segments.
//!
//! Angles are measured counter-clockwise from the +X axis, in radians, in
//! the standard `atan2` range `(-π, π]`. The angular span from a start to
//! an end angle is always normalized forward into `[0, 2π)`.
use std::f64::consts::PI;

use super::{Point3, Vector2};

/// Chord lengths below this are treated as degenerate (coincident endpoints).
const DEGENERATE_CHORD: f64 = 1e-12;

/// Converts polar coordinates about `center` to a Cartesian point.
///
/// The z coordinate of `center` carries through unchanged.
#[must_use]
pub fn polar_to_cartesian(center: &Point3, radius: f64, angle: f64) -> Point3 {
    Point3::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
        center.z,
    )
}

/// Returns the angular span from `start_angle` to `end_angle`, normalized
/// into `[0, 2π)` by adding a full turn when the raw difference is negative.
#[must_use]
pub fn normalize_sweep(start_angle: f64, end_angle: f64) -> f64 {
    let mut sweep = end_angle - start_angle;
    if sweep < 0.0 {
        sweep += 2.0 * PI;
    }
    sweep
}

/// Solves the circle center and traversal angles for an arc spanning
/// `a → b` with the requested `radius` and winding direction.
///
/// Returns `(center, start_angle, end_angle, applied_radius)`.
///
/// When no circle of the requested radius spans the chord (half-chord
/// longer than the radius), the radius is raised to `half_chord * 1.1`;
/// callers detect the correction by comparing `applied_radius` against
/// the request. A radius shortfall is a correction, never a failure.
///
/// Of the two candidate centers on the chord's perpendicular bisector,
/// `clockwise` selects the one left of `a → b` and counter-clockwise the
/// one right of it.
#[must_use]
pub fn solve_center_from_endpoints(
    a: &Point3,
    b: &Point3,
    radius: f64,
    clockwise: bool,
) -> (Point3, f64, f64, f64) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let chord = (dx * dx + dy * dy).sqrt();
    let half_chord = chord / 2.0;

    let mut applied = radius;
    if half_chord > applied {
        applied = half_chord * 1.1;
    }

    let mid = Point3::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, a.z);
    let h = (applied * applied - half_chord * half_chord).sqrt();

    // Unit normal left of the chord; the direction is arbitrary for a
    // degenerate chord, where the sweep comes out zero anyway.
    let perp = if chord < DEGENERATE_CHORD {
        Vector2::new(0.0, 1.0)
    } else {
        Vector2::new(-dy / chord, dx / chord)
    };
    let perp = if clockwise { perp } else { -perp };

    let center = Point3::new(mid.x + h * perp.x, mid.y + h * perp.y, mid.z);
    let start_angle = (a.y - center.y).atan2(a.x - center.x);
    let end_angle = (b.y - center.y).atan2(b.x - center.x);

    (center, start_angle, end_angle, applied)
}
