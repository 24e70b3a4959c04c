use std::f64::consts::PI;

use tracing::warn;

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{normalize_sweep, polar_to_cartesian, solve_center_from_endpoints};
use crate::math::Point3;

/// Record of an arc radius correction.
///
/// Produced when the requested radius cannot span the chord between the two
/// endpoints (half-chord longer than the radius). The arc is built with the
/// applied radius; the correction is informational, not a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusCorrection {
    /// Radius the caller asked for.
    pub requested: f64,
    /// Radius the arc was actually built with.
    pub applied: f64,
}

/// A circular 2D arc between two endpoints.
///
/// Stores the circle center, radius, and traversal angles alongside the
/// endpoints. The arc length is always `radius × sweep` where the sweep is
/// the forward-normalized span in `[0, 2π)`; the `clockwise` flag records
/// the winding used at construction and does not influence the length.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    point_a: Point3,
    point_b: Point3,
    center: Point3,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    clockwise: bool,
    length: f64,
}

impl ArcSegment {
    /// Builds an arc from two endpoints, a radius, and a winding direction.
    ///
    /// A positive radius shorter than half the chord is not an error: it is
    /// raised to `half_chord * 1.1` and the correction is returned alongside
    /// the arc (and logged at warn level).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveRadius`] if `radius` is zero or
    /// negative.
    pub fn from_endpoints(
        point_a: Point3,
        point_b: Point3,
        radius: f64,
        clockwise: bool,
    ) -> Result<(Self, Option<RadiusCorrection>)> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius).into());
        }

        let (center, start_angle, end_angle, applied) =
            solve_center_from_endpoints(&point_a, &point_b, radius, clockwise);
        let correction = (applied > radius).then(|| {
            warn!(
                requested = radius,
                applied, "arc radius too small for chord, clamping"
            );
            RadiusCorrection {
                requested: radius,
                applied,
            }
        });

        let length = applied * normalize_sweep(start_angle, end_angle);
        let arc = Self {
            point_a,
            point_b,
            center,
            radius: applied,
            start_angle,
            end_angle,
            clockwise,
            length,
        };
        Ok((arc, correction))
    }

    /// Builds an arc from its center, radius, and traversal angles.
    ///
    /// Endpoints are derived through the polar form. The winding flag is
    /// derived from the forward-normalized sweep: spans longer than π are
    /// recorded as clockwise. That is a modeling convention for the
    /// "long way around", not a geometric law.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveRadius`] if `radius` is zero or
    /// negative.
    pub fn from_center(
        center: Point3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius).into());
        }

        let point_a = polar_to_cartesian(&center, radius, start_angle);
        let point_b = polar_to_cartesian(&center, radius, end_angle);
        let sweep = normalize_sweep(start_angle, end_angle);

        Ok(Self {
            point_a,
            point_b,
            center,
            radius,
            start_angle,
            end_angle,
            clockwise: sweep > PI,
            length: radius * sweep,
        })
    }

    /// Returns the starting endpoint.
    #[must_use]
    pub fn point_a(&self) -> &Point3 {
        &self.point_a
    }

    /// Returns the ending endpoint.
    #[must_use]
    pub fn point_b(&self) -> &Point3 {
        &self.point_b
    }

    /// Returns the circle center.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Returns the recorded winding direction.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Translates the arc by `(dx, dy)`.
    ///
    /// Endpoints and center shift by the same delta; radius, angles,
    /// winding, and length are translation-invariant and stay untouched.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.point_a.x += dx;
        self.point_a.y += dy;
        self.point_b.x += dx;
        self.point_b.y += dy;
        self.center.x += dx;
        self.center.y += dy;
    }

    /// Returns the cached arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns true when the cached length exceeds `epsilon`.
    #[must_use]
    pub fn is_non_zero_length(&self, epsilon: f64) -> bool {
        self.length > epsilon
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::distance_2d::distance_2d;
    use approx::assert_relative_eq;

    #[test]
    fn feasible_radius_needs_no_correction() {
        let (arc, correction) = ArcSegment::from_endpoints(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            5.0,
            true,
        )
        .unwrap();
        assert!(correction.is_none());
        assert_relative_eq!(arc.radius(), 5.0);
        // Semicircle of radius 5.
        assert_relative_eq!(arc.length(), 5.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn infeasible_radius_is_corrected_observably() {
        // Half-chord is 5; radius 1 cannot span it.
        let (arc, correction) = ArcSegment::from_endpoints(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            1.0,
            true,
        )
        .unwrap();
        let correction = correction.unwrap();
        assert_relative_eq!(correction.requested, 1.0);
        assert_relative_eq!(correction.applied, 5.5);
        assert_relative_eq!(arc.radius(), 5.5);
    }

    #[test]
    fn center_is_equidistant_from_endpoints() {
        let (arc, _) = ArcSegment::from_endpoints(
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(4.0, 2.0, 0.0),
            5.0,
            false,
        )
        .unwrap();
        assert_relative_eq!(
            distance_2d(arc.center(), arc.point_a()),
            arc.radius(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            distance_2d(arc.center(), arc.point_b()),
            arc.radius(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        assert!(ArcSegment::from_endpoints(a, b, 0.0, true).is_err());
        assert!(ArcSegment::from_endpoints(a, b, -2.0, true).is_err());
        assert!(ArcSegment::from_center(a, 0.0, 0.0, PI).is_err());
    }

    #[test]
    fn polar_construction_derives_endpoints() {
        let arc = ArcSegment::from_center(Point3::new(0.0, 0.0, 0.0), 2.0, 0.0, PI / 2.0).unwrap();
        assert_relative_eq!(arc.point_a().x, 2.0, max_relative = 1e-12);
        assert_relative_eq!(arc.point_a().y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(arc.point_b().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(arc.point_b().y, 2.0, max_relative = 1e-12);
        assert_relative_eq!(arc.length(), PI, max_relative = 1e-12);
        // Quarter turn is the short way around.
        assert!(!arc.is_clockwise());
    }

    #[test]
    fn long_way_around_counts_as_clockwise() {
        // Forward sweep from π/2 down to 0 normalizes to 3π/2 > π.
        let arc = ArcSegment::from_center(Point3::new(0.0, 0.0, 0.0), 1.0, PI / 2.0, 0.0).unwrap();
        assert!(arc.is_clockwise());
        assert_relative_eq!(arc.length(), 3.0 * PI / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn full_circle_has_coincident_endpoints_and_full_length() {
        let arc =
            ArcSegment::from_center(Point3::new(3.0, 3.0, 0.0), 1.5, 0.0, 2.0 * PI).unwrap();
        assert!(distance_2d(arc.point_a(), arc.point_b()) < 1e-9);
        assert_relative_eq!(arc.length(), 2.0 * PI * 1.5, max_relative = 1e-12);
    }

    #[test]
    fn translate_shifts_endpoints_and_center_only() {
        let (mut arc, _) = ArcSegment::from_endpoints(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            3.0,
            true,
        )
        .unwrap();
        let start = arc.start_angle();
        let end = arc.end_angle();
        let length = arc.length();
        let center = *arc.center();

        arc.translate(2.0, -1.0);
        assert_relative_eq!(arc.point_a().x, 2.0, max_relative = 1e-12);
        assert_relative_eq!(arc.point_a().y, -1.0, max_relative = 1e-12);
        assert_relative_eq!(arc.point_b().x, 6.0, max_relative = 1e-12);
        assert_relative_eq!(arc.center().x, center.x + 2.0, max_relative = 1e-12);
        assert_relative_eq!(arc.center().y, center.y - 1.0, max_relative = 1e-12);
        assert_relative_eq!(arc.start_angle(), start);
        assert_relative_eq!(arc.end_angle(), end);
        assert_relative_eq!(arc.length(), length);
        assert_relative_eq!(arc.radius(), 3.0);
    }

    #[test]
    fn translate_full_circle_keeps_it_closed() {
        let mut arc =
            ArcSegment::from_center(Point3::new(0.0, 0.0, 0.0), 1.0, 0.0, 2.0 * PI).unwrap();
        arc.translate(10.0, 10.0);
        assert!(distance_2d(arc.point_a(), arc.point_b()) < 1e-9);
        assert_relative_eq!(arc.center().x, 10.0, max_relative = 1e-12);
        assert_relative_eq!(arc.length(), 2.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn clone_is_independent() {
        let (arc, _) = ArcSegment::from_endpoints(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            2.0,
            false,
        )
        .unwrap();
        let mut copy = arc.clone();
        copy.translate(5.0, 5.0);
        assert_relative_eq!(arc.point_a().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(copy.point_a().x, 5.0, max_relative = 1e-12);
    }
}
