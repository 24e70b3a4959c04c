use crate::math::distance_2d::distance_2d;
use crate::math::{Point3, VERTICAL_SLOPE_EPSILON};

/// A straight 2D segment between two endpoints.
///
/// Slope and length are derived fields, recomputed whenever an endpoint
/// changes. Only the XY plane participates in length and slope; z rides
/// along untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    point_a: Point3,
    point_b: Point3,
    slope: f64,
    length: f64,
}

impl LineSegment {
    /// Creates a line segment between two endpoints.
    #[must_use]
    pub fn new(point_a: Point3, point_b: Point3) -> Self {
        let mut seg = Self {
            point_a,
            point_b,
            slope: 0.0,
            length: 0.0,
        };
        seg.recompute();
        seg
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

    /// Returns the slope `Δy/Δx`, or `f64::INFINITY` for a vertical segment.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns true when `|Δx|` is below [`VERTICAL_SLOPE_EPSILON`].
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.slope.is_infinite()
    }

    /// Replaces the starting endpoint, recomputing slope and length.
    pub fn set_point_a(&mut self, point: Point3) {
        self.point_a = point;
        self.recompute();
    }

    /// Replaces the ending endpoint, recomputing slope and length.
    pub fn set_point_b(&mut self, point: Point3) {
        self.point_b = point;
        self.recompute();
    }

    /// Translates both endpoints by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.point_a.x += dx;
        self.point_a.y += dy;
        self.point_b.x += dx;
        self.point_b.y += dy;
        self.recompute();
    }

    /// Returns the cached 2D length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns true when the cached length exceeds `epsilon`.
    #[must_use]
    pub fn is_non_zero_length(&self, epsilon: f64) -> bool {
        self.length > epsilon
    }

    fn recompute(&mut self) {
        let run = self.point_b.x - self.point_a.x;
        self.slope = if run.abs() < VERTICAL_SLOPE_EPSILON {
            f64::INFINITY
        } else {
            (self.point_b.y - self.point_a.y) / run
        };
        self.length = distance_2d(&self.point_a, &self.point_b);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn length_is_2d_distance() {
        let seg = LineSegment::new(Point3::new(0.0, 0.0, 9.0), Point3::new(3.0, 4.0, -9.0));
        assert!((seg.length() - 5.0).abs() < TOL);
        assert!(seg.is_non_zero_length(1e-5));
    }

    #[test]
    fn slope_of_diagonal() {
        let seg = LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 0.0));
        assert!((seg.slope() - 0.5).abs() < TOL);
        assert!(!seg.is_vertical());
    }

    #[test]
    fn vertical_segment_has_infinite_slope() {
        let seg = LineSegment::new(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 5.0, 0.0));
        assert!(seg.is_vertical());
        assert!(seg.slope().is_infinite() && seg.slope() > 0.0);
    }

    #[test]
    fn near_vertical_below_threshold_is_vertical() {
        let seg = LineSegment::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1e-10, 1.0, 0.0),
        );
        assert!(seg.is_vertical());
    }

    #[test]
    fn endpoint_mutation_recomputes_derived_fields() {
        let mut seg = LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0));
        assert!((seg.slope() - 1.0).abs() < TOL);
        seg.set_point_b(Point3::new(2.0, 0.0, 0.0));
        assert!(seg.slope().abs() < TOL);
        assert!((seg.length() - 2.0).abs() < TOL);
        seg.set_point_a(Point3::new(2.0, -3.0, 0.0));
        assert!(seg.is_vertical());
        assert!((seg.length() - 3.0).abs() < TOL);
    }

    #[test]
    fn translate_shifts_endpoints_and_keeps_shape() {
        let mut seg = LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
        let slope = seg.slope();
        seg.translate(1.0, -2.0);
        assert!((seg.point_a().x - 1.0).abs() < TOL);
        assert!((seg.point_a().y + 2.0).abs() < TOL);
        assert!((seg.point_b().x - 4.0).abs() < TOL);
        assert!((seg.point_b().y - 2.0).abs() < TOL);
        assert!((seg.length() - 5.0).abs() < TOL);
        assert!((seg.slope() - slope).abs() < TOL);
    }

    #[test]
    fn degenerate_segment_reports_zero_length() {
        let p = Point3::new(2.0, 2.0, 0.0);
        let seg = LineSegment::new(p, p);
        assert!(!seg.is_non_zero_length(1e-5));
    }
}
