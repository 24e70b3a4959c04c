use crate::math::Point3;

use super::{ArcSegment, LineSegment};

/// A contour segment: one of the closed set of concrete kinds.
///
/// Only two kinds exist in this domain, so dispatch is a sum type rather
/// than an open trait hierarchy. Cloning deep-copies the variant's points;
/// no two segments ever share geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Arc(ArcSegment),
}

impl Segment {
    /// Returns the starting endpoint.
    #[must_use]
    pub fn point_a(&self) -> &Point3 {
        match self {
            Self::Line(line) => line.point_a(),
            Self::Arc(arc) => arc.point_a(),
        }
    }

    /// Returns the ending endpoint.
    #[must_use]
    pub fn point_b(&self) -> &Point3 {
        match self {
            Self::Line(line) => line.point_b(),
            Self::Arc(arc) => arc.point_b(),
        }
    }

    /// Translates the segment by `(dx, dy)`, updating derived state.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Self::Line(line) => line.translate(dx, dy),
            Self::Arc(arc) => arc.translate(dx, dy),
        }
    }

    /// Returns the segment's cached length.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    /// Returns true when the segment's length exceeds `epsilon`.
    #[must_use]
    pub fn is_non_zero_length(&self, epsilon: f64) -> bool {
        self.length() > epsilon
    }
}

impl From<LineSegment> for Segment {
    fn from(seg: LineSegment) -> Self {
        Self::Line(seg)
    }
}

impl From<ArcSegment> for Segment {
    fn from(seg: ArcSegment) -> Self {
        Self::Arc(seg)
    }
}
