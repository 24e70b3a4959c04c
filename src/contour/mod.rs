mod polyline;

pub use polyline::{contour_from_polyline, contour_from_polyline_with_epsilon};

use std::cell::Cell;

use crate::error::{ContourError, Result};
use crate::geometry::Segment;
use crate::math::distance_2d::distance_2d;
use crate::math::CONNECT_EPSILON;

/// An ordered sequence of owned segments forming an open or closed contour.
///
/// Insertion order is traversal order: segment `i`'s end is expected to
/// meet segment `i + 1`'s start. Continuity is checked lazily and cached;
/// every structural or coordinate mutation clears the cache.
///
/// The cache lives in a [`Cell`], so a `Contour` is `Send` but not `Sync`:
/// distinct contours can be checked from different threads freely, while
/// shared access to a single instance requires external synchronization.
#[derive(Debug)]
pub struct Contour {
    epsilon: f64,
    segments: Vec<Segment>,
    validity: Cell<Option<bool>>,
}

impl Default for Contour {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Contour {
    /// Deep-copies every segment. The copy starts with a stale cache.
    fn clone(&self) -> Self {
        Self {
            epsilon: self.epsilon,
            segments: self.segments.clone(),
            validity: Cell::new(None),
        }
    }
}

impl Contour {
    /// Creates an empty contour with the default connectivity tolerance,
    /// [`CONNECT_EPSILON`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_epsilon(CONNECT_EPSILON)
    }

    /// Creates an empty contour with a caller-chosen connectivity tolerance.
    #[must_use]
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            segments: Vec::new(),
            validity: Cell::new(None),
        }
    }

    /// Returns the connectivity tolerance this contour compares against.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Appends a segment to the end of the contour.
    pub fn add_segment(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
        self.validity.set(None);
    }

    /// Inserts a segment before `position`.
    ///
    /// `position` may equal the current count, in which case the segment is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::IndexOutOfRange`] when `position` exceeds
    /// the segment count.
    pub fn insert_segment(&mut self, segment: impl Into<Segment>, position: usize) -> Result<()> {
        if position > self.segments.len() {
            return Err(ContourError::IndexOutOfRange {
                index: position,
                len: self.segments.len(),
            }
            .into());
        }
        self.segments.insert(position, segment.into());
        self.validity.set(None);
        Ok(())
    }

    /// Removes and returns the segment at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::IndexOutOfRange`] when `position` is not a
    /// valid segment index.
    pub fn remove_segment(&mut self, position: usize) -> Result<Segment> {
        if position >= self.segments.len() {
            return Err(ContourError::IndexOutOfRange {
                index: position,
                len: self.segments.len(),
            }
            .into());
        }
        self.validity.set(None);
        Ok(self.segments.remove(position))
    }

    /// Returns the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::IndexOutOfRange`] when `index` is not a
    /// valid segment index.
    pub fn segment_at(&self, index: usize) -> Result<&Segment> {
        let len = self.segments.len();
        self.segments
            .get(index)
            .ok_or_else(|| ContourError::IndexOutOfRange { index, len }.into())
    }

    /// Returns a mutable handle to the segment at `index`.
    ///
    /// The borrow can change coordinates, so the validity cache is cleared
    /// up front.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::IndexOutOfRange`] when `index` is not a
    /// valid segment index.
    pub fn segment_at_mut(&mut self, index: usize) -> Result<&mut Segment> {
        let len = self.segments.len();
        self.validity.set(None);
        self.segments
            .get_mut(index)
            .ok_or_else(|| ContourError::IndexOutOfRange { index, len }.into())
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when the contour holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the segments in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Translates every segment by `(dx, dy)`, in order.
    ///
    /// Clears the validity cache. Connectivity is translation-invariant so
    /// a recheck returns the same answer, but the cache must not outlive
    /// any coordinate change.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for segment in &mut self.segments {
            segment.translate(dx, dy);
        }
        self.validity.set(None);
    }

    /// Returns whether every adjacent pair of segments connects end-to-start
    /// within the contour's tolerance, measured in the XY plane.
    ///
    /// Contours with fewer than two segments are trivially valid. The
    /// result is cached until the next mutation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if let Some(valid) = self.validity.get() {
            return valid;
        }
        let valid = self
            .segments
            .windows(2)
            .all(|pair| distance_2d(pair[0].point_b(), pair[1].point_a()) <= self.epsilon);
        self.validity.set(Some(valid));
        valid
    }

    /// Returns whether the contour traversal returns to its starting point.
    ///
    /// A broken contour is never closed. A single segment closes on itself
    /// when it has real length and coincident endpoints (a full-circle
    /// arc); longer contours close when the last segment's end meets the
    /// first segment's start.
    #[must_use]
    pub fn is_closed_shape(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        match self.segments.as_slice() {
            [] => false,
            [only] => {
                only.is_non_zero_length(self.epsilon)
                    && distance_2d(only.point_a(), only.point_b()) < self.epsilon
            }
            [first, .., last] => distance_2d(last.point_b(), first.point_a()) < self.epsilon,
        }
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
