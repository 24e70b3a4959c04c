mod arc;
mod line;
mod segment;

pub use arc::{ArcSegment, RadiusCorrection};
pub use line::LineSegment;
pub use segment::Segment;
