pub mod contour;
pub mod error;
pub mod geometry;
pub mod math;

pub use error::{KonturError, Result};
