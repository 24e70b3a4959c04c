use thiserror::Error;

/// Top-level error type for the Kontur contour kernel.
#[derive(Debug, Error)]
pub enum KonturError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Contour(#[from] ContourError),
}

/// Errors related to segment geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("arc radius must be positive, got {0}")]
    NonPositiveRadius(f64),
}

/// Errors related to contour container operations.
#[derive(Debug, Error)]
pub enum ContourError {
    #[error("segment index {index} is out of range for a contour of {len} segments")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`KonturError`].
pub type Result<T> = std::result::Result<T, KonturError>;
