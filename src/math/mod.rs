pub mod arc_2d;
pub mod distance_2d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for contour connectivity and closure comparisons.
///
/// Two points closer than this in the XY plane are treated as coincident
/// when checking whether segments connect end-to-start. Each [`Contour`]
/// owns its own copy of this value and can be constructed with a different
/// one.
///
/// [`Contour`]: crate::contour::Contour
pub const CONNECT_EPSILON: f64 = 1e-5;

/// `|Δx|` threshold under which a line segment counts as vertical.
///
/// Independent of, and much smaller than, [`CONNECT_EPSILON`]: it guards
/// the slope computation against a near-zero run, nothing else. Do not use
/// it for point-coincidence checks.
pub const VERTICAL_SLOPE_EPSILON: f64 = 1e-9;
