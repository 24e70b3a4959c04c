//! Builds a few contours and prints their validity and closure.
//!
//! Run with `RUST_LOG=warn cargo run --example contour_demo` to also see
//! the arc radius correction diagnostic.
use kontur::contour::{contour_from_polyline, Contour};
use kontur::geometry::{ArcSegment, LineSegment};
use kontur::math::Point3;
use kontur::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut contour = Contour::new();
    contour.add_segment(LineSegment::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 10.0, 0.0),
    ));
    contour.add_segment(LineSegment::new(
        Point3::new(0.0, 10.0, 0.0),
        Point3::new(10.0, 10.0, 0.0),
    ));
    contour.add_segment(LineSegment::new(
        Point3::new(10.0, 10.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
    ));

    if contour.is_valid() {
        println!("contour is valid");
    } else {
        println!("contour is invalid");
    }

    contour.remove_segment(1)?;
    println!("after removing a segment: valid = {}", contour.is_valid());

    let poly_points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 2.0, 0.0),
        Point3::new(2.0, 1.0, 0.0),
        Point3::new(4.0, 3.0, 0.0),
        Point3::new(5.0, 7.0, 0.0),
    ];
    let polyline = contour_from_polyline(&poly_points, false);
    println!("polyline contour closed shape: {}", polyline.is_closed_shape());

    // A radius that cannot span the chord gets corrected, not rejected.
    let (arc, correction) = ArcSegment::from_endpoints(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
        1.0,
        true,
    )?;
    if let Some(correction) = correction {
        println!(
            "arc radius corrected: requested {}, applied {}",
            correction.requested, correction.applied
        );
    }
    println!("arc length: {:.4}", arc.length());

    Ok(())
}
