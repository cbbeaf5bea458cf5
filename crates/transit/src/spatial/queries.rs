//! Great-circle distance calculations.
//!
//! Uses the Haversine formula for distances on Earth's surface.

use geo::{HaversineDistance, Point};

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Sum of Haversine distances between consecutive points, in meters
pub fn great_circle_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}
