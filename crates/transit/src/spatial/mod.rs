//! Geographic distance utilities.

pub mod queries;

pub use queries::{great_circle_length, haversine_distance};
