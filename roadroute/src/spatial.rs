//! Geographic types.

use geo::{haversine_distance::HaversineDistance, Point};

#[doc(hidden)]
pub use geo::Coordinate;

/// Longitude (`x`) and latitude (`y`) in degrees.
pub type Position = Coordinate<f32>;

/// Great-circle distance in meters
pub fn haversine_distance(from: &Position, to: &Position) -> f32 {
  //We copy coords here :(. Need to figure out something better
  Point::from(*from).haversine_distance(&Point::from(*to))
}
