use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// Kinds of traffic allowed on an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
  pub motor_vehicles: bool,
  pub pedestrians: bool,
}

impl Default for Access {
  fn default() -> Self {
    Access {
      motor_vehicles: true,
      pedestrians: true,
    }
  }
}

impl Access {
  pub fn motor_vehicles_only() -> Self {
    Access {
      motor_vehicles: true,
      pedestrians: false,
    }
  }

  pub fn pedestrians_only() -> Self {
    Access {
      motor_vehicles: false,
      pedestrians: true,
    }
  }
}

/// A directed road segment.
///
/// `length` is in meters and `max_speed` in km/h, travel times are returned in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
  pub origin: NodeId,
  pub destination: NodeId,
  pub length: f32,
  pub max_speed: f32,
  #[serde(default)]
  pub access: Access,
}

impl Edge {
  pub fn new(origin: NodeId, destination: NodeId, length: f32, max_speed: f32) -> Self {
    Edge {
      origin: origin,
      destination: destination,
      length: length,
      max_speed: max_speed,
      access: Access::default(),
    }
  }

  pub fn with_access(mut self, access: Access) -> Self {
    self.access = access;
    self
  }

  /// Time in seconds to travel the edge at `speed` km/h. Zero-length edges take no time at any
  /// speed.
  pub fn travel_time(&self, speed: f64) -> f64 {
    if self.length == 0.0 {
      return 0.0;
    }
    self.length as f64 * 3600.0 / (speed * 1000.0)
  }

  /// Time in seconds to travel the edge at its maximum allowed speed.
  pub fn minimum_travel_time(&self) -> f64 {
    self.travel_time(self.max_speed as f64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_travel_time() {
    let edge = Edge::new(0, 1, 1000.0, 50.0);

    assert!((edge.travel_time(100.0) - 36.0).abs() < 1e-9);
    assert!((edge.minimum_travel_time() - 72.0).abs() < 1e-9);
  }

  #[test]
  fn test_unknown_speed_is_never_fastest() {
    let edge = Edge::new(0, 1, 10.0, 0.0);
    assert!(edge.minimum_travel_time().is_infinite());
  }

  #[test]
  fn test_zero_length_takes_no_time() {
    let edge = Edge::new(0, 1, 0.0, 0.0);

    assert_eq!(edge.minimum_travel_time(), 0.0);
    assert_eq!(edge.travel_time(50.0), 0.0);
  }

  #[test]
  fn test_access_defaults_when_missing() {
    let edge: Edge = serde_json::from_str(
      r#"{"origin": 3, "destination": 4, "length": 12.5, "max_speed": 30.0}"#,
    )
    .unwrap();

    assert_eq!(edge.origin, 3);
    assert_eq!(edge.access, Access::default());
  }
}
