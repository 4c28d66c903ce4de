//! Preset weightings for common routing modes.

use crate::graph::{Edge, EdgeAccess, Weighting};
use serde::{Deserialize, Serialize};

/// Walking speed used when routing pedestrians, in km/h.
pub const PEDESTRIAN_SPEED: f64 = 5.0;

/// What the search minimizes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
  /// Meters
  Length,
  /// Seconds
  Time,
}

impl Default for Mode {
  fn default() -> Self {
    Mode::Length
  }
}

/// Which edges the search may use
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessFilter {
  AllRoads,
  MotorVehicles,
  Pedestrians,
}

impl Default for AccessFilter {
  fn default() -> Self {
    AccessFilter::AllRoads
  }
}

/// Cost function and allowed-edge predicate derived from a [`Mode`] and an [`AccessFilter`].
///
/// In [`Mode::Time`] an edge is traveled at its maximum speed, capped by `speed_limit` when set.
/// Pedestrians are capped at [`PEDESTRIAN_SPEED`] unless a limit is given.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInspector {
  pub mode: Mode,
  pub access: AccessFilter,
  pub speed_limit: Option<f64>,
}

impl EdgeInspector {
  pub fn new(mode: Mode, access: AccessFilter) -> Self {
    EdgeInspector {
      mode: mode,
      access: access,
      speed_limit: None,
    }
  }

  pub fn shortest_all_roads() -> Self {
    Self::new(Mode::Length, AccessFilter::AllRoads)
  }

  pub fn shortest_motor_vehicles() -> Self {
    Self::new(Mode::Length, AccessFilter::MotorVehicles)
  }

  pub fn fastest_all_roads() -> Self {
    Self::new(Mode::Time, AccessFilter::AllRoads)
  }

  pub fn fastest_motor_vehicles() -> Self {
    Self::new(Mode::Time, AccessFilter::MotorVehicles)
  }

  pub fn fastest_pedestrians() -> Self {
    Self::new(Mode::Time, AccessFilter::Pedestrians)
  }

  fn effective_limit(&self) -> Option<f64> {
    match self.access {
      AccessFilter::Pedestrians => Some(self.speed_limit.unwrap_or(PEDESTRIAN_SPEED)),
      _ => self.speed_limit,
    }
  }

  /// Speed in km/h used to travel `edge`.
  pub fn speed(&self, edge: &Edge) -> f64 {
    let max_speed = edge.max_speed as f64;
    self
      .effective_limit()
      .map_or(max_speed, |limit| max_speed.min(limit))
  }

  /// Highest speed the inspector will use on `graph`, in km/h.
  pub fn maximum_speed<G: EdgeAccess + ?Sized>(&self, graph: &G) -> f64 {
    let max_speed = graph.maximum_speed();
    self
      .effective_limit()
      .map_or(max_speed, |limit| max_speed.min(limit))
  }
}

impl Weighting for EdgeInspector {
  fn is_allowed(&self, edge: &Edge) -> bool {
    match self.access {
      AccessFilter::AllRoads => true,
      AccessFilter::MotorVehicles => edge.access.motor_vehicles,
      AccessFilter::Pedestrians => edge.access.pedestrians,
    }
  }

  fn cost(&self, edge: &Edge) -> f64 {
    match self.mode {
      Mode::Length => edge.length as f64,
      Mode::Time => edge.travel_time(self.speed(edge)),
    }
  }
}
