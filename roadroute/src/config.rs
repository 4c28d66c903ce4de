//! Search configuration.

use crate::graph::EdgeAccess;
use crate::inspector::{EdgeInspector, Mode};
use crate::label::Heuristic;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
  Dijkstra,
  #[serde(alias = "astar")]
  AStar,
}

impl Default for Algorithm {
  fn default() -> Self {
    Algorithm::Dijkstra
  }
}

/// How to run a search, usually deserialized from the embedding application's settings.
///
/// ```json
/// { "algorithm": "a_star", "inspector": { "mode": "time", "access": "motor_vehicles" } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  pub algorithm: Algorithm,
  pub inspector: EdgeInspector,
  /// Speed in km/h the A* estimate assumes in [`Mode::Time`]. Defaults to the highest speed the
  /// inspector uses on the graph.
  pub assumed_speed: Option<f64>,
}

impl SearchConfig {
  pub fn heuristic<G: EdgeAccess + ?Sized>(&self, graph: &G) -> Heuristic {
    match (self.algorithm, self.inspector.mode) {
      (Algorithm::Dijkstra, _) => Heuristic::Zero,
      (Algorithm::AStar, Mode::Length) => Heuristic::Distance,
      (Algorithm::AStar, Mode::Time) => {
        let speed = self
          .assumed_speed
          .unwrap_or_else(|| self.inspector.maximum_speed(graph));
        let heuristic = Heuristic::TravelTime { speed: speed };
        if heuristic.is_usable() {
          heuristic
        } else {
          warn!(speed, "no usable speed for the A* estimate, falling back to Dijkstra");
          Heuristic::Zero
        }
      }
    }
  }
}
