//! Per-node records of a label-setting search.
//!
//! Dijkstra and A* share the same [`Label`]: a plain Dijkstra label is a label whose heuristic is
//! zero. The heuristic is fixed when the label is created and the queue orders labels by
//! `cost + heuristic`.

use crate::graph::{EdgeId, Located, NodeId};
use crate::priority_queue::HeapItem;
use crate::spatial::haversine_distance;
use std::cmp::Ordering;

/// Lower bound on the remaining cost from a node to the destination.
///
/// A* returns optimal routes only if the estimate never exceeds the true remaining cost. This is
/// the caller's obligation: `Distance` is admissible when edge lengths are at least the
/// straight-line distance between their end nodes, `TravelTime` additionally needs `speed` to be
/// at least the speed used for every edge cost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Heuristic {
  /// Plain Dijkstra
  Zero,
  /// Straight-line distance in meters
  Distance,
  /// Straight-line distance traveled at `speed` km/h, in seconds
  TravelTime { speed: f64 },
}

impl Default for Heuristic {
  fn default() -> Self {
    Heuristic::Zero
  }
}

impl Heuristic {
  /// False for a travel time estimate without a positive speed, which can't bound anything.
  pub fn is_usable(&self) -> bool {
    match *self {
      Heuristic::TravelTime { speed } => speed > 0.0,
      _ => true,
    }
  }

  pub fn estimate<G: Located + ?Sized>(&self, graph: &G, node: NodeId, destination: NodeId) -> f64 {
    match *self {
      Heuristic::Zero => 0.0,
      Heuristic::Distance => straight_line_distance(graph, node, destination),
      Heuristic::TravelTime { speed } => {
        straight_line_distance(graph, node, destination) * 3.6 / speed
      }
    }
  }
}

fn straight_line_distance<G: Located + ?Sized>(graph: &G, from: NodeId, to: NodeId) -> f64 {
  haversine_distance(&graph.position(from), &graph.position(to)) as f64
}

/// Search record of a single node.
///
/// Until the label is finalized its cost can only decrease; afterwards cost and predecessor are
/// fixed for the rest of the run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Label {
  node: NodeId,
  predecessor: Option<EdgeId>,
  cost: f64,
  heuristic: f64,
  finalized: bool,
}

impl Label {
  pub fn new(node: NodeId) -> Self {
    Label::with_heuristic(node, 0.0)
  }

  pub fn with_heuristic(node: NodeId, heuristic: f64) -> Self {
    Label {
      node: node,
      predecessor: None,
      cost: f64::INFINITY,
      heuristic: heuristic,
      finalized: false,
    }
  }

  pub fn node(&self) -> NodeId {
    self.node
  }

  pub fn cost(&self) -> f64 {
    self.cost
  }

  pub fn set_cost(&mut self, cost: f64) {
    debug_assert!(!self.finalized, "cost of finalized node {} changed", self.node);
    self.cost = cost;
  }

  /// Edge through which the node was reached, `None` for the origin and undiscovered nodes.
  pub fn predecessor(&self) -> Option<EdgeId> {
    self.predecessor
  }

  pub fn set_predecessor(&mut self, edge: EdgeId) {
    debug_assert!(!self.finalized, "predecessor of finalized node {} changed", self.node);
    self.predecessor = Some(edge);
  }

  pub fn heuristic(&self) -> f64 {
    self.heuristic
  }

  pub fn mark_finalized(&mut self) {
    self.finalized = true;
  }

  pub fn is_finalized(&self) -> bool {
    self.finalized
  }

  pub fn priority(&self) -> f64 {
    self.cost + self.heuristic
  }

  pub fn entry(&self) -> QueueEntry {
    QueueEntry {
      priority: self.priority(),
      node: self.node,
    }
  }
}

/// Queue key of a label. Equal priorities are resolved by the lower node id.
#[derive(Copy, Clone, Debug)]
pub struct QueueEntry {
  pub priority: f64,
  pub node: NodeId,
}

impl Ord for QueueEntry {
  fn cmp(&self, other: &Self) -> Ordering {
    self
      .priority
      .total_cmp(&other.priority)
      .then_with(|| self.node.cmp(&other.node))
  }
}

impl PartialOrd for QueueEntry {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for QueueEntry {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for QueueEntry {}

impl HeapItem for QueueEntry {
  fn slot(&self) -> usize {
    self.node as usize
  }
}
