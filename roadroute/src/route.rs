//! Route finding algorithms.
//!
//! [`route`] runs a label-setting search: labels are finalized in order of `cost + heuristic`
//! and the search stops as soon as the destination is finalized. With [`Heuristic::Zero`] this is
//! Dijkstra's algorithm, with an admissible estimate it is A*. Edge costs must be non-negative.

use crate::config::SearchConfig;
use crate::error::RouteError;
use crate::graph::*;
use crate::label::Heuristic;
use crate::path::Path;
use crate::search_space::SearchSpace;

use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

pub trait RoutableGraph: GraphBase + EdgeAccess + Located + IntoEdges {}
impl<T> RoutableGraph for T where T: GraphBase + EdgeAccess + Located + IntoEdges {}

/// A search request: where to go from and to, and how to weigh edges.
pub struct ShortestPathProblem<G, W> {
  pub graph: G,
  pub origin: NodeId,
  pub destination: NodeId,
  pub weighting: W,
}

impl<G, W> ShortestPathProblem<G, W> {
  pub fn new(graph: G, origin: NodeId, destination: NodeId, weighting: W) -> Self {
    ShortestPathProblem {
      graph: graph,
      origin: origin,
      destination: destination,
      weighting: weighting,
    }
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
  /// The destination was finalized, the path is a least-cost route.
  Optimal,
  /// No allowed sequence of edges connects origin and destination.
  Infeasible,
}

pub struct RouteSolution<G> {
  pub status: Status,
  /// Set when `status` is [`Status::Optimal`].
  pub path: Option<Path<G>>,
  /// Cost of the path, infinite when there is none.
  pub cost: f64,
  pub settled_nodes: usize,
  pub solving_time: Duration,
}

impl<G> RouteSolution<G> {
  pub fn is_feasible(&self) -> bool {
    self.status == Status::Optimal
  }
}

/// Receives progress of a search. Called synchronously from the search loop.
pub trait SearchObserver {
  fn node_settled(&mut self, _node: NodeId) {}
  fn destination_reached(&mut self, _node: NodeId) {}
}

impl SearchObserver for () {}

pub fn route<G, W, O>(
  problem: &ShortestPathProblem<G, W>,
  heuristic: Heuristic,
  observer: &mut O,
) -> Result<RouteSolution<G>, RouteError>
where
  G: Copy + RoutableGraph,
  W: Weighting,
  O: SearchObserver + ?Sized,
{
  let timer = Instant::now();
  let graph = problem.graph;
  let (origin, destination) = (problem.origin, problem.destination);

  for node in &[origin, destination] {
    if !graph.contains_node(*node) {
      return Err(RouteError::UnknownNode(*node));
    }
  }

  let heuristic = if heuristic.is_usable() {
    heuristic
  } else {
    warn!(?heuristic, "Unusable estimate, searching without one");
    Heuristic::Zero
  };

  debug!(
    map = %graph.map_id(),
    origin,
    destination,
    ?heuristic,
    "Starting search"
  );

  let mut search = SearchSpace::new(&graph, destination, heuristic);
  search.init(origin)?;

  while let Some(node) = search.settle_next() {
    trace!(node, cost = search.label(node).cost(), "Settled");
    observer.node_settled(node);

    if node == destination {
      break;
    }
    search.relax(graph, &problem.weighting, node)?;
  }

  let destination_label = search.label(destination);
  if !destination_label.is_finalized() {
    debug!(
      settled = search.settled_nodes(),
      elapsed = ?timer.elapsed(),
      "No route found"
    );
    return Ok(RouteSolution {
      status: Status::Infeasible,
      path: None,
      cost: f64::INFINITY,
      settled_nodes: search.settled_nodes(),
      solving_time: timer.elapsed(),
    });
  }

  observer.destination_reached(destination);

  let edges = search.unwind(&graph, destination);
  let path = if edges.is_empty() {
    Path::single_node(graph, origin)
  } else {
    Path::new(graph, edges)
  };

  if !path.is_valid() || path.origin() != Some(origin) || path.destination() != Some(destination) {
    warn!(?path, "Reconstructed path is broken");
    return Err(RouteError::CorruptedPath {
      origin: origin,
      destination: destination,
    });
  }

  let cost = destination_label.cost();
  debug!(
    cost,
    edges = path.edges().len(),
    settled = search.settled_nodes(),
    elapsed = ?timer.elapsed(),
    "Route found"
  );

  Ok(RouteSolution {
    status: Status::Optimal,
    path: Some(path),
    cost: cost,
    settled_nodes: search.settled_nodes(),
    solving_time: timer.elapsed(),
  })
}

pub fn dijkstra<G, W, O>(
  problem: &ShortestPathProblem<G, W>,
  observer: &mut O,
) -> Result<RouteSolution<G>, RouteError>
where
  G: Copy + RoutableGraph,
  W: Weighting,
  O: SearchObserver + ?Sized,
{
  route(problem, Heuristic::Zero, observer)
}

/// A* search. `heuristic` must not overestimate the remaining cost, or the route may not be optimal.
pub fn astar<G, W, O>(
  problem: &ShortestPathProblem<G, W>,
  heuristic: Heuristic,
  observer: &mut O,
) -> Result<RouteSolution<G>, RouteError>
where
  G: Copy + RoutableGraph,
  W: Weighting,
  O: SearchObserver + ?Sized,
{
  route(problem, heuristic, observer)
}

pub fn route_with_config<G, O>(
  graph: G,
  origin: NodeId,
  destination: NodeId,
  config: &SearchConfig,
  observer: &mut O,
) -> Result<RouteSolution<G>, RouteError>
where
  G: Copy + RoutableGraph,
  O: SearchObserver + ?Sized,
{
  let problem = ShortestPathProblem::new(graph, origin, destination, config.inspector);
  route(&problem, config.heuristic(&graph), observer)
}
