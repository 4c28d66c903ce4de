//! Routes as sequences of edges.
//!
//! A [`Path`] is a list of edges plus an explicit origin rather than a list of nodes, since
//! several edges can connect the same pair of nodes.

use crate::error::PathError;
use crate::graph::*;
use crate::spatial::Position;
use std::fmt;

/// Ordered sequence of edges starting at `origin`, tied to the graph it was built on.
///
/// - an empty path has neither origin nor edges;
/// - a single-node path has an origin and no edges;
/// - otherwise the first edge starts at the origin and every edge ends where the next one starts.
///
/// Paths are read-only once constructed. Use [`Path::is_valid`] to check the chaining.
#[derive(Clone)]
pub struct Path<G> {
  graph: G,
  origin: Option<NodeId>,
  edges: Vec<EdgeId>,
}

impl<G: Copy + EdgeAccess> Path<G> {
  pub fn empty(graph: G) -> Self {
    Path {
      graph: graph,
      origin: None,
      edges: Vec::new(),
    }
  }

  pub fn single_node(graph: G, node: NodeId) -> Self {
    Path {
      graph: graph,
      origin: Some(node),
      edges: Vec::new(),
    }
  }

  /// Path over the given edges. The origin is the origin of the first edge.
  pub fn new(graph: G, edges: Vec<EdgeId>) -> Self {
    let origin = edges
      .first()
      .filter(|id| graph.contains_edge(**id))
      .map(|id| graph.edge(*id).origin);
    Path {
      graph: graph,
      origin: origin,
      edges: edges,
    }
  }

  /// Concatenates paths end to end.
  ///
  /// The edges of all paths are joined in order; empty and single-node paths add no edges. Fails
  /// if `paths` is empty, if the paths belong to different graphs or if the joined edges don't
  /// form a path.
  pub fn concatenate(paths: &[Path<G>]) -> Result<Path<G>, PathError> {
    let (first, rest) = paths.split_first().ok_or(PathError::Empty)?;

    let map_id = first.graph.map_id();
    for path in rest {
      if path.graph.map_id() != map_id {
        return Err(PathError::DifferentGraphs {
          expected: map_id.to_owned(),
          found: path.graph.map_id().to_owned(),
        });
      }
    }

    let edges: Vec<EdgeId> = paths
      .iter()
      .flat_map(|path| path.edges.iter().cloned())
      .collect();

    if edges.is_empty() {
      return Ok(
        paths
          .iter()
          .find(|path| !path.is_empty())
          .cloned()
          .unwrap_or_else(|| Path::empty(first.graph)),
      );
    }

    let path = Path::new(first.graph, edges);
    if !path.is_valid() {
      return Err(PathError::NotContiguous);
    }
    Ok(path)
  }

  pub fn graph(&self) -> G {
    self.graph
  }

  pub fn origin(&self) -> Option<NodeId> {
    self.origin
  }

  /// Last node of the path, the origin for a single-node path.
  pub fn destination(&self) -> Option<NodeId> {
    match self.edges.last() {
      Some(id) => Some(self.graph.edge(*id).destination),
      None => self.origin,
    }
  }

  pub fn edges(&self) -> &[EdgeId] {
    &self.edges
  }

  /// Nodes along the path, starting with the origin.
  pub fn nodes(&self) -> Vec<NodeId> {
    let graph = self.graph;
    self
      .origin
      .into_iter()
      .chain(self.edges.iter().map(|id| graph.edge(*id).destination))
      .collect()
  }

  pub fn is_empty(&self) -> bool {
    self.origin.is_none()
  }

  /// Number of nodes in the path.
  pub fn size(&self) -> usize {
    if self.is_empty() {
      0
    } else {
      1 + self.edges.len()
    }
  }

  pub fn is_valid(&self) -> bool {
    let origin = match (self.origin, self.edges.first()) {
      (_, None) => return true,
      (None, Some(_)) => return false,
      (Some(origin), Some(_)) => origin,
    };
    if !self.edges.iter().all(|id| self.graph.contains_edge(*id)) {
      return false;
    }

    let graph = self.graph;
    graph.edge(self.edges[0]).origin == origin
      && self
        .edges
        .windows(2)
        .all(|pair| graph.edge(pair[0]).destination == graph.edge(pair[1]).origin)
  }

  /// Total length in meters.
  pub fn length(&self) -> f64 {
    self.sum(|edge| edge.length as f64)
  }

  /// Seconds needed to travel the path at a constant `speed` in km/h.
  pub fn travel_time(&self, speed: f64) -> f64 {
    self.sum(|edge| edge.travel_time(speed))
  }

  /// Seconds needed to travel the path at the maximum allowed speed of every edge.
  pub fn minimum_travel_time(&self) -> f64 {
    self.sum(|edge| edge.minimum_travel_time())
  }

  /// Cost of the path under `weighting`, whether or not its edges are allowed.
  pub fn cost<W: Weighting + ?Sized>(&self, weighting: &W) -> f64 {
    self.sum(|edge| weighting.cost(edge))
  }

  fn sum<F: Fn(&Edge) -> f64>(&self, metric: F) -> f64 {
    let graph = self.graph;
    self.edges.iter().map(|id| metric(graph.edge(*id))).sum()
  }
}

impl<G: Copy + IntoEdges + EdgeAccess> Path<G> {
  /// Path through `nodes` in order, using the shortest edge between consecutive nodes.
  pub fn create_shortest_path_from_nodes(graph: G, nodes: &[NodeId]) -> Result<Path<G>, PathError> {
    Self::from_nodes_by(graph, nodes, |edge| edge.length as f64)
  }

  /// Path through `nodes` in order, using the fastest edge between consecutive nodes.
  pub fn create_fastest_path_from_nodes(graph: G, nodes: &[NodeId]) -> Result<Path<G>, PathError> {
    Self::from_nodes_by(graph, nodes, Edge::minimum_travel_time)
  }

  fn from_nodes_by<F>(graph: G, nodes: &[NodeId], metric: F) -> Result<Path<G>, PathError>
  where
    F: Fn(&Edge) -> f64,
  {
    if let Some(node) = nodes.iter().find(|node| !graph.contains_node(**node)) {
      return Err(PathError::UnknownNode(*node));
    }

    match nodes {
      [] => Ok(Path::empty(graph)),
      [node] => Ok(Path::single_node(graph, *node)),
      _ => {
        let edges = nodes
          .windows(2)
          .map(|pair| {
            connecting_edges(graph, pair[0], pair[1])
              .min_by(|a, b| metric(graph.edge(*a)).total_cmp(&metric(graph.edge(*b))))
              .ok_or(PathError::NoConnectingEdge {
                from: pair[0],
                to: pair[1],
              })
          })
          .collect::<Result<Vec<_>, _>>()?;
        Ok(Path::new(graph, edges))
      }
    }
  }
}

impl<G: Copy + EdgeAccess + Located> Path<G> {
  /// Positions of the nodes along the path.
  pub fn geometry(&self) -> Vec<Position> {
    let graph = self.graph;
    self
      .nodes()
      .into_iter()
      .map(|node| graph.position(node))
      .collect()
  }
}

impl<G: GraphBase> fmt::Debug for Path<G> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Path {{ map = {}, origin = {:?}, edges = {:?} }}",
      self.graph.map_id(),
      self.origin,
      self.edges
    )
  }
}
