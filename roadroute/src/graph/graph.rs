use crate::graph::Edge;
use std::iter::Iterator;

// ====== Basic types =====

/// Node identifier. Nodes are numbered `0..number_of_nodes()` so the id doubles as an array index.
pub type NodeId = u32;

/// Handle into the graph-wide edge registry.
pub type EdgeId = u32;

/// Identity and size of a graph
pub trait GraphBase {
  /// Key used to tell graphs apart, e.g. when concatenating paths.
  fn map_id(&self) -> &str;
  fn number_of_nodes(&self) -> usize;
  fn number_of_edges(&self) -> usize;

  fn contains_node(&self, node: NodeId) -> bool {
    (node as usize) < self.number_of_nodes()
  }

  fn contains_edge(&self, edge: EdgeId) -> bool {
    (edge as usize) < self.number_of_edges()
  }
}

/// Access to the edge registry.
pub trait EdgeAccess: GraphBase {
  fn edge(&self, id: EdgeId) -> &Edge;

  /// Highest maximum speed (km/h) over all edges, `0` for a graph without edges.
  fn maximum_speed(&self) -> f64 {
    (0..self.number_of_edges())
      .map(|id| self.edge(id as EdgeId).max_speed as f64)
      .fold(0.0, f64::max)
  }
}

// ====== Connectivity =====

/// Trait for defining graph connectivity
///
/// `IntoEdges::out_edges()` for node `u` must return ids of all edges whose origin is `u`.
/// Parallel edges between the same pair of nodes are returned individually.
pub trait IntoEdges: GraphBase {
  type Edges: Iterator<Item = EdgeId>;
  fn out_edges(self, node: NodeId) -> Self::Edges;
}

/// Returns an iterator over the ids of edges leaving `node`
pub fn out_edges<G: IntoEdges>(graph: G, node: NodeId) -> G::Edges {
  graph.out_edges(node)
}

/// Returns an iterator over the ids of edges going from `from` to `to`
pub fn connecting_edges<G: Copy + IntoEdges + EdgeAccess>(
  graph: G,
  from: NodeId,
  to: NodeId,
) -> impl Iterator<Item = EdgeId> {
  graph
    .out_edges(from)
    .filter(move |id| graph.edge(*id).destination == to)
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase + ?Sized> GraphBase for &'a G {
  fn map_id(&self) -> &str {
    (*self).map_id()
  }

  fn number_of_nodes(&self) -> usize {
    (*self).number_of_nodes()
  }

  fn number_of_edges(&self) -> usize {
    (*self).number_of_edges()
  }
}

impl<'a, G: EdgeAccess + ?Sized> EdgeAccess for &'a G {
  fn edge(&self, id: EdgeId) -> &Edge {
    (*self).edge(id)
  }

  fn maximum_speed(&self) -> f64 {
    (*self).maximum_speed()
  }
}
