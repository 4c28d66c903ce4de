use crate::error::GraphError;
use crate::graph::*;
use crate::spatial::Position;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

#[derive(Debug)]
struct Entry {
  id: NodeId,
  point: [f32; 2],
}

impl RTreeObject for Entry {
  type Envelope = AABB<[f32; 2]>;
  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.point)
  }
}

impl PointDistance for Entry {
  fn distance_2(&self, point: &[f32; 2]) -> f32 {
    let dx = self.point[0] - point[0];
    let dy = self.point[1] - point[1];
    dx * dx + dy * dy
  }
}

/// In-memory road network: node positions, an edge registry and outgoing adjacency lists.
///
/// Nodes and edges can be added at any time, ids are assigned sequentially starting at 0.
pub struct RoadGraph {
  map_id: String,
  positions: Vec<Position>,
  edges: Vec<Edge>,
  out_edges: Vec<Vec<EdgeId>>,
  rtree: RTree<Entry>,
}

impl RoadGraph {
  pub fn new<S: Into<String>>(map_id: S) -> Self {
    Self {
      map_id: map_id.into(),
      positions: Vec::new(),
      edges: Vec::new(),
      out_edges: Vec::new(),
      rtree: RTree::new(),
    }
  }

  pub fn add_node(&mut self, position: Position) -> NodeId {
    let id = self.positions.len() as NodeId;
    self.positions.push(position);
    self.out_edges.push(Vec::new());
    self.rtree.insert(Entry {
      id: id,
      point: [position.x, position.y],
    });
    id
  }

  pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
    for node in &[edge.origin, edge.destination] {
      if !self.contains_node(*node) {
        return Err(GraphError::UnknownNode(*node));
      }
    }
    if !(edge.length >= 0.0) {
      return Err(GraphError::InvalidLength(edge.length));
    }
    if !(edge.max_speed >= 0.0) {
      return Err(GraphError::InvalidSpeed(edge.max_speed));
    }

    let id = self.edges.len() as EdgeId;
    self.out_edges[edge.origin as usize].push(id);
    self.edges.push(edge);
    Ok(id)
  }

  /// Node closest to `position`. Distances are compared in degrees, which is good enough for
  /// picking a node but not for measuring anything.
  pub fn nearest_node(&self, position: &Position) -> Option<NodeId> {
    self
      .rtree
      .nearest_neighbor(&[position.x, position.y])
      .map(|entry| entry.id)
  }
}

impl GraphBase for RoadGraph {
  fn map_id(&self) -> &str {
    &self.map_id
  }

  fn number_of_nodes(&self) -> usize {
    self.positions.len()
  }

  fn number_of_edges(&self) -> usize {
    self.edges.len()
  }
}

impl EdgeAccess for RoadGraph {
  fn edge(&self, id: EdgeId) -> &Edge {
    &self.edges[id as usize]
  }
}

impl Located for RoadGraph {
  fn position(&self, node: NodeId) -> Position {
    self.positions[node as usize]
  }
}

impl<'a> IntoEdges for &'a RoadGraph {
  type Edges = std::iter::Cloned<std::slice::Iter<'a, EdgeId>>;

  fn out_edges(self, node: NodeId) -> Self::Edges {
    self.out_edges[node as usize].iter().cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{graph_from_edges, graph_from_positions};
  use std::collections::HashSet;

  #[test]
  fn test_road_graph() {
    let graph = graph_from_edges(
      5,
      vec![
        (0, 1, 1.0),
        (2, 0, 1.0),
        (2, 1, 1.0),
        (2, 4, 1.0),
        (1, 2, 1.0),
        (0, 3, 1.0),
        (4, 3, 1.0),
        (0, 1, 2.0),
      ],
    );

    assert_eq!(graph.number_of_nodes(), 5);
    assert_eq!(graph.number_of_edges(), 8);
    assert_eq!(graph.map_id(), "test");

    let n0_out_edges: HashSet<_> = out_edges(&graph, 0).collect();
    assert_eq!(n0_out_edges, [0, 5, 7].iter().cloned().collect());

    let parallel: Vec<_> = connecting_edges(&graph, 0, 1).collect();
    assert_eq!(parallel, vec![0, 7]);
    assert_eq!(connecting_edges(&graph, 1, 0).count(), 0);

    assert_eq!(graph.edge(3).origin, 2);
    assert_eq!(graph.edge(3).destination, 4);
  }

  #[test]
  fn test_add_edge_checks_nodes() {
    let mut graph = RoadGraph::new("checks");
    let a = graph.add_node(Position { x: 0.0, y: 0.0 });

    assert_eq!(
      graph.add_edge(Edge::new(a, 1, 1.0, 50.0)),
      Err(GraphError::UnknownNode(1))
    );
    assert_eq!(
      graph.add_edge(Edge::new(a, a, -1.0, 50.0)),
      Err(GraphError::InvalidLength(-1.0))
    );
    assert_eq!(
      graph.add_edge(Edge::new(a, a, 1.0, -30.0)),
      Err(GraphError::InvalidSpeed(-30.0))
    );
    assert_eq!(graph.add_edge(Edge::new(a, a, 0.0, 50.0)), Ok(0));
    assert_eq!(graph.add_edge(Edge::new(a, a, 0.0, 0.0)), Ok(1));
  }

  #[test]
  fn test_maximum_speed() {
    let mut graph = RoadGraph::new("speeds");
    assert_eq!(graph.maximum_speed(), 0.0);

    let a = graph.add_node(Position { x: 0.0, y: 0.0 });
    let b = graph.add_node(Position { x: 1.0, y: 0.0 });
    graph.add_edge(Edge::new(a, b, 10.0, 30.0)).unwrap();
    graph.add_edge(Edge::new(b, a, 10.0, 110.0)).unwrap();

    assert_eq!(graph.maximum_speed(), 110.0);
  }

  #[test]
  fn test_nearest_node() {
    let graph = graph_from_positions(
      vec![(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0), (2.5, 2.5)],
      vec![],
    );

    assert_eq!(graph.nearest_node(&Position { x: 0.9, y: 1.2 }), Some(0));
    assert_eq!(graph.nearest_node(&Position { x: 2.4, y: 2.4 }), Some(4));
    assert_eq!(graph.nearest_node(&Position { x: 3.5, y: 0.0 }), Some(3));
    assert_eq!(RoadGraph::new("empty").nearest_node(&Position { x: 0.0, y: 0.0 }), None);
  }
}
