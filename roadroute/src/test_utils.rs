use crate::graph::*;
use crate::graph_impl::RoadGraph;
use crate::route::SearchObserver;
use crate::spatial::*;

/// Graph with `num_nodes` nodes at the same position and edges `(from, to, length)` at 50 km/h.
pub fn graph_from_edges(num_nodes: usize, edges: Vec<(NodeId, NodeId, f32)>) -> RoadGraph {
  graph_from_segments(
    num_nodes,
    edges
      .into_iter()
      .map(|(from, to, length)| (from, to, length, 50.0))
      .collect(),
  )
}

/// Same as [`graph_from_edges`] with edges `(from, to, length, max_speed)`.
pub fn graph_from_segments(num_nodes: usize, edges: Vec<(NodeId, NodeId, f32, f32)>) -> RoadGraph {
  let mut graph = RoadGraph::new("test");
  for _ in 0..num_nodes {
    graph.add_node(Position { x: 0.0, y: 0.0 });
  }
  for (from, to, length, max_speed) in edges {
    graph
      .add_edge(Edge::new(from, to, length, max_speed))
      .unwrap();
  }
  graph
}

/// Graph with nodes at `(lon, lat)` positions. Edge lengths are 10% longer than the straight line
/// between their nodes, so distance-based estimates stay admissible.
pub fn graph_from_positions(positions: Vec<(f32, f32)>, edges: Vec<(NodeId, NodeId)>) -> RoadGraph {
  let mut graph = RoadGraph::new("test");
  for position in positions {
    graph.add_node(Position::from(position));
  }
  for (from, to) in edges {
    let length = 1.1 * haversine_distance(&graph.position(from), &graph.position(to));
    graph.add_edge(Edge::new(from, to, length, 50.0)).unwrap();
  }
  graph
}

/// `width` x `height` grid of two-way streets about 100 m apart. Node `(x, y)` has id
/// `y * width + x`. Street lengths and speeds vary from block to block.
pub fn grid_graph(width: u32, height: u32) -> RoadGraph {
  let mut graph = RoadGraph::new("grid");
  for y in 0..height {
    for x in 0..width {
      graph.add_node(Position {
        x: 13.35 + 0.0015 * x as f32,
        y: 52.49 + 0.0009 * y as f32,
      });
    }
  }

  for y in 0..height {
    for x in 0..width {
      let id = y * width + x;
      if x + 1 < width {
        add_street(&mut graph, id, id + 1);
      }
      if y + 1 < height {
        add_street(&mut graph, id, id + width);
      }
    }
  }
  graph
}

fn add_street(graph: &mut RoadGraph, from: NodeId, to: NodeId) {
  let straight = haversine_distance(&graph.position(from), &graph.position(to));
  let detour = 1.0 + ((from * 7 + to * 13) % 10) as f32 / 20.0;
  let max_speed = if (from + to) % 3 == 0 { 50.0 } else { 30.0 };
  for (a, b) in &[(from, to), (to, from)] {
    graph
      .add_edge(Edge::new(*a, *b, straight * detour, max_speed))
      .unwrap();
  }
}

/// Reference costs from `origin` to every node, computed with Bellman-Ford.
pub fn reference_costs<G, W>(graph: G, weighting: &W, origin: NodeId) -> Vec<f64>
where
  G: Copy + EdgeAccess,
  W: Weighting,
{
  let mut costs = vec![f64::INFINITY; graph.number_of_nodes()];
  costs[origin as usize] = 0.0;

  for _ in 0..graph.number_of_nodes() {
    let mut changed = false;
    for id in 0..graph.number_of_edges() {
      let edge = graph.edge(id as EdgeId);
      if !weighting.is_allowed(edge) {
        continue;
      }
      let candidate = costs[edge.origin as usize] + weighting.cost(edge);
      if candidate < costs[edge.destination as usize] {
        costs[edge.destination as usize] = candidate;
        changed = true;
      }
    }
    if !changed {
      break;
    }
  }
  costs
}

/// Records notifications in the order they are received.
#[derive(Default)]
pub struct Recorder {
  pub settled: Vec<NodeId>,
  pub reached: Vec<NodeId>,
}

impl SearchObserver for Recorder {
  fn node_settled(&mut self, node: NodeId) {
    self.settled.push(node);
  }

  fn destination_reached(&mut self, node: NodeId) {
    self.reached.push(node);
  }
}
