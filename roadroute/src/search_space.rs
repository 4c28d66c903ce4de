use crate::error::QueueError;
use crate::graph::*;
use crate::label::{Heuristic, Label, QueueEntry};
use crate::priority_queue::IndexedHeap;

/// State of a single label-setting run: one label per node, addressed by node id, and the queue
/// of discovered but not yet finalized labels.
pub struct SearchSpace {
  labels: Vec<Label>,
  pq: IndexedHeap<QueueEntry>,
  settled: usize,
}

impl SearchSpace {
  pub fn new<G: Located + ?Sized>(graph: &G, destination: NodeId, heuristic: Heuristic) -> Self {
    let num_nodes = graph.number_of_nodes();
    let labels = (0..num_nodes as NodeId)
      .map(|node| Label::with_heuristic(node, heuristic.estimate(graph, node, destination)))
      .collect();

    SearchSpace {
      labels: labels,
      pq: IndexedHeap::with_slots(num_nodes),
      settled: 0,
    }
  }

  pub fn init(&mut self, origin: NodeId) -> Result<(), QueueError> {
    let label = &mut self.labels[origin as usize];
    label.set_cost(0.0);
    self.pq.insert(label.entry())
  }

  pub fn label(&self, node: NodeId) -> &Label {
    &self.labels[node as usize]
  }

  pub fn settled_nodes(&self) -> usize {
    self.settled
  }

  /// Finalizes the label with the lowest priority and returns its node. Returns `None` once the
  /// queue is exhausted.
  pub fn settle_next(&mut self) -> Option<NodeId> {
    let next = *self.pq.peek()?;
    if self.labels[next.node as usize].is_finalized() {
      return None;
    }

    let entry = self.pq.pop()?;
    self.labels[entry.node as usize].mark_finalized();
    self.settled += 1;
    Some(entry.node)
  }

  /// Relaxes all allowed edges leaving a settled `node`.
  pub fn relax<G, W>(&mut self, graph: G, weighting: &W, node: NodeId) -> Result<(), QueueError>
  where
    G: Copy + IntoEdges + EdgeAccess,
    W: Weighting + ?Sized,
  {
    let cost = self.labels[node as usize].cost();

    for edge_id in out_edges(graph, node) {
      let edge = graph.edge(edge_id);
      if !weighting.is_allowed(edge) {
        continue;
      }

      let target = &mut self.labels[edge.destination as usize];
      if target.is_finalized() {
        continue;
      }

      let path_cost = cost + weighting.cost(edge);
      if path_cost < target.cost() {
        // Already discovered, the queue has no decrease-key
        if target.predecessor().is_some() {
          self.pq.remove(edge.destination as usize);
        }
        target.set_cost(path_cost);
        target.set_predecessor(edge_id);
        self.pq.insert(target.entry())?;
      }
    }
    Ok(())
  }

  /// Edges leading from the origin to `node`, in routing order.
  pub fn unwind<G: EdgeAccess + ?Sized>(&self, graph: &G, node: NodeId) -> Vec<EdgeId> {
    let mut result: Vec<EdgeId> = Vec::new();

    let mut current_node = node;
    while let Some(edge_id) = self.labels[current_node as usize].predecessor() {
      result.push(edge_id);
      current_node = graph.edge(edge_id).origin;
      if result.len() > self.labels.len() {
        break;
      }
    }
    // Need to reverse the list to get edges in the routing order
    result.reverse();
    result
  }
}
