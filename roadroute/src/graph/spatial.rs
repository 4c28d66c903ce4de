use crate::graph::{GraphBase, NodeId};
use crate::spatial::Position;

/// Defines how to obtain the position of a graph node
pub trait Located: GraphBase {
  fn position(&self, node: NodeId) -> Position;
}

impl<'a, G: Located + ?Sized> Located for &'a G {
  fn position(&self, node: NodeId) -> Position {
    (*self).position(node)
  }
}
