use crate::graph::NodeId;
use thiserror::Error;

/// Failures while building or combining paths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
  #[error("node {0} is not part of the graph")]
  UnknownNode(NodeId),
  #[error("no edge connects node {from} to node {to}")]
  NoConnectingEdge { from: NodeId, to: NodeId },
  #[error("cannot concatenate an empty list of paths")]
  Empty,
  #[error("cannot concatenate paths from different graphs ({expected} and {found})")]
  DifferentGraphs { expected: String, found: String },
  #[error("cannot concatenate paths that do not form a single path")]
  NotContiguous,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
  #[error("node {0} is not part of the graph")]
  UnknownNode(NodeId),
  #[error("edge length must be a non-negative number, got {0}")]
  InvalidLength(f32),
  #[error("edge speed must be a non-negative number, got {0}")]
  InvalidSpeed(f32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
  #[error("slot {0} is already queued")]
  Duplicate(usize),
}

/// Failures of a search run. A missing route is not an error, see [`crate::route::Status`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
  #[error("node {0} is not part of the graph")]
  UnknownNode(NodeId),
  #[error("reconstructed path from {origin} to {destination} is not a valid path")]
  CorruptedPath { origin: NodeId, destination: NodeId },
  #[error(transparent)]
  Queue(#[from] QueueError),
}
