//! Graph data structures.
//!
//! [`RoadGraph`] allows growing a road network by adding nodes and edges. It keeps an R-tree over
//! node positions for snapping coordinates to nodes.

mod road_graph;

pub use road_graph::*;
