//! Least-cost routes over directed road networks.
//!
//! The crate provides a label-setting search ([`route::dijkstra`], [`route::astar`]) over any
//! graph implementing the traits in [`graph`], and the [`path::Path`] model used to describe and
//! build routes.

pub mod config;
pub mod error;
pub mod graph;
pub mod graph_impl;
pub mod inspector;
pub mod label;
pub mod path;
pub mod priority_queue;
pub mod route;
pub mod spatial;

mod search_space;

#[cfg(test)]
mod test_utils;
