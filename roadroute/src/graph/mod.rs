//! Set of traits for defining a graph abstraction.
//!
//! The module contains traits for defining a directed multi-graph whose edges live in a
//! graph-wide registry and are referred to by [`EdgeId`].
//!
mod edge;
mod graph;
mod spatial;
mod weighted;

pub use edge::*;
pub use graph::*;
pub use spatial::*;
pub use weighted::*;
