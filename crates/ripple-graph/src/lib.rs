//! Graph model for the ripple-spreading path solver.
//!
//! This crate defines the [`Topology`] trait, the read-only adjacency view
//! through which the simulation engine sees its input, along with the
//! concrete [`Graph`] backend, its [`GraphBuilder`], and the
//! [`propagation_speed`] estimator.
//!
//! Graphs are validated once at construction: every weight must be finite
//! and strictly positive. After that they are immutable for the lifetime of
//! any simulation that borrows them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod demo;
pub mod error;
pub mod graph;
pub mod link;
pub mod speed;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use demo::{demo_graph, DEMO_DESTINATION, DEMO_SOURCE};
pub use error::GraphError;
pub use graph::{Graph, GraphBuilder};
pub use link::Link;
pub use speed::propagation_speed;
pub use topology::Topology;
