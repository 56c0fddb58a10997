//! Test utilities for ripple development.
//!
//! Provides the demonstration graph, deterministic graph generators
//! ([`fixtures`]) and an exhaustive reference solver ([`reference`]) that
//! engine results can be checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{
    demo_graph, grid_graph, line_graph, random_graph, RandomGraphParams, DEMO_DESTINATION,
    DEMO_SOURCE,
};
pub use reference::{path_cost, shortest_within_budget, ReferencePath};
