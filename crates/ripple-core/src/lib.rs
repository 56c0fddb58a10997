//! Core types for the ripple-spreading path solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers shared by every other crate in the workspace (nodes,
//! colours, ripples, ticks) and the [`ColorSet`] carried by each ripple.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod id;

pub use color::ColorSet;
pub use id::{Color, NodeId, RippleId, TickId};
