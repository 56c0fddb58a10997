//! Index-addressed ripple storage for the ripple-spreading path solver.
//!
//! All simulation state that mutates during a run lives here:
//!
//! ```text
//! RippleStore
//! ├── Vec<Ripple>        (arena; RippleId = index, never reused)
//! │   └── parent: Option<RippleId>   (path = parent chain)
//! ├── active: Vec<RippleId>          (sweep order = admission order)
//! └── Frontier                       (NodeId → [RippleId], append-only)
//! ```
//!
//! Ripples reference their ancestors by id rather than by pointer, so the
//! arena can grow freely while any number of records share path prefixes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod ripple;
pub mod store;

pub use error::ArenaError;
pub use frontier::Frontier;
pub use ripple::{Arrival, Ripple};
pub use store::RippleStore;
