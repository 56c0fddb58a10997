//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use ripple_core::RippleId;

/// Errors that can occur while admitting ripples to the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena already holds the maximum number of addressable ripples.
    CapacityExceeded {
        /// Number of ripples stored when the admission was attempted.
        len: usize,
    },
    /// A `RippleId` that does not address any stored ripple.
    UnknownRipple {
        /// The unrecognised id.
        id: RippleId,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { len } => {
                write!(f, "ripple arena capacity exceeded at {len} ripples")
            }
            Self::UnknownRipple { id } => write!(f, "unknown ripple: {id}"),
        }
    }
}

impl Error for ArenaError {}
