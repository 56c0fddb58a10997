//! Result selection over the destination frontier.

use std::fmt;

use ripple_arena::RippleStore;
use ripple_core::{ColorSet, NodeId, RippleId, TickId};

/// A path from source to destination that respects the colour budget.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Nodes from source to destination, inclusive.
    pub path: Vec<NodeId>,
    /// Distinct colours used along the path.
    pub colors: ColorSet,
    /// Total edge weight.
    pub length: f64,
    /// The ripple that reached the destination.
    pub ripple: RippleId,
    /// Tick at which that ripple was admitted.
    pub tick: TickId,
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, " (length {}, colors {})", self.length, self.colors)
    }
}

/// How a run ended.
///
/// `Infeasible` is an ordinary answer: no path within the colour budget
/// exists (or none survived dominance pruning).
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A path was found.
    Found(PathResult),
    /// The active set emptied before the destination was reached.
    Infeasible,
}

impl Outcome {
    /// The found path, if any.
    pub fn path(&self) -> Option<&PathResult> {
        match self {
            Self::Found(p) => Some(p),
            Self::Infeasible => None,
        }
    }

    /// Consume the outcome, returning the found path if any.
    pub fn into_path(self) -> Option<PathResult> {
        match self {
            Self::Found(p) => Some(p),
            Self::Infeasible => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Pick the shortest ripple in `destination`'s frontier.
///
/// Among equal lengths the first admitted ripple wins. Returns `None` if
/// the destination has never been reached.
pub fn select_shortest(store: &RippleStore, destination: NodeId) -> Option<PathResult> {
    let mut best: Option<(RippleId, f64)> = None;
    for &id in store.frontier().at(destination) {
        let Some(r) = store.get(id) else { continue };
        if best.is_none_or(|(_, len)| r.objective() < len) {
            best = Some((id, r.objective()));
        }
    }

    let (id, _) = best?;
    let ripple = store.get(id)?;
    Some(PathResult {
        path: store.path(id),
        colors: ripple.colors().clone(),
        length: ripple.objective(),
        ripple: id,
        tick: ripple.admitted_at(),
    })
}
