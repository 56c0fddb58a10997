//! Dominance predicate and two-stage admissibility filter.
//!
//! Every arrival is judged on two objectives to minimise: path length and
//! colour usage. Arrivals that reach the same node in the same tick are
//! first filtered against each other, then the survivors are filtered
//! against everything already admitted at that node.

use ripple_arena::{Arrival, RippleStore};
use ripple_core::{ColorSet, RippleId};

/// How the colour objective is compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DominanceRule {
    /// Compare colour *sets* by inclusion: `a` is dominated by `b` iff
    /// `(len_a > len_b ∧ C_a ⊇ C_b) ∨ (len_a ≥ len_b ∧ C_a ⊋ C_b)`.
    ///
    /// Two partial paths with incomparable colour sets never prune each
    /// other, so a longer path survives when its colours might still
    /// combine better with the remaining edges.
    #[default]
    ColorSubset,
    /// Compare colour *counts*: `a` is dominated by `b` iff
    /// `(len_a > len_b ∧ |C_a| ≥ |C_b|) ∨ (len_a ≥ len_b ∧ |C_a| > |C_b|)`.
    ///
    /// Prunes more, at the price of discarding paths whose specific
    /// colours would have kept a later extension within budget.
    ColorCount,
}

/// The objective pair of one arrival or ripple.
#[derive(Clone, Copy, Debug)]
pub struct Objectives<'a> {
    /// Cumulative edge weight.
    pub length: f64,
    /// Colours used so far.
    pub colors: &'a ColorSet,
}

impl<'a> Objectives<'a> {
    /// Pair a length with a colour set.
    pub fn new(length: f64, colors: &'a ColorSet) -> Self {
        Self { length, colors }
    }
}

/// Whether `a` is dominated by `b` under `rule`.
///
/// At least one strict improvement is required, so equal objectives never
/// dominate each other and duplicates may coexist.
///
/// # Examples
///
/// ```
/// use ripple_core::{Color, ColorSet};
/// use ripple_engine::dominance::{dominated, DominanceRule, Objectives};
///
/// let red: ColorSet = [Color(1)].into_iter().collect();
/// let red_blue: ColorSet = [Color(1), Color(2)].into_iter().collect();
/// let a = Objectives::new(5.0, &red_blue);
/// let b = Objectives::new(3.0, &red);
/// assert!(dominated(DominanceRule::ColorSubset, a, b));
/// assert!(!dominated(DominanceRule::ColorSubset, b, a));
/// ```
pub fn dominated(rule: DominanceRule, a: Objectives<'_>, b: Objectives<'_>) -> bool {
    match rule {
        DominanceRule::ColorSubset => {
            (a.length > b.length && a.colors.is_superset(b.colors))
                || (a.length >= b.length && a.colors.is_strict_superset(b.colors))
        }
        DominanceRule::ColorCount => {
            let (ca, cb) = (a.colors.len(), b.colors.len());
            (a.length > b.length && ca >= cb) || (a.length >= b.length && ca > cb)
        }
    }
}

/// Outcome of [`select_admissible`] for one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Admissible {
    /// Arrivals to instantiate, in discovery order.
    pub admitted: Vec<Arrival>,
    /// Arrivals dominated by another arrival of the same batch.
    pub pruned_in_batch: usize,
    /// Batch survivors dominated by a ripple already in the frontier.
    pub pruned_by_history: usize,
}

/// Filter one node's arrivals for this tick.
///
/// 1. Drop every arrival dominated by another arrival of the batch. Each
///    arrival is compared with every other one, including arrivals that are
///    themselves dominated, so the result does not depend on batch order.
/// 2. Drop every survivor dominated by a ripple listed in `history`.
///
/// The frontier is never re-pruned: ripples already in `history` stay
/// admitted even if a survivor dominates them.
pub fn select_admissible(
    rule: DominanceRule,
    batch: Vec<Arrival>,
    history: &[RippleId],
    store: &RippleStore,
) -> Admissible {
    let keep: Vec<bool> = batch
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let oa = Objectives::new(a.objective, &a.colors);
            !batch.iter().enumerate().any(|(j, b)| {
                i != j && dominated(rule, oa, Objectives::new(b.objective, &b.colors))
            })
        })
        .collect();

    let mut result = Admissible::default();
    for (arrival, kept) in batch.into_iter().zip(keep) {
        if !kept {
            result.pruned_in_batch += 1;
            continue;
        }
        let oa = Objectives::new(arrival.objective, &arrival.colors);
        let beaten = history.iter().filter_map(|&id| store.get(id)).any(|r| {
            dominated(rule, oa, Objectives::new(r.objective(), r.colors()))
        });
        if beaten {
            result.pruned_by_history += 1;
        } else {
            result.admitted.push(arrival);
        }
    }
    result
}
