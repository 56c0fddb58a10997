//! Discovery phase: find which edges each active ripple crosses this tick.
//!
//! Discovery only reads the graph and the ripple store, so independent
//! ripples can be swept concurrently. Nothing is advanced or admitted here;
//! the simulation collects every sweep of the tick first and commits the
//! tick afterwards.

use rayon::prelude::*;
use ripple_arena::{Arrival, RippleStore};
use ripple_core::RippleId;
use ripple_graph::Topology;
use smallvec::SmallVec;

/// What one active ripple produces in one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    /// The swept ripple.
    pub ripple: RippleId,
    /// Feasible wavefront arrivals, in link order.
    pub arrivals: SmallVec<[Arrival; 4]>,
    /// Whether the advanced radius reaches every outgoing edge, so no
    /// further arrival is possible and the ripple should retire.
    pub exhausted: bool,
}

/// Read-only inputs shared by every sweep of a tick.
#[derive(Clone, Copy)]
pub struct SweepContext<'a> {
    /// The graph being searched.
    pub topology: &'a dyn Topology,
    /// Ripple records as they stood before this tick.
    pub store: &'a RippleStore,
    /// Propagation speed `v`: how far every radius grows this tick.
    pub speed: f64,
    /// Colour budget `k`.
    pub max_colors: usize,
}

/// Sweep one ripple over the tick that grows its radius to `radius + v`.
///
/// An edge `epicenter -> node` produces an arrival when
/// - the wavefront crosses it during this tick: `swept < weight <= radius + v`,
/// - `node` is not already on the ripple's path,
/// - adding its colour keeps the colour count within `k`.
///
/// The lower bound is the ripple's own [`swept`](ripple_arena::Ripple::swept)
/// distance rather than `radius + v - v`, so rounding in the accumulated
/// radius can neither skip an edge nor report it twice.
///
/// The ripple is exhausted when no outgoing edge is longer than the
/// advanced radius.
pub fn sweep(ctx: &SweepContext<'_>, id: RippleId) -> Sweep {
    let mut arrivals = SmallVec::new();
    let Some(ripple) = ctx.store.get(id) else {
        return Sweep {
            ripple: id,
            arrivals,
            exhausted: true,
        };
    };

    let floor = ripple.swept();
    let reach = ripple.radius() + ctx.speed;
    let mut exhausted = true;
    for link in ctx.topology.links(ripple.epicenter()) {
        let crossed = floor < link.weight && link.weight <= reach;
        if crossed
            && ripple.colors().len_with(link.color) <= ctx.max_colors
            && !ctx.store.path_contains(id, link.to)
        {
            arrivals.push(Arrival {
                parent: id,
                node: link.to,
                radius: reach - link.weight,
                objective: ripple.objective() + link.weight,
                colors: ripple.colors().with(link.color),
            });
        }
        if reach < link.weight {
            exhausted = false;
        }
    }

    Sweep {
        ripple: id,
        arrivals,
        exhausted,
    }
}

/// Sweep every active ripple, in active-set order.
///
/// With a pool the sweeps run concurrently; `collect` on an indexed
/// parallel iterator preserves input order, so the result is identical to
/// the sequential sweep.
pub fn discover(ctx: &SweepContext<'_>, pool: Option<&rayon::ThreadPool>) -> Vec<Sweep> {
    let active = ctx.store.active();
    match pool {
        None => active.iter().map(|&id| sweep(ctx, id)).collect(),
        Some(pool) => pool.install(|| active.par_iter().map(|&id| sweep(ctx, id)).collect()),
    }
}
