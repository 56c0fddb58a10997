//! The ripple arena: every ripple record of a run, the active set, and the
//! per-node frontier.
//!
//! Records are addressed by [`RippleId`] (their index) and are never
//! removed during a run. Retiring a ripple only drops it from the active
//! set; its record stays available for path reconstruction and for
//! dominance checks against the frontier.

use ripple_core::{ColorSet, NodeId, RippleId, TickId};

use crate::error::ArenaError;
use crate::frontier::Frontier;
use crate::ripple::{Arrival, Ripple};

/// Arena of ripple records plus the active set and frontier.
///
/// The active set keeps admission order, which is the order in which the
/// engine sweeps ripples each tick.
#[derive(Clone, Debug)]
pub struct RippleStore {
    ripples: Vec<Ripple>,
    active: Vec<RippleId>,
    frontier: Frontier,
    limit: usize,
}

impl Default for RippleStore {
    fn default() -> Self {
        Self {
            ripples: Vec::new(),
            active: Vec::new(),
            frontier: Frontier::default(),
            limit: Self::MAX_RIPPLES,
        }
    }
}

impl RippleStore {
    /// Largest number of ripples a store can address.
    pub const MAX_RIPPLES: usize = u32::MAX as usize;

    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store that holds at most `limit` ripples, seed included.
    ///
    /// `limit` is clamped to `[1, MAX_RIPPLES]`.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.clamp(1, Self::MAX_RIPPLES),
            ..Self::default()
        }
    }

    /// Maximum number of ripples this store accepts.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Check that `additional` more ripples fit.
    ///
    /// # Errors
    ///
    /// [`ArenaError::CapacityExceeded`] if they do not. Nothing is modified.
    pub fn ensure_capacity(&self, additional: usize) -> Result<(), ArenaError> {
        match self.ripples.len().checked_add(additional) {
            Some(total) if total <= self.limit => Ok(()),
            _ => Err(ArenaError::CapacityExceeded {
                len: self.ripples.len(),
            }),
        }
    }

    /// Discard all state and plant the initial ripple at `source`.
    ///
    /// The seed has zero radius, zero objective and no colours, is active,
    /// and is the first entry of the source's frontier.
    pub fn seed(&mut self, source: NodeId) -> RippleId {
        self.ripples.clear();
        self.active.clear();
        self.frontier.clear();

        let id = RippleId(0);
        self.ripples.push(Ripple {
            epicenter: source,
            radius: 0.0,
            swept: 0.0,
            objective: 0.0,
            colors: ColorSet::new(),
            parent: None,
            hops: 0,
            admitted_at: TickId(0),
        });
        self.active.push(id);
        self.frontier.push(source, id);
        id
    }

    /// Turn an arrival into a ripple: store it, activate it, and append it
    /// to the frontier of its node.
    ///
    /// The new ripple starts with nothing swept, so its first tick checks
    /// every link out to `arrival.radius + v`.
    ///
    /// # Errors
    ///
    /// [`ArenaError::UnknownRipple`] if the arrival's parent is not stored,
    /// [`ArenaError::CapacityExceeded`] if no further id can be assigned.
    pub fn admit(&mut self, arrival: Arrival, tick: TickId) -> Result<RippleId, ArenaError> {
        let parent = self
            .get(arrival.parent)
            .ok_or(ArenaError::UnknownRipple { id: arrival.parent })?;
        let hops = parent.hops + 1;
        self.ensure_capacity(1)?;
        let id = u32::try_from(self.ripples.len())
            .map(RippleId)
            .map_err(|_| ArenaError::CapacityExceeded {
                len: self.ripples.len(),
            })?;

        self.ripples.push(Ripple {
            epicenter: arrival.node,
            radius: arrival.radius,
            swept: 0.0,
            objective: arrival.objective,
            colors: arrival.colors,
            parent: Some(arrival.parent),
            hops,
            admitted_at: tick,
        });
        self.active.push(id);
        self.frontier.push(arrival.node, id);
        Ok(id)
    }

    /// Grow the radius of every active ripple by `distance` and mark the
    /// links out to the new radius as swept.
    pub fn advance_active(&mut self, distance: f64) {
        for id in &self.active {
            let ripple = &mut self.ripples[id.index()];
            ripple.radius += distance;
            ripple.swept = ripple.radius;
        }
    }

    /// Remove `retired` from the active set.
    ///
    /// `retired` must list active ripples in active-set order (a sweep of
    /// [`active()`](Self::active) naturally produces that). Records and
    /// frontier entries are kept.
    pub fn retire(&mut self, retired: &[RippleId]) {
        if retired.is_empty() {
            return;
        }
        let mut pending = retired.iter().peekable();
        self.active.retain(|id| {
            if pending.peek() == Some(&id) {
                pending.next();
                false
            } else {
                true
            }
        });
        debug_assert!(
            pending.peek().is_none(),
            "retire() given ids not in active-set order"
        );
    }

    /// The record for `id`, if stored.
    pub fn get(&self, id: RippleId) -> Option<&Ripple> {
        self.ripples.get(id.index())
    }

    /// Rebuild the node sequence from the source to `id`'s epicenter.
    ///
    /// Returns an empty path for unknown ids.
    pub fn path(&self, id: RippleId) -> Vec<NodeId> {
        let Some(ripple) = self.get(id) else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(ripple.hops as usize + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let r = &self.ripples[current.index()];
            path.push(r.epicenter);
            cursor = r.parent;
        }
        path.reverse();
        path
    }

    /// Whether `node` appears anywhere on `id`'s path.
    pub fn path_contains(&self, id: RippleId, node: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(r) = self.get(current) else {
                return false;
            };
            if r.epicenter == node {
                return true;
            }
            cursor = r.parent;
        }
        false
    }

    /// Active ripples in sweep order.
    pub fn active(&self) -> &[RippleId] {
        &self.active
    }

    /// The per-node admission history.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Number of ripples ever admitted (active or retired).
    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    /// Whether the store has not been seeded.
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Iterate every stored ripple with its id, in admission order.
    pub fn iter(&self) -> impl Iterator<Item = (RippleId, &Ripple)> + '_ {
        self.ripples
            .iter()
            .enumerate()
            .map(|(i, r)| (RippleId(i as u32), r))
    }

    /// Approximate heap usage of records and the active set, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.ripples.capacity() * std::mem::size_of::<Ripple>()
            + self.active.capacity() * std::mem::size_of::<RippleId>()
    }
}
