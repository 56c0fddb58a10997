//! Ripple records and admission requests.
//!
//! A [`Ripple`] is one partial path expanding outward from its epicenter.
//! Records never store their full node sequence: they point at the ripple
//! they were born from, and the path is rebuilt by walking that chain
//! through the arena.

use ripple_core::{ColorSet, NodeId, RippleId, TickId};

/// State of one admitted ripple.
///
/// Everything except `radius` and `swept` is fixed at admission. The
/// radius grows by the propagation speed on every tick the ripple is
/// active.
#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub(crate) epicenter: NodeId,
    pub(crate) radius: f64,
    pub(crate) swept: f64,
    pub(crate) objective: f64,
    pub(crate) colors: ColorSet,
    pub(crate) parent: Option<RippleId>,
    pub(crate) hops: u32,
    pub(crate) admitted_at: TickId,
}

impl Ripple {
    /// The node this ripple is spreading from.
    pub fn epicenter(&self) -> NodeId {
        self.epicenter
    }

    /// Distance travelled since becoming active at the epicenter.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance out to which the epicenter's links have already been
    /// checked for crossings.
    ///
    /// Zero for a ripple that has not been through a tick yet, otherwise
    /// equal to [`radius()`](Self::radius). A tick checks the interval
    /// `(swept, radius + v]`, so consecutive ticks cover every distance
    /// exactly once however the radius rounds.
    pub fn swept(&self) -> f64 {
        self.swept
    }

    /// Cumulative edge weight from the source to the epicenter.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Distinct colours used from the source to the epicenter.
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// The ripple whose wavefront created this one. `None` for the seed.
    pub fn parent(&self) -> Option<RippleId> {
        self.parent
    }

    /// Number of edges on the path, i.e. path length minus one.
    pub fn hops(&self) -> u32 {
        self.hops
    }

    /// Tick at which this ripple was admitted.
    pub fn admitted_at(&self) -> TickId {
        self.admitted_at
    }
}

/// A wavefront arrival that may become a new ripple.
///
/// Produced by the discovery phase, filtered by dominance, and finally
/// turned into a [`Ripple`] by
/// [`RippleStore::admit`](crate::RippleStore::admit).
#[derive(Clone, Debug, PartialEq)]
pub struct Arrival {
    /// The ripple whose wavefront reached `node`.
    pub parent: RippleId,
    /// The node reached; the new ripple's epicenter.
    pub node: NodeId,
    /// Phase offset past the crossed edge (`radius - weight`).
    pub radius: f64,
    /// Parent objective plus the crossed edge's weight.
    pub objective: f64,
    /// Parent colours plus the crossed edge's colour.
    pub colors: ColorSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::Color;

    #[test]
    fn accessors_expose_fields() {
        let r = Ripple {
            epicenter: NodeId(4),
            radius: 0.5,
            swept: 0.5,
            objective: 3.0,
            colors: [Color(1), Color(2)].into_iter().collect(),
            parent: Some(RippleId(1)),
            hops: 3,
            admitted_at: TickId(3),
        };
        assert_eq!(r.epicenter(), NodeId(4));
        assert_eq!(r.radius(), 0.5);
        assert_eq!(r.swept(), 0.5);
        assert_eq!(r.objective(), 3.0);
        assert_eq!(r.colors().len(), 2);
        assert_eq!(r.parent(), Some(RippleId(1)));
        assert_eq!(r.hops(), 3);
        assert_eq!(r.admitted_at(), TickId(3));
    }
}
