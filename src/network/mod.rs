//! The particle network: node store, population control, physics and pointer interaction.

mod interaction;
mod node;
mod physics;
mod population;
mod tuning;

use eframe::egui::Pos2;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use interaction::ClickOutcome;
pub use node::{Node, NodeId, Ripple, Viewport};
pub use population::target_population;
pub use tuning::NetworkTuning;

/// All mutable state of one backdrop instance. Owned by exactly one scheduler.
pub struct Simulation {
    nodes: Vec<Node>,
    ripple: Option<Ripple>,
    pointer: Option<Pos2>,
    viewport: Viewport,
    tuning: NetworkTuning,
    next_id: u64,
    rng: StdRng,
}

impl Simulation {
    /// Builds an empty store. Call [`Simulation::set_target_population`] to populate it.
    pub fn new(viewport: Viewport, tuning: NetworkTuning) -> Self {
        Self::with_rng(viewport, tuning, StdRng::from_entropy())
    }

    pub fn with_rng(viewport: Viewport, tuning: NetworkTuning, rng: StdRng) -> Self {
        Self {
            nodes: Vec::new(),
            ripple: None,
            pointer: None,
            viewport,
            tuning: tuning.sanitized(),
            next_id: 0,
            rng,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to node state. Ids stay owned by the store.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn ripple(&self) -> Option<&Ripple> {
        self.ripple.as_ref()
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tuning(&self) -> &NetworkTuning {
        &self.tuning
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    /// Drops the highlight of a node if it is still alive. Nodes truncated by a shrink are ignored.
    pub fn clear_highlight(&mut self, id: NodeId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.nodes[index].highlight = false;
                true
            }
            None => false,
        }
    }

    /// Advances the ripple by one frame and returns the ring to draw, if any survives.
    pub(crate) fn advance_ripple(&mut self) -> Option<Ripple> {
        let mut ripple = self.ripple.take()?;
        if ripple.advance(self.tuning.ripple_growth, self.tuning.ripple_fade) {
            self.ripple = Some(ripple);
            Some(ripple)
        } else {
            None
        }
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.binary_search_by_key(&id, |node| node.id).ok()
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}
