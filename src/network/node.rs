use eframe::egui::{Pos2, Vec2, pos2};

/// Store-assigned identity. Ids only ever grow, and the store only appends or truncates,
/// so the node list stays sorted by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

#[derive(Clone, Debug)]
pub struct Node {
    /// Only the store assigns ids; keeping this read-only outside it keeps the list sorted.
    pub(super) id: NodeId,
    pub position: Vec2,
    pub depth: f32,
    pub velocity: Vec2,
    pub depth_velocity: f32,
    /// Spawn flash amplitude, decays while rendering.
    pub ripple: f32,
    pub highlight: bool,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// A motionless, unhighlighted node outside any store.
    #[cfg(test)]
    pub(crate) fn at_rest(position: Vec2, depth: f32) -> Self {
        Self {
            id: NodeId(0),
            position,
            depth,
            velocity: Vec2::ZERO,
            depth_velocity: 0.0,
            ripple: 0.0,
            highlight: false,
        }
    }

    pub fn screen_pos(&self) -> Pos2 {
        pos2(self.position.x, self.position.y)
    }

    pub fn planar_distance(&self, point: Pos2) -> f32 {
        self.screen_pos().distance(point)
    }

    pub fn distance_sq_3d(&self, other: &Node) -> f32 {
        let delta = self.position - other.position;
        let dz = self.depth - other.depth;
        delta.length_sq() + dz * dz
    }
}

/// The single live click ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center: Pos2,
    pub radius: f32,
    pub alpha: f32,
}

impl Ripple {
    pub fn at(center: Pos2) -> Self {
        Self {
            center,
            radius: 0.0,
            alpha: 1.0,
        }
    }

    /// Grows and fades the ring by one frame. Returns `false` once it has faded out.
    pub fn advance(&mut self, growth: f32, fade: f32) -> bool {
        self.radius += growth;
        self.alpha -= fade;
        self.alpha > 0.0
    }
}

/// Canvas extents in pixels. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            .then_some(Self { width, height })
    }

    pub fn from_size(size: Vec2) -> Option<Self> {
        Self::new(size.x, size.y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
