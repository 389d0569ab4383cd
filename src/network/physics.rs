use eframe::egui::{Pos2, Vec2, vec2};

use super::{NetworkTuning, Node, Simulation, Viewport};

impl Simulation {
    /// Advances every node by one frame.
    pub fn step_physics(&mut self) {
        let viewport = self.viewport;
        let pointer = self.pointer;
        let tuning = self.tuning;
        for node in &mut self.nodes {
            step_node(node, viewport, pointer, &tuning);
        }
    }
}

/// Integrate, wrap, reflect depth, push away from the pointer, then damp.
/// Repulsion reads the wrapped position and its impulse is damped in the same step.
pub(super) fn step_node(
    node: &mut Node,
    viewport: Viewport,
    pointer: Option<Pos2>,
    tuning: &NetworkTuning,
) {
    node.position += node.velocity;
    node.depth += node.depth_velocity;

    node.position.x = wrap(node.position.x, viewport.width());
    node.position.y = wrap(node.position.y, viewport.height());

    let extent = tuning.depth_extent;
    if node.depth < -extent {
        node.depth = extent;
    } else if node.depth > extent {
        node.depth = -extent;
    }

    if let Some(pointer) = pointer {
        node.velocity += repulsion(node.position, pointer, tuning);
    }

    node.velocity *= tuning.damping;
    node.depth_velocity *= tuning.damping;
}

/// Impulse pushing a node at `position` away from `pointer`.
/// Zero inside the dead zone and beyond the pointer radius.
pub(super) fn repulsion(position: Vec2, pointer: Pos2, tuning: &NetworkTuning) -> Vec2 {
    let toward = vec2(pointer.x - position.x, pointer.y - position.y);
    let distance = toward.length();
    if distance <= tuning.pointer_dead_zone || distance >= tuning.pointer_radius {
        return Vec2::ZERO;
    }

    let force = (tuning.pointer_radius - distance) / tuning.pointer_radius;
    -(toward / distance) * force * tuning.pointer_strength
}

/// Teleports a coordinate that left `[0, extent)` to the opposite edge.
fn wrap(value: f32, extent: f32) -> f32 {
    if (0.0..extent).contains(&value) {
        return value;
    }

    let wrapped = value.rem_euclid(extent);
    if wrapped.is_finite() && wrapped < extent {
        wrapped
    } else {
        0.0
    }
}
