use eframe::egui::{Vec2, vec2};
use rand::Rng;
use tracing::{debug, info};

use super::{NetworkTuning, Node, NodeId, Simulation, Viewport};

/// Node count the viewport should carry: one node per `area_per_node` px², kept within
/// `[min_nodes, max_nodes]`.
pub fn target_population(viewport: Viewport, tuning: &NetworkTuning) -> usize {
    let by_area = (viewport.area() / tuning.area_per_node).floor() as usize;
    by_area.clamp(tuning.min_nodes, tuning.max_nodes)
}

impl Simulation {
    /// Fits the store to a (possibly new) viewport.
    ///
    /// The first call seeds the population. Later calls rescale existing positions by the
    /// viewport ratio so the layout survives the resize, then grow with fresh nodes or truncate
    /// the newest ones until the target is met.
    pub fn set_target_population(&mut self, viewport: Viewport) {
        let target = target_population(viewport, &self.tuning);
        let previous = self.viewport;
        self.viewport = viewport;

        if self.nodes.is_empty() {
            self.nodes.reserve(target);
            for _ in 0..target {
                let node = self.spawn_random();
                self.nodes.push(node);
            }
            info!(
                nodes = target,
                width = viewport.width(),
                height = viewport.height(),
                "seeded particle network"
            );
            return;
        }

        let scale = vec2(
            viewport.width() / previous.width(),
            viewport.height() / previous.height(),
        );
        if scale != Vec2::splat(1.0) {
            for node in &mut self.nodes {
                node.position.x *= scale.x;
                node.position.y *= scale.y;
            }
        }

        let before = self.nodes.len();
        if before < target {
            self.nodes.reserve(target - before);
            while self.nodes.len() < target {
                let node = self.spawn_random();
                self.nodes.push(node);
            }
        } else if before > target {
            self.nodes.truncate(target);
        }

        debug!(
            before,
            after = self.nodes.len(),
            scale_x = scale.x,
            scale_y = scale.y,
            "resized particle network"
        );
    }

    /// Appends a clone of `source` with a fresh velocity. Returns the new id, or `None` when the
    /// population ceiling is reached or `source` is gone.
    pub fn reproduce(&mut self, source: NodeId) -> Option<NodeId> {
        if self.nodes.len() >= self.tuning.population_ceiling {
            debug!(
                ceiling = self.tuning.population_ceiling,
                "population ceiling reached, skipping reproduction"
            );
            return None;
        }

        let (position, depth) = {
            let parent = self.node(source)?;
            (parent.position, parent.depth)
        };
        let half = self.tuning.clone_speed * 0.5;
        let velocity = vec2(
            self.rng.gen_range(-half..=half),
            self.rng.gen_range(-half..=half),
        );
        let depth_velocity = self.rng.gen_range(-half..=half);
        let id = self.allocate_id();

        self.nodes.push(Node {
            id,
            position,
            depth,
            velocity,
            depth_velocity,
            ripple: 1.0,
            highlight: true,
        });
        Some(id)
    }

    fn spawn_random(&mut self) -> Node {
        let extent = self.tuning.depth_extent;
        let planar = self.tuning.spawn_speed * 0.5;
        let depth_speed = self.tuning.spawn_depth_speed * 0.5;
        let position = vec2(
            self.rng.gen_range(0.0..self.viewport.width()),
            self.rng.gen_range(0.0..self.viewport.height()),
        );
        let velocity = vec2(
            self.rng.gen_range(-planar..=planar),
            self.rng.gen_range(-planar..=planar),
        );
        let depth = self.rng.gen_range(-extent..=extent);
        let depth_velocity = self.rng.gen_range(-depth_speed..=depth_speed);
        let id = self.allocate_id();

        Node {
            id,
            position,
            depth,
            velocity,
            depth_velocity,
            ripple: 0.0,
            highlight: false,
        }
    }
}
