use eframe::egui::Pos2;
use tracing::debug;

use super::{NodeId, Ripple, Simulation};

/// What a successful click changed. The ids listed here carry a highlight that the caller
/// is expected to revert later.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickOutcome {
    pub hit: NodeId,
    pub offspring: Option<NodeId>,
    pub neighbors: Vec<NodeId>,
}

impl Simulation {
    pub fn pointer_moved(&mut self, position: Pos2) {
        self.pointer = Some(position);
    }

    /// Nearest node whose planar distance to `point` is below the click radius. Depth is ignored.
    pub fn hit_test(&self, point: Pos2) -> Option<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let distance = node.planar_distance(point);
                (distance < self.tuning.click_radius).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// Reproduces the clicked node, starts the ripple and highlights the node together with
    /// everything linked to it. A click that misses every node changes nothing.
    pub fn click(&mut self, point: Pos2) -> Option<ClickOutcome> {
        let hit_index = self.hit_test(point)?;
        let hit = self.nodes[hit_index].id;

        let offspring = self.reproduce(hit);

        let hit_node = &mut self.nodes[hit_index];
        hit_node.ripple = 1.0;
        hit_node.highlight = true;
        let center = hit_node.screen_pos();
        self.ripple = Some(Ripple::at(center));

        let link_distance_sq = self.tuning.link_distance_sq();
        let origin = self.nodes[hit_index].clone();
        let mut neighbors = Vec::new();
        for (index, node) in self.nodes.iter_mut().enumerate() {
            if index == hit_index {
                continue;
            }
            if node.distance_sq_3d(&origin) < link_distance_sq {
                node.highlight = true;
                neighbors.push(node.id);
            }
        }

        debug!(
            node = hit.0,
            reproduced = offspring.is_some(),
            neighbors = neighbors.len(),
            population = self.nodes.len(),
            "node clicked"
        );

        Some(ClickOutcome {
            hit,
            offspring,
            neighbors,
        })
    }
}
