use eframe::egui::Stroke;

use crate::network::{NetworkTuning, Node, Simulation};

use super::style::{node_opacity, node_radius, with_opacity};
use super::{Palette, Primitive, Surface};

const EDGE_WIDTH: f32 = 0.8;
const RIPPLE_INNER_WIDTH: f32 = 3.0;
const RIPPLE_OUTER_WIDTH: f32 = 1.0;
const NODE_FLASH_DECAY: f32 = 0.05;
/// (radius multiplier, opacity) of the halo rings behind a highlighted node.
const GLOW_LAYERS: [(f32, f32); 3] = [(3.4, 0.05), (2.4, 0.12), (1.6, 0.24)];

/// A link between `nodes[a]` and `nodes[b]`, always with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEdge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub nodes: usize,
    pub edges: usize,
    pub ripple_active: bool,
}

/// Fills `edges` with every unordered pair closer than the link distance in 3D.
///
/// Each pair is visited once (`i < j`). A planar box test rejects far pairs before the
/// square root; the box half-extent is the link distance itself, so it never drops a real edge.
pub fn proximity_edges(nodes: &[Node], tuning: &NetworkTuning, edges: &mut Vec<ProximityEdge>) {
    edges.clear();
    let link = tuning.link_distance;
    if link <= 0.0 {
        return;
    }
    let link_sq = link * link;

    for (i, first) in nodes.iter().enumerate() {
        for (offset, second) in nodes[i + 1..].iter().enumerate() {
            let dx = first.position.x - second.position.x;
            let dy = first.position.y - second.position.y;
            if dx.abs() > link || dy.abs() > link {
                continue;
            }

            let dz = first.depth - second.depth;
            let distance_sq = dx * dx + dy * dy + dz * dz;
            if distance_sq >= link_sq {
                continue;
            }

            let distance = distance_sq.sqrt();
            edges.push(ProximityEdge {
                a: i,
                b: i + 1 + offset,
                distance,
                opacity: (1.0 - distance / link) * tuning.link_opacity,
            });
        }
    }
}

/// Paints one frame: trail fade, ripple, links, then nodes.
///
/// Also advances the ripple and the per-node spawn flash, so it must run exactly once per tick.
pub fn render_frame(
    simulation: &mut Simulation,
    surface: &mut impl Surface,
    palette: &Palette,
    edges: &mut Vec<ProximityEdge>,
) -> FrameStats {
    let tuning = *simulation.tuning();
    surface.fade(tuning.trail_fade);

    let ripple = simulation.advance_ripple();
    if let Some(ripple) = ripple {
        surface.draw(Primitive::Ring {
            center: ripple.center,
            radius: ripple.radius,
            stroke: Stroke::new(
                RIPPLE_INNER_WIDTH,
                with_opacity(palette.accent, ripple.alpha * 0.8),
            ),
        });
        surface.draw(Primitive::Ring {
            center: ripple.center,
            radius: ripple.radius + tuning.ripple_ring_gap,
            stroke: Stroke::new(
                RIPPLE_OUTER_WIDTH,
                with_opacity(palette.accent, ripple.alpha * 0.4),
            ),
        });
    }

    proximity_edges(simulation.nodes(), &tuning, edges);
    let nodes = simulation.nodes();
    for edge in edges.iter() {
        surface.draw(Primitive::Segment {
            from: nodes[edge.a].screen_pos(),
            to: nodes[edge.b].screen_pos(),
            stroke: Stroke::new(EDGE_WIDTH, with_opacity(palette.accent, edge.opacity)),
        });
    }

    for node in simulation.nodes_mut() {
        let center = node.screen_pos();
        let radius = node_radius(node, tuning.depth_extent);

        if node.highlight {
            for (spread, opacity) in GLOW_LAYERS {
                surface.draw(Primitive::Disc {
                    center,
                    radius: radius * (spread + node.ripple),
                    color: with_opacity(palette.accent, opacity),
                });
            }
        }

        surface.draw(Primitive::Disc {
            center,
            radius,
            color: with_opacity(palette.accent, node_opacity(node, tuning.depth_extent)),
        });

        node.ripple = (node.ripple - NODE_FLASH_DECAY).max(0.0);
    }

    FrameStats {
        nodes: simulation.nodes().len(),
        edges: edges.len(),
        ripple_active: ripple.is_some(),
    }
}
