use eframe::egui::Color32;

use crate::network::Node;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub accent: Color32,
    pub background: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color32::from_rgb(59, 130, 246),
            background: Color32::BLACK,
        }
    }
}

impl Palette {
    pub fn from_accent(rgb: [u8; 3]) -> Self {
        Self {
            accent: Color32::from_rgb(rgb[0], rgb[1], rgb[2]),
            ..Self::default()
        }
    }
}

pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let opacity = opacity.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (opacity * 255.0).round() as u8,
    )
}

/// Nearer nodes (larger depth) draw bigger: `1 + depth / 400`.
pub fn perspective_scale(depth: f32, depth_extent: f32) -> f32 {
    1.0 + depth / (depth_extent * 2.0)
}

pub fn node_radius(node: &Node, depth_extent: f32) -> f32 {
    let base = if node.highlight { 4.0 } else { 2.5 };
    base * perspective_scale(node.depth, depth_extent)
}

pub fn node_opacity(node: &Node, depth_extent: f32) -> f32 {
    if node.highlight {
        1.0
    } else {
        0.4 + (node.depth + depth_extent) / (depth_extent * 4.0)
    }
}
