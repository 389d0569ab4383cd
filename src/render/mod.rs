//! Drawing of the particle network onto a fading surface.

mod proximity;
mod style;
mod trail;

use eframe::egui::{Color32, Pos2, Stroke};

pub use proximity::{FrameStats, ProximityEdge, proximity_edges, render_frame};
pub use style::{Palette, node_opacity, node_radius, perspective_scale, with_opacity};
pub use trail::TrailCanvas;

/// One shape handed to a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Disc {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Ring {
        center: Pos2,
        radius: f32,
        stroke: Stroke,
    },
    Segment {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
}

/// A 2D canvas that keeps what was drawn on it until it is faded or cleared.
pub trait Surface {
    /// Overpaints everything drawn so far with the background at `alpha` opacity.
    fn fade(&mut self, alpha: f32);

    /// Wipes the surface, as resizing a raster canvas does.
    fn clear(&mut self);

    fn draw(&mut self, primitive: Primitive);
}
