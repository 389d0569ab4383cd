use std::collections::VecDeque;
use std::mem;

use eframe::egui::{Painter, Stroke, Vec2};

use super::{Primitive, Surface};

/// History frames fainter than this are invisible against the background and get dropped.
const MIN_VISIBLE_WEIGHT: f32 = 0.02;

struct TrailFrame {
    primitives: Vec<Primitive>,
    weight: f32,
}

/// A [`Surface`] for immediate-mode painting that mimics a persistent raster canvas.
///
/// egui repaints from scratch every frame, so instead of overpainting pixels the canvas keeps
/// the primitives of recent frames and multiplies their opacity down on every fade.
pub struct TrailCanvas {
    history: VecDeque<TrailFrame>,
    current: Vec<Primitive>,
    spare: Vec<Vec<Primitive>>,
    max_frames: usize,
}

impl TrailCanvas {
    pub fn new(max_frames: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(max_frames),
            current: Vec::new(),
            spare: Vec::new(),
            max_frames,
        }
    }

    pub fn retained_frames(&self) -> usize {
        self.history.len()
    }

    pub fn current_len(&self) -> usize {
        self.current.len()
    }

    /// Paints retained frames oldest first, then the frame in progress, shifted by `offset`.
    pub fn paint(&self, painter: &Painter, offset: Vec2) {
        for frame in &self.history {
            paint_primitives(painter, &frame.primitives, frame.weight, offset);
        }
        paint_primitives(painter, &self.current, 1.0, offset);
    }

    fn recycle(&mut self, mut primitives: Vec<Primitive>) {
        primitives.clear();
        self.spare.push(primitives);
    }
}

impl Surface for TrailCanvas {
    fn fade(&mut self, alpha: f32) {
        let keep = (1.0 - alpha).clamp(0.0, 1.0);
        for frame in &mut self.history {
            frame.weight *= keep;
        }

        if !self.current.is_empty() {
            let next = self.spare.pop().unwrap_or_default();
            let primitives = mem::replace(&mut self.current, next);
            self.history.push_back(TrailFrame {
                primitives,
                weight: keep,
            });
        }

        while let Some(oldest) = self.history.front() {
            if oldest.weight >= MIN_VISIBLE_WEIGHT && self.history.len() <= self.max_frames {
                break;
            }
            if let Some(frame) = self.history.pop_front() {
                self.recycle(frame.primitives);
            }
        }
    }

    fn clear(&mut self) {
        while let Some(frame) = self.history.pop_front() {
            self.recycle(frame.primitives);
        }
        self.current.clear();
    }

    fn draw(&mut self, primitive: Primitive) {
        self.current.push(primitive);
    }
}

fn paint_primitives(painter: &Painter, primitives: &[Primitive], weight: f32, offset: Vec2) {
    for primitive in primitives {
        match *primitive {
            Primitive::Disc {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(center + offset, radius, color.gamma_multiply(weight));
            }
            Primitive::Ring {
                center,
                radius,
                stroke,
            } => {
                painter.circle_stroke(center + offset, radius, faded(stroke, weight));
            }
            Primitive::Segment { from, to, stroke } => {
                painter.line_segment([from + offset, to + offset], faded(stroke, weight));
            }
        }
    }
}

fn faded(stroke: Stroke, weight: f32) -> Stroke {
    Stroke::new(stroke.width, stroke.color.gamma_multiply(weight))
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Color32, Pos2};

    use super::*;

    fn dot() -> Primitive {
        Primitive::Disc {
            center: Pos2::ZERO,
            radius: 1.0,
            color: Color32::WHITE,
        }
    }

    fn weights(canvas: &TrailCanvas) -> Vec<f32> {
        canvas.history.iter().map(|frame| frame.weight).collect()
    }

    #[test]
    fn fade_moves_current_frame_into_history() {
        let mut canvas = TrailCanvas::new(8);
        canvas.draw(dot());
        canvas.draw(dot());
        canvas.fade(0.08);

        assert_eq!(canvas.current_len(), 0);
        assert_eq!(canvas.retained_frames(), 1);
        assert!((weights(&canvas)[0] - 0.92).abs() < 1e-6);
    }

    #[test]
    fn older_frames_keep_fading() {
        let mut canvas = TrailCanvas::new(8);
        for _ in 0..3 {
            canvas.draw(dot());
            canvas.fade(0.5);
        }

        let weights = weights(&canvas);
        assert_eq!(weights, vec![0.125, 0.25, 0.5]);
    }

    #[test]
    fn history_is_bounded_by_length_and_visibility() {
        let mut canvas = TrailCanvas::new(4);
        for _ in 0..10 {
            canvas.draw(dot());
            canvas.fade(0.08);
        }
        assert_eq!(canvas.retained_frames(), 4);

        let mut dim = TrailCanvas::new(64);
        for _ in 0..10 {
            dim.draw(dot());
            dim.fade(0.9);
        }
        assert!(dim.retained_frames() <= 2);
    }

    #[test]
    fn zero_length_trail_keeps_only_current_frame() {
        let mut canvas = TrailCanvas::new(0);
        canvas.draw(dot());
        canvas.fade(0.08);
        assert_eq!(canvas.retained_frames(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut canvas = TrailCanvas::new(8);
        canvas.draw(dot());
        canvas.fade(0.08);
        canvas.draw(dot());
        canvas.clear();

        assert_eq!(canvas.retained_frames(), 0);
        assert_eq!(canvas.current_len(), 0);
    }
}
