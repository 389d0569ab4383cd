use std::collections::VecDeque;

use eframe::egui::{Align2, Color32, Context, FontId, Painter, Rect, vec2};

use crate::render::FrameStats;

const FPS_SAMPLE_WINDOW: usize = 180;

#[derive(Default)]
pub(super) struct StatsOverlay {
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

impl StatsOverlay {
    pub(super) fn record(&mut self, ctx: &Context) {
        let dt = ctx.input(|input| input.stable_dt);
        self.record_frame_time(dt);
    }

    fn record_frame_time(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }

        self.fps_current = (1.0 / dt).clamp(0.0, 1000.0);
        self.fps_samples.push_back(self.fps_current);
        while self.fps_samples.len() > FPS_SAMPLE_WINDOW {
            self.fps_samples.pop_front();
        }
    }

    pub(super) fn text(&self, stats: FrameStats) -> String {
        let mut parts = vec![format!("FPS {:.0}", self.fps_current)];

        if !self.fps_samples.is_empty() {
            let avg = self.fps_samples.iter().sum::<f32>() / self.fps_samples.len() as f32;
            parts.push(format!("avg {avg:.1}"));
        }

        parts.push(format!("{} nodes", stats.nodes));
        parts.push(format!("{} links", stats.edges));
        if stats.ripple_active {
            parts.push("ripple".to_owned());
        }

        parts.join(" | ")
    }

    pub(super) fn paint(&self, painter: &Painter, rect: Rect, stats: FrameStats) {
        painter.text(
            rect.left_top() + vec2(10.0, 8.0),
            Align2::LEFT_TOP,
            self.text(stats),
            FontId::monospace(12.0),
            Color32::from_gray(170),
        );
    }
}
