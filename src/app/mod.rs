use eframe::egui::{self, Color32, Context, PointerButton, Pos2, Rect, Sense, Ui, Vec2};
use tracing::warn;

use crate::config::BackdropConfig;
use crate::render::TrailCanvas;
use crate::scheduler::{FrameScheduler, HostEvent, SchedulerState};

mod stats;

use stats::StatsOverlay;

/// Full-window host for the particle network.
///
/// The backdrop mounts on the first frame whose panel has a usable size and unmounts when the
/// app is dropped.
pub struct NeuralBackdropApp {
    scheduler: FrameScheduler,
    canvas: TrailCanvas,
    background: Color32,
    last_pointer: Option<Pos2>,
    last_size: Option<Vec2>,
    mount_warned: bool,
    stats: Option<StatsOverlay>,
}

impl NeuralBackdropApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BackdropConfig) -> Self {
        let palette = config.palette();
        let scheduler = FrameScheduler::new(config.tuning, palette)
            .with_resize_debounce(config.resize_debounce_secs());

        Self {
            scheduler,
            canvas: TrailCanvas::new(config.trail_frames),
            background: palette.background,
            last_pointer: None,
            last_size: None,
            mount_warned: false,
            stats: config.show_stats.then(StatsOverlay::default),
        }
    }

    fn ensure_mounted(&mut self, size: Vec2) {
        if self.scheduler.state() == SchedulerState::Running {
            return;
        }

        match self.scheduler.mount(size) {
            Ok(()) => {
                self.last_size = Some(size);
                self.mount_warned = false;
            }
            Err(error) => {
                if !self.mount_warned {
                    warn!(%error, "backdrop not mounted yet");
                    self.mount_warned = true;
                }
            }
        }
    }

    fn forward_input(&mut self, ui: &Ui, rect: Rect, response: &egui::Response, now: f64) {
        let origin = rect.min.to_vec2();

        if let Some(pointer) = ui.input(|input| input.pointer.hover_pos())
            && self.last_pointer != Some(pointer)
        {
            self.last_pointer = Some(pointer);
            self.scheduler
                .handle_event(HostEvent::PointerMoved(pointer - origin), now);
        }

        let size = rect.size();
        if self.last_size != Some(size) {
            if self.last_size.is_some() {
                self.scheduler.handle_event(HostEvent::Resized(size), now);
            }
            self.last_size = Some(size);
        }

        if response.clicked_by(PointerButton::Primary)
            && let Some(position) = response.interact_pointer_pos()
        {
            self.scheduler
                .handle_event(HostEvent::Clicked(position - origin), now);
        }
    }
}

impl eframe::App for NeuralBackdropApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|input| input.time);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.background))
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
                let painter = ui.painter_at(rect);

                self.ensure_mounted(rect.size());
                self.forward_input(ui, rect, &response, now);

                let frame_stats = self.scheduler.tick(now, &mut self.canvas);
                self.canvas.paint(&painter, rect.min.to_vec2());

                if let (Some(overlay), Some(frame_stats)) = (self.stats.as_mut(), frame_stats) {
                    overlay.record(ctx);
                    overlay.paint(&painter, rect, frame_stats);
                }
            });

        ctx.request_repaint();
    }
}

impl Drop for NeuralBackdropApp {
    fn drop(&mut self) {
        self.scheduler.unmount();
    }
}
