use eframe::egui::Vec2;

/// Coalesces a burst of resize events into the last one, released after a quiet period.
pub(super) struct ResizeDebouncer {
    quiet_secs: f64,
    pending: Option<PendingResize>,
}

#[derive(Clone, Copy)]
struct PendingResize {
    size: Vec2,
    due_secs: f64,
}

impl ResizeDebouncer {
    pub(super) fn new(quiet_secs: f64) -> Self {
        Self {
            quiet_secs: quiet_secs.max(0.0),
            pending: None,
        }
    }

    /// Records a resize, restarting the quiet period.
    pub(super) fn push(&mut self, size: Vec2, now_secs: f64) {
        self.pending = Some(PendingResize {
            size,
            due_secs: now_secs + self.quiet_secs,
        });
    }

    /// Hands out the last recorded size once the quiet period has elapsed.
    pub(super) fn take_due(&mut self, now_secs: f64) -> Option<Vec2> {
        match self.pending {
            Some(pending) if now_secs >= pending.due_secs => {
                self.pending = None;
                Some(pending.size)
            }
            _ => None,
        }
    }

    pub(super) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(super) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
