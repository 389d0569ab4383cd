//! Lifecycle and per-frame driver of one backdrop instance.

mod debounce;
mod timers;

use std::mem;

use eframe::egui::{Pos2, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::network::{NetworkTuning, Simulation, Viewport};
use crate::render::{FrameStats, Palette, ProximityEdge, Surface, render_frame};

use debounce::ResizeDebouncer;
use timers::{HighlightRevert, TimerQueue};

/// Quiet period before a burst of resizes is applied. Also the config file default.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

/// Input delivered by the host window, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    PointerMoved(Pos2),
    Clicked(Pos2),
    Resized(Vec2),
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("drawing surface is unavailable ({width}x{height})")]
    SurfaceUnavailable { width: f32, height: f32 },
}

/// Owns the simulation while mounted and drives it one frame per [`FrameScheduler::tick`].
pub struct FrameScheduler {
    state: SchedulerState,
    simulation: Option<Simulation>,
    tuning: NetworkTuning,
    palette: Palette,
    seed: Option<u64>,
    resize: ResizeDebouncer,
    timers: TimerQueue,
    /// Bumped on every unmount. Reverts scheduled under an older value are stale.
    generation: u64,
    due_scratch: Vec<HighlightRevert>,
    edges: Vec<ProximityEdge>,
}

impl FrameScheduler {
    pub fn new(tuning: NetworkTuning, palette: Palette) -> Self {
        Self {
            state: SchedulerState::Stopped,
            simulation: None,
            tuning: tuning.sanitized(),
            palette,
            seed: None,
            resize: ResizeDebouncer::new(DEFAULT_RESIZE_DEBOUNCE_MS as f64 / 1000.0),
            timers: TimerQueue::default(),
            generation: 0,
            due_scratch: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_resize_debounce(mut self, quiet_secs: f64) -> Self {
        self.resize = ResizeDebouncer::new(quiet_secs);
        self
    }

    /// Seeds the node RNG of every future mount.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.simulation.as_ref()
    }

    pub fn simulation_mut(&mut self) -> Option<&mut Simulation> {
        self.simulation.as_mut()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Builds and seeds the simulation for a surface of `size` and starts running.
    pub fn mount(&mut self, size: Vec2) -> Result<(), MountError> {
        if self.state == SchedulerState::Running {
            debug!("backdrop already mounted");
            return Ok(());
        }

        let viewport = Viewport::from_size(size).ok_or(MountError::SurfaceUnavailable {
            width: size.x,
            height: size.y,
        })?;

        let mut simulation = match self.seed {
            Some(seed) => Simulation::with_rng(viewport, self.tuning, StdRng::seed_from_u64(seed)),
            None => Simulation::new(viewport, self.tuning),
        };
        simulation.set_target_population(viewport);

        info!(
            generation = self.generation,
            nodes = simulation.nodes().len(),
            "backdrop mounted"
        );
        self.simulation = Some(simulation);
        self.state = SchedulerState::Running;
        Ok(())
    }

    /// Stops the loop, releases the simulation and drops every queued revert. The generation
    /// bump also invalidates any revert that is mid-drain.
    pub fn unmount(&mut self) {
        if self.state == SchedulerState::Stopped {
            return;
        }

        self.state = SchedulerState::Stopped;
        self.simulation = None;
        self.resize.cancel();
        let dropped_timers = self.timers.len();
        self.timers.clear();
        self.edges.clear();
        self.generation = self.generation.wrapping_add(1);
        info!(
            generation = self.generation,
            dropped_timers, "backdrop unmounted"
        );
    }

    /// Applies one host event. Events are dropped while stopped.
    pub fn handle_event(&mut self, event: HostEvent, now_secs: f64) {
        if self.state != SchedulerState::Running {
            trace!(?event, "ignoring event while stopped");
            return;
        }
        let Some(simulation) = self.simulation.as_mut() else {
            return;
        };

        match event {
            HostEvent::PointerMoved(position) => simulation.pointer_moved(position),
            HostEvent::Clicked(position) => {
                let Some(outcome) = simulation.click(position) else {
                    return;
                };
                let tuning = simulation.tuning();
                self.timers.schedule(
                    outcome.hit,
                    now_secs + tuning.primary_highlight_secs,
                    self.generation,
                );
                for neighbor in outcome.neighbors {
                    self.timers.schedule(
                        neighbor,
                        now_secs + tuning.neighbor_highlight_secs,
                        self.generation,
                    );
                }
            }
            HostEvent::Resized(size) => self.resize.push(size, now_secs),
        }
    }

    /// Runs one frame: due reverts, debounced resize, physics, then rendering.
    /// Returns `None` while stopped.
    pub fn tick(&mut self, now_secs: f64, surface: &mut impl Surface) -> Option<FrameStats> {
        self.fire_due_reverts(now_secs);

        if self.state != SchedulerState::Running {
            return None;
        }
        let simulation = self.simulation.as_mut()?;

        if let Some(size) = self.resize.take_due(now_secs) {
            match Viewport::from_size(size) {
                Some(viewport) if viewport != simulation.viewport() => {
                    simulation.set_target_population(viewport);
                    surface.clear();
                    info!(
                        width = viewport.width(),
                        height = viewport.height(),
                        nodes = simulation.nodes().len(),
                        "resize applied"
                    );
                }
                Some(_) => {}
                None => warn!(width = size.x, height = size.y, "ignoring resize to empty surface"),
            }
        }

        simulation.step_physics();
        Some(render_frame(
            simulation,
            surface,
            &self.palette,
            &mut self.edges,
        ))
    }

    fn fire_due_reverts(&mut self, now_secs: f64) {
        let mut due = mem::take(&mut self.due_scratch);
        self.timers.drain_due(now_secs, &mut due);

        for revert in &due {
            if revert.generation != self.generation {
                trace!(node = revert.node.0, "dropping stale highlight revert");
                continue;
            }
            if let Some(simulation) = self.simulation.as_mut() {
                simulation.clear_highlight(revert.node);
            }
        }

        due.clear();
        self.due_scratch = due;
    }
}
