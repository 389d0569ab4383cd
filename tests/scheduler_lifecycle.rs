//! End-to-end frame driving through the scheduler, the way the window host uses it.

use eframe::egui::{pos2, vec2};
use neural_backdrop::network::NetworkTuning;
use neural_backdrop::render::{Palette, Primitive, Surface, TrailCanvas};
use neural_backdrop::scheduler::{FrameScheduler, HostEvent, SchedulerState};

#[derive(Default)]
struct CountingSurface {
    fades: usize,
    clears: usize,
    rings: Vec<f32>,
}

impl Surface for CountingSurface {
    fn fade(&mut self, _alpha: f32) {
        self.fades += 1;
        self.rings.clear();
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw(&mut self, primitive: Primitive) {
        if let Primitive::Ring { radius, .. } = primitive {
            self.rings.push(radius);
        }
    }
}

fn scheduler() -> FrameScheduler {
    FrameScheduler::new(NetworkTuning::default(), Palette::default()).with_seed(7)
}

#[test]
fn click_on_minimum_population_reproduces_and_ripples() {
    let mut scheduler = scheduler();
    scheduler.mount(vec2(800.0, 600.0)).unwrap();
    let mut surface = CountingSurface::default();
    assert_eq!(scheduler.simulation().unwrap().nodes().len(), 50);

    let click = scheduler.simulation().unwrap().nodes()[10].screen_pos() + vec2(3.0, -4.0);
    let hit = scheduler.simulation().unwrap().hit_test(click).unwrap();
    let node = scheduler.simulation().unwrap().nodes()[hit].screen_pos();
    scheduler.handle_event(HostEvent::Clicked(click), 0.0);

    let simulation = scheduler.simulation().unwrap();
    assert_eq!(simulation.nodes().len(), 51);
    let ripple = *simulation.ripple().unwrap();
    assert_eq!(ripple.center, node);
    assert_eq!((ripple.radius, ripple.alpha), (0.0, 1.0));

    scheduler.tick(0.016, &mut surface).unwrap();
    let ripple = *scheduler.simulation().unwrap().ripple().unwrap();
    assert_eq!(ripple.radius, 4.0);
    assert!((ripple.alpha - 0.98).abs() < 1e-6);
    assert_eq!(surface.fades, 1);
    assert_eq!(surface.rings, vec![4.0, 14.0]);
}

#[test]
fn ripple_disappears_after_fading_out() {
    let mut scheduler = scheduler();
    scheduler.mount(vec2(800.0, 600.0)).unwrap();
    let mut surface = CountingSurface::default();
    let node = scheduler.simulation().unwrap().nodes()[0].screen_pos();
    scheduler.handle_event(HostEvent::Clicked(node), 0.0);

    for frame in 0..60 {
        scheduler.tick(frame as f64 / 60.0, &mut surface);
    }

    assert!(scheduler.simulation().unwrap().ripple().is_none());
    assert!(surface.rings.is_empty());
}

#[test]
fn pointer_events_steer_the_next_tick() {
    let mut scheduler = scheduler();
    scheduler.mount(vec2(800.0, 600.0)).unwrap();
    let simulation = scheduler.simulation_mut().unwrap();
    for node in simulation.nodes_mut() {
        node.position = vec2(400.0, 300.0);
        node.velocity = vec2(0.0, 0.0);
    }

    scheduler.handle_event(HostEvent::PointerMoved(pos2(460.0, 300.0)), 0.0);
    scheduler.tick(0.016, &mut CountingSurface::default());

    let simulation = scheduler.simulation().unwrap();
    assert_eq!(simulation.pointer(), Some(pos2(460.0, 300.0)));
    for node in simulation.nodes() {
        assert!(node.velocity.x < 0.0, "node was not pushed away: {:?}", node.velocity);
    }
}

#[test]
fn remount_after_unmount_starts_fresh() {
    let mut scheduler = scheduler();
    let mut canvas = TrailCanvas::new(8);
    scheduler.mount(vec2(1200.0, 900.0)).unwrap();
    for frame in 0..5 {
        scheduler.tick(frame as f64 * 0.016, &mut canvas);
    }
    assert!(canvas.retained_frames() > 0);

    scheduler.unmount();
    assert_eq!(scheduler.state(), SchedulerState::Stopped);
    scheduler.handle_event(HostEvent::PointerMoved(pos2(5.0, 5.0)), 1.0);

    scheduler.mount(vec2(1200.0, 900.0)).unwrap();
    let simulation = scheduler.simulation().unwrap();
    assert_eq!(simulation.nodes().len(), 72);
    assert_eq!(simulation.pointer(), None);
    assert!(simulation.ripple().is_none());
}

#[test]
fn debounced_resize_wipes_the_trail() {
    let mut scheduler = scheduler().with_resize_debounce(0.1);
    let mut surface = CountingSurface::default();
    scheduler.mount(vec2(1200.0, 900.0)).unwrap();

    scheduler.handle_event(HostEvent::Resized(vec2(2400.0, 900.0)), 0.0);
    scheduler.tick(0.05, &mut surface);
    assert_eq!(surface.clears, 0);
    scheduler.tick(0.2, &mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(scheduler.simulation().unwrap().nodes().len(), 144);
}
