//! Invariants of the particle network under arbitrary motion, resizes and clicks.

use eframe::egui::{pos2, vec2};
use neural_backdrop::network::{NetworkTuning, Simulation, Viewport};
use neural_backdrop::render::proximity_edges;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn simulation(width: f32, height: f32, seed: u64) -> Simulation {
    let viewport = Viewport::new(width, height).unwrap();
    let mut sim = Simulation::with_rng(
        viewport,
        NetworkTuning::default(),
        StdRng::seed_from_u64(seed),
    );
    sim.set_target_population(viewport);
    sim
}

proptest! {
    #[test]
    fn nodes_never_escape_the_canvas(
        width in 200.0f32..2500.0,
        height in 200.0f32..1600.0,
        seed in any::<u64>(),
        speed in 0.0f32..80.0,
        depth_speed in 0.0f32..60.0,
        pointer in (0.0f32..2500.0, 0.0f32..1600.0),
        ticks in 1usize..40,
    ) {
        let mut sim = simulation(width, height, seed);
        sim.pointer_moved(pos2(pointer.0, pointer.1));
        for (index, node) in sim.nodes_mut().iter_mut().enumerate() {
            let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
            node.velocity = vec2(speed * sign, -speed * 0.7 * sign);
            node.depth_velocity = depth_speed * sign;
        }

        for _ in 0..ticks {
            sim.step_physics();
            for node in sim.nodes() {
                prop_assert!(node.position.x >= 0.0 && node.position.x < width, "x = {}", node.position.x);
                prop_assert!(node.position.y >= 0.0 && node.position.y < height, "y = {}", node.position.y);
                prop_assert!((-200.0..=200.0).contains(&node.depth), "z = {}", node.depth);
            }
        }
    }

    #[test]
    fn resizes_keep_population_in_range(
        sizes in prop::collection::vec((1.0f32..4000.0, 1.0f32..3000.0), 1..12),
        seed in any::<u64>(),
    ) {
        let mut sim = simulation(1024.0, 768.0, seed);
        for (width, height) in sizes {
            sim.set_target_population(Viewport::new(width, height).unwrap());
            let count = sim.nodes().len();
            prop_assert!((50..=200).contains(&count), "population {count}");
        }
    }

    #[test]
    fn clicks_never_exceed_ceiling(seed in any::<u64>(), clicks in 1usize..400) {
        let mut sim = simulation(3840.0, 2160.0, seed);
        for click in 0..clicks {
            let target = sim.nodes()[click % sim.nodes().len()].screen_pos();
            sim.click(target);
            prop_assert!(sim.nodes().len() <= 300);
        }
    }

    #[test]
    fn edges_are_exactly_the_close_pairs(seed in any::<u64>(), width in 100.0f32..900.0, height in 100.0f32..900.0) {
        let sim = simulation(width, height, seed);
        let nodes = sim.nodes();
        let mut edges = Vec::new();
        proximity_edges(nodes, sim.tuning(), &mut edges);

        let mut seen = std::collections::HashSet::new();
        for edge in &edges {
            prop_assert!(edge.a < edge.b);
            prop_assert!(seen.insert((edge.a, edge.b)), "duplicate edge {:?}", (edge.a, edge.b));
        }

        for i in 0..nodes.len() {
            for j in 0..nodes.len() {
                if i == j {
                    continue;
                }
                let distance = nodes[i].distance_sq_3d(&nodes[j]).sqrt();
                let key = (i.min(j), i.max(j));
                if distance < 219.99 {
                    prop_assert!(seen.contains(&key), "missing edge {key:?} at {distance}");
                } else if distance > 220.01 {
                    prop_assert!(!seen.contains(&key), "spurious edge {key:?} at {distance}");
                }
            }
        }
    }
}

#[test]
fn full_hd_ish_canvas_seeds_seventy_two_nodes() {
    let sim = simulation(1200.0, 900.0, 1);
    assert_eq!(sim.nodes().len(), 72);
}

#[test]
fn identical_resize_is_drift_free() {
    let mut sim = simulation(1200.0, 900.0, 2);
    let before: Vec<_> = sim.nodes().iter().map(|node| node.position).collect();

    sim.set_target_population(Viewport::new(1200.0, 900.0).unwrap());
    sim.set_target_population(Viewport::new(1200.0, 900.0).unwrap());

    let after: Vec<_> = sim.nodes().iter().map(|node| node.position).collect();
    assert_eq!(before, after);
}

#[test]
fn resize_round_trip_restores_layout() {
    let mut sim = simulation(1000.0, 800.0, 3);
    let before: Vec<_> = sim.nodes().iter().map(|node| node.position).collect();

    sim.set_target_population(Viewport::new(2000.0, 400.0).unwrap());
    sim.set_target_population(Viewport::new(1000.0, 800.0).unwrap());

    for (old, new) in before.iter().zip(sim.nodes()) {
        assert!((old.x - new.position.x).abs() < 1e-3);
        assert!((old.y - new.position.y).abs() < 1e-3);
    }
}
