use serde::Deserialize;

/// Every numeric knob of the particle network. Defaults reproduce the stock backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkTuning {
    /// Canvas area (px²) that accounts for one node of the target population.
    pub area_per_node: f32,
    pub min_nodes: usize,
    pub max_nodes: usize,
    /// Hard ceiling that click reproduction never crosses.
    pub population_ceiling: usize,
    pub depth_extent: f32,
    pub spawn_speed: f32,
    pub spawn_depth_speed: f32,
    pub clone_speed: f32,
    pub pointer_radius: f32,
    pub pointer_dead_zone: f32,
    pub pointer_strength: f32,
    pub damping: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub click_radius: f32,
    pub ripple_growth: f32,
    pub ripple_fade: f32,
    pub ripple_ring_gap: f32,
    pub trail_fade: f32,
    pub primary_highlight_secs: f64,
    pub neighbor_highlight_secs: f64,
}

impl Default for NetworkTuning {
    fn default() -> Self {
        Self {
            area_per_node: 15_000.0,
            min_nodes: 50,
            max_nodes: 200,
            population_ceiling: 300,
            depth_extent: 200.0,
            spawn_speed: 0.8,
            spawn_depth_speed: 0.5,
            clone_speed: 0.5,
            pointer_radius: 120.0,
            pointer_dead_zone: 10.0,
            pointer_strength: 0.02,
            damping: 0.98,
            link_distance: 220.0,
            link_opacity: 0.4,
            click_radius: 30.0,
            ripple_growth: 4.0,
            ripple_fade: 0.02,
            ripple_ring_gap: 10.0,
            trail_fade: 0.08,
            primary_highlight_secs: 1.5,
            neighbor_highlight_secs: 1.0,
        }
    }
}

impl NetworkTuning {
    /// Pulls hand-edited values back into ranges the simulation can work with.
    pub fn sanitized(self) -> Self {
        let min_nodes = self.min_nodes.max(1);
        let max_nodes = self.max_nodes.max(min_nodes);
        let pointer_dead_zone = self.pointer_dead_zone.max(0.001);

        Self {
            area_per_node: self.area_per_node.max(1.0),
            min_nodes,
            max_nodes,
            population_ceiling: self.population_ceiling.max(max_nodes),
            depth_extent: self.depth_extent.max(1.0),
            spawn_speed: self.spawn_speed.clamp(0.0, 20.0),
            spawn_depth_speed: self.spawn_depth_speed.clamp(0.0, 20.0),
            clone_speed: self.clone_speed.clamp(0.0, 20.0),
            pointer_radius: self.pointer_radius.max(pointer_dead_zone),
            pointer_dead_zone,
            pointer_strength: self.pointer_strength.clamp(0.0, 1.0),
            damping: self.damping.clamp(0.0, 1.0),
            link_distance: self.link_distance.max(0.0),
            link_opacity: self.link_opacity.clamp(0.0, 1.0),
            click_radius: self.click_radius.max(0.0),
            ripple_growth: self.ripple_growth.max(0.0),
            ripple_fade: self.ripple_fade.clamp(0.001, 1.0),
            ripple_ring_gap: self.ripple_ring_gap.max(0.0),
            trail_fade: self.trail_fade.clamp(0.0, 1.0),
            primary_highlight_secs: self.primary_highlight_secs.clamp(0.0, 60.0),
            neighbor_highlight_secs: self.neighbor_highlight_secs.clamp(0.0, 60.0),
        }
    }

    pub fn link_distance_sq(&self) -> f32 {
        self.link_distance * self.link_distance
    }
}
