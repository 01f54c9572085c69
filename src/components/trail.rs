use std::sync::Arc;

use bevy_ecs::component::Component;

use crate::Point3D;

/// One marker riding a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point3D,
    /// Vertex the particle is leaving.
    pub segment_index: usize,
    /// Vertex the particle is heading for.
    pub next_index: usize,
    /// Fraction of the way from `segment_index` to `next_index`, in [0, 1).
    pub progress: f64,
}

#[derive(Component, Debug, Clone)]
pub struct TrailComponent {
    // shared with the ArcComponent of the same entity
    pub polyline: Arc<[Point3D]>,
    pub particles: Vec<Particle>,
    // render buffer, rewritten on every advance
    pub positions: Vec<[f32; 3]>,
}

impl TrailComponent {
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}

/// Point-sprite material hints, read by the renderer off each arc entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TrailStyle {
    pub color: u32,
    pub size: f32,
    pub additive_blending: bool,
    pub transparent: bool,
    pub depth_test: bool,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            color: 0x56ccf2,
            size: 0.1,
            additive_blending: true,
            transparent: true,
            depth_test: true,
        }
    }
}

impl TrailStyle {
    pub fn rgba(&self) -> [f32; 4] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0), 1.0]
    }
}
