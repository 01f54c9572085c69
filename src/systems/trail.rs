use std::sync::Arc;

use cgmath::VectorSpace;

use crate::{
    components::trail::{Particle, TrailComponent},
    Animatable, Point3D,
};

// float slack when deciding a particle has reached its next vertex
const PROGRESS_EPSILON: f64 = 1e-9;

pub struct TrailSystem {}

impl TrailSystem {
    /// Spreads `count` particles evenly over `polyline`, all at rest on a vertex.
    pub fn create(polyline: Arc<[Point3D]>, count: usize) -> TrailComponent {
        let len = polyline.len();
        let particles: Vec<Particle> = if len == 0 {
            Vec::new()
        } else {
            (0..count)
                .map(|i| {
                    // floor(i / count * len) without float rounding
                    let index = (i * len / count).min(len - 1);
                    let next_index = if index + 1 >= len { 0 } else { index + 1 };
                    Particle {
                        position: polyline[index],
                        segment_index: index,
                        next_index,
                        progress: 0.0,
                    }
                })
                .collect()
        };
        let positions = particles.iter().map(|p| to_f32(p.position)).collect();

        TrailComponent {
            polyline,
            particles,
            positions,
        }
    }

    /// Frames needed to cross one segment at a given step.
    pub fn ticks_per_segment(step: f64) -> usize {
        ((1.0 - PROGRESS_EPSILON) / step).ceil() as usize
    }

    fn advance_particle(particle: &mut Particle, polyline: &[Point3D], dt: f64) {
        particle.progress += dt;
        if particle.progress >= 1.0 - PROGRESS_EPSILON {
            particle.progress = 0.0;
            particle.segment_index = particle.next_index;
            particle.next_index += 1;
            // start over from the origin end
            if particle.next_index >= polyline.len() {
                particle.segment_index = 0;
                particle.next_index = 1;
            }
        }

        let current = polyline[particle.segment_index];
        let next = polyline[particle.next_index];
        particle.position = current.lerp(next, particle.progress);
    }
}

impl Animatable for TrailComponent {
    fn advance(&mut self, dt: f64) {
        // a single vertex has nowhere to go
        if self.polyline.len() < 2 {
            return;
        }
        for (particle, slot) in self.particles.iter_mut().zip(self.positions.iter_mut()) {
            TrailSystem::advance_particle(particle, &self.polyline, dt);
            *slot = to_f32(particle.position);
        }
    }
}

fn to_f32(p: Point3D) -> [f32; 3] {
    [p.x as f32, p.y as f32, p.z as f32]
}
