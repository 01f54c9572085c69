use bevy_ecs::prelude::Resource;
use cgmath::{Quaternion, Rotation, Vector3};

use crate::{matrix4_to_array, Point3D};

/// Orientation shared by the globe and every arc on it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GlobeRotation {
    pub axis: Vector3<f64>,
    /// Radians applied per frame.
    pub angle_per_frame: f64,
    pub orientation: Quaternion<f64>,
    pub frames: u64,
}

impl GlobeRotation {
    pub fn new(axis: Vector3<f64>, angle_per_frame: f64) -> Self {
        Self {
            axis,
            angle_per_frame,
            orientation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            frames: 0,
        }
    }

    pub fn rotate_vector(&self, point: Point3D) -> Point3D {
        self.orientation.rotate_vector(point)
    }

    pub fn model_matrix(&self) -> [[f32; 4]; 4] {
        let q = self.orientation;
        let q = Quaternion::new(q.s as f32, q.v.x as f32, q.v.y as f32, q.v.z as f32);
        matrix4_to_array(q.into())
    }
}
