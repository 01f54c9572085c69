use std::sync::Arc;

use bevy_ecs::component::Component;
use cgmath::MetricSpace;

use crate::Point3D;

/// A single origin to destination flight path.
#[derive(Component, Debug, Clone)]
pub struct ArcComponent {
    pub origin_name: String,
    pub destination_name: String,
    pub origin: Point3D,
    pub destination: Point3D,
    pub polyline: Arc<[Point3D]>,
}

impl ArcComponent {
    pub fn chord_length(&self) -> f64 {
        self.origin.distance(self.destination)
    }

    pub fn route(&self) -> (&str, &str) {
        (&self.origin_name, &self.destination_name)
    }
}
