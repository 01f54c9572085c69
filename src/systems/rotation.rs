use bevy_ecs::system::ResMut;
use cgmath::{InnerSpace, Quaternion, Rad, Rotation3};

use crate::components::rotation::GlobeRotation;

pub struct RotationSystem {}

impl RotationSystem {
    // https://stackoverflow.com/questions/16319742/three-js-rotating-a-sphere-around-a-certain-axis
    pub fn rotate_on_axis(rotation: &mut GlobeRotation) {
        let step = Quaternion::from_axis_angle(rotation.axis.normalize(), Rad(rotation.angle_per_frame));
        // local-space rotation, same as Object3D.rotateOnAxis
        rotation.orientation = (rotation.orientation * step).normalize();
        rotation.frames += 1;
    }

    /// Total angle turned so far, in radians.
    pub fn accumulated_angle(rotation: &GlobeRotation) -> f64 {
        rotation.angle_per_frame * rotation.frames as f64
    }
}

pub fn rotate_globe(mut rotation: ResMut<GlobeRotation>) {
    RotationSystem::rotate_on_axis(&mut rotation);
}
