use cgmath::{InnerSpace, Vector3};

use crate::{components::trail::TrailStyle, error::ArcError};

// shared with whatever draws the sphere and landmasses,
// arcs drift off their cities if these disagree
pub const EARTH_RADIUS: f64 = 10.0;

/// Progress added to every particle per frame, roughly 20 frames per segment.
pub const PARTICLE_STEP: f64 = 0.05;

pub const BULGE_FACTOR: f64 = 0.55;
pub const DENSITY_FACTOR: f64 = 0.3;
pub const DENSITY_BASE: f64 = 6.0;

pub const ROTATE_AXIS: [f64; 3] = [0.0, 1.0, 0.0];
pub const ROTATE_ANGLE: f64 = 0.005; // radian

/// Relative to the sphere radius.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

pub const DEMO_ROUTES: [(&str, &str); 10] = [
    ("dublin", "rome"),
    ("dublin", "new york"),
    ("dublin", "los angeles"),
    ("dublin", "sydney"),
    ("dublin", "rosario"),
    ("dublin", "captown"),
    ("dublin", "tokyo"),
    ("dublin", "vancouver"),
    ("dublin", "panama"),
    ("dublin", "kuala lumpur"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub radius: f64,
    pub particle_step: f64,
    pub rotate_axis: Vector3<f64>,
    pub rotate_angle: f64,
    pub trail_style: TrailStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius: EARTH_RADIUS,
            particle_step: PARTICLE_STEP,
            rotate_axis: Vector3::from(ROTATE_AXIS),
            rotate_angle: ROTATE_ANGLE,
            trail_style: TrailStyle::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_particle_step(mut self, step: f64) -> Self {
        self.particle_step = step;
        self
    }

    pub fn with_rotation(mut self, axis: Vector3<f64>, angle: f64) -> Self {
        self.rotate_axis = axis;
        self.rotate_angle = angle;
        self
    }

    pub fn with_trail_style(mut self, style: TrailStyle) -> Self {
        self.trail_style = style;
        self
    }

    pub fn validate(&self) -> Result<(), ArcError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ArcError::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.particle_step.is_finite()
            || self.particle_step <= 0.0
            || self.particle_step > 1.0
        {
            return Err(ArcError::InvalidConfig(format!(
                "particle step must be in (0, 1], got {}",
                self.particle_step
            )));
        }
        let axis_len = self.rotate_axis.magnitude();
        if !axis_len.is_finite() || axis_len == 0.0 {
            return Err(ArcError::InvalidConfig(
                "rotation axis must be a non-zero vector".to_string(),
            ));
        }
        if !self.rotate_angle.is_finite() {
            return Err(ArcError::InvalidConfig(format!(
                "rotation angle must be finite, got {}",
                self.rotate_angle
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            SceneConfig::default().with_radius(0.0),
            SceneConfig::default().with_radius(f64::NAN),
            SceneConfig::default().with_particle_step(0.0),
            SceneConfig::default().with_particle_step(1.5),
            SceneConfig::default().with_rotation(Vector3::new(0.0, 0.0, 0.0), 0.1),
            SceneConfig::default().with_rotation(Vector3::unit_y(), f64::INFINITY),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(ArcError::InvalidConfig(_))),
                "expected {config:?} to be rejected"
            );
        }
    }

    #[test]
    fn demo_routes_all_leave_dublin() {
        assert!(DEMO_ROUTES.iter().all(|(origin, _)| *origin == "dublin"));
    }
}
