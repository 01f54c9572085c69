pub mod components;
pub mod config;
pub mod error;
pub mod registry;
pub mod systems;

use anyhow::Context;
use tracing::info;

pub use components::{
    arc::ArcComponent,
    location::{Location, LocationTable},
    rotation::GlobeRotation,
    trail::{Particle, TrailComponent, TrailStyle},
};
pub use config::SceneConfig;
pub use error::ArcError;
pub use registry::{demo_registry, ArcRegistry, RejectedRoute};
pub use systems::{
    curve::{ArcCurveSystem, CubicBezier},
    geospatial::coordinates::CoordinatesSystem,
    trail::TrailSystem,
};

/// A position on or above the globe, in scene units.
pub type Point3D = cgmath::Vector3<f64>;

/// Anything the registry steps forward once per frame.
pub trait Animatable {
    fn advance(&mut self, dt: f64);
}

pub const IDENTITY_MATRIX_4: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

// this belongs somewhere else like serialization util or something
fn matrix4_to_array(mat: cgmath::Matrix4<f32>) -> [[f32; 4]; 4] {
    let m: [[f32; 4]; 4] = mat.into();
    [
        [m[0][0], m[0][1], m[0][2], m[0][3]],
        [m[1][0], m[1][1], m[1][2], m[1][3]],
        [m[2][0], m[2][1], m[2][2], m[2][3]],
        [m[3][0], m[3][1], m[3][2], m[3][3]],
    ]
}

pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();
        } else {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            // a second call keeps the first subscriber
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

/// Headless stand-in for the render loop: builds the demo arcs and ticks them.
pub fn run(frames: u64) -> anyhow::Result<()> {
    init_logging();

    let (mut registry, rejected) = demo_registry().context("failed to build demo arcs")?;
    if !rejected.is_empty() {
        anyhow::bail!("{} demo routes were rejected", rejected.len());
    }

    for _ in 0..frames {
        registry.tick_all();
    }

    let rotation = registry.rotation();
    info!(
        arcs = registry.len(),
        particles = registry.particle_count(),
        frames = rotation.frames,
        angle = systems::rotation::RotationSystem::accumulated_angle(rotation),
        "done"
    );
    Ok(())
}
