use std::sync::Arc;

use bevy_ecs::{prelude::*, schedule::ExecutorKind};
use cgmath::MetricSpace;
use tracing::{debug, info, trace, warn};

use crate::{
    components::{
        arc::ArcComponent,
        location::LocationTable,
        rotation::GlobeRotation,
        trail::{TrailComponent, TrailStyle},
    },
    config::{SceneConfig, DEMO_ROUTES},
    error::ArcError,
    systems::{
        curve::ArcCurveSystem, geospatial::coordinates::CoordinatesSystem,
        rotation::rotate_globe, trail::TrailSystem,
    },
    Animatable, Point3D,
};

/// Progress handed to every trail per frame.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrameStep(pub f64);

fn advance_trails(step: Res<FrameStep>, mut trails: Query<&mut TrailComponent>) {
    for mut trail in &mut trails {
        trail.advance(step.0);
    }
}

/// A route that could not be turned into an arc.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRoute {
    pub origin: String,
    pub destination: String,
    pub error: ArcError,
}

/// Every arc on the globe, ticked once per rendered frame.
pub struct ArcRegistry {
    world: World,
    schedule: Schedule,
    entities: Vec<Entity>,
    config: SceneConfig,
}

impl ArcRegistry {
    pub fn new(config: SceneConfig) -> Result<Self, ArcError> {
        config.validate()?;

        let mut world = World::new();
        world.insert_resource(FrameStep(config.particle_step));
        world.insert_resource(GlobeRotation::new(
            config.rotate_axis,
            config.rotate_angle,
        ));

        // trails first so particles move in the frame's starting orientation
        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems((advance_trails, rotate_globe).chain());

        Ok(Self {
            world,
            schedule,
            entities: Vec::new(),
            config,
        })
    }

    /// Builds one arc per route, skipping the ones that fail.
    pub fn from_routes<'a>(
        table: &LocationTable,
        routes: impl IntoIterator<Item = (&'a str, &'a str)>,
        config: SceneConfig,
    ) -> Result<(Self, Vec<RejectedRoute>), ArcError> {
        let mut registry = Self::new(config)?;
        let mut rejected = Vec::new();

        for (origin, destination) in routes {
            if let Err(error) = registry.add_arc(table, origin, destination) {
                warn!(origin, destination, %error, "skipping arc");
                rejected.push(RejectedRoute {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    error,
                });
            }
        }

        debug!(
            arcs = registry.len(),
            rejected = rejected.len(),
            particles = registry.particle_count(),
            "arc registry ready"
        );
        Ok((registry, rejected))
    }

    /// Resolves, builds and spawns a single arc. Nothing is added on error.
    pub fn add_arc(
        &mut self,
        table: &LocationTable,
        origin: &str,
        destination: &str,
    ) -> Result<Entity, ArcError> {
        let start = CoordinatesSystem::resolve(table, origin, self.config.radius)?;
        let end = CoordinatesSystem::resolve(table, destination, self.config.radius)?;

        let polyline: Arc<[Point3D]> = ArcCurveSystem::build(start, end)
            .map_err(|error| match error {
                ArcError::DegenerateCurve { .. } => ArcError::DegenerateArc {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                },
                other => other,
            })?
            .into();

        let distance = start.distance(end);
        let particle_count = ArcCurveSystem::vertex_count(distance) * 2;
        let trail = TrailSystem::create(Arc::clone(&polyline), particle_count);

        info!(
            origin,
            destination,
            distance,
            vertices = polyline.len(),
            particles = particle_count,
            "arc added"
        );

        let entity = self
            .world
            .spawn((
                ArcComponent {
                    origin_name: origin.to_string(),
                    destination_name: destination.to_string(),
                    origin: start,
                    destination: end,
                    polyline,
                },
                trail,
                self.config.trail_style,
            ))
            .id();
        self.entities.push(entity);
        Ok(entity)
    }

    /// Advances every trail one frame and turns the globe with them.
    pub fn tick_all(&mut self) {
        self.schedule.run(&mut self.world);
        trace!(frame = self.rotation().frames, "tick");
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn arc(&self, entity: Entity) -> Option<(&ArcComponent, &TrailComponent)> {
        Some((
            self.world.get::<ArcComponent>(entity)?,
            self.world.get::<TrailComponent>(entity)?,
        ))
    }

    pub fn style(&self, entity: Entity) -> Option<&TrailStyle> {
        self.world.get::<TrailStyle>(entity)
    }

    /// Arcs in the order they were added.
    pub fn arcs(&self) -> impl Iterator<Item = (&ArcComponent, &TrailComponent)> + '_ {
        self.entities.iter().filter_map(move |&entity| self.arc(entity))
    }

    pub fn particle_count(&self) -> usize {
        self.arcs().map(|(_, trail)| trail.particles.len()).sum()
    }

    pub fn rotation(&self) -> &GlobeRotation {
        self.world.resource::<GlobeRotation>()
    }
}

/// The ten reference arcs out of Dublin.
pub fn demo_registry() -> Result<(ArcRegistry, Vec<RejectedRoute>), ArcError> {
    ArcRegistry::from_routes(
        &LocationTable::reference(),
        DEMO_ROUTES.iter().copied(),
        SceneConfig::default(),
    )
}
