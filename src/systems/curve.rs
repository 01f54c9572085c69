use cgmath::{InnerSpace, MetricSpace, VectorSpace};

use crate::{
    config::{BULGE_FACTOR, DEGENERATE_EPSILON, DENSITY_BASE, DENSITY_FACTOR},
    error::ArcError,
    Point3D,
};

/// Cubic Bezier through `v0` and `v3`, shaped by `v1` and `v2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub v0: Point3D,
    pub v1: Point3D,
    pub v2: Point3D,
    pub v3: Point3D,
}

impl CubicBezier {
    pub fn new(v0: Point3D, v1: Point3D, v2: Point3D, v3: Point3D) -> Self {
        Self { v0, v1, v2, v3 }
    }

    pub fn point_at(&self, t: f64) -> Point3D {
        let k = 1.0 - t;
        self.v0 * (k * k * k)
            + self.v1 * (3.0 * k * k * t)
            + self.v2 * (3.0 * k * t * t)
            + self.v3 * (t * t * t)
    }

    /// Samples `divisions + 1` points, both ends included.
    pub fn points(&self, divisions: usize) -> Vec<Point3D> {
        (0..=divisions)
            .map(|d| self.point_at(d as f64 / divisions as f64))
            .collect()
    }
}

pub struct ArcCurveSystem {}

impl ArcCurveSystem {
    /// Samples per half of the arc. Never less than 12.
    pub fn vertex_count(distance: f64) -> usize {
        (distance * DENSITY_FACTOR + DENSITY_BASE).floor() as usize * 2
    }

    /*
                    midStartAnchor---- mid ----- midEndAnchor
                  /                                           \
                 /                                             \
        start/anchor                                         end/anchor

            curve_a                                    curve_b
    */
    pub fn halves(start: Point3D, end: Point3D) -> Result<(CubicBezier, CubicBezier), ArcError> {
        let distance = start.distance(end);
        let tolerance = start.magnitude().max(end.magnitude()) * DEGENERATE_EPSILON;

        let mid = start.lerp(end, 0.5);
        let mid_length = mid.magnitude();

        // same point, or antipodal with the chord through the center
        if distance <= tolerance || mid_length <= tolerance {
            return Err(ArcError::DegenerateCurve {
                start: start.into(),
                end: end.into(),
            });
        }

        let mid = mid.normalize() * (mid_length + distance * BULGE_FACTOR);
        let normal = (start - end).normalize();

        let distance_half = distance * 0.5;
        let mid_start_anchor = mid + normal * distance_half;
        let mid_end_anchor = mid - normal * distance_half;

        Ok((
            CubicBezier::new(start, start, mid_start_anchor, mid),
            CubicBezier::new(mid, mid_end_anchor, end, end),
        ))
    }

    /// The sampled arc from `start` to `end`, `2 * vertex_count(d)` points long.
    pub fn build(start: Point3D, end: Point3D) -> Result<Vec<Point3D>, ArcError> {
        let (curve_a, curve_b) = Self::halves(start, end)?;
        let vertex_count = Self::vertex_count(start.distance(end));

        let mut points = curve_a.points(vertex_count);
        // curve_b starts on the same joint
        points.pop();
        points.extend(curve_b.points(vertex_count - 1));

        Ok(points)
    }

    pub fn line_vertices(polyline: &[Point3D]) -> Vec<[f32; 3]> {
        polyline
            .iter()
            .map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }
}
