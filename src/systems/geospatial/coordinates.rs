use cgmath::{InnerSpace, Vector3};

use crate::{components::location::LocationTable, error::ArcError, Point3D};

pub struct CoordinatesSystem {}

impl CoordinatesSystem {
    // axes come out as (y, z, x) to line up with the landmass
    // geometry drawn by the renderer on the same sphere
    pub fn lat_lon_to_cartesian(lat: f64, lon: f64, radius: f64) -> Point3D {
        let phi = lat.to_radians();
        let theta = lon.to_radians();

        let x = phi.cos() * theta.cos() * radius;
        let y = phi.cos() * theta.sin() * radius;
        let z = phi.sin() * radius;

        Vector3::new(y, z, x)
    }

    /// Inverse of [`Self::lat_lon_to_cartesian`], returns (lat, lon) in degrees.
    pub fn cartesian_to_lat_lon(point: Point3D) -> (f64, f64) {
        let n = point.normalize();
        let lat = n.y.clamp(-1.0, 1.0).asin().to_degrees();
        let lon = n.x.atan2(n.z).to_degrees();
        (lat, lon)
    }

    pub fn resolve(table: &LocationTable, name: &str, radius: f64) -> Result<Point3D, ArcError> {
        let location = table.get(name)?;
        Ok(Self::lat_lon_to_cartesian(
            location.lat,
            location.lon,
            radius,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EARTH_RADIUS;

    #[test]
    fn every_reference_city_lies_on_the_sphere() {
        let table = LocationTable::reference();
        for name in table.names() {
            let p = CoordinatesSystem::resolve(&table, name, EARTH_RADIUS).unwrap();
            let err = (p.magnitude() - EARTH_RADIUS).abs() / EARTH_RADIUS;
            assert!(err < 1e-6, "{name} is off the sphere: |p| = {}", p.magnitude());
        }
    }

    #[test]
    fn axes_are_permuted() {
        // lat 0, lon 0 lands on +z, lon 90 on +x, the north pole on +y
        let p = CoordinatesSystem::lat_lon_to_cartesian(0.0, 0.0, 2.0);
        assert!((p - Vector3::new(0.0, 0.0, 2.0)).magnitude() < 1e-12);
        let p = CoordinatesSystem::lat_lon_to_cartesian(0.0, 90.0, 2.0);
        assert!((p - Vector3::new(2.0, 0.0, 0.0)).magnitude() < 1e-12);
        let p = CoordinatesSystem::lat_lon_to_cartesian(90.0, 180.0, 2.0);
        assert!((p - Vector3::new(0.0, 2.0, 0.0)).magnitude() < 1e-12);
    }

    #[test]
    fn lat_lon_survives_the_trip_through_cartesian() {
        let table = LocationTable::reference();
        for name in ["dublin", "sydney", "vancouver", "kuala lumpur"] {
            let location = table.get(name).unwrap();
            let p = CoordinatesSystem::lat_lon_to_cartesian(location.lat, location.lon, 10.0);
            let (lat, lon) = CoordinatesSystem::cartesian_to_lat_lon(p);
            assert!((lat - location.lat).abs() < 1e-9, "{name} lat {lat}");
            assert!((lon - location.lon).abs() < 1e-9, "{name} lon {lon}");
        }
    }

    #[test]
    fn resolve_unknown_name() {
        let table = LocationTable::reference();
        assert_eq!(
            CoordinatesSystem::resolve(&table, "atlantis", EARTH_RADIUS),
            Err(ArcError::UnknownLocation("atlantis".to_string()))
        );
    }
}
