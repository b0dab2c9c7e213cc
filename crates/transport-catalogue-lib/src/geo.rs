use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters used for great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Geographic position of a stop in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another position in meters.
    ///
    /// Uses the spherical law of cosines. Identical positions short-circuit to
    /// zero so rounding noise never leaks into route statistics.
    pub fn distance_to(&self, other: &Self) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat_from = self.lat.to_radians();
        let lat_to = other.lat.to_radians();
        let delta_lng = (self.lng - other.lng).abs().to_radians();

        let cosine =
            lat_from.sin() * lat_to.sin() + lat_from.cos() * lat_to.cos() * delta_lng.cos();
        cosine.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_METERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_apart() {
        let point = Coordinates::new(55.611087, 37.20829);
        assert_eq!(point.distance_to(&point), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinates::new(55.611087, 37.20829);
        let b = Coordinates::new(55.595884, 37.209755);
        let forward = a.distance_to(&b);
        let backward = b.distance_to(&a);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_matches_arc_length() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 0.0);
        let expected = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;
        assert!((a.distance_to(&b) - expected).abs() < 1e-3);
    }
}
