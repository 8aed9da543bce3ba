//! # Great-Circle Distance
//!
//! Every edge weight in the graph is a distance produced here. The earth
//! model is fixed per build through [`EarthModel`]:
//!
//! - `spherical` (default): haversine on a sphere of radius
//!   [`MEAN_EARTH_RADIUS_KM`].
//! - `ellipsoidal`: Vincenty's inverse formula on the WGS-84 ellipsoid.
//!
//! ## Invariants
//!
//! - `distance(a, b) == distance(b, a)`, bitwise for both models.
//! - `distance(a, a) == 0`.
//! - Results are never negative.
//!
//! Out-of-range input is unrepresentable: callers holding raw degrees go
//! through [`distance_between`], which validates via [`Coordinate::new`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, Kilometers};
use crate::error::CoordinateError;

/// Radius of the spherical earth model in kilometres.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// WGS-84 semi-major axis in metres.
const WGS84_A: f64 = 6_378_137.0;

/// WGS-84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

const VINCENTY_MAX_ITERATIONS: usize = 200;
const VINCENTY_TOLERANCE: f64 = 1e-12;

/// A pure distance function between two coordinates.
pub trait DistanceModel: Send + Sync {
    /// Great-circle (or geodesic) distance in kilometres.
    fn distance(&self, a: Coordinate, b: Coordinate) -> Kilometers;

    /// Short identifier for logging.
    fn name(&self) -> &'static str;
}

/// Haversine distance on a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius_km: f64,
}

impl Haversine {
    /// A sphere with the given radius in kilometres.
    pub fn with_radius(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Radius of the sphere in kilometres.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::with_radius(MEAN_EARTH_RADIUS_KM)
    }
}

impl DistanceModel for Haversine {
    fn distance(&self, a: Coordinate, b: Coordinate) -> Kilometers {
        // abs() keeps the computation bitwise symmetric in (a, b).
        let dlat = (b.lat() - a.lat()).abs().to_radians();
        let dlon = (b.lon() - a.lon()).abs().to_radians();
        let half_chord = (dlat / 2.0).sin().powi(2)
            + a.lat_radians().cos() * b.lat_radians().cos() * (dlon / 2.0).sin().powi(2);
        let central_angle = 2.0 * half_chord.sqrt().min(1.0).asin();
        Kilometers::new(self.radius_km * central_angle)
    }

    fn name(&self) -> &'static str {
        "haversine"
    }
}

/// Vincenty inverse geodesic on the WGS-84 ellipsoid.
///
/// Near-antipodal points may fail to converge; those fall back to the
/// spherical result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vincenty;

impl Vincenty {
    /// Geodesic distance in metres, or `None` when the iteration diverges.
    fn inverse_metres(a: Coordinate, b: Coordinate) -> Option<f64> {
        let semi_minor = (1.0 - WGS84_F) * WGS84_A;
        let l = (b.lon() - a.lon()).to_radians();
        let u1 = ((1.0 - WGS84_F) * a.lat_radians().tan()).atan();
        let u2 = ((1.0 - WGS84_F) * b.lat_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        for _ in 0..VINCENTY_MAX_ITERATIONS {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            if sin_sigma == 0.0 {
                // Coincident points.
                return Some(0.0);
            }
            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // Equatorial line: cos_sq_alpha == 0.
            let cos_2sigma_m = if cos_sq_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                0.0
            };
            let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
            let previous = lambda;
            lambda = l
                + (1.0 - c)
                    * WGS84_F
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - previous).abs() < VINCENTY_TOLERANCE {
                let u_sq = cos_sq_alpha * (WGS84_A * WGS84_A - semi_minor * semi_minor)
                    / (semi_minor * semi_minor);
                let big_a = 1.0
                    + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
                let big_b =
                    u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
                let delta_sigma = big_b
                    * sin_sigma
                    * (cos_2sigma_m
                        + big_b / 4.0
                            * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                                - big_b / 6.0
                                    * cos_2sigma_m
                                    * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                    * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
                return Some(semi_minor * big_a * (sigma - delta_sigma));
            }
        }
        None
    }
}

impl DistanceModel for Vincenty {
    fn distance(&self, a: Coordinate, b: Coordinate) -> Kilometers {
        if a == b {
            return Kilometers::ZERO;
        }
        // The iteration is not exactly symmetric; evaluate in a fixed order.
        let (a, b) = match a.lat().total_cmp(&b.lat()).then(a.lon().total_cmp(&b.lon())) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        match Self::inverse_metres(a, b) {
            Some(metres) => Kilometers::new(metres / 1000.0),
            None => {
                tracing::warn!(
                    from = %a,
                    to = %b,
                    "vincenty inverse did not converge; falling back to haversine"
                );
                Haversine::default().distance(a, b)
            }
        }
    }

    fn name(&self) -> &'static str {
        "vincenty"
    }
}

/// Earth model selected in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarthModel {
    /// Haversine on a sphere of radius 6371.0 km.
    #[default]
    Spherical,
    /// Vincenty on the WGS-84 ellipsoid.
    Ellipsoidal,
}

impl EarthModel {
    /// Returns the snake_case identifier, matching serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spherical => "spherical",
            Self::Ellipsoidal => "ellipsoidal",
        }
    }
}

impl std::fmt::Display for EarthModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DistanceModel for EarthModel {
    fn distance(&self, a: Coordinate, b: Coordinate) -> Kilometers {
        match self {
            Self::Spherical => Haversine::default().distance(a, b),
            Self::Ellipsoidal => Vincenty.distance(a, b),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Spherical => Haversine::default().name(),
            Self::Ellipsoidal => Vincenty.name(),
        }
    }
}

/// Spherical great-circle distance with the default radius.
pub fn great_circle_distance(a: Coordinate, b: Coordinate) -> Kilometers {
    Haversine::default().distance(a, b)
}

/// Validate raw degrees and return the spherical distance between them.
pub fn distance_between(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<Kilometers, CoordinateError> {
    let a = Coordinate::new(lat1, lon1)?;
    let b = Coordinate::new(lat2, lon2)?;
    Ok(great_circle_distance(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn haversine_ten_degrees_on_equator() {
        let d = great_circle_distance(coord(0.0, 0.0), coord(0.0, 10.0));
        assert!((d.value() - 1111.949).abs() < 1e-3, "got {d}");
        assert_eq!(d.round_to_tenth().value(), 1111.9);
    }

    #[test]
    fn haversine_identity_is_zero() {
        let p = coord(35.6586, 139.7454);
        assert_eq!(great_circle_distance(p, p), Kilometers::ZERO);
    }

    #[test]
    fn haversine_is_symmetric() {
        let tokyo = coord(35.6586, 139.7454);
        let colombo = coord(6.9568, 79.8577);
        assert_eq!(
            great_circle_distance(tokyo, colombo),
            great_circle_distance(colombo, tokyo)
        );
    }

    #[test]
    fn haversine_antipodes_is_half_circumference() {
        let d = great_circle_distance(coord(0.0, 0.0), coord(0.0, 180.0));
        let expected = std::f64::consts::PI * MEAN_EARTH_RADIUS_KM;
        assert!((d.value() - expected).abs() < 1e-6);
    }

    #[test]
    fn haversine_custom_radius_scales() {
        let unit = Haversine::with_radius(1.0);
        let d = unit.distance(coord(0.0, 0.0), coord(0.0, 90.0));
        assert!((d.value() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(unit.radius_km(), 1.0);
    }

    #[test]
    fn vincenty_ten_degrees_on_equator_follows_semi_major_axis() {
        let d = Vincenty.distance(coord(0.0, 0.0), coord(0.0, 10.0));
        // a * 10° in radians
        assert!((d.value() - 1113.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn vincenty_meridian_degree() {
        // One degree of latitude at the equator is ~110.574 km on WGS-84.
        let d = Vincenty.distance(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((d.value() - 110.574).abs() < 0.01, "got {d}");
    }

    #[test]
    fn vincenty_is_bitwise_symmetric() {
        let south = coord(-50.0, 60.0);
        let north = coord(-45.0, 70.0);
        assert_eq!(Vincenty.distance(south, north), Vincenty.distance(north, south));
        let same_lat = (coord(10.0, 20.0), coord(10.0, -30.0));
        assert_eq!(
            Vincenty.distance(same_lat.0, same_lat.1),
            Vincenty.distance(same_lat.1, same_lat.0)
        );
    }

    #[test]
    fn vincenty_identity_is_zero() {
        let p = coord(-6.1177, 106.9069);
        assert_eq!(Vincenty.distance(p, p), Kilometers::ZERO);
    }

    #[test]
    fn vincenty_nearly_symmetric() {
        let seoul = coord(37.4602, 126.4407);
        let bangkok = coord(13.6894, 100.75);
        let ab = Vincenty.distance(seoul, bangkok).value();
        let ba = Vincenty.distance(bangkok, seoul).value();
        assert!((ab - ba).abs() < 1e-4);
    }

    #[test]
    fn vincenty_antipodal_falls_back_without_panicking() {
        let d = Vincenty.distance(coord(0.0, 0.0), coord(0.5, 179.7));
        assert!(d.value() > 19_000.0);
    }

    #[test]
    fn earth_model_dispatch() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 10.0);
        assert_eq!(
            EarthModel::Spherical.distance(a, b),
            great_circle_distance(a, b)
        );
        assert_eq!(EarthModel::Ellipsoidal.distance(a, b), Vincenty.distance(a, b));
        assert_eq!(EarthModel::Spherical.name(), "haversine");
        assert_eq!(EarthModel::Ellipsoidal.name(), "vincenty");
    }

    #[test]
    fn earth_model_serde_names() {
        assert_eq!(
            serde_json::to_string(&EarthModel::Ellipsoidal).unwrap(),
            "\"ellipsoidal\""
        );
        let parsed: EarthModel = serde_json::from_str("\"spherical\"").unwrap();
        assert_eq!(parsed, EarthModel::Spherical);
        assert_eq!(EarthModel::default(), EarthModel::Spherical);
    }

    #[test]
    fn distance_between_validates_input() {
        assert!(distance_between(0.0, 0.0, 0.0, 10.0).is_ok());
        assert!(matches!(
            distance_between(91.0, 0.0, 0.0, 0.0),
            Err(CoordinateError::OutOfRange { .. })
        ));
        assert!(matches!(
            distance_between(0.0, 0.0, 0.0, f64::NAN),
            Err(CoordinateError::NotFinite { .. })
        ));
    }
}
