//! Ellipsoid-aware geodesic computations.
//!
//! Degree-based projections cannot use planar rectangle arithmetic: a
//! ground distance only maps to a longitude/latitude offset through the
//! forward (destination point) problem on the reference ellipsoid, solved
//! here with Vincenty's direct formula.

use crate::core::constants::{WGS84_SEMI_MAJOR_AXIS, WGS84_SEMI_MINOR_AXIS};
use crate::core::geo::Coordinate;
use crate::units::DistanceUnit;
use crate::{BoundsError, Result};

const MAX_ITERATIONS: usize = 100;
const CONVERGENCE: f64 = 1e-12;

/// A reference ellipsoid, defined by its semi axes in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub semi_major: f64,
    pub semi_minor: f64,
}

impl Ellipsoid {
    pub const fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            semi_major,
            semi_minor,
        }
    }

    pub const fn wgs84() -> Self {
        Self::new(WGS84_SEMI_MAJOR_AXIS, WGS84_SEMI_MINOR_AXIS)
    }

    pub fn flattening(&self) -> f64 {
        (self.semi_major - self.semi_minor) / self.semi_major
    }

    /// IUGG mean radius, `(2a + b) / 3`.
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semi_major + self.semi_minor) / 3.0
    }

    /// Unit the semi axes are expressed in.
    pub fn unit(&self) -> DistanceUnit {
        DistanceUnit::Meter
    }
}

/// Solves destination-point and distance problems on a reference ellipsoid.
///
/// Positions are [`Coordinate`]s holding longitude in `x` and latitude in
/// `y`, both in degrees. Azimuths are degrees clockwise from north, so 0 is
/// north, 90 east, -90 west and 180 south.
#[derive(Debug, Clone, Copy)]
pub struct GeodeticCalculator {
    ellipsoid: Ellipsoid,
}

impl GeodeticCalculator {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    /// Unit of distances fed into [`destination`](Self::destination).
    pub fn ellipsoid_unit(&self) -> DistanceUnit {
        self.ellipsoid.unit()
    }

    /// Destination point reached from `start` along `azimuth_degrees` after
    /// `distance` (in the ellipsoid unit), via Vincenty's direct formula.
    ///
    /// Fails when the starting position is unusable or the series does not
    /// converge. The failure is deterministic; retrying with identical
    /// inputs cannot succeed.
    pub fn destination(
        &self,
        start: Coordinate,
        azimuth_degrees: f64,
        distance: f64,
    ) -> Result<Coordinate> {
        if !start.is_finite() || start.y.abs() > 90.0 {
            return Err(BoundsError::InvalidCoordinates(format!(
                "unusable geodesic start position ({}, {})",
                start.x, start.y
            )));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(BoundsError::Geodesy(format!(
                "invalid geodesic distance {distance}"
            )));
        }
        if distance == 0.0 {
            return Ok(start);
        }

        let a = self.ellipsoid.semi_major;
        let b = self.ellipsoid.semi_minor;
        let f = self.ellipsoid.flattening();

        let alpha1 = azimuth_degrees.to_radians();
        let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

        let tan_u1 = (1.0 - f) * start.y.to_radians().tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;

        let sigma1 = tan_u1.atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let mut sigma = distance / (b * big_a);
        let mut converged = false;
        for _ in 0..MAX_ITERATIONS {
            let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            let sin_sigma = sigma.sin();
            let cos_sigma = sigma.cos();
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
            let next = distance / (b * big_a) + delta_sigma;
            let done = (next - sigma).abs() < CONVERGENCE;
            sigma = next;
            if done {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(BoundsError::Geodesy(
                "destination-point series did not converge".into(),
            ));
        }

        let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        let sin_sigma = sigma.sin();
        let cos_sigma = sigma.cos();

        let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
        let lambda =
            (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        let lon2 = start.x.to_radians() + l;

        Ok(Coordinate::new(lon2.to_degrees(), lat2.to_degrees()))
    }

    /// Great-circle distance between two lon/lat positions, in meters,
    /// using the haversine formula on the ellipsoid's mean radius.
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        let lat1 = from.y.to_radians();
        let lat2 = to.y.to_radians();
        let delta_lat = (to.y - from.y).to_radians();
        let delta_lon = (to.x - from.x).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let central = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        self.ellipsoid.mean_radius() * central
    }
}
