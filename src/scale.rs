//! Map scale and its ground-truth correction.

use serde::{Deserialize, Serialize};

use crate::core::constants::SCALE_REFERENCE_PIXELS;
use crate::core::geo::Coordinate;
use crate::core::projection::Projection;
use crate::geodesy::GeodeticCalculator;
use crate::units::DistanceUnit;
use crate::{BoundsError, Result};

/// A map scale expressed through its denominator (the `N` of `1:N`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    denominator: f64,
}

impl Scale {
    pub fn new(denominator: f64) -> Self {
        Self { denominator }
    }

    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// Denominator to use when snapping to a zoom level.
    ///
    /// With `geodetic` unset, or for a linear projection (whose nominal
    /// denominator already describes ground distance), this is the stored
    /// value. For angular projections the nominal denominator assumes a
    /// uniform equatorial degree, which is systematically wrong away from
    /// the equator; the corrected value lays a reference paper span
    /// east-west through `reference` under that assumption and re-measures
    /// the true ground distance between its endpoints on the ellipsoid.
    pub fn effective_denominator(
        &self,
        geodetic: bool,
        projection: &Projection,
        dpi: f64,
        reference: Coordinate,
    ) -> Result<f64> {
        if !geodetic || !projection.is_angular() {
            return Ok(self.denominator);
        }
        if !reference.is_finite() {
            return Err(BoundsError::InvalidCoordinates(format!(
                "non-finite scale reference point ({}, {})",
                reference.x, reference.y
            )));
        }

        let paper_meters =
            DistanceUnit::Inch.convert(SCALE_REFERENCE_PIXELS / dpi, DistanceUnit::Meter);
        let nominal_ground_meters = self.denominator * paper_meters;
        let span_degrees =
            DistanceUnit::Meter.convert(nominal_ground_meters, DistanceUnit::Degree);
        if span_degrees <= 0.0 {
            return Ok(self.denominator);
        }

        // a span wider than the longitude range would wrap around the
        // antimeridian and measure the short way round; probe a narrow arc
        // and scale it up instead
        let probe_degrees = span_degrees.min(1.0);
        let calc = GeodeticCalculator::new(projection.ellipsoid());
        let west = Coordinate::new(reference.x - probe_degrees / 2.0, reference.y);
        let east = Coordinate::new(reference.x + probe_degrees / 2.0, reference.y);
        let ground_meters = calc.distance(west, east) * (span_degrees / probe_degrees);

        let corrected = ground_meters / paper_meters;
        log::debug!(
            "geodetic scale correction at ({}, {}): 1:{} -> 1:{}",
            reference.x,
            reference.y,
            self.denominator,
            corrected
        );
        Ok(corrected)
    }
}
