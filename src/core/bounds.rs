//! Map bounds representations.
//!
//! A map viewport can be described either by an explicit extent or by a
//! center point plus a scale. The shared operation set lives in
//! [`MapBounds`]; every representation implements every operation,
//! including the ones that degenerate to identity for it, as an explicit
//! contract. Only the center+scale representation is implemented here.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::geo::{roll_latitude, roll_longitude, Coordinate, Envelope, PixelSize};
use crate::core::projection::Projection;
use crate::geodesy::GeodeticCalculator;
use crate::scale::Scale;
use crate::units::DistanceUnit;
use crate::zoom::{ZoomLevelSnapStrategy, ZoomLevels};
use crate::Result;

/// Operations shared by every map-bounds representation.
///
/// All transformations return a new value and never mutate in place; that
/// immutability is what makes bounds safely shareable across concurrent
/// rendering workers. Values of different representations never compare
/// equal.
pub trait MapBounds: Sized {
    /// The projection the bounds are defined in.
    fn projection(&self) -> &Projection;

    /// The geographic center of the viewport.
    fn center(&self) -> Coordinate;

    /// Concrete rectangular extent covering `paint_area` pixels at `dpi`.
    fn to_envelope(&self, paint_area: PixelSize, dpi: f64) -> Result<Envelope>;

    /// The scale denominator of the viewport for the given paint area.
    fn scale_denominator(&self, paint_area: PixelSize, dpi: f64) -> f64;

    /// Uniform zoom by `factor` (`> 1` zooms out), preserving the center.
    fn zoom_out(&self, factor: f64) -> Self;

    /// Replaces the scale outright, preserving the center.
    fn zoom_to_scale(&self, scale_denominator: f64) -> Self;

    /// Re-derives the bounds so the paint-area aspect ratio is preserved.
    fn adjusted_envelope(&self, paint_area: PixelSize) -> Self;

    /// Adjusts the bounds for a map rotated by `degrees`.
    fn adjust_to_rotation(&self, degrees: f64) -> Self;

    /// Snaps the scale to the nearest allowed zoom level.
    ///
    /// With `geodetic` set, snapping acts on the ground-accurate
    /// denominator at the viewport center rather than the nominal one.
    fn snap_to_nearest_zoom_level(
        &self,
        zoom_levels: &ZoomLevels,
        tolerance: f64,
        strategy: ZoomLevelSnapStrategy,
        geodetic: bool,
        paint_area: PixelSize,
        dpi: f64,
    ) -> Result<Self>;

    /// Base comparison every representation composes into its equality.
    fn same_projection(&self, other: &Self) -> bool {
        self.projection() == other.projection()
    }
}

/// Map bounds given by a center location and a map scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterScaleBounds {
    projection: Projection,
    center: Coordinate,
    scale_denominator: f64,
}

impl CenterScaleBounds {
    /// Creates bounds centered on `center` at `1:scale_denominator`.
    ///
    /// Degenerate denominators (non-positive or non-finite) are accepted
    /// and flow through unchanged; they produce degenerate envelopes
    /// downstream.
    pub fn new(projection: Projection, center: Coordinate, scale_denominator: f64) -> Self {
        if !scale_denominator.is_finite() || scale_denominator <= 0.0 {
            log::warn!("degenerate scale denominator 1:{scale_denominator} accepted");
        }
        Self {
            projection,
            center,
            scale_denominator,
        }
    }

    // Inch distances mean nothing on a curved surface, so the envelope is
    // built from four destination points on the ellipsoid and the result
    // rolled back into longitude/latitude range.
    fn geodetic_envelope(&self, geo_width_inches: f64, geo_height_inches: f64) -> Result<Envelope> {
        let calc = GeodeticCalculator::new(self.projection.ellipsoid());
        let unit = calc.ellipsoid_unit();
        let geo_width = DistanceUnit::Inch.convert(geo_width_inches, unit);
        let geo_height = DistanceUnit::Inch.convert(geo_height_inches, unit);

        let west = calc.destination(self.center, -90.0, geo_width / 2.0)?;
        let east = calc.destination(self.center, 90.0, geo_width / 2.0)?;
        let south = calc.destination(self.center, 180.0, geo_height / 2.0)?;
        let north = calc.destination(self.center, 0.0, geo_height / 2.0)?;

        let min_x = west.x.min(east.x);
        let max_x = west.x.max(east.x);
        let min_y = south.y.min(north.y);
        let max_y = south.y.max(north.y);

        Ok(Envelope::from_coords(
            roll_longitude(min_x),
            roll_latitude(min_y),
            roll_longitude(max_x),
            roll_latitude(max_y),
        ))
    }
}

impl MapBounds for CenterScaleBounds {
    fn projection(&self) -> &Projection {
        &self.projection
    }

    fn center(&self) -> Coordinate {
        self.center
    }

    fn to_envelope(&self, paint_area: PixelSize, dpi: f64) -> Result<Envelope> {
        // ground distance = paper distance * scale denominator
        let geo_width_inches = self.scale_denominator * paint_area.width / dpi;
        let geo_height_inches = self.scale_denominator * paint_area.height / dpi;

        let unit = self.projection.unit();
        if unit.is_angular() {
            self.geodetic_envelope(geo_width_inches, geo_height_inches)
        } else {
            let geo_width = DistanceUnit::Inch.convert(geo_width_inches, unit);
            let geo_height = DistanceUnit::Inch.convert(geo_height_inches, unit);
            Ok(Envelope::from_center_and_size(
                self.center,
                geo_width,
                geo_height,
            ))
        }
    }

    /// The stored denominator already encodes the scale; paint area and dpi
    /// only matter to extent-first representations.
    fn scale_denominator(&self, _paint_area: PixelSize, _dpi: f64) -> f64 {
        self.scale_denominator
    }

    fn zoom_out(&self, factor: f64) -> Self {
        // exact compare, matching the equality contract; skipping the
        // allocation is not part of the observable contract
        if factor == 1.0 {
            return self.clone();
        }
        Self::new(
            self.projection.clone(),
            self.center,
            self.scale_denominator * factor,
        )
    }

    fn zoom_to_scale(&self, scale_denominator: f64) -> Self {
        Self::new(self.projection.clone(), self.center, scale_denominator)
    }

    /// Identity: a center+scale viewport does not depend on the paint-area
    /// aspect ratio.
    fn adjusted_envelope(&self, _paint_area: PixelSize) -> Self {
        self.clone()
    }

    /// Identity: the center stays the same under rotation and there is no
    /// stored extent to rotate.
    fn adjust_to_rotation(&self, _degrees: f64) -> Self {
        self.clone()
    }

    fn snap_to_nearest_zoom_level(
        &self,
        zoom_levels: &ZoomLevels,
        tolerance: f64,
        strategy: ZoomLevelSnapStrategy,
        geodetic: bool,
        paint_area: PixelSize,
        dpi: f64,
    ) -> Result<Self> {
        let current = self.scale_denominator(paint_area, dpi);
        let target =
            Scale::new(current).effective_denominator(geodetic, &self.projection, dpi, self.center)?;
        let chosen = match strategy.search(target, tolerance, zoom_levels) {
            Some(result) => {
                log::debug!(
                    "snapped 1:{target} to zoom level {} (1:{})",
                    result.zoom_level,
                    result.scale_denominator
                );
                result.scale_denominator
            }
            None => current,
        };
        Ok(Self::new(self.projection.clone(), self.center, chosen))
    }
}

impl PartialEq for CenterScaleBounds {
    fn eq(&self, other: &Self) -> bool {
        self.same_projection(other)
            && self.center == other.center
            && self.scale_denominator == other.scale_denominator
    }
}

// equality compares floats exactly, so hashing their bits is consistent
// once the two zero representations are collapsed
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl Hash for CenterScaleBounds {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.projection.hash(state);
        canonical_bits(self.center.x).hash(state);
        canonical_bits(self.center.y).hash(state);
        canonical_bits(self.scale_denominator).hash(state);
    }
}

impl fmt::Display for CenterScaleBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CenterScaleBounds {{ center: ({}, {}), scale_denominator: {} }}",
            self.center.x, self.center.y, self.scale_denominator
        )
    }
}
