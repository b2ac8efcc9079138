//! Coordinate reference system representation.
//!
//! A projection is opaque apart from its authority code and the native unit
//! its coordinates are expressed in; the unit classification decides whether
//! envelope math is planar or geodesic.

use serde::{Deserialize, Serialize};

use crate::geodesy::Ellipsoid;
use crate::units::DistanceUnit;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Projection {
    code: String,
    unit: DistanceUnit,
}

impl Projection {
    pub fn new(code: impl Into<String>, unit: DistanceUnit) -> Self {
        Self {
            code: code.into(),
            unit,
        }
    }

    /// Geographic WGS84 (EPSG:4326), degree-based.
    pub fn wgs84() -> Self {
        Self::new("EPSG:4326", DistanceUnit::Degree)
    }

    /// Web Mercator (EPSG:3857), meter-based.
    pub fn web_mercator() -> Self {
        Self::new("EPSG:3857", DistanceUnit::Meter)
    }

    /// The authority code, e.g. `EPSG:4326`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Native unit of the projection's coordinates.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// True when coordinates are angular (degrees) rather than linear.
    pub fn is_angular(&self) -> bool {
        self.unit.is_angular()
    }

    /// Reference ellipsoid used for geodesic math in this projection.
    ///
    /// Always WGS84; a full EPSG parameter database is out of scope, this
    /// is the seam where one would plug in.
    pub fn ellipsoid(&self) -> Ellipsoid {
        Ellipsoid::wgs84()
    }
}
