//! # mapbounds
//!
//! Conversions between a "center + scale" description of a map viewport
//! and a concrete rectangular geographic extent, for cartographic
//! rendering pipelines.
//!
//! The central type is [`CenterScaleBounds`]: a geographic center point, a
//! map scale denominator, and the projection they are defined in. It can be
//! turned into an [`Envelope`] for a given paint area and resolution, and
//! transformed (zoomed, snapped to a discrete zoom level, rotated) as a
//! pure value, so arbitrary numbers of rendering workers can share it
//! without coordination.

pub mod core;
pub mod geodesy;
pub mod scale;
pub mod units;
pub mod zoom;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::{CenterScaleBounds, MapBounds},
    geo::{roll_latitude, roll_longitude, Coordinate, Envelope, PixelSize},
    projection::Projection,
};

pub use crate::geodesy::{Ellipsoid, GeodeticCalculator};
pub use crate::scale::Scale;
pub use crate::units::DistanceUnit;
pub use crate::zoom::{SearchResult, ZoomLevelSnapStrategy, ZoomLevels};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, BoundsError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum BoundsError {
    #[error("geodetic computation failed: {0}")]
    Geodesy(String),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
}
