//! Engine-wide physical and cartographic constants.
//! Keeping them in a single place makes the magic numbers easy to audit.

/// WGS84 semi-major axis in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 semi-minor axis in meters.
pub const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.314_245_179;

/// One international inch in meters.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Nominal ground length of one degree at the equator, in meters
/// (equatorial circumference / 360).
pub const METERS_PER_DEGREE: f64 = 40_075_016.685_578_49 / 360.0;

/// Paper span, in pixels, laid on the ground when measuring the
/// geodetically corrected scale denominator (one standard tile).
pub const SCALE_REFERENCE_PIXELS: f64 = 256.0;

/// Scale denominator of zoom level 0 in the well-known web-map scale set
/// (256 px tiles at 96 dpi spanning the full equator).
pub const WELL_KNOWN_SCALE_LEVEL0: f64 = 559_082_264.028_717_8;

/// Number of levels in the built-in well-known scale set.
pub const WELL_KNOWN_SCALE_LEVELS: usize = 20;
