use serde::{Deserialize, Serialize};

/// A 2D point in a projection's native unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a new coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both ordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// The requested paint area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangular extent in a projection's coordinates.
///
/// Envelopes are derived on demand from a bounds value, never stored in one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Envelope {
    /// Creates a new envelope from two corner points
    pub fn new(min: Coordinate, max: Coordinate) -> Self {
        Self { min, max }
    }

    /// Creates an envelope from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Coordinate::new(min_x, min_y), Coordinate::new(max_x, max_y))
    }

    /// Creates an envelope from a center point and size
    pub fn from_center_and_size(center: Coordinate, width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self::new(
            Coordinate::new(center.x - half_width, center.y - half_height),
            Coordinate::new(center.x + half_width, center.y + half_height),
        )
    }

    /// Gets the width of the envelope
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the envelope
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the center point of the envelope
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Checks if the envelope contains a point
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if the envelope is valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

/// Rolls a longitude into the `[-180, 180)` range.
///
/// Guards against destination points that wrapped past the antimeridian;
/// values already inside the range come back unchanged.
pub fn roll_longitude(x: f64) -> f64 {
    roll(x, 360.0, 180.0)
}

/// Rolls a latitude into the `[-90, 90)` range.
pub fn roll_latitude(y: f64) -> f64 {
    roll(y, 180.0, 90.0)
}

// Periodic roll with truncation toward zero: the upper boundary folds onto
// the lower one (roll(180, 360, 180) == -180).
fn roll(v: f64, period: f64, half: f64) -> f64 {
    v - ((v + v.signum() * half).trunc() / period).trunc() * period
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_from_center_and_size() {
        let envelope = Envelope::from_center_and_size(Coordinate::new(10.0, 20.0), 4.0, 6.0);
        assert_eq!(envelope.min, Coordinate::new(8.0, 17.0));
        assert_eq!(envelope.max, Coordinate::new(12.0, 23.0));
        assert_eq!(envelope.width(), 4.0);
        assert_eq!(envelope.height(), 6.0);
        assert_eq!(envelope.center(), Coordinate::new(10.0, 20.0));
        assert!(envelope.is_valid());
    }

    #[test]
    fn test_envelope_contains() {
        let envelope = Envelope::from_coords(-1.0, -1.0, 1.0, 1.0);
        assert!(envelope.contains(&Coordinate::new(0.0, 0.0)));
        assert!(envelope.contains(&Coordinate::new(1.0, -1.0)));
        assert!(!envelope.contains(&Coordinate::new(1.5, 0.0)));
    }

    #[test]
    fn test_roll_longitude_in_range_unchanged() {
        for lng in [-179.9, -90.0, 0.0, 45.5, 179.9] {
            assert_eq!(roll_longitude(lng), lng);
        }
    }

    #[test]
    fn test_roll_longitude_wraps() {
        assert!((roll_longitude(181.0) - (-179.0)).abs() < 1e-12);
        assert!((roll_longitude(-181.0) - 179.0).abs() < 1e-12);
        assert!((roll_longitude(270.0) - (-90.0)).abs() < 1e-12);
        assert!((roll_longitude(359.0) - (-1.0)).abs() < 1e-12);
        assert_eq!(roll_longitude(360.0), 0.0);
    }

    #[test]
    fn test_roll_longitude_upper_boundary_folds() {
        // 180 is excluded from the range and folds onto -180
        assert_eq!(roll_longitude(180.0), -180.0);
    }

    #[test]
    fn test_roll_latitude_in_range_unchanged() {
        for lat in [-89.9, -45.0, 0.0, 33.3, 89.9] {
            assert_eq!(roll_latitude(lat), lat);
        }
    }

    #[test]
    fn test_roll_latitude_wraps() {
        assert!((roll_latitude(91.0) - (-89.0)).abs() < 1e-12);
        assert!((roll_latitude(-91.0) - 89.0).abs() < 1e-12);
        assert_eq!(roll_latitude(90.0), -90.0);
        assert_eq!(roll_latitude(180.0), 0.0);
    }
}
