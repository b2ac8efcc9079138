//! Length units and the conversion table between them.

use serde::{Deserialize, Serialize};

use crate::core::constants::{METERS_PER_DEGREE, METERS_PER_INCH};

/// A unit of distance a projection or paper measurement can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    /// Angular degrees, converted through the nominal equatorial degree length.
    Degree,
}

impl DistanceUnit {
    /// Meters in one unit.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Millimeter => 0.001,
            Self::Centimeter => 0.01,
            Self::Meter => 1.0,
            Self::Kilometer => 1000.0,
            Self::Inch => METERS_PER_INCH,
            Self::Foot => 0.3048,
            Self::Yard => 0.9144,
            Self::Mile => 1609.344,
            Self::Degree => METERS_PER_DEGREE,
        }
    }

    /// True when the unit is angular rather than linear.
    pub fn is_angular(&self) -> bool {
        matches!(self, Self::Degree)
    }

    /// Converts `value` from this unit into `to`.
    pub fn convert(&self, value: f64, to: DistanceUnit) -> f64 {
        if *self == to {
            return value;
        }
        value * self.meters_per_unit() / to.meters_per_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_to_meter() {
        let meters = DistanceUnit::Inch.convert(100.0, DistanceUnit::Meter);
        assert!((meters - 2.54).abs() < 1e-12);
    }

    #[test]
    fn test_meter_to_degree() {
        let degrees = DistanceUnit::Meter.convert(METERS_PER_DEGREE, DistanceUnit::Degree);
        assert!((degrees - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mile_to_foot() {
        let feet = DistanceUnit::Mile.convert(1.0, DistanceUnit::Foot);
        assert!((feet - 5280.0).abs() < 1e-9);
    }

    #[test]
    fn test_identity_conversion() {
        let value = 12345.678;
        assert_eq!(DistanceUnit::Meter.convert(value, DistanceUnit::Meter), value);
    }

    #[test]
    fn test_only_degree_is_angular() {
        assert!(DistanceUnit::Degree.is_angular());
        assert!(!DistanceUnit::Meter.is_angular());
        assert!(!DistanceUnit::Inch.is_angular());
    }
}
