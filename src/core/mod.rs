//! Core value types: geometry, projections, and the bounds representations.

pub mod bounds;
pub mod constants;
pub mod geo;
pub mod projection;
