//! Discrete zoom levels and nearest-scale snapping.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::constants::{WELL_KNOWN_SCALE_LEVEL0, WELL_KNOWN_SCALE_LEVELS};

static WELL_KNOWN_SCALES: Lazy<Vec<f64>> = Lazy::new(|| {
    (0..WELL_KNOWN_SCALE_LEVELS)
        .map(|level| WELL_KNOWN_SCALE_LEVEL0 / 2_f64.powi(level as i32))
        .collect()
});

/// An ordered list of allowed scale denominators, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomLevels {
    scales: Vec<f64>,
}

impl ZoomLevels {
    /// Builds a level list; non-finite, non-positive and duplicate entries
    /// are dropped, the rest is sorted ascending.
    pub fn new(mut scales: Vec<f64>) -> Self {
        scales.retain(|s| s.is_finite() && *s > 0.0);
        scales.sort_by(f64::total_cmp);
        scales.dedup();
        Self { scales }
    }

    /// The standard web-map scale set (256 px tiles at 96 dpi, halving per
    /// level).
    pub fn well_known() -> Self {
        Self::new(WELL_KNOWN_SCALES.clone())
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Denominator of the level at `index` (ascending order).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len), like a slice index.
    pub fn scale_denominator(&self, index: usize) -> f64 {
        self.scales[index]
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }
}

/// Outcome of a zoom-level search: the chosen level and its denominator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub zoom_level: usize,
    pub scale_denominator: f64,
}

/// How a target denominator resolves against the discrete level list.
///
/// "Scale" here is the cartographic 1/denominator, so a *higher* scale
/// means a *smaller* denominator (more detail).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomLevelSnapStrategy {
    /// Nearest level; an exact tie resolves to the lower scale
    /// (larger denominator).
    ClosestLowestScaleOnTie,
    /// Nearest level; an exact tie resolves to the higher scale
    /// (smaller denominator).
    ClosestHighestScaleOnTie,
    /// Closest level whose scale is at least the target scale
    /// (denominator <= target), unless a level matches within tolerance.
    HigherScale,
    /// Closest level whose scale is at most the target scale
    /// (denominator >= target), unless a level matches within tolerance.
    LowerScale,
}

impl ZoomLevelSnapStrategy {
    /// Searches `levels` for the denominator to snap `target` to.
    ///
    /// A level whose relative distance to the target is within `tolerance`
    /// matches immediately for every strategy. Returns `None` when the
    /// level list is empty or the target is degenerate.
    pub fn search(&self, target: f64, tolerance: f64, levels: &ZoomLevels) -> Option<SearchResult> {
        if levels.is_empty() || !target.is_finite() || target <= 0.0 {
            return None;
        }
        let scales = levels.scales();
        let result = |zoom_level: usize| SearchResult {
            zoom_level,
            scale_denominator: scales[zoom_level],
        };

        let mut within: Option<usize> = None;
        for (i, d) in scales.iter().enumerate() {
            let relative = (target - d).abs() / target;
            if relative <= tolerance
                && within.map_or(true, |b| relative < (target - scales[b]).abs() / target)
            {
                within = Some(i);
            }
        }
        if let Some(i) = within {
            return Some(result(i));
        }

        let chosen = match self {
            Self::ClosestLowestScaleOnTie | Self::ClosestHighestScaleOnTie => {
                let mut best = 0usize;
                for (i, d) in scales.iter().enumerate().skip(1) {
                    let diff = (target - d).abs();
                    let best_diff = (target - scales[best]).abs();
                    // ascending order, so on a tie the later candidate is
                    // the larger denominator (the lower scale)
                    if diff < best_diff
                        || (diff == best_diff && matches!(self, Self::ClosestLowestScaleOnTie))
                    {
                        best = i;
                    }
                }
                best
            }
            Self::HigherScale => scales.iter().rposition(|d| *d <= target).unwrap_or(0),
            Self::LowerScale => scales
                .iter()
                .position(|d| *d >= target)
                .unwrap_or(scales.len() - 1),
        };
        Some(result(chosen))
    }
}
