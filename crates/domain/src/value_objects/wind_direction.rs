//! Wind direction value object
//!
//! Pairs the raw meteorological degrees with one of eight Hungarian compass
//! labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass labels, clockwise from north
pub const DIRECTIONS: [&str; 8] = ["É", "ÉK", "K", "DK", "D", "DNY", "NY", "ÉNY"];

/// Degrees covered by a single compass sector
const SECTOR_DEGREES: f64 = 45.0;

/// Wind direction in degrees together with its compass sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindDirection {
    degrees: f64,
    sector: usize,
}

impl WindDirection {
    /// Original degree value, unchanged
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Sector index into [`DIRECTIONS`] (0 = north)
    #[must_use]
    pub const fn sector(&self) -> usize {
        self.sector
    }

    /// Compass label for the sector
    #[must_use]
    pub const fn label(&self) -> &'static str {
        DIRECTIONS[self.sector % DIRECTIONS.len()]
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° ({})", self.degrees, self.label())
    }
}

/// Classify a direction in degrees into one of eight compass sectors.
///
/// `index = round(degrees / 45) mod 8`, using Euclidean modulo so that
/// values past 360 and negative values wrap. Half-sector ties round to the
/// even index. Non-finite input maps to north.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn classify_direction(degrees: f64) -> WindDirection {
    let sector = if degrees.is_finite() {
        // rem_euclid keeps the result in 0..8 and the cast cannot truncate
        (degrees / SECTOR_DEGREES).round_ties_even().rem_euclid(8.0) as usize
    } else {
        0
    };

    WindDirection { degrees, sector }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_at_zero() {
        let dir = classify_direction(0.0);
        assert_eq!(dir.sector(), 0);
        assert_eq!(dir.label(), "É");
    }

    #[test]
    fn wraps_at_full_circle() {
        assert_eq!(classify_direction(360.0).sector(), 0);
        assert_eq!(classify_direction(405.0).label(), "ÉK");
        assert_eq!(classify_direction(720.0).label(), "É");
    }

    #[test]
    fn south_at_202() {
        let dir = classify_direction(202.0);
        assert_eq!(dir.sector(), 4);
        assert_eq!(dir.label(), "D");
    }

    #[test]
    fn negative_degrees_wrap() {
        assert_eq!(classify_direction(-45.0).label(), "ÉNY");
        assert_eq!(classify_direction(-90.0).label(), "NY");
        assert_eq!(classify_direction(-360.0).label(), "É");
    }

    #[test]
    fn all_cardinal_points() {
        for (i, label) in DIRECTIONS.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let deg = i as f64 * 45.0;
            assert_eq!(classify_direction(deg).label(), *label);
        }
    }

    #[test]
    fn ties_round_to_even() {
        // 22.5 / 45 = 0.5 -> 0, 67.5 / 45 = 1.5 -> 2
        assert_eq!(classify_direction(22.5).sector(), 0);
        assert_eq!(classify_direction(67.5).sector(), 2);
        assert_eq!(classify_direction(337.5).sector(), 0);
    }

    #[test]
    fn keeps_original_degrees() {
        let dir = classify_direction(725.0);
        assert!((dir.degrees() - 725.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_matches_dashboard_format() {
        assert_eq!(classify_direction(202.0).to_string(), "202° (D)");
        assert_eq!(classify_direction(22.5).to_string(), "22.5° (É)");
    }

    #[test]
    fn non_finite_is_north() {
        assert_eq!(classify_direction(f64::NAN).sector(), 0);
        assert_eq!(classify_direction(f64::INFINITY).sector(), 0);
    }
}
