//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{
    BEAUFORT_SCALE, CityName, Cloudiness, DIRECTIONS, GeoLocation, Humidity, classify_cloudiness,
    classify_direction, classify_wind,
};
use proptest::prelude::*;

// ============================================================================
// Beaufort Property Tests
// ============================================================================

mod beaufort_tests {
    use super::*;

    /// Contiguous interval of band `i`: (previous upper, own upper], with the
    /// first band closed at zero.
    fn contiguous_bounds(i: usize) -> (f64, f64) {
        let lower = if i == 0 {
            0.0
        } else {
            BEAUFORT_SCALE[i - 1].upper
        };
        (lower, BEAUFORT_SCALE[i].upper)
    }

    proptest! {
        #[test]
        fn every_non_negative_speed_classifies(speed in 0.0f64..1000.0f64) {
            let category = classify_wind(speed);
            prop_assert!(!category.is_unknown());
        }

        #[test]
        fn category_interval_contains_speed(speed in 0.0f64..40.0f64) {
            let category = classify_wind(speed);
            let containing = (0..BEAUFORT_SCALE.len()).find(|&i| {
                let (lower, upper) = contiguous_bounds(i);
                if i == 0 {
                    speed >= lower && speed <= upper
                } else {
                    speed > lower && speed <= upper
                }
            });
            prop_assert!(containing.is_some());
            let band = BEAUFORT_SCALE[containing.unwrap_or_default()];
            prop_assert_eq!(band.category, category);
        }

        #[test]
        fn printed_band_membership_is_respected(index in 0usize..12, t in 0.0f64..=1.0f64) {
            let band = BEAUFORT_SCALE[index];
            let speed = (band.upper - band.lower).mul_add(t, band.lower).min(band.upper);
            // exact shared bounds (0.3) go to the earlier band
            if index == 0 || speed > BEAUFORT_SCALE[index - 1].upper {
                prop_assert_eq!(classify_wind(speed), band.category);
            }
        }

        #[test]
        fn classification_is_monotonic(a in 0.0f64..50.0f64, b in 0.0f64..50.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |speed: f64| BEAUFORT_SCALE.iter().position(|band| speed <= band.upper);
            prop_assert!(rank(lo) <= rank(hi));
        }

        #[test]
        fn negative_speed_is_unknown(speed in -1000.0f64..-0.0001f64) {
            prop_assert!(classify_wind(speed).is_unknown());
        }
    }
}

// ============================================================================
// Wind Direction Property Tests
// ============================================================================

mod wind_direction_tests {
    use super::*;

    proptest! {
        #[test]
        fn sector_is_always_in_range(degrees in -10_000.0f64..10_000.0f64) {
            let dir = classify_direction(degrees);
            prop_assert!(dir.sector() < DIRECTIONS.len());
        }

        #[test]
        fn full_turns_do_not_change_sector(degrees in 0.0f64..360.0f64, turns in -5i32..5i32) {
            let shifted = degrees + f64::from(turns) * 360.0;
            prop_assert_eq!(
                classify_direction(degrees).sector(),
                classify_direction(shifted).sector()
            );
        }

        #[test]
        fn degrees_are_preserved(degrees in -720.0f64..720.0f64) {
            let dir = classify_direction(degrees);
            prop_assert!((dir.degrees() - degrees).abs() < f64::EPSILON);
        }
    }
}

// ============================================================================
// Cloudiness Property Tests
// ============================================================================

mod cloudiness_tests {
    use super::*;

    proptest! {
        #[test]
        fn lookup_never_fails(description in ".*") {
            let cloudiness = classify_cloudiness(&description);
            prop_assert!(!cloudiness.label().is_empty());
        }

        #[test]
        fn non_matching_text_is_unknown(description in "[A-Z0-9]{1,20}") {
            prop_assert_eq!(classify_cloudiness(&description), Cloudiness::Unknown);
        }
    }
}

// ============================================================================
// CityName Property Tests
// ============================================================================

mod city_name_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalization_is_idempotent(raw in "[a-zA-Z]{1,12}( [a-zA-Z]{1,12})?") {
            let once = CityName::new(&raw).unwrap();
            let twice = CityName::new(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn first_letter_is_uppercase(raw in "[a-z][a-zA-Z]{0,15}") {
            let city = CityName::new(&raw).unwrap();
            let first = city.as_str().chars().next().unwrap();
            prop_assert!(first.is_uppercase());
        }

        #[test]
        fn blank_is_rejected(raw in "[ \t\n]*") {
            prop_assert!(CityName::new(&raw).is_err());
        }
    }
}

// ============================================================================
// Upstream Reading Property Tests
// ============================================================================

mod reading_tests {
    use super::*;

    proptest! {
        #[test]
        fn location_survives_json(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            let json = serde_json::to_string(&loc).unwrap();
            let back: GeoLocation = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, loc);
        }

        #[test]
        fn latitude_beyond_pole_rejected(
            overshoot in 0.001f64..1000.0f64,
            north in any::<bool>(),
            lon in -180.0f64..=180.0f64
        ) {
            let lat = if north { 90.0 + overshoot } else { -90.0 - overshoot };
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn clamping_agrees_with_strict_constructor_in_range(value in 0u8..=100u8) {
            prop_assert_eq!(Humidity::new(value), Ok(Humidity::clamped(value)));
        }

        #[test]
        fn clamping_saturates_above_range(value in 101u8..=255u8) {
            prop_assert_eq!(Humidity::clamped(value).value(), Humidity::MAX);
        }
    }
}
