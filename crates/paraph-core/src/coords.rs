//! Zone coordinate conversion between editor units and API units
//!
//! The editor places zones in relative units: fractions of the page in
//! [0, 1], or percentages in [0, 100]. Document requests carry absolute
//! pixels for the rendered page; template requests carry percentages,
//! since templates are page-size-agnostic. Both are rounded to two
//! decimal places, the precision the API stores.

use std::fmt;

/// Unit a draft zone's coordinates are declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordUnit {
    /// Fraction of the page dimension, in [0, 1].
    Fraction,
    /// Percentage of the page dimension, in [0, 100].
    Percent,
}

impl CoordUnit {
    /// Value representing the full page dimension in this unit.
    pub fn full_scale(self) -> f64 {
        match self {
            CoordUnit::Fraction => 1.0,
            CoordUnit::Percent => 100.0,
        }
    }

    /// Whether `value` lies inside the unit's declared range.
    pub fn contains(self, value: f64) -> bool {
        value >= 0.0 && value <= self.full_scale()
    }
}

impl fmt::Display for CoordUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordUnit::Fraction => write!(f, "[0, 1]"),
            CoordUnit::Percent => write!(f, "[0, 100]"),
        }
    }
}

/// Rendered pixel dimensions of one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a relative coordinate to absolute pixels against a page dimension.
pub fn to_absolute(value: f64, unit: CoordUnit, dimension: f64) -> f64 {
    round2(value / unit.full_scale() * dimension)
}

/// Convert a relative coordinate to a rounded percentage.
pub fn to_percent(value: f64, unit: CoordUnit) -> f64 {
    round2(value / unit.full_scale() * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_to_absolute() {
        // 800px wide page
        assert_eq!(to_absolute(0.1, CoordUnit::Fraction, 800.0), 80.0);
        assert_eq!(to_absolute(0.3, CoordUnit::Fraction, 800.0), 240.0);
        assert_eq!(to_absolute(1.0, CoordUnit::Fraction, 800.0), 800.0);
    }

    #[test]
    fn test_percent_to_absolute() {
        assert_eq!(to_absolute(50.0, CoordUnit::Percent, 600.0), 300.0);
        assert_eq!(to_absolute(12.5, CoordUnit::Percent, 800.0), 100.0);
    }

    #[test]
    fn test_absolute_rounds_to_two_decimals() {
        // 1/3 of 100px is 33.333..., stored as 33.33
        assert_eq!(to_absolute(1.0 / 3.0, CoordUnit::Fraction, 100.0), 33.33);
        assert_eq!(to_absolute(2.0 / 3.0, CoordUnit::Fraction, 100.0), 66.67);
    }

    #[test]
    fn test_to_percent_in_both_units() {
        assert_eq!(to_percent(0.125, CoordUnit::Fraction), 12.5);
        assert_eq!(to_percent(33.333, CoordUnit::Percent), 33.33);
        assert_eq!(to_percent(1.0, CoordUnit::Fraction), 100.0);
    }

    #[test]
    fn test_unit_range_checks() {
        assert!(CoordUnit::Fraction.contains(0.0));
        assert!(CoordUnit::Fraction.contains(1.0));
        assert!(!CoordUnit::Fraction.contains(1.3));
        assert!(!CoordUnit::Fraction.contains(-0.01));
        assert!(CoordUnit::Percent.contains(100.0));
        assert!(!CoordUnit::Percent.contains(100.5));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Strategy for rendered page dimensions in pixels
    fn dimension() -> impl Strategy<Value = f64> {
        1.0f64..2000.0
    }

    // Strategy for a fraction coordinate (0.0 to 1.0)
    fn fraction() -> impl Strategy<Value = f64> {
        0.0f64..=1.0
    }

    proptest! {
        /// Property: absolute pixels never leave the page for in-range input
        #[test]
        fn absolute_stays_on_page(value in fraction(), dim in dimension()) {
            let absolute = to_absolute(value, CoordUnit::Fraction, dim);
            prop_assert!(absolute >= 0.0);
            // round2 can push the result at most half a hundredth past the edge
            prop_assert!(absolute <= dim + 0.01);
        }

        /// Property: the two unit declarations agree on the same position
        #[test]
        fn fraction_and_percent_agree(value in fraction(), dim in dimension()) {
            let via_fraction = to_absolute(value, CoordUnit::Fraction, dim);
            let via_percent = to_absolute(value * 100.0, CoordUnit::Percent, dim);
            // Each side rounds once, so they can sit on opposite sides of a boundary
            prop_assert!(
                (via_fraction - via_percent).abs() <= 0.011,
                "fraction gave {}, percent gave {}",
                via_fraction, via_percent
            );
        }

        /// Property: results carry at most two decimal places
        #[test]
        fn absolute_has_two_decimals(value in fraction(), dim in dimension()) {
            let absolute = to_absolute(value, CoordUnit::Fraction, dim);
            let hundredths = absolute * 100.0;
            prop_assert!(
                (hundredths - hundredths.round()).abs() < 1e-6,
                "{} is not a two-decimal value",
                absolute
            );
        }

        /// Property: conversion preserves ordering along an axis
        #[test]
        fn absolute_is_monotone(a in fraction(), b in fraction(), dim in dimension()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                to_absolute(lo, CoordUnit::Fraction, dim)
                    <= to_absolute(hi, CoordUnit::Fraction, dim)
            );
        }

        /// Property: percent output stays in [0, 100] for in-range input
        #[test]
        fn percent_output_in_range(value in fraction()) {
            let percent = to_percent(value, CoordUnit::Fraction);
            prop_assert!((0.0..=100.0).contains(&percent));
        }
    }
}
