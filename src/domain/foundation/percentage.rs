//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number value between 0 and 100 inclusive.
///
/// Used for risk scores, breakdown slices, confidence and framework coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Rounds an arbitrary float onto the 0-100 scale.
    ///
    /// NaN and negative inputs become zero, anything above 100 becomes 100.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Self::ZERO;
        }
        Self(value.round().min(100.0) as u8)
    }

    /// Percentage of `part` in `whole`, zero when `whole` is not positive.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole <= 0.0 {
            return Self::ZERO;
        }
        Self::from_f64(part / whole * 100.0)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_from_f64_rounds_and_clamps() {
        assert_eq!(Percentage::from_f64(42.4).value(), 42);
        assert_eq!(Percentage::from_f64(42.5).value(), 43);
        assert_eq!(Percentage::from_f64(-12.0).value(), 0);
        assert_eq!(Percentage::from_f64(250.0).value(), 100);
        assert_eq!(Percentage::from_f64(f64::NAN).value(), 0);
    }

    #[test]
    fn percentage_of_guards_zero_denominator() {
        assert_eq!(Percentage::of(10.0, 0.0), Percentage::ZERO);
        assert_eq!(Percentage::of(1.0, 4.0).value(), 25);
        assert_eq!(Percentage::of(8.0, 4.0), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_as_bare_number() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
        let pct: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(pct.value(), 75);
    }
}
