//! Semantic scalar values: bare numbers or pass-through strings.
//!
//! Callers hand the engine plain numbers (`100`) or CSS strings (`"100%"`,
//! `"auto"`, `"1rem"`). Numbers pick up a unit only when a mapper places them
//! in a unit-bearing position (`px` for lengths, `deg` for rotation); strings
//! always pass through verbatim.

use std::fmt;

use crate::style::record::StyleValue;

/// A number-or-string property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A bare number. The consuming mapper decides the unit.
    Num(f64),
    /// A pass-through string, emitted verbatim.
    Raw(String),
}

impl Scalar {
    /// Create a numeric scalar.
    pub fn num(value: f64) -> Self {
        Self::Num(value)
    }

    /// Create a pass-through string scalar.
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// Interpret as a length: numbers become `px`, strings pass through.
    pub fn as_px(&self) -> StyleValue {
        match self {
            Self::Num(n) => StyleValue::Px(*n),
            Self::Raw(s) => StyleValue::Str(s.clone()),
        }
    }

    /// Interpret as a unitless value: numbers stay bare, strings pass through.
    pub fn as_number(&self) -> StyleValue {
        match self {
            Self::Num(n) => StyleValue::Number(*n),
            Self::Raw(s) => StyleValue::Str(s.clone()),
        }
    }

    /// Render as a length fragment for composed strings (`"10px"`, `"50%"`).
    pub fn px_string(&self) -> String {
        match self {
            Self::Num(n) => format!("{}px", fmt_number(*n)),
            Self::Raw(s) => s.clone(),
        }
    }

    /// Render as an angle fragment: numbers become `deg`, strings pass through.
    pub fn deg_string(&self) -> String {
        match self {
            Self::Num(n) => format!("{}deg", fmt_number(*n)),
            Self::Raw(s) => s.clone(),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", fmt_number(*n)),
            Self::Raw(s) => write!(f, "{s}"),
        }
    }
}

/// Format a number without a trailing `.0` for whole values.
pub(crate) fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_as_px() {
        let s = Scalar::num(10.0);
        assert_eq!(s.as_px(), StyleValue::Px(10.0));
        assert_eq!(s.px_string(), "10px");
    }

    #[test]
    fn raw_as_px_passes_through() {
        let s = Scalar::raw("100%");
        assert_eq!(s.as_px(), StyleValue::Str("100%".into()));
        assert_eq!(s.px_string(), "100%");
    }

    #[test]
    fn num_as_number_stays_unitless() {
        let s = Scalar::num(0.75);
        assert_eq!(s.as_number(), StyleValue::Number(0.75));
    }

    #[test]
    fn deg_string_appends_unit_to_numbers_only() {
        assert_eq!(Scalar::num(45.0).deg_string(), "45deg");
        assert_eq!(Scalar::raw("0.5turn").deg_string(), "0.5turn");
    }

    #[test]
    fn from_impls() {
        assert_eq!(Scalar::from(12), Scalar::Num(12.0));
        assert_eq!(Scalar::from(1.5), Scalar::Num(1.5));
        assert_eq!(Scalar::from("auto"), Scalar::Raw("auto".into()));
    }

    #[test]
    fn display_whole_numbers_without_fraction() {
        assert_eq!(Scalar::num(16.0).to_string(), "16");
        assert_eq!(Scalar::num(2.5).to_string(), "2.5");
        assert_eq!(Scalar::num(-3.0).to_string(), "-3");
        assert_eq!(Scalar::raw("50vw").to_string(), "50vw");
    }

    #[test]
    fn negative_values_pass_through_unvalidated() {
        // Validation is the caller's job; the engine never rejects values.
        assert_eq!(Scalar::num(-10.0).px_string(), "-10px");
    }
}
