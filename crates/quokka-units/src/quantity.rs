//! Value types exchanged with the embedding application.
//!
//! [§ 4 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)
//! "A dimension is a number immediately followed by a unit identifier."
//!
//! A [`Quantity`] is one parsed dimension. Raw inputs may carry several
//! whitespace-separated dimensions (shorthand style, e.g. `"10px 20%"`), so
//! parse results come back as a [`ParsedValue`] that mirrors the input shape.

use serde::Serialize;
use std::fmt;

/// A single measured dimension: numeric magnitude plus unit token.
///
/// The value is always the result of floating-point parsing of the numeric
/// capture; a malformed capture (e.g. `"3.5.2"`) carries NaN rather than a
/// silently coerced zero. The unit is the captured token verbatim, or the
/// property's configured default when the input carried none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    /// The numeric magnitude.
    pub value: f64,
    /// The unit token (may be the empty string for unitless properties
    /// such as `opacity`).
    pub unit: String,
}

impl Quantity {
    /// Create a quantity from a magnitude and a unit token.
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    /// Render the quantity in raw-value form, e.g. `10px` or `-3.5em`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// A parse or conversion result, mirroring the shape of the raw input.
///
/// A raw value without internal whitespace parses to [`Single`]; a
/// whitespace-separated list parses to [`Multiple`] with order preserved
/// (order is semantically significant, e.g. top/right/bottom/left shorthand).
///
/// Serializes untagged: a single quantity becomes a JSON object, a list
/// becomes a JSON array, matching what styling layers on the far side of an
/// FFI or IPC boundary expect.
///
/// [`Single`]: ParsedValue::Single
/// [`Multiple`]: ParsedValue::Multiple
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    /// One quantity, from an input with no internal whitespace.
    Single(Quantity),
    /// An ordered sequence of quantities, one per whitespace-separated token.
    Multiple(Vec<Quantity>),
}

impl ParsedValue {
    /// The quantity of a [`ParsedValue::Single`], or `None` for a sequence.
    #[must_use]
    pub fn as_single(&self) -> Option<&Quantity> {
        match self {
            Self::Single(quantity) => Some(quantity),
            Self::Multiple(_) => None,
        }
    }

    /// All quantities in input order, regardless of shape.
    #[must_use]
    pub fn quantities(&self) -> &[Quantity] {
        match self {
            Self::Single(quantity) => std::slice::from_ref(quantity),
            Self::Multiple(quantities) => quantities,
        }
    }

    /// Consume the result into a vector of quantities in input order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Quantity> {
        match self {
            Self::Single(quantity) => vec![quantity],
            Self::Multiple(quantities) => quantities,
        }
    }
}

/// A raw style value as supplied by the embedding application: a string or
/// a bare number.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Textual input, possibly carrying a unit and/or several tokens.
    Text(String),
    /// Bare numeric input; parses as a value with the property's default unit.
    Number(f64),
}

impl fmt::Display for RawValue {
    /// The string form the parser operates on. Numbers render without a
    /// trailing `.0` (`42.0` becomes `"42"`), matching their raw-value form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// The conversion target: one unit, or a sequence aligned positionally with
/// the parsed quantities of a multi-value input.
///
/// A single unit behaves as a one-entry sequence: against a multi-value
/// input it applies to the first position only, and later positions fall
/// back to the property's default unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitSpec {
    /// One target unit.
    One(String),
    /// Positionally aligned target units; missing positions fall back to
    /// the property's default unit.
    Many(Vec<String>),
}

impl UnitSpec {
    /// The target unit for position `index` of a multi-value input.
    #[must_use]
    pub fn target_at<'a>(&'a self, index: usize, fallback: &'a str) -> &'a str {
        match self {
            Self::One(unit) if index == 0 => unit,
            Self::One(_) => fallback,
            Self::Many(units) => units.get(index).map_or(fallback, String::as_str),
        }
    }

    /// The target unit for a single-quantity input: the sole unit, or the
    /// first entry of a sequence (falling back when the sequence is empty).
    #[must_use]
    pub fn single_target<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::One(unit) => unit,
            Self::Many(units) => units.first().map_or(fallback, String::as_str),
        }
    }
}

impl From<&str> for UnitSpec {
    fn from(unit: &str) -> Self {
        Self::One(unit.to_string())
    }
}

impl From<String> for UnitSpec {
    fn from(unit: String) -> Self {
        Self::One(unit)
    }
}

impl From<Vec<String>> for UnitSpec {
    fn from(units: Vec<String>) -> Self {
        Self::Many(units)
    }
}

impl From<Vec<&str>> for UnitSpec {
    fn from(units: Vec<&str>) -> Self {
        Self::Many(units.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for UnitSpec {
    fn from(units: &[&str]) -> Self {
        Self::Many(units.iter().map(|unit| (*unit).to_string()).collect())
    }
}
