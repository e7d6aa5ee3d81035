//! Raw style values to typed quantities.
//!
//! [§ 4 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)
//! "A dimension is a number immediately followed by a unit identifier."
//!
//! The parser accepts a deliberately permissive relaxation of the CSS
//! dimension grammar: the numeric capture is any non-empty run of digits,
//! `+`, `.` and `-`, and the unit is a run of ASCII letters (any case) or a
//! lone `%`. A capture that is not a well-formed float (e.g. `"3.5.2"`)
//! still claims the token, carrying NaN as its value so the malformation
//! stays observable downstream instead of collapsing to zero.

use crate::properties::PropertyDefaults;
use crate::quantity::{ParsedValue, Quantity, RawValue};
use quokka_common::warning::warn_once;

/// Parse a raw value into one quantity or an ordered sequence of quantities.
///
/// A value with internal whitespace is an ordered list of independent
/// quantities (shorthand style, e.g. `"10px 20%"`); each token is parsed
/// with the same property defaults and order is preserved. Whitespace
/// detection runs on the trimmed text, so padding around a single token
/// does not force list mode.
#[must_use]
pub fn parse_value(raw: &RawValue, property: &str, defaults: &PropertyDefaults) -> ParsedValue {
    let text = raw.to_string();
    let trimmed = text.trim();

    if trimmed.contains(char::is_whitespace) {
        let quantities = trimmed
            .split_whitespace()
            .map(|token| parse_token(token, property, defaults))
            .collect();
        return ParsedValue::Multiple(quantities);
    }

    ParsedValue::Single(parse_token(trimmed, property, defaults))
}

/// Parse one whitespace-free token.
///
/// The token resolves in one of four ways, in order:
/// 1. `<number><unit>` dimension: both captures taken from the token.
/// 2. Bare number: value taken from the token, unit stays at the
///    property default.
/// 3. Unit-only keyword (e.g. `auto`): the whole token becomes the unit,
///    value stays at the property default.
/// 4. Empty token: both fields stay at the property defaults.
fn parse_token(token: &str, property: &str, defaults: &PropertyDefaults) -> Quantity {
    let mut value = defaults.default_value(property);
    let mut unit = defaults.default_unit(property).to_string();

    if let Some((number, dimension_unit)) = split_dimension(token) {
        value = number.parse().unwrap_or_else(|_| {
            warn_once(
                "Units",
                &format!("malformed numeric '{number}' in '{token}' parses as NaN"),
            );
            f64::NAN
        });
        unit = dimension_unit.to_string();
    } else if let Ok(bare) = token.parse::<f64>() {
        value = bare;
    } else if !token.is_empty() {
        unit = token.to_string();
    }

    Quantity { value, unit }
}

/// Split a token into its numeric and unit captures, anchored at both ends.
///
/// Returns `None` unless the token is a non-empty numeric run immediately
/// followed by a non-empty unit run, with nothing before or after.
fn split_dimension(token: &str) -> Option<(&str, &str)> {
    let boundary = token.find(is_unit_start)?;
    let (number, unit) = token.split_at(boundary);

    if number.is_empty() || !number.chars().all(is_number_char) {
        return None;
    }

    // The unit is all ASCII letters, or exactly the percent sign. A mixed
    // tail like "px%" is not a unit and the token falls through to the
    // keyword path.
    if unit != "%" && !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some((number, unit))
}

/// Check if a character can appear in the numeric capture of a dimension.
const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '.' | '-')
}

/// Check if a character can start the unit capture of a dimension.
const fn is_unit_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '%'
}
