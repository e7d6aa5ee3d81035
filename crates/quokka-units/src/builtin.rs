//! Ready-made conversion categories for environment-independent units.
//!
//! [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
//! "all of the absolute length units are compatible" - their ratios are
//! fixed by definition ("1px = 1/96th of 1in"), so these tables need no
//! context handle and work with any `Ctx`.
//!
//! [§ 6.2.2 Angle units](https://www.w3.org/TR/css-values-4/#angles)
//! likewise fixes degrees, gradians, radians, and turns against each other.
//!
//! Conversions that depend on the embedding environment - font metrics for
//! `em`, layout for `%`, the viewport for `vw`/`vh` - are deliberately not
//! defined here; the embedder registers those with whatever context type
//! they require.

use crate::registry::{CategoryBuilder, ConversionRegistry};

/// [§ 6.2.2](https://www.w3.org/TR/css-values-4/#angles) "There are 360
/// degrees in a full circle."
pub const DEGREES_PER_TURN: f64 = 360.0;

/// [§ 6.2.2](https://www.w3.org/TR/css-values-4/#angles) "There are 400
/// gradians in a full circle."
pub const GRADS_PER_DEGREE: f64 = 400.0 / 360.0;

/// [§ 6.1](https://www.w3.org/TR/css-values-4/#absolute-lengths)
/// "1px = 1/96th of 1in"
pub const PX_PER_INCH: f64 = 96.0;

/// [§ 6.1](https://www.w3.org/TR/css-values-4/#absolute-lengths)
/// "1cm = 96px/2.54"
pub const CM_PER_INCH: f64 = 2.54;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// [§ 6.1](https://www.w3.org/TR/css-values-4/#absolute-lengths)
/// "1pt = 1/72th of 1in"
pub const POINTS_PER_INCH: f64 = 72.0;

/// [§ 6.1](https://www.w3.org/TR/css-values-4/#absolute-lengths)
/// "1pc = 1/6th of 1in"
pub const PICAS_PER_INCH: f64 = 6.0;

/// Angle units with `deg` as the pivot: `deg`, `rad`, `grad`, `turn`.
///
/// Only the pairs to and from the pivot are registered; any other pair
/// (e.g. `rad` to `turn`) routes through `deg` at dispatch time.
#[must_use]
pub fn angle_category<Ctx>(category: CategoryBuilder<Ctx>) -> CategoryBuilder<Ctx> {
    category
        .pivot("deg")
        .conversion("deg", "rad", |v, _, _| v.to_radians())
        .conversion("deg", "grad", |v, _, _| v * GRADS_PER_DEGREE)
        .conversion("deg", "turn", |v, _, _| v / DEGREES_PER_TURN)
        .conversion("rad", "deg", |v, _, _| v.to_degrees())
        .conversion("grad", "deg", |v, _, _| v / GRADS_PER_DEGREE)
        .conversion("turn", "deg", |v, _, _| v * DEGREES_PER_TURN)
}

/// Absolute length units with `px` as the pivot: `px`, `in`, `cm`, `mm`,
/// `pt`, `pc`.
///
/// Relative lengths (`em`, `rem`, `%`, viewport units) are environment
/// dependent and left to the embedder.
#[must_use]
pub fn absolute_length_category<Ctx>(category: CategoryBuilder<Ctx>) -> CategoryBuilder<Ctx> {
    category
        .pivot("px")
        .conversion("px", "in", |v, _, _| v / PX_PER_INCH)
        .conversion("px", "cm", |v, _, _| v / PX_PER_INCH * CM_PER_INCH)
        .conversion("px", "mm", |v, _, _| v / PX_PER_INCH * MM_PER_INCH)
        .conversion("px", "pt", |v, _, _| v / PX_PER_INCH * POINTS_PER_INCH)
        .conversion("px", "pc", |v, _, _| v / PX_PER_INCH * PICAS_PER_INCH)
        .conversion("in", "px", |v, _, _| v * PX_PER_INCH)
        .conversion("cm", "px", |v, _, _| v / CM_PER_INCH * PX_PER_INCH)
        .conversion("mm", "px", |v, _, _| v / MM_PER_INCH * PX_PER_INCH)
        .conversion("pt", "px", |v, _, _| v / POINTS_PER_INCH * PX_PER_INCH)
        .conversion("pc", "px", |v, _, _| v / PICAS_PER_INCH * PX_PER_INCH)
}

/// A registry holding both built-in categories (`angle`, `length`).
///
/// # Panics
///
/// Never in practice: the built-in categories always pass registry
/// validation (each declares a pivot that is a registered source, and
/// their source units are disjoint).
#[must_use]
pub fn standard_registry<Ctx>() -> ConversionRegistry<Ctx> {
    ConversionRegistry::builder()
        .category("angle", angle_category)
        .category("length", absolute_length_category)
        .build()
        .expect("built-in categories always validate")
}
