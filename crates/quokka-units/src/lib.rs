//! Unit parsing and conversion for style-property values.
//!
//! # Scope
//!
//! This crate implements:
//! - **Parser** ([§ 4 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types))
//!   - `<number><unit>` dimension tokens, bare numbers, unit-only keywords (`auto`)
//!   - Multi-value inputs (`"10px 20%"`) as ordered sequences, order preserved
//!   - Per-property default units and values when the input carries none
//!
//! - **Property defaults**
//!   - Standard allowlist: `opacity`, `rotateX`/`rotateY`/`rotateZ`,
//!     `skewX`/`skewY`, `scaleX`/`scaleY`/`scaleZ`, `line-height`
//!   - Global fallback of `px` / 0 for everything else
//!
//! - **Conversion dispatcher**
//!   - Registry of conversion functions keyed by category and unit pair,
//!     injected by the embedding application and validated at build time
//!   - Direct dispatch, with fallback routing through each category's
//!     pivot unit when no direct pair is registered
//!   - Exact identity conversion when source and target units match
//!
//! - **Built-in categories** ([§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths),
//!   [§ 6.2.2 Angle units](https://www.w3.org/TR/css-values-4/#angles))
//!   - Angles: `deg`, `rad`, `grad`, `turn`
//!   - Absolute lengths: `px`, `in`, `cm`, `mm`, `pt`, `pc`
//!
//! # Not Covered
//!
//! - Environment-dependent conversion formulas (`em` via font metrics, `%`
//!   via layout, viewport units) - the embedder registers these, together
//!   with whatever context handle they need
//! - Rendering or styling integration of any kind
//!
//! # Example
//!
//! ```
//! use quokka_units::UnitEngine;
//!
//! let engine = UnitEngine::<()>::with_standard_tables();
//!
//! let converted = engine.convert("rad", "180deg", None, "rotateZ")?;
//! let quantity = converted.as_single().expect("single-token input");
//! assert!((quantity.value - std::f64::consts::PI).abs() < 1e-12);
//! assert_eq!(quantity.unit, "rad");
//! # Ok::<(), quokka_units::ConvertError>(())
//! ```

/// Ready-made environment-independent conversion categories.
pub mod builtin;
/// The engine composing parser, defaults, and conversion dispatch.
pub mod engine;
/// Typed failures for dispatch and registry construction.
pub mod error;
/// Raw-value parsing into typed quantities.
pub mod parser;
/// Per-property default units and values.
pub mod properties;
/// Value types exchanged with the embedding application.
pub mod quantity;
/// The injected conversion-function registry.
pub mod registry;

// Re-exports for convenience
pub use engine::UnitEngine;
pub use error::{ConvertError, RegistryError};
pub use parser::parse_value;
pub use properties::{
    GLOBAL_DEFAULT_UNIT, GLOBAL_DEFAULT_VALUE, PropertyDefault, PropertyDefaults,
};
pub use quantity::{ParsedValue, Quantity, RawValue, UnitSpec};
pub use registry::{CategoryBuilder, ConversionFn, ConversionRegistry, RegistryBuilder};
