//! Typed failures for conversion dispatch and registry construction.
//!
//! Lookup failures surface as explicit errors rather than silent passthrough
//! of the unconverted value: a caller animating `width` from `"10bar"` must
//! learn that `bar` is meaningless, not receive `10bar` back unchanged.

use thiserror::Error;

/// A conversion request that cannot be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The source unit of a parsed quantity is not registered as a source
    /// in any category of the conversion registry.
    #[error("unit '{unit}' of property '{property}' is not registered in any conversion category")]
    UnknownUnit {
        /// The unrecognized source unit.
        unit: String,
        /// The property the value was parsed for.
        property: String,
    },

    /// The source unit's category was found, but there is neither a direct
    /// function for the requested pair nor a complete route through the
    /// category's pivot unit.
    #[error("no conversion path from '{from}' to '{to}' in category '{category}'")]
    NoConversionPath {
        /// The source unit.
        from: String,
        /// The requested target unit.
        to: String,
        /// The category that owns the source unit.
        category: String,
    },
}

/// A registry that fails construction-time validation.
///
/// Validation runs once, in [`RegistryBuilder::build`](crate::RegistryBuilder::build);
/// a registry that builds successfully can never hit these conditions at
/// conversion time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A category was registered without declaring a pivot unit.
    #[error("category '{category}' does not declare a pivot unit")]
    MissingPivot {
        /// The offending category.
        category: String,
    },

    /// A category declares a pivot unit that has no registered conversion
    /// of its own, so pivot routing could never complete.
    #[error("category '{category}' declares pivot '{pivot}' but registers no conversion from it")]
    UnknownPivot {
        /// The offending category.
        category: String,
        /// The dangling pivot unit.
        pivot: String,
    },

    /// The same category name was registered twice.
    #[error("category '{category}' is defined more than once")]
    DuplicateCategory {
        /// The repeated category name.
        category: String,
    },

    /// A source unit is claimed by two categories, which would make
    /// category resolution ambiguous.
    #[error("unit '{unit}' is registered as a source by both '{first}' and '{second}'")]
    DuplicateUnit {
        /// The contested source unit.
        unit: String,
        /// The category that registered the unit first.
        first: String,
        /// The category that tried to register it again.
        second: String,
    },
}
