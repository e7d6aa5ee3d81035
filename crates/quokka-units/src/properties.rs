//! Per-property default units and values.
//!
//! Most style properties default to `0px` when a raw value carries no number
//! or unit. A fixed allowlist of transform- and paint-adjacent properties
//! deviates: `opacity` and the `scaleX`/`scaleY`/`scaleZ` family are unitless
//! with a default value of 1, the `rotateX`/`rotateY`/`rotateZ` and
//! `skewX`/`skewY` families default to degrees, and `line-height` is a
//! unitless 1.
//!
//! The table is loaded once at engine construction and read-only thereafter.
//! It derives `Deserialize` so an embedding application can supply overrides
//! from its own configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit assumed for any property without a configured default unit.
pub const GLOBAL_DEFAULT_UNIT: &str = "px";

/// Value assumed for any property without a configured default value.
pub const GLOBAL_DEFAULT_VALUE: f64 = 0.0;

/// Configured defaults for a single property.
///
/// Either field may be absent; the resolver falls back to
/// [`GLOBAL_DEFAULT_UNIT`] / [`GLOBAL_DEFAULT_VALUE`] per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefault {
    /// Unit assumed when the raw value carries none (e.g. `deg` for `rotateX`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<String>,
    /// Value assumed when the raw value carries none (e.g. 1 for `opacity`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

impl PropertyDefault {
    /// Defaults for a unitless property with the given default value
    /// (the `opacity` / `scaleX` shape).
    #[must_use]
    pub fn unitless(value: f64) -> Self {
        Self {
            default_unit: Some(String::new()),
            default_value: Some(value),
        }
    }

    /// Defaults for a property with a non-`px` default unit and the global
    /// default value (the `rotateX` shape).
    #[must_use]
    pub fn with_unit(unit: &str) -> Self {
        Self {
            default_unit: Some(unit.to_string()),
            default_value: None,
        }
    }
}

/// Mapping from property name to configured defaults.
///
/// Properties absent from the table implicitly default to
/// [`GLOBAL_DEFAULT_UNIT`] and [`GLOBAL_DEFAULT_VALUE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyDefaults {
    table: HashMap<String, PropertyDefault>,
}

impl PropertyDefaults {
    /// The standard allowlist of properties with non-`px` defaults.
    #[must_use]
    pub fn standard() -> Self {
        let table = [
            ("opacity", PropertyDefault::unitless(1.0)),
            ("rotateX", PropertyDefault::with_unit("deg")),
            ("rotateY", PropertyDefault::with_unit("deg")),
            ("rotateZ", PropertyDefault::with_unit("deg")),
            ("skewX", PropertyDefault::with_unit("deg")),
            ("skewY", PropertyDefault::with_unit("deg")),
            ("scaleX", PropertyDefault::unitless(1.0)),
            ("scaleY", PropertyDefault::unitless(1.0)),
            ("scaleZ", PropertyDefault::unitless(1.0)),
            ("line-height", PropertyDefault::unitless(1.0)),
        ]
        .into_iter()
        .map(|(name, default)| (name.to_string(), default))
        .collect();

        Self { table }
    }

    /// Add or replace one property's defaults. Intended for embedder setup
    /// before the table is handed to the engine; the engine never mutates it.
    #[must_use]
    pub fn with_property(mut self, name: &str, default: PropertyDefault) -> Self {
        let _ = self.table.insert(name.to_string(), default);
        self
    }

    /// The default unit for `property`, falling back to [`GLOBAL_DEFAULT_UNIT`].
    #[must_use]
    pub fn default_unit(&self, property: &str) -> &str {
        self.table
            .get(property)
            .and_then(|default| default.default_unit.as_deref())
            .unwrap_or(GLOBAL_DEFAULT_UNIT)
    }

    /// The default value for `property`, falling back to [`GLOBAL_DEFAULT_VALUE`].
    #[must_use]
    pub fn default_value(&self, property: &str) -> f64 {
        self.table
            .get(property)
            .and_then(|default| default.default_value)
            .unwrap_or(GLOBAL_DEFAULT_VALUE)
    }
}
