//! The unit engine: parsing composed with conversion dispatch.
//!
//! Every operation is a pure function of its inputs and the two tables the
//! engine holds immutably (conversion registry, property defaults); the
//! engine has no interior mutability and is freely shareable across threads.

use crate::builtin;
use crate::error::ConvertError;
use crate::parser;
use crate::properties::PropertyDefaults;
use crate::quantity::{ParsedValue, Quantity, RawValue, UnitSpec};
use crate::registry::ConversionRegistry;

/// Parses raw style values and converts them between units.
///
/// `Ctx` is the opaque context type handed through to conversion functions
/// (e.g. an element handle for layout-relative conversions). The engine
/// never inspects it.
pub struct UnitEngine<Ctx = ()> {
    registry: ConversionRegistry<Ctx>,
    properties: PropertyDefaults,
}

impl<Ctx> UnitEngine<Ctx> {
    /// Create an engine from a validated registry and a defaults table.
    ///
    /// Both tables are fixed for the engine's lifetime; all registration
    /// happens before this call.
    #[must_use]
    pub fn new(registry: ConversionRegistry<Ctx>, properties: PropertyDefaults) -> Self {
        Self {
            registry,
            properties,
        }
    }

    /// An engine with the standard property defaults and the built-in
    /// environment-independent categories (angles, absolute lengths).
    #[must_use]
    pub fn with_standard_tables() -> Self {
        Self::new(builtin::standard_registry(), PropertyDefaults::standard())
    }

    /// Parse a raw value into one quantity or an ordered sequence,
    /// applying this engine's per-property defaults.
    #[must_use]
    pub fn parse(&self, raw: impl Into<RawValue>, property: &str) -> ParsedValue {
        parser::parse_value(&raw.into(), property, &self.properties)
    }

    /// Parse a raw value and convert it to the requested target unit(s).
    ///
    /// Multi-value inputs convert per position: position `i` targets the
    /// `i`-th entry of `to`, falling back to the property's default unit
    /// when the target sequence runs short. The result mirrors the parsed
    /// shape, in input order.
    ///
    /// `context` is passed through untouched to every conversion function.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::UnknownUnit`] when a parsed source unit is not
    ///   registered in any category.
    /// - [`ConvertError::NoConversionPath`] when the category has neither
    ///   a direct function for the pair nor a complete pivot route.
    pub fn convert(
        &self,
        to: impl Into<UnitSpec>,
        raw: impl Into<RawValue>,
        context: Option<&Ctx>,
        property: &str,
    ) -> Result<ParsedValue, ConvertError> {
        let to = to.into();

        match self.parse(raw, property) {
            ParsedValue::Single(quantity) => {
                let target = to.single_target(self.default_unit(property));
                let converted = self.convert_quantity(&quantity, target, context, property)?;
                Ok(ParsedValue::Single(converted))
            }
            ParsedValue::Multiple(quantities) => {
                let mut converted = Vec::with_capacity(quantities.len());
                for (position, quantity) in quantities.iter().enumerate() {
                    let target = to.target_at(position, self.default_unit(property));
                    converted.push(self.convert_quantity(quantity, target, context, property)?);
                }
                Ok(ParsedValue::Multiple(converted))
            }
        }
    }

    /// Convert one quantity to `target`.
    fn convert_quantity(
        &self,
        quantity: &Quantity,
        target: &str,
        context: Option<&Ctx>,
        property: &str,
    ) -> Result<Quantity, ConvertError> {
        // Identity conversion is always exact: no function call, no rounding.
        if quantity.unit == target {
            return Ok(Quantity::new(quantity.value, target));
        }

        let (category_name, category) =
            self.registry
                .category_of(&quantity.unit)
                .ok_or_else(|| ConvertError::UnknownUnit {
                    unit: quantity.unit.clone(),
                    property: property.to_string(),
                })?;

        // Direct function for this exact pair.
        if let Some(function) = category.function(&quantity.unit, target) {
            return Ok(Quantity::new(function(quantity.value, context, property), target));
        }

        // Route through the category pivot: unit -> pivot -> target. One
        // extra multiplication and potential precision loss, in exchange
        // for not authoring a units-squared function matrix.
        let to_pivot = category.function(&quantity.unit, &category.pivot);
        let from_pivot = category.function(&category.pivot, target);
        match (to_pivot, from_pivot) {
            (Some(to_pivot), Some(from_pivot)) => {
                let interstitial = to_pivot(quantity.value, context, property);
                Ok(Quantity::new(
                    from_pivot(interstitial, context, property),
                    target,
                ))
            }
            _ => Err(ConvertError::NoConversionPath {
                from: quantity.unit.clone(),
                to: target.to_string(),
                category: category_name.to_string(),
            }),
        }
    }

    /// The default unit for `property` (`px` unless configured otherwise).
    #[must_use]
    pub fn default_unit(&self, property: &str) -> &str {
        self.properties.default_unit(property)
    }

    /// The default value for `property` (0 unless configured otherwise).
    #[must_use]
    pub fn default_value(&self, property: &str) -> f64 {
        self.properties.default_value(property)
    }

    /// The canonical zero-value string for `property`: default value and
    /// default unit concatenated, e.g. `"0px"`, `"0deg"`, or `"1"` for
    /// unitless properties like `opacity`.
    #[must_use]
    pub fn default(&self, property: &str) -> String {
        format!(
            "{}{}",
            self.default_value(property),
            self.default_unit(property)
        )
    }
}
