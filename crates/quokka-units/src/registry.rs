//! The conversion registry: categories of units with per-category pivots.
//!
//! Conversion functions are registered sparsely (typically every unit
//! to and from the category pivot) rather than as a full units² matrix;
//! dispatch routes through the pivot when no direct pair is registered.
//! The registry is supplied wholesale by the embedding application, is
//! validated once at build time, and is never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use crate::error::RegistryError;

/// A conversion function between two units of one category.
///
/// Receives the numeric magnitude, an optional opaque context handle (e.g.
/// an element for layout-relative conversions; passed through untouched),
/// and the property name the value was parsed for.
pub type ConversionFn<Ctx> = Box<dyn Fn(f64, Option<&Ctx>, &str) -> f64 + Send + Sync>;

/// One grouping of related units sharing a pivot (e.g. all length units).
pub(crate) struct Category<Ctx> {
    /// The designated interstitial unit for pivot routing.
    pub(crate) pivot: String,
    /// source unit -> target unit -> conversion function.
    pub(crate) conversions: HashMap<String, HashMap<String, ConversionFn<Ctx>>>,
}

impl<Ctx> Category<Ctx> {
    /// Look up the direct conversion function for a unit pair.
    pub(crate) fn function(&self, from: &str, to: &str) -> Option<&ConversionFn<Ctx>> {
        self.conversions.get(from)?.get(to)
    }
}

/// An immutable, validated set of conversion categories.
///
/// Built through [`ConversionRegistry::builder`]; the `Ctx` parameter is the
/// opaque context type threaded through to every conversion function
/// (default `()` for registries whose conversions need no context).
pub struct ConversionRegistry<Ctx = ()> {
    categories: HashMap<String, Category<Ctx>>,
    /// source unit -> owning category, precomputed at build time so
    /// category resolution is O(1) and deterministic.
    unit_index: HashMap<String, String>,
}

impl<Ctx> fmt::Debug for ConversionRegistry<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRegistry")
            .field("categories", &self.categories.keys().collect::<Vec<_>>())
            .field("unit_index", &self.unit_index)
            .finish()
    }
}

impl<Ctx> ConversionRegistry<Ctx> {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder<Ctx> {
        RegistryBuilder {
            categories: Vec::new(),
        }
    }

    /// Resolve the category that owns `unit` as a source.
    pub(crate) fn category_of(&self, unit: &str) -> Option<(&str, &Category<Ctx>)> {
        let name = self.unit_index.get(unit)?;
        let category = self.categories.get(name)?;
        Some((name.as_str(), category))
    }
}

/// Builder for a [`ConversionRegistry`]; finish with [`build`](Self::build).
pub struct RegistryBuilder<Ctx = ()> {
    categories: Vec<(String, CategoryBuilder<Ctx>)>,
}

impl<Ctx> RegistryBuilder<Ctx> {
    /// Register a category under `name`, configured by the given closure.
    ///
    /// ```
    /// use quokka_units::ConversionRegistry;
    ///
    /// let registry = ConversionRegistry::<()>::builder()
    ///     .category("angle", |c| {
    ///         c.pivot("deg")
    ///             .conversion("deg", "rad", |v, _, _| v.to_radians())
    ///             .conversion("rad", "deg", |v, _, _| v.to_degrees())
    ///     })
    ///     .build()
    ///     .expect("valid registry");
    /// ```
    #[must_use]
    pub fn category(
        mut self,
        name: &str,
        configure: impl FnOnce(CategoryBuilder<Ctx>) -> CategoryBuilder<Ctx>,
    ) -> Self {
        let category = configure(CategoryBuilder {
            pivot: None,
            conversions: HashMap::new(),
        });
        self.categories.push((name.to_string(), category));
        self
    }

    /// Validate and freeze the registry.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateCategory`] if a category name repeats.
    /// - [`RegistryError::MissingPivot`] if a category declared no pivot.
    /// - [`RegistryError::UnknownPivot`] if a category's pivot has no
    ///   registered conversion of its own.
    /// - [`RegistryError::DuplicateUnit`] if two categories both register
    ///   the same source unit.
    pub fn build(self) -> Result<ConversionRegistry<Ctx>, RegistryError> {
        let mut categories = HashMap::with_capacity(self.categories.len());
        let mut unit_index: HashMap<String, String> = HashMap::new();

        for (name, builder) in self.categories {
            if categories.contains_key(&name) {
                return Err(RegistryError::DuplicateCategory { category: name });
            }

            let Some(pivot) = builder.pivot else {
                return Err(RegistryError::MissingPivot { category: name });
            };
            if !builder.conversions.contains_key(&pivot) {
                return Err(RegistryError::UnknownPivot {
                    category: name,
                    pivot,
                });
            }

            for unit in builder.conversions.keys() {
                if let Some(first) = unit_index.insert(unit.clone(), name.clone()) {
                    return Err(RegistryError::DuplicateUnit {
                        unit: unit.clone(),
                        first,
                        second: name,
                    });
                }
            }

            let _ = categories.insert(
                name,
                Category {
                    pivot,
                    conversions: builder.conversions,
                },
            );
        }

        Ok(ConversionRegistry {
            categories,
            unit_index,
        })
    }
}

/// Builder for one category's pivot and conversion table.
pub struct CategoryBuilder<Ctx = ()> {
    pub(crate) pivot: Option<String>,
    pub(crate) conversions: HashMap<String, HashMap<String, ConversionFn<Ctx>>>,
}

impl<Ctx> CategoryBuilder<Ctx> {
    /// Declare the category's pivot unit, the interstitial used when no
    /// direct source-to-target function is registered.
    #[must_use]
    pub fn pivot(mut self, unit: &str) -> Self {
        self.pivot = Some(unit.to_string());
        self
    }

    /// Register the conversion function for one `from` -> `to` pair.
    /// Registering the same pair twice keeps the later function.
    #[must_use]
    pub fn conversion<F>(mut self, from: &str, to: &str, function: F) -> Self
    where
        F: Fn(f64, Option<&Ctx>, &str) -> f64 + Send + Sync + 'static,
    {
        let _ = self
            .conversions
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), Box::new(function));
        self
    }
}
