//! Integration tests for conversion dispatch: identity, direct, pivot
//! routing, positional multi-value targets, and fail-loud lookups.

use quokka_units::{
    ConversionRegistry, ConvertError, ParsedValue, PropertyDefaults, Quantity, UnitEngine,
};

/// Minimal stand-in for a DOM element handle.
struct Element {
    font_size: f64,
    parent_width: f64,
}

/// An engine whose length category needs the element context, the way an
/// embedding styling layer would register `em` and `%`.
fn engine_with_element_context() -> UnitEngine<Element> {
    let registry = ConversionRegistry::builder()
        .category("length", |c| {
            c.pivot("px")
                .conversion("em", "px", |v, el: Option<&Element>, _| {
                    v * el.map_or(16.0, |e| e.font_size)
                })
                .conversion("px", "em", |v, el, _| v / el.map_or(16.0, |e| e.font_size))
                .conversion("%", "px", |v, el, _| {
                    v / 100.0 * el.map_or(0.0, |e| e.parent_width)
                })
                .conversion("px", "%", |v, el, _| {
                    v * 100.0 / el.map_or(0.0, |e| e.parent_width)
                })
        })
        .build()
        .expect("valid registry");

    UnitEngine::new(registry, PropertyDefaults::standard())
}

#[test]
fn identity_conversion_is_exact() {
    let engine = engine_with_element_context();
    let converted = engine
        .convert("em", "1.5em", None, "fontSize")
        .expect("identity needs no registered function");
    assert_eq!(converted, ParsedValue::Single(Quantity::new(1.5, "em")));
}

#[test]
fn direct_conversion_receives_the_context() {
    let element = Element {
        font_size: 20.0,
        parent_width: 500.0,
    };
    let engine = engine_with_element_context();
    let converted = engine
        .convert("px", "2em", Some(&element), "fontSize")
        .expect("em -> px is registered");
    assert_eq!(converted, ParsedValue::Single(Quantity::new(40.0, "px")));
}

#[test]
fn missing_direct_pair_routes_through_the_pivot() {
    let element = Element {
        font_size: 20.0,
        parent_width: 500.0,
    };
    // No em -> % function is registered: em -> px -> % must be taken.
    let engine = engine_with_element_context();
    let converted = engine
        .convert("%", "2em", Some(&element), "width")
        .expect("pivot route exists");
    assert_eq!(converted, ParsedValue::Single(Quantity::new(8.0, "%")));
}

#[test]
fn unknown_source_unit_fails_loudly() {
    let engine = engine_with_element_context();
    let error = engine
        .convert("px", "10bar", None, "width")
        .expect_err("'bar' is in no category");
    assert_eq!(
        error,
        ConvertError::UnknownUnit {
            unit: "bar".to_string(),
            property: "width".to_string(),
        }
    );
}

#[test]
fn keyword_units_are_not_silently_passed_through() {
    let engine = engine_with_element_context();
    let error = engine
        .convert("px", "auto", None, "width")
        .expect_err("'auto' cannot be converted to px");
    assert_eq!(
        error,
        ConvertError::UnknownUnit {
            unit: "auto".to_string(),
            property: "width".to_string(),
        }
    );
}

#[test]
fn incomplete_pivot_route_fails_loudly() {
    let engine = engine_with_element_context();
    // "pt" is not a target of any function in this registry.
    let error = engine
        .convert("pt", "2em", None, "width")
        .expect_err("no px -> pt leg");
    assert_eq!(
        error,
        ConvertError::NoConversionPath {
            from: "em".to_string(),
            to: "pt".to_string(),
            category: "length".to_string(),
        }
    );
}

#[test]
fn multi_value_conversion_fills_missing_targets_with_the_default_unit() {
    let engine = UnitEngine::<()>::with_standard_tables();
    let converted = engine
        .convert(vec!["in", "pt"], "96px 96px 96px", None, "margin")
        .expect("all targets reachable");
    assert_eq!(
        converted,
        ParsedValue::Multiple(vec![
            Quantity::new(1.0, "in"),
            Quantity::new(72.0, "pt"),
            // Third position has no target entry: margin defaults to px,
            // so the quantity converts by identity.
            Quantity::new(96.0, "px"),
        ])
    );
}

#[test]
fn single_unit_spec_applies_to_the_first_position_only() {
    let engine = UnitEngine::<()>::with_standard_tables();
    let converted = engine
        .convert("in", "96px 96px", None, "margin")
        .expect("targets reachable");
    assert_eq!(
        converted,
        ParsedValue::Multiple(vec![
            Quantity::new(1.0, "in"),
            Quantity::new(96.0, "px"),
        ])
    );
}

#[test]
fn sequence_spec_against_single_input_uses_its_first_entry() {
    let engine = UnitEngine::<()>::with_standard_tables();
    let converted = engine
        .convert(vec!["in", "pt"], "96px", None, "width")
        .expect("target reachable");
    assert_eq!(converted, ParsedValue::Single(Quantity::new(1.0, "in")));
}

#[test]
fn nan_values_propagate_through_conversion() {
    let engine = UnitEngine::<()>::with_standard_tables();
    let converted = engine
        .convert("rad", "1.2.3deg", None, "rotateZ")
        .expect("deg -> rad is registered");
    let quantity = converted.as_single().expect("single token");
    assert!(quantity.value.is_nan());
    assert_eq!(quantity.unit, "rad");
}

#[test]
fn conversion_errors_abort_the_whole_multi_value_request() {
    let engine = UnitEngine::<()>::with_standard_tables();
    let error = engine
        .convert(vec!["in", "in"], "96px 10bar", None, "margin")
        .expect_err("'bar' is in no category");
    assert_eq!(
        error,
        ConvertError::UnknownUnit {
            unit: "bar".to_string(),
            property: "margin".to_string(),
        }
    );
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn engine_is_shareable_across_threads() {
    assert_send_sync::<UnitEngine<Element>>();
    assert_send_sync::<UnitEngine<()>>();
}
