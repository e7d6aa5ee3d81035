//! Integration tests for the serialized shapes exchanged with embedding
//! applications (FFI/IPC boundaries) and for configuration loading.

use quokka_units::{PropertyDefaults, Quantity, UnitEngine};
use serde_json::json;

fn engine() -> UnitEngine {
    UnitEngine::with_standard_tables()
}

#[test]
fn quantity_serializes_as_an_object() {
    let quantity = Quantity::new(10.0, "px");
    assert_eq!(
        serde_json::to_value(&quantity).expect("serializable"),
        json!({ "value": 10.0, "unit": "px" })
    );
}

#[test]
fn single_parse_serializes_as_an_object() {
    let parsed = engine().parse("10px", "width");
    assert_eq!(
        serde_json::to_value(&parsed).expect("serializable"),
        json!({ "value": 10.0, "unit": "px" })
    );
}

#[test]
fn multi_value_parse_serializes_as_an_array() {
    let parsed = engine().parse("10px 20%", "margin");
    assert_eq!(
        serde_json::to_value(&parsed).expect("serializable"),
        json!([
            { "value": 10.0, "unit": "px" },
            { "value": 20.0, "unit": "%" },
        ])
    );
}

#[test]
fn quantity_displays_in_raw_value_form() {
    assert_eq!(Quantity::new(-3.5, "em").to_string(), "-3.5em");
    assert_eq!(Quantity::new(0.0, "px").to_string(), "0px");
    assert_eq!(Quantity::new(1.0, "").to_string(), "1");
}

#[test]
fn property_defaults_load_from_configuration() {
    let defaults: PropertyDefaults = serde_json::from_value(json!({
        "stroke-width": { "default_unit": "mm" },
        "volume": { "default_unit": "", "default_value": 0.5 },
    }))
    .expect("deserializable");

    assert_eq!(defaults.default_unit("stroke-width"), "mm");
    assert_eq!(defaults.default_value("stroke-width"), 0.0);
    assert_eq!(defaults.default_unit("volume"), "");
    assert_eq!(defaults.default_value("volume"), 0.5);

    // Unconfigured properties keep the global fallbacks.
    assert_eq!(defaults.default_unit("width"), "px");
}

#[test]
fn serialized_defaults_round_trip() {
    let defaults = PropertyDefaults::standard();
    let value = serde_json::to_value(&defaults).expect("serializable");
    let restored: PropertyDefaults = serde_json::from_value(value).expect("deserializable");
    assert_eq!(restored, defaults);
}
