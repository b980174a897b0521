//! Loading geometry and pin maps from board config files.

use eink_panel::{panels, PanelGeometry, PinAssignment, PinAssignmentError, PinRole};

#[test]
fn geometry_roundtrips_without_derived_size() {
    let json = serde_json::to_string(&PanelGeometry::E2271CS021).unwrap();
    assert_eq!(json, r#"{"width":264,"height":176,"color_bits":1}"#);

    let parsed: PanelGeometry = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.buffer_size_bytes(), 5808);
}

#[test]
fn invalid_geometry_is_rejected_on_load() {
    let result = serde_json::from_str::<PanelGeometry>(r#"{"width":264,"height":176,"color_bits":0}"#);
    assert!(result.is_err());
}

#[test]
fn pin_map_loads_unvalidated() {
    let json = serde_json::to_string(&panels::CY8CKIT_028_EPD_PINS).unwrap();
    let swapped = json.replacen(r#""reset":{"port":5,"pin":2}"#, r#""reset":{"port":12,"pin":3}"#, 1);

    let pins: PinAssignment = serde_json::from_str(&swapped).unwrap();
    assert_eq!(
        pins.validate(),
        Err(PinAssignmentError::DuplicatePin {
            first: PinRole::SpiCs,
            second: PinRole::Reset,
            pin: pins.spi_cs(),
        })
    );
}
