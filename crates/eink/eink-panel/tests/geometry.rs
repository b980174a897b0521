//! Construction rules for panel geometry.

use eink_panel::{ConfigurationError, PanelGeometry};

#[test]
fn e2271cs021_buffer_is_5808_bytes() {
    assert_eq!(PanelGeometry::E2271CS021.buffer_size_bytes(), 5808);
}

#[test]
fn explicit_construction_matches_preset() {
    let g = PanelGeometry::new(264, 176, 1).unwrap();
    assert_eq!(g, PanelGeometry::E2271CS021);
}

#[test]
fn zero_width_is_configuration_error() {
    assert_eq!(
        PanelGeometry::new(0, 176, 1),
        Err(ConfigurationError::ZeroWidth)
    );
}

#[test]
fn zero_height_is_configuration_error() {
    assert_eq!(
        PanelGeometry::new(264, 0, 1),
        Err(ConfigurationError::ZeroHeight)
    );
}

#[test]
fn zero_color_bits_is_configuration_error() {
    assert_eq!(
        PanelGeometry::new(264, 176, 0),
        Err(ConfigurationError::ZeroColorBits)
    );
}

#[test]
fn buffer_size_rounds_up_partial_bytes() {
    // 3×3 at 1bpp = 9 bits -> 2 bytes
    assert_eq!(PanelGeometry::new(3, 3, 1).unwrap().buffer_size_bytes(), 2);
    // 1×1 at 4bpp = 4 bits -> 1 byte
    assert_eq!(PanelGeometry::new(1, 1, 4).unwrap().buffer_size_bytes(), 1);
}

#[test]
fn geometry_is_usable_in_const_context() {
    const SMALL: PanelGeometry = match PanelGeometry::new(128, 64, 1) {
        Ok(g) => g,
        Err(_) => PanelGeometry::E2271CS021,
    };
    assert_eq!(SMALL.buffer_size_bytes(), 1024);
}
