//! Pre-configured panels and board wirings

use crate::config::{Error, PanelConfig};
use crate::geometry::PanelGeometry;
use crate::pins::{PinAssignment, PinName};

/// CY8CKIT-028-EPD shield on the Arduino header of a PSoC 6 kit.
///
/// | Role        | Header | Pin    |
/// |-------------|--------|--------|
/// | `spi_mosi`  | D11    | P12_0  |
/// | `spi_miso`  | D12    | P12_1  |
/// | `spi_sclk`  | D13    | P12_2  |
/// | `spi_cs`    | D10    | P12_3  |
/// | `reset`     | D2     | P5_2   |
/// | `busy`      | D3     | P5_3   |
/// | `discharge` | D5     | P5_5   |
/// | `enable`    | D4     | P5_4   |
/// | `border`    | D6     | P5_6   |
/// | `io_enable` | D7     | P5_7   |
pub const CY8CKIT_028_EPD_PINS: PinAssignment = PinAssignment::new(
    PinName::new(12, 0),
    PinName::new(12, 1),
    PinName::new(12, 2),
    PinName::new(12, 3),
    PinName::new(5, 2),
    PinName::new(5, 3),
    PinName::new(5, 5),
    PinName::new(5, 4),
    PinName::new(5, 6),
    PinName::new(5, 7),
);

/// E2271CS021 on a CY8CKIT-028-EPD shield, validated.
pub fn cy8ckit_028_epd() -> Result<PanelConfig, Error> {
    PanelConfig::new(PanelGeometry::E2271CS021, CY8CKIT_028_EPD_PINS)
}
