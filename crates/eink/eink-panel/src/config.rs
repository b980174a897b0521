//! Validated panel configuration
//!
//! [`PanelConfig`] is what a driver takes at init: geometry plus a pin
//! assignment that has passed [`PinAssignment::validate`]. The only way to
//! build one is [`PanelConfig::new`], so holding a `PanelConfig` means the
//! check already ran.

use crate::addressing::OutOfRangeError;
use crate::geometry::{ConfigurationError, PanelGeometry};
use crate::pins::{PinAssignment, PinAssignmentError, PinName, PlatformPin};

/// Geometry and validated pins for one display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig<P = PinName> {
    geometry: PanelGeometry,
    pins: PinAssignment<P>,
}

impl<P: PlatformPin> PanelConfig<P> {
    /// Validate `pins` and bundle them with `geometry`.
    ///
    /// # Errors
    ///
    /// Any [`PinAssignmentError`] from [`PinAssignment::validate`], wrapped in [`Error`].
    pub fn new(geometry: PanelGeometry, pins: PinAssignment<P>) -> Result<Self, Error<P>> {
        pins.validate()?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "display configured: {}x{} @ {} bpp, {} byte frame buffer",
            geometry.width(),
            geometry.height(),
            geometry.color_bits(),
            geometry.buffer_size_bytes()
        );
        #[cfg(feature = "std")]
        tracing::debug!(
            width = geometry.width(),
            height = geometry.height(),
            color_bits = geometry.color_bits(),
            buffer_bytes = geometry.buffer_size_bytes(),
            "display configured"
        );

        Ok(Self { geometry, pins })
    }

    /// Panel geometry
    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Validated pin assignment
    pub fn pins(&self) -> &PinAssignment<P> {
        &self.pins
    }

    /// Split back into parts
    pub fn into_parts(self) -> (PanelGeometry, PinAssignment<P>) {
        (self.geometry, self.pins)
    }
}

/// Any configuration or addressing failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<P = PinName> {
    /// Invalid panel geometry
    Configuration(ConfigurationError),
    /// Invalid pin assignment
    Pins(PinAssignmentError<P>),
    /// Pixel outside the panel
    OutOfRange(OutOfRangeError),
}

impl<P> From<ConfigurationError> for Error<P> {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl<P> From<PinAssignmentError<P>> for Error<P> {
    fn from(err: PinAssignmentError<P>) -> Self {
        Self::Pins(err)
    }
}

impl<P> From<OutOfRangeError> for Error<P> {
    fn from(err: OutOfRangeError) -> Self {
        Self::OutOfRange(err)
    }
}

impl<P: core::fmt::Debug> core::fmt::Display for Error<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "{err}"),
            Self::Pins(err) => write!(f, "{err}"),
            Self::OutOfRange(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl<P: core::fmt::Debug> std::error::Error for Error<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::PinRole;

    fn pins() -> PinAssignment {
        PinAssignment::new(
            PinName::new(0, 0),
            PinName::new(0, 1),
            PinName::new(0, 2),
            PinName::new(0, 3),
            PinName::new(1, 0),
            PinName::new(1, 1),
            PinName::new(1, 2),
            PinName::new(1, 3),
            PinName::new(1, 4),
            PinName::new(1, 5),
        )
    }

    #[test]
    fn test_valid_config() {
        let config = PanelConfig::new(PanelGeometry::E2271CS021, pins()).unwrap();
        assert_eq!(config.geometry().buffer_size_bytes(), 5808);
        assert_eq!(config.pins().busy(), PinName::new(1, 1));
    }

    #[test]
    fn test_invalid_pins_rejected() {
        let bad = PinAssignment::new(
            PinName::new(0, 0),
            PinName::new(0, 1),
            PinName::new(0, 2),
            PinName::new(0, 3),
            PinName::new(1, 0),
            PinName::new(1, 1),
            PinName::NC,
            PinName::new(1, 3),
            PinName::new(1, 4),
            PinName::new(1, 5),
        );
        assert_eq!(
            PanelConfig::new(PanelGeometry::E2271CS021, bad),
            Err(Error::Pins(PinAssignmentError::UnboundPin {
                role: PinRole::Discharge
            }))
        );
    }

    #[test]
    fn test_question_mark_conversion() {
        fn init() -> Result<PanelConfig, Error> {
            let geometry = PanelGeometry::new(264, 0, 1)?;
            PanelConfig::new(geometry, pins())
        }
        assert_eq!(init(), Err(Error::Configuration(ConfigurationError::ZeroHeight)));
    }

    #[test]
    fn test_into_parts() {
        let (geometry, p) = PanelConfig::new(PanelGeometry::E2271CS021, pins())
            .unwrap()
            .into_parts();
        assert_eq!(geometry, PanelGeometry::E2271CS021);
        assert_eq!(p, pins());
    }
}
