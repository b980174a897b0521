//! Pin assignment for the display's SPI bus and GPIO control lines
//!
//! A [`PinAssignment`] is a passive carrier: constructing one performs no
//! checks. The driver calls [`PinAssignment::validate`] once during its init
//! sequence, before touching any hardware.
//!
//! # Roles
//!
//! | Role        | Direction      | Purpose                          |
//! |-------------|----------------|----------------------------------|
//! | `spi_mosi`  | Host → Display | SPI data out                     |
//! | `spi_miso`  | Display → Host | SPI data in                      |
//! | `spi_sclk`  | Host → Display | SPI clock                        |
//! | `spi_cs`    | Host → Display | SPI chip select                  |
//! | `reset`     | Host → Display | Controller reset                 |
//! | `busy`      | Display → Host | HIGH while the controller works  |
//! | `discharge` | Host → Display | Panel discharge after power-off  |
//! | `enable`    | Host → Display | Panel power enable               |
//! | `border`    | Host → Display | Border pixel control             |
//! | `io_enable` | Host → Display | Level-shifter / IO enable        |

/// A platform pin identifier with a "not connected" sentinel.
pub trait PlatformPin: Copy + Eq + core::fmt::Debug {
    /// Value meaning "no pin bound to this role"
    const UNASSIGNED: Self;

    /// Whether this identifier is the unassigned sentinel
    fn is_unassigned(&self) -> bool {
        *self == Self::UNASSIGNED
    }
}

/// GPIO pin identified by port and pin number (e.g. `P12_3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinName {
    port: u8,
    pin: u8,
}

impl PinName {
    /// Not connected
    pub const NC: Self = Self {
        port: u8::MAX,
        pin: u8::MAX,
    };

    /// Pin `pin` of GPIO port `port`
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }

    /// GPIO port number
    pub const fn port(&self) -> u8 {
        self.port
    }

    /// Pin number within the port
    pub const fn pin(&self) -> u8 {
        self.pin
    }
}

impl PlatformPin for PinName {
    const UNASSIGNED: Self = Self::NC;
}

impl core::fmt::Display for PinName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_unassigned() {
            write!(f, "NC")
        } else {
            write!(f, "P{}_{}", self.port, self.pin)
        }
    }
}

/// Hardware function a pin serves for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PinRole {
    /// SPI MOSI
    SpiMosi,
    /// SPI MISO
    SpiMiso,
    /// SPI SCLK
    SpiSclk,
    /// SPI CS
    SpiCs,
    /// GPIO reset
    Reset,
    /// GPIO busy
    Busy,
    /// GPIO discharge
    Discharge,
    /// GPIO enable
    Enable,
    /// GPIO border
    Border,
    /// GPIO IO enable
    IoEnable,
}

impl PinRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::SpiMosi,
        Self::SpiMiso,
        Self::SpiSclk,
        Self::SpiCs,
        Self::Reset,
        Self::Busy,
        Self::Discharge,
        Self::Enable,
        Self::Border,
        Self::IoEnable,
    ];

    /// Field name of the role in [`PinAssignment`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpiMosi => "spi_mosi",
            Self::SpiMiso => "spi_miso",
            Self::SpiSclk => "spi_sclk",
            Self::SpiCs => "spi_cs",
            Self::Reset => "reset",
            Self::Busy => "busy",
            Self::Discharge => "discharge",
            Self::Enable => "enable",
            Self::Border => "border",
            Self::IoEnable => "io_enable",
        }
    }
}

impl core::fmt::Display for PinRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pins needed to drive the display, one per [`PinRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinAssignment<P = PinName> {
    spi_mosi: P,
    spi_miso: P,
    spi_sclk: P,
    spi_cs: P,
    reset: P,
    busy: P,
    discharge: P,
    enable: P,
    border: P,
    io_enable: P,
}

impl<P: PlatformPin> PinAssignment<P> {
    /// Bind all ten roles. Nothing is checked here; see [`Self::validate`].
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        spi_mosi: P,
        spi_miso: P,
        spi_sclk: P,
        spi_cs: P,
        reset: P,
        busy: P,
        discharge: P,
        enable: P,
        border: P,
        io_enable: P,
    ) -> Self {
        Self {
            spi_mosi,
            spi_miso,
            spi_sclk,
            spi_cs,
            reset,
            busy,
            discharge,
            enable,
            border,
            io_enable,
        }
    }

    /// SPI MOSI pin
    pub fn spi_mosi(&self) -> P {
        self.spi_mosi
    }

    /// SPI MISO pin
    pub fn spi_miso(&self) -> P {
        self.spi_miso
    }

    /// SPI SCLK pin
    pub fn spi_sclk(&self) -> P {
        self.spi_sclk
    }

    /// SPI CS pin
    pub fn spi_cs(&self) -> P {
        self.spi_cs
    }

    /// GPIO reset pin
    pub fn reset(&self) -> P {
        self.reset
    }

    /// GPIO busy pin
    pub fn busy(&self) -> P {
        self.busy
    }

    /// GPIO discharge pin
    pub fn discharge(&self) -> P {
        self.discharge
    }

    /// GPIO enable pin
    pub fn enable(&self) -> P {
        self.enable
    }

    /// GPIO border pin
    pub fn border(&self) -> P {
        self.border
    }

    /// GPIO IO enable pin
    pub fn io_enable(&self) -> P {
        self.io_enable
    }

    /// Pin bound to `role`
    pub fn get(&self, role: PinRole) -> P {
        match role {
            PinRole::SpiMosi => self.spi_mosi,
            PinRole::SpiMiso => self.spi_miso,
            PinRole::SpiSclk => self.spi_sclk,
            PinRole::SpiCs => self.spi_cs,
            PinRole::Reset => self.reset,
            PinRole::Busy => self.busy,
            PinRole::Discharge => self.discharge,
            PinRole::Enable => self.enable,
            PinRole::Border => self.border,
            PinRole::IoEnable => self.io_enable,
        }
    }

    /// `(role, pin)` pairs in [`PinRole::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (PinRole, P)> + '_ {
        PinRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Check that every role is bound and no two roles share a pin.
    ///
    /// Unbound roles are reported before aliasing, so two roles left at the
    /// sentinel surface as [`PinAssignmentError::UnboundPin`].
    ///
    /// # Errors
    ///
    /// - [`PinAssignmentError::UnboundPin`] for the first role (in
    ///   [`PinRole::ALL`] order) holding `P::UNASSIGNED`
    /// - [`PinAssignmentError::DuplicatePin`] for the first pair of roles
    ///   sharing a pin
    pub fn validate(&self) -> Result<(), PinAssignmentError<P>> {
        let result = self.check();
        if let Err(err) = &result {
            log_rejected(err);
        }
        result
    }

    fn check(&self) -> Result<(), PinAssignmentError<P>> {
        if let Some((role, _)) = self.iter().find(|(_, pin)| pin.is_unassigned()) {
            return Err(PinAssignmentError::UnboundPin { role });
        }

        for (i, (first, pin)) in self.iter().enumerate() {
            let alias = self
                .iter()
                .skip(i.saturating_add(1))
                .find(|(_, other)| *other == pin);
            if let Some((second, _)) = alias {
                return Err(PinAssignmentError::DuplicatePin { first, second, pin });
            }
        }

        Ok(())
    }
}

#[cfg(feature = "defmt")]
fn log_rejected_defmt<P>(err: &PinAssignmentError<P>) {
    match err {
        PinAssignmentError::DuplicatePin { first, second, .. } => {
            defmt::warn!("display pins rejected: {} and {} share a pin", first, second);
        }
        PinAssignmentError::UnboundPin { role } => {
            defmt::warn!("display pins rejected: {} is unbound", role);
        }
    }
}

#[allow(unused_variables)]
fn log_rejected<P: PlatformPin>(err: &PinAssignmentError<P>) {
    #[cfg(feature = "defmt")]
    log_rejected_defmt(err);
    #[cfg(feature = "std")]
    tracing::warn!(error = %err, "display pin assignment rejected");
}

/// Pin assignment that must not reach the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinAssignmentError<P = PinName> {
    /// Two roles are bound to the same physical pin
    DuplicatePin {
        /// Earlier role in [`PinRole::ALL`] order
        first: PinRole,
        /// Later role sharing the pin
        second: PinRole,
        /// The shared pin
        pin: P,
    },
    /// A role holds the platform's unassigned sentinel
    UnboundPin {
        /// The unbound role
        role: PinRole,
    },
}

impl<P: core::fmt::Debug> core::fmt::Display for PinAssignmentError<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicatePin { first, second, pin } => {
                write!(f, "Pin {pin:?} assigned to both {first} and {second}")
            }
            Self::UnboundPin { role } => write!(f, "No pin assigned to {role}"),
        }
    }
}

#[cfg(feature = "std")]
impl<P: core::fmt::Debug> std::error::Error for PinAssignmentError<P> {}
