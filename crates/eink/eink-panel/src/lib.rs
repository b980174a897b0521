//! E-Ink Panel Configuration
//!
//! Static configuration model for the Pervasive Displays E2271CS021 2.71"
//! monochrome e-ink panel and the pins that drive it: geometry, pin-role
//! assignment with validation, and packed frame-buffer addressing.
//!
//! SPI timing, the controller command set and waveform sequencing belong to
//! the display driver that consumes this crate.
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls and `tracing` log output (desktop)
//! - `defmt`: `defmt::Format` derives and log output (hardware)
//! - `serde`: load geometry and pin maps from board config files
//!
//! # Example
//!
//! ```
//! use eink_panel::{pixel_bit_location, panels, PanelGeometry};
//!
//! let config = panels::cy8ckit_028_epd().unwrap();
//! assert_eq!(config.geometry().buffer_size_bytes(), 5808);
//!
//! let loc = pixel_bit_location(&PanelGeometry::E2271CS021, 9, 0).unwrap();
//! assert_eq!((loc.byte_offset(), loc.bit_offset()), (1, 1));
//! ```
//!
//! # Drawing
//!
//! ```
//! use eink_panel::{E2271CS021FrameBuffer, FrameBuffer, PanelGeometry};
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//!
//! let mut fb: E2271CS021FrameBuffer = FrameBuffer::new(PanelGeometry::E2271CS021).unwrap();
//! Circle::new(Point::new(100, 56), 64)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut fb)
//!     .unwrap();
//! // fb.as_bytes() is what the driver clocks out over SPI
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)] // part numbers in doc comments
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod addressing;
pub mod config;
pub mod framebuffer;
pub mod geometry;
pub mod panels;
pub mod pins;

pub use addressing::{pixel_bit_location, BitLocation, OutOfRangeError};
pub use config::{Error, PanelConfig};
pub use framebuffer::{E2271CS021FrameBuffer, FrameBuffer};
pub use geometry::{ConfigurationError, PanelGeometry, SUPPORTED_COLOR_BITS};
pub use pins::{PinAssignment, PinAssignmentError, PinName, PinRole, PlatformPin};
