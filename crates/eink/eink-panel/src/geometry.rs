//! Panel geometry
//!
//! Pixel dimensions and color depth of a panel variant, plus the frame-buffer
//! size derived from them. The buffer size is computed once, inside the
//! constructor, and every consumer reads it from [`PanelGeometry::buffer_size_bytes`].

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::addressing::{pixel_bit_location, BitLocation, OutOfRangeError};

/// Pixel depths a panel may use.
///
/// Each divides 8, so a pixel never straddles a byte boundary.
pub const SUPPORTED_COLOR_BITS: [u8; 4] = [1, 2, 4, 8];

/// Immutable pixel geometry of one panel variant.
///
/// Construct with [`PanelGeometry::new`] or use a preset such as
/// [`PanelGeometry::E2271CS021`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeometry", into = "RawGeometry"))]
pub struct PanelGeometry {
    width: u32,
    height: u32,
    color_bits: u8,
    buffer_size_bytes: usize,
}

impl PanelGeometry {
    /// Pervasive Displays E2271CS021: 2.71", 264×176, 1 bit per pixel.
    pub const E2271CS021: Self = match Self::new(264, 176, 1) {
        Ok(geometry) => geometry,
        // Unreachable for these literals; checked at compile time below.
        Err(_) => Self {
            width: 0,
            height: 0,
            color_bits: 0,
            buffer_size_bytes: 0,
        },
    };

    /// Create a geometry, deriving the frame-buffer size.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::ZeroWidth`], [`ConfigurationError::ZeroHeight`],
    ///   [`ConfigurationError::ZeroColorBits`] for a zero dimension
    /// - [`ConfigurationError::UnsupportedColorBits`] unless `color_bits` is 1, 2, 4 or 8
    /// - [`ConfigurationError::BufferTooLarge`] if the bit count overflows `u32`
    pub const fn new(width: u32, height: u32, color_bits: u8) -> Result<Self, ConfigurationError> {
        if width == 0 {
            return Err(ConfigurationError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigurationError::ZeroHeight);
        }
        if color_bits == 0 {
            return Err(ConfigurationError::ZeroColorBits);
        }
        if !matches!(color_bits, 1 | 2 | 4 | 8) {
            return Err(ConfigurationError::UnsupportedColorBits(color_bits));
        }

        let total_bits = match width.checked_mul(height) {
            Some(pixels) => match pixels.checked_mul(color_bits as u32) {
                Some(bits) => bits,
                None => return Err(ConfigurationError::BufferTooLarge),
            },
            None => return Err(ConfigurationError::BufferTooLarge),
        };

        Ok(Self {
            width,
            height,
            color_bits,
            buffer_size_bytes: total_bits.div_ceil(8) as usize,
        })
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bits of color information per pixel
    pub const fn color_bits(&self) -> u8 {
        self.color_bits
    }

    /// Size of a packed frame buffer for this geometry, in bytes.
    ///
    /// `ceil(width * height * color_bits / 8)`.
    pub const fn buffer_size_bytes(&self) -> usize {
        self.buffer_size_bytes
    }

    /// Number of distinct levels a pixel can take (2 for monochrome).
    // color_bits <= 8, so the shift stays within u16.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn gray_levels(&self) -> u16 {
        1 << self.color_bits
    }

    /// Bytes per row, when rows start on a byte boundary.
    ///
    /// Returns `None` when `width * color_bits` is not a multiple of 8, in
    /// which case rows are packed back to back with no padding.
    pub const fn bytes_per_row(&self) -> Option<usize> {
        // width * color_bits <= width * height * color_bits, which fit in u32 at construction.
        #[allow(clippy::arithmetic_side_effects)]
        let row_bits = self.width as usize * self.color_bits as usize;
        if row_bits % 8 == 0 {
            Some(row_bits / 8)
        } else {
            None
        }
    }

    /// Panel size as an `embedded-graphics` [`Size`]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Drawable area, anchored at the origin
    pub const fn bounding_box(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }

    /// Whether `(x, y)` lies on the panel.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        u32::try_from(x).is_ok_and(|x| x < self.width)
            && u32::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Locate the bits of the pixel at `point`.
    ///
    /// Shorthand for [`pixel_bit_location`].
    pub fn locate(&self, point: Point) -> Result<BitLocation, OutOfRangeError> {
        pixel_bit_location(self, point.x, point.y)
    }
}

const _: () = assert!(PanelGeometry::E2271CS021.buffer_size_bytes() == 5808);
const _: () = assert!(PanelGeometry::E2271CS021.color_bits() == 1);

/// Unvalidated field set used when deserializing; converted through
/// [`PanelGeometry::new`] so the derived buffer size is never read from input.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGeometry {
    width: u32,
    height: u32,
    color_bits: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeometry> for PanelGeometry {
    type Error = ConfigurationError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height, raw.color_bits)
    }
}

#[cfg(feature = "serde")]
impl From<PanelGeometry> for RawGeometry {
    fn from(geometry: PanelGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            color_bits: geometry.color_bits,
        }
    }
}

/// Geometry that cannot describe a real panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// Width is zero
    ZeroWidth,
    /// Height is zero
    ZeroHeight,
    /// Color depth is zero
    ZeroColorBits,
    /// Color depth is not one of [`SUPPORTED_COLOR_BITS`]
    UnsupportedColorBits(u8),
    /// `width * height * color_bits` does not fit in `u32`
    BufferTooLarge,
    /// A frame buffer's storage does not match the geometry it was built for
    BufferSizeMismatch {
        /// Bytes required by the geometry
        expected: usize,
        /// Bytes provided by the storage
        actual: usize,
    },
}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "Panel width must be non-zero"),
            Self::ZeroHeight => write!(f, "Panel height must be non-zero"),
            Self::ZeroColorBits => write!(f, "Panel color depth must be non-zero"),
            Self::UnsupportedColorBits(bits) => {
                write!(f, "Unsupported color depth: {bits} bits per pixel")
            }
            Self::BufferTooLarge => write!(f, "Frame buffer size overflows"),
            Self::BufferSizeMismatch { expected, actual } => write!(
                f,
                "Frame buffer holds {actual} bytes, geometry needs {expected}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigurationError {}
