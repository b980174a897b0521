//! Frame-buffer addressing
//!
//! Maps a pixel coordinate to the bits it occupies in a packed frame buffer.
//!
//! # Layout
//!
//! Row-major, MSB-first. Pixel `idx = y * width + x` owns the `color_bits`
//! bits starting at bit position `idx * color_bits`, counted from the most
//! significant bit of byte 0:
//!
//! ```text
//! 1 bpp:  byte 0 = [p0 p1 p2 p3 p4 p5 p6 p7]   bit 7 .. bit 0
//! 2 bpp:  byte 0 = [p0 p0 p1 p1 p2 p2 p3 p3]
//! ```
//!
//! Rows are not padded; with a width that is not a multiple of `8 / color_bits`
//! the next row starts mid-byte.

use crate::geometry::PanelGeometry;

/// Position of a pixel's bits in a packed frame buffer.
///
/// Only [`pixel_bit_location`] builds one, so `bit_offset + width <= 8` and
/// `width` is a supported color depth for every value in circulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitLocation {
    byte_offset: usize,
    bit_offset: u8,
    width: u8,
}

impl BitLocation {
    /// Index of the byte holding the pixel
    pub const fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Offset of the pixel's first bit, counted from the MSB (0..8)
    pub const fn bit_offset(&self) -> u8 {
        self.bit_offset
    }

    /// Bits per pixel
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Right shift that moves the pixel's bits down to bit 0.
    // bit_offset + width <= 8 for every supported depth.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn shift(&self) -> u8 {
        8 - self.bit_offset - self.width
    }

    /// Mask selecting the pixel's bits within its byte.
    // width is 1, 2, 4 or 8 and shift() < 8.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub const fn mask(&self) -> u8 {
        let value_mask = (0xFF_u16 >> (8 - self.width as u16)) as u8;
        value_mask << self.shift()
    }

    /// Extract this pixel's value from its byte.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn read(&self, byte: u8) -> u8 {
        (byte & self.mask()) >> self.shift()
    }

    /// Return `byte` with this pixel's bits replaced by `value`.
    ///
    /// Bits of `value` above the pixel width are ignored.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn write(&self, byte: u8, value: u8) -> u8 {
        let mask = self.mask();
        (byte & !mask) | ((value << self.shift()) & mask)
    }
}

/// Locate the bits of pixel `(x, y)` in a frame buffer laid out for `geometry`.
///
/// Pure and reentrant; safe to call from any number of renderers at once.
///
/// # Errors
///
/// [`OutOfRangeError`] if `x` or `y` is negative, `x >= width` or `y >= height`.
pub fn pixel_bit_location(
    geometry: &PanelGeometry,
    x: i32,
    y: i32,
) -> Result<BitLocation, OutOfRangeError> {
    let out_of_range = OutOfRangeError {
        x,
        y,
        width: geometry.width(),
        height: geometry.height(),
    };

    let (Ok(col), Ok(row)) = (u32::try_from(x), u32::try_from(y)) else {
        return Err(out_of_range);
    };
    if col >= geometry.width() || row >= geometry.height() {
        return Err(out_of_range);
    }

    // row < height and col < width, so idx * color_bits is below
    // width * height * color_bits, which PanelGeometry::new checked fits in u32.
    #[allow(clippy::arithmetic_side_effects)]
    let bit_index = (row as usize * geometry.width() as usize + col as usize)
        * usize::from(geometry.color_bits());

    // Remainder of a division by 8 always fits in u8.
    #[allow(clippy::cast_possible_truncation)]
    let bit_offset = (bit_index % 8) as u8;

    Ok(BitLocation {
        byte_offset: bit_index / 8,
        bit_offset,
        width: geometry.color_bits(),
    })
}

/// Pixel coordinate outside the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// Requested column
    pub x: i32,
    /// Requested row
    pub y: i32,
    /// Panel width
    pub width: u32,
    /// Panel height
    pub height: u32,
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Pixel ({}, {}) outside {}x{} panel",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}
