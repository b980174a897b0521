//! Packed frame buffer
//!
//! Renderer-side pixel store laid out exactly as [`pixel_bit_location`]
//! describes, ready to be handed to the driver's SPI transfer as-is.
//!
//! Polarity: a set bit is ink. `BinaryColor::On` (black) sets every bit of a
//! pixel, `BinaryColor::Off` (white) clears them.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::addressing::{pixel_bit_location, OutOfRangeError};
use crate::geometry::{ConfigurationError, PanelGeometry};

/// Frame buffer sized for [`PanelGeometry::E2271CS021`]
pub type E2271CS021FrameBuffer =
    FrameBuffer<{ PanelGeometry::E2271CS021.buffer_size_bytes() }>;

/// Packed frame buffer of `N` bytes for one panel geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    geometry: PanelGeometry,
    bytes: [u8; N],
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a blank (all white) buffer for `geometry`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::BufferSizeMismatch`] if `N` is not
    /// `geometry.buffer_size_bytes()`.
    // On embedded targets the buffer is expected to live in a static.
    #[allow(clippy::large_stack_arrays)]
    pub fn new(geometry: PanelGeometry) -> Result<Self, ConfigurationError> {
        if geometry.buffer_size_bytes() != N {
            return Err(ConfigurationError::BufferSizeMismatch {
                expected: geometry.buffer_size_bytes(),
                actual: N,
            });
        }

        Ok(Self {
            geometry,
            bytes: [0x00; N],
        })
    }

    /// Geometry the buffer is laid out for
    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Packed pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Packed pixel data, mutable
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Set every pixel to `value`.
    ///
    /// Bits of `value` above the panel's color depth are ignored. Padding
    /// bits after the last pixel stay clear.
    pub fn fill(&mut self, value: u8) {
        let pattern = replicate(value & self.full_value(), self.geometry.color_bits());
        self.bytes.fill(pattern);
        self.clear_padding();
    }

    /// Store `value` at `(x, y)`.
    ///
    /// Bits of `value` above the panel's color depth are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u8) -> Result<(), OutOfRangeError> {
        let loc = pixel_bit_location(&self.geometry, x, y)?;
        if let Some(byte) = self.bytes.get_mut(loc.byte_offset()) {
            *byte = loc.write(*byte, value);
        }
        Ok(())
    }

    /// Value stored at `(x, y)`
    pub fn pixel(&self, x: i32, y: i32) -> Result<u8, OutOfRangeError> {
        let loc = pixel_bit_location(&self.geometry, x, y)?;
        Ok(self.bytes.get(loc.byte_offset()).map_or(0, |byte| loc.read(*byte)))
    }

    /// Zero the bits of the final byte that follow the last pixel.
    fn clear_padding(&mut self) {
        let (Some(x), Some(y)) = (
            self.geometry.width().checked_sub(1),
            self.geometry.height().checked_sub(1),
        ) else {
            return;
        };
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return;
        };
        let Ok(last) = pixel_bit_location(&self.geometry, x, y) else {
            return;
        };
        let used = u8::MAX.checked_shl(u32::from(last.shift())).unwrap_or(0);
        if let Some(byte) = self.bytes.get_mut(last.byte_offset()) {
            *byte &= used;
        }
    }

    // color_bits <= 8, so the shifted value fits in u8.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn full_value(&self) -> u8 {
        (0xFF_u16 >> (8_u16.saturating_sub(u16::from(self.geometry.color_bits())))) as u8
    }
}

/// Byte with every `color_bits`-wide slot holding `value`.
fn replicate(value: u8, color_bits: u8) -> u8 {
    let mut byte = value;
    let mut filled = color_bits;
    while filled < 8 {
        byte |= byte.checked_shl(u32::from(filled)).unwrap_or(0);
        filled = filled.saturating_mul(2);
    }
    byte
}

impl<const N: usize> DrawTarget for FrameBuffer<N> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let ink = self.full_value();
        for Pixel(point, color) in pixels {
            let value = match color {
                BinaryColor::On => ink,
                BinaryColor::Off => 0,
            };
            // Pixels outside the panel are clipped.
            let _ = self.set_pixel(point.x, point.y, value);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let value = match color {
            BinaryColor::On => self.full_value(),
            BinaryColor::Off => 0,
        };
        self.fill(value);
        Ok(())
    }
}

impl<const N: usize> OriginDimensions for FrameBuffer<N> {
    fn size(&self) -> Size {
        self.geometry.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn blank() -> E2271CS021FrameBuffer {
        FrameBuffer::new(PanelGeometry::E2271CS021).unwrap()
    }

    #[test]
    fn test_size_matches_geometry() {
        let fb = blank();
        assert_eq!(fb.as_bytes().len(), 5808);
        assert_eq!(fb.size(), Size::new(264, 176));
    }

    #[test]
    fn test_wrong_storage_size_rejected() {
        let result = FrameBuffer::<4000>::new(PanelGeometry::E2271CS021);
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::BufferSizeMismatch {
                expected: 5808,
                actual: 4000
            }
        );
    }

    #[test]
    fn test_set_pixel_msb_first() {
        let mut fb = blank();
        fb.set_pixel(0, 0, 1).unwrap();
        fb.set_pixel(9, 0, 1).unwrap();
        assert_eq!(fb.as_bytes()[0], 0b1000_0000);
        assert_eq!(fb.as_bytes()[1], 0b0100_0000);
        assert_eq!(fb.pixel(9, 0), Ok(1));
        assert_eq!(fb.pixel(8, 0), Ok(0));
    }

    #[test]
    fn test_set_pixel_out_of_range() {
        let mut fb = blank();
        assert!(fb.set_pixel(264, 0, 1).is_err());
        assert!(fb.pixel(0, 176).is_err());
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_clips_offscreen_pixels() {
        let mut fb = blank();
        Rectangle::new(Point::new(260, 172), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();

        // 4×4 visible corner
        let inked: u32 = fb.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(inked, 16);
        assert_eq!(fb.pixel(263, 175), Ok(1));
        assert_eq!(fb.pixel(259, 175), Ok(0));
    }

    #[test]
    fn test_clear_and_fill() {
        let mut fb = blank();
        fb.clear(BinaryColor::On).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
        fb.fill(0);
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_clear_leaves_padding_bits_clear() {
        // 3×3 at 1 bpp: 9 pixels, so 7 padding bits in the second byte
        let geometry = PanelGeometry::new(3, 3, 1).unwrap();

        let mut cleared = FrameBuffer::<2>::new(geometry).unwrap();
        cleared.clear(BinaryColor::On).unwrap();
        assert_eq!(cleared.as_bytes(), &[0xFF, 0b1000_0000]);

        let mut drawn = FrameBuffer::<2>::new(geometry).unwrap();
        drawn
            .fill_solid(&geometry.bounding_box(), BinaryColor::On)
            .unwrap();
        assert_eq!(cleared.as_bytes(), drawn.as_bytes());

        let mut filled = FrameBuffer::<2>::new(geometry).unwrap();
        filled.fill(1);
        assert_eq!(filled.as_bytes(), cleared.as_bytes());
    }

    #[test]
    fn test_fill_two_bit_unaligned_tail() {
        // 5 pixels at 2 bpp = 10 bits; the last byte keeps only its top 2 bits
        let geometry = PanelGeometry::new(5, 1, 2).unwrap();
        let mut fb = FrameBuffer::<2>::new(geometry).unwrap();
        fb.fill(0b11);
        assert_eq!(fb.as_bytes(), &[0xFF, 0b1100_0000]);
    }

    #[test]
    fn test_fill_two_bit() {
        let geometry = PanelGeometry::new(4, 2, 2).unwrap();
        let mut fb = FrameBuffer::<2>::new(geometry).unwrap();
        fb.fill(0b10);
        assert_eq!(fb.as_bytes(), &[0b1010_1010, 0b1010_1010]);
    }

    #[test]
    fn test_draw_two_bit_ink_sets_all_bits() {
        let geometry = PanelGeometry::new(4, 1, 2).unwrap();
        let mut fb = FrameBuffer::<1>::new(geometry).unwrap();
        Pixel(Point::new(1, 0), BinaryColor::On).draw(&mut fb).unwrap();
        assert_eq!(fb.as_bytes(), &[0b0011_0000]);
        assert_eq!(fb.pixel(1, 0), Ok(0b11));
    }
}
