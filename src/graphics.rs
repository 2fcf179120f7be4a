//! Graphics Support for the framebuffer

use crate::driver::Sh1107;
use crate::framebuffer::Framebuffer;
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::prelude::*;
use embedded_hal::i2c::I2c;

/// For use with embedded_grahics
///
/// Pixels outside of the display are dropped, as drawing primitives routinely cross the edges.
impl<'a> DrawTarget for Framebuffer<'a> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            // don't do anything in case of out of range
            let _ = self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Framebuffer::clear(self, color.is_on());
        Ok(())
    }
}

/// For use with embedded_grahics
impl<'a> OriginDimensions for Framebuffer<'a> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

/// Draws straight into the driver's framebuffer, call `flush` afterwards
impl<'a, I2C: I2c> DrawTarget for Sh1107<'a, I2C> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }
}

impl<'a, I2C: I2c> OriginDimensions for Sh1107<'a, I2C> {
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BUFFER_SIZE, HEIGHT, WIDTH};
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[test]
    fn graphics_size() {
        let mut storage = [0u8; BUFFER_SIZE];
        let fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();
        assert_eq!(fb.size(), Size::new(64, 128));
    }

    #[test]
    fn vertical_line_fills_one_byte() {
        let mut storage = [0xffu8; BUFFER_SIZE];
        let mut fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();

        let _ = Line::new(Point::new(3, 8), Point::new(3, 15))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb);

        let buffer = fb.buffer();
        // page 1, column 3
        assert_eq!(buffer[64 + 3], 0x00);
        for (i, &byte) in buffer.iter().enumerate() {
            if i != 67 {
                assert_eq!(byte, 0xff);
            }
        }
    }

    #[test]
    fn horizontal_line_sets_one_bit_per_column() {
        let mut storage = [0u8; BUFFER_SIZE];
        let mut fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();
        fb.clear(false);

        let _ = Line::new(Point::new(0, 127), Point::new(63, 127))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb);

        let buffer = fb.buffer();
        assert!(buffer[15 * 64..].iter().all(|&b| b == 0x7f));
        assert!(buffer[..15 * 64].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn drawing_past_the_edges_is_clipped() {
        let mut storage = [0u8; BUFFER_SIZE + 8];
        let mut fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();

        let _ = Rectangle::new(Point::new(-10, -10), Size::new(200, 200))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut fb);

        assert!(fb.buffer().iter().all(|&b| b == 0xff));
        drop(fb);
        assert!(storage[BUFFER_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn clear_follows_polarity() {
        let mut storage = [0u8; BUFFER_SIZE];
        let mut fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();
        let _ = DrawTarget::clear(&mut fb, BinaryColor::Off);
        assert!(fb.buffer().iter().all(|&b| b == 0xff));
        let _ = DrawTarget::clear(&mut fb, BinaryColor::On);
        assert!(fb.buffer().iter().all(|&b| b == 0x00));
    }
}
