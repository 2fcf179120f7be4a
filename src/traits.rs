use crate::rect::Area;

/// All commands need to have this trait which gives the opcode of the command
/// which needs to be send over I2C behind a command control byte
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// Completion signal handed back to the rendering library after a flush
///
/// Called exactly once per [`DisplayDriver::flush`], after every bus write for the area
/// has been attempted, so the library may reuse its draw buffer.
pub trait FlushReady {
    /// The flushed area has been sent to the panel
    fn flush_ready(&mut self);
}

impl<F: FnMut()> FlushReady for F {
    fn flush_ready(&mut self) {
        (self)()
    }
}

/// The callbacks a rendering library needs to drive a monochrome, page organized display
///
/// The draw buffer is owned by the driver, so neither callback takes a buffer or its width.
/// Packing into a caller owned buffer is [`packer::set_pixel`](crate::packer::set_pixel).
///
/// # Example
///
///```ignore
///use sh1107::prelude::*;
///
///let mut display = Sh1107::new(i2c, &mut buffer, &TICKER)?;
///
///// the library asks for a dirty area to be widened to whole pages
///let area = display.rounder(Area::new(10, 3, 20, 10));
///
///// ... and draws into it
///display.set_pixel(12, 4, true)?;
///
///// then hands the area back to be sent to the panel
///display.flush(area, &mut || lib.flush_ready())?;
///```
pub trait DisplayDriver {
    /// Error returned by pixel writes and flushes
    type Error;

    /// Widen a requested redraw area to the addressable granularity of the panel
    fn rounder(&self, area: Area) -> Area;

    /// Write a single pixel into the framebuffer
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), Self::Error>;

    /// Send an area of the framebuffer to the panel and signal completion
    ///
    /// `ready` is signalled exactly once, even if the area is empty or a bus write failed.
    fn flush<R: FlushReady>(&mut self, area: Area, ready: &mut R) -> Result<(), Self::Error>;
}
