//! A simple Driver for a 64x128 SH1107 OLED module via I2C
//!
//! The driver keeps a full copy of the display RAM in a [`Framebuffer`] and only ever
//! sends whole pages of the areas the rendering library reports as dirty.

use embedded_hal::i2c::I2c;
use log::{debug, info};

use crate::command::Command;
use crate::error::ErrorKind;
use crate::flush::flush_area;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::rect::Area;
use crate::tick::Ticker;
use crate::traits::{DisplayDriver, FlushReady};
use crate::{ADDRESS, HEIGHT, WIDTH};

/// Register setup applied once at start up, every byte sent as its own command
///
/// Brings the panel into page addressing mode with a 128 line multiplex, sets contrast,
/// scan direction and clocking, and finally switches the display on.
///
/// The discharge/precharge argument is `0x80`, which is what `(2) << 4 + (2)` evaluates to
/// in the sequence this table was taken from. The datasheet layout suggests `0x22`
/// (2 clocks each) was meant; the byte is kept as the hardware was run with it.
pub const STARTUP: [u8; 22] = [
    Command::DisplayOnOff as u8,
    Command::StartLine as u8,
    0x00,
    Command::Contrast as u8,
    0x2F,
    Command::AddressingMode as u8,
    Command::SegmentRemap as u8,
    Command::ComScanDirection as u8 | 0x0F,
    Command::MultiplexRatio as u8,
    0x7F,
    Command::DisplayOffset as u8,
    0x60,
    Command::InternalClock as u8,
    0x51,
    Command::DischargePrecharge as u8,
    0x80,
    Command::VcomDeselect as u8,
    0x35,
    Command::PageAddress as u8,
    Command::EntireDisplayOn as u8,
    Command::Reverse as u8,
    Command::DisplayOnOff as u8 | 0x01,
];

/// Sh1107 driver
pub struct Sh1107<'a, I2C> {
    /// I2C
    interface: DisplayInterface<I2C>,
    /// Copy of the display RAM
    framebuffer: Framebuffer<'a>,
    /// Time base of the rendering library
    ticker: &'a Ticker,
}

impl<'a, I2C> Sh1107<'a, I2C>
where
    I2C: I2c,
{
    /// Creates a new driver talking to the default address [`ADDRESS`]
    ///
    /// `buffer` must hold at least [`BUFFER_SIZE`](crate::BUFFER_SIZE) bytes.
    /// This already initialises the device, an error here means the panel can't be driven.
    pub fn new(
        i2c: I2C,
        buffer: &'a mut [u8],
        ticker: &'a Ticker,
    ) -> Result<Self, ErrorKind<I2C::Error>> {
        Self::new_with_address(i2c, ADDRESS, buffer, ticker)
    }

    /// Same as [`Sh1107::new`] for a module strapped to another 7-bit address
    pub fn new_with_address(
        i2c: I2C,
        address: u8,
        buffer: &'a mut [u8],
        ticker: &'a Ticker,
    ) -> Result<Self, ErrorKind<I2C::Error>> {
        let framebuffer = Framebuffer::new(WIDTH, HEIGHT, buffer)?;
        let interface = DisplayInterface::new(i2c, address);

        let mut display = Sh1107 {
            interface,
            framebuffer,
            ticker,
        };

        display.init()?;

        Ok(display)
    }

    fn init(&mut self) -> Result<(), ErrorKind<I2C::Error>> {
        self.interface.cmds(&STARTUP)?;
        info!("display initialised ({} startup commands)", STARTUP.len());
        Ok(())
    }

    /// Get the width of the display
    pub fn width(&self) -> u16 {
        WIDTH
    }

    /// Get the height of the display
    pub fn height(&self) -> u16 {
        HEIGHT
    }

    /// The framebuffer that gets flushed
    pub fn framebuffer(&self) -> &Framebuffer<'a> {
        &self.framebuffer
    }

    /// Mutable access to the framebuffer, e.g. to draw with embedded-graphics
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<'a> {
        &mut self.framebuffer
    }

    /// Switch the panel on or off, display RAM is kept either way
    pub fn set_display_on(&mut self, on: bool) -> Result<(), ErrorKind<I2C::Error>> {
        self.interface
            .raw_cmd(Command::DisplayOnOff.with(u8::from(on)))
    }

    /// Set the contrast, 0x00 being the dimmest
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), ErrorKind<I2C::Error>> {
        self.interface.cmd(Command::Contrast)?;
        self.interface.raw_cmd(contrast)
    }

    /// Show the RAM content inverted, without touching the framebuffer
    pub fn set_reversed(&mut self, reversed: bool) -> Result<(), ErrorKind<I2C::Error>> {
        self.interface
            .raw_cmd(Command::Reverse.with(u8::from(reversed)))
    }

    /// Send the whole framebuffer to the panel
    pub fn flush_all<R: FlushReady>(&mut self, ready: &mut R) -> Result<(), ErrorKind<I2C::Error>> {
        let area = self.framebuffer.area();
        self.flush(area, ready)
    }

    /// Advance the rendering library's time base, see [`Ticker::advance_time`]
    pub fn advance_time(&self, delta_ms: u32) {
        self.ticker.advance_time(delta_ms);
    }

    /// Milliseconds elapsed on the time base
    pub fn now(&self) -> u32 {
        self.ticker.now()
    }

    /// Gives back the I2C bus, the framebuffer storage is released with the driver
    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

impl<'a, I2C> DisplayDriver for Sh1107<'a, I2C>
where
    I2C: I2c,
{
    type Error = ErrorKind<I2C::Error>;

    fn rounder(&self, area: Area) -> Area {
        area.round()
    }

    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), Self::Error> {
        self.framebuffer.set_pixel(x, y, on).map_err(|err| {
            debug!("rejected pixel ({}, {})", x, y);
            ErrorKind::from(err)
        })
    }

    fn flush<R: FlushReady>(&mut self, area: Area, ready: &mut R) -> Result<(), Self::Error> {
        let result = flush_area(&mut self.interface, &self.framebuffer, area);
        ready.flush_ready();
        result
    }
}
