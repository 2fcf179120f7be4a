//! A simple Driver for SH1107 OLED Displays via I2C
//!
//! This driver was built using [`embedded-hal`] traits and is meant to sit behind
//! a rendering library which draws into a framebuffer and reports dirty areas.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0
//!
//! # Requirements
//!
//! ### I2C
//!
//! - 7-bit address `0x3C` (see [`ADDRESS`])
//! - Tested with 100kHz, the panel allows up to 400kHz
//!
//! ### Other....
//!
//! - Buffersize: the framebuffer always needs to be of the size: `width * height / 8`,
//!   see [`BUFFER_SIZE`]. Every byte holds 8 vertically stacked pixels of one column.
//! - The time base ([`Ticker`](tick::Ticker)) needs to be advanced every
//!   [`TICK_PERIOD_MS`](tick::TICK_PERIOD_MS) from a timer.
//!
//! # Examples
//!
//! ```ignore
//! use sh1107::prelude::*;
//!
//! static TICKER: Ticker = Ticker::new();
//! static mut BUFFER: [u8; BUFFER_SIZE] = [0; BUFFER_SIZE];
//!
//! let mut display = Sh1107::new(i2c, unsafe { &mut BUFFER }, &TICKER)?;
//!
//! // in the timer callback
//! TICKER.advance_time(TICK_PERIOD_MS);
//!
//! // in the main loop, for every dirty area the rendering library reports
//! let area = display.rounder(dirty);
//! display.set_pixel(x, y, on)?;
//! if let Err(e) = display.flush(area, &mut || flush_ready()) {
//!     // report and keep going, the next flush may succeed
//! }
//! ```
//!
//!
#![no_std]

#[cfg(feature = "graphics")]
pub mod graphics;

mod traits;

pub mod color;

/// Interface for the physical connection between display and the controlling device
mod interface;

mod command;
pub mod driver;
pub mod error;
mod flush;
pub mod framebuffer;
pub mod packer;
pub mod rect;
pub mod tick;

pub use driver::STARTUP;
pub use traits::{DisplayDriver, FlushReady};

pub mod prelude {
    pub use crate::color::{Polarity, POLARITY};
    pub use crate::driver::Sh1107;
    pub use crate::error::ErrorKind;
    pub use crate::framebuffer::{Framebuffer, FramebufferError};
    pub use crate::rect::Area;
    pub use crate::tick::{Ticker, TICK_PERIOD_MS};
    pub use crate::traits::{DisplayDriver, FlushReady};
    pub use crate::{ADDRESS, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
}

/// Width of the display
pub const WIDTH: u16 = 64;
/// Height of the display
pub const HEIGHT: u16 = 128;
/// Number of 8 pixel high pages
pub const PAGES: u16 = HEIGHT / 8;
/// Bytes needed for a framebuffer covering the whole display
pub const BUFFER_SIZE: usize = framebuffer::buffer_len(WIDTH, HEIGHT);
/// Default 7-bit I2C address of the module
pub const ADDRESS: u8 = 0x3C;
