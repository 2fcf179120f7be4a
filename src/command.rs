//! I2C Commands for the SH1107

use crate::traits;

/// SH1107 commands
///
/// Should rarely (never?) be needed directly.
///
/// Several opcodes carry their argument in the low bits of the opcode itself
/// (column address nibbles, page index, on/off flags), use [`Command::with`] for those.
/// Two byte commands are sent as two separate command transfers.
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Lower nibble of the column address, `0x00 | low`
    ColumnAddressLow = 0x00,
    /// Upper nibble of the column address, `0x10 | high`
    ColumnAddressHigh = 0x10,
    /// Memory addressing mode, `| 0` for page addressing, `| 1` for vertical
    AddressingMode = 0x20,
    /// Contrast control, followed by one byte
    Contrast = 0x81,
    /// Segment remap, `| 1` to reverse the column direction
    SegmentRemap = 0xA0,
    /// Multiplex ratio, followed by one byte
    MultiplexRatio = 0xA8,
    /// Entire display on, `| 1` to light every pixel regardless of RAM
    EntireDisplayOn = 0xA4,
    /// Normal/reverse display, `| 1` to invert
    Reverse = 0xA6,
    /// Display offset, followed by one byte
    DisplayOffset = 0xD3,
    /// DC-DC control, followed by one byte
    DcDc = 0xAD,
    /// Display on/off, `| 1` for on
    DisplayOnOff = 0xAE,
    /// Page address, `0xB0 | page`
    PageAddress = 0xB0,
    /// Output scan direction, `| 0xF` to scan from COM[N-1] to COM0
    ComScanDirection = 0xC0,
    /// Clock divide ratio / oscillator frequency, followed by one byte
    InternalClock = 0xD5,
    /// Discharge / precharge period, followed by one byte
    DischargePrecharge = 0xD9,
    /// VCOM deselect level, followed by one byte
    VcomDeselect = 0xDB,
    /// Display start line, followed by one byte
    StartLine = 0xDC,
    ReadModifyWrite = 0xE0,
    ReadModifyWriteEnd = 0xEE,
    Nop = 0xE3,
}

impl Command {
    /// The opcode with an argument merged into its low bits
    pub(crate) fn with(self, arg: u8) -> u8 {
        self as u8 | arg
    }
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}
