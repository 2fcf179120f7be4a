use crate::{command::Command as Opcode, error::ErrorKind, traits::Command};
use embedded_hal::i2c::I2c;

/// Control byte announcing a single command byte
pub(crate) const COMMAND_PREFIX: u8 = 0x80;
/// Control byte announcing a burst of display RAM data
pub(crate) const DATA_PREFIX: u8 = 0x40;

/// Largest data burst sent in one transfer, one full page row
pub(crate) const MAX_BURST: usize = crate::WIDTH as usize;

/// The Connection Interface of the SH1107
///
/// Every transfer starts with a control byte telling the panel whether the
/// following bytes are a command or display RAM data.
pub(crate) struct DisplayInterface<I2C> {
    /// I2C
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> DisplayInterface<I2C>
where
    I2C: I2c,
{
    /// Creates a new `DisplayInterface` struct
    pub fn new(i2c: I2C, address: u8) -> Self {
        DisplayInterface { i2c, address }
    }

    /// Basic function for sending [Commands](Command).
    ///
    /// Sends `[0x80, opcode]` as one transfer.
    pub(crate) fn cmd<T: Command>(&mut self, command: T) -> Result<(), ErrorKind<I2C::Error>> {
        self.raw_cmd(command.address())
    }

    /// Sends a command byte which already has its argument merged in,
    /// or a plain argument byte following a two byte command
    pub(crate) fn raw_cmd(&mut self, byte: u8) -> Result<(), ErrorKind<I2C::Error>> {
        self.write(&[COMMAND_PREFIX, byte])
    }

    /// Sends a sequence of command bytes in order, one transfer each
    pub(crate) fn cmds(&mut self, bytes: &[u8]) -> Result<(), ErrorKind<I2C::Error>> {
        for &byte in bytes {
            self.raw_cmd(byte)?;
        }
        Ok(())
    }

    /// Basic function for sending an array of u8-values of data over i2c
    ///
    /// Sends `[0x40] ++ data` as one burst. `data` has to fit into one page row.
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), ErrorKind<I2C::Error>> {
        if data.is_empty() || data.len() > MAX_BURST {
            return Err(ErrorKind::TransferSize);
        }

        let mut burst = [0u8; MAX_BURST + 1];
        burst[0] = DATA_PREFIX;
        burst[1..=data.len()].copy_from_slice(data);
        self.write(&burst[..=data.len()])
    }

    /// Points the panel's RAM cursor at `column` in `page`
    ///
    /// Sends column-low, column-high and page address, in that order.
    pub(crate) fn set_address(&mut self, column: u8, page: u8) -> Result<(), ErrorKind<I2C::Error>> {
        self.raw_cmd(Opcode::ColumnAddressLow.with(column & 0x0F))?;
        self.raw_cmd(Opcode::ColumnAddressHigh.with((column >> 4) & 0x0F))?;
        self.raw_cmd(Opcode::PageAddress.with(page & 0x0F))
    }

    /// Gives back the bus
    pub(crate) fn release(self) -> I2C {
        self.i2c
    }

    // i2c write helper/abstraction function
    fn write(&mut self, bytes: &[u8]) -> Result<(), ErrorKind<I2C::Error>> {
        self.i2c
            .write(self.address, bytes)
            .map_err(ErrorKind::BusError)
    }
}
