//! Pixel packing into page organized display RAM
//!
//! One byte holds a vertical strip of 8 pixels of one column, the least
//! significant bit being the topmost pixel. Pages follow each other, so the byte
//! for column `x` of page `page` sits at `page * width + x`.

use bit_field::BitField;

use crate::color::Polarity;
use crate::framebuffer::FramebufferError;

/// Page of a row
pub(crate) fn page_of(y: u16) -> u16 {
    y >> 3
}

// index of the byte and position of the bit holding pixel (x, y)
fn locate(buffer_len: usize, width: u16, x: u16, y: u16) -> Option<(usize, usize)> {
    if x >= width {
        return None;
    }
    let index = page_of(y) as usize * width as usize + x as usize;
    if index >= buffer_len {
        return None;
    }
    Some((index, (y & 7) as usize))
}

/// Set a single pixel in a page organized `buffer` that is `width` columns wide
///
/// The bit written for `on` follows `polarity`.
/// Coordinates outside the buffer are rejected before the buffer is touched.
pub fn set_pixel(
    buffer: &mut [u8],
    width: u16,
    x: u16,
    y: u16,
    on: bool,
    polarity: Polarity,
) -> Result<(), FramebufferError> {
    let (index, bit) = locate(buffer.len(), width, x, y).ok_or(FramebufferError::OutOfBounds)?;
    buffer[index].set_bit(bit, polarity.bit_value(on));
    Ok(())
}

/// Read back a single pixel of a page organized `buffer`
pub fn get_pixel(
    buffer: &[u8],
    width: u16,
    x: u16,
    y: u16,
    polarity: Polarity,
) -> Result<bool, FramebufferError> {
    let (index, bit) = locate(buffer.len(), width, x, y).ok_or(FramebufferError::OutOfBounds)?;
    Ok(polarity.is_on(buffer[index].get_bit(bit)))
}
