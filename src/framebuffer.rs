//! In-memory copy of the display RAM

use crate::color::{Polarity, POLARITY};
use crate::packer;
use crate::rect::Area;

/// count the number of bytes needed for a page organized surface
pub const fn buffer_len(width: u16, height: u16) -> usize {
    // round to upper page count
    width as usize * ((height as usize + 7) / 8)
}

/// Error found during usage of a [`Framebuffer`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FramebufferError {
    /// The provided buffer was too small
    BufferTooSmall,
    /// Pixel coordinates outside the surface
    OutOfBounds,
}

/// Page organized framebuffer covering the whole panel surface
///
/// You must allocate the storage by yourself (usually a `static` or a stack array living
/// for the whole program), it must be large enough to contain all pixels.
pub struct Framebuffer<'a> {
    width: u16,
    height: u16,
    polarity: Polarity,
    buffer: &'a mut [u8],
}

impl<'a> Framebuffer<'a> {
    /// Wrap `buffer` as a `width` x `height` surface using the panel's [`POLARITY`]
    pub fn new(width: u16, height: u16, buffer: &'a mut [u8]) -> Result<Self, FramebufferError> {
        Self::with_polarity(width, height, buffer, POLARITY)
    }

    /// Same as [`Framebuffer::new`] with an explicit polarity
    pub fn with_polarity(
        width: u16,
        height: u16,
        buffer: &'a mut [u8],
        polarity: Polarity,
    ) -> Result<Self, FramebufferError> {
        // the surface has to fit into the provided storage
        if buffer_len(width, height) > buffer.len() {
            return Err(FramebufferError::BufferTooSmall);
        }
        Ok(Self {
            width,
            height,
            polarity,
            buffer,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Polarity used to store pixels
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The whole surface
    pub fn area(&self) -> Area {
        Area::full(self.width, self.height)
    }

    /// get the used part of the internal buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..buffer_len(self.width, self.height)]
    }

    /// Set a specific pixel
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), FramebufferError> {
        if y >= self.height {
            return Err(FramebufferError::OutOfBounds);
        }
        let len = buffer_len(self.width, self.height);
        packer::set_pixel(&mut self.buffer[..len], self.width, x, y, on, self.polarity)
    }

    /// Get a specific pixel
    pub fn get_pixel(&self, x: u16, y: u16) -> Result<bool, FramebufferError> {
        if y >= self.height {
            return Err(FramebufferError::OutOfBounds);
        }
        packer::get_pixel(self.buffer(), self.width, x, y, self.polarity)
    }

    /// Set every pixel to `on`
    pub fn clear(&mut self, on: bool) {
        let value = self.polarity.byte_value(on);
        let len = buffer_len(self.width, self.height);
        self.buffer[..len].fill(value);
    }

    /// `len` bytes of `page` starting at column `x`
    ///
    /// `None` if the slice would leave the page row.
    pub fn page_slice(&self, page: u16, x: u16, len: u16) -> Option<&[u8]> {
        if page as usize * 8 >= self.height as usize || x as usize + len as usize > self.width as usize
        {
            return None;
        }
        let offset = page as usize * self.width as usize + x as usize;
        self.buffer.get(offset..offset + len as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BUFFER_SIZE, HEIGHT, WIDTH};

    // test buffer length
    #[test]
    fn framebuffer_size() {
        assert_eq!(buffer_len(WIDTH, HEIGHT), 1024);
        assert_eq!(buffer_len(64, 12), 128);

        let mut storage = [0u8; BUFFER_SIZE];
        let fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();
        assert_eq!(fb.buffer().len(), 1024);
        assert_eq!(fb.area().pages().count(), 16);
    }

    #[test]
    fn framebuffer_too_small() {
        let mut storage = [0u8; BUFFER_SIZE - 1];
        let fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage);
        assert!(matches!(fb, Err(FramebufferError::BufferTooSmall)));
    }

    #[test]
    fn framebuffer_set_and_get() {
        let mut storage = [0u8; BUFFER_SIZE];
        let mut fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();
        fb.set_pixel(5, 12, false).unwrap();
        assert_eq!(fb.get_pixel(5, 12), Ok(false));
        assert_eq!(fb.buffer()[69], 0b0001_0000);
        fb.set_pixel(5, 12, true).unwrap();
        assert_eq!(fb.get_pixel(5, 12), Ok(true));
        assert_eq!(fb.buffer()[69], 0);
    }

    #[test]
    fn framebuffer_rejects_out_of_bounds() {
        let mut storage = [0u8; BUFFER_SIZE + 64];
        let mut fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();
        // the spare storage behind the surface must not be reachable
        assert_eq!(fb.set_pixel(0, HEIGHT, true), Err(FramebufferError::OutOfBounds));
        assert_eq!(fb.set_pixel(WIDTH, 0, true), Err(FramebufferError::OutOfBounds));
        assert_eq!(fb.get_pixel(0, HEIGHT + 3), Err(FramebufferError::OutOfBounds));
        assert!(storage.iter().all(|&b| b == 0));
    }

    #[test]
    fn framebuffer_clear() {
        let mut storage = [0u8; BUFFER_SIZE];
        let mut fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();
        fb.clear(false);
        assert!(fb.buffer().iter().all(|&b| b == 0xff));
        fb.clear(true);
        assert!(fb.buffer().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn framebuffer_page_slice() {
        let mut storage = [0u8; BUFFER_SIZE];
        for (i, byte) in storage.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let fb = Framebuffer::new(WIDTH, HEIGHT, &mut storage).unwrap();

        let slice = fb.page_slice(1, 10, 11).unwrap();
        assert_eq!(slice.len(), 11);
        assert_eq!(slice[0], 74);
        assert_eq!(slice[10], 84);

        assert!(fb.page_slice(0, 60, 5).is_none());
        assert!(fb.page_slice(16, 0, 1).is_none());
        assert_eq!(fb.page_slice(15, 0, 64).map(|s| s.len()), Some(64));
    }
}
