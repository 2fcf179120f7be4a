//! B/W Color polarity of the panel

/// How a pixel's on/off state maps to its bit in display RAM
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Polarity {
    /// An "on" pixel is a set bit
    Normal,
    /// An "on" pixel is a cleared bit, an "off" pixel a set bit
    #[default]
    Inverted,
}

/// Polarity of the panel this driver was built against
///
/// The module lights a segment for a *cleared* RAM bit relative to the colors the
/// rendering library hands over, so "off" (color value 0) sets the bit and "on" clears it.
/// Check the datasheet of a different panel revision before changing this.
pub const POLARITY: Polarity = Polarity::Inverted;

impl Polarity {
    /// The RAM bit to store for a pixel
    pub fn bit_value(self, on: bool) -> bool {
        match self {
            Polarity::Normal => on,
            Polarity::Inverted => !on,
        }
    }

    /// The pixel state a RAM bit stands for
    pub fn is_on(self, bit: bool) -> bool {
        // the mapping is its own inverse
        self.bit_value(bit)
    }

    /// Gets a full byte of pixels all set to `on`
    pub fn byte_value(self, on: bool) -> u8 {
        if self.bit_value(on) {
            0xff
        } else {
            0x00
        }
    }
}
