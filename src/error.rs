use core::fmt::{Debug, Display, Formatter};

use crate::framebuffer::FramebufferError;

/// Driver error type
///
/// `E` is the error type of the I2C bus the panel is connected to.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub enum ErrorKind<E> {
    /// Encountered an I2C error while writing to the panel
    BusError(E),

    /// Pixel coordinates outside the panel geometry
    OutOfBounds,

    /// A data burst with no payload was requested
    TransferSize,

    /// The provided framebuffer storage was too small for the geometry
    BufferTooSmall,
}

impl<E: Display> Display for ErrorKind<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BusError(err) => Display::fmt(&err, f),
            Self::OutOfBounds => write!(f, "Coordinates are outside of the display"),
            Self::TransferSize => write!(f, "A data transfer needs at least one byte"),
            Self::BufferTooSmall => write!(f, "The framebuffer is too small for the display"),
        }
    }
}

impl<E: Debug> Debug for ErrorKind<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BusError(err) => f.debug_tuple("BusError").field(err).finish(),
            Self::OutOfBounds => write!(f, "OutOfBounds"),
            Self::TransferSize => write!(f, "TransferSize"),
            Self::BufferTooSmall => write!(f, "BufferTooSmall"),
        }
    }
}

impl<E> From<FramebufferError> for ErrorKind<E> {
    fn from(err: FramebufferError) -> Self {
        match err {
            FramebufferError::BufferTooSmall => Self::BufferTooSmall,
            FramebufferError::OutOfBounds => Self::OutOfBounds,
        }
    }
}

impl<E> ErrorKind<E> {
    /// Check whether the error came from the bus rather than from a bad argument
    pub fn is_bus_error(&self) -> bool {
        matches!(self, Self::BusError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind as I2cErrorKind;

    extern crate std;
    use std::format;

    #[test]
    fn display_forwards_bus_error() {
        let err = ErrorKind::BusError(I2cErrorKind::Bus);
        assert_eq!(format!("{err}"), format!("{}", I2cErrorKind::Bus));
        assert!(err.is_bus_error());
    }

    #[test]
    fn debug_names_variant() {
        let err: ErrorKind<I2cErrorKind> = ErrorKind::OutOfBounds;
        assert_eq!(format!("{err:?}"), "OutOfBounds");
        assert!(!err.is_bus_error());
    }

    #[test]
    fn framebuffer_errors_map_to_kinds() {
        let err: ErrorKind<I2cErrorKind> = FramebufferError::BufferTooSmall.into();
        assert_eq!(err, ErrorKind::BufferTooSmall);
        let err: ErrorKind<I2cErrorKind> = FramebufferError::OutOfBounds.into();
        assert_eq!(err, ErrorKind::OutOfBounds);
    }
}
