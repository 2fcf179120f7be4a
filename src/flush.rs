//! Transfer of framebuffer areas to the panel, one page at a time

use embedded_hal::i2c::I2c;
use log::{debug, trace, warn};

use crate::error::ErrorKind;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::rect::Area;

/// Sends `area` of `framebuffer` to the panel
///
/// The area is clamped to the framebuffer first, an area covering no pixel sends nothing.
/// Every touched page gets its own column/page addressing followed by one data burst
/// of the area's width, so nothing relies on the panel's cursor from an earlier call.
///
/// A failing page does not stop the remaining pages from being sent,
/// the first error is returned once all pages were attempted.
pub(crate) fn flush_area<I2C>(
    interface: &mut DisplayInterface<I2C>,
    framebuffer: &Framebuffer<'_>,
    area: Area,
) -> Result<(), ErrorKind<I2C::Error>>
where
    I2C: I2c,
{
    debug!(
        "Flushing area x1={} x2={} y1={} y2={}",
        area.x1, area.x2, area.y1, area.y2
    );

    let area = area.clamp(framebuffer.width(), framebuffer.height());
    if area.is_empty() {
        trace!("nothing to flush");
        return Ok(());
    }

    let transfer_size = area.width();
    let mut result = Ok(());

    for page in area.pages() {
        if let Err(err) = flush_page(interface, framebuffer, page, area.x1, transfer_size) {
            warn!("flushing page {} failed", page);
            if result.is_ok() {
                result = Err(err);
            }
        }
    }

    result
}

fn flush_page<I2C>(
    interface: &mut DisplayInterface<I2C>,
    framebuffer: &Framebuffer<'_>,
    page: u16,
    column: u16,
    transfer_size: u16,
) -> Result<(), ErrorKind<I2C::Error>>
where
    I2C: I2c,
{
    let data = framebuffer
        .page_slice(page, column, transfer_size)
        .ok_or(ErrorKind::<I2C::Error>::OutOfBounds)?;

    trace!("page {}: {} bytes from column {}", page, transfer_size, column);
    interface.set_address(column as u8, page as u8)?;
    interface.data(data)
}
