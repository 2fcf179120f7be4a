//! Redraw areas and their alignment to display pages
use core::cmp;
use core::ops::RangeInclusive;

/// A rectangle with inclusive pixel bounds
///
/// `x1 <= x2` and `y1 <= y2` for any area that covers a pixel.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Area {
    /// Left column
    pub x1: u16,
    /// Top row
    pub y1: u16,
    /// Right column, inclusive
    pub x2: u16,
    /// Bottom row, inclusive
    pub y2: u16,
}

impl Area {
    /// Construct a new area from inclusive bounds
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Area {
        Area { x1, y1, x2, y2 }
    }

    /// The whole surface of a `width` x `height` display
    pub const fn full(width: u16, height: u16) -> Area {
        Area {
            x1: 0,
            y1: 0,
            x2: width.saturating_sub(1),
            y2: height.saturating_sub(1),
        }
    }

    /// Widen the area vertically to whole pages
    ///
    /// `y1` is rounded down to the first row of its page, `y2` up to the last row of its page.
    /// Columns are already addressable one by one and stay untouched.
    /// An empty area stays empty.
    pub fn round(&self) -> Area {
        if self.is_empty() {
            return *self;
        }
        Area {
            x1: self.x1,
            y1: self.y1 & !7,
            x2: self.x2,
            y2: (self.y2 & !7).saturating_add(7),
        }
    }

    /// Cut the area down to a `width` x `height` display
    ///
    /// An area lying completely outside ends up empty.
    pub fn clamp(&self, width: u16, height: u16) -> Area {
        let x2 = cmp::min(self.x2, width.saturating_sub(1));
        let y2 = cmp::min(self.y2, height.saturating_sub(1));
        let mut area = Area { x2, y2, ..*self };
        if width == 0 || height == 0 {
            area.x1 = x2.saturating_add(1);
        }
        area
    }

    /// Test whether the area covers no pixel
    pub fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    /// Number of columns covered
    pub fn width(&self) -> u16 {
        if self.is_empty() {
            0
        } else {
            self.x2 - self.x1 + 1
        }
    }

    /// Pages touched by the area, in ascending order
    pub fn pages(&self) -> RangeInclusive<u16> {
        if self.is_empty() {
            return RangeInclusive::new(1, 0);
        }
        (self.y1 >> 3)..=(self.y2 >> 3)
    }

    /// Test whether `other` lies completely inside this area
    pub fn contains(&self, other: &Area) -> bool {
        other.is_empty()
            || (self.x1 <= other.x1
                && self.y1 <= other.y1
                && other.x2 <= self.x2
                && other.y2 <= self.y2)
    }
}
