// File: crates/insight-core/src/types.rs
// Summary: Shared types and constants (sizes, margins).

/// Default surface width in pixels.
pub const WIDTH: i32 = 550;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 350;

/// Pixel size handed to a chart. Negative or non-finite values are treated
/// as empty by every consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when there is no drawable area.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }

    /// Whole-pixel dimensions, clamped at zero.
    pub fn to_pixels(&self) -> (i32, i32) {
        if self.is_empty() {
            return (0, 0);
        }
        (self.width.round() as i32, self.height.round() as i32)
    }
}

/// Chart margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot extents inside `size`: (x_max, y_max). Either may be negative
    /// when the margins do not fit.
    pub fn inner(&self, size: Size) -> (f32, f32) {
        (size.width - self.hsum() as f32, size.height - self.vsum() as f32)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20, 20, 20, 40)
    }
}
