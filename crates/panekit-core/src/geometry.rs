#![forbid(unsafe_code)]

//! Geometric primitives in host pixel space.

/// Layout axis a widget is arranged along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Children laid out left to right.
    #[default]
    Horizontal,
    /// Children laid out top to bottom.
    Vertical,
}

/// A rectangle for layout bounds and hit testing.
///
/// Uses client coordinates (origin at top-left, fractional pixels allowed).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Extent along `axis` (width for horizontal, height for vertical).
    #[inline]
    pub const fn length(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Leading edge along `axis` (left for horizontal, top for vertical).
    #[inline]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Split off a leading band of `len` pixels along `axis`.
    ///
    /// Returns `(band, rest)`. `len` is clamped into `[0, length]`.
    pub fn split_leading(&self, axis: Axis, len: f64) -> (Rect, Rect) {
        let total = self.length(axis);
        let len = if len.is_nan() { 0.0 } else { len.clamp(0.0, total.max(0.0)) };
        match axis {
            Axis::Horizontal => (
                Rect::new(self.x, self.y, len, self.height),
                Rect::new(self.x + len, self.y, self.width - len, self.height),
            ),
            Axis::Vertical => (
                Rect::new(self.x, self.y, self.width, len),
                Rect::new(self.x, self.y + len, self.width, self.height - len),
            ),
        }
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}
