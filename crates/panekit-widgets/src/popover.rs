#![forbid(unsafe_code)]

//! Anchored floating area placement.
//!
//! [`Popover`] computes where a floating panel goes relative to an anchor
//! rectangle inside a viewport. It flips to the opposite side when the
//! preferred side is too small and keeps the panel inside the viewport on the
//! cross axis. Drawing is left to the host.

use panekit_core::geometry::Rect;

/// Where to place the floating area relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Placement {
    /// Above the anchor, aligned to its left edge.
    Above,
    /// Below the anchor, aligned to its left edge.
    #[default]
    Below,
    /// Left of the anchor, aligned to its top edge.
    Left,
    /// Right of the anchor, aligned to its top edge.
    Right,
    AboveCentered,
    BelowCentered,
}

impl Placement {
    /// Opposite side, used by auto-flip.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
            Self::AboveCentered => Self::BelowCentered,
            Self::BelowCentered => Self::AboveCentered,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the area stacks above or below the anchor.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(
            self,
            Self::Above | Self::Below | Self::AboveCentered | Self::BelowCentered
        )
    }
}

/// Anchored placement request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Popover {
    pub anchor: Rect,
    pub placement: Placement,
    /// Panel width; the anchor width when `None`.
    pub width: Option<f64>,
    /// Panel height cap; fills the chosen side when `None`.
    pub max_height: Option<f64>,
    /// Distance between anchor and panel.
    pub gap: f64,
    pub auto_flip: bool,
}

impl Popover {
    #[must_use]
    pub const fn new(anchor: Rect, placement: Placement) -> Self {
        Self {
            anchor,
            placement,
            width: None,
            max_height: None,
            gap: 0.0,
            auto_flip: true,
        }
    }

    #[must_use]
    pub const fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn max_height(mut self, height: f64) -> Self {
        self.max_height = Some(height);
        self
    }

    #[must_use]
    pub const fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub const fn auto_flip(mut self, flip: bool) -> Self {
        self.auto_flip = flip;
        self
    }

    /// Placement after flip resolution.
    #[must_use]
    pub fn resolved_placement(&self, viewport: Rect) -> Placement {
        if !self.auto_flip {
            return self.placement;
        }
        let primary = self.placement;
        let needed = self.needed_space(primary);
        let available = self.available_space(primary, viewport);
        if available >= needed {
            return primary;
        }
        let flipped = primary.flip();
        let flipped_available = self.available_space(flipped, viewport);
        if flipped_available >= needed || flipped_available > available {
            flipped
        } else {
            primary
        }
    }

    /// Floating area inside `viewport`, or `None` when nothing fits.
    #[must_use]
    pub fn compute_area(&self, viewport: Rect) -> Option<Rect> {
        let width = self.width.unwrap_or(self.anchor.width);
        if !(width > 0.0) {
            return None;
        }
        let placement = self.resolved_placement(viewport);
        let area = self.place(placement, viewport, width);
        (area.width > 0.0 && area.height > 0.0).then_some(area)
    }

    fn available_space(&self, placement: Placement, viewport: Rect) -> f64 {
        let space = match placement {
            Placement::Above | Placement::AboveCentered => self.anchor.top() - viewport.top(),
            Placement::Below | Placement::BelowCentered => viewport.bottom() - self.anchor.bottom(),
            Placement::Left => self.anchor.left() - viewport.left(),
            Placement::Right => viewport.right() - self.anchor.right(),
        };
        space.max(0.0)
    }

    fn needed_space(&self, placement: Placement) -> f64 {
        let extent = if placement.is_vertical() {
            self.max_height.unwrap_or(1.0)
        } else {
            self.width.unwrap_or(self.anchor.width)
        };
        extent + self.gap
    }

    fn place(&self, placement: Placement, viewport: Rect, width: f64) -> Rect {
        let x = match placement {
            Placement::Above | Placement::Below => clamp_start(self.anchor.left(), width, viewport),
            Placement::AboveCentered | Placement::BelowCentered => {
                let center = self.anchor.left() + self.anchor.width / 2.0;
                clamp_start(center - width / 2.0, width, viewport)
            }
            Placement::Left => (self.anchor.left() - self.gap - width).max(viewport.left()),
            Placement::Right => self.anchor.right() + self.gap,
        };

        let (y, height) = match placement {
            Placement::Above | Placement::AboveCentered => {
                let space = (self.anchor.top() - viewport.top() - self.gap).max(0.0);
                let height = self.max_height.map_or(space, |h| h.min(space));
                (self.anchor.top() - self.gap - height, height)
            }
            Placement::Below | Placement::BelowCentered => {
                let start = self.anchor.bottom() + self.gap;
                let space = (viewport.bottom() - start).max(0.0);
                (start, self.max_height.map_or(space, |h| h.min(space)))
            }
            Placement::Left | Placement::Right => {
                let start = self.anchor.top();
                let space = (viewport.bottom() - start).max(0.0);
                (start, self.max_height.map_or(space, |h| h.min(space)))
            }
        };

        let width = width.min((viewport.right() - x).max(0.0));
        Rect::new(x, y, width, height)
    }
}

/// Keep `[start, start + width)` inside the viewport when possible.
fn clamp_start(start: f64, width: f64, viewport: Rect) -> f64 {
    if start + width > viewport.right() {
        (viewport.right() - width).max(viewport.left())
    } else {
        start.max(viewport.left())
    }
}
