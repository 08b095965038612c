#![forbid(unsafe_code)]

//! Split container configuration.

use bitflags::bitflags;
use panekit_core::geometry::Axis;
use panekit_core::pointer_surface::CursorIcon;

use super::size::SizeValue;

/// Default divider thickness in pixels.
pub const SPLIT_DEFAULT_TRIGGER_SIZE: f64 = 3.0;

bitflags! {
    /// Config fields whose later changes are pushed into internal state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct WatchProps: u8 {
        /// A new `default_size` overwrites the uncontrolled size.
        const DEFAULT_SIZE = 0b0001;
    }
}

/// Options recognized by [`Split`](super::Split).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitConfig {
    /// Axis the two panes are laid out along.
    pub direction: Axis,
    /// Divider thickness (hit area) in pixels.
    pub resize_trigger_size: f64,
    /// Disabled splits render no divider and ignore pointer input.
    pub disabled: bool,
    /// Initial uncontrolled size.
    pub default_size: SizeValue,
    /// Controlled size. When set, the host owns the truth.
    pub size: Option<SizeValue>,
    pub min: SizeValue,
    pub max: SizeValue,
    /// Defer the size commit to drag end.
    pub lazy: bool,
    pub watch_props: WatchProps,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            direction: Axis::Horizontal,
            resize_trigger_size: SPLIT_DEFAULT_TRIGGER_SIZE,
            disabled: false,
            default_size: SizeValue::Fraction(0.5),
            size: None,
            min: SizeValue::Fraction(0.0),
            max: SizeValue::Fraction(1.0),
            lazy: false,
            watch_props: WatchProps::empty(),
        }
    }
}

impl SplitConfig {
    /// Default configuration (horizontal, 3px divider, 50/50).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    /// Set the divider thickness. Negative or NaN input clamps to `0`.
    #[must_use]
    pub fn resize_trigger_size(mut self, px: f64) -> Self {
        self.resize_trigger_size = px;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn default_size(mut self, size: impl Into<SizeValue>) -> Self {
        self.default_size = size.into();
        self
    }

    /// Make the split controlled.
    #[must_use]
    pub fn size(mut self, size: impl Into<SizeValue>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<SizeValue>) -> Self {
        self.min = min.into();
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<SizeValue>) -> Self {
        self.max = max.into();
        self
    }

    #[must_use]
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    #[must_use]
    pub fn watch_props(mut self, props: WatchProps) -> Self {
        self.watch_props = props;
        self
    }

    /// Divider thickness with out-of-range input clamped to `>= 0`.
    #[must_use]
    pub fn trigger_thickness(&self) -> f64 {
        if self.resize_trigger_size.is_nan() {
            0.0
        } else {
            self.resize_trigger_size.max(0.0)
        }
    }

    /// Global cursor shown while dragging.
    #[must_use]
    pub const fn drag_cursor(&self) -> CursorIcon {
        match self.direction {
            Axis::Horizontal => CursorIcon::ColResize,
            Axis::Vertical => CursorIcon::RowResize,
        }
    }

    /// Whether later `default_size` changes overwrite the uncontrolled size.
    #[must_use]
    pub const fn watches_default_size(&self) -> bool {
        self.watch_props.contains(WatchProps::DEFAULT_SIZE)
    }
}
