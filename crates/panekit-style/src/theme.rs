#![forbid(unsafe_code)]

//! Light theme variables for panekit widgets.
//!
//! Each widget theme is derived from [`CommonVars`] by a pure function, so
//! swapping the common palette re-derives every widget theme without any
//! global state.

use crate::color::Rgba;
use crate::interactive::{InteractiveStyle, Style};

/// Palette and metrics shared by all widget themes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonVars {
    pub cubic_bezier_ease_in_out: String,
    pub divider_color: Rgba,
    pub primary_color_hover: Rgba,
    /// Corner radius in pixels.
    pub border_radius: f64,
    pub height_small: f64,
    pub height_medium: f64,
    pub height_large: f64,
    pub height_huge: f64,
}

impl CommonVars {
    /// Stock light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            cubic_bezier_ease_in_out: "cubic-bezier(.4, 0, .2, 1)".to_string(),
            divider_color: Rgba::rgb(239, 239, 245),
            primary_color_hover: Rgba::rgb(0x36, 0xad, 0x6a),
            border_radius: 3.0,
            height_small: 28.0,
            height_medium: 34.0,
            height_large: 40.0,
            height_huge: 46.0,
        }
    }
}

impl Default for CommonVars {
    fn default() -> Self {
        Self::light()
    }
}

/// Color slot of [`SplitTheme`] that can be overridden from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitColorSlot {
    ResizeTrigger,
    ResizeTriggerHover,
}

/// Theme for the resizable split container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitTheme {
    pub bezier: String,
    pub resize_trigger_color: Rgba,
    pub resize_trigger_color_hover: Rgba,
}

impl SplitTheme {
    /// Derive the split theme from a common palette.
    #[must_use]
    pub fn from_common(common: &CommonVars) -> Self {
        Self {
            bezier: common.cubic_bezier_ease_in_out.clone(),
            resize_trigger_color: common.divider_color,
            resize_trigger_color_hover: common.primary_color_hover,
        }
    }

    /// Stock light theme.
    #[must_use]
    pub fn light() -> Self {
        Self::from_common(&CommonVars::light())
    }

    /// Divider style: base color, hover color while dragging.
    #[must_use]
    pub fn trigger_style(&self) -> InteractiveStyle {
        InteractiveStyle::new(Style::new().bg(self.resize_trigger_color))
            .hover(Style::new().bg(self.resize_trigger_color_hover))
    }

    /// Color of the lazy-mode drag indicator line.
    #[must_use]
    pub const fn indicator_color(&self) -> Rgba {
        self.resize_trigger_color_hover
    }

    /// CSS custom properties for web hosts.
    #[must_use]
    pub fn css_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--n-bezier", self.bezier.clone()),
            ("--n-resize-trigger-color", self.resize_trigger_color.to_css()),
            (
                "--n-resize-trigger-color-hover",
                self.resize_trigger_color_hover.to_css(),
            ),
        ]
    }

    /// Override one color slot from a CSS color literal.
    ///
    /// Malformed literals are logged and leave the slot untouched. Returns
    /// whether the slot changed.
    pub fn override_color(&mut self, slot: SplitColorSlot, literal: &str) -> bool {
        match literal.parse::<Rgba>() {
            Ok(color) => {
                let target = match slot {
                    SplitColorSlot::ResizeTrigger => &mut self.resize_trigger_color,
                    SplitColorSlot::ResizeTriggerHover => &mut self.resize_trigger_color_hover,
                };
                let changed = *target != color;
                *target = color;
                changed
            }
            Err(error) => {
                tracing::warn!(?slot, literal, %error, "ignoring split theme color override");
                false
            }
        }
    }
}

impl Default for SplitTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Theme for skeleton placeholders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkeletonTheme {
    pub color: Rgba,
    pub color_end: Rgba,
    pub border_radius: f64,
    pub height_small: f64,
    pub height_medium: f64,
    pub height_large: f64,
}

impl SkeletonTheme {
    /// Derive the skeleton theme from a common palette.
    #[must_use]
    pub fn from_common(common: &CommonVars) -> Self {
        Self {
            color: Rgba::rgb(0xee, 0xee, 0xee),
            color_end: Rgba::rgb(0xdd, 0xdd, 0xdd),
            border_radius: common.border_radius,
            height_small: common.height_small,
            height_medium: common.height_medium,
            height_large: common.height_large,
        }
    }

    /// Stock light theme.
    #[must_use]
    pub fn light() -> Self {
        Self::from_common(&CommonVars::light())
    }
}

impl Default for SkeletonTheme {
    fn default() -> Self {
        Self::light()
    }
}
