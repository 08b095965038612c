//! Interactive style variants for stateful widgets.
//!
//! [`InteractiveStyle`] holds style overrides for the interaction states a
//! widget part can be in: normal, hovered, active (pressed/dragging) and
//! disabled. Resolving merges the state's override on top of the base style
//! with [`Style::patch`], so the more specific state wins for any slot it sets.
//!
//! # Example
//!
//! ```
//! use panekit_style::{InteractionState, InteractiveStyle, Rgba, Style};
//!
//! let trigger = InteractiveStyle::new(Style::new().bg(Rgba::rgb(239, 239, 245)))
//!     .hover(Style::new().bg(Rgba::rgb(0x36, 0xad, 0x6a)));
//!
//! let dragging = trigger.resolve(InteractionState::Hovered);
//! assert_eq!(dragging.bg, Some(Rgba::rgb(0x36, 0xad, 0x6a)));
//! ```

#![forbid(unsafe_code)]

use crate::color::Rgba;

/// Foreground/background color slots. `None` inherits from the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
}

impl Style {
    /// Empty style (inherits everything).
    #[must_use]
    pub const fn new() -> Self {
        Self { fg: None, bg: None }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Rgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Overlay `other` on top of `self`; slots set in `other` win.
    #[must_use]
    pub fn patch(self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
        }
    }
}

/// The interaction state of a widget part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No user interaction.
    #[default]
    Normal,
    /// Pointer is over the part, or the part is being dragged.
    Hovered,
    /// Part is being pressed.
    Active,
    /// Part is non-interactive.
    Disabled,
}

/// Style variants for different interaction states.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractiveStyle {
    /// Base style applied in all states.
    pub normal: Style,
    /// Override applied when hovered.
    pub hover: Option<Style>,
    /// Override applied when active.
    pub active: Option<Style>,
    /// Override applied when disabled.
    pub disabled: Option<Style>,
}

impl InteractiveStyle {
    /// Create an interactive style with the given base style.
    pub fn new(normal: Style) -> Self {
        Self {
            normal,
            hover: None,
            active: None,
            disabled: None,
        }
    }

    /// Set the hover style override.
    #[must_use]
    pub fn hover(mut self, style: Style) -> Self {
        self.hover = Some(style);
        self
    }

    /// Set the active style override.
    #[must_use]
    pub fn active(mut self, style: Style) -> Self {
        self.active = Some(style);
        self
    }

    /// Set the disabled style override.
    #[must_use]
    pub fn disabled(mut self, style: Style) -> Self {
        self.disabled = Some(style);
        self
    }

    /// Resolve the style for the given interaction state.
    pub fn resolve(&self, state: InteractionState) -> Style {
        let overlay = match state {
            InteractionState::Normal => None,
            InteractionState::Hovered => self.hover.as_ref(),
            InteractionState::Active => self.active.as_ref(),
            InteractionState::Disabled => self.disabled.as_ref(),
        };
        match overlay {
            Some(style) => self.normal.patch(style),
            None => self.normal,
        }
    }

    /// Check whether the given state has a specific override.
    pub fn has_override(&self, state: InteractionState) -> bool {
        match state {
            InteractionState::Normal => true,
            InteractionState::Hovered => self.hover.is_some(),
            InteractionState::Active => self.active.is_some(),
            InteractionState::Disabled => self.disabled.is_some(),
        }
    }
}

impl From<Style> for InteractiveStyle {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}
