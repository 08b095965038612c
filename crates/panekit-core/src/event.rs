#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Hosts translate native mouse/pointer input into [`PointerEvent`] values.
//! Coordinates are client pixels, the same space [`Rect`](crate::geometry::Rect)
//! bounds are reported in.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary (usually left) button.
    #[default]
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button (scroll wheel click).
    Middle,
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed.
    Down(PointerButton),
    /// Pointer moved.
    Move,
    /// Button released.
    Up(PointerButton),
}

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,
    /// Horizontal client coordinate.
    pub x: f64,
    /// Vertical client coordinate.
    pub y: f64,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Primary-button press at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), x, y)
    }

    /// Pointer move to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Primary-button release at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Primary), x, y)
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Button carried by a press or release, if any.
    #[must_use]
    pub const fn button(&self) -> Option<PointerButton> {
        match self.kind {
            PointerEventKind::Down(button) | PointerEventKind::Up(button) => Some(button),
            PointerEventKind::Move => None,
        }
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
