#![forbid(unsafe_code)]

//! Drag session lifecycle records.
//!
//! ```text
//! Idle --pointer down on divider--> Dragging --pointer up / cancel--> Idle
//! ```
//!
//! A [`DragSession`] exists only while the divider is held. It owns the
//! [`SurfaceGrab`] for the global move/up listeners and the resize cursor, so
//! ending the session (pointer up, cancel, disable, widget teardown)
//! releases both. A release refused by a busy surface yields the grab back
//! to the split, which retries it on its next entry point.

use panekit_core::pointer_surface::{
    CursorIcon, ListenerKind, SharedSurface, SurfaceBusy, SurfaceGrab,
};

use super::size::SizeValue;

/// Listeners a session registers on the global surface.
pub(crate) const SESSION_LISTENERS: [ListenerKind; 2] =
    [ListenerKind::PointerMove, ListenerKind::PointerUp];

/// One active divider drag.
#[derive(Debug)]
pub struct DragSession {
    offset: f64,
    moves: u32,
    grab: SurfaceGrab,
}

impl DragSession {
    /// Take the global surface and start tracking a drag.
    pub(crate) fn begin(
        surface: &SharedSurface,
        cursor: CursorIcon,
        offset: f64,
    ) -> Result<Self, SurfaceBusy> {
        Ok(Self {
            offset,
            moves: 0,
            grab: SurfaceGrab::acquire(surface, cursor, &SESSION_LISTENERS)?,
        })
    }

    /// Pointer-to-divider offset captured at drag start.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Pointer moves seen so far.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    pub(crate) fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    /// Release listeners and cursor. Returns the grab if the surface was busy.
    pub(crate) fn end(self) -> Option<SurfaceGrab> {
        self.grab.release().err()
    }
}

/// Lifecycle phase recorded for one split dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPhase {
    PointerDown,
    PointerMove,
    PointerUp,
    Cancel,
}

/// Deterministic reason why an incoming signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitIgnoredReason {
    Disabled,
    ButtonNotAllowed,
    SessionAlreadyActive,
    NoActiveSession,
    /// The host held the global surface, so listeners could not be taken.
    SurfaceBusy,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    DragStarted,
    DragMoved,
    DragEnded,
    Canceled,
    Ignored(SplitIgnoredReason),
}

/// Result of one split lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitDispatch {
    pub phase: SplitPhase,
    pub outcome: SplitOutcome,
    /// Size computed by the resolver, `None` when geometry was unavailable
    /// or no resolver pass ran.
    pub resolved: Option<SizeValue>,
    /// Size reported through `on_update_size`, if any.
    pub committed: Option<SizeValue>,
}

impl SplitDispatch {
    pub(crate) const fn ignored(phase: SplitPhase, reason: SplitIgnoredReason) -> Self {
        Self {
            phase,
            outcome: SplitOutcome::Ignored(reason),
            resolved: None,
            committed: None,
        }
    }

    pub(crate) const fn new(phase: SplitPhase, outcome: SplitOutcome) -> Self {
        Self {
            phase,
            outcome,
            resolved: None,
            committed: None,
        }
    }

    /// Whether the dispatch was dropped without touching state.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.outcome, SplitOutcome::Ignored(_))
    }
}
