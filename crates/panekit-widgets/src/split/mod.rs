#![forbid(unsafe_code)]

//! Resizable split container.
//!
//! [`Split`] owns two adjacent panes separated by a draggable divider. The
//! size of the first pane is either a fraction of the usable length or an
//! absolute pixel length ([`SizeValue`]); the unit in effect is preserved by
//! every drag update.
//!
//! The widget does not draw. Hosts:
//! 1. call [`Split::layout`] to place pane 1, the divider hit area, pane 2
//!    and the lazy-mode indicator inside the container,
//! 2. forward pointer-down on the divider to [`Split::pointer_down`], and
//!    global pointer move/up to [`Split::pointer_move`] / [`Split::pointer_up`]
//!    while [`Split::is_dragging`] is true,
//! 3. implement [`PointerSurface`](panekit_core::pointer_surface::PointerSurface)
//!    so the split can register global listeners and switch the cursor.
//!
//! Bounds are read through [`SplitBounds`] on every event; nothing is cached
//! across moves.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use panekit_core::event::PointerEvent;
//! use panekit_core::geometry::Rect;
//! use panekit_core::pointer_surface::{DocumentSurface, SharedSurface};
//! use panekit_widgets::split::{SizeValue, Split, SplitConfig};
//!
//! let doc = DocumentSurface::shared();
//! let surface: SharedSurface = doc.clone();
//! let updates = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&updates);
//!
//! let mut split = Split::new(SplitConfig::new().resize_trigger_size(0.0), surface)
//!     .on_update_size(move |size| sink.borrow_mut().push(size));
//!
//! let container = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let bounds = split.measure(container);
//! split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
//! split.pointer_move(&PointerEvent::moved(300.0, 10.0), &bounds);
//! split.pointer_up(&PointerEvent::up(300.0, 10.0));
//!
//! assert_eq!(split.size(), SizeValue::Fraction(0.75));
//! assert_eq!(updates.borrow().last(), Some(&SizeValue::Fraction(0.75)));
//! ```

pub mod config;
pub mod resolver;
pub mod session;
pub mod size;
pub mod state;

pub use config::{SPLIT_DEFAULT_TRIGGER_SIZE, SplitConfig, WatchProps};
pub use resolver::{ResolvedSize, capture_offset, resolve_size, usable_length};
pub use session::{DragSession, SplitDispatch, SplitIgnoredReason, SplitOutcome, SplitPhase};
pub use size::{SizeParseError, SizeUnit, SizeValue};
pub use state::SizeState;

use std::fmt;

use panekit_core::event::{PointerButton, PointerEvent};
use panekit_core::geometry::{Axis, Rect};
use panekit_core::pointer_surface::{CursorIcon, SharedSurface, SurfaceGrab};
use panekit_style::{InteractionState, SplitTheme, Style};

/// Thickness of the lazy-mode indicator line in pixels.
pub const SPLIT_INDICATOR_THICKNESS: f64 = 1.0;

/// Source of live container and divider bounds.
///
/// Implementations read the host's current layout; returning `None` means the
/// element is not mounted or not laid out yet.
pub trait SplitBounds {
    /// Bounds of the whole split container.
    fn container(&self) -> Option<Rect>;
    /// Bounds of the divider hit area.
    fn trigger(&self) -> Option<Rect>;
}

/// Bounds snapshot supplied by the host for one event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredBounds {
    pub container: Option<Rect>,
    pub trigger: Option<Rect>,
}

impl MeasuredBounds {
    /// Both elements laid out.
    #[must_use]
    pub const fn new(container: Rect, trigger: Rect) -> Self {
        Self {
            container: Some(container),
            trigger: Some(trigger),
        }
    }

    /// Nothing laid out yet.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            container: None,
            trigger: None,
        }
    }
}

impl SplitBounds for MeasuredBounds {
    fn container(&self) -> Option<Rect> {
        self.container
    }

    fn trigger(&self) -> Option<Rect> {
        self.trigger
    }
}

/// Placement of the split's parts inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    pub pane1: Rect,
    /// Divider hit area; `None` when the split is disabled.
    pub trigger: Option<Rect>,
    pub pane2: Rect,
    /// Prospective boundary shown while a lazy drag is in flight.
    pub indicator: Option<Rect>,
}

type SizeCallback = Box<dyn FnMut(SizeValue)>;
type PointerCallback = Box<dyn FnMut(&PointerEvent)>;

#[derive(Default)]
struct SplitCallbacks {
    on_update_size: Vec<SizeCallback>,
    on_drag_start: Option<PointerCallback>,
    on_drag_move: Option<PointerCallback>,
    on_drag_end: Option<PointerCallback>,
}

impl SplitCallbacks {
    fn update_size(&mut self, size: SizeValue) {
        for callback in &mut self.on_update_size {
            callback(size);
        }
    }

    fn fire(slot: &mut Option<PointerCallback>, event: &PointerEvent) {
        if let Some(callback) = slot.as_mut() {
            callback(event);
        }
    }
}

/// Resizable two-pane split container.
pub struct Split {
    config: SplitConfig,
    theme: SplitTheme,
    state: SizeState,
    session: Option<DragSession>,
    /// Grab whose release a busy surface refused; retried on every entry point.
    unreleased: Option<SurfaceGrab>,
    callbacks: SplitCallbacks,
    surface: SharedSurface,
}

impl Split {
    /// Create a split that borrows listeners and cursor from `surface`.
    pub fn new(config: SplitConfig, surface: SharedSurface) -> Self {
        let state = SizeState::new(config.default_size, config.size);
        Self {
            config,
            theme: SplitTheme::light(),
            state,
            session: None,
            unreleased: None,
            callbacks: SplitCallbacks::default(),
            surface,
        }
    }

    /// Replace the theme.
    #[must_use]
    pub fn theme(mut self, theme: SplitTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Add a size update handler. Every handler fires on every commit.
    #[must_use]
    pub fn on_update_size(mut self, callback: impl FnMut(SizeValue) + 'static) -> Self {
        self.callbacks.on_update_size.push(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_drag_start(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.callbacks.on_drag_start = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_drag_move(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.callbacks.on_drag_move = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_drag_end(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.callbacks.on_drag_end = Some(Box::new(callback));
        self
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Effective size (controlled if supplied, else uncontrolled).
    #[must_use]
    pub fn size(&self) -> SizeValue {
        self.state.merged()
    }

    /// Size bookkeeping, including the pending lazy value.
    #[must_use]
    pub const fn size_state(&self) -> &SizeState {
        &self.state
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Active drag session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Cursor to show over the divider.
    #[must_use]
    pub const fn trigger_cursor(&self) -> CursorIcon {
        self.config.drag_cursor()
    }

    /// Divider style: hover colors while dragging.
    #[must_use]
    pub fn trigger_style(&self) -> Style {
        let state = if self.is_dragging() {
            InteractionState::Hovered
        } else {
            InteractionState::Normal
        };
        self.theme.trigger_style().resolve(state)
    }

    /// Indicator line style for lazy drags.
    #[must_use]
    pub fn indicator_style(&self) -> Style {
        Style::new().bg(self.theme.indicator_color())
    }

    /// Flex shorthand for pane 1 on web hosts.
    #[must_use]
    pub fn first_pane_flex(&self) -> String {
        match self.size() {
            SizeValue::Fraction(f) => {
                let percent = f * 100.0;
                let trigger = self.config.trigger_thickness() * percent / 100.0;
                format!("0 0 calc({percent}% - {trigger}px)")
            }
            pixels @ SizeValue::Pixels(_) => format!("0 0 {pixels}"),
        }
    }

    /// Place pane 1, divider, pane 2 and the lazy indicator in `container`.
    #[must_use]
    pub fn layout(&self, container: Rect) -> SplitLayout {
        let axis = self.config.direction;
        let thickness = self.config.trigger_thickness();
        let visible_trigger = if self.config.disabled { 0.0 } else { thickness };
        let length = container.length(axis);

        let pane1_len = match self.size() {
            SizeValue::Fraction(f) => f * length - thickness * f,
            SizeValue::Pixels(px) => px,
        };
        let limit = (length - visible_trigger).max(0.0);
        let pane1_len = if pane1_len.is_nan() {
            0.0
        } else {
            pane1_len.clamp(0.0, limit)
        };

        let (pane1, rest) = container.split_leading(axis, pane1_len);
        let (trigger, pane2) = rest.split_leading(axis, visible_trigger);

        let indicator = if self.config.lazy && self.is_dragging() {
            self.state
                .indicator_px()
                .map(|px| indicator_rect(container, axis, px))
        } else {
            None
        };

        SplitLayout {
            pane1,
            trigger: (!self.config.disabled).then_some(trigger),
            pane2,
            indicator,
        }
    }

    /// Bounds snapshot for `container` using this split's own layout.
    ///
    /// Convenient for hosts that place the divider with [`layout`](Self::layout).
    #[must_use]
    pub fn measure(&self, container: Rect) -> MeasuredBounds {
        MeasuredBounds {
            container: Some(container),
            trigger: self.layout(container).trigger,
        }
    }

    /// Retry a listener/cursor release the surface refused earlier.
    ///
    /// Every pointer entry point calls this first. Hosts that borrow the
    /// surface while dispatching can call it once their borrow ends. Returns
    /// `true` when nothing is left to release.
    pub fn flush_surface(&mut self) -> bool {
        let Some(grab) = self.unreleased.take() else {
            return true;
        };
        match grab.release() {
            Ok(()) => true,
            Err(grab) => {
                self.unreleased = Some(grab);
                false
            }
        }
    }

    /// Whether a released session still holds global listeners or the cursor.
    #[must_use]
    pub const fn has_unreleased_grab(&self) -> bool {
        self.unreleased.is_some()
    }

    fn end_session(&mut self, session: DragSession) {
        if let Some(grab) = session.end() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                listeners = grab.listeners().len(),
                "pointer surface busy; split release deferred"
            );
            self.unreleased = Some(grab);
        }
    }

    /// Pointer pressed on the divider.
    pub fn pointer_down(&mut self, event: &PointerEvent, bounds: &impl SplitBounds) -> SplitDispatch {
        self.flush_surface();
        if self.config.disabled {
            return SplitDispatch::ignored(SplitPhase::PointerDown, SplitIgnoredReason::Disabled);
        }
        if event.button() != Some(PointerButton::Primary) {
            return SplitDispatch::ignored(
                SplitPhase::PointerDown,
                SplitIgnoredReason::ButtonNotAllowed,
            );
        }
        if self.session.is_some() {
            return SplitDispatch::ignored(
                SplitPhase::PointerDown,
                SplitIgnoredReason::SessionAlreadyActive,
            );
        }
        if self.surface.try_borrow_mut().is_err() {
            return SplitDispatch::ignored(SplitPhase::PointerDown, SplitIgnoredReason::SurfaceBusy);
        }

        let offset = bounds
            .trigger()
            .map_or(0.0, |trigger| {
                capture_offset(self.config.direction, event.position(), trigger)
            });

        SplitCallbacks::fire(&mut self.callbacks.on_drag_start, event);
        let Ok(session) = DragSession::begin(&self.surface, self.config.drag_cursor(), offset)
        else {
            // on_drag_start itself left the surface borrowed.
            return SplitDispatch::ignored(SplitPhase::PointerDown, SplitIgnoredReason::SurfaceBusy);
        };
        self.state.begin_drag();
        self.session = Some(session);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            direction = ?self.config.direction,
            offset,
            lazy = self.config.lazy,
            size = %self.state.merged(),
            "split drag started"
        );

        let mut dispatch = SplitDispatch::new(SplitPhase::PointerDown, SplitOutcome::DragStarted);
        self.update_size(event, bounds.container(), offset, &mut dispatch);
        dispatch
    }

    /// Global pointer move.
    pub fn pointer_move(&mut self, event: &PointerEvent, bounds: &impl SplitBounds) -> SplitDispatch {
        self.flush_surface();
        let Some(session) = self.session.as_mut() else {
            return SplitDispatch::ignored(
                SplitPhase::PointerMove,
                SplitIgnoredReason::NoActiveSession,
            );
        };
        session.record_move();
        let offset = session.offset();

        let mut dispatch = SplitDispatch::new(SplitPhase::PointerMove, SplitOutcome::DragMoved);
        self.update_size(event, bounds.container(), offset, &mut dispatch);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            x = event.x,
            y = event.y,
            resolved = ?dispatch.resolved,
            "split drag moved"
        );

        SplitCallbacks::fire(&mut self.callbacks.on_drag_move, event);
        dispatch
    }

    /// Global pointer release. Any button ends the session.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> SplitDispatch {
        self.flush_surface();
        let Some(session) = self.session.take() else {
            return SplitDispatch::ignored(SplitPhase::PointerUp, SplitIgnoredReason::NoActiveSession);
        };

        let mut dispatch = SplitDispatch::new(SplitPhase::PointerUp, SplitOutcome::DragEnded);
        if self.config.lazy {
            let committed = self.state.commit_pending();
            self.callbacks.update_size(committed);
            dispatch.committed = Some(committed);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            moves = session.moves(),
            committed = ?dispatch.committed,
            size = %self.state.merged(),
            "split drag ended"
        );

        self.end_session(session);
        self.state.finish_drag();
        SplitCallbacks::fire(&mut self.callbacks.on_drag_end, event);
        dispatch
    }

    /// End an active drag without committing (teardown, disable).
    ///
    /// Releases listeners and cursor; a lazy pending value is discarded and
    /// no callbacks fire.
    pub fn cancel(&mut self) -> SplitDispatch {
        self.flush_surface();
        let Some(session) = self.session.take() else {
            return SplitDispatch::ignored(SplitPhase::Cancel, SplitIgnoredReason::NoActiveSession);
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(moves = session.moves(), "split drag canceled");

        self.state.discard_pending();
        self.end_session(session);
        self.state.finish_drag();
        SplitDispatch::new(SplitPhase::Cancel, SplitOutcome::Canceled)
    }

    /// Enable or disable the split. Disabling cancels an active drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.cancel();
        }
    }

    /// Supply (or clear) the controlled size.
    pub fn set_size(&mut self, size: Option<SizeValue>) {
        self.config.size = size;
        self.state.set_controlled(size);
    }

    /// Replace `default_size`. Only a watched default reaches the state.
    pub fn set_default_size(&mut self, default_size: SizeValue) {
        let changed = self.config.default_size != default_size;
        self.config.default_size = default_size;
        if changed && self.config.watches_default_size() {
            let dragging = self.is_dragging();
            self.state.watch_default(default_size, dragging);
        }
    }

    /// Apply a new configuration from the host.
    ///
    /// An active drag is canceled when the split becomes disabled or its
    /// direction changes.
    pub fn set_config(&mut self, config: SplitConfig) {
        if self.is_dragging()
            && (config.disabled || config.direction != self.config.direction)
        {
            self.cancel();
        }
        let default_size = config.default_size;
        let size = config.size;
        let previous_default = self.config.default_size;
        self.config = SplitConfig {
            default_size: previous_default,
            ..config
        };
        self.set_size(size);
        self.set_default_size(default_size);
    }

    fn update_size(
        &mut self,
        event: &PointerEvent,
        container: Option<Rect>,
        offset: f64,
        dispatch: &mut SplitDispatch,
    ) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "split.drag",
            direction = ?self.config.direction,
            lazy = self.config.lazy,
            offset
        )
        .entered();

        let unit = self.state.merged().unit();
        let Some(resolved) = resolve_size(event.position(), container, offset, &self.config, unit)
        else {
            return;
        };
        dispatch.resolved = Some(resolved.value);
        if let Some(committed) = self.state.accept(resolved, self.config.lazy) {
            self.callbacks.update_size(committed);
            dispatch.committed = Some(committed);
        }
    }
}

fn indicator_rect(container: Rect, axis: Axis, px: f64) -> Rect {
    match axis {
        Axis::Horizontal => Rect::new(
            container.x + px,
            container.y,
            SPLIT_INDICATOR_THICKNESS,
            container.height,
        ),
        Axis::Vertical => Rect::new(
            container.x,
            container.y + px,
            container.width,
            SPLIT_INDICATOR_THICKNESS,
        ),
    }
}

impl fmt::Debug for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Split")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("session", &self.session)
            .field("unreleased", &self.unreleased)
            .finish_non_exhaustive()
    }
}

impl Drop for Split {
    fn drop(&mut self) {
        self.cancel();
    }
}
