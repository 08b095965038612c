#![forbid(unsafe_code)]

//! Document-level pointer listeners and cursor ownership.
//!
//! A drag that starts on a small hit area must keep tracking the pointer after
//! it leaves that element, so widgets temporarily register move/up listeners
//! on the host's global surface (the document, the terminal, the window) and
//! switch the global cursor. Both are shared resources: whoever takes them has
//! to give them back on every exit path.
//!
//! [`SurfaceGrab`] is the RAII owner of such a borrow. It registers listeners
//! and sets the cursor on acquire, and removes them and restores the default
//! cursor on [`release`](SurfaceGrab::release) or on drop.
//!
//! The surface is a `RefCell`, so a host that is still borrowing it when a
//! drag ends makes the release impossible for the moment. `release` then
//! hands the grab back untouched and the owner retries later. Only a grab
//! dropped while the surface is busy is lost, and that is logged.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Kind of global listener a widget can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

/// Opaque handle for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a host-assigned raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Host-assigned raw id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Global cursor affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CursorIcon {
    /// Host default cursor (empty style).
    #[default]
    Default,
    /// Horizontal resize (`col-resize`).
    ColResize,
    /// Vertical resize (`row-resize`).
    RowResize,
}

impl CursorIcon {
    /// CSS keyword for web hosts. The default cursor maps to an empty string,
    /// which clears an inline style.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::ColResize => "col-resize",
            Self::RowResize => "row-resize",
        }
    }
}

impl fmt::Display for CursorIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            other => f.write_str(other.as_css()),
        }
    }
}

/// Host seam for global pointer listeners and the global cursor.
pub trait PointerSurface {
    /// Register a listener of `kind` and return its handle.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Remove a previously registered listener. Returns `false` if unknown.
    fn remove_listener(&mut self, id: ListenerId) -> bool;

    /// Set the global cursor.
    fn set_cursor(&mut self, cursor: CursorIcon);
}

/// Shared single-threaded handle to a host surface.
pub type SharedSurface = Rc<RefCell<dyn PointerSurface>>;

/// The host surface is already borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceBusy;

impl fmt::Display for SurfaceBusy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pointer surface is borrowed by the host")
    }
}

impl std::error::Error for SurfaceBusy {}

/// RAII borrow of global listeners plus the cursor.
pub struct SurfaceGrab {
    surface: SharedSurface,
    listeners: Vec<ListenerId>,
    released: bool,
}

impl SurfaceGrab {
    /// Set `cursor` and register one listener per entry of `kinds`.
    ///
    /// Fails without side effects when the host currently borrows the surface.
    pub fn acquire(
        surface: &SharedSurface,
        cursor: CursorIcon,
        kinds: &[ListenerKind],
    ) -> Result<Self, SurfaceBusy> {
        let listeners = {
            let mut host = surface.try_borrow_mut().map_err(|_| SurfaceBusy)?;
            host.set_cursor(cursor);
            kinds.iter().map(|kind| host.add_listener(*kind)).collect()
        };
        Ok(Self {
            surface: Rc::clone(surface),
            listeners,
            released: false,
        })
    }

    /// Handles still held by this grab.
    #[must_use]
    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Remove listeners and restore the default cursor.
    ///
    /// # Errors
    ///
    /// Returns the grab unchanged when the surface is borrowed, so the caller
    /// can retry once the host lets go of it.
    pub fn release(mut self) -> Result<(), Self> {
        if self.try_release() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn try_release(&mut self) -> bool {
        if self.released {
            return true;
        }
        let Ok(mut host) = self.surface.try_borrow_mut() else {
            return false;
        };
        for id in self.listeners.drain(..) {
            host.remove_listener(id);
        }
        host.set_cursor(CursorIcon::Default);
        self.released = true;
        true
    }
}

impl fmt::Debug for SurfaceGrab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceGrab")
            .field("listeners", &self.listeners)
            .field("released", &self.released)
            .finish()
    }
}

impl Drop for SurfaceGrab {
    fn drop(&mut self) {
        // Drop paths may run while the host is mid-dispatch; never panic there.
        if !self.try_release() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                listeners = self.listeners.len(),
                "pointer surface busy; dropped grab not released"
            );
        }
    }
}

/// In-memory document surface.
///
/// Tracks registered listeners and the current cursor. Headless hosts and
/// tests use it directly; web hosts mirror its state into the DOM.
#[derive(Debug, Clone, Default)]
pub struct DocumentSurface {
    listeners: Vec<(ListenerId, ListenerKind)>,
    cursor: CursorIcon,
    next_id: u64,
}

impl DocumentSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty surface wrapped for sharing with widgets.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of registered listeners of `kind`.
    #[must_use]
    pub fn listener_count_of(&self, kind: ListenerKind) -> usize {
        self.listeners.iter().filter(|(_, k)| *k == kind).count()
    }

    /// Current global cursor.
    #[must_use]
    pub const fn cursor(&self) -> CursorIcon {
        self.cursor
    }
}

impl PointerSurface for DocumentSurface {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_id = self.next_id.saturating_add(1);
        let id = ListenerId::new(self.next_id);
        self.listeners.push((id, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared() -> (Rc<RefCell<DocumentSurface>>, SharedSurface) {
        let doc = DocumentSurface::shared();
        let surface: SharedSurface = doc.clone();
        (doc, surface)
    }

    #[test]
    fn acquire_registers_listeners_and_sets_cursor() {
        let (doc, surface) = shared();
        let grab = SurfaceGrab::acquire(
            &surface,
            CursorIcon::ColResize,
            &[ListenerKind::PointerMove, ListenerKind::PointerUp],
        )
        .expect("surface free");
        assert_eq!(grab.listeners().len(), 2);
        assert_eq!(doc.borrow().listener_count(), 2);
        assert_eq!(doc.borrow().listener_count_of(ListenerKind::PointerUp), 1);
        assert_eq!(doc.borrow().cursor(), CursorIcon::ColResize);

        assert!(grab.release().is_ok());
        assert_eq!(doc.borrow().listener_count(), 0);
        assert_eq!(doc.borrow().cursor(), CursorIcon::Default);
    }

    #[test]
    fn drop_releases_grab() {
        let (doc, surface) = shared();
        {
            let _grab = SurfaceGrab::acquire(
                &surface,
                CursorIcon::RowResize,
                &[ListenerKind::PointerMove],
            )
            .expect("surface free");
            assert_eq!(doc.borrow().listener_count(), 1);
        }
        assert_eq!(doc.borrow().listener_count(), 0);
        assert_eq!(doc.borrow().cursor(), CursorIcon::Default);
    }

    #[test]
    fn drop_while_surface_borrowed_does_not_panic() {
        let (doc, surface) = shared();
        let grab = SurfaceGrab::acquire(&surface, CursorIcon::ColResize, &[ListenerKind::PointerUp])
            .expect("surface free");
        let held = doc.borrow();
        drop(grab);
        assert_eq!(held.listener_count(), 1);
    }

    #[test]
    fn release_while_busy_hands_grab_back() {
        let (doc, surface) = shared();
        let grab = SurfaceGrab::acquire(
            &surface,
            CursorIcon::ColResize,
            &[ListenerKind::PointerMove, ListenerKind::PointerUp],
        )
        .expect("surface free");

        let held = doc.borrow();
        let grab = grab.release().expect_err("surface is borrowed");
        assert_eq!(grab.listeners().len(), 2);
        assert_eq!(held.listener_count(), 2);
        drop(held);

        assert!(grab.release().is_ok());
        assert_eq!(doc.borrow().listener_count(), 0);
        assert_eq!(doc.borrow().cursor(), CursorIcon::Default);
    }

    #[test]
    fn acquire_while_busy_leaves_surface_untouched() {
        let (doc, surface) = shared();
        let held = doc.borrow();
        let result = SurfaceGrab::acquire(&surface, CursorIcon::RowResize, &[ListenerKind::PointerUp]);
        assert_eq!(result.err(), Some(SurfaceBusy));
        assert_eq!(held.listener_count(), 0);
        assert_eq!(held.cursor(), CursorIcon::Default);
    }

    #[test]
    fn remove_unknown_listener_reports_false() {
        let mut doc = DocumentSurface::new();
        let id = doc.add_listener(ListenerKind::PointerMove);
        assert!(doc.remove_listener(id));
        assert!(!doc.remove_listener(id));
    }

    #[test]
    fn cursor_css_keywords() {
        assert_eq!(CursorIcon::Default.as_css(), "");
        assert_eq!(CursorIcon::ColResize.as_css(), "col-resize");
        assert_eq!(CursorIcon::RowResize.to_string(), "row-resize");
        assert_eq!(CursorIcon::Default.to_string(), "default");
    }
}
