#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and the global pointer surface.
//!
//! # Role in panekit
//! `panekit-core` is the input layer. It owns the pixel-space geometry types
//! widgets lay out against, the normalized pointer events hosts feed in, and
//! the [`PointerSurface`](pointer_surface::PointerSurface) seam through which
//! a widget borrows document-level listeners and the cursor while a drag is
//! in flight.
//!
//! # How it fits in the system
//! `panekit-widgets` consumes these types and never talks to a real window
//! system. Hosts (a browser adapter, a terminal runtime, a test harness)
//! implement [`PointerSurface`](pointer_surface::PointerSurface) and translate
//! their native events into [`PointerEvent`](event::PointerEvent) values.

pub mod event;
pub mod geometry;
pub mod pointer_surface;
