#![forbid(unsafe_code)]

//! Layout widgets for panekit.
//!
//! Widgets here are state machines plus layout math. They take pixel
//! [`Rect`](panekit_core::geometry::Rect)s and pointer events in, and hand
//! back rectangles, styles and callbacks; painting belongs to the host.
//!
//! - [`split`]: two panes with a draggable divider.
//! - [`collapse`]: expandable sections.
//! - [`popselect`] on top of [`popover`]: a select menu in a floating panel.
//! - [`skeleton`]: loading placeholders.

pub mod collapse;
pub mod popover;
pub mod popselect;
pub mod skeleton;
pub mod split;

pub use split::{Split, SplitConfig, SplitLayout};
