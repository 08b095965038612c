#![forbid(unsafe_code)]

//! Style types and light themes for panekit widgets.
//!
//! # Role in panekit
//! `panekit-style` is the shared vocabulary for colors and per-state styling.
//! Widgets resolve their visual state through these types; hosts turn the
//! resolved values into terminal cells or CSS.
//!
//! # This crate provides
//! - [`Rgba`] with CSS color parsing.
//! - [`InteractiveStyle`] for normal/hover/active/disabled variants.
//! - [`SplitTheme`] and [`SkeletonTheme`] derived from [`CommonVars`].

/// Color type and parsing.
pub mod color;
/// Interactive style variants for stateful widgets.
pub mod interactive;
/// Widget themes derived from a common palette.
pub mod theme;

pub use color::{ColorParseError, Rgba};
pub use interactive::{InteractionState, InteractiveStyle, Style};
pub use theme::{CommonVars, SkeletonTheme, SplitColorSlot, SplitTheme};
