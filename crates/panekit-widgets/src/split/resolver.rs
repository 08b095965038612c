#![forbid(unsafe_code)]

//! Pointer position to clamped split size.
//!
//! Pure arithmetic: the same pointer, bounds, offset, config and unit always
//! produce the same result. Container bounds are passed in on every call and
//! never cached, so layout shifts during a drag are picked up on the next
//! move.

use panekit_core::geometry::{Axis, Rect};

use super::config::SplitConfig;
use super::size::{SizeUnit, SizeValue};

/// Output of one resolver pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSize {
    /// Clamped size in the requested unit.
    pub value: SizeValue,
    /// Clamped size in pixels from the container's leading edge.
    pub pixels: f64,
    /// Container length minus divider thickness.
    pub usable: f64,
}

/// Container length along the split axis minus the divider thickness.
#[must_use]
pub fn usable_length(container: Rect, config: &SplitConfig) -> f64 {
    container.length(config.direction) - config.trigger_thickness()
}

/// Pointer-to-divider offset captured at drag start.
///
/// Horizontal drags measure from the divider's left edge to the pointer;
/// vertical drags measure from the pointer up to the divider's top edge, so
/// the two signs differ.
#[must_use]
pub fn capture_offset(direction: Axis, pointer: (f64, f64), trigger: Rect) -> f64 {
    match direction {
        Axis::Horizontal => pointer.0 - trigger.left(),
        Axis::Vertical => trigger.top() - pointer.1,
    }
}

/// Resolve a pointer position into a clamped size.
///
/// Returns `None` when the container is not laid out yet (no bounds, or no
/// usable length left after the divider). Clamping applies `min` first and
/// then `max` and the usable length, so conflicting bounds collapse to `max`.
#[must_use]
pub fn resolve_size(
    pointer: (f64, f64),
    container: Option<Rect>,
    offset: f64,
    config: &SplitConfig,
    unit: SizeUnit,
) -> Option<ResolvedSize> {
    let container = container?;
    let usable = usable_length(container, config);
    if !(usable > 0.0) {
        return None;
    }

    let raw = match config.direction {
        Axis::Horizontal => pointer.0 - container.left() - offset,
        Axis::Vertical => pointer.1 - container.top() + offset,
    };

    let min_px = config.min.to_pixels(usable);
    let max_px = config.max.to_pixels(usable);

    let mut pixels = raw.max(min_px);
    pixels = pixels.min(max_px).min(usable);

    Some(ResolvedSize {
        value: SizeValue::from_pixels(pixels, usable, unit),
        pixels,
        usable,
    })
}
