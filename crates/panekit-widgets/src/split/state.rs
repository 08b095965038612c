#![forbid(unsafe_code)]

//! Controlled/uncontrolled size bookkeeping with optional lazy commits.

use super::resolver::ResolvedSize;
use super::size::SizeValue;

/// Reconciles the host-controlled size with the internally tracked one.
///
/// The effective ([`merged`](Self::merged)) size is the controlled size when
/// the host supplies one, otherwise the uncontrolled size. Commits always
/// write the uncontrolled size and are reported to the host; a controlled
/// split only moves once the host reflects the value back.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeState {
    controlled: Option<SizeValue>,
    uncontrolled: SizeValue,
    pending: SizeValue,
    indicator_px: Option<f64>,
    deferred_default: Option<SizeValue>,
}

impl SizeState {
    /// Start from `default_size`, optionally controlled by the host.
    #[must_use]
    pub fn new(default_size: SizeValue, controlled: Option<SizeValue>) -> Self {
        let merged = controlled.unwrap_or(default_size);
        Self {
            controlled,
            uncontrolled: default_size,
            pending: merged,
            indicator_px: None,
            deferred_default: None,
        }
    }

    /// Effective size.
    #[must_use]
    pub fn merged(&self) -> SizeValue {
        self.controlled.unwrap_or(self.uncontrolled)
    }

    /// Internally tracked size.
    #[must_use]
    pub const fn uncontrolled(&self) -> SizeValue {
        self.uncontrolled
    }

    /// Host-controlled size, if any.
    #[must_use]
    pub const fn controlled(&self) -> Option<SizeValue> {
        self.controlled
    }

    /// Value a lazy drag would commit right now.
    #[must_use]
    pub const fn pending(&self) -> SizeValue {
        self.pending
    }

    /// Pixel offset of the lazy-mode indicator line, if shown.
    #[must_use]
    pub const fn indicator_px(&self) -> Option<f64> {
        self.indicator_px
    }

    /// Replace (or drop) the controlled size.
    pub fn set_controlled(&mut self, controlled: Option<SizeValue>) {
        self.controlled = controlled;
    }

    /// Reset pending to the effective size at drag start.
    pub fn begin_drag(&mut self) {
        self.pending = self.merged();
        self.indicator_px = None;
    }

    /// Feed one resolver result.
    ///
    /// Lazy mode stages it and moves the indicator; otherwise it is committed
    /// and returned so the caller can report it.
    pub fn accept(&mut self, resolved: ResolvedSize, lazy: bool) -> Option<SizeValue> {
        if lazy {
            self.pending = resolved.value;
            self.indicator_px = Some(resolved.pixels);
            None
        } else {
            Some(self.commit(resolved.value))
        }
    }

    /// Write the uncontrolled size.
    pub fn commit(&mut self, value: SizeValue) -> SizeValue {
        self.uncontrolled = value;
        value
    }

    /// Commit the staged value at the end of a lazy drag.
    pub fn commit_pending(&mut self) -> SizeValue {
        self.indicator_px = None;
        self.commit(self.pending)
    }

    /// Drop staged state without committing.
    pub fn discard_pending(&mut self) {
        self.indicator_px = None;
        self.pending = self.merged();
    }

    /// Push a new watched `default_size`.
    ///
    /// Outside a drag it overwrites the uncontrolled size immediately and
    /// returns `true`. During a drag it is parked until [`finish_drag`](Self::finish_drag).
    pub fn watch_default(&mut self, default_size: SizeValue, dragging: bool) -> bool {
        if dragging {
            self.deferred_default = Some(default_size);
            false
        } else {
            self.uncontrolled = default_size;
            true
        }
    }

    /// Apply a default that arrived mid-drag. Returns it if one was parked.
    pub fn finish_drag(&mut self) -> Option<SizeValue> {
        let parked = self.deferred_default.take()?;
        self.uncontrolled = parked;
        Some(parked)
    }
}
