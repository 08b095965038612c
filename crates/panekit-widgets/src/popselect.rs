#![forbid(unsafe_code)]

//! Select menu shown in a popover.
//!
//! [`Popselect`] owns the option list, the selected value and the open state.
//! The option panel talks to it only through [`PopselectContext`], so a host
//! can swap in its own container as long as it can show/hide and re-place the
//! floating area.

use panekit_core::geometry::Rect;
use panekit_style::CommonVars;

use crate::popover::{Placement, Popover};

/// Option row height class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PopselectSize {
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

impl PopselectSize {
    /// Row height in pixels for this size.
    #[must_use]
    pub fn option_height(self, common: &CommonVars) -> f64 {
        match self {
            Self::Small => common.height_small,
            Self::Medium => common.height_medium,
            Self::Large => common.height_large,
            Self::Huge => common.height_huge,
        }
    }
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopselectOption {
    pub label: String,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled: bool,
}

impl PopselectOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Selected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopselectValue {
    Single(Option<String>),
    Multiple(Vec<String>),
}

impl PopselectValue {
    /// Whether `value` is selected.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Single(selected) => selected.as_deref() == Some(value),
            Self::Multiple(selected) => selected.iter().any(|v| v == value),
        }
    }
}

/// Options recognized by [`Popselect`].
#[derive(Debug, Clone, PartialEq)]
pub struct PopselectConfig {
    pub options: Vec<PopselectOption>,
    pub multiple: bool,
    pub size: PopselectSize,
    pub placement: Placement,
    /// Panel width; the anchor width when `None`.
    pub width: Option<f64>,
    /// Cap on the panel height. Longer lists scroll.
    pub max_height: Option<f64>,
    pub common: CommonVars,
}

impl Default for PopselectConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            multiple: false,
            size: PopselectSize::Medium,
            placement: Placement::Below,
            width: None,
            max_height: None,
            common: CommonVars::light(),
        }
    }
}

impl PopselectConfig {
    #[must_use]
    pub fn new(options: Vec<PopselectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[must_use]
    pub fn size(mut self, size: PopselectSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn max_height(mut self, height: f64) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Natural panel height: one row per option, capped by `max_height`.
    #[must_use]
    pub fn panel_height(&self) -> f64 {
        let rows = self.options.len() as f64 * self.size.option_height(&self.common);
        self.max_height.map_or(rows, |cap| rows.min(cap))
    }

    fn option(&self, value: &str) -> Option<&PopselectOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// What an option panel can ask of its popselect container.
pub trait PopselectContext {
    fn props(&self) -> &PopselectConfig;
    fn value(&self) -> &PopselectValue;
    fn update_value(&mut self, value: PopselectValue);
    fn set_show(&mut self, show: bool);
    /// Recompute the floating area after the panel content changed.
    fn sync_position(&mut self);
}

/// Panel click handling.
///
/// Single mode selects and closes; multiple mode toggles membership, stays
/// open and re-places the panel. Disabled or unknown options are ignored.
/// Returns whether the value changed.
pub fn toggle_option<C: PopselectContext + ?Sized>(ctx: &mut C, value: &str) -> bool {
    match ctx.props().option(value) {
        Some(option) if !option.disabled => {}
        _ => return false,
    }

    if ctx.props().multiple {
        let mut selected = match ctx.value() {
            PopselectValue::Multiple(selected) => selected.clone(),
            PopselectValue::Single(selected) => selected.iter().cloned().collect(),
        };
        if let Some(index) = selected.iter().position(|v| v == value) {
            selected.remove(index);
        } else {
            selected.push(value.to_string());
        }
        ctx.update_value(PopselectValue::Multiple(selected));
        ctx.sync_position();
    } else {
        ctx.update_value(PopselectValue::Single(Some(value.to_string())));
        ctx.set_show(false);
    }
    true
}

type ValueCallback = Box<dyn FnMut(&PopselectValue)>;
type ShowCallback = Box<dyn FnMut(bool)>;

/// Popover select.
pub struct Popselect {
    config: PopselectConfig,
    value: PopselectValue,
    show: bool,
    anchor: Option<Rect>,
    viewport: Rect,
    area: Option<Rect>,
    on_update_value: Option<ValueCallback>,
    on_update_show: Option<ShowCallback>,
}

impl Popselect {
    #[must_use]
    pub fn new(config: PopselectConfig) -> Self {
        let value = if config.multiple {
            PopselectValue::Multiple(Vec::new())
        } else {
            PopselectValue::Single(None)
        };
        Self {
            config,
            value,
            show: false,
            anchor: None,
            viewport: Rect::default(),
            area: None,
            on_update_value: None,
            on_update_show: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: PopselectValue) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn on_update_value(mut self, callback: impl FnMut(&PopselectValue) + 'static) -> Self {
        self.on_update_value = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_update_show(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_update_show = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.show
    }

    /// Floating area from the last [`sync_position`](PopselectContext::sync_position).
    #[must_use]
    pub const fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Open the panel under `anchor` inside `viewport`.
    pub fn open(&mut self, anchor: Rect, viewport: Rect) {
        self.anchor = Some(anchor);
        self.viewport = viewport;
        self.set_show(true);
    }

    /// Select or toggle the option with `value`.
    pub fn select(&mut self, value: &str) -> bool {
        toggle_option(self, value)
    }

    fn popover(&self, anchor: Rect) -> Popover {
        let mut popover = Popover::new(anchor, self.config.placement)
            .max_height(self.config.panel_height());
        if let Some(width) = self.config.width {
            popover = popover.width(width);
        }
        popover
    }
}

impl PopselectContext for Popselect {
    fn props(&self) -> &PopselectConfig {
        &self.config
    }

    fn value(&self) -> &PopselectValue {
        &self.value
    }

    fn update_value(&mut self, value: PopselectValue) {
        self.value = value;
        if let Some(callback) = self.on_update_value.as_mut() {
            callback(&self.value);
        }
    }

    fn set_show(&mut self, show: bool) {
        if self.show == show {
            return;
        }
        self.show = show;
        if show {
            self.sync_position();
        } else {
            self.area = None;
        }
        if let Some(callback) = self.on_update_show.as_mut() {
            callback(show);
        }
    }

    fn sync_position(&mut self) {
        self.area = match (self.show, self.anchor) {
            (true, Some(anchor)) => self.popover(anchor).compute_area(self.viewport),
            _ => None,
        };
    }
}

impl std::fmt::Debug for Popselect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popselect")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("show", &self.show)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options() -> Vec<PopselectOption> {
        vec![
            PopselectOption::new("Go", "go"),
            PopselectOption::new("Rust", "rust"),
            PopselectOption::new("Zig", "zig").disabled(true),
        ]
    }

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn size_maps_to_common_heights() {
        let common = CommonVars::light();
        assert_eq!(PopselectSize::Small.option_height(&common), 28.0);
        assert_eq!(PopselectSize::Huge.option_height(&common), 46.0);
    }

    #[test]
    fn single_select_updates_value_and_closes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut select = Popselect::new(PopselectConfig::new(options()))
            .on_update_show(move |show| sink.borrow_mut().push(show));
        select.open(Rect::new(10.0, 10.0, 100.0, 30.0), viewport());
        assert!(select.is_shown());
        assert_eq!(select.area(), Some(Rect::new(10.0, 40.0, 100.0, 102.0)));

        assert!(select.select("rust"));
        assert_eq!(select.value, PopselectValue::Single(Some("rust".into())));
        assert!(!select.is_shown());
        assert_eq!(select.area(), None);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn multiple_select_toggles_and_stays_open() {
        let mut select = Popselect::new(PopselectConfig::new(options()).multiple(true).width(160.0));
        select.open(Rect::new(10.0, 10.0, 100.0, 30.0), viewport());
        select.select("go");
        select.select("rust");
        select.select("go");
        assert_eq!(select.value, PopselectValue::Multiple(vec!["rust".into()]));
        assert!(select.is_shown());
        assert_eq!(select.area().map(|a| a.width), Some(160.0));
    }

    #[test]
    fn disabled_and_unknown_options_are_ignored() {
        let mut select = Popselect::new(PopselectConfig::new(options()));
        assert!(!select.select("zig"));
        assert!(!select.select("nope"));
        assert_eq!(select.value, PopselectValue::Single(None));
    }

    #[test]
    fn panel_height_is_capped() {
        let config = PopselectConfig::new(options())
            .size(PopselectSize::Large)
            .max_height(100.0);
        assert_eq!(config.panel_height(), 100.0);
        assert_eq!(PopselectConfig::new(options()).panel_height(), 102.0);
    }

    #[test]
    fn value_contains() {
        assert!(PopselectValue::Single(Some("a".into())).contains("a"));
        assert!(!PopselectValue::Multiple(vec!["b".into()]).contains("a"));
    }
}
