#![forbid(unsafe_code)]

//! Collapsible item groups.
//!
//! A [`Collapse`] tracks which item names are expanded. Each [`CollapseItem`]
//! derives its collapsed state from that list and asks the parent to toggle it
//! when its header is clicked, via the [`CollapseContext`] seam.

use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Which side of the header the arrow sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArrowPlacement {
    #[default]
    Left,
    Right,
}

/// How collapsed content is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayDirective {
    /// Unmount content while collapsed.
    #[default]
    If,
    /// Keep content mounted and hide it.
    Show,
}

/// Header region a click landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerArea {
    Main,
    Arrow,
    Extra,
}

bitflags! {
    /// Header regions that toggle an item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TriggerAreas: u8 {
        const MAIN = 0b001;
        const ARROW = 0b010;
        const EXTRA = 0b100;
    }
}

impl Default for TriggerAreas {
    fn default() -> Self {
        Self::all()
    }
}

impl TriggerAreas {
    #[must_use]
    pub const fn includes(self, area: TriggerArea) -> bool {
        self.contains(match area {
            TriggerArea::Main => Self::MAIN,
            TriggerArea::Arrow => Self::ARROW,
            TriggerArea::Extra => Self::EXTRA,
        })
    }
}

/// Options recognized by [`Collapse`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollapseConfig {
    /// At most one item expanded at a time.
    pub accordion: bool,
    pub arrow_placement: ArrowPlacement,
    pub display_directive: DisplayDirective,
    pub trigger_areas: TriggerAreas,
    pub default_expanded_names: Vec<String>,
    /// Controlled expanded names.
    pub expanded_names: Option<Vec<String>>,
}

impl CollapseConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn accordion(mut self, accordion: bool) -> Self {
        self.accordion = accordion;
        self
    }

    #[must_use]
    pub fn arrow_placement(mut self, placement: ArrowPlacement) -> Self {
        self.arrow_placement = placement;
        self
    }

    #[must_use]
    pub fn display_directive(mut self, directive: DisplayDirective) -> Self {
        self.display_directive = directive;
        self
    }

    #[must_use]
    pub fn trigger_areas(mut self, areas: TriggerAreas) -> Self {
        self.trigger_areas = areas;
        self
    }

    #[must_use]
    pub fn default_expanded_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_expanded_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn expanded_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Payload of the header click callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemHeaderClick {
    pub name: String,
    /// State after the click.
    pub expanded: bool,
}

/// What a collapse item needs from its parent.
pub trait CollapseContext {
    fn config(&self) -> &CollapseConfig;
    /// Effective expanded names.
    fn expanded_names(&self) -> &[String];
    /// Flip item `name`, given whether it is currently collapsed.
    fn toggle_item(&mut self, collapsed: bool, name: &str);
}

type NamesCallback = Box<dyn FnMut(&[String])>;
type HeaderClickCallback = Box<dyn FnMut(&ItemHeaderClick)>;

/// Group of collapsible items.
pub struct Collapse {
    config: CollapseConfig,
    uncontrolled: Vec<String>,
    on_update_expanded_names: Option<NamesCallback>,
    on_item_header_click: Option<HeaderClickCallback>,
}

impl Collapse {
    #[must_use]
    pub fn new(config: CollapseConfig) -> Self {
        let uncontrolled = config.default_expanded_names.clone();
        Self {
            config,
            uncontrolled,
            on_update_expanded_names: None,
            on_item_header_click: None,
        }
    }

    #[must_use]
    pub fn on_update_expanded_names(mut self, callback: impl FnMut(&[String]) + 'static) -> Self {
        self.on_update_expanded_names = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_item_header_click(mut self, callback: impl FnMut(&ItemHeaderClick) + 'static) -> Self {
        self.on_item_header_click = Some(Box::new(callback));
        self
    }

    /// Supply (or clear) the controlled expanded names.
    pub fn set_expanded_names(&mut self, names: Option<Vec<String>>) {
        self.config.expanded_names = names;
    }

    fn update_expanded_names(&mut self, names: Vec<String>) {
        if let Some(callback) = self.on_update_expanded_names.as_mut() {
            callback(&names);
        }
        self.uncontrolled = names;
    }

    fn header_click(&mut self, name: &str, expanded: bool) {
        #[cfg(feature = "tracing")]
        tracing::debug!(name, expanded, "collapse item toggled");
        if let Some(callback) = self.on_item_header_click.as_mut() {
            callback(&ItemHeaderClick {
                name: name.to_string(),
                expanded,
            });
        }
    }
}

impl CollapseContext for Collapse {
    fn config(&self) -> &CollapseConfig {
        &self.config
    }

    fn expanded_names(&self) -> &[String] {
        self.config
            .expanded_names
            .as_deref()
            .unwrap_or(&self.uncontrolled)
    }

    fn toggle_item(&mut self, collapsed: bool, name: &str) {
        let expanded = collapsed;
        let next = if self.config.accordion {
            if collapsed { vec![name.to_string()] } else { Vec::new() }
        } else {
            let mut names = self.expanded_names().to_vec();
            if collapsed {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            } else {
                names.retain(|n| n != name);
            }
            names
        };
        self.header_click(name, expanded);
        self.update_expanded_names(next);
    }
}

impl std::fmt::Debug for Collapse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collapse")
            .field("config", &self.config)
            .field("uncontrolled", &self.uncontrolled)
            .finish_non_exhaustive()
    }
}

/// One collapsible section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseItem {
    name: Option<String>,
    generated_name: String,
    pub title: String,
    pub disabled: bool,
    /// Overrides the parent directive when set.
    pub display_directive: Option<DisplayDirective>,
}

impl CollapseItem {
    /// Item with a generated name, unique for the process.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let id = NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            name: None,
            generated_name: format!("collapse-item-{id}"),
            title: title.into(),
            disabled: false,
            display_directive: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn display_directive(mut self, directive: DisplayDirective) -> Self {
        self.display_directive = Some(directive);
        self
    }

    /// Explicit name, else the generated one.
    #[must_use]
    pub fn merged_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.generated_name)
    }

    #[must_use]
    pub fn collapsed<C: CollapseContext + ?Sized>(&self, ctx: &C) -> bool {
        let name = self.merged_name();
        !ctx.expanded_names().iter().any(|n| n == name)
    }

    #[must_use]
    pub fn merged_display_directive<C: CollapseContext + ?Sized>(&self, ctx: &C) -> DisplayDirective {
        self.display_directive
            .unwrap_or(ctx.config().display_directive)
    }

    #[must_use]
    pub fn arrow_placement<C: CollapseContext + ?Sized>(&self, ctx: &C) -> ArrowPlacement {
        ctx.config().arrow_placement
    }

    /// Whether content exists in the tree (it may still be hidden).
    #[must_use]
    pub fn content_mounted<C: CollapseContext + ?Sized>(&self, ctx: &C) -> bool {
        !self.collapsed(ctx) || self.merged_display_directive(ctx) == DisplayDirective::Show
    }

    /// Header click in `area`. Returns whether the item was toggled.
    pub fn handle_click<C: CollapseContext + ?Sized>(&self, ctx: &mut C, area: TriggerArea) -> bool {
        if !ctx.config().trigger_areas.includes(area) || self.disabled {
            return false;
        }
        let collapsed = self.collapsed(ctx);
        ctx.toggle_item(collapsed, self.merged_name());
        true
    }
}
