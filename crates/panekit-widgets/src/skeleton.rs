#![forbid(unsafe_code)]

//! Loading placeholders.
//!
//! [`Skeleton`] resolves its options against a [`SkeletonTheme`] into plain
//! [`SkeletonBlock`] descriptors that a host paints as filled boxes.

use panekit_style::{Rgba, SkeletonTheme};

use crate::split::SizeValue;

/// Height class taken from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SkeletonSize {
    Small,
    Medium,
    Large,
}

impl SkeletonSize {
    #[must_use]
    pub fn height(self, theme: &SkeletonTheme) -> f64 {
        match self {
            Self::Small => theme.height_small,
            Self::Medium => theme.height_medium,
            Self::Large => theme.height_large,
        }
    }
}

/// Corner rounding of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkeletonRadius {
    Square,
    Px(f64),
    /// Fully rounded ends.
    Pill,
    Circle,
}

/// Block fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonFill {
    Solid(Rgba),
    /// Animated sweep between two colors.
    Shimmer { from: Rgba, to: Rgba },
}

/// One resolved placeholder box. `None` dimensions follow the host's flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonBlock {
    pub width: Option<SizeValue>,
    pub height: Option<SizeValue>,
    pub radius: SkeletonRadius,
    pub fill: SkeletonFill,
}

/// Placeholder options.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    pub text: bool,
    pub round: bool,
    pub circle: bool,
    pub size: Option<SkeletonSize>,
    pub width: Option<SizeValue>,
    pub height: Option<SizeValue>,
    pub repeat: usize,
    pub sharp: bool,
    pub animated: bool,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            text: false,
            round: false,
            circle: false,
            size: None,
            width: None,
            height: None,
            repeat: 1,
            sharp: true,
            animated: true,
        }
    }
}

impl Skeleton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-width text line.
    #[must_use]
    pub fn text(mut self, text: bool) -> Self {
        self.text = text;
        self
    }

    #[must_use]
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn circle(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }

    #[must_use]
    pub fn size(mut self, size: SkeletonSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<SizeValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<SizeValue>) -> Self {
        self.height = Some(height.into());
        self
    }

    #[must_use]
    pub fn repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn sharp(mut self, sharp: bool) -> Self {
        self.sharp = sharp;
        self
    }

    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Resolve into `repeat` identical blocks.
    #[must_use]
    pub fn blocks(&self, theme: &SkeletonTheme) -> Vec<SkeletonBlock> {
        vec![self.block(theme); self.repeat]
    }

    fn block(&self, theme: &SkeletonTheme) -> SkeletonBlock {
        let size_height = self.size.map(|size| SizeValue::Pixels(size.height(theme)));
        let height = self.height.or(size_height);

        let mut width = self.width;
        if width.is_none() {
            if self.circle {
                width = height;
            } else if self.text {
                width = Some(SizeValue::Fraction(1.0));
            }
        }

        let radius = if self.circle {
            SkeletonRadius::Circle
        } else if self.round {
            SkeletonRadius::Pill
        } else if self.sharp {
            SkeletonRadius::Square
        } else {
            SkeletonRadius::Px(theme.border_radius)
        };

        let fill = if self.animated {
            SkeletonFill::Shimmer {
                from: theme.color,
                to: theme.color_end,
            }
        } else {
            SkeletonFill::Solid(theme.color)
        };

        SkeletonBlock {
            width,
            height,
            radius,
            fill,
        }
    }
}
