//! Flexbox container attributes a level previews.
//!
//! Each level names one [`LayoutEffect`]: the property its preview reacts to.
//! The effect reads that property out of the parsed input, falls back to its
//! own default when the property is missing, and produces the full set of
//! container attributes the playground is drawn with. Values the preview
//! doesn't recognize are ignored like a browser ignores invalid CSS.

use serde::Deserialize;

use crate::checker::ParsedDeclaration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutEffect {
    JustifyContent,
    FlexDirection,
    AlignItems,
}

impl LayoutEffect {
    pub fn property(self) -> &'static str {
        match self {
            LayoutEffect::JustifyContent => "justify-content",
            LayoutEffect::FlexDirection => "flex-direction",
            LayoutEffect::AlignItems => "align-items",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            LayoutEffect::JustifyContent => "flex-start",
            LayoutEffect::FlexDirection => "row",
            LayoutEffect::AlignItems => "stretch",
        }
    }

    pub fn apply(self, parsed: &ParsedDeclaration) -> LayoutAttributes {
        let value = parsed
            .get(self.property())
            .unwrap_or(self.default_value())
            .to_ascii_lowercase();

        let mut attrs = LayoutAttributes::default();
        match self {
            LayoutEffect::JustifyContent => {
                if let Some(justify) = JustifyContent::from_css(&value) {
                    attrs.justify_content = justify;
                }
            }
            LayoutEffect::FlexDirection => {
                if let Some(direction) = FlexDirection::from_css(&value) {
                    attrs.flex_direction = direction;
                }
            }
            LayoutEffect::AlignItems => {
                if let Some(align) = AlignItems::from_css(&value) {
                    attrs.align_items = align;
                }
            }
        }
        attrs
    }
}

/// A `display: flex` container. `Default` is the CSS initial value of each
/// property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutAttributes {
    pub justify_content: JustifyContent,
    pub flex_direction: FlexDirection,
    pub align_items: AlignItems,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "flex-start" | "start" | "left" | "normal" => Some(Self::FlexStart),
            "flex-end" | "end" | "right" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "space-evenly" => Some(Self::SpaceEvenly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "row" => Some(Self::Row),
            "row-reverse" => Some(Self::RowReverse),
            "column" => Some(Self::Column),
            "column-reverse" => Some(Self::ColumnReverse),
            _ => None,
        }
    }

    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
}

impl AlignItems {
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "stretch" | "normal" => Some(Self::Stretch),
            "flex-start" | "start" | "baseline" => Some(Self::FlexStart),
            "flex-end" | "end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            _ => None,
        }
    }
}
