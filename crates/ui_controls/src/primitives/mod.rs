//! Form-field and slider primitives sharing the `data-ui-*` token contract.

use leptos::ev::KeyboardEvent;
use leptos::*;

mod field;
mod slider;

pub use field::FormField;
pub use slider::{Slider, SliderMarkers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic slider variants.
pub enum SliderVariant {
    /// Standard accent track.
    Standard,
    /// Emphasized accent track.
    Accent,
    /// Muted track for secondary readings.
    Muted,
}

impl Default for SliderVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl SliderVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Accent => "accent",
            Self::Muted => "muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared slider density tokens.
pub enum SliderSize {
    /// Dense track.
    Sm,
    /// Default track.
    Md,
    /// Large track.
    Lg,
}

impl Default for SliderSize {
    fn default() -> Self {
        Self::Md
    }
}

impl SliderSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn join_class(base: &'static str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn percent_token(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
