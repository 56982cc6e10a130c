//! Per-handle class lookup and theme overrides for the slider.

use crate::primitives::{SliderSize, SliderVariant};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Extra classes for slider handles: one shared class plus optional per-handle entries.
///
/// Lookups past the per-handle list fall back to the shared class.
pub struct HandleClasses {
    shared: String,
    per_handle: Vec<String>,
}

impl HandleClasses {
    /// Same class for every handle.
    pub fn shared(class: impl Into<String>) -> Self {
        Self {
            shared: class.into(),
            per_handle: Vec::new(),
        }
    }

    /// One class per handle, in handle order.
    pub fn per_handle<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            shared: String::new(),
            per_handle: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Replaces the fallback class used past the per-handle list.
    pub fn with_shared(mut self, class: impl Into<String>) -> Self {
        self.shared = class.into();
        self
    }

    /// Class for handle `index`.
    pub fn for_handle(&self, index: usize) -> &str {
        self.per_handle
            .get(index)
            .map(String::as_str)
            .unwrap_or(self.shared.as_str())
    }
}

impl From<&str> for HandleClasses {
    fn from(class: &str) -> Self {
        Self::shared(class)
    }
}

impl From<String> for HandleClasses {
    fn from(class: String) -> Self {
        Self::shared(class)
    }
}

impl From<Vec<String>> for HandleClasses {
    fn from(classes: Vec<String>) -> Self {
        Self::per_handle(classes)
    }
}

impl From<Vec<&str>> for HandleClasses {
    fn from(classes: Vec<&str>) -> Self {
        Self::per_handle(classes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Token overrides written onto the slider root.
pub struct SliderTheme {
    /// Visual variant token.
    pub variant: SliderVariant,
    /// Density token.
    pub size: SliderSize,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shared_class_applies_to_every_handle() {
        let classes = HandleClasses::from("range-a");
        assert_eq!(classes.for_handle(0), "range-a");
        assert_eq!(classes.for_handle(7), "range-a");
    }

    #[test]
    fn per_handle_lookup_falls_back_past_the_end() {
        let classes = HandleClasses::from(vec!["inner", "outer"]);
        assert_eq!(classes.for_handle(0), "inner");
        assert_eq!(classes.for_handle(1), "outer");
        assert_eq!(classes.for_handle(2), "");

        let classes = classes.with_shared("extra");
        assert_eq!(classes.for_handle(1), "outer");
        assert_eq!(classes.for_handle(5), "extra");
    }

    #[test]
    fn default_theme_uses_standard_tokens() {
        let theme = SliderTheme::default();
        assert_eq!(theme.variant.token(), "standard");
        assert_eq!(theme.size.token(), "md");
    }
}
