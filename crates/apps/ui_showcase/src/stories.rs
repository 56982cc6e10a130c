//! Story catalog: fixed slider configurations plus their live arguments.

use serde::{Deserialize, Serialize};
use ui_controls::{HandleClasses, SliderSize, SliderTheme, SliderVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Named showcase configurations.
pub enum StoryId {
    /// Single handle with labelled end markers.
    Basic,
    /// Hour labels on every fourth marker.
    LabelledMarkers,
    /// Two independent handles.
    MultiValue,
    /// Two cumulative handles.
    Stacked,
    /// Per-handle fill and puck classes.
    PerHandleStyle,
    /// Degenerate domain rendered in its invalid state.
    InvalidDomain,
    /// Input suppressed.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Domain and mode of a story's slider.
pub struct StoryConfig {
    /// Lower bound.
    pub from: f64,
    /// Upper bound.
    pub to: f64,
    /// Step size.
    pub step: f64,
    /// Stacked display mode.
    pub stacked: bool,
}

const MINUTES: StoryConfig = StoryConfig {
    from: 0.0,
    to: 600.0,
    step: 30.0,
    stacked: false,
};

impl StoryId {
    /// Every story in catalog order.
    pub const ALL: [StoryId; 7] = [
        Self::Basic,
        Self::LabelledMarkers,
        Self::MultiValue,
        Self::Stacked,
        Self::PerHandleStyle,
        Self::InvalidDomain,
        Self::Disabled,
    ];

    /// URL slug.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::LabelledMarkers => "labelled-markers",
            Self::MultiValue => "multi-value",
            Self::Stacked => "stacked",
            Self::PerHandleStyle => "per-handle-style",
            Self::InvalidDomain => "invalid-domain",
            Self::Disabled => "disabled",
        }
    }

    /// Looks a story up by slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|story| story.slug() == slug)
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::LabelledMarkers => "Labelled markers",
            Self::MultiValue => "Multiple handles",
            Self::Stacked => "Stacked handles",
            Self::PerHandleStyle => "Per-handle styling",
            Self::InvalidDomain => "Invalid domain",
            Self::Disabled => "Disabled",
        }
    }

    /// One-line description shown as field help.
    pub fn description(self) -> &'static str {
        match self {
            Self::Basic => "Drag or use the arrow keys; values snap to 30 minute steps.",
            Self::LabelledMarkers => "Every second hour carries a label and an emphasized tick.",
            Self::MultiValue => "Handles move independently and may cross.",
            Self::Stacked => "Each handle adds to the one before it; outer layers paint underneath.",
            Self::PerHandleStyle => "Handles past the styled list fall back to the shared class.",
            Self::InvalidDomain => "A zero-width domain is rejected instead of rendering NaN offsets.",
            Self::Disabled => "Pointer and keyboard input are ignored.",
        }
    }

    /// Slider domain and mode.
    pub fn config(self) -> StoryConfig {
        match self {
            Self::Stacked => StoryConfig {
                stacked: true,
                ..MINUTES
            },
            Self::InvalidDomain => StoryConfig {
                from: 10.0,
                to: 10.0,
                step: 1.0,
                stacked: false,
            },
            _ => MINUTES,
        }
    }

    /// Initial arguments.
    pub fn default_args(self) -> StoryArgs {
        let values = match self {
            Self::MultiValue => vec![120.0, 390.0],
            Self::Stacked => vec![240.0, 270.0],
            Self::PerHandleStyle => vec![90.0, 300.0, 480.0],
            _ => vec![240.0],
        };
        StoryArgs {
            values,
            last_change: None,
        }
    }

    /// Marker label for `value`.
    pub fn label_for(self, value: f64) -> Option<String> {
        let config = self.config();
        match self {
            Self::LabelledMarkers | Self::Stacked => {
                (value % 120.0 == 0.0).then(|| format!("{}h", value / 60.0))
            }
            _ if value == config.from || value == config.to => Some(format!("{value} min")),
            _ => None,
        }
    }

    /// Fill classes per handle.
    pub fn fill_classes(self) -> HandleClasses {
        match self {
            Self::PerHandleStyle => {
                HandleClasses::from(vec!["story-fill-sleep", "story-fill-focus"])
                    .with_shared("story-fill-rest")
            }
            _ => HandleClasses::default(),
        }
    }

    /// Puck classes per handle.
    pub fn puck_classes(self) -> HandleClasses {
        match self {
            Self::PerHandleStyle => HandleClasses::from(vec!["story-puck-sleep"]),
            _ => HandleClasses::default(),
        }
    }

    /// Theme tokens.
    pub fn theme(self) -> SliderTheme {
        match self {
            Self::Stacked => SliderTheme {
                variant: SliderVariant::Accent,
                size: SliderSize::Lg,
            },
            Self::Disabled => SliderTheme {
                variant: SliderVariant::Muted,
                size: SliderSize::Md,
            },
            _ => SliderTheme::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Live story arguments, persisted by the host between visits.
pub struct StoryArgs {
    /// Raw handle values.
    pub values: Vec<f64>,
    /// Most recent value reported by the slider.
    pub last_change: Option<f64>,
}

/// Applies a reported slider value to the nearest handle.
///
/// Stacked stories compare against cumulative positions and store the
/// difference from the preceding handle, floored at zero.
///
/// The nearest handle is re-chosen for every reported value, so a drag that
/// crosses the midpoint between two boundaries moves the other handle from
/// then on. Stacked stories hit this sooner because moving one increment
/// shifts every later boundary.
pub fn apply_change(values: &[f64], next: f64, stacked: bool) -> Vec<f64> {
    if values.is_empty() {
        return vec![next];
    }

    let positions: Vec<f64> = if stacked {
        values
            .iter()
            .scan(0.0, |total, value| {
                *total += value;
                Some(*total)
            })
            .collect()
    } else {
        values.to_vec()
    };

    let nearest = positions
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - next).abs().total_cmp(&(*b - next).abs()))
        .map(|(index, _)| index)
        .unwrap_or(0);

    let mut updated = values.to_vec();
    updated[nearest] = if stacked {
        let base = if nearest == 0 {
            0.0
        } else {
            positions[nearest - 1]
        };
        (next - base).max(0.0)
    } else {
        next
    };
    updated
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slugs_round_trip() {
        for story in StoryId::ALL {
            assert_eq!(StoryId::from_slug(story.slug()), Some(story));
        }
        assert_eq!(StoryId::from_slug("missing"), None);
    }

    #[test]
    fn serde_uses_slug_spelling() {
        let encoded = serde_json::to_string(&StoryId::PerHandleStyle).expect("serialize");
        assert_eq!(encoded, "\"per-handle-style\"");
    }

    #[test]
    fn labels_follow_story_policy() {
        assert_eq!(StoryId::Basic.label_for(0.0).as_deref(), Some("0 min"));
        assert_eq!(StoryId::Basic.label_for(600.0).as_deref(), Some("600 min"));
        assert_eq!(StoryId::Basic.label_for(300.0), None);
        assert_eq!(StoryId::LabelledMarkers.label_for(240.0).as_deref(), Some("4h"));
        assert_eq!(StoryId::LabelledMarkers.label_for(270.0), None);
    }

    #[test]
    fn nearest_handle_takes_the_change() {
        assert_eq!(apply_change(&[120.0, 390.0], 150.0, false), vec![150.0, 390.0]);
        assert_eq!(apply_change(&[120.0, 390.0], 600.0, false), vec![120.0, 600.0]);
        assert_eq!(apply_change(&[], 30.0, false), vec![30.0]);
    }

    #[test]
    fn stacked_change_updates_increment_of_nearest_boundary() {
        // Cumulative positions are 240 and 510.
        assert_eq!(apply_change(&[240.0, 270.0], 540.0, true), vec![240.0, 300.0]);
        assert_eq!(apply_change(&[240.0, 270.0], 180.0, true), vec![180.0, 270.0]);
    }

    #[test]
    fn crossing_the_midpoint_switches_the_updated_handle() {
        // 390 is 150 from the first boundary (240) and 120 from the second (510).
        let first = apply_change(&[240.0, 270.0], 360.0, true);
        assert_eq!(first, vec![360.0, 270.0]);
        assert_eq!(apply_change(&[240.0, 270.0], 390.0, true), vec![240.0, 150.0]);
        assert_eq!(apply_change(&[120.0, 390.0], 260.0, false), vec![120.0, 260.0]);
    }

    #[test]
    fn invalid_domain_story_uses_degenerate_bounds() {
        let config = StoryId::InvalidDomain.config();
        assert_eq!(config.from, config.to);
        assert!(ui_controls::SliderDomain::new(config.from, config.to, config.step).is_err());
    }

    #[test]
    fn args_survive_json_round_trip() {
        let args = StoryId::Stacked.default_args();
        let value = serde_json::to_value(&args).expect("serialize");
        let restored: StoryArgs = serde_json::from_value(value).expect("deserialize");
        assert_eq!(restored, args);
    }
}
