//! Value, position, stacking, and marker math behind the slider primitives.
//!
//! Everything here is pure and DOM-free so the same numbers drive rendering,
//! pointer input, and keyboard input.

use crate::DomainError;

/// Tolerance applied when counting steps so float steps still land on `to`.
const STEP_EPSILON: f64 = 1e-9;

/// Largest number of steps a domain may span; each step renders a marker.
pub const MAX_STEPS: usize = 10_000;

/// Maps `value` into a `[0, 1]` fraction of the `from..to` span.
///
/// `from == to` is not guarded here and yields NaN; validated callers go
/// through [`SliderDomain::fraction_of`].
pub fn value_to_fraction(value: f64, from: f64, to: f64) -> f64 {
    ((value - from) / (to - from)).clamp(0.0, 1.0)
}

/// Running cumulative sum of handle values, counting unset handles as zero.
pub fn stack_values(values: &[Option<f64>]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |total, value| {
            *total += value.unwrap_or(0.0);
            Some(*total)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Validated `{from, to, step}` triple.
pub struct SliderDomain {
    from: f64,
    to: f64,
    step: f64,
}

impl SliderDomain {
    /// Validates and builds a domain.
    pub fn new(from: f64, to: f64, step: f64) -> Result<Self, DomainError> {
        if !(from.is_finite() && to.is_finite() && step.is_finite()) {
            return Err(DomainError::NonFinite { from, to, step });
        }
        if to <= from {
            return Err(DomainError::EmptyRange { from, to });
        }
        if step <= 0.0 {
            return Err(DomainError::InvalidStep { step });
        }
        let steps = ((to - from) / step + STEP_EPSILON).floor();
        if steps > MAX_STEPS as f64 {
            return Err(DomainError::TooManySteps {
                steps,
                limit: MAX_STEPS,
            });
        }
        Ok(Self { from, to, step })
    }

    /// Lower bound.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Upper bound.
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Quantization step.
    pub fn step(&self) -> f64 {
        self.step
    }

    fn span(&self) -> f64 {
        self.to - self.from
    }

    /// Position of `value` as a clamped fraction of the track.
    pub fn fraction_of(&self, value: f64) -> f64 {
        value_to_fraction(value, self.from, self.to)
    }

    /// Stepped value under a track fraction; NaN fractions resolve to `from`.
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let steps = (fraction * self.span() / self.step).round();
        (self.from + steps * self.step).clamp(self.from, self.last_step())
    }

    /// Snaps `value` to the nearest step inside the domain.
    pub fn quantize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.from;
        }
        let steps = ((value - self.from) / self.step).round();
        (self.from + steps * self.step).clamp(self.from, self.last_step())
    }

    /// Moves `value` by a whole number of steps, staying inside the domain.
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        self.quantize(value + f64::from(steps) * self.step)
    }

    /// Number of whole steps between `from` and `to`, at most [`MAX_STEPS`].
    pub fn step_count(&self) -> usize {
        (self.span() / self.step + STEP_EPSILON).floor() as usize
    }

    /// Highest value on the step grid; equals `to` when `to` is a whole number of steps away.
    pub fn last_step(&self) -> f64 {
        (self.from + self.step_count() as f64 * self.step).min(self.to)
    }

    /// The progression `from, from + step, ..., to` (inclusive when reachable).
    pub fn progression(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.step_count()).map(move |index| self.from + index as f64 * self.step)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Current value of a slider: one handle or an ordered list of handles.
pub enum SliderValue {
    /// A single handle.
    Single(f64),
    /// Several handles; `None` marks an unset handle.
    Many(Vec<Option<f64>>),
}

impl Default for SliderValue {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl SliderValue {
    /// Handle values in declaration order.
    pub fn handles(&self) -> Vec<Option<f64>> {
        match self {
            Self::Single(value) => vec![Some(*value)],
            Self::Many(values) => values.clone(),
        }
    }

    /// First set handle, used for keyboard input and ARIA reporting.
    pub fn primary(&self) -> Option<f64> {
        match self {
            Self::Single(value) => Some(*value),
            Self::Many(values) => values.iter().flatten().next().copied(),
        }
    }

    /// Comma-joined raw values for form submission; unset handles are blank.
    pub fn form_value(&self) -> String {
        self.handles()
            .into_iter()
            .map(|value| value.map(|value| value.to_string()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f64>> for SliderValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Many(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<f64>>> for SliderValue {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::Many(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// One fill/puck pair, listed in paint order by [`layer_order`].
pub struct HandleLayer {
    /// Index of the handle in the caller's value list.
    pub handle: usize,
    /// Displayed value (cumulative when stacked).
    pub value: f64,
    /// Track fraction for `value`.
    pub fraction: f64,
}

/// Resolves handle values into paint-ordered layers.
///
/// Stacked sliders are layered outermost first so each cumulative handle sits
/// beneath the handles it contains. Unstacked sliders keep declaration order
/// and skip unset handles.
pub fn layer_order(domain: &SliderDomain, values: &[Option<f64>], stacked: bool) -> Vec<HandleLayer> {
    let layer = |handle: usize, value: f64| HandleLayer {
        handle,
        value,
        fraction: domain.fraction_of(value),
    };

    if stacked {
        stack_values(values)
            .into_iter()
            .enumerate()
            .rev()
            .map(|(handle, value)| layer(handle, value))
            .collect()
    } else {
        values
            .iter()
            .enumerate()
            .filter_map(|(handle, value)| value.map(|value| layer(handle, value)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One tick of the marker row.
pub struct Marker {
    /// Domain value at this tick.
    pub value: f64,
    /// Track fraction of the tick.
    pub fraction: f64,
    /// Caller-supplied label, if any.
    pub label: Option<String>,
}

/// Builds one marker per step, asking `label_for` once per value in order.
pub fn marker_plan<F>(domain: &SliderDomain, mut label_for: F) -> Vec<Marker>
where
    F: FnMut(f64) -> Option<String>,
{
    domain
        .progression()
        .map(|value| Marker {
            value,
            fraction: domain.fraction_of(value),
            label: label_for(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn minutes() -> SliderDomain {
        SliderDomain::new(0.0, 600.0, 30.0).expect("valid domain")
    }

    #[test]
    fn fraction_spans_unit_interval_inside_domain() {
        assert_eq!(value_to_fraction(0.0, 0.0, 600.0), 0.0);
        assert_eq!(value_to_fraction(600.0, 0.0, 600.0), 1.0);
        assert_eq!(value_to_fraction(150.0, 0.0, 600.0), 0.25);
        for value in [0.0, 12.5, 299.0, 450.0, 600.0] {
            let fraction = value_to_fraction(value, 0.0, 600.0);
            assert!((0.0..=1.0).contains(&fraction), "{value} -> {fraction}");
        }
    }

    #[test]
    fn fraction_clamps_outside_domain() {
        assert_eq!(value_to_fraction(-50.0, 0.0, 600.0), 0.0);
        assert_eq!(value_to_fraction(900.0, 0.0, 600.0), 1.0);
        assert_eq!(value_to_fraction(5.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn degenerate_bounds_are_not_guarded_by_free_function() {
        assert!(value_to_fraction(1.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn stacking_accumulates_and_treats_unset_as_zero() {
        assert_eq!(stack_values(&[]), Vec::<f64>::new());
        assert_eq!(stack_values(&[Some(5.0)]), vec![5.0]);
        assert_eq!(
            stack_values(&[Some(5.0), Some(3.0), Some(2.0)]),
            vec![5.0, 8.0, 10.0]
        );
        assert_eq!(stack_values(&[Some(5.0), None, Some(2.0)]), vec![5.0, 5.0, 7.0]);
    }

    #[test]
    fn domain_rejects_degenerate_triples() {
        assert_eq!(
            SliderDomain::new(10.0, 10.0, 1.0),
            Err(DomainError::EmptyRange { from: 10.0, to: 10.0 })
        );
        assert_eq!(
            SliderDomain::new(10.0, 0.0, 1.0),
            Err(DomainError::EmptyRange { from: 10.0, to: 0.0 })
        );
        assert_eq!(
            SliderDomain::new(0.0, 10.0, 0.0),
            Err(DomainError::InvalidStep { step: 0.0 })
        );
        assert_eq!(
            SliderDomain::new(0.0, 10.0, -2.0),
            Err(DomainError::InvalidStep { step: -2.0 })
        );
        assert!(matches!(
            SliderDomain::new(f64::NAN, 10.0, 1.0),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            SliderDomain::new(0.0, f64::INFINITY, 1.0),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn domain_rejects_step_counts_past_marker_limit() {
        assert_eq!(
            SliderDomain::new(0.0, 1e9, 1.0),
            Err(DomainError::TooManySteps {
                steps: 1e9,
                limit: MAX_STEPS,
            })
        );
        let widest = SliderDomain::new(0.0, MAX_STEPS as f64, 1.0).expect("valid domain");
        assert_eq!(widest.progression().count(), MAX_STEPS + 1);
    }

    #[test]
    fn uneven_domain_snaps_to_last_reachable_step() {
        let domain = SliderDomain::new(0.0, 100.0, 30.0).expect("valid domain");
        assert_eq!(domain.last_step(), 90.0);
        assert_eq!(domain.quantize(100.0), 90.0);
        assert_eq!(domain.nudge(90.0, 1), 90.0);
        assert_eq!(domain.nudge(60.0, 10), 90.0);
        assert_eq!(domain.value_at_fraction(1.0), 90.0);

        let coarse = SliderDomain::new(0.0, 100.0, 40.0).expect("valid domain");
        assert_eq!(coarse.value_at_fraction(0.9), 80.0);
        assert_eq!(minutes().last_step(), 600.0);
    }

    #[test]
    fn progression_includes_upper_bound() {
        let values: Vec<f64> = minutes().progression().collect();
        assert_eq!(values.len(), 21);
        assert_eq!(values.first(), Some(&0.0));
        assert_eq!(values.last(), Some(&600.0));
        assert_eq!(values[8], 240.0);
    }

    #[test]
    fn progression_stops_at_last_reachable_step() {
        let domain = SliderDomain::new(0.0, 100.0, 30.0).expect("valid domain");
        let values: Vec<f64> = domain.progression().collect();
        assert_eq!(values, vec![0.0, 30.0, 60.0, 90.0]);
    }

    #[test]
    fn fractional_steps_reach_upper_bound() {
        let domain = SliderDomain::new(0.0, 1.0, 0.1).expect("valid domain");
        assert_eq!(domain.progression().count(), 11);
    }

    #[test]
    fn marker_plan_asks_for_each_label_once_in_order() {
        let mut seen = Vec::new();
        let markers = marker_plan(&minutes(), |value| {
            seen.push(value);
            (value % 120.0 == 0.0).then(|| format!("{}h", value / 60.0))
        });

        assert_eq!(markers.len(), 21);
        assert_eq!(seen, minutes().progression().collect::<Vec<_>>());
        assert_eq!(markers[0].label.as_deref(), Some("0h"));
        assert_eq!(markers[1].label, None);
        assert_eq!(markers[4].label.as_deref(), Some("2h"));
        assert_eq!(markers[20].fraction, 1.0);
    }

    #[test]
    fn marker_plan_is_idempotent() {
        let label = |value: f64| (value == 300.0).then(|| "half".to_string());
        assert_eq!(marker_plan(&minutes(), label), marker_plan(&minutes(), label));
    }

    #[test]
    fn value_at_fraction_quantizes_from_lower_bound() {
        let domain = minutes();
        assert_eq!(domain.value_at_fraction(0.5), 300.0);
        assert_eq!(domain.value_at_fraction(0.0), 0.0);
        assert_eq!(domain.value_at_fraction(1.0), 600.0);
        assert_eq!(domain.value_at_fraction(0.26), 150.0);
        assert_eq!(domain.value_at_fraction(f64::NAN), 0.0);

        let offset = SliderDomain::new(10.0, 20.0, 3.0).expect("valid domain");
        assert_eq!(offset.value_at_fraction(0.5), 16.0);
        assert_eq!(offset.value_at_fraction(1.0), 19.0);
    }

    #[test]
    fn nudge_stays_inside_domain() {
        let domain = minutes();
        assert_eq!(domain.nudge(240.0, 1), 270.0);
        assert_eq!(domain.nudge(240.0, -10), 0.0);
        assert_eq!(domain.nudge(590.0, 1), 600.0);
        assert_eq!(domain.nudge(17.0, 0), 30.0);
    }

    #[test]
    fn stacked_layers_are_reversed_for_painting() {
        let layers = layer_order(&minutes(), &[Some(240.0), Some(270.0)], true);
        let painted: Vec<(usize, f64)> = layers.iter().map(|l| (l.handle, l.value)).collect();
        assert_eq!(painted, vec![(1, 510.0), (0, 240.0)]);
        assert_eq!(layers[0].fraction, 0.85);
        assert_eq!(layers[1].fraction, 0.4);
    }

    #[test]
    fn unstacked_layers_keep_order_and_skip_unset_handles() {
        let layers = layer_order(&minutes(), &[Some(240.0), None, Some(90.0)], false);
        let painted: Vec<(usize, f64)> = layers.iter().map(|l| (l.handle, l.value)).collect();
        assert_eq!(painted, vec![(0, 240.0), (2, 90.0)]);
    }

    #[test]
    fn slider_value_reports_primary_and_form_value() {
        assert_eq!(SliderValue::from(42.0).primary(), Some(42.0));
        let many = SliderValue::from(vec![None, Some(30.0), Some(60.5)]);
        assert_eq!(many.primary(), Some(30.0));
        assert_eq!(many.form_value(), ",30,60.5");
        assert_eq!(SliderValue::default().primary(), None);
        assert_eq!(SliderValue::default().form_value(), "");
    }
}
