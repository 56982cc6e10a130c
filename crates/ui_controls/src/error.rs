//! Construction errors for slider domains.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
/// Reasons a `{from, to, step}` triple cannot back a slider.
pub enum DomainError {
    /// A bound or the step is NaN or infinite.
    #[error("slider domain must be finite (from={from}, to={to}, step={step})")]
    NonFinite {
        /// Lower bound as supplied.
        from: f64,
        /// Upper bound as supplied.
        to: f64,
        /// Step as supplied.
        step: f64,
    },
    /// The upper bound does not lie above the lower bound.
    #[error("slider domain is empty: `to` ({to}) must be greater than `from` ({from})")]
    EmptyRange {
        /// Lower bound as supplied.
        from: f64,
        /// Upper bound as supplied.
        to: f64,
    },
    /// The step is zero or negative.
    #[error("slider step must be positive, got {step}")]
    InvalidStep {
        /// Step as supplied.
        step: f64,
    },
    /// The domain spans more steps than the marker row can render.
    #[error("slider domain spans {steps} steps, more than the limit of {limit}")]
    TooManySteps {
        /// Whole steps between the bounds.
        steps: f64,
        /// Maximum accepted step count.
        limit: usize,
    },
}
