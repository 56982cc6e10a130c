//! Slider primitives for the shared design system.
//!
//! The crate pairs DOM-free value math (domain validation, value/position
//! mapping, stacking, marker plans, the drag state machine) with the Leptos
//! components that render it through the stable `data-ui-*` DOM contract.
//! Callers own the value; the slider only reports stepped changes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod drag;
mod error;
mod primitives;
mod scale;
mod style;

pub use drag::{accepts_press, DragController, DragListeners, DragPhase, DragSession, TrackBounds};
pub use error::DomainError;
pub use primitives::{FormField, Slider, SliderMarkers, SliderSize, SliderVariant};
pub use scale::{
    layer_order, marker_plan, stack_values, value_to_fraction, HandleLayer, Marker, SliderDomain,
    SliderValue, MAX_STEPS,
};
pub use style::{HandleClasses, SliderTheme};

/// Convenience imports for crates composing the slider primitives.
pub mod prelude {
    pub use crate::{
        FormField, HandleClasses, Slider, SliderDomain, SliderMarkers, SliderSize, SliderTheme,
        SliderValue, SliderVariant,
    };
}
