//! Pointer-drag state machine and the window listener guard backing it.

use leptos::ev::{self, FocusEvent};
use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use web_sys::PointerEvent;

use crate::SliderDomain;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Horizontal extent of the track in client coordinates.
pub struct TrackBounds {
    /// Left edge in CSS pixels.
    pub left: f64,
    /// Track width in CSS pixels.
    pub width: f64,
}

impl TrackBounds {
    /// Clamped fraction of the track under `pointer_x`; zero-width tracks map to 0.
    pub fn fraction_at(&self, pointer_x: f64) -> f64 {
        if self.width.is_nan() || self.width <= 0.0 {
            return 0.0;
        }
        ((pointer_x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Drag session lifecycle.
pub enum DragPhase {
    /// No session; no listeners attached.
    #[default]
    Idle,
    /// Pointer captured; global listeners attached.
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Converts a press/move/release pointer stream into stepped values.
pub struct DragController {
    domain: SliderDomain,
    phase: DragPhase,
}

impl DragController {
    /// Idle controller for `domain`.
    pub fn new(domain: SliderDomain) -> Self {
        Self {
            domain,
            phase: DragPhase::Idle,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a session is live.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    fn value_at(&self, track: TrackBounds, pointer_x: f64) -> f64 {
        self.domain.value_at_fraction(track.fraction_at(pointer_x))
    }

    /// Starts (or restarts) a session and returns the value under the press.
    pub fn press(&mut self, track: TrackBounds, pointer_x: f64) -> f64 {
        self.phase = DragPhase::Dragging;
        self.value_at(track, pointer_x)
    }

    /// Value under the pointer while dragging; `None` when idle.
    pub fn pointer_move(&mut self, track: TrackBounds, pointer_x: f64) -> Option<f64> {
        self.is_dragging().then(|| self.value_at(track, pointer_x))
    }

    /// Ends the session with a final value from the release position.
    pub fn release(&mut self, track: TrackBounds, pointer_x: f64) -> Option<f64> {
        let value = self.pointer_move(track, pointer_x)?;
        self.phase = DragPhase::Idle;
        Some(value)
    }

    /// Ends the session without a value. Returns whether one was live.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }
}

/// Whether a pointer-down should start a drag: enabled slider, primary button.
pub fn accepts_press(disabled: bool, button: i16) -> bool {
    !disabled && button == 0
}

/// A [`DragController`] paired with the listener guard of its live session.
///
/// At most one guard is held; starting a new session drops the previous guard
/// before the next one is attached, and every way out of a session drops it.
pub struct DragSession<G> {
    controller: DragController,
    guard: Option<G>,
}

impl<G> DragSession<G> {
    /// Idle session for `domain`.
    pub fn new(domain: SliderDomain) -> Self {
        Self {
            controller: DragController::new(domain),
            guard: None,
        }
    }

    /// Whether a session is live.
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Whether a listener guard is currently held.
    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// Starts a session at the press position; `attach` runs after any previous guard is dropped.
    pub fn begin(&mut self, track: TrackBounds, pointer_x: f64, attach: impl FnOnce() -> G) -> f64 {
        self.guard = None;
        let pressed = self.controller.press(track, pointer_x);
        self.guard = Some(attach());
        pressed
    }

    /// Value under the pointer while dragging.
    pub fn pointer_move(&mut self, track: TrackBounds, pointer_x: f64) -> Option<f64> {
        self.controller.pointer_move(track, pointer_x)
    }

    /// Ends the session on release. A missing track (unmounted) cancels instead of emitting.
    pub fn finish(&mut self, track: Option<TrackBounds>, pointer_x: f64) -> Option<f64> {
        let released = track.and_then(|track| self.controller.release(track, pointer_x));
        if released.is_none() {
            self.controller.cancel();
        }
        self.guard = None;
        released
    }

    /// Ends the session without a value and drops the guard. Returns whether one was live.
    pub fn abort(&mut self) -> bool {
        self.guard = None;
        self.controller.cancel()
    }
}

/// Window listeners for one drag session, removed when the guard drops.
pub struct DragListeners {
    handles: Vec<WindowListenerHandle>,
}

impl DragListeners {
    /// Attaches move, release, and abort (pointer cancel or window blur) listeners.
    pub fn attach<M, R, A>(on_move: M, on_release: R, on_abort: A) -> Self
    where
        M: Fn(PointerEvent) + 'static,
        R: Fn(PointerEvent) + 'static,
        A: Fn() + Clone + 'static,
    {
        let on_cancel = on_abort.clone();
        let handles = vec![
            window_event_listener(ev::pointermove, on_move),
            window_event_listener(ev::pointerup, on_release),
            window_event_listener(ev::pointercancel, move |_: PointerEvent| on_cancel()),
            window_event_listener(ev::blur, move |_: FocusEvent| on_abort()),
        ];
        Self { handles }
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}
