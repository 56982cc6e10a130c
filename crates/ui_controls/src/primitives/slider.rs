use super::field::described_by;
use super::*;
use crate::{
    accepts_press, layer_order, marker_plan, DragListeners, DragSession, HandleClasses,
    SliderDomain, SliderTheme, SliderValue, TrackBounds,
};

/// Keyboard target for the primary handle, or `None` when the key is not a slider key.
pub(crate) fn key_target(domain: &SliderDomain, current: f64, key: &str) -> Option<f64> {
    let next = match key {
        "ArrowLeft" | "ArrowDown" => domain.nudge(current, -1),
        "ArrowRight" | "ArrowUp" => domain.nudge(current, 1),
        "PageDown" => domain.nudge(current, -10),
        "PageUp" => domain.nudge(current, 10),
        "Home" => domain.from(),
        "End" => domain.last_step(),
        _ => return None,
    };
    Some(next)
}

/// Keyboard change for a slider that may be disabled; disabled sliders ignore every key.
pub(crate) fn key_change(
    disabled: bool,
    domain: &SliderDomain,
    current: f64,
    key: &str,
) -> Option<f64> {
    if disabled {
        return None;
    }
    key_target(domain, current, key)
}

#[component]
/// Tick row with one marker per step; labelled ticks are emphasized.
pub fn SliderMarkers(
    domain: SliderDomain,
    get_option_label: Callback<f64, Option<String>>,
) -> impl IntoView {
    let markers = marker_plan(&domain, |value| get_option_label.call(value));

    view! {
        <div data-ui-slot="markers" aria-hidden="true">
            {markers
                .into_iter()
                .map(|marker| {
                    let emphasis = if marker.label.is_some() { "labelled" } else { "plain" };
                    view! {
                        <span
                            data-ui-slot="marker"
                            data-ui-emphasis=emphasis
                            data-ui-value=marker.value.to_string()
                            style:left=percent_token(marker.fraction)
                        >
                            {marker.label.map(|label| view! { <span data-ui-slot="marker-label">{label}</span> })}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Shared range slider with stepped pointer dragging, marker labels, and optional
/// multi-handle stacking.
///
/// `on_change` fires on press, on every drag move, on release, and on keyboard
/// steps. Stacked sliders display cumulative handle values with outer handles
/// painted beneath inner ones. An invalid `from`/`to`/`step` triple renders the
/// field in its invalid state instead of a track.
pub fn Slider(
    #[prop(into)] name: String,
    #[prop(default = 0.0)] from: f64,
    #[prop(default = 100.0)] to: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] value: MaybeSignal<SliderValue>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] help: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    get_option_label: Callback<f64, Option<String>>,
    #[prop(optional)] on_change: Option<Callback<f64>>,
    #[prop(optional)] stacked: bool,
    #[prop(optional, into)] class: HandleClasses,
    #[prop(optional, into)] marker_class: HandleClasses,
    #[prop(optional)] theme: SliderTheme,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let field_id = format!("{name}-slider");

    let domain = match SliderDomain::new(from, to, step) {
        Ok(domain) => domain,
        Err(err) => {
            logging::warn!("slider `{name}` rejected its domain: {err}");
            return view! {
                <FormField
                    field_id=field_id.clone()
                    layout_class=layout_class.unwrap_or("")
                    label=label
                    help=help
                    error=Some(err.to_string())
                >
                    <div
                        class="ui-slider"
                        id=field_id
                        data-ui-primitive="true"
                        data-ui-kind="slider"
                        data-ui-state="invalid"
                    ></div>
                </FormField>
            }
            .into_view();
        }
    };

    let value = Signal::derive(move || value.get());
    let error = Signal::derive(move || error.get());
    let describedby = {
        let field_id = field_id.clone();
        let has_help = help.is_some();
        move || described_by(&field_id, has_help, error.with(Option::is_some))
    };
    let labelledby = label.as_ref().map(|_| format!("{field_id}-label"));

    let track_ref = create_node_ref::<html::Div>();
    let session = store_value(DragSession::<DragListeners>::new(domain));
    let dragging = create_rw_signal(false);
    let layers = create_memo(move |_| {
        value.with(|value| layer_order(&domain, &value.handles(), stacked))
    });

    let emit = move |next: f64| {
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(next);
        }
    };
    let track_bounds = move || {
        track_ref.get_untracked().map(|track| {
            let rect = track.get_bounding_client_rect();
            TrackBounds {
                left: rect.left(),
                width: rect.width(),
            }
        })
    };
    let end_session = move || {
        session.try_update_value(DragSession::abort);
        let _ = dragging.try_set(false);
    };
    on_cleanup(move || end_session());

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if !accepts_press(disabled.get_untracked(), ev.button()) {
            return;
        }
        let Some(track) = track_bounds() else {
            return;
        };
        ev.prevent_default();

        let attach = move || {
            DragListeners::attach(
                move |ev: web_sys::PointerEvent| {
                    let Some(track) = track_bounds() else {
                        return;
                    };
                    let x = f64::from(ev.client_x());
                    let moved = session
                        .try_update_value(|drag| drag.pointer_move(track, x))
                        .flatten();
                    if let Some(next) = moved {
                        emit(next);
                    }
                },
                move |ev: web_sys::PointerEvent| {
                    let track = track_bounds();
                    let x = f64::from(ev.client_x());
                    let released = session
                        .try_update_value(|drag| drag.finish(track, x))
                        .flatten();
                    let _ = dragging.try_set(false);
                    if let Some(next) = released {
                        emit(next);
                    }
                },
                end_session,
            )
        };
        let x = f64::from(ev.client_x());
        let Some(pressed) = session.try_update_value(|drag| drag.begin(track, x, attach)) else {
            return;
        };
        dragging.set(true);
        emit(pressed);
    };

    let on_key_down = move |ev: KeyboardEvent| {
        let current = value
            .with_untracked(SliderValue::primary)
            .unwrap_or(domain.from());
        let key = ev.key();
        if let Some(next) = key_change(disabled.get_untracked(), &domain, current, key.as_str()) {
            ev.prevent_default();
            emit(next);
        }
    };

    view! {
        <FormField
            field_id=field_id.clone()
            layout_class=layout_class.unwrap_or("")
            label=label
            help=help
            error=error
        >
            <div
                class="ui-slider"
                id=field_id
                role="slider"
                tabindex=move || if disabled.get() { -1 } else { 0 }
                aria-labelledby=labelledby
                aria-describedby=describedby
                aria-valuemin=domain.from().to_string()
                aria-valuemax=domain.to().to_string()
                aria-valuenow=move || value.with(SliderValue::primary).map(|now| now.to_string())
                aria-valuetext=move || {
                    value.with(SliderValue::primary).and_then(|now| get_option_label.call(now))
                }
                aria-invalid=move || bool_token(error.with(Option::is_some))
                aria-disabled=move || bool_token(disabled.get())
                data-ui-primitive="true"
                data-ui-kind="slider"
                data-ui-variant=theme.variant.token()
                data-ui-size=theme.size.token()
                data-ui-stacked=bool_token(stacked)
                data-ui-disabled=move || bool_token(disabled.get())
                data-ui-state=move || {
                    if error.with(Option::is_some) {
                        "invalid"
                    } else if dragging.get() {
                        "dragging"
                    } else {
                        "idle"
                    }
                }
                on:keydown=on_key_down
            >
                <div data-ui-slot="track" node_ref=track_ref on:pointerdown=on_pointer_down>
                    <SliderMarkers domain get_option_label />
                    {move || {
                        layers
                            .get()
                            .into_iter()
                            .map(|layer| {
                                let offset = percent_token(layer.fraction);
                                view! {
                                    <div
                                        class=join_class("ui-slider-fill", class.for_handle(layer.handle))
                                        data-ui-slot="fill"
                                        data-ui-handle=layer.handle
                                        style:width=offset.clone()
                                    ></div>
                                    <div
                                        class=join_class("ui-slider-puck", marker_class.for_handle(layer.handle))
                                        data-ui-slot="puck"
                                        data-ui-handle=layer.handle
                                        data-ui-value=layer.value.to_string()
                                        style:left=offset
                                    ></div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <input type="hidden" name=name prop:value=move || value.with(SliderValue::form_value) />
            </div>
        </FormField>
    }
    .into_view()
}
