//! Story-driven showcase for the shared slider primitives.
//!
//! Each story renders one fixed slider configuration through `ui_controls` so
//! visual and interaction changes can be reviewed in isolation. Hosts may
//! restore story arguments and receive updated snapshots for persistence.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod stories;

use leptos::*;
use serde_json::Value;
use ui_controls::prelude::*;

pub use stories::{apply_change, StoryArgs, StoryConfig, StoryId};

#[component]
/// One story: its slider, live readout, and argument persistence hooks.
pub fn StoryView(
    /// Story to render.
    story: StoryId,
    /// Host-restored story arguments.
    #[prop(optional_no_strip)]
    restored_state: Option<Value>,
    /// Receives serialized arguments whenever they change.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let config = story.config();
    let disabled = story == StoryId::Disabled;
    let state = create_rw_signal(story.default_args());
    let last_saved = create_rw_signal::<Option<String>>(None);

    if let Some(restored_state) = restored_state {
        match serde_json::from_value::<StoryArgs>(restored_state) {
            Ok(restored) => {
                last_saved.set(serde_json::to_string(&restored).ok());
                state.set(restored);
            }
            Err(err) => logging::warn!("story `{}` restore failed: {err}", story.slug()),
        }
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("story `{}` serialize failed: {err}", story.slug());
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_state_change) = on_state_change.as_ref() {
            if let Ok(value) = serde_json::to_value(&snapshot) {
                on_state_change.call(value);
            }
        }
    });

    let value = Signal::derive(move || SliderValue::from(state.get().values));
    let get_option_label = Callback::new(move |value: f64| story.label_for(value));
    let on_change = Callback::new(move |next: f64| {
        state.update(|args| {
            args.values = apply_change(&args.values, next, config.stacked);
            args.last_change = Some(next);
        });
    });

    view! {
        <section
            class="ui-story"
            data-ui-primitive="true"
            data-ui-kind="story"
            data-story=story.slug()
        >
            <h2 data-ui-slot="title">{story.title()}</h2>
            <Slider
                name=story.slug()
                from=config.from
                to=config.to
                step=config.step
                value=value
                label=story.title()
                help=story.description()
                get_option_label=get_option_label
                on_change=on_change
                stacked=config.stacked
                class=story.fill_classes()
                marker_class=story.puck_classes()
                theme=story.theme()
                disabled=disabled
            />
            <p data-ui-slot="readout">
                {move || {
                    let args = state.get();
                    let values = args
                        .values
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    match args.last_change {
                        Some(last) => format!("Values: [{values}] (last change {last})"),
                        None => format!("Values: [{values}]"),
                    }
                }}
            </p>
        </section>
    }
}

#[component]
/// Gallery rendering every story in catalog order.
pub fn UiShowcaseApp() -> impl IntoView {
    view! {
        <main class="ui-showcase" data-ui-primitive="true" data-ui-kind="showcase">
            <header data-ui-slot="header">
                <h1>"Slider Showcase"</h1>
                <p>"Shared slider primitives, one story per configuration."</p>
            </header>
            {StoryId::ALL
                .into_iter()
                .map(|story| view! { <StoryView story /> })
                .collect_view()}
        </main>
    }
}
