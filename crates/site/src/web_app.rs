use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_controls_showcase::{StoryId, StoryView, UiShowcaseApp};

use crate::storage::{load_story_args, save_story_args};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Slider Showcase" />
        <Meta name="description" content="Stories for the shared slider primitives." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ShowcaseIndex />
                    <Route path="/gallery" view=UiShowcaseApp />
                    <Route path="/stories/:slug" view=StoryRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ShowcaseIndex() -> impl IntoView {
    view! {
        <nav class="story-index" aria-label="Stories">
            <h1>"Stories"</h1>
            <ul>
                {StoryId::ALL
                    .into_iter()
                    .map(|story| {
                        view! {
                            <li>
                                <A href=format!("/stories/{}", story.slug())>{story.title()}</A>
                                <span>{story.description()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <A href="/gallery">"Open all stories"</A>
        </nav>
    }
}

#[component]
fn StoryRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_else(|| "unknown".to_string())
    };

    move || match StoryId::from_slug(&slug()) {
        Some(story) => {
            let persist = Callback::new(move |args: serde_json::Value| save_story_args(story, &args));
            view! {
                <StoryView
                    story
                    restored_state=load_story_args(story)
                    on_state_change=persist
                />
                <A href="/">"All stories"</A>
            }
            .into_view()
        }
        None => view! {
            <section class="story-missing">
                <h1>"Story not found"</h1>
                <p>{format!("No story is registered as `{}`.", slug())}</p>
                <A href="/">"All stories"</A>
            </section>
        }
        .into_view(),
    }
}
