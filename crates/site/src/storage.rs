//! Story argument persistence in `localStorage`.

use leptos::logging;
use serde_json::Value;
use ui_controls_showcase::StoryId;

const KEY_PREFIX: &str = "ui-showcase:";

pub(crate) fn storage_key(story: StoryId) -> String {
    format!("{KEY_PREFIX}{}", story.slug())
}

fn local_storage() -> Option<web_sys::Storage> {
    match leptos::window().local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            logging::warn!("local storage unavailable: {err:?}");
            None
        }
    }
}

pub(crate) fn load_story_args(story: StoryId) -> Option<Value> {
    let raw = match local_storage()?.get_item(&storage_key(story)) {
        Ok(raw) => raw?,
        Err(err) => {
            logging::warn!("story `{}` load failed: {err:?}", story.slug());
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            logging::warn!("story `{}` stored args are not JSON: {err}", story.slug());
            None
        }
    }
}

pub(crate) fn save_story_args(story: StoryId, args: &Value) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(&storage_key(story), &args.to_string()) {
        logging::warn!("story `{}` persist failed: {err:?}", story.slug());
    }
}
