use super::*;

#[component]
/// Labeled field wrapper carrying help and validation copy around a control.
///
/// Slot ids derive from `field_id` (`{field_id}-label`, `{field_id}-help`,
/// `{field_id}-error`) so controls can reference them from ARIA attributes.
pub fn FormField(
    #[prop(into)] field_id: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional_no_strip)] label: Option<String>,
    #[prop(optional_no_strip)] help: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let label_id = format!("{field_id}-label");
    let help_id = format!("{field_id}-help");
    let error_id = format!("{field_id}-error");

    view! {
        <div
            class=merge_layout_class("ui-form-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="form-field"
            data-ui-state=move || if error.with(Option::is_some) { "invalid" } else { "valid" }
        >
            {label.map(|label| view! { <span id=label_id data-ui-slot="label">{label}</span> })}
            <span data-ui-slot="control">{children()}</span>
            {help.map(|help| view! { <span id=help_id data-ui-slot="help">{help}</span> })}
            {move || {
                error
                    .get()
                    .map(|error| {
                        view! {
                            <span id=error_id.clone() role="alert" data-ui-slot="error">
                                {error}
                            </span>
                        }
                    })
            }}
        </div>
    }
}

/// Space-separated ids for `aria-describedby`, help first.
pub(crate) fn described_by(field_id: &str, has_help: bool, has_error: bool) -> Option<String> {
    let mut ids = Vec::new();
    if has_help {
        ids.push(format!("{field_id}-help"));
    }
    if has_error {
        ids.push(format!("{field_id}-error"));
    }
    (!ids.is_empty()).then(|| ids.join(" "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn described_by_lists_present_slots() {
        assert_eq!(described_by("sleep", false, false), None);
        assert_eq!(described_by("sleep", true, false).as_deref(), Some("sleep-help"));
        assert_eq!(
            described_by("sleep", true, true).as_deref(),
            Some("sleep-help sleep-error")
        );
    }
}
