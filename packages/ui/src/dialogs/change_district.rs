use dioxus::prelude::*;

use super::DialogOutcome;

/// Form for moving the account to another school district by join code.
#[component]
pub fn ChangeDistrictDialog(on_close: EventHandler<DialogOutcome>) -> Element {
    let mut district_code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if district_code().trim().is_empty() {
                error.set(Some("Please enter a district code".to_string()));
                return;
            }

            saving.set(true);
            match api::change_district(district_code()).await {
                Ok(_) => {
                    on_close.call(DialogOutcome::Completed(
                        "School district updated".to_string(),
                    ))
                }
                Err(e) => {
                    tracing::error!("Failed to change district: {}", e);
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "dialog",
            onsubmit: handle_submit,

            h2 { class: "dialog-title", "Change School District" }

            if let Some(err) = error() {
                div { class: "dialog-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "District code" }
                input {
                    r#type: "text",
                    placeholder: "e.g. PDX01",
                    value: district_code(),
                    oninput: move |evt| district_code.set(evt.value()),
                }
                p {
                    class: "form-help",
                    "Your new district's join code is printed on its enrollment letter."
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save" }
                }
                button {
                    r#type: "button",
                    onclick: move |_| on_close.call(DialogOutcome::Cancelled),
                    "Cancel"
                }
            }
        }
    }
}
