use dioxus::prelude::*;

use super::DialogOutcome;

/// Form for picking a new username. Requires the current password.
#[component]
pub fn ChangeUsernameDialog(on_close: EventHandler<DialogOutcome>) -> Element {
    let mut new_username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let username = new_username().trim().to_string();
            if username.len() < 3 {
                error.set(Some("Username must be at least 3 characters".to_string()));
                return;
            }
            if password().is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            saving.set(true);
            match api::change_username(username, password()).await {
                Ok(_) => on_close.call(DialogOutcome::Completed("Username updated".to_string())),
                Err(e) => {
                    tracing::error!("Failed to change username: {}", e);
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

            h2 { class: "dialog-title", "Change Username" }

            if let Some(err) = error() {
                div { class: "dialog-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "New username" }
                input {
                    r#type: "text",
                    value: new_username(),
                    oninput: move |evt| new_username.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Password" }
                input {
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                p {
                    class: "form-help",
                    "Confirm the change with your current password."
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
