use dioxus::prelude::*;

use super::DialogOutcome;

/// Form for rotating the account password.
#[component]
pub fn ChangePasswordDialog(on_close: EventHandler<DialogOutcome>) -> Element {
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if current_password().is_empty() {
                error.set(Some("Please enter your current password".to_string()));
                return;
            }
            if new_password().len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if new_password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            saving.set(true);
            match api::change_password(current_password(), new_password()).await {
                Ok(()) => on_close.call(DialogOutcome::Completed("Password updated".to_string())),
                Err(e) => {
                    tracing::error!("Failed to change password: {}", e);
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

            h2 { class: "dialog-title", "Change Password" }

            if let Some(err) = error() {
                div { class: "dialog-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "Current password" }
                input {
                    r#type: "password",
                    value: current_password(),
                    oninput: move |evt| current_password.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "New password" }
                input {
                    r#type: "password",
                    placeholder: "Min 8 characters",
                    value: new_password(),
                    oninput: move |evt| new_password.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Confirm new password" }
                input {
                    r#type: "password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
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
