use dioxus::prelude::*;

use super::DialogOutcome;

/// Final step of the deactivate flow. The server ends the session on success,
/// so a completed outcome means the account is gone and the user is signed out.
#[component]
pub fn DeactivateAccountDialog(on_close: EventHandler<DialogOutcome>) -> Element {
    let mut password = use_signal(String::new);
    let mut understood = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if password().is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }
            if !understood() {
                error.set(Some(
                    "Please confirm you understand the account will be closed".to_string(),
                ));
                return;
            }

            saving.set(true);
            match api::deactivate_account(password()).await {
                Ok(()) => {
                    on_close.call(DialogOutcome::Completed("Account deactivated".to_string()))
                }
                Err(e) => {
                    tracing::error!("Failed to deactivate account: {}", e);
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

            h2 { class: "dialog-title", "Deactivate Account" }

            p {
                class: "dialog-message",
                "Deactivating removes access to meal balances, linked students, and payment history. This cannot be undone from the app."
            }

            if let Some(err) = error() {
                div { class: "dialog-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "Password" }
                input {
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: understood(),
                        onchange: move |evt| understood.set(evt.checked()),
                    }
                    span { "I understand my account will be closed" }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "danger",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Deactivating..." } else { "Deactivate account" }
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
