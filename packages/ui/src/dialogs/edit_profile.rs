use dioxus::prelude::*;

use api::Profile;

use super::DialogOutcome;

/// Inline form for editing the profile record. Saves the whole record;
/// the backend refreshes the stored copy on success.
#[component]
pub fn EditProfileDialog(profile: Profile, on_close: EventHandler<DialogOutcome>) -> Element {
    let mut draft = use_signal(move || profile);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let d = draft();
            if d.first_name.trim().is_empty() || d.last_name.trim().is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            let email = d.email.trim();
            if email.is_empty() || !email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }

            saving.set(true);
            match api::update_profile(
                d.first_name,
                d.last_name,
                d.email,
                d.phone,
                d.zip_code,
                d.security_question,
                d.security_answer,
            )
            .await
            {
                Ok(_) => on_close.call(DialogOutcome::Completed("Profile updated".to_string())),
                Err(e) => {
                    tracing::error!("Failed to update profile: {}", e);
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

            h2 { class: "dialog-title", "Edit Profile" }

            if let Some(err) = error() {
                div { class: "dialog-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "First name" }
                input {
                    r#type: "text",
                    value: draft().first_name,
                    oninput: move |evt| draft.write().first_name = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { "Last name" }
                input {
                    r#type: "text",
                    value: draft().last_name,
                    oninput: move |evt| draft.write().last_name = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { "Email" }
                input {
                    r#type: "email",
                    value: draft().email,
                    oninput: move |evt| draft.write().email = evt.value(),
                }
                p {
                    class: "form-help",
                    "Changing your email requires verifying the new address."
                }
            }

            div {
                class: "form-field",
                label { "Phone" }
                input {
                    r#type: "tel",
                    placeholder: "(555) 123-4567",
                    value: draft().phone,
                    oninput: move |evt| draft.write().phone = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { "ZIP code" }
                input {
                    r#type: "text",
                    value: draft().zip_code,
                    oninput: move |evt| draft.write().zip_code = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { "Security question" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Name of your first pet",
                    value: draft().security_question,
                    oninput: move |evt| draft.write().security_question = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { "Security answer" }
                input {
                    r#type: "text",
                    value: draft().security_answer,
                    oninput: move |evt| draft.write().security_answer = evt.value(),
                }
                p {
                    class: "form-help",
                    "Shown masked on your profile."
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
