use dioxus::prelude::*;

use super::DialogOutcome;

/// Form for linking a student cafeteria account to the family account.
#[component]
pub fn ConnectStudentDialog(on_close: EventHandler<DialogOutcome>) -> Element {
    let mut name = use_signal(String::new);
    let mut student_number = use_signal(String::new);
    let mut school = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if name().trim().is_empty() {
                error.set(Some("Please enter the student's name".to_string()));
                return;
            }
            if student_number().trim().is_empty() {
                error.set(Some("Please enter the student number".to_string()));
                return;
            }

            let school = if school().trim().is_empty() {
                None
            } else {
                Some(school())
            };

            saving.set(true);
            match api::connect_student(name(), student_number(), school).await {
                Ok(_) => {
                    on_close.call(DialogOutcome::Completed(
                        "Cafeteria account connected".to_string(),
                    ))
                }
                Err(e) => {
                    tracing::error!("Failed to connect cafeteria account: {}", e);
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

            h2 { class: "dialog-title", "Connect Cafeteria Account" }

            if let Some(err) = error() {
                div { class: "dialog-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "Student name" }
                input {
                    r#type: "text",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Student number" }
                input {
                    r#type: "text",
                    placeholder: "e.g. 100042",
                    value: student_number(),
                    oninput: move |evt| student_number.set(evt.value()),
                }
                p {
                    class: "form-help",
                    "Printed on the student ID card."
                }
            }

            div {
                class: "form-field",
                label { "School (optional)" }
                input {
                    r#type: "text",
                    value: school(),
                    oninput: move |evt| school.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Connecting..." } else { "Connect" }
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
