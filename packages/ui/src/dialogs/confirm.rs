use dioxus::prelude::*;

/// Yes/no prompt gating a destructive or irreversible flow.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Continue".to_string())] confirm_label: String,
    on_result: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            class: "dialog",
            h2 { class: "dialog-title", "{title}" }
            p { class: "dialog-message", "{message}" }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    onclick: move |_| on_result.call(true),
                    "{confirm_label}"
                }
                button {
                    onclick: move |_| on_result.call(false),
                    "Cancel"
                }
            }
        }
    }
}
