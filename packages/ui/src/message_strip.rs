use dioxus::prelude::*;

use crate::messages::{use_status_messages, MessageKind};

/// Renders the queued status messages with a dismiss control per entry.
#[component]
pub fn MessageStrip() -> Element {
    let mut messages = use_status_messages();

    if messages().entries.is_empty() {
        return rsx! {};
    }

    let entries = messages().entries.clone();

    rsx! {
        div {
            class: "message-strip",
            for entry in entries.iter() {
                div {
                    key: "{entry.id}",
                    class: match entry.kind {
                        MessageKind::Error => "status-message error",
                        MessageKind::Success => "status-message success",
                    },
                    span { "{entry.text}" }
                    button {
                        class: "status-message-dismiss",
                        onclick: {
                            let id = entry.id;
                            move |_| {
                                messages.write().dismiss(id);
                            }
                        },
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
