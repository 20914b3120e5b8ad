use dioxus::prelude::*;

/// A full-screen overlay hosting a dialog card.
///
/// Clicking outside the card triggers `on_close` unless `dismiss_on_click` is
/// disabled (forms that must not be lost to a stray click).
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = true)] dismiss_on_click: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                if dismiss_on_click {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
