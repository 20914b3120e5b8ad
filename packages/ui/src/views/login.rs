//! Shared login form with username/password.

use dioxus::prelude::*;

use crate::{use_app_state, AppState};

/// Login form. Platform packages navigate on `on_authenticated` and
/// `on_switch` (the register link).
#[component]
pub fn LoginView(on_authenticated: EventHandler<()>, on_switch: EventHandler<()>) -> Element {
    let mut app_state = use_app_state();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let p = password();

            if u.is_empty() {
                error.set(Some("Please enter your username".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match api::login(u, p).await {
                Ok(session) => {
                    app_state.set(AppState {
                        session: Some(session),
                        loading: false,
                    });
                    on_authenticated.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-brand", "LunchLink" }
            p { class: "auth-tagline", "Sign in to your account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "dialog-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_switch.call(());
                    },
                    "Sign up"
                }
            }
        }
    }
}
