//! Shared registration form.

use dioxus::prelude::*;

use crate::{use_app_state, AppState};

/// Registration form. Platform packages navigate on `on_authenticated` and
/// `on_switch` (the sign-in link).
#[component]
pub fn RegisterView(on_authenticated: EventHandler<()>, on_switch: EventHandler<()>) -> Element {
    let mut app_state = use_app_state();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let fname = first_name().trim().to_string();
            let lname = last_name().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if u.len() < 3 {
                error.set(Some("Username must be at least 3 characters".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if fname.is_empty() || lname.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match api::register(u, e, p, fname, lname).await {
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

            h1 { class: "auth-brand", "Create Account" }
            p { class: "auth-tagline", "Sign up for LunchLink" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

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
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "text",
                    placeholder: "First name",
                    value: first_name(),
                    oninput: move |evt| first_name.set(evt.value()),
                }

                input {
                    r#type: "text",
                    placeholder: "Last name",
                    value: last_name(),
                    oninput: move |evt| last_name.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_switch.call(());
                    },
                    "Sign in"
                }
            }
        }
    }
}
