//! Session context and hooks for the UI.

use api::SessionContext;
use dioxus::prelude::*;

/// Application state shared across the whole frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<SessionContext>,
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

/// Get the current application state.
/// Returns a signal that updates when the session context changes.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Provider component that manages the session context.
/// Wrap your app with this component to enable session state.
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let mut app_state = use_signal(AppState::default);

    // Fetch the session context on mount
    let _ = use_resource(move || async move {
        match api::get_session_context().await {
            Ok(session) => {
                app_state.set(AppState {
                    session,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!("Failed to load session context: {}", e);
                app_state.set(AppState {
                    session: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| app_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current account.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut app_state = use_app_state();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                app_state.set(AppState {
                    session: None,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!("Failed to log out: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
