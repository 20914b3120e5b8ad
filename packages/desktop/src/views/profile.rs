//! Profile page view for desktop.

use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

/// Profile page component for desktop. The native shell registers for push
/// notifications, so the alert toggles are live here.
#[component]
pub fn Profile() -> Element {
    let app = ui::use_app_state();
    let nav = use_navigator();

    // Require a session
    if !app().loading && app().session.is_none() {
        nav.replace(Route::Login {});
    }

    rsx! {
        ProfileView { enable_push_notifications: true }
    }
}
