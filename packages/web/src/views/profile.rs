//! Profile page view.

use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

/// Profile page component. Push-notification settings are a native-shell
/// feature, so the web build leaves that section off.
#[component]
pub fn Profile() -> Element {
    let app = ui::use_app_state();
    let nav = use_navigator();

    // Require a session
    if !app().loading && app().session.is_none() {
        nav.replace(Route::Login {});
    }

    rsx! {
        ProfileView {}
    }
}
