//! Login page view for mobile.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login page component for mobile.
#[component]
pub fn Login() -> Element {
    let app = ui::use_app_state();
    let nav = use_navigator();

    // If already signed in, go straight to the profile
    if !app().loading && app().session.is_some() {
        nav.replace(Route::Profile {});
    }

    rsx! {
        LoginView {
            on_authenticated: move |_| {
                nav.replace(Route::Profile {});
            },
            on_switch: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
