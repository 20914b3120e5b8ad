//! Registration page view.

use dioxus::prelude::*;
use ui::views::RegisterView;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let app = ui::use_app_state();
    let nav = use_navigator();

    // If already signed in, go straight to the profile
    if !app().loading && app().session.is_some() {
        nav.replace(Route::Profile {});
    }

    rsx! {
        RegisterView {
            on_authenticated: move |_| {
                nav.replace(Route::Profile {});
            },
            on_switch: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
