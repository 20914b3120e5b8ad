use dioxus::prelude::*;
use views::{Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
}

fn main() {
    dioxus::fullstack::set_server_url("https://lunchlink.app");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::StatusMessages::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::APP_CSS }
        ui::AppStateProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let app = ui::use_app_state();
    let nav = use_navigator();

    // Redirect based on session state
    if !app().loading {
        if app().session.is_some() {
            nav.replace(Route::Profile {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
