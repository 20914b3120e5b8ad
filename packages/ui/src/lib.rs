//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/app.css");

mod navbar;
pub use navbar::Navbar;

mod app_state;
pub use app_state::{use_app_state, AppState, AppStateProvider, LogoutButton};

pub mod messages;
pub use messages::{push_message, use_status_messages, MessageKind, StatusMessage, StatusMessages};

mod message_strip;
pub use message_strip::MessageStrip;

pub mod dialogs;
