//! Data models for the application.

mod account;

#[cfg(feature = "server")]
pub use self::account::{Account, ProfileRow, PushAlertsRow, StudentRow};
