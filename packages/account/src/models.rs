//! # Domain models for the account area
//!
//! Defines the data structures exchanged between the LunchLink backend and the
//! profile screen. These types are `Serialize + Deserialize` so they can cross
//! the server/client boundary via Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | The editable personal-information record for the logged-in user. Fetched in full and refetched wholesale after edits; never patched locally. |
//! | [`PushNotificationSettings`] | Four independent boolean alert toggles (low balance, message, autopay, favorite). The screen derives one aggregate enable flag from them. |
//! | [`StudentRecord`] | One linked student row from the paged roster listing. |
//! | [`StudentDetails`] | The primary linked student, used by the connected-student check. |
//! | [`SessionContext`] | The slice of session state the app chrome needs (access level, email, verified flag, payment permission). |
//!
//! ## Enums
//!
//! - [`AccessLevel`] — typed replacement for the backend's numeric role codes
//!   (`"4"` district admin, `"5"` guardian).
//! - [`AlertKind`] — names one of the four push-alert toggles.

use serde::{Deserialize, Serialize};

/// Personal-information record shown and edited on the profile screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Raw phone number as stored; the screen reformats it for display.
    pub phone: String,
    pub zip_code: String,
    pub security_question: String,
    /// Answer as stored; the screen masks it before display.
    pub security_answer: String,
    pub district_code: String,
    pub district_name: String,
}

/// The four push-alert toggles. An empty backend response maps to the
/// all-false default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotificationSettings {
    pub send_low_balance_alerts: bool,
    pub send_message_alerts: bool,
    pub send_autopay_alerts: bool,
    pub send_favorite_alerts: bool,
}

impl PushNotificationSettings {
    /// True if any individual alert is enabled.
    pub fn any_enabled(&self) -> bool {
        self.send_low_balance_alerts
            || self.send_message_alerts
            || self.send_autopay_alerts
            || self.send_favorite_alerts
    }

    /// Set one named alert flag.
    pub fn set(&mut self, kind: AlertKind, enabled: bool) {
        match kind {
            AlertKind::LowBalance => self.send_low_balance_alerts = enabled,
            AlertKind::Message => self.send_message_alerts = enabled,
            AlertKind::AutoPay => self.send_autopay_alerts = enabled,
            AlertKind::Favorite => self.send_favorite_alerts = enabled,
        }
    }

    /// Get one named alert flag.
    pub fn get(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::LowBalance => self.send_low_balance_alerts,
            AlertKind::Message => self.send_message_alerts,
            AlertKind::AutoPay => self.send_autopay_alerts,
            AlertKind::Favorite => self.send_favorite_alerts,
        }
    }

    /// Set every alert flag to the same value.
    pub fn set_all(&mut self, enabled: bool) {
        for kind in AlertKind::ALL {
            self.set(kind, enabled);
        }
    }
}

/// Names one of the four push-alert toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    LowBalance,
    Message,
    AutoPay,
    Favorite,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::LowBalance,
        AlertKind::Message,
        AlertKind::AutoPay,
        AlertKind::Favorite,
    ];

    /// Human-readable toggle label.
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::LowBalance => "Low balance alerts",
            AlertKind::Message => "Message alerts",
            AlertKind::AutoPay => "Autopay alerts",
            AlertKind::Favorite => "Favorite menu item alerts",
        }
    }
}

/// One linked student row from the roster listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub student_number: String,
    pub school: Option<String>,
}

/// The primary linked student record, or empty fields when none is linked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDetails {
    pub name: String,
    pub student_number: String,
    pub school: Option<String>,
}

/// Typed replacement for the backend's numeric access-level codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    /// District staff account ("4" on the wire).
    DistrictAdmin,
    /// Regular family account holder ("5" on the wire).
    Guardian,
    /// Any other role code.
    #[default]
    Other,
}

impl AccessLevel {
    /// Map a wire code to an access level.
    pub fn from_code(code: &str) -> Self {
        match code {
            "4" => AccessLevel::DistrictAdmin,
            "5" => AccessLevel::Guardian,
            _ => AccessLevel::Other,
        }
    }

    /// The wire code for this access level.
    pub fn code(&self) -> &'static str {
        match self {
            AccessLevel::DistrictAdmin => "4",
            AccessLevel::Guardian => "5",
            AccessLevel::Other => "0",
        }
    }
}

/// Session-scoped account facts shared across the application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub access_level: AccessLevel,
    pub email: String,
    pub verified: bool,
    pub can_make_payments: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_level_codes_round_trip() {
        for level in [AccessLevel::DistrictAdmin, AccessLevel::Guardian] {
            assert_eq!(AccessLevel::from_code(level.code()), level);
        }
        assert_eq!(AccessLevel::from_code("7"), AccessLevel::Other);
        assert_eq!(AccessLevel::from_code(""), AccessLevel::Other);
    }

    #[test]
    fn test_push_settings_any_enabled() {
        let mut settings = PushNotificationSettings::default();
        assert!(!settings.any_enabled());

        for kind in AlertKind::ALL {
            settings = PushNotificationSettings::default();
            settings.set(kind, true);
            assert!(settings.any_enabled(), "{kind:?} alone should enable");
            assert!(settings.get(kind));
        }
    }

    #[test]
    fn test_push_settings_set_all() {
        let mut settings = PushNotificationSettings::default();
        settings.set_all(true);
        assert!(AlertKind::ALL.iter().all(|k| settings.get(*k)));
        settings.set_all(false);
        assert!(!settings.any_enabled());
    }
}
