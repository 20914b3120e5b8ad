//! # Database rows for accounts, students, and push alerts
//!
//! Defines the server-side representations of LunchLink data and their
//! projections into the client-safe types from the `account` crate:
//!
//! ## [`Account`]
//!
//! The complete row from the `accounts` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries and contains every column:
//!
//! - `id` — primary key (`UUID v4`).
//! - `username` / `password_hash` — login credentials; the hash is Argon2 PHC format.
//! - `access_level` — wire role code (`"4"` district staff, `"5"` guardian).
//! - `can_make_payments` — payment permission; guardians without it are treated as
//!   student logins by the UI.
//! - `email` / `email_verified` — contact address and its verification state.
//! - Profile fields (`first_name`, `phone`, `zip_code`, security question/answer).
//! - `district_id` — optional link into `districts`.
//! - `deactivated_at` — set when the holder deactivates the account.
//!
//! [`Account::to_session_context`] projects the row into a
//! [`SessionContext`] for the client.
//!
//! ## [`ProfileRow`], [`StudentRow`], [`PushAlertsRow`]
//!
//! Narrow query-shaped rows used by individual server functions, each with a
//! `to_*` method producing the matching client type. `ProfileRow` carries the
//! district join; students and push alerts map column-per-field.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

#[cfg(feature = "server")]
use account::{
    AccessLevel, Profile, PushNotificationSettings, SessionContext, StudentDetails, StudentRecord,
};

/// Full account record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub access_level: String,
    pub can_make_payments: bool,
    pub email_verified: bool,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub zip_code: String,
    pub security_question: String,
    pub security_answer: String,
    pub district_id: Option<Uuid>,
    pub deactivated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Account {
    /// Project the session-scoped facts for client consumption.
    pub fn to_session_context(&self) -> SessionContext {
        SessionContext {
            access_level: AccessLevel::from_code(&self.access_level),
            email: self.email.clone(),
            verified: self.email_verified,
            can_make_payments: self.can_make_payments,
        }
    }
}

/// Profile projection: account fields joined with the district lookup.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub zip_code: String,
    pub security_question: String,
    pub security_answer: String,
    pub district_code: Option<String>,
    pub district_name: Option<String>,
}

#[cfg(feature = "server")]
impl ProfileRow {
    pub fn to_profile(&self) -> Profile {
        Profile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            zip_code: self.zip_code.clone(),
            security_question: self.security_question.clone(),
            security_answer: self.security_answer.clone(),
            district_code: self.district_code.clone().unwrap_or_default(),
            district_name: self.district_name.clone().unwrap_or_default(),
        }
    }
}

/// One linked student row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub name: String,
    pub student_number: String,
    pub school: Option<String>,
}

#[cfg(feature = "server")]
impl StudentRow {
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            id: self.id.to_string(),
            name: self.name.clone(),
            student_number: self.student_number.clone(),
            school: self.school.clone(),
        }
    }

    pub fn to_details(&self) -> StudentDetails {
        StudentDetails {
            name: self.name.clone(),
            student_number: self.student_number.clone(),
            school: self.school.clone(),
        }
    }
}

/// Saved push-alert flags for one account.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct PushAlertsRow {
    pub low_balance: bool,
    pub messages: bool,
    pub autopay: bool,
    pub favorites: bool,
}

#[cfg(feature = "server")]
impl PushAlertsRow {
    pub fn to_settings(&self) -> PushNotificationSettings {
        PushNotificationSettings {
            send_low_balance_alerts: self.low_balance,
            send_message_alerts: self.messages,
            send_autopay_alerts: self.autopay,
            send_favorite_alerts: self.favorites,
        }
    }
}
