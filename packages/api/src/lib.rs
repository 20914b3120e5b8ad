//! # API crate — shared fullstack server functions for LunchLink
//!
//! This crate is the backbone of the LunchLink fullstack architecture. It defines every
//! Dioxus server function that the web, desktop, and mobile frontends call, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Username/password authentication, session key, Argon2 password hashing |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database rows (`Account`, `StudentRow`, ...) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_session_context`, `register`, `login`, `logout`
//! - **Profile**: `get_profile_details`, `update_profile`, `verify_email`,
//!   `send_verification_email`, `change_username`, `change_password`,
//!   `change_district`, `deactivate_account`
//! - **Students**: `get_student_records`, `get_student_details`,
//!   `cafeteria_account_connection_allowed`, `connect_student`, `disconnect_students`
//! - **Push alerts**: `get_push_alerts`, `save_push_alerts`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use account::{
    AccessLevel, AlertKind, Profile, PushNotificationSettings, SessionContext, StudentDetails,
    StudentRecord,
};

/// Helper: get the authenticated account id from the session, or fail.
#[cfg(feature = "server")]
async fn session_account_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let account_id: Option<String> = session
        .get(auth::SESSION_ACCOUNT_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(account_id) = account_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&account_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Helper: load the profile projection (account joined with its district).
#[cfg(feature = "server")]
async fn fetch_profile(
    pool: &sqlx::PgPool,
    account_id: uuid::Uuid,
) -> Result<Option<Profile>, ServerFnError> {
    use crate::models::ProfileRow;

    let row: Option<ProfileRow> = sqlx::query_as(
        "SELECT a.first_name, a.last_name, a.username, a.email, a.phone, a.zip_code,
                a.security_question, a.security_answer, d.code AS district_code,
                d.name AS district_name
         FROM accounts a
         LEFT JOIN districts d ON d.id = a.district_id
         WHERE a.id = $1",
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_profile()))
}

/// Get the session context for the current account, if any.
#[cfg(feature = "server")]
#[get("/api/auth/session", session: tower_sessions::Session)]
pub async fn get_session_context() -> Result<Option<SessionContext>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Account;

    let account_id: Option<String> = session
        .get(auth::SESSION_ACCOUNT_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(account_id) = account_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account_uuid =
        uuid::Uuid::parse_str(&account_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<Account> =
        sqlx::query_as("SELECT * FROM accounts WHERE id = $1 AND deactivated_at IS NULL")
            .bind(account_uuid)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.map(|a| a.to_session_context()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/session")]
pub async fn get_session_context() -> Result<Option<SessionContext>, ServerFnError> {
    Ok(None)
}

/// Register a new family account with username and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<SessionContext, ServerFnError> {
    use crate::db::get_pool;

    let username = username.trim().to_lowercase();
    let email = email.trim().to_lowercase();
    let first_name = first_name.trim().to_string();
    let last_name = last_name.trim().to_string();

    if username.len() < 3 {
        return Err(ServerFnError::new(
            "Username must be at least 3 characters",
        ));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if the username is taken
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1 AS n FROM accounts WHERE username = $1")
            .bind(&username)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("This username is already taken"));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let account: models::Account = sqlx::query_as(
        "INSERT INTO accounts (username, email, password_hash, first_name, last_name)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(&first_name)
    .bind(&last_name)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_ACCOUNT_ID_KEY, account.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.to_session_context())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<SessionContext, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with username and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(username: String, password: String) -> Result<SessionContext, ServerFnError> {
    use crate::db::get_pool;

    let username = username.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<models::Account> =
        sqlx::query_as("SELECT * FROM accounts WHERE username = $1")
            .bind(&username)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(account) = account else {
        return Err(ServerFnError::new("Invalid username or password"));
    };

    let valid = auth::verify_password(&password, &account.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid username or password"));
    }

    if account.deactivated_at.is_some() {
        return Err(ServerFnError::new("This account has been deactivated"));
    }

    session
        .insert(auth::SESSION_ACCOUNT_ID_KEY, account.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.to_session_context())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(username: String, password: String) -> Result<SessionContext, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current account by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Get the profile record for the current account.
#[cfg(feature = "server")]
#[get("/api/profile", session: tower_sessions::Session)]
pub async fn get_profile_details() -> Result<Option<Profile>, ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    fetch_profile(pool, account_id).await
}

#[cfg(not(feature = "server"))]
#[get("/api/profile")]
pub async fn get_profile_details() -> Result<Option<Profile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update the editable profile fields and return the stored profile.
///
/// Changing the email address clears the verified flag until the new address
/// is confirmed.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn update_profile(
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    zip_code: String,
    security_question: String,
    security_answer: String,
) -> Result<Profile, ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let first_name = first_name.trim().to_string();
    let last_name = last_name.trim().to_string();
    let email = email.trim().to_lowercase();
    let phone = phone.trim().to_string();
    let zip_code = zip_code.trim().to_string();
    let security_question = security_question.trim().to_string();
    let security_answer = security_answer.trim().to_string();

    if first_name.is_empty() || last_name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE accounts SET
            first_name = $2,
            last_name = $3,
            email_verified = (email_verified AND email = $4),
            email = $4,
            phone = $5,
            zip_code = $6,
            security_question = $7,
            security_answer = $8,
            updated_at = NOW()
         WHERE id = $1",
    )
    .bind(account_id)
    .bind(&first_name)
    .bind(&last_name)
    .bind(&email)
    .bind(&phone)
    .bind(&zip_code)
    .bind(&security_question)
    .bind(&security_answer)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile = fetch_profile(pool, account_id).await?;
    profile.ok_or_else(|| ServerFnError::new("Account not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn update_profile(
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    zip_code: String,
    security_question: String,
    security_answer: String,
) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Check whether the current account's email address is verified.
#[cfg(feature = "server")]
#[get("/api/profile/email-verified", session: tower_sessions::Session)]
pub async fn verify_email() -> Result<bool, ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: (bool,) = sqlx::query_as("SELECT email_verified FROM accounts WHERE id = $1")
        .bind(account_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.0)
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/email-verified")]
pub async fn verify_email() -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Issue a fresh email-verification token for the current account.
///
/// The token is consumed by the `/verify-email/{token}` route served by the
/// web package. Mail delivery is handled out of process; this only records the
/// pending token.
#[cfg(feature = "server")]
#[post("/api/profile/send-verification", session: tower_sessions::Session)]
pub async fn send_verification_email() -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // One pending token per account; re-sending replaces it.
    sqlx::query(
        "INSERT INTO email_verifications (account_id, token)
         VALUES ($1, $2)
         ON CONFLICT (account_id) DO UPDATE SET
            token = $2,
            created_at = NOW()",
    )
    .bind(account_id)
    .bind(uuid::Uuid::new_v4().to_string())
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/send-verification")]
pub async fn send_verification_email() -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Change the account's username after re-checking the password.
#[cfg(feature = "server")]
#[post("/api/profile/username", session: tower_sessions::Session)]
pub async fn change_username(
    new_username: String,
    password: String,
) -> Result<String, ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let new_username = new_username.trim().to_lowercase();
    if new_username.len() < 3 {
        return Err(ServerFnError::new(
            "Username must be at least 3 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: models::Account = sqlx::query_as("SELECT * FROM accounts WHERE id = $1")
        .bind(account_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let valid = auth::verify_password(&password, &account.password_hash)
        .map_err(|e| ServerFnError::new(e))?;
    if !valid {
        return Err(ServerFnError::new("Incorrect password"));
    }

    let taken: Option<(i64,)> =
        sqlx::query_as("SELECT 1 AS n FROM accounts WHERE username = $1 AND id <> $2")
            .bind(&new_username)
            .bind(account_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if taken.is_some() {
        return Err(ServerFnError::new("This username is already taken"));
    }

    sqlx::query("UPDATE accounts SET username = $2, updated_at = NOW() WHERE id = $1")
        .bind(account_id)
        .bind(&new_username)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(new_username)
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/username")]
pub async fn change_username(
    new_username: String,
    password: String,
) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Change the account password after verifying the current one.
#[cfg(feature = "server")]
#[post("/api/profile/password", session: tower_sessions::Session)]
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    if new_password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: models::Account = sqlx::query_as("SELECT * FROM accounts WHERE id = $1")
        .bind(account_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let valid = auth::verify_password(&current_password, &account.password_hash)
        .map_err(|e| ServerFnError::new(e))?;
    if !valid {
        return Err(ServerFnError::new("Incorrect password"));
    }

    let password_hash = auth::hash_password(&new_password).map_err(|e| ServerFnError::new(e))?;

    sqlx::query("UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE id = $1")
        .bind(account_id)
        .bind(&password_hash)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/password")]
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Move the account to the district with the given join code and return the
/// refreshed profile.
#[cfg(feature = "server")]
#[post("/api/profile/district", session: tower_sessions::Session)]
pub async fn change_district(district_code: String) -> Result<Profile, ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let district_code = district_code.trim().to_uppercase();
    if district_code.is_empty() {
        return Err(ServerFnError::new("District code is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let district: Option<(uuid::Uuid,)> =
        sqlx::query_as("SELECT id FROM districts WHERE code = $1")
            .bind(&district_code)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((district_id,)) = district else {
        return Err(ServerFnError::new("Unknown district code"));
    };

    sqlx::query("UPDATE accounts SET district_id = $2, updated_at = NOW() WHERE id = $1")
        .bind(account_id)
        .bind(district_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile = fetch_profile(pool, account_id).await?;
    profile.ok_or_else(|| ServerFnError::new("Account not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/district")]
pub async fn change_district(district_code: String) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Deactivate the current account and end the session.
#[cfg(feature = "server")]
#[post("/api/profile/deactivate", session: tower_sessions::Session)]
pub async fn deactivate_account(password: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: models::Account = sqlx::query_as("SELECT * FROM accounts WHERE id = $1")
        .bind(account_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let valid = auth::verify_password(&password, &account.password_hash)
        .map_err(|e| ServerFnError::new(e))?;
    if !valid {
        return Err(ServerFnError::new("Incorrect password"));
    }

    sqlx::query("UPDATE accounts SET deactivated_at = NOW(), updated_at = NOW() WHERE id = $1")
        .bind(account_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/deactivate")]
pub async fn deactivate_account(password: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the linked student records for the current account, one page at a time.
#[cfg(feature = "server")]
#[get("/api/students/:offset", session: tower_sessions::Session)]
pub async fn get_student_records(offset: i64) -> Result<Vec<StudentRecord>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::StudentRow;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<StudentRow> = sqlx::query_as(
        "SELECT id, name, student_number, school FROM students
         WHERE account_id = $1
         ORDER BY created_at
         LIMIT 25 OFFSET $2",
    )
    .bind(account_id)
    .bind(offset.max(0))
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().map(|r| r.to_record()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/students/:offset")]
pub async fn get_student_records(offset: i64) -> Result<Vec<StudentRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the primary linked student record, if one exists.
#[cfg(feature = "server")]
#[get("/api/students/primary", session: tower_sessions::Session)]
pub async fn get_student_details() -> Result<Option<StudentDetails>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::StudentRow;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<StudentRow> = sqlx::query_as(
        "SELECT id, name, student_number, school FROM students
         WHERE account_id = $1
         ORDER BY created_at
         LIMIT 1",
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_details()))
}

#[cfg(not(feature = "server"))]
#[get("/api/students/primary")]
pub async fn get_student_details() -> Result<Option<StudentDetails>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Check whether the account's district allows linking cafeteria accounts.
/// Accounts without a district resolve to false.
#[cfg(feature = "server")]
#[get("/api/districts/cafeteria-linking", session: tower_sessions::Session)]
pub async fn cafeteria_account_connection_allowed() -> Result<bool, ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: (bool,) = sqlx::query_as(
        "SELECT COALESCE(d.allow_cafeteria_linking, FALSE)
         FROM accounts a
         LEFT JOIN districts d ON d.id = a.district_id
         WHERE a.id = $1",
    )
    .bind(account_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.0)
}

#[cfg(not(feature = "server"))]
#[get("/api/districts/cafeteria-linking")]
pub async fn cafeteria_account_connection_allowed() -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Link a student cafeteria account to the current account.
#[cfg(feature = "server")]
#[post("/api/students/connect", session: tower_sessions::Session)]
pub async fn connect_student(
    name: String,
    student_number: String,
    school: Option<String>,
) -> Result<StudentRecord, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::StudentRow;

    let account_id = session_account_id(&session).await?;

    let name = name.trim().to_string();
    let student_number = student_number.trim().to_string();
    let school = school
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if name.is_empty() {
        return Err(ServerFnError::new("Student name is required"));
    }
    if student_number.is_empty() {
        return Err(ServerFnError::new("Student number is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let allowed: (bool,) = sqlx::query_as(
        "SELECT COALESCE(d.allow_cafeteria_linking, FALSE)
         FROM accounts a
         LEFT JOIN districts d ON d.id = a.district_id
         WHERE a.id = $1",
    )
    .bind(account_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !allowed.0 {
        return Err(ServerFnError::new(
            "Your district does not allow linking cafeteria accounts",
        ));
    }

    let row: StudentRow = sqlx::query_as(
        "INSERT INTO students (account_id, name, student_number, school)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, student_number, school",
    )
    .bind(account_id)
    .bind(&name)
    .bind(&student_number)
    .bind(&school)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_record())
}

#[cfg(not(feature = "server"))]
#[post("/api/students/connect")]
pub async fn connect_student(
    name: String,
    student_number: String,
    school: Option<String>,
) -> Result<StudentRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove every linked student record for the current account.
#[cfg(feature = "server")]
#[post("/api/students/disconnect", session: tower_sessions::Session)]
pub async fn disconnect_students() -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM students WHERE account_id = $1")
        .bind(account_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/students/disconnect")]
pub async fn disconnect_students() -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the push-alert settings for the current account, if any were saved.
#[cfg(feature = "server")]
#[get("/api/push-alerts", session: tower_sessions::Session)]
pub async fn get_push_alerts() -> Result<Option<PushNotificationSettings>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::PushAlertsRow;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<PushAlertsRow> = sqlx::query_as(
        "SELECT low_balance, messages, autopay, favorites FROM push_alerts
         WHERE account_id = $1",
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_settings()))
}

#[cfg(not(feature = "server"))]
#[get("/api/push-alerts")]
pub async fn get_push_alerts() -> Result<Option<PushNotificationSettings>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Save the whole push-alert record for the current account.
#[cfg(feature = "server")]
#[post("/api/push-alerts", session: tower_sessions::Session)]
pub async fn save_push_alerts(settings: PushNotificationSettings) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let account_id = session_account_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO push_alerts (account_id, low_balance, messages, autopay, favorites)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (account_id) DO UPDATE SET
            low_balance = $2,
            messages = $3,
            autopay = $4,
            favorites = $5,
            updated_at = NOW()",
    )
    .bind(account_id)
    .bind(settings.send_low_balance_alerts)
    .bind(settings.send_message_alerts)
    .bind(settings.send_autopay_alerts)
    .bind(settings.send_favorite_alerts)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/push-alerts")]
pub async fn save_push_alerts(settings: PushNotificationSettings) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
