//! Modal dialog forms for the profile screen sub-flows.
//!
//! Every editing dialog reports back through a single `on_close` event carrying
//! a [`DialogOutcome`]: `Cancelled` for any dismissal, `Completed(message)`
//! with the user-visible confirmation message after a successful save. The
//! dialogs own their server calls; the opening view reacts to the outcome.

mod change_district;
pub use change_district::ChangeDistrictDialog;

mod change_password;
pub use change_password::ChangePasswordDialog;

mod change_username;
pub use change_username::ChangeUsernameDialog;

mod confirm;
pub use confirm::ConfirmDialog;

mod connect_student;
pub use connect_student::ConnectStudentDialog;

mod deactivate;
pub use deactivate::DeactivateAccountDialog;

mod edit_profile;
pub use edit_profile::EditProfileDialog;

/// How a dialog was closed.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogOutcome {
    /// Dismissed without completing the flow.
    Cancelled,
    /// The flow finished; carries the confirmation message to surface.
    Completed(String),
}
