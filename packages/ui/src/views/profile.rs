//! The My Profile screen.
//!
//! Loads the profile record, the linked-student state, and (on native shells)
//! the push-alert settings, then hands every response to the
//! [`ProfileScreen`] view model. All sub-flows run in modal dialogs and report
//! back a [`DialogOutcome`]; a completed flow surfaces its message and
//! triggers a wholesale refetch.

use dioxus::prelude::*;

use account::{AlertKind, ProfileScreen};

use crate::dialogs::{
    ChangeDistrictDialog, ChangePasswordDialog, ChangeUsernameDialog, ConfirmDialog,
    ConnectStudentDialog, DeactivateAccountDialog, DialogOutcome, EditProfileDialog,
};
use crate::icons::{FaBell, FaUser, FaUtensils};
use crate::views::ModalOverlay;
use crate::{
    push_message, use_app_state, use_status_messages, AppState, Icon, LogoutButton, MessageKind,
    MessageStrip, Navbar,
};

#[derive(Clone, PartialEq)]
enum ActiveDialog {
    None,
    EditProfile,
    ChangeUsername,
    ChangePassword,
    ConfirmChangeDistrict,
    ChangeDistrict,
    ConfirmDeactivate,
    Deactivate,
    ConnectStudent,
    ConfirmDisconnect,
}

/// Shared profile view.
///
/// Platform packages control the push-notification section via props; the web
/// shell never loads push settings.
#[component]
pub fn ProfileView(
    /// Load and show the push-alert toggles (native shells only).
    #[props(default)]
    enable_push_notifications: bool,
) -> Element {
    let mut app = use_app_state();
    let mut messages = use_status_messages();
    let mut screen = use_signal(ProfileScreen::new);
    let mut active_dialog = use_signal(|| ActiveDialog::None);
    let mut sending_verification = use_signal(|| false);

    // Gate the loader on session availability. The memo only notifies when
    // the bool flips, so publishing email/verified back into the session
    // context below does not restart the load.
    let session_ready = use_memo(move || app().session.is_some());

    let mut loader = use_resource(move || async move {
        if !session_ready() {
            return;
        }
        let Some(session) = app.peek().session.clone() else {
            return;
        };
        let access_level = session.access_level;

        screen.write().loading = true;
        screen
            .write()
            .init_roles(access_level, session.can_make_payments);

        match api::get_profile_details().await {
            Ok(profile) => {
                screen.write().apply_profile(profile);

                // Publish the stored email to the shared session context.
                let email = screen.peek().profile.email.clone();
                if !email.is_empty() {
                    if let Some(s) = app.write().session.as_mut() {
                        s.email = email;
                    }
                }

                match api::verify_email().await {
                    Ok(verified) => {
                        if let Some(s) = app.write().session.as_mut() {
                            s.verified = verified;
                        }
                    }
                    Err(e) => tracing::error!("Failed to check email verification: {}", e),
                }
            }
            Err(e) => {
                tracing::error!("Failed to load profile: {}", e);
                screen.write().load_failed();
            }
        }

        match api::get_student_records(0).await {
            Ok(records) => {
                screen.write().apply_student_records(records);
                match api::cafeteria_account_connection_allowed().await {
                    Ok(allowed) => screen.write().apply_connection_allowed(allowed, access_level),
                    Err(e) => tracing::error!("Failed to check cafeteria linking: {}", e),
                }
            }
            Err(e) => tracing::error!("Failed to load linked students: {}", e),
        }

        screen.write().loading = true;
        match api::get_student_details().await {
            Ok(details) => screen.write().apply_student_details(details),
            Err(e) => {
                tracing::error!("Failed to load student details: {}", e);
                screen.write().load_failed();
            }
        }

        if enable_push_notifications {
            screen.write().begin_push_load();
            match api::get_push_alerts().await {
                Ok(settings) => screen.write().apply_push_settings(settings),
                Err(e) => {
                    tracing::error!("Failed to load push settings: {}", e);
                    screen.write().push_load_failed();
                }
            }
        }
    });

    let mut handle_dialog_close = move |outcome: DialogOutcome| {
        active_dialog.set(ActiveDialog::None);
        if let DialogOutcome::Completed(message) = outcome {
            tracing::info!("Profile dialog completed: {}", message);
            push_message(&mut messages, MessageKind::Success, &message);
            loader.restart();
        }
    };

    let mut handle_deactivate_close = move |outcome: DialogOutcome| {
        active_dialog.set(ActiveDialog::None);
        if let DialogOutcome::Completed(message) = outcome {
            push_message(&mut messages, MessageKind::Success, &message);
            // The server already ended the session.
            app.set(AppState {
                session: None,
                loading: false,
            });
        }
    };

    let mut handle_disconnect_result = move |confirmed: bool| {
        active_dialog.set(ActiveDialog::None);
        if !confirmed {
            return;
        }
        spawn(async move {
            let Some(session) = app.peek().session.clone() else {
                return;
            };
            let access_level = session.access_level;

            screen.write().loading = true;
            match api::disconnect_students().await {
                Ok(()) => {
                    tracing::debug!("Linked student records deleted");
                    match api::cafeteria_account_connection_allowed().await {
                        Ok(allowed) => {
                            let connected = screen.peek().connected;
                            tracing::debug!(
                                "Cafeteria linking after disconnect: allowed={}, connected={}",
                                allowed,
                                connected
                            );
                            screen.write().apply_disconnect(allowed, access_level);
                        }
                        Err(e) => {
                            // A failed re-check ends the chain with the prior
                            // flags intact.
                            tracing::error!("Failed to check cafeteria linking: {}", e);
                            screen.write().load_failed();
                            return;
                        }
                    }

                    // Re-resolve the roster so every flag settles consistently.
                    match api::get_student_records(0).await {
                        Ok(records) => {
                            screen.write().apply_student_records(records);
                            match api::cafeteria_account_connection_allowed().await {
                                Ok(allowed) => {
                                    screen.write().apply_connection_allowed(allowed, access_level)
                                }
                                Err(e) => {
                                    tracing::error!("Failed to check cafeteria linking: {}", e)
                                }
                            }
                        }
                        Err(e) => tracing::error!("Failed to load linked students: {}", e),
                    }

                    screen.write().loading = false;
                    push_message(
                        &mut messages,
                        MessageKind::Success,
                        "Cafeteria account disconnected",
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to disconnect cafeteria account: {}", e);
                    screen.write().load_failed();
                }
            }
        });
    };

    let mut handle_toggle_alert = move |kind: AlertKind, enabled: bool| {
        // Recompute locally first; the save is fire-and-forget and a failed
        // save only logs.
        screen.write().set_alert(kind, enabled);
        let settings = screen.peek().push_settings;
        spawn(async move {
            if let Err(e) = api::save_push_alerts(settings).await {
                tracing::error!("Failed to save push settings: {}", e);
            }
        });
    };

    let mut handle_toggle_all = move |enabled: bool| {
        screen.write().set_all_alerts(enabled);
        let settings = screen.peek().push_settings;
        spawn(async move {
            if let Err(e) = api::save_push_alerts(settings).await {
                tracing::error!("Failed to save push settings: {}", e);
            }
        });
    };

    let handle_resend = move |_| {
        spawn(async move {
            sending_verification.set(true);
            match api::send_verification_email().await {
                Ok(()) => {
                    push_message(&mut messages, MessageKind::Success, "Verification email sent")
                }
                Err(e) => {
                    tracing::error!("Failed to send verification email: {}", e);
                    push_message(
                        &mut messages,
                        MessageKind::Error,
                        "Could not send verification email",
                    );
                }
            }
            sending_verification.set(false);
        });
    };

    let s = screen();
    let verified = app().session.as_ref().map(|c| c.verified).unwrap_or(false);

    let dialog = match active_dialog() {
        ActiveDialog::None => rsx! {},
        ActiveDialog::EditProfile => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                // A stray click outside must not discard the form.
                dismiss_on_click: false,
                EditProfileDialog {
                    profile: s.profile.clone(),
                    on_close: move |o| handle_dialog_close(o),
                }
            }
        },
        ActiveDialog::ChangeUsername => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                ChangeUsernameDialog { on_close: move |o| handle_dialog_close(o) }
            }
        },
        ActiveDialog::ChangePassword => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                ChangePasswordDialog { on_close: move |o| handle_dialog_close(o) }
            }
        },
        ActiveDialog::ConfirmChangeDistrict => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                ConfirmDialog {
                    title: "Change School District",
                    message: "Moving to another district resets district-specific settings like cafeteria account links. Continue?",
                    on_result: move |confirmed| {
                        active_dialog.set(if confirmed {
                            ActiveDialog::ChangeDistrict
                        } else {
                            ActiveDialog::None
                        });
                    },
                }
            }
        },
        ActiveDialog::ChangeDistrict => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                ChangeDistrictDialog { on_close: move |o| handle_dialog_close(o) }
            }
        },
        ActiveDialog::ConfirmDeactivate => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                ConfirmDialog {
                    title: "Deactivate Account",
                    message: "You are about to deactivate your LunchLink account. Continue?",
                    on_result: move |confirmed| {
                        active_dialog.set(if confirmed {
                            ActiveDialog::Deactivate
                        } else {
                            ActiveDialog::None
                        });
                    },
                }
            }
        },
        ActiveDialog::Deactivate => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                DeactivateAccountDialog { on_close: move |o| handle_deactivate_close(o) }
            }
        },
        ActiveDialog::ConnectStudent => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                ConnectStudentDialog { on_close: move |o| handle_dialog_close(o) }
            }
        },
        ActiveDialog::ConfirmDisconnect => rsx! {
            ModalOverlay {
                on_close: move |_| active_dialog.set(ActiveDialog::None),
                ConfirmDialog {
                    title: "Disconnect Cafeteria Account",
                    message: "This removes every linked student record from your account. Continue?",
                    confirm_label: "Disconnect",
                    on_result: move |confirmed| handle_disconnect_result(confirmed),
                }
            }
        },
    };

    rsx! {
        Navbar {
            span { class: "navbar-brand", "LunchLink" }
            div {
                class: "navbar-actions",
                if s.is_super_admin {
                    span { class: "badge badge-admin", "District administrator" }
                }
                LogoutButton { class: "navbar-logout" }
            }
        }

        div {
            class: "view-page",

            MessageStrip {}

            h1 { class: "view-title", "My Profile" }

            if !verified && app().session.is_some() {
                div {
                    class: "verify-banner",
                    span { "Your email address has not been verified." }
                    button {
                        class: "verify-banner-action",
                        disabled: sending_verification(),
                        onclick: handle_resend,
                        if sending_verification() { "Sending..." } else { "Resend verification email" }
                    }
                }
            }

            section {
                class: "profile-section",
                h2 {
                    class: "section-title",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "Personal Information" }
                }

                div {
                    class: "profile-grid",
                    ProfileField {
                        label: "Name",
                        value: format!("{} {}", s.profile.first_name, s.profile.last_name),
                    }
                    ProfileField { label: "Username", value: s.profile.username.clone() }

                    div {
                        class: "profile-field",
                        span { class: "profile-field-label", "Email" }
                        span {
                            class: "profile-field-value",
                            "{s.profile.email} "
                            if verified {
                                span { class: "badge badge-verified", "Verified" }
                            } else {
                                span { class: "badge badge-unverified", "Unverified" }
                            }
                        }
                    }

                    ProfileField { label: "Phone", value: s.profile.phone.clone() }
                    ProfileField { label: "ZIP code", value: s.profile.zip_code.clone() }
                    ProfileField {
                        label: "Security question",
                        value: s.profile.security_question.clone(),
                    }
                    ProfileField {
                        label: "Security answer",
                        value: s.security_answer_masked.clone(),
                    }
                    ProfileField {
                        label: "School district",
                        value: if s.profile.district_name.is_empty() {
                            String::new()
                        } else {
                            format!("{} ({})", s.profile.district_name, s.profile.district_code)
                        },
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "primary",
                        onclick: move |_| active_dialog.set(ActiveDialog::EditProfile),
                        "Edit profile"
                    }
                    button {
                        onclick: move |_| active_dialog.set(ActiveDialog::ChangeUsername),
                        "Change username"
                    }
                    button {
                        onclick: move |_| active_dialog.set(ActiveDialog::ChangePassword),
                        "Change password"
                    }
                    if !s.is_super_admin {
                        button {
                            onclick: move |_| active_dialog.set(ActiveDialog::ConfirmChangeDistrict),
                            "Change school district"
                        }
                    }
                    button {
                        class: "danger",
                        onclick: move |_| active_dialog.set(ActiveDialog::ConfirmDeactivate),
                        "Deactivate account"
                    }
                }
            }

            if s.show_cafeteria_card {
                section {
                    class: "profile-section",
                    h2 {
                        class: "section-title",
                        Icon { icon: FaUtensils, width: 14, height: 14 }
                        span { "Cafeteria Account" }
                    }

                    if !s.student_list.is_empty() {
                        div {
                            class: "student-list",
                            for student in s.student_list.iter() {
                                div {
                                    key: "{student.id}",
                                    class: "student-row",
                                    span { class: "student-name", "{student.name}" }
                                    span { class: "student-number", "#{student.student_number}" }
                                    if let Some(school) = &student.school {
                                        span { class: "student-school", "{school}" }
                                    }
                                }
                            }
                        }
                    }

                    if s.student_connected {
                        p { class: "form-help", "A student cafeteria account is connected." }
                        div {
                            class: "form-actions",
                            button {
                                class: "danger",
                                onclick: move |_| active_dialog.set(ActiveDialog::ConfirmDisconnect),
                                "Disconnect"
                            }
                        }
                    } else {
                        p {
                            class: "form-help",
                            "Link a student's cafeteria account to manage meal balances from here."
                        }
                        div {
                            class: "form-actions",
                            button {
                                class: "primary",
                                onclick: move |_| active_dialog.set(ActiveDialog::ConnectStudent),
                                "Connect"
                            }
                        }
                    }
                }
            }

            if s.is_student && s.student_connected {
                p { class: "form-help", "Your student cafeteria account is linked." }
            }

            if enable_push_notifications {
                section {
                    class: "profile-section",
                    h2 {
                        class: "section-title",
                        Icon { icon: FaBell, width: 14, height: 14 }
                        span { "Push Notifications" }
                    }

                    if s.notifications_loading {
                        p { class: "form-help", "Loading notification settings..." }
                    }

                    div {
                        class: "toggle-row toggle-row-master",
                        label {
                            class: "checkbox-label",
                            input {
                                r#type: "checkbox",
                                checked: s.enable_push_notifications,
                                disabled: s.notifications_disabled,
                                onchange: move |evt| handle_toggle_all(evt.checked()),
                            }
                            span { "Enable push notifications" }
                        }
                    }

                    for kind in AlertKind::ALL {
                        div {
                            class: "toggle-row",
                            label {
                                class: "checkbox-label",
                                input {
                                    r#type: "checkbox",
                                    checked: s.push_settings.get(kind),
                                    disabled: s.notifications_disabled,
                                    onchange: move |evt| handle_toggle_alert(kind, evt.checked()),
                                }
                                span { "{kind.label()}" }
                            }
                        }
                    }
                }
            }
        }

        if s.loading {
            div {
                class: "loading-overlay",
                div { class: "loading-card", "Loading..." }
            }
        }

        {dialog}
    }
}

#[component]
fn ProfileField(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "profile-field",
            span { class: "profile-field-label", "{label}" }
            span {
                class: "profile-field-value",
                if value.is_empty() { "Not set" } else { "{value}" }
            }
        }
    }
}
