//! # ProfileScreen — view model for the My Profile screen
//!
//! [`ProfileScreen`] owns every piece of state the profile screen displays:
//! the normalized [`Profile`] record, the student/cafeteria linkage flags, and
//! the push-notification toggles. The UI layer holds one `ProfileScreen` in a
//! signal and feeds it the results of backend calls; all derivation logic
//! lives here so it can be tested without a renderer or a network.
//!
//! ## Transitions
//!
//! | Method | Applied when |
//! |--------|--------------|
//! | [`init_roles`](ProfileScreen::init_roles) | On mount, from the shared session context. |
//! | [`apply_profile`](ProfileScreen::apply_profile) | Profile fetch succeeded. Trims zip/phone, formats the phone for display, masks the security answer. |
//! | [`apply_student_records`](ProfileScreen::apply_student_records) | Roster page fetched. Derives `connected`. |
//! | [`apply_connection_allowed`](ProfileScreen::apply_connection_allowed) | Connection-allowed flag fetched. Runs the allowed × connected display matrix. |
//! | [`apply_student_details`](ProfileScreen::apply_student_details) | Student-details check returned. |
//! | [`apply_disconnect`](ProfileScreen::apply_disconnect) | The linked records were deleted and the allowed flag re-fetched. |
//! | [`load_failed`](ProfileScreen::load_failed) | A profile, details, or disconnect-chain call failed. |
//! | [`begin_push_load`](ProfileScreen::begin_push_load) / [`apply_push_settings`](ProfileScreen::apply_push_settings) / [`push_load_failed`](ProfileScreen::push_load_failed) | Bracket the push-settings fetch. |
//! | [`set_alert`](ProfileScreen::set_alert) / [`set_all_alerts`](ProfileScreen::set_all_alerts) | A toggle changed. |
//!
//! The aggregate `enable_push_notifications` flag always equals the OR of the
//! four individual alert flags after any load or update; only the transitions
//! here write it.
//!
//! On a failed call the UI logs the error and applies
//! [`load_failed`](ProfileScreen::load_failed) (or
//! [`push_load_failed`](ProfileScreen::push_load_failed) for the settings
//! fetch); every other field keeps its last known value.

use crate::helpers::{format_phone_number, mask_answer};
use crate::models::{
    AccessLevel, AlertKind, Profile, PushNotificationSettings, StudentDetails, StudentRecord,
};

/// All view state for the profile screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileScreen {
    /// Advisory flag bracketing profile and student-details fetches.
    pub loading: bool,
    pub profile: Profile,
    /// Security answer masked character-for-character for display.
    pub security_answer_masked: String,

    /// A linked student is shown as connected.
    pub student_connected: bool,
    /// The district allows linking cafeteria accounts.
    pub is_cafeteria_account_connection_allowed: bool,
    /// Upstream linkage bit derived from the roster listing.
    pub connected: bool,
    /// The cafeteria-account card is visible.
    pub show_cafeteria_card: bool,
    pub student_list: Vec<StudentRecord>,

    /// Guardian-level account without the make-payments permission.
    pub is_student: bool,
    pub is_super_admin: bool,

    /// Aggregate of the four alert flags.
    pub enable_push_notifications: bool,
    pub notifications_loading: bool,
    /// Toggles render disabled until a settings load succeeds.
    pub notifications_disabled: bool,
    pub push_settings: PushNotificationSettings,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self {
            loading: false,
            profile: Profile::default(),
            security_answer_masked: String::new(),
            student_connected: false,
            is_cafeteria_account_connection_allowed: false,
            connected: false,
            show_cafeteria_card: false,
            student_list: Vec::new(),
            is_student: false,
            is_super_admin: false,
            enable_push_notifications: false,
            notifications_loading: false,
            notifications_disabled: true,
            push_settings: PushNotificationSettings::default(),
        }
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the role display flags from the shared session context.
    pub fn init_roles(&mut self, access_level: AccessLevel, can_make_payments: bool) {
        self.is_student = access_level == AccessLevel::Guardian && !can_make_payments;
        self.is_super_admin = access_level == AccessLevel::DistrictAdmin;
    }

    /// Store a fetched profile, normalizing it for display. An empty response
    /// leaves the previous record in place. Clears `loading` either way.
    pub fn apply_profile(&mut self, profile: Option<Profile>) {
        if let Some(mut profile) = profile {
            profile.zip_code = profile.zip_code.trim().to_string();
            profile.phone = profile.phone.trim().to_string();
            if !profile.phone.is_empty() {
                profile.phone = format_phone_number(&profile.phone);
            }
            self.security_answer_masked = mask_answer(&profile.security_answer);
            self.profile = profile;
        }
        self.loading = false;
    }

    /// Store the fetched roster page and derive the linkage bit.
    pub fn apply_student_records(&mut self, records: Vec<StudentRecord>) {
        // Upstream counts an empty roster as connected; preserved as-is.
        self.connected = records.is_empty();
        self.student_list = records;
    }

    /// Apply the connection-allowed flag and run the display matrix. Only
    /// guardian-level accounts have their display flags touched.
    pub fn apply_connection_allowed(&mut self, allowed: bool, access_level: AccessLevel) {
        self.is_cafeteria_account_connection_allowed = allowed;
        let guardian = access_level == AccessLevel::Guardian;
        if allowed {
            if !self.connected && guardian {
                self.show_cafeteria_card = true;
                self.student_connected = false;
            }
            if self.connected && guardian {
                self.show_cafeteria_card = true;
                self.student_connected = true;
            }
        } else {
            if !self.connected && guardian {
                self.show_cafeteria_card = true;
                self.student_connected = false;
            }
            if self.connected && guardian {
                self.show_cafeteria_card = false;
                self.student_connected = false;
            }
        }
    }

    /// A student-details record with a name marks the student as connected.
    /// Clears `loading`.
    pub fn apply_student_details(&mut self, details: Option<StudentDetails>) {
        if let Some(details) = details {
            if !details.name.is_empty() {
                self.student_connected = true;
            }
        }
        self.loading = false;
    }

    /// Apply the allowed flag re-fetched after the linked records were
    /// deleted. The cafeteria card is cleared only for guardian accounts in
    /// districts that no longer allow linking.
    pub fn apply_disconnect(&mut self, allowed: bool, access_level: AccessLevel) {
        self.is_cafeteria_account_connection_allowed = allowed;
        self.connected = false;
        if allowed {
            self.student_connected = false;
        }
        if access_level == AccessLevel::Guardian && !self.connected && !allowed {
            self.show_cafeteria_card = false;
        }
    }

    /// A failed call ends its chain here: the loading flag clears and every
    /// other field keeps its last known value.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Bracket the start of a push-settings fetch.
    pub fn begin_push_load(&mut self) {
        self.notifications_loading = true;
        self.notifications_disabled = true;
    }

    /// Store fetched push settings (all-false default for an empty response)
    /// and recompute the aggregate. Enables the toggles.
    pub fn apply_push_settings(&mut self, settings: Option<PushNotificationSettings>) {
        self.push_settings = settings.unwrap_or_default();
        self.recompute_push_aggregate();
        self.notifications_loading = false;
        self.notifications_disabled = false;
    }

    /// A failed settings fetch leaves the toggles disabled.
    pub fn push_load_failed(&mut self) {
        self.notifications_loading = false;
        self.notifications_disabled = true;
    }

    /// Flip one alert flag and recompute the aggregate.
    pub fn set_alert(&mut self, kind: AlertKind, enabled: bool) {
        self.push_settings.set(kind, enabled);
        self.recompute_push_aggregate();
    }

    /// The master toggle: every alert flag takes the same value.
    pub fn set_all_alerts(&mut self, enabled: bool) {
        self.enable_push_notifications = enabled;
        self.push_settings.set_all(enabled);
    }

    fn recompute_push_aggregate(&mut self) {
        self.enable_push_notifications = self.push_settings.any_enabled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_profile() -> Profile {
        Profile {
            first_name: "Dana".into(),
            last_name: "Reyes".into(),
            username: "dreyes".into(),
            email: "dana@example.com".into(),
            phone: " 5551234567 ".into(),
            zip_code: "  97210 ".into(),
            security_question: "First pet?".into(),
            security_answer: "goldfish".into(),
            district_code: "PDX01".into(),
            district_name: "Portland SD".into(),
        }
    }

    fn student(name: &str) -> StudentRecord {
        StudentRecord {
            id: "s-1".into(),
            name: name.into(),
            student_number: "100042".into(),
            school: Some("Lincoln Elementary".into()),
        }
    }

    #[test]
    fn test_apply_profile_trims_zip() {
        let mut screen = ProfileScreen::new();
        screen.loading = true;
        screen.apply_profile(Some(raw_profile()));
        assert_eq!(screen.profile.zip_code, "97210");
        assert!(!screen.loading);
    }

    #[test]
    fn test_apply_profile_formats_phone() {
        let mut screen = ProfileScreen::new();
        screen.apply_profile(Some(raw_profile()));
        assert_eq!(
            screen.profile.phone,
            crate::helpers::format_phone_number("5551234567")
        );
        assert_eq!(screen.profile.phone, "(555) 123-4567");
    }

    #[test]
    fn test_apply_profile_leaves_empty_phone_alone() {
        let mut screen = ProfileScreen::new();
        let mut profile = raw_profile();
        profile.phone = "   ".into();
        screen.apply_profile(Some(profile));
        assert_eq!(screen.profile.phone, "");
    }

    #[test]
    fn test_apply_profile_masks_security_answer() {
        let mut screen = ProfileScreen::new();
        screen.apply_profile(Some(raw_profile()));
        assert_eq!(screen.security_answer_masked, "********");
        assert_eq!(
            screen.security_answer_masked.chars().count(),
            "goldfish".chars().count()
        );
    }

    #[test]
    fn test_apply_profile_empty_response_keeps_previous() {
        let mut screen = ProfileScreen::new();
        screen.apply_profile(Some(raw_profile()));
        let before = screen.profile.clone();

        screen.loading = true;
        screen.apply_profile(None);
        assert_eq!(screen.profile, before);
        assert!(!screen.loading);
    }

    #[test]
    fn test_load_failed_clears_only_loading() {
        let mut screen = ProfileScreen::new();
        screen.apply_profile(Some(raw_profile()));
        let before = screen.clone();

        screen.loading = true;
        screen.load_failed();
        assert_eq!(screen, before);
    }

    #[test]
    fn test_failed_allowed_check_after_disconnect_keeps_flags() {
        // Guardian with one linked student: card offered, nothing connected.
        let mut screen = ProfileScreen::new();
        screen.init_roles(AccessLevel::Guardian, true);
        screen.apply_student_records(vec![student("Riley")]);
        screen.apply_connection_allowed(true, AccessLevel::Guardian);
        let before = screen.clone();

        // The records were deleted but the allowed re-check failed. The
        // chain ends without a roster re-resolve, so the empty roster never
        // flips `connected` and the card keeps its prior state.
        screen.loading = true;
        screen.load_failed();

        assert_eq!(screen, before);
        assert!(!screen.connected);
        assert!(screen.show_cafeteria_card);
        assert!(!screen.student_connected);
        assert_eq!(screen.student_list.len(), 1);
    }

    #[test]
    fn test_connected_follows_empty_roster() {
        let mut screen = ProfileScreen::new();
        screen.apply_student_records(Vec::new());
        assert!(screen.connected);

        screen.apply_student_records(vec![student("Riley")]);
        assert!(!screen.connected);
        assert_eq!(screen.student_list.len(), 1);
    }

    #[test]
    fn test_matrix_allowed_and_connected_shows_connected_card() {
        let mut screen = ProfileScreen::new();
        screen.apply_student_records(Vec::new());
        screen.apply_connection_allowed(true, AccessLevel::Guardian);
        assert!(screen.is_cafeteria_account_connection_allowed);
        assert!(screen.show_cafeteria_card);
        assert!(screen.student_connected);
    }

    #[test]
    fn test_matrix_allowed_and_not_connected_offers_connect() {
        let mut screen = ProfileScreen::new();
        screen.apply_student_records(vec![student("Riley")]);
        screen.apply_connection_allowed(true, AccessLevel::Guardian);
        assert!(screen.show_cafeteria_card);
        assert!(!screen.student_connected);
    }

    #[test]
    fn test_matrix_not_allowed_and_not_connected_keeps_card() {
        let mut screen = ProfileScreen::new();
        screen.apply_student_records(vec![student("Riley")]);
        screen.apply_connection_allowed(false, AccessLevel::Guardian);
        assert!(screen.show_cafeteria_card);
        assert!(!screen.student_connected);
    }

    #[test]
    fn test_matrix_not_allowed_and_connected_hides_card() {
        let mut screen = ProfileScreen::new();
        screen.apply_student_records(Vec::new());
        screen.apply_connection_allowed(false, AccessLevel::Guardian);
        assert!(!screen.show_cafeteria_card);
        assert!(!screen.student_connected);
    }

    #[test]
    fn test_matrix_ignores_non_guardian_levels() {
        for level in [AccessLevel::DistrictAdmin, AccessLevel::Other] {
            let mut screen = ProfileScreen::new();
            screen.apply_student_records(Vec::new());
            screen.apply_connection_allowed(true, level);
            assert!(!screen.show_cafeteria_card);
            assert!(!screen.student_connected);
        }
    }

    #[test]
    fn test_student_details_with_name_marks_connected() {
        let mut screen = ProfileScreen::new();
        screen.loading = true;
        screen.apply_student_details(Some(StudentDetails {
            name: "Riley Reyes".into(),
            student_number: "100042".into(),
            school: None,
        }));
        assert!(screen.student_connected);
        assert!(!screen.loading);
    }

    #[test]
    fn test_student_details_empty_leaves_flag() {
        let mut screen = ProfileScreen::new();
        screen.loading = true;
        screen.apply_student_details(None);
        assert!(!screen.student_connected);
        assert!(!screen.loading);

        screen.apply_student_details(Some(StudentDetails::default()));
        assert!(!screen.student_connected);
    }

    #[test]
    fn test_disconnect_clears_connection_flags() {
        let mut screen = ProfileScreen::new();
        screen.apply_student_records(Vec::new());
        screen.apply_connection_allowed(true, AccessLevel::Guardian);
        assert!(screen.student_connected);

        screen.apply_disconnect(true, AccessLevel::Guardian);
        assert!(!screen.connected);
        assert!(!screen.student_connected);
        // Card stays while the district still allows linking.
        assert!(screen.show_cafeteria_card);
    }

    #[test]
    fn test_disconnect_hides_card_when_linking_disallowed() {
        let mut screen = ProfileScreen::new();
        screen.show_cafeteria_card = true;
        screen.apply_disconnect(false, AccessLevel::Guardian);
        assert!(!screen.show_cafeteria_card);
        assert!(!screen.is_cafeteria_account_connection_allowed);
    }

    #[test]
    fn test_disconnect_keeps_card_for_non_guardians() {
        let mut screen = ProfileScreen::new();
        screen.show_cafeteria_card = true;
        screen.apply_disconnect(false, AccessLevel::DistrictAdmin);
        assert!(screen.show_cafeteria_card);
    }

    #[test]
    fn test_push_load_brackets_flags() {
        let mut screen = ProfileScreen::new();
        assert!(screen.notifications_disabled);

        screen.begin_push_load();
        assert!(screen.notifications_loading);
        assert!(screen.notifications_disabled);

        screen.apply_push_settings(Some(PushNotificationSettings {
            send_message_alerts: true,
            ..Default::default()
        }));
        assert!(!screen.notifications_loading);
        assert!(!screen.notifications_disabled);
        assert!(screen.enable_push_notifications);
    }

    #[test]
    fn test_push_empty_response_defaults_all_false() {
        let mut screen = ProfileScreen::new();
        screen.begin_push_load();
        screen.apply_push_settings(None);
        assert_eq!(screen.push_settings, PushNotificationSettings::default());
        assert!(!screen.enable_push_notifications);
    }

    #[test]
    fn test_push_aggregate_tracks_each_flag() {
        for kind in AlertKind::ALL {
            let mut screen = ProfileScreen::new();
            let mut settings = PushNotificationSettings::default();
            settings.set(kind, true);
            screen.apply_push_settings(Some(settings));
            assert!(screen.enable_push_notifications, "{kind:?}");
        }
    }

    #[test]
    fn test_push_load_failure_keeps_toggles_disabled() {
        let mut screen = ProfileScreen::new();
        screen.apply_push_settings(Some(PushNotificationSettings {
            send_autopay_alerts: true,
            ..Default::default()
        }));
        let settings_before = screen.push_settings;

        screen.begin_push_load();
        screen.push_load_failed();
        assert!(!screen.notifications_loading);
        assert!(screen.notifications_disabled);
        assert_eq!(screen.push_settings, settings_before);
        assert!(screen.enable_push_notifications);
    }

    #[test]
    fn test_set_alert_recomputes_aggregate() {
        let mut screen = ProfileScreen::new();
        screen.set_alert(AlertKind::LowBalance, true);
        assert!(screen.enable_push_notifications);

        screen.set_alert(AlertKind::LowBalance, false);
        assert!(!screen.enable_push_notifications);
    }

    #[test]
    fn test_set_all_alerts_enables_everything() {
        let mut screen = ProfileScreen::new();
        screen.set_all_alerts(true);
        assert!(screen.enable_push_notifications);
        assert!(AlertKind::ALL.iter().all(|k| screen.push_settings.get(*k)));

        screen.set_all_alerts(false);
        assert!(!screen.enable_push_notifications);
        assert!(!screen.push_settings.any_enabled());
    }

    #[test]
    fn test_init_roles() {
        let mut screen = ProfileScreen::new();
        screen.init_roles(AccessLevel::Guardian, false);
        assert!(screen.is_student);
        assert!(!screen.is_super_admin);

        screen.init_roles(AccessLevel::Guardian, true);
        assert!(!screen.is_student);

        screen.init_roles(AccessLevel::DistrictAdmin, true);
        assert!(screen.is_super_admin);
        assert!(!screen.is_student);
    }
}
