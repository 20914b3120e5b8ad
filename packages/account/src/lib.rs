pub mod helpers;
pub mod models;
pub mod screen;

pub use models::{
    AccessLevel, AlertKind, Profile, PushNotificationSettings, SessionContext, StudentDetails,
    StudentRecord,
};
pub use screen::ProfileScreen;
