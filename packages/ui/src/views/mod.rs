mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod profile;
pub use profile::ProfileView;
