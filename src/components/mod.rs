pub mod app;
pub mod contact_modal;
pub mod dashboard;
pub mod login_screen;
pub mod register_screen;
pub mod toast;

pub use app::App;
pub use contact_modal::ContactModal;
pub use dashboard::Dashboard;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use toast::Toast;
