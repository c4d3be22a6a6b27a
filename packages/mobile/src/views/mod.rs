mod home;
pub use home::Home;

mod user_settings;
pub use user_settings::UserSettings;
