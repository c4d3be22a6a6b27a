//! This crate contains all shared UI for the Relay workspace.

pub mod components;
pub mod theme;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod user;
pub use user::UserInfo;
