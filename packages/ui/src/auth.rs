//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use crate::UserInfo;

/// Authentication state for the application.
///
/// Read-only from the screens' perspective: whoever owns the sign-in flow
/// provides it, views only read it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the authentication state.
/// Wrap the app with this and hand it the signed-in profile, if any.
#[component]
pub fn AuthProvider(user: Option<UserInfo>, children: Element) -> Element {
    use_context_provider(move || Signal::new(AuthState { user }));

    rsx! {
        {children}
    }
}
