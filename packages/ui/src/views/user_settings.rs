//! Settings screen for the signed-in user: display name, email address,
//! and the notification preference.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Switch};
use crate::icons::FaBell;
use crate::theme::{color, spacing};
use crate::{use_auth, Icon, UserInfo};

/// Local edit state for the settings form.
///
/// Edits live here for the lifetime of the screen. Nothing is persisted:
/// navigating away discards them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsForm {
    pub display_name: String,
    pub email: String,
    pub notifications_enabled: bool,
    pub saving: bool,
}

impl SettingsForm {
    /// Seed the form from the signed-in profile. A missing user, or a
    /// missing field on it, becomes an empty string.
    pub fn seeded(user: Option<&UserInfo>) -> Self {
        Self {
            display_name: user.and_then(|u| u.name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            notifications_enabled: false,
            saving: false,
        }
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    /// Label for the save control.
    pub fn save_label(&self) -> &'static str {
        if self.saving {
            "Saving..."
        } else {
            "Save"
        }
    }

    /// Submit the form. A no-op while a save is in flight; otherwise hands
    /// control back to the caller's navigation.
    ///
    /// No save backend is wired up yet: nothing sets `saving`, and the
    /// edited fields go nowhere.
    pub fn submit(&self, go_back: impl FnOnce()) {
        if self.saving {
            return;
        }
        go_back();
    }
}

/// Settings form for the signed-in user.
///
/// `on_back` is the only navigation this screen performs; the router stays
/// with the caller. The form is seeded from `use_auth()` once, on mount.
#[component]
pub fn UserSettingsScreen(on_back: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut form = use_signal(move || SettingsForm::seeded(auth.peek().user.as_ref()));

    let handle_save = move |_| {
        form.peek().submit(|| {
            tracing::debug!("leaving settings; edits are not persisted");
            on_back.call(());
        });
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; background-color: {color::BACKGROUND}; padding: {spacing::LG}; box-sizing: border-box;",

            div {
                style: "width: 100%; max-width: 420px;",

                Label { html_for: "display-name", "Change display name" }
                Input {
                    id: "display-name",
                    placeholder: "Display name",
                    value: form().display_name,
                    oninput: move |evt: FormEvent| form.write().display_name = evt.value(),
                }

                Label { html_for: "email", "Change email address" }
                Input {
                    id: "email",
                    placeholder: "Email address",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                div {
                    style: "display: flex; align-items: center; gap: {spacing::XS};",
                    Icon {
                        width: 16,
                        height: 16,
                        fill: "{color::TEXT_SECONDARY}",
                        icon: FaBell,
                    }
                    Label { html_for: "notifications", "Turn on notifications?" }
                }
                Switch {
                    id: "notifications",
                    checked: form().notifications_enabled,
                    onchange: move |_| form.write().toggle_notifications(),
                }

                div {
                    style: "margin-top: {spacing::MD};",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: form().saving,
                        onclick: handle_save,
                        {form().save_label()}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            avatar_url: None,
        }
    }

    #[test]
    fn seeds_fields_from_profile() {
        let form = SettingsForm::seeded(Some(&ada()));
        assert_eq!(form.display_name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert!(!form.notifications_enabled);
        assert!(!form.saving);
        assert_eq!(form.save_label(), "Save");
    }

    #[test]
    fn seeds_empty_without_profile() {
        let form = SettingsForm::seeded(None);
        assert_eq!(form.display_name, "");
        assert_eq!(form.email, "");
        assert!(!form.notifications_enabled);
    }

    #[test]
    fn seeds_empty_display_name_when_name_is_unset() {
        let user = UserInfo { name: None, ..ada() };
        let form = SettingsForm::seeded(Some(&user));
        assert_eq!(form.display_name, "");
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn toggle_twice_returns_to_off() {
        let mut form = SettingsForm::seeded(None);
        form.toggle_notifications();
        assert!(form.notifications_enabled);
        form.toggle_notifications();
        assert!(!form.notifications_enabled);
    }

    #[test]
    fn submit_goes_back_exactly_once() {
        let form = SettingsForm::seeded(Some(&ada()));
        let mut calls = 0;
        form.submit(|| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn submit_is_gated_while_saving() {
        let mut form = SettingsForm::seeded(None);
        form.saving = true;
        let mut calls = 0;
        form.submit(|| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(form.save_label(), "Saving...");
    }
}
