use dioxus::prelude::*;

use ui::views::UserSettingsScreen;

/// Route wrapper: the screen itself only knows how to ask for "back",
/// the navigator stays here.
#[component]
pub fn UserSettings() -> Element {
    let nav = use_navigator();

    rsx! {
        UserSettingsScreen {
            on_back: move |_| {
                nav.go_back();
            },
        }
    }
}
