use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::theme::{color, font, spacing};
use ui::use_auth;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let greeting = match auth().user {
        Some(user) => format!("Signed in as {}", user.display_name()),
        None => "Not signed in".to_string(),
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; background-color: {color::BACKGROUND}; padding: {spacing::LG}; box-sizing: border-box;",

            h1 {
                style: "color: {color::TEXT_PRIMARY}; font-size: {font::SIZE_LG}; font-weight: {font::WEIGHT_SEMIBOLD}; margin: 0 0 {spacing::XS} 0;",
                "Relay"
            }
            p {
                style: "color: {color::TEXT_SECONDARY}; font-size: {font::SIZE_MD}; margin: 0 0 {spacing::LG} 0;",
                "{greeting}"
            }

            div {
                style: "width: 100%; max-width: 420px;",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        nav.push(Route::UserSettings {});
                    },
                    "Settings"
                }
            }
        }
    }
}
