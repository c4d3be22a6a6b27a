use dioxus::prelude::*;
use views::{Home, UserSettings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/settings")]
    UserSettings {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // No sign-in flow is wired into the mobile shell yet; screens read the
    // profile through ui::use_auth() and fall back to empty defaults.
    rsx! {
        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}
