use crate::app_state::AppState;
use crate::components::pico::Card;
use dioxus::prelude::*;

/// The authentication entry point. Sessions are issued outside this app, so
/// this page only explains how the current identity is configured.
#[component]
pub fn Login() -> Element {
    let app_state = use_context::<AppState>();
    let identity = &app_state.identity;

    rsx! {
        Card {
            h3 { "Sign in" }
            if identity.is_authenticated() {
                p { "You are signed in as {identity.id} ({identity.role})." }
            } else {
                p { "You are browsing as a guest. Sign in to save listings and reach your dashboard." }
                p {
                    small {
                        "Set MARKET_USER_ID and MARKET_ROLE (buyer, seller or admin) before starting the server."
                    }
                }
            }
        }
    }
}
