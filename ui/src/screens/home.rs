use crate::app_state::AppState;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let app_state = use_context::<AppState>();
    let identity = &app_state.identity;
    let greeting = if identity.is_authenticated() {
        format!("Signed in as {} ({})", identity.id, identity.role)
    } else {
        "Browsing as a guest".to_string()
    };

    rsx! {
        Card {
            h2 { "Buy and sell established businesses" }
            p { "{greeting}" }
            Grid {
                div {
                    h4 { "Buyers" }
                    p { "Save listings you like and follow them from your favorites." }
                }
                div {
                    h4 { "Sellers" }
                    p { "List your business and track interest from qualified buyers." }
                }
            }
        }
    }
}
