use crate::components::empty_state::EmptyState;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        EmptyState {
            title: "Page not found".to_string(),
            description: Some(format!("Nothing lives at /{path}.")),
        }
    }
}
