use crate::components::empty_state::EmptyState;
use crate::components::listing_card::ListingCard;
use crate::components::pico::Card;
use dioxus::prelude::*;

#[component]
pub fn Favorites() -> Element {
    let mut favorites = use_resource(move || async move { api::favorites().await });

    rsx! {
        match &*favorites.read() {
            None => rsx! {
                Card {
                    h3 { "Favorites" }
                    progress {}
                }
            },
            Some(Ok(items)) if items.is_empty() => rsx! {
                EmptyState {
                    title: "Nothing saved yet".to_string(),
                    description: Some("Star a listing to keep it here.".to_string()),
                    icon: Some("☆".to_string()),
                }
            },
            Some(Ok(items)) => rsx! {
                div {
                    class: "listing-grid",
                    for listing in items.iter().cloned() {
                        ListingCard {
                            key: "{listing.id}",
                            listing,
                            on_interest_changed: move |_| favorites.restart(),
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load favorites: {e}" }
                    button {
                        onclick: move |_| favorites.restart(),
                        "Retry"
                    }
                }
            },
        }
    }
}
