use crate::components::empty_state::EmptyState;
use crate::components::listing_card::ListingCard;
use crate::components::pico::Card;
use dioxus::prelude::*;

#[component]
pub fn Listings() -> Element {
    let mut listings = use_resource(move || async move { api::listings().await });

    rsx! {
        match &*listings.read() {
            None => rsx! {
                Card {
                    h3 { "Listings" }
                    p { "Loading listings..." }
                    progress {}
                }
            },
            Some(Ok(items)) if items.is_empty() => rsx! {
                EmptyState {
                    title: "No listings yet".to_string(),
                    description: Some("Businesses for sale will show up here.".to_string()),
                    icon: Some("▤".to_string()),
                }
            },
            Some(Ok(items)) => rsx! {
                div {
                    class: "listing-grid",
                    for listing in items.iter().cloned() {
                        ListingCard {
                            key: "{listing.id}",
                            listing,
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load listings: {e}" }
                    button {
                        onclick: move |_| listings.restart(),
                        "Retry"
                    }
                }
            },
        }
    }
}
