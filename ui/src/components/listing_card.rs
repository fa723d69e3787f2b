use crate::components::interest_button::InterestButton;
use crate::components::pico::Card;
use api::listing::Listing;
use dioxus::prelude::*;

#[component]
pub fn ListingCard(listing: Listing, on_interest_changed: Option<EventHandler>) -> Element {
    let price = listing.display_price();

    rsx! {
        Card {
            header {
                strong { "{listing.title}" }
            }
            p {
                small { "{listing.category} · sold by {listing.seller}" }
            }
            p { "{price}" }
            footer {
                InterestButton {
                    item_id: listing.id.clone(),
                    interest: listing.interest,
                    on_changed: on_interest_changed,
                }
            }
        }
    }
}
