//! Role dashboards. Their contents are supplied by the back office; this
//! crate only decides who may open them.

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::navigation::entry_for;
use crate::navigation::MARKET_NAV;
use dioxus::prelude::*;

#[component]
fn RoleDashboard(target: &'static str, heading: &'static str, blurb: &'static str) -> Element {
    let role = use_context::<AppState>().identity.role;
    let allowed = entry_for(MARKET_NAV, target).is_some_and(|entry| entry.allows(role));

    if !allowed {
        return rsx! {
            EmptyState {
                title: "Not available".to_string(),
                description: Some(format!("{heading} is not available to the {role} role.")),
                icon: Some("⛔".to_string()),
            }
        };
    }

    rsx! {
        Card {
            h3 { "{heading}" }
            p { "{blurb}" }
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        RoleDashboard {
            target: "/admin/users",
            heading: "Users",
            blurb: "Accounts, roles and verification status.",
        }
    }
}

#[component]
pub fn AdminListings() -> Element {
    rsx! {
        RoleDashboard {
            target: "/admin/listings",
            heading: "Moderation",
            blurb: "Listings waiting for review.",
        }
    }
}

#[component]
pub fn SellerProducts() -> Element {
    rsx! {
        RoleDashboard {
            target: "/seller/products",
            heading: "My Products",
            blurb: "Businesses you have listed for sale.",
        }
    }
}

#[component]
pub fn SellerOrders() -> Element {
    rsx! {
        RoleDashboard {
            target: "/seller/orders",
            heading: "Sales",
            blurb: "Offers and closed deals for your listings.",
        }
    }
}

#[component]
pub fn BuyerOrders() -> Element {
    rsx! {
        RoleDashboard {
            target: "/buyer/orders",
            heading: "Orders",
            blurb: "Offers you have made and their status.",
        }
    }
}
