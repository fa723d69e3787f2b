use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_interest_toggle::use_interest_toggle;
use api::interest::InterestSnapshot;
use api::interest::ItemId;
use dioxus::prelude::*;

/// Star toggle for one listing. Each instance owns its own state machine.
///
/// `on_changed` fires once the server has accepted a toggle.
#[component]
pub fn InterestButton(
    item_id: ItemId,
    interest: InterestSnapshot,
    on_changed: Option<EventHandler>,
) -> Element {
    let handle = use_interest_toggle(item_id, interest);

    let is_starred = handle.is_starred();
    let count = handle.count();
    let is_pending = handle.is_pending();
    let (glyph, label) = if is_starred {
        ("★", "Remove from favorites")
    } else {
        ("☆", "Add to favorites")
    };

    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: !is_starred,
            disabled: is_pending,
            busy: is_pending,
            label: label.to_string(),
            on_click: move |_| handle.toggle(on_changed),
            "{glyph} {count}"
        }
    }
}
