use crate::app_state::AppState;
use crate::navigation::resolve;
use crate::navigation::MARKET_NAV;
use dioxus::prelude::*;

/// The menu entries the signed-in role may see, with the current one highlighted.
#[component]
pub fn NavMenu(location: String) -> Element {
    let role = use_context::<AppState>().identity.role;
    let nav = navigator();

    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for resolved in resolve(MARKET_NAV, role, &location) {
                    li {
                        key: "{resolved.entry.target}",
                        a {
                            href: resolved.entry.target,
                            class: if resolved.is_active { "active-tab" } else { "" },
                            "aria-current": if resolved.is_active { "page" } else { "false" },
                            onclick: {
                                let target = resolved.entry.target;
                                move |event: MouseEvent| {
                                    event.prevent_default();
                                    nav.push(target);
                                }
                            },
                            if let Some(icon) = resolved.entry.icon {
                                span { class: "nav-icon", "{icon} " }
                            }
                            "{resolved.entry.title}"
                        }
                    }
                }
            }
        }
    }
}
