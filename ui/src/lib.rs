// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
pub mod interest;
pub mod navigation;
pub mod notifications;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use notifications::ToastQueue;
use components::nav_menu::NavMenu;
use components::pico::Container;
use components::toast_stack::ToastStack;
use screens::dashboards::AdminListings;
use screens::dashboards::AdminUsers;
use screens::dashboards::BuyerOrders;
use screens::dashboards::SellerOrders;
use screens::dashboards::SellerProducts;
use screens::favorites::Favorites;
use screens::home::Home;
use screens::listings::Listings;
use screens::login::Login;
use screens::not_found::NotFound;

/// Every page of the app. Paths here must match the targets in `navigation::MARKET_NAV`.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/listings")]
        Listings {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/listings")]
        AdminListings {},
        #[route("/seller/products")]
        SellerProducts {},
        #[route("/seller/orders")]
        SellerOrders {},
        #[route("/buyer/orders")]
        BuyerOrders {},
        #[route("/buyer/favorites")]
        Favorites {},
        #[route("/login")]
        Login {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Header with the role-scoped menu, the current page, and notices.
#[component]
fn Shell() -> Element {
    let location = use_route::<Route>().to_string();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Marketplace" }
                            }
                        }
                        ul {
                            li {
                                NavMenu {
                                    location,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    Outlet::<Route> {}
                }
            }
            ToastStack {}
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu ul { flex-wrap: wrap; }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- CONTENT AREA --- */
    .app-main-container .content { padding: 0 1rem; }

    .listing-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
        gap: 1rem;
    }

    /* --- NOTICES --- */
    .toast-stack {
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        z-index: 200;
        max-width: 22rem;
    }
    .toast { margin: 0; cursor: pointer; border-left: 4px solid var(--pico-primary); }
    .toast[data-severity="success"] { border-left-color: #2e9d5b; }
    .toast[data-severity="error"] { border-left-color: #c62828; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        // call the server apis concurrently
        let (identity_result, prefs_result) =
            tokio::join!(api::current_identity(), api::get_user_prefs());

        let identity = identity_result?;
        let user_prefs = prefs_result?;

        dioxus_logger::tracing::info!("identity: {:?}, prefs: {:?}", identity, user_prefs);

        Ok::<_, api::ApiError>((identity, user_prefs))
    })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok((identity, prefs))) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(identity.clone(), prefs.clone()),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| AppStateMut { toasts });

    rsx! {
        Router::<Route> {}
    }
}
