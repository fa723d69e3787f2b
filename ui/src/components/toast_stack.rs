use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::notifications::Toast;
use dioxus::prelude::*;
use std::time::Duration;
use web_time::Instant;

const EXPIRY_TICK: Duration = Duration::from_millis(250);

/// Renders pending notices in a corner of the screen and drops each one once
/// its deadline passes.
#[component]
pub fn ToastStack() -> Element {
    let mut queue = use_context::<AppStateMut>().toasts;

    use_future(move || async move {
        loop {
            compat::sleep(EXPIRY_TICK).await;
            let now = Instant::now();
            if queue.peek().has_expired(now) {
                queue.write().expire(now);
            }
        }
    });

    rsx! {
        div {
            class: "toast-stack",
            "aria-live": "polite",
            for toast in queue.read().toasts().iter().cloned() {
                ToastItem {
                    key: "{toast.id}",
                    toast,
                }
            }
        }
    }
}

/// One notice. Clicking it dismisses it early.
#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut queue = use_context::<AppStateMut>().toasts;
    let id = toast.id;

    rsx! {
        article {
            class: "toast",
            "data-severity": toast.notice.severity.as_str(),
            role: if toast.notice.severity.is_error() { "alert" } else { "status" },
            onclick: move |_| queue.write().dismiss(id),
            "{toast.notice.message}"
        }
    }
}
