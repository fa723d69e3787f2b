use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::notifications::Notifier;
use dioxus::prelude::*;
use std::time::Duration;

/// Returns the app-wide notification sink.
pub fn use_notifier() -> Notifier {
    let queue = use_context::<AppStateMut>().toasts;
    let notice_secs = use_context::<AppState>().prefs.notice_secs();
    Notifier {
        queue,
        lifetime: Duration::from_secs(notice_secs),
    }
}
