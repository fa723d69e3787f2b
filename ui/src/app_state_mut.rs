//! Defines the mutable, reactive state for the application's UI.

use crate::notifications::ToastQueue;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the core,
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Notices currently on screen.
    pub toasts: Signal<ToastQueue>,
}
