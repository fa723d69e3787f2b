//! Runs one toggle gesture from click to notification.

use super::machine::InterestToggle;
use super::machine::ToggleError;
use super::machine::ToggleOutcome;
use crate::notifications::Notice;
use crate::notifications::NotificationSink;
use crate::notifications::RedirectSink;
use crate::notifications::Severity;
use api::interest::ItemId;
use api::interest::ToggleAck;
use api::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use std::cell::RefCell;
use std::rc::Rc;

pub const SIGN_IN_NOTICE: &str = "Sign in to save listings to your favorites.";

/// The remote mutation that flips one identity's interest in one item.
pub trait InterestRemote {
    async fn toggle(&self, item_id: &ItemId) -> Result<ToggleAck, ApiError>;
}

/// Calls the `toggle_interest` server function.
#[derive(Clone, Copy, Default)]
pub struct ServerInterestRemote;

impl InterestRemote for ServerInterestRemote {
    async fn toggle(&self, item_id: &ItemId) -> Result<ToggleAck, ApiError> {
        api::toggle_interest(item_id.clone()).await
    }
}

/// Somewhere an `InterestToggle` lives.
///
/// `update` returns `None` once the owner is gone, so a late reply has
/// nothing to land on.
pub trait ToggleSlot {
    fn update<T>(&mut self, f: impl FnOnce(&mut InterestToggle) -> T) -> Option<T>;
}

impl ToggleSlot for Signal<InterestToggle> {
    fn update<T>(&mut self, f: impl FnOnce(&mut InterestToggle) -> T) -> Option<T> {
        match self.try_write() {
            Ok(mut toggle) => Some(f(&mut toggle)),
            Err(_) => None,
        }
    }
}

impl ToggleSlot for Rc<RefCell<InterestToggle>> {
    fn update<T>(&mut self, f: impl FnOnce(&mut InterestToggle) -> T) -> Option<T> {
        let mut toggle = self.try_borrow_mut().ok()?;
        Some(f(&mut toggle))
    }
}

/// What happened to one call of [`InterestDriver::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleReport {
    /// Refused before any remote call.
    Rejected(ToggleError),
    Settled(ToggleOutcome),
    /// The reply arrived after the owner went away and was dropped.
    Discarded,
}

impl ToggleReport {
    /// True when the server took the gesture, so any list built from the old
    /// interest state is now stale.
    pub fn changed_interest(&self) -> bool {
        matches!(
            self,
            ToggleReport::Settled(ToggleOutcome::Applied | ToggleOutcome::Flipped)
        )
    }
}

/// Wires an `InterestToggle` to the remote call and the user-facing sinks.
#[derive(Clone)]
pub struct InterestDriver<R, N, V> {
    remote: R,
    notifier: N,
    redirect: V,
    login_path: String,
}

impl<R, N, V> InterestDriver<R, N, V>
where
    R: InterestRemote,
    N: NotificationSink,
    V: RedirectSink,
{
    pub fn new(remote: R, notifier: N, redirect: V, login_path: impl Into<String>) -> Self {
        Self {
            remote,
            notifier,
            redirect,
            login_path: login_path.into(),
        }
    }

    /// Handles one gesture. At most one remote call is made, and none when the
    /// gesture is refused.
    pub async fn toggle<S: ToggleSlot>(&self, mut slot: S) -> ToggleReport {
        let begun = slot.update(|toggle| {
            toggle
                .begin()
                .map(|ticket| (toggle.item_id().clone(), ticket))
        });

        let (item_id, ticket) = match begun {
            Some(Ok(accepted)) => accepted,
            Some(Err(ToggleError::NotAuthenticated)) => {
                self.notifier
                    .notify(Notice::new(Severity::Info, SIGN_IN_NOTICE));
                self.redirect.redirect(&self.login_path);
                return ToggleReport::Rejected(ToggleError::NotAuthenticated);
            }
            Some(Err(e)) => {
                debug!("toggle gesture ignored: {}", e);
                return ToggleReport::Rejected(e);
            }
            None => return ToggleReport::Rejected(ToggleError::Detached),
        };

        let reply = self.remote.toggle(&item_id).await;
        if let Err(e) = &reply {
            warn!("toggling interest in {} failed: {}", item_id, e);
        }

        match slot.update(|toggle| toggle.settle(ticket, reply)).flatten() {
            Some(settlement) => {
                if settlement.outcome.is_flipped() {
                    warn!("interest in {} acknowledged without data", item_id);
                }
                self.notifier.notify(settlement.notice);
                ToggleReport::Settled(settlement.outcome)
            }
            None => {
                debug!("late toggle reply for {} discarded", item_id);
                ToggleReport::Discarded
            }
        }
    }
}
