//! The state machine behind one "interesting" toggle.
//!
//! Local state is never flipped ahead of the server: a gesture moves the
//! machine to `Pending`, and only the server's answer (or the absence of one)
//! decides what is shown afterwards.

use crate::notifications::Notice;
use crate::notifications::Severity;
use api::interest::InterestSnapshot;
use api::interest::ItemId;
use api::interest::ToggleAck;
use api::ApiError;
use thiserror::Error;

pub const ADDED_NOTICE: &str = "Added to your favorites.";
pub const REMOVED_NOTICE: &str = "Removed from your favorites.";
pub const FAILED_NOTICE: &str = "Could not update your favorites. Please try again.";

/// Everything that can stop or degrade a toggle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("authentication required")]
    NotAuthenticated,
    #[error("a toggle is already in flight")]
    AlreadyPending,
    #[error("toggle control is no longer mounted")]
    Detached,
    #[error("remote toggle failed: {0}")]
    RemoteFailure(String),
}

/// Identifies one accepted gesture so that its reply can be matched up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// How an accepted gesture ended.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum ToggleOutcome {
    /// The server's state was applied as-is.
    Applied,
    /// The server acknowledged without data, and the previous flag was
    /// flipped locally. A success reply with a missing payload always ends
    /// here rather than as an error.
    Flipped,
    /// The call failed and the pre-gesture state was restored.
    RolledBack(ToggleError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleState {
    Idle(InterestSnapshot),
    Pending {
        previous: InterestSnapshot,
        ticket: Ticket,
    },
    /// Like `Idle`, but remembers how the last gesture ended.
    Settled {
        current: InterestSnapshot,
        outcome: ToggleOutcome,
    },
}

/// The result of applying a reply, for the caller to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: ToggleOutcome,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterestToggle {
    item_id: ItemId,
    is_authenticated: bool,
    state: ToggleState,
    issued: u64,
    detached: bool,
}

impl InterestToggle {
    pub fn new(item_id: ItemId, initial: InterestSnapshot, is_authenticated: bool) -> Self {
        Self {
            item_id,
            is_authenticated,
            state: ToggleState::Idle(initial),
            issued: 0,
            detached: false,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    /// What the control should show right now. While pending this is the
    /// pre-gesture state.
    pub fn snapshot(&self) -> InterestSnapshot {
        match &self.state {
            ToggleState::Idle(current) => *current,
            ToggleState::Pending { previous, .. } => *previous,
            ToggleState::Settled { current, .. } => *current,
        }
    }

    pub fn is_starred(&self) -> bool {
        self.snapshot().is_starred
    }

    pub fn count(&self) -> u64 {
        self.snapshot().count
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ToggleState::Pending { .. })
    }

    /// Accepts a gesture, or says why it was refused. No state changes on refusal.
    pub fn begin(&mut self) -> Result<Ticket, ToggleError> {
        if self.detached {
            return Err(ToggleError::Detached);
        }
        if !self.is_authenticated {
            return Err(ToggleError::NotAuthenticated);
        }
        if self.is_pending() {
            return Err(ToggleError::AlreadyPending);
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = ToggleState::Pending {
            previous: self.snapshot(),
            ticket,
        };
        Ok(ticket)
    }

    /// Applies the reply to the gesture identified by `ticket`.
    ///
    /// Returns `None` when the reply must be dropped: the control was detached
    /// or the ticket is not the one in flight.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        reply: Result<ToggleAck, ApiError>,
    ) -> Option<Settlement> {
        if self.detached {
            return None;
        }
        let previous = match &self.state {
            ToggleState::Pending {
                previous,
                ticket: in_flight,
            } if *in_flight == ticket => *previous,
            _ => return None,
        };

        let (current, outcome) = match reply {
            Ok(ToggleAck {
                data: Some(confirmed),
            }) => (confirmed, ToggleOutcome::Applied),
            // TODO: treat this as a failure once the endpoint always returns data.
            Ok(ToggleAck { data: None }) => (
                InterestSnapshot::new(!previous.is_starred, previous.count),
                ToggleOutcome::Flipped,
            ),
            Err(e) => (
                previous,
                ToggleOutcome::RolledBack(ToggleError::RemoteFailure(e.to_string())),
            ),
        };

        let notice = match &outcome {
            ToggleOutcome::RolledBack(_) => Notice::new(Severity::Error, FAILED_NOTICE),
            _ if current.is_starred => Notice::new(Severity::Success, ADDED_NOTICE),
            _ => Notice::new(Severity::Success, REMOVED_NOTICE),
        };

        self.state = ToggleState::Settled {
            current,
            outcome: outcome.clone(),
        };
        Some(Settlement { outcome, notice })
    }

    /// Marks the owning view as gone. Any reply still on its way is discarded.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(is_starred: bool, count: u64) -> InterestToggle {
        InterestToggle::new(
            ItemId::from("corner-bakery"),
            InterestSnapshot::new(is_starred, count),
            true,
        )
    }

    #[test]
    fn begin_holds_previous_state_while_pending() {
        let mut t = toggle(false, 3);
        t.begin().unwrap();
        assert!(t.is_pending());
        assert!(!t.is_starred());
        assert_eq!(t.count(), 3);
    }

    #[test]
    fn second_begin_while_pending_is_refused() {
        let mut t = toggle(false, 3);
        let first = t.begin().unwrap();
        assert_eq!(t.begin(), Err(ToggleError::AlreadyPending));
        assert_eq!(
            t.state(),
            &ToggleState::Pending {
                previous: InterestSnapshot::new(false, 3),
                ticket: first,
            }
        );
    }

    #[test]
    fn failure_rolls_back_to_snapshot() {
        let mut t = toggle(false, 3);
        let ticket = t.begin().unwrap();
        let settled = t
            .settle(ticket, Err(anyhow::anyhow!("connection reset")))
            .unwrap();

        assert!(settled.outcome.is_rolled_back());
        assert_eq!(settled.notice.severity, Severity::Error);
        assert_eq!(settled.notice.message, FAILED_NOTICE);
        assert_eq!(t.snapshot(), InterestSnapshot::new(false, 3));
        assert!(!t.is_pending());
    }

    #[test]
    fn success_applies_server_state() {
        let mut t = toggle(false, 3);
        let ticket = t.begin().unwrap();
        let settled = t
            .settle(ticket, Ok(ToggleAck::with(InterestSnapshot::new(true, 4))))
            .unwrap();

        assert_eq!(settled.outcome, ToggleOutcome::Applied);
        assert_eq!(settled.notice, Notice::new(Severity::Success, ADDED_NOTICE));
        assert_eq!(t.snapshot(), InterestSnapshot::new(true, 4));
    }

    #[test]
    fn success_wording_follows_new_state() {
        let mut t = toggle(true, 4);
        let ticket = t.begin().unwrap();
        let settled = t
            .settle(ticket, Ok(ToggleAck::with(InterestSnapshot::new(false, 3))))
            .unwrap();
        assert_eq!(settled.notice.message, REMOVED_NOTICE);
    }

    #[test]
    fn empty_ack_flips_previous_flag_and_keeps_count() {
        let mut t = toggle(false, 3);
        let ticket = t.begin().unwrap();
        let settled = t.settle(ticket, Ok(ToggleAck::empty())).unwrap();

        assert_eq!(settled.outcome, ToggleOutcome::Flipped);
        assert_eq!(settled.notice, Notice::new(Severity::Success, ADDED_NOTICE));
        assert_eq!(t.snapshot(), InterestSnapshot::new(true, 3));
    }

    #[test]
    fn unauthenticated_begin_changes_nothing() {
        let mut t = InterestToggle::new(
            ItemId::from("corner-bakery"),
            InterestSnapshot::new(false, 3),
            false,
        );
        assert_eq!(t.begin(), Err(ToggleError::NotAuthenticated));
        assert_eq!(t.state(), &ToggleState::Idle(InterestSnapshot::new(false, 3)));
    }

    #[test]
    fn settled_accepts_another_gesture() {
        let mut t = toggle(false, 3);
        let first = t.begin().unwrap();
        t.settle(first, Err(anyhow::anyhow!("boom")));
        let second = t.begin().unwrap();
        assert_ne!(first, second);

        t.settle(second, Ok(ToggleAck::with(InterestSnapshot::new(true, 4))));
        assert_eq!(t.snapshot(), InterestSnapshot::new(true, 4));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut t = toggle(false, 3);
        let first = t.begin().unwrap();
        t.settle(first, Ok(ToggleAck::with(InterestSnapshot::new(true, 4))));
        let _second = t.begin().unwrap();

        let late = t.settle(first, Ok(ToggleAck::with(InterestSnapshot::new(false, 9))));
        assert!(late.is_none());
        assert!(t.is_pending());
        assert_eq!(t.snapshot(), InterestSnapshot::new(true, 4));
    }

    #[test]
    fn detached_toggle_discards_late_reply() {
        let mut t = toggle(false, 3);
        let ticket = t.begin().unwrap();
        t.detach();

        let late = t.settle(ticket, Ok(ToggleAck::with(InterestSnapshot::new(true, 4))));
        assert!(late.is_none());
        assert_eq!(t.begin(), Err(ToggleError::Detached));
    }
}
