use super::use_notifier::use_notifier;
use crate::app_state::AppState;
use crate::interest::driver::InterestDriver;
use crate::interest::driver::ServerInterestRemote;
use crate::interest::machine::InterestToggle;
use crate::notifications::LocationRedirect;
use crate::notifications::Notifier;
use api::interest::InterestSnapshot;
use api::interest::ItemId;
use dioxus::prelude::*;

/// A mounted interest control, bound to one item for the signed-in identity.
#[derive(Clone)]
pub struct InterestHandle {
    state: Signal<InterestToggle>,
    notifier: Notifier,
    login_path: String,
}

impl InterestHandle {
    pub fn is_starred(&self) -> bool {
        self.state.read().is_starred()
    }

    pub fn count(&self) -> u64 {
        self.state.read().count()
    }

    pub fn is_pending(&self) -> bool {
        self.state.read().is_pending()
    }

    /// Starts a toggle in the background. Ignored while one is in flight.
    ///
    /// `on_changed` runs after the server confirmed a new interest state.
    pub fn toggle(&self, on_changed: Option<EventHandler>) {
        let driver = InterestDriver::new(
            ServerInterestRemote,
            self.notifier,
            LocationRedirect,
            self.login_path.clone(),
        );
        let slot = self.state;
        spawn(async move {
            let report = driver.toggle(slot).await;
            if let Some(on_changed) = on_changed.filter(|_| report.changed_interest()) {
                on_changed.call(());
            }
        });
    }
}

/// Creates the state machine for one item and detaches it when the
/// component unmounts, so replies arriving afterwards are dropped.
pub fn use_toggle_state(
    item_id: ItemId,
    initial: InterestSnapshot,
    is_authenticated: bool,
) -> Signal<InterestToggle> {
    let state = use_signal(move || InterestToggle::new(item_id, initial, is_authenticated));

    use_drop(move || {
        let mut state = state;
        if let Ok(mut toggle) = state.try_write() {
            toggle.detach();
        };
    });

    state
}

pub fn use_interest_toggle(item_id: ItemId, initial: InterestSnapshot) -> InterestHandle {
    let app_state = use_context::<AppState>();
    let is_authenticated = app_state.identity.is_authenticated();

    InterestHandle {
        state: use_toggle_state(item_id, initial, is_authenticated),
        notifier: use_notifier(),
        login_path: app_state.prefs.login_path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::driver::InterestRemote;
    use crate::interest::driver::ToggleReport;
    use crate::interest::driver::ToggleSlot;
    use crate::notifications::Notice;
    use crate::notifications::NotificationSink;
    use crate::notifications::RedirectSink;
    use api::interest::ToggleAck;
    use api::ApiError;
    use dioxus::dioxus_core::RuntimeGuard;
    use dioxus::dioxus_core::VirtualDom;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    type Captured = Rc<RefCell<Option<Signal<InterestToggle>>>>;

    #[derive(Props, Clone)]
    struct ToggleHolderProps {
        captured: Captured,
    }

    impl PartialEq for ToggleHolderProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.captured, &other.captured)
        }
    }

    #[allow(non_snake_case)]
    fn ToggleHolder(props: ToggleHolderProps) -> Element {
        let state = use_toggle_state(
            ItemId::from("bike-repair"),
            InterestSnapshot::new(false, 3),
            true,
        );
        props.captured.borrow_mut().get_or_insert(state);
        rsx! {}
    }

    fn mounted() -> (VirtualDom, Signal<InterestToggle>) {
        let captured: Captured = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(
            ToggleHolder,
            ToggleHolderProps {
                captured: captured.clone(),
            },
        );
        dom.rebuild_in_place();
        let state = captured.borrow().expect("holder rendered");
        (dom, state)
    }

    /// Holds every call until released, then confirms a star.
    struct HeldRemote(RefCell<Option<oneshot::Receiver<()>>>);

    impl InterestRemote for HeldRemote {
        async fn toggle(&self, _item_id: &ItemId) -> Result<ToggleAck, ApiError> {
            let gate = self.0.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(ToggleAck::with(InterestSnapshot::new(true, 4)))
        }
    }

    #[derive(Default)]
    struct Sinks {
        notices: RefCell<Vec<Notice>>,
        redirects: RefCell<Vec<String>>,
    }

    impl NotificationSink for &Sinks {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    impl RedirectSink for &Sinks {
        fn redirect(&self, target: &str) {
            self.redirects.borrow_mut().push(target.to_string());
        }
    }

    #[test]
    fn signal_slot_reports_none_once_its_owner_is_gone() {
        let (dom, mut slot) = mounted();
        assert_eq!(dom.in_runtime(|| slot.update(|toggle| toggle.count())), Some(3));

        let _runtime = RuntimeGuard::new(dom.runtime());
        drop(dom);

        assert_eq!(slot.update(|toggle| toggle.count()), None);
    }

    #[tokio::test]
    async fn unmount_while_pending_discards_the_reply() {
        let (dom, slot) = mounted();
        let _runtime = RuntimeGuard::new(dom.runtime());
        let (release, gate) = oneshot::channel();
        let sinks = Sinks::default();
        let driver = InterestDriver::new(
            HeldRemote(RefCell::new(Some(gate))),
            &sinks,
            &sinks,
            "/login",
        );

        let (report, ()) = tokio::join!(driver.toggle(slot), async move {
            drop(dom);
            let _ = release.send(());
        });

        assert_eq!(report, ToggleReport::Discarded);
        assert!(sinks.notices.borrow().is_empty());
        assert!(sinks.redirects.borrow().is_empty());
    }
}
