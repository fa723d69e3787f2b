//! Fire-and-forget user notifications and the redirect seam.

use dioxus::prelude::*;
use std::time::Duration;
use web_time::Instant;

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Pico.css has no toast styling, so each severity maps to a data attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A human-readable message and how loudly to show it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Accepts notices without acknowledging them.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}

/// Performs a full navigation to `target`.
pub trait RedirectSink {
    fn redirect(&self, target: &str);
}

/// A notice currently on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    pub expires_at: Instant,
}

/// The notices on screen, oldest first.
///
/// Ids come from a counter that never goes backwards, so a toast shown after
/// the list empties never takes over the key of one that was already removed.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice, expires_at: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            notice,
            expires_at,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn has_expired(&self, now: Instant) -> bool {
        self.toasts.iter().any(|toast| toast.expires_at <= now)
    }

    /// Drops every toast whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Pushes notices onto the app-wide toast queue.
#[derive(Clone, Copy)]
pub struct Notifier {
    pub(crate) queue: Signal<ToastQueue>,
    pub(crate) lifetime: Duration,
}

impl NotificationSink for Notifier {
    fn notify(&self, notice: Notice) {
        let mut queue = self.queue;
        queue.write().push(notice, Instant::now() + self.lifetime);
    }
}

/// Leaves the app through a full page load, so the target does not have to be
/// one of the router's own routes.
#[derive(Clone, Copy, Default)]
pub struct LocationRedirect;

impl RedirectSink for LocationRedirect {
    fn redirect(&self, target: &str) {
        match location_script(target) {
            Ok(script) => {
                let _ = document::eval(&script);
            }
            Err(e) => dioxus_logger::tracing::warn!("redirect to {} failed: {}", target, e),
        }
    }
}

fn location_script(target: &str) -> Result<String, serde_json::Error> {
    let target = serde_json::to_string(target)?;
    Ok(format!("window.location.assign({target});"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn info(message: &str) -> Notice {
        Notice::new(Severity::Info, message)
    }

    #[test]
    fn ids_are_not_reused_after_the_queue_empties() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        let first = queue.push(info("one"), now);
        queue.dismiss(first);
        assert!(queue.is_empty());

        let second = queue.push(info("two"), now);
        assert_ne!(first, second);
    }

    #[test]
    fn expire_removes_only_toasts_past_their_deadline() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        queue.push(info("old"), now);
        let fresh = queue.push(info("fresh"), now + Duration::from_secs(4));

        assert!(queue.has_expired(now));
        queue.expire(now);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, fresh);
        assert!(!queue.has_expired(now + Duration::from_secs(3)));

        queue.expire(now + Duration::from_secs(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_leaves_other_toasts_in_order() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        let a = queue.push(info("a"), now);
        let b = queue.push(info("b"), now);
        let c = queue.push(info("c"), now);

        queue.dismiss(b);

        let ids: Vec<u64> = queue.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(ids, [a, c]);
    }

    #[derive(Props, Clone)]
    struct QueueHolderProps {
        captured: Rc<RefCell<Option<Signal<ToastQueue>>>>,
    }

    impl PartialEq for QueueHolderProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.captured, &other.captured)
        }
    }

    #[allow(non_snake_case)]
    fn QueueHolder(props: QueueHolderProps) -> Element {
        let queue = use_signal(ToastQueue::default);
        props.captured.borrow_mut().get_or_insert(queue);
        rsx! {}
    }

    #[test]
    fn notifier_gives_each_notice_a_deadline_and_fresh_id() {
        let captured = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(
            QueueHolder,
            QueueHolderProps {
                captured: captured.clone(),
            },
        );
        dom.rebuild_in_place();
        let queue = captured.borrow().expect("holder rendered");
        let notifier = Notifier {
            queue,
            lifetime: Duration::from_secs(4),
        };

        let before = Instant::now();
        let toasts = dom.in_runtime(|| {
            notifier.notify(Notice::new(Severity::Success, "saved"));
            notifier.notify(Notice::new(Severity::Error, "failed"));
            queue.peek().toasts().to_vec()
        });

        assert_eq!(toasts.len(), 2);
        assert_ne!(toasts[0].id, toasts[1].id);
        assert_eq!(toasts[0].notice.message, "saved");
        assert!(toasts[0].expires_at >= before + Duration::from_secs(4));
    }

    #[test]
    fn location_script_performs_a_full_page_load() {
        assert_eq!(
            location_script("/auth/sso").unwrap(),
            r#"window.location.assign("/auth/sso");"#
        );
    }

    #[test]
    fn location_script_quotes_the_target() {
        assert_eq!(
            location_script(r#"/login?next="x"</script>"#).unwrap(),
            r#"window.location.assign("/login?next=\"x\"</script>");"#
        );
    }
}
