//! The pending-navigation protocol.
//!
//! A selection commit cannot scroll or focus right away: the target
//! section's elements do not exist until that section has rendered. The
//! coordinator records a [`NavigationIntent`], switches the active
//! section, and consumes the intent later, on one of two triggers:
//!
//! - [`NavigationCoordinator::on_section_rendered`], the preferred path,
//!   invoked by the section host once its mount work for the newly
//!   active section is done;
//! - [`NavigationCoordinator::on_settle_elapsed`], the fallback timer the
//!   view host schedules at commit time (default 250 ms).
//!
//! Exactly one intent is live at a time. Each carries a generation
//! number; a newer commit supersedes the old intent and its outstanding
//! ticket simply goes stale. Last writer wins, losers are cancelled -
//! there is no queue.

use std::time::Duration;

use tracing::debug;

use crate::catalog::{SearchEntry, Target};
use crate::error::ResultExt;
use crate::sections::{Category, SectionId};
use crate::state::SharedSlot;

/// Port to the rendering layer. Scroll and focus are independent
/// best-effort operations: a missing target returns `false` and the rest
/// of the deferred action still runs.
pub trait ViewHost {
    /// Scroll the element with this id into view (smooth, aligned to the
    /// top of the viewport). Returns whether the element was found.
    fn scroll_to_anchor(&self, anchor_id: &str) -> bool;
    /// Scroll the viewport back to the top.
    fn scroll_to_top(&self);
    /// Focus the first element matching this selector. Returns whether a
    /// match was found.
    fn focus_first(&self, selector: &str) -> bool;
    /// Open a URL in a new browsing context.
    fn open_external(&self, url: &str);
    /// Arrange for [`NavigationCoordinator::on_settle_elapsed`] to be
    /// called with `ticket` once `delay` has passed.
    fn schedule_settle(&self, delay: Duration, ticket: SettleTicket);
}

/// Cancellation token for one deferred action. Valid only while its
/// generation matches the live intent; a superseded ticket is ignored
/// wherever it lands, so a cleared timer handle is never needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
}

/// A recorded selection commit awaiting its target section's render.
#[derive(Debug, Clone)]
struct NavigationIntent {
    section: SectionId,
    anchor_id: Option<String>,
    focus_selector: Option<String>,
    generation: u64,
}

pub struct NavigationCoordinator {
    active_section: SharedSlot<SectionId>,
    category_filter: SharedSlot<Category>,
    pending: Option<NavigationIntent>,
    generation: u64,
    settle_delay: Duration,
}

impl NavigationCoordinator {
    pub fn new(
        active_section: SharedSlot<SectionId>,
        category_filter: SharedSlot<Category>,
        settle_delay: Duration,
    ) -> Self {
        NavigationCoordinator {
            active_section,
            category_filter,
            pending: None,
            generation: 0,
            settle_delay,
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section.get()
    }

    /// Direct section activation (tab click). Does not touch any pending
    /// intent: if the user navigates away before a settle fires, the
    /// consumption guards suppress the stale action.
    pub fn set_active_section(&mut self, section: SectionId) {
        self.active_section.set(section);
    }

    /// Whether a navigation intent is live (visible for tests and
    /// diagnostics; collaborators never need it).
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Selection commit. The caller has already done the synchronous
    /// cleanup (closed the list, cleared the query).
    ///
    /// External targets short-circuit: no intent, no section switch.
    /// Section targets apply the category pre-filter first, so the
    /// section renders already filtered, then record the intent and
    /// activate the section.
    pub fn commit(&mut self, entry: &SearchEntry, host: &dyn ViewHost) {
        match &entry.target {
            Target::External { url } => {
                debug!(entry = %entry.id, url = %url, "Opening external target");
                host.open_external(url);
            }
            Target::Section {
                section,
                anchor_id,
                focus_selector,
                category_filter,
            } => {
                if let Some(filter) = category_filter {
                    self.category_filter.set(*filter);
                }
                self.generation += 1;
                let superseded = self.pending.is_some();
                self.pending = Some(NavigationIntent {
                    section: *section,
                    anchor_id: anchor_id.clone(),
                    focus_selector: focus_selector.clone(),
                    generation: self.generation,
                });
                self.active_section.set(*section);
                debug!(
                    entry = %entry.id,
                    section = %section,
                    generation = self.generation,
                    superseded,
                    "Navigation intent recorded"
                );
                host.schedule_settle(
                    self.settle_delay,
                    SettleTicket {
                        generation: self.generation,
                    },
                );
            }
        }
    }

    /// Render-complete signal from the section host. Preferred
    /// consumption trigger; consumes the intent as soon as the reported
    /// section is both the intent's target and still the active one.
    pub fn on_section_rendered(&mut self, section: SectionId, host: &dyn ViewHost) {
        let Some(intent) = &self.pending else {
            return;
        };
        if intent.section != section || self.active_section.get() != section {
            return;
        }
        self.consume(host);
    }

    /// Fallback settle timer. Stale tickets (superseded intents, or an
    /// intent already consumed by the render signal) are ignored without
    /// logging above debug; they are a normal outcome of the protocol.
    pub fn on_settle_elapsed(&mut self, ticket: SettleTicket, host: &dyn ViewHost) {
        let Some(intent) = &self.pending else {
            return;
        };
        if intent.generation != ticket.generation {
            debug!(
                ticket = ticket.generation,
                live = intent.generation,
                "Stale settle ticket ignored"
            );
            return;
        }
        if self.active_section.get() != intent.section {
            // The user navigated elsewhere before the delay elapsed.
            debug!(
                section = %intent.section,
                active = %self.active_section.get(),
                "Deferred navigation suppressed, section no longer active"
            );
            self.pending = None;
            return;
        }
        self.consume(host);
    }

    fn consume(&mut self, host: &dyn ViewHost) {
        let Some(intent) = self.pending.take() else {
            crate::debug_panic!("consume called without a live intent");
            return;
        };
        match &intent.anchor_id {
            Some(anchor) => {
                if !host.scroll_to_anchor(anchor) {
                    debug!(anchor = %anchor, "Anchor not found, scroll skipped");
                }
            }
            None => host.scroll_to_top(),
        }
        if let Some(selector) = &intent.focus_selector {
            if !host.focus_first(selector) {
                debug!(selector = %selector, "Focus target not found, focus skipped");
            }
        }
        debug!(
            section = %intent.section,
            generation = intent.generation,
            "Navigation intent consumed"
        );
    }
}

/// Open a URL with the system default handler. Failures are logged and
/// swallowed; there is nothing actionable to surface.
pub fn open_in_browser(url: &str) {
    open::that_detached(url).log_err();
}

/// Minimal host for shells without their own scheduler. External URLs go
/// through the system handler; scroll and focus report "not found" (a
/// rendering shell overrides this port with real DOM access); settle
/// tickets are held with a deadline for the shell to drain from its
/// event loop via [`SystemHost::drain_due`].
#[derive(Default)]
pub struct SystemHost {
    scheduled: parking_lot::Mutex<Vec<(std::time::Instant, SettleTicket)>>,
}

impl SystemHost {
    pub fn new() -> Self {
        SystemHost::default()
    }

    /// Tickets whose delay has elapsed, in scheduling order.
    pub fn drain_due(&self) -> Vec<SettleTicket> {
        let now = std::time::Instant::now();
        let mut scheduled = self.scheduled.lock();
        let mut due = Vec::new();
        scheduled.retain(|(deadline, ticket)| {
            if *deadline <= now {
                due.push(*ticket);
                false
            } else {
                true
            }
        });
        due
    }
}

impl ViewHost for SystemHost {
    fn scroll_to_anchor(&self, _anchor_id: &str) -> bool {
        false
    }

    fn scroll_to_top(&self) {}

    fn focus_first(&self, _selector: &str) -> bool {
        false
    }

    fn open_external(&self, url: &str) {
        open_in_browser(url);
    }

    fn schedule_settle(&self, delay: Duration, ticket: SettleTicket) {
        self.scheduled
            .lock()
            .push((std::time::Instant::now() + delay, ticket));
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FakeHost, HostEvent};
    use super::*;
    use crate::catalog::default_catalog;
    use crate::config::DEFAULT_SETTLE_DELAY_MS;

    fn coordinator() -> (NavigationCoordinator, SharedSlot<SectionId>, SharedSlot<Category>) {
        let active = SharedSlot::new(SectionId::Proceso);
        let filter = SharedSlot::new(Category::All);
        let coordinator = NavigationCoordinator::new(
            active.clone(),
            filter.clone(),
            Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        );
        (coordinator, active, filter)
    }

    fn entry(id: &str) -> crate::catalog::SearchEntry {
        default_catalog().get(id).cloned().unwrap()
    }

    #[test]
    fn test_external_target_short_circuits() {
        let (mut coordinator, active, _) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("fcyt"), &host);
        assert_eq!(
            host.events(),
            vec![HostEvent::Opened(crate::catalog::FCYT_URL.to_string())]
        );
        assert_eq!(active.get(), SectionId::Proceso);
        assert!(!coordinator.has_pending());
        assert!(host.take_scheduled().is_empty());
    }

    #[test]
    fn test_commit_sets_filter_before_switching() {
        let (mut coordinator, active, filter) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("examenes"), &host);
        assert_eq!(filter.get(), Category::Examenes);
        assert_eq!(active.get(), SectionId::Anuncios);
        assert!(coordinator.has_pending());
        // nothing touched the DOM yet
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_settle_consumes_anchor_scroll() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("cronograma"), &host);
        let scheduled = host.take_scheduled();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].0, Duration::from_millis(250));

        coordinator.on_settle_elapsed(scheduled[0].1, &host);
        assert_eq!(
            host.events(),
            vec![HostEvent::ScrolledTo("cronograma".to_string())]
        );
        assert!(!coordinator.has_pending());
    }

    #[test]
    fn test_settle_without_anchor_scrolls_to_top() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        // convocatorias has a category filter but no anchor
        coordinator.commit(&entry("convocatorias"), &host);
        let (_, ticket) = host.take_scheduled()[0];
        coordinator.on_settle_elapsed(ticket, &host);
        assert_eq!(host.events(), vec![HostEvent::ScrolledTop]);
    }

    #[test]
    fn test_settle_runs_scroll_then_focus() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("material"), &host);
        let (_, ticket) = host.take_scheduled()[0];
        coordinator.on_settle_elapsed(ticket, &host);
        assert_eq!(
            host.events(),
            vec![
                HostEvent::ScrolledTo("material-buscador".to_string()),
                HostEvent::Focused(r#"input[data-material-search="true"]"#.to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_anchor_does_not_block_focus() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        host.mark_missing("material-buscador");
        coordinator.commit(&entry("material"), &host);
        let (_, ticket) = host.take_scheduled()[0];
        coordinator.on_settle_elapsed(ticket, &host);
        assert_eq!(
            host.events(),
            vec![HostEvent::Focused(
                r#"input[data-material-search="true"]"#.to_string()
            )]
        );
    }

    #[test]
    fn test_supersession_cancels_the_older_intent() {
        let (mut coordinator, active, _) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("cronograma"), &host);
        let (_, first_ticket) = host.take_scheduled()[0];

        // second commit before the first settle fires
        coordinator.commit(&entry("contactos"), &host);
        let (_, second_ticket) = host.take_scheduled()[0];

        // the older ticket is stale and must not act
        coordinator.on_settle_elapsed(first_ticket, &host);
        assert!(host.events().is_empty());
        assert!(coordinator.has_pending());

        coordinator.on_settle_elapsed(second_ticket, &host);
        assert_eq!(
            host.events(),
            vec![HostEvent::ScrolledTo("personal-contacto".to_string())]
        );
        assert_eq!(active.get(), SectionId::Apoyo);
    }

    #[test]
    fn test_settle_suppressed_when_section_moved_on() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("cronograma"), &host);
        let (_, ticket) = host.take_scheduled()[0];

        // user clicks another tab before the delay elapses
        coordinator.set_active_section(SectionId::Apoyo);
        coordinator.on_settle_elapsed(ticket, &host);
        assert!(host.events().is_empty());
        assert!(!coordinator.has_pending());
    }

    #[test]
    fn test_render_signal_consumes_before_the_timer() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("cronograma"), &host);
        let (_, ticket) = host.take_scheduled()[0];

        coordinator.on_section_rendered(SectionId::Proceso, &host);
        assert_eq!(
            host.events(),
            vec![HostEvent::ScrolledTo("cronograma".to_string())]
        );

        // the fallback ticket finds nothing left to do
        coordinator.on_settle_elapsed(ticket, &host);
        assert_eq!(host.events().len(), 1);
    }

    #[test]
    fn test_render_signal_for_other_section_is_ignored() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        coordinator.commit(&entry("cronograma"), &host);
        coordinator.on_section_rendered(SectionId::Apoyo, &host);
        assert!(host.events().is_empty());
        assert!(coordinator.has_pending());
    }

    #[test]
    fn test_render_signal_without_pending_is_a_noop() {
        let (mut coordinator, _, _) = coordinator();
        let host = FakeHost::new();
        coordinator.on_section_rendered(SectionId::Proceso, &host);
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_system_host_holds_tickets_until_due() {
        let (mut coordinator, _, _) = coordinator();
        let active = SharedSlot::new(SectionId::Proceso);
        let filter = SharedSlot::new(Category::All);
        let mut zero_delay =
            NavigationCoordinator::new(active, filter, Duration::from_millis(0));
        let host = SystemHost::new();

        coordinator.commit(&entry("cronograma"), &host);
        zero_delay.commit(&entry("cronograma"), &host);

        // only the zero-delay ticket is due right away
        let due = host.drain_due();
        assert_eq!(due.len(), 1);
        zero_delay.on_settle_elapsed(due[0], &host);
        assert!(!zero_delay.has_pending());
    }
}
