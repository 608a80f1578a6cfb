//! Top-level portal state.
//!
//! [`Portal`] owns the search control (query text, selection state), the
//! navigation coordinator and the two shared slots, and exposes the
//! event surface the rendering shell drives: keystrokes, focus, pointer
//! downs, tab clicks, render-complete signals and settle tickets.
//!
//! Single-writer discipline: only this type and its coordinator write
//! the active section and the category filter; sections render from
//! [`SlotReader`]s.

use tracing::debug;

use crate::catalog::{Catalog, SearchEntry};
use crate::config::Config;
use crate::dismissal::{self, PointerTarget};
use crate::navigation::{NavigationCoordinator, SettleTicket, ViewHost};
use crate::search::SearchIndex;
use crate::sections::{Category, SectionId};
use crate::selection::SelectionState;
use crate::state::{SharedSlot, SlotReader};

/// Placeholder text of the search input.
pub const SEARCH_PLACEHOLDER: &str = "Buscar";

/// Keys the search field reacts to. Everything else goes to the input as
/// plain text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// One tab-bar button: the five sections plus the external FCYT link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    Section(SectionId),
    External(&'static str),
}

/// The tab bar, in display order.
pub const TAB_BAR: &[TabAction] = &[
    TabAction::Section(SectionId::Proceso),
    TabAction::Section(SectionId::Anuncios),
    TabAction::Section(SectionId::Material),
    TabAction::Section(SectionId::Apoyo),
    TabAction::Section(SectionId::Tutoriales),
    TabAction::External(crate::catalog::FCYT_URL),
];

pub struct Portal<H: ViewHost> {
    index: SearchIndex,
    query: String,
    selection: SelectionState,
    coordinator: NavigationCoordinator,
    active_section: SharedSlot<SectionId>,
    category_filter: SharedSlot<Category>,
    host: H,
}

impl<H: ViewHost> Portal<H> {
    pub fn new(config: &Config, catalog: Catalog, host: H) -> Self {
        let active_section = SharedSlot::new(SectionId::Proceso);
        let category_filter = SharedSlot::new(Category::All);
        let coordinator = NavigationCoordinator::new(
            active_section.clone(),
            category_filter.clone(),
            config.settle_delay(),
        );
        Portal {
            index: SearchIndex::build(catalog),
            query: String::new(),
            selection: SelectionState::new(),
            coordinator,
            active_section,
            category_filter,
            host,
        }
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Current dropdown rows for the current query, in catalog order.
    pub fn results(&self) -> Vec<&SearchEntry> {
        self.index.matches(&self.query)
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section.get()
    }

    pub fn category_filter(&self) -> Category {
        self.category_filter.get()
    }

    /// Read handle for the announcements board.
    pub fn category_filter_reader(&self) -> SlotReader<Category> {
        self.category_filter.reader()
    }

    /// Read handle for section hosts that render the active section.
    pub fn active_section_reader(&self) -> SlotReader<SectionId> {
        self.active_section.reader()
    }

    // ------------------------------------------------------------------
    // Event surface
    // ------------------------------------------------------------------

    /// The query text changed. Reopens the list, resets the highlight and
    /// re-clamps it against the recomputed result set in the same event.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.selection.query_edited();
        let count = self.index.matches(&self.query).len();
        self.selection.clamp_to(count);
    }

    /// The search input gained focus.
    pub fn focus_search(&mut self) {
        self.selection.focus_gained();
    }

    /// A key arrived while the search input had focus. All search keys
    /// are ignored while the list is closed.
    pub fn key_down(&mut self, key: SearchKey) {
        if !self.selection.is_open {
            return;
        }
        match key {
            SearchKey::ArrowDown => {
                let count = self.results().len();
                self.selection.move_down(count);
            }
            SearchKey::ArrowUp => self.selection.move_up(),
            SearchKey::Enter => {
                let highlighted = self
                    .results()
                    .get(self.selection.highlight)
                    .map(|entry| (*entry).clone());
                // empty list: Enter is a no-op, the dropdown stays open
                if let Some(entry) = highlighted {
                    self.commit_entry(entry);
                }
            }
            SearchKey::Escape => self.selection.close(),
        }
    }

    /// A document-level pointer-down. Result-row clicks select; anything
    /// outside the control dismisses the list.
    pub fn pointer_down(&mut self, target: PointerTarget) {
        if let Some(index) = dismissal::on_pointer_down(&mut self.selection, target) {
            let clicked = self.results().get(index).map(|entry| (*entry).clone());
            if let Some(entry) = clicked {
                self.commit_entry(entry);
            }
        }
    }

    /// A tab-bar button was activated.
    pub fn activate_tab(&mut self, tab: TabAction) {
        match tab {
            TabAction::Section(section) => {
                debug!(section = %section, "Tab activated");
                self.coordinator.set_active_section(section);
            }
            TabAction::External(url) => self.host.open_external(url),
        }
    }

    /// The section host finished its mount work for `section`.
    pub fn on_section_rendered(&mut self, section: SectionId) {
        self.coordinator.on_section_rendered(section, &self.host);
    }

    /// A fallback settle ticket came due.
    pub fn on_settle_elapsed(&mut self, ticket: SettleTicket) {
        self.coordinator.on_settle_elapsed(ticket, &self.host);
    }

    fn commit_entry(&mut self, entry: SearchEntry) {
        // pre-navigation cleanup, synchronous with the commit event
        self.selection.close();
        self.query.clear();
        self.coordinator.commit(&entry, &self.host);
    }
}
