//! Query session
//!
//! A session holds the committed query and one result slot per segment.
//! Slots are positional: committing `a;b` after `a;c` keeps slot 0 as it
//! was and re-resolves slot 1.
//!
//! A slot re-resolves only when its [`Stamp`] changes, i.e. when its text,
//! the catalog, the index, the remote database or the preferences moved
//! since it was last resolved. Paging and scroll go back to the top only
//! when the slot's text changed.

use super::AppState;
use crate::eval::Evaluation;
use crate::keybinds::KeyAction;
use crate::present::{Pager, ResultEntry, present_segment};
use crate::query::{ResolvedSegment, resolve_segment};

/// Events broadcast to every slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The query is about to be replaced by the default query
    ResetQuery { default_query: String },
}

/// How the view should move back to the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Scroll position of a slot's result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: usize,
    /// Set when the list was last sent back to the top
    pub last_reset: Option<ScrollBehavior>,
}

impl ScrollState {
    fn reset_to_top(&mut self, behavior: ScrollBehavior) {
        self.offset = 0;
        self.last_reset = Some(behavior);
    }
}

/// What a slot's resolution depended on
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stamp {
    segment: String,
    catalog_version: u64,
    index_version: u64,
    db_version: Option<String>,
    db_url: String,
    prefs_version: u64,
}

impl Stamp {
    fn of(segment: &str, state: &AppState) -> Self {
        Self {
            segment: segment.to_string(),
            catalog_version: state.catalog().version(),
            index_version: state.index().version(),
            db_version: state.remote().map(|info| info.version.clone()),
            db_url: state.config().db_url.clone(),
            prefs_version: state.prefs_version(),
        }
    }
}

/// Results of one segment
#[derive(Debug, Clone)]
pub struct SegmentSlot {
    segment: String,
    resolved: Option<ResolvedSegment>,
    stamp: Option<Stamp>,
    pager: Pager,
    scroll: ScrollState,
}

impl SegmentSlot {
    fn new(segment: &str, page_size: usize) -> Self {
        Self {
            segment: segment.to_string(),
            resolved: None,
            stamp: None,
            pager: Pager::new(page_size),
            scroll: ScrollState::default(),
        }
    }

    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    #[must_use]
    pub const fn resolved(&self) -> Option<&ResolvedSegment> {
        self.resolved.as_ref()
    }

    #[must_use]
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    #[must_use]
    pub const fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Scroll the list by `rows`, stopping at the top
    pub fn scroll_by(&mut self, rows: isize) {
        self.scroll.offset = self.scroll.offset.saturating_add_signed(rows);
        self.scroll.last_reset = None;
    }

    fn handle(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::ResetQuery { default_query } => {
                let behavior = if self.segment == *default_query {
                    ScrollBehavior::Smooth
                } else {
                    ScrollBehavior::Instant
                };
                self.scroll.reset_to_top(behavior);
            }
        }
    }

    fn refresh(&mut self, state: &AppState) -> bool {
        let page_size = state.config().items_per_page;
        if self.pager.page_size() != page_size {
            self.pager = Pager::new(page_size);
        }

        let stamp = Stamp::of(&self.segment, state);
        if self.stamp.as_ref() == Some(&stamp) {
            return false;
        }

        let text_changed = self
            .resolved
            .as_ref()
            .is_some_and(|resolved| resolved.segment != self.segment);
        if text_changed {
            self.pager.reset();
            self.scroll.reset_to_top(ScrollBehavior::Instant);
        }

        self.resolved = Some(resolve_segment(&self.segment, state.syntax(), state.index()));
        self.stamp = Some(stamp);
        true
    }

    /// The entries currently visible in this slot
    #[must_use]
    pub fn view(&self) -> Vec<ResultEntry> {
        self.resolved
            .as_ref()
            .map(|resolved| present_segment(resolved, &self.pager))
            .unwrap_or_default()
    }
}

/// The committed query and its per-segment results
#[derive(Debug, Clone, Default)]
pub struct QuerySession {
    query: String,
    slots: Vec<SegmentSlot>,
    active: usize,
    evaluation: Evaluation,
}

impl QuerySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on the configured default query
    #[must_use]
    pub fn with_default_query(state: &AppState) -> Self {
        let mut session = Self::new();
        session.commit(&state.config().default_query, state);
        session
    }

    /// Commit a query
    ///
    /// An empty query is ignored and the previous results stay.
    pub fn commit(&mut self, query: &str, state: &AppState) {
        if query.is_empty() {
            return;
        }

        let segments = state.syntax().split(query);
        let page_size = state.config().items_per_page;

        self.query = query.to_string();
        self.active = 0;
        self.evaluation = Evaluation::of(query);

        self.slots.truncate(segments.len());
        for (i, segment) in segments.iter().enumerate() {
            match self.slots.get_mut(i) {
                Some(slot) => {
                    slot.segment = (*segment).to_string();
                    slot.pager.reset();
                }
                None => self.slots.push(SegmentSlot::new(segment, page_size)),
            }
        }

        tracing::debug!(query, segments = segments.len(), "Query committed");
        self.refresh(state);
    }

    /// Re-resolve every slot whose dependencies changed
    ///
    /// Returns the number of slots resolved.
    pub fn refresh(&mut self, state: &AppState) -> usize {
        self.slots
            .iter_mut()
            .map(|slot| slot.refresh(state))
            .filter(|&resolved| resolved)
            .count()
    }

    /// Dispatch an event to every slot
    pub fn dispatch(&mut self, event: &SessionEvent) {
        for slot in &mut self.slots {
            slot.handle(event);
        }
    }

    /// Replace the query with the default query
    pub fn reset(&mut self, state: &AppState) {
        let default_query = state.config().default_query.clone();
        self.dispatch(&SessionEvent::ResetQuery {
            default_query: default_query.clone(),
        });
        self.active = 0;
        self.commit(&default_query, state);
    }

    /// Make the previous segment the active one
    pub fn nav_left(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Make the next segment the active one
    pub fn nav_right(&mut self) {
        self.active = (self.active + 1).min(self.slots.len().saturating_sub(1));
    }

    /// Perform a key action
    ///
    /// Returns `true` when the input line should be cleared.
    pub fn apply_key(&mut self, action: KeyAction, state: &AppState) -> bool {
        match action {
            KeyAction::ClearInput => return true,
            KeyAction::ResetQuery => self.reset(state),
            KeyAction::NavLeft => self.nav_left(),
            KeyAction::NavRight => self.nav_right(),
            KeyAction::NavBack => {}
        }
        false
    }

    /// Show another page of a slot's results
    ///
    /// Returns whether more results became visible. Slots that show
    /// everything at once are left alone and return `false`.
    pub fn show_more(&mut self, slot: usize) -> bool {
        let Some(slot) = self.slots.get_mut(slot) else {
            return false;
        };
        let Some(resolved) = &slot.resolved else {
            return false;
        };
        if !resolved.paging() {
            return false;
        }

        let before = slot.pager.visible();
        slot.pager.show_more(resolved.items.len());
        slot.pager.visible() > before
    }

    /// The visible entries of a slot
    #[must_use]
    pub fn view(&self, slot: usize) -> Vec<ResultEntry> {
        self.slots.get(slot).map(SegmentSlot::view).unwrap_or_default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn slots(&self) -> &[SegmentSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot_mut(&mut self, slot: usize) -> Option<&mut SegmentSlot> {
        self.slots.get_mut(slot)
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    #[must_use]
    pub const fn math(&self) -> Option<f64> {
        self.evaluation.math
    }

    #[must_use]
    pub const fn round_up(&self) -> Option<u32> {
        self.evaluation.round_up
    }
}
