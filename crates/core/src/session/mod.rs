//! Event-driven selector session.
//!
//! Every external event (roster refresh, smart-text change, hero click)
//! produces a new immutable [`Snapshot`] through the pure [`reduce`]
//! function. [`Session`] holds the current snapshot, swaps it on each
//! dispatch, and notifies optional selection hooks when the visible
//! selection changes.

pub mod queue;

use std::fmt;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::config::SelectorConfig;
use crate::model::{HeroId, HeroRecord};
use crate::roster::source::{load_roster, RosterSource, SourceError};
use crate::roster::{DuplicateIdPolicy, HeroRoster};
use crate::selection::{CandidateShape, Selection, SelectionState};
use crate::sieve::{parse, FilterCriteria};

pub use queue::{event_queue, spawn_refresh};

/// Immutable view of the selector at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    roster: Arc<HeroRoster>,
    criteria: Arc<FilterCriteria>,
    candidates: Vec<HeroRecord>,
    selection: SelectionState,
}

impl Snapshot {
    /// Snapshot over `roster` with no filter applied.
    pub fn new(roster: HeroRoster) -> Self {
        Snapshot::default().with_roster(Arc::new(roster))
    }

    pub fn roster(&self) -> &HeroRoster {
        &self.roster
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Heroes passing the current criteria, in roster order.
    pub fn candidates(&self) -> &[HeroRecord] {
        &self.candidates
    }

    pub fn shape(&self) -> CandidateShape {
        CandidateShape::of(&self.candidates)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected(&self) -> Option<&HeroRecord> {
        self.selection.selected()
    }

    /// The smart text exactly as typed.
    pub fn smart_text(&self) -> &str {
        self.criteria.text()
    }

    fn with_roster(&self, roster: Arc<HeroRoster>) -> Snapshot {
        Self::filtered(roster, Arc::clone(&self.criteria), &self.selection)
    }

    fn with_criteria(&self, criteria: FilterCriteria) -> Snapshot {
        Self::filtered(Arc::clone(&self.roster), Arc::new(criteria), &self.selection)
    }

    fn filtered(
        roster: Arc<HeroRoster>,
        criteria: Arc<FilterCriteria>,
        previous: &SelectionState,
    ) -> Snapshot {
        let candidates: Vec<HeroRecord> =
            roster.filtered_heroes(&criteria).into_iter().cloned().collect();
        let selection = previous.resolve(&candidates);
        Snapshot { roster, criteria, candidates, selection }
    }
}

/// External input to the selector.
#[derive(Debug)]
pub enum Event {
    /// A roster fetch completed; the new roster replaces the old one.
    RosterRefreshed(HeroRoster),
    /// A roster fetch failed; the previous roster stays in use.
    RefreshFailed(SourceError),
    /// The smart text changed.
    SmartTextChanged(String),
    /// The user clicked a hero.
    HeroClicked(HeroId),
}

/// Compute the snapshot that follows `previous` once `event` is applied.
pub fn reduce(previous: &Snapshot, event: Event) -> Snapshot {
    match event {
        Event::RosterRefreshed(roster) => previous.with_roster(Arc::new(roster)),
        Event::RefreshFailed(err) => {
            log::error!("roster refresh failed, keeping previous roster: {err}");
            previous.clone()
        }
        Event::SmartTextChanged(text) => previous.with_criteria(parse(&text)),
        Event::HeroClicked(id) => Snapshot {
            selection: previous.selection.click(id, &previous.candidates),
            ..previous.clone()
        },
    }
}

pub type SelectHook = Box<dyn FnMut(&HeroRecord)>;
pub type UnsetHook = Box<dyn FnMut()>;

/// Optional callbacks fired when the visible selection changes.
///
/// A missing hook means the embedding environment does not offer that
/// capability; it is simply skipped.
#[derive(Default)]
pub struct SelectionHooks {
    on_select: Option<SelectHook>,
    on_unset: Option<UnsetHook>,
}

impl SelectionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_select(mut self, hook: impl FnMut(&HeroRecord) + 'static) -> Self {
        self.on_select = Some(Box::new(hook));
        self
    }

    pub fn on_unset(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_unset = Some(Box::new(hook));
        self
    }

    fn notify(&mut self, selection: &Selection) {
        match selection {
            Selection::Selected(hero) => {
                if let Some(hook) = self.on_select.as_mut() {
                    hook(hero);
                }
            }
            Selection::Unselected => {
                if let Some(hook) = self.on_unset.as_mut() {
                    hook();
                }
            }
        }
    }
}

impl fmt::Debug for SelectionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionHooks")
            .field("on_select", &self.on_select.is_some())
            .field("on_unset", &self.on_unset.is_some())
            .finish()
    }
}

/// Live selector: current snapshot plus hooks.
#[derive(Debug)]
pub struct Session {
    snapshot: Snapshot,
    hooks: SelectionHooks,
    duplicate_ids: DuplicateIdPolicy,
}

impl Session {
    /// Empty session (no roster yet) configured from `config`.
    pub fn new(config: &SelectorConfig, hooks: SelectionHooks) -> Self {
        Self { snapshot: Snapshot::default(), hooks, duplicate_ids: config.duplicate_ids }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Apply one event, swap in the resulting snapshot and fire hooks if the
    /// visible selection changed.
    pub fn dispatch(&mut self, event: Event) -> &Snapshot {
        let next = reduce(&self.snapshot, event);
        let changed = next.selection.current() != self.snapshot.selection.current();
        self.snapshot = next;
        if changed {
            self.hooks.notify(self.snapshot.selection.current());
        }
        &self.snapshot
    }

    /// Read the roster from `source` and apply the outcome.
    ///
    /// Failures are logged and leave the current roster in place.
    pub fn refresh(&mut self, source: &dyn RosterSource) -> &Snapshot {
        let event = match load_roster(source, self.duplicate_ids) {
            Ok(decoded) => Event::RosterRefreshed(decoded.roster),
            Err(err) => Event::RefreshFailed(err),
        };
        self.dispatch(event)
    }

    /// Process queued events one at a time until every sender is gone.
    ///
    /// Returns the number of events handled.
    pub fn run(&mut self, events: &Receiver<Event>) -> usize {
        let mut handled = 0;
        for event in events.iter() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }
}
