use hero_sieve_core::model::{Faction, HeroId, HeroRecord, Role};
use hero_sieve_core::selection::{CandidateShape, Selection, SelectionState};

fn hero(id: u32, name: &str) -> HeroRecord {
    HeroRecord::new(id, name, 4, Role::Warrior, Faction::Earth).expect("valid hero")
}

#[test]
fn shape_classifies_candidate_counts() {
    assert_eq!(CandidateShape::of(&[]), CandidateShape::Empty);
    assert_eq!(CandidateShape::of(&[hero(1, "A")]), CandidateShape::Singleton);
    assert_eq!(CandidateShape::of(&[hero(1, "A"), hero(2, "B")]), CandidateShape::Multiple);
}

#[test]
fn empty_candidates_unselect() {
    let state = SelectionState::unselected().click(HeroId(1), &[hero(1, "A"), hero(2, "B")]);
    let resolved = state.resolve(&[]);
    assert_eq!(resolved.current(), &Selection::Unselected);
    // The explicit choice is still remembered.
    assert_eq!(resolved.explicit(), Some(HeroId(1)));
}

#[test]
fn singleton_auto_resolves_without_touching_explicit() {
    let resolved = SelectionState::unselected().resolve(&[hero(3, "C")]);
    assert_eq!(resolved.selected().map(|h| h.id()), Some(HeroId(3)));
    assert_eq!(resolved.explicit(), None);
}

#[test]
fn multiple_keeps_explicit_member() {
    let candidates = [hero(1, "A"), hero(2, "B"), hero(3, "C")];
    let state = SelectionState::unselected().click(HeroId(2), &candidates);
    let resolved = state.resolve(&[hero(2, "B"), hero(3, "C")]);
    assert_eq!(resolved.current().id(), Some(HeroId(2)));
}

#[test]
fn multiple_without_explicit_member_is_unselected() {
    let candidates = [hero(1, "A"), hero(2, "B"), hero(3, "C")];
    let state = SelectionState::unselected().click(HeroId(2), &candidates);
    let resolved = state.resolve(&[hero(1, "A"), hero(3, "C")]);
    assert!(!resolved.current().is_selected());

    // Re-admitting the explicit hero brings the selection back.
    let again = resolved.resolve(&candidates);
    assert_eq!(again.current().id(), Some(HeroId(2)));
}

#[test]
fn click_overrides_regardless_of_size() {
    let candidates = [hero(1, "A"), hero(2, "B")];
    let state = SelectionState::unselected().click(HeroId(2), &candidates);
    assert_eq!(state.selected().unwrap().name(), "B");
    assert_eq!(state.explicit(), Some(HeroId(2)));

    let switched = state.click(HeroId(1), &candidates);
    assert_eq!(switched.current().id(), Some(HeroId(1)));
}

#[test]
fn click_outside_candidates_is_a_no_op() {
    let candidates = [hero(1, "A"), hero(2, "B")];
    let state = SelectionState::unselected().click(HeroId(1), &candidates);
    let after = state.click(HeroId(99), &candidates);
    assert_eq!(after, state);
}

#[test]
fn resolve_uses_fresh_candidate_record() {
    let state = SelectionState::unselected().click(HeroId(1), &[hero(1, "Old"), hero(2, "B")]);
    let resolved = state.resolve(&[hero(1, "New"), hero(2, "B")]);
    assert_eq!(resolved.selected().unwrap().name(), "New");
}

#[test]
fn singleton_then_multiple_drops_auto_selection() {
    let auto = SelectionState::unselected().resolve(&[hero(1, "A")]);
    assert_eq!(auto.selected().map(|h| h.id()), Some(HeroId(1)));

    let widened = auto.resolve(&[hero(1, "A"), hero(2, "B")]);
    assert_eq!(widened.current(), &Selection::Unselected);
    assert_eq!(widened.explicit(), None);
}
