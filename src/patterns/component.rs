// SPDX-License-Identifier: MPL-2.0
//! Pattern viewer interaction state: selection plus the code-section toggle.
//!
//! `code_expanded` belongs to the detail pane's lifecycle: it resets whenever
//! the selected record identity changes, and only then. An unknown selection
//! is not an error, it degrades to an empty detail pane.

use crate::patterns::catalog::{self, PatternRecord, CATALOG};

/// Pattern viewer state.
#[derive(Debug, Clone)]
pub struct State {
    /// Id of the record shown in the detail pane. May reference no record,
    /// in which case the pane is empty and no sidebar entry is active.
    selected_id: u32,
    /// Whether the detail pane's code listing is expanded.
    code_expanded: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Initial state: the first catalog record selected, code collapsed.
    pub fn new() -> Self {
        Self {
            selected_id: CATALOG[0].id,
            code_expanded: false,
        }
    }

    pub fn selected_id(&self) -> u32 {
        self.selected_id
    }

    pub fn code_expanded(&self) -> bool {
        self.code_expanded
    }

    /// The record the detail pane shows, when `selected_id` matches one.
    pub fn selected_record(&self) -> Option<&'static PatternRecord> {
        catalog::find(self.selected_id)
    }
}

/// Messages emitted by the pattern viewer.
#[derive(Debug, Clone)]
pub enum Message {
    PatternSelected(u32),
    CodeToggled,
    SelectPrevious,
    SelectNext,
}

/// Process a pattern viewer message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::PatternSelected(id) => select(state, id),
        Message::CodeToggled => {
            state.code_expanded = !state.code_expanded;
        }
        Message::SelectPrevious => match catalog::position(state.selected_id) {
            Some(position) => select(state, CATALOG[position.saturating_sub(1)].id),
            // Unknown selection: ↑/↓ recover by selecting the first record.
            None => select(state, CATALOG[0].id),
        },
        Message::SelectNext => match catalog::position(state.selected_id) {
            Some(position) => {
                let clamped = (position + 1).min(CATALOG.len() - 1);
                select(state, CATALOG[clamped].id);
            }
            None => select(state, CATALOG[0].id),
        },
    }
}

/// Move the selection to `id`, resetting the code toggle when the record
/// identity actually changes.
fn select(state: &mut State, id: u32) {
    if state.selected_id != id {
        state.code_expanded = false;
    }
    state.selected_id = id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_selects_the_first_record_collapsed() {
        let state = State::new();
        assert_eq!(state.selected_id(), CATALOG[0].id);
        assert_eq!(state.selected_id(), 1);
        assert!(!state.code_expanded());
        assert!(state.selected_record().is_some());
    }

    #[test]
    fn selecting_a_known_id_shows_that_record() {
        let mut state = State::new();

        update(&mut state, Message::PatternSelected(5));

        assert_eq!(state.selected_id(), 5);
        assert_eq!(state.selected_record().map(|record| record.id), Some(5));
    }

    #[test]
    fn selecting_an_unknown_id_yields_an_empty_detail_pane() {
        let mut state = State::new();

        update(&mut state, Message::PatternSelected(99));

        assert_eq!(state.selected_id(), 99);
        assert!(state.selected_record().is_none());
    }

    #[test]
    fn code_toggle_round_trips() {
        let mut state = State::new();
        assert!(!state.code_expanded());

        update(&mut state, Message::CodeToggled);
        assert!(state.code_expanded());

        update(&mut state, Message::CodeToggled);
        assert!(!state.code_expanded());
    }

    #[test]
    fn changing_selection_resets_the_code_toggle() {
        let mut state = State::new();

        update(&mut state, Message::CodeToggled);
        assert!(state.code_expanded());

        update(&mut state, Message::PatternSelected(3));
        assert!(!state.code_expanded());
    }

    #[test]
    fn reselecting_the_same_record_keeps_the_code_toggle() {
        let mut state = State::new();

        update(&mut state, Message::PatternSelected(4));
        update(&mut state, Message::CodeToggled);
        update(&mut state, Message::PatternSelected(4));

        assert!(state.code_expanded());
        assert_eq!(state.selected_id(), 4);
    }

    #[test]
    fn arrow_selection_moves_and_clamps_at_the_ends() {
        let mut state = State::new();

        update(&mut state, Message::SelectPrevious);
        assert_eq!(state.selected_id(), 1);

        update(&mut state, Message::SelectNext);
        assert_eq!(state.selected_id(), 2);

        update(&mut state, Message::PatternSelected(CATALOG[CATALOG.len() - 1].id));
        update(&mut state, Message::SelectNext);
        assert_eq!(state.selected_id(), CATALOG[CATALOG.len() - 1].id);
    }

    #[test]
    fn arrow_selection_resets_the_code_toggle() {
        let mut state = State::new();

        update(&mut state, Message::CodeToggled);
        update(&mut state, Message::SelectNext);

        assert!(!state.code_expanded());
        assert_eq!(state.selected_id(), 2);
    }

    #[test]
    fn arrow_selection_recovers_from_an_unknown_selection() {
        let mut state = State::new();

        update(&mut state, Message::PatternSelected(99));
        update(&mut state, Message::SelectNext);
        assert_eq!(state.selected_id(), 1);

        update(&mut state, Message::PatternSelected(99));
        update(&mut state, Message::SelectPrevious);
        assert_eq!(state.selected_id(), 1);
    }

    #[test]
    fn reference_scenario_over_eight_records() {
        for (index, record) in CATALOG.iter().enumerate() {
            assert_eq!(record.id as usize, index + 1);
        }

        let mut state = State::new();
        assert_eq!(state.selected_id(), 1);

        update(&mut state, Message::PatternSelected(5));
        assert_eq!(state.selected_id(), 5);
        assert_eq!(state.selected_record().map(|record| record.id), Some(5));

        update(&mut state, Message::CodeToggled);
        assert!(state.code_expanded());

        update(&mut state, Message::PatternSelected(2));
        assert!(!state.code_expanded());
        assert_eq!(state.selected_id(), 2);
        assert_eq!(state.selected_record().map(|record| record.id), Some(2));
    }
}
