//! Pairing/reveal state machine for the memory-matching game.
//!
//! The engine is pure over an explicit [`MemoryGameState`] value: handlers
//! load the state from the session, apply one operation and store it back.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Symbol alphabet dealt onto the board. Each symbol appears on exactly two
/// cards.
pub const CARD_VALUES: [&str; 4] = ["A", "B", "C", "D"];

const INVALID_PICK_MESSAGE: &str = "Pick two different positions inside the valid range.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCard {
    /// 1-based slot index, fixed at deal time.
    pub position: usize,
    pub value: String,
    pub revealed: bool,
    /// Once true, never reset. Wins over `revealed` for presentation.
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryGameState {
    pub cards: Vec<MemoryCard>,
    pub messages: Vec<String>,
    pub moves: u32,
}

/// Result of a single two-card pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Positions were equal or out of range. A message was appended, nothing
    /// else changed.
    InvalidPick,
    Matched {
        value: String,
    },
    /// The reveal of both values is transient: the cards are face down again
    /// in the stored state.
    NoMatch {
        first_value: String,
        second_value: String,
    },
}

impl MemoryGameState {
    /// Deal a fresh shuffled board: every value from [`CARD_VALUES`]
    /// duplicated, assigned to positions `1..=8` in random order.
    pub fn deal() -> Self {
        let mut values: Vec<&str> = CARD_VALUES.iter().flat_map(|value| [*value, *value]).collect();
        values.shuffle(&mut rand::thread_rng());

        let cards = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| MemoryCard {
                position: index + 1,
                value: value.to_string(),
                revealed: false,
                matched: false,
            })
            .collect();

        Self {
            cards,
            messages: Vec::new(),
            moves: 0,
        }
    }

    /// Process one pick of two positions.
    ///
    /// Invalid input appends an error message and leaves cards and the move
    /// counter untouched. A valid pick always counts as one move.
    pub fn pick(&mut self, first: usize, second: usize) -> PickOutcome {
        let count = self.cards.len();
        if first == second || first < 1 || second < 1 || first > count || second > count {
            self.messages.push(INVALID_PICK_MESSAGE.to_string());
            return PickOutcome::InvalidPick;
        }

        let first_value = self.cards[first - 1].value.clone();
        let second_value = self.cards[second - 1].value.clone();

        self.cards[first - 1].revealed = true;
        self.cards[second - 1].revealed = true;
        self.moves += 1;

        if first_value == second_value {
            self.cards[first - 1].matched = true;
            self.cards[second - 1].matched = true;
            self.messages
                .push(format!("You found a pair of {}!", first_value));
            PickOutcome::Matched { value: first_value }
        } else {
            self.cards[first - 1].revealed = false;
            self.cards[second - 1].revealed = false;
            self.messages.push("No match, try again.".to_string());
            PickOutcome::NoMatch {
                first_value,
                second_value,
            }
        }
    }

    /// Derived completion check: every card has found its pair.
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Fixed board for deterministic picks: A A B B C C D D in order.
    fn ordered_board() -> MemoryGameState {
        let cards = CARD_VALUES
            .iter()
            .flat_map(|value| [*value, *value])
            .enumerate()
            .map(|(index, value)| MemoryCard {
                position: index + 1,
                value: value.to_string(),
                revealed: false,
                matched: false,
            })
            .collect();

        MemoryGameState {
            cards,
            messages: Vec::new(),
            moves: 0,
        }
    }

    #[test]
    fn deal_places_every_value_on_exactly_two_positions() {
        let state = MemoryGameState::deal();

        assert_eq!(state.cards.len(), CARD_VALUES.len() * 2);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in &state.cards {
            *counts.entry(card.value.as_str()).or_default() += 1;
        }
        for value in CARD_VALUES {
            assert_eq!(counts.get(value), Some(&2), "value {value} not paired");
        }
    }

    #[test]
    fn deal_assigns_sequential_positions_and_a_clean_slate() {
        let state = MemoryGameState::deal();

        let positions: Vec<usize> = state.cards.iter().map(|card| card.position).collect();
        assert_eq!(positions, (1..=8).collect::<Vec<_>>());
        assert!(state.cards.iter().all(|card| !card.revealed && !card.matched));
        assert!(state.messages.is_empty());
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn picking_the_same_position_twice_is_rejected() {
        let mut state = ordered_board();
        let before = state.cards.clone();

        let outcome = state.pick(1, 1);

        assert_eq!(outcome, PickOutcome::InvalidPick);
        assert_eq!(state.moves, 0);
        assert_eq!(state.cards, before);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        let mut state = ordered_board();

        assert_eq!(state.pick(0, 2), PickOutcome::InvalidPick);
        assert_eq!(state.pick(1, 9), PickOutcome::InvalidPick);
        assert_eq!(state.moves, 0);
        assert_eq!(state.messages.len(), 2);
    }

    #[test]
    fn matching_pick_marks_both_cards_permanently() {
        let mut state = ordered_board();

        let outcome = state.pick(1, 2);

        assert_eq!(
            outcome,
            PickOutcome::Matched {
                value: "A".to_string()
            }
        );
        assert_eq!(state.moves, 1);
        assert!(state.cards[0].matched && state.cards[1].matched);

        // An unrelated pick later must not disturb the matched pair.
        state.pick(3, 5);
        assert!(state.cards[0].matched && state.cards[1].matched);
    }

    #[test]
    fn mismatching_pick_counts_a_move_and_hides_both_cards_again() {
        let mut state = ordered_board();

        let outcome = state.pick(2, 3);

        assert_eq!(
            outcome,
            PickOutcome::NoMatch {
                first_value: "A".to_string(),
                second_value: "B".to_string(),
            }
        );
        assert_eq!(state.moves, 1);
        assert!(!state.cards[1].revealed);
        assert!(!state.cards[2].revealed);
        assert!(!state.cards[1].matched);
        assert_eq!(state.messages, vec!["No match, try again.".to_string()]);
    }

    #[test]
    fn board_completes_after_all_four_pairs() {
        let mut state = ordered_board();
        assert!(!state.is_complete());

        for first in [1, 3, 5, 7] {
            state.pick(first, first + 1);
        }

        assert!(state.is_complete());
        assert_eq!(state.moves, 4);
    }
}
