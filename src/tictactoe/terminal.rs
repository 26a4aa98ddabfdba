//! Legality and terminal-state classification
//!
//! [`classify`] is the single rule book shared by the search and the
//! retrograde builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LineAnalyzer, Mark, Position};

/// Game-theoretic status of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    InProgress,
    Draw,
    Won(Mark),
    Illegal,
}

impl TerminalState {
    /// True for `Won` and `Draw`
    pub fn is_terminal(self) -> bool {
        matches!(self, TerminalState::Won(_) | TerminalState::Draw)
    }

    /// Exact score of a finished game from X's point of view
    pub fn score(self) -> Option<i32> {
        match self {
            TerminalState::Won(Mark::X) => Some(1),
            TerminalState::Won(Mark::O) => Some(-1),
            TerminalState::Draw => Some(0),
            TerminalState::InProgress | TerminalState::Illegal => None,
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalState::InProgress => write!(f, "in progress"),
            TerminalState::Draw => write!(f, "draw"),
            TerminalState::Won(mark) => write!(f, "{mark} wins"),
            TerminalState::Illegal => write!(f, "illegal"),
        }
    }
}

/// Classify a position.
///
/// A single winning mark must belong to the player who just moved; two
/// different winning marks can never arise from legal play. The mark
/// differential is only consulted when there is a winner, so a full board with
/// no completed line is a draw whatever its counts.
pub fn classify(position: &Position) -> TerminalState {
    let winners = LineAnalyzer::winning_marks(&position.cells);
    let mut winners = winners.into_iter();

    match (winners.next(), winners.next()) {
        (Some(_), Some(_)) => TerminalState::Illegal,
        (Some(winner), None) => match position.to_play() {
            Ok(to_play) if to_play != winner => TerminalState::Won(winner),
            _ => TerminalState::Illegal,
        },
        (None, _) if position.is_full() => TerminalState::Draw,
        (None, _) => TerminalState::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_key(key: &str) -> TerminalState {
        classify(&key.parse().unwrap())
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(classify_key("_________"), TerminalState::InProgress);
    }

    #[test]
    fn winner_must_have_moved_last() {
        // X has three in a row and O is to move
        assert_eq!(classify_key("XXXOO____"), TerminalState::Won(Mark::X));
        // X has three in a row but it is X's turn again
        assert_eq!(classify_key("XXXOO_O__"), TerminalState::Illegal);
        // O completes the middle column after X's third mark
        assert_eq!(classify_key("XOX_O_XO_"), TerminalState::Won(Mark::O));
    }

    #[test]
    fn two_different_winners_are_illegal() {
        assert_eq!(classify_key("XXXOOO___"), TerminalState::Illegal);
    }

    #[test]
    fn double_line_by_one_mark_is_a_single_win() {
        // X completes row 0 and column 0 with its last mark in cell 0
        assert_eq!(classify_key("XXXXOOXOO"), TerminalState::Won(Mark::X));
    }

    #[test]
    fn winner_with_bad_differential_is_illegal() {
        assert_eq!(classify_key("XXX______"), TerminalState::Illegal);
    }

    #[test]
    fn full_board_without_lines_is_draw() {
        assert_eq!(classify_key("XOXXOOOXX"), TerminalState::Draw);
        assert_eq!(classify_key("XOXOXOOXO"), TerminalState::Draw);
    }

    #[test]
    fn terminal_scores() {
        assert_eq!(TerminalState::Won(Mark::X).score(), Some(1));
        assert_eq!(TerminalState::Won(Mark::O).score(), Some(-1));
        assert_eq!(TerminalState::Draw.score(), Some(0));
        assert_eq!(TerminalState::InProgress.score(), None);
        assert!(!TerminalState::Illegal.is_terminal());
    }
}
