//! Enumeration of every legal position with a given number of marks
//!
//! Two independent strategies produce the same sets; the retrograde builder can
//! use either, and the tests check that they agree ply by ply.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CELL_COUNT, Cell, Position, TerminalState};

/// Strategy for listing the legal positions of one ply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Enumeration {
    /// Place marks one cell at a time, pruning boards already seen
    #[default]
    Recursive,
    /// Permute a fixed multiset of marks over the nine cells and filter
    Permutation,
}

impl Enumeration {
    /// Distinct legal positions with exactly `marks` occupied cells
    pub fn positions(self, marks: usize) -> Vec<Position> {
        match self {
            Enumeration::Recursive => placed_positions(marks),
            Enumeration::Permutation => permuted_positions(marks),
        }
    }
}

/// Recursive placement: branch on every empty cell, alternating X then O,
/// and only descend into boards not seen before.
pub fn placed_positions(marks: usize) -> Vec<Position> {
    fn place(
        board: Position,
        remaining: usize,
        seen: &mut HashSet<String>,
        out: &mut Vec<Position>,
    ) {
        if remaining == 0 {
            if board.classify() != TerminalState::Illegal {
                out.push(board);
            }
            return;
        }

        // Boards on this path never leave the {0, 1} differential
        let Ok(mark) = board.to_play() else {
            return;
        };
        for cell in board.empty_cells() {
            let next = board.with_mark(cell, mark);
            if seen.insert(next.key()) {
                place(next, remaining - 1, seen, out);
            }
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    place(Position::new(), marks.min(CELL_COUNT), &mut seen, &mut out);
    out
}

/// Permutation-and-filter: every distinct arrangement of `ceil(n/2)` X marks,
/// `floor(n/2)` O marks and `9 - n` blanks, kept if it is not illegal.
pub fn permuted_positions(marks: usize) -> Vec<Position> {
    let marks = marks.min(CELL_COUNT);
    let x_count = marks.div_ceil(2);
    let o_count = marks / 2;

    // Ranks sort as blank < X < O so the first arrangement is the sorted one
    let mut ranks = [0u8; CELL_COUNT];
    for (i, rank) in ranks.iter_mut().enumerate() {
        *rank = if i < CELL_COUNT - marks {
            0
        } else if i < CELL_COUNT - o_count {
            1
        } else {
            2
        };
    }
    debug_assert_eq!(ranks.iter().filter(|&&r| r == 1).count(), x_count);

    let mut out = Vec::new();
    loop {
        let position = Position::from_cells(ranks.map(|rank| match rank {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        }));
        if position.classify() != TerminalState::Illegal {
            out.push(position);
        }
        if !next_permutation(&mut ranks) {
            break;
        }
    }
    out
}

/// Advance to the next lexicographic arrangement; false once the last one is
/// reached. Equal elements are never swapped, so each distinct arrangement of
/// the multiset is visited exactly once.
fn next_permutation(items: &mut [u8]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|&item| item > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_permutation_visits_distinct_arrangements() {
        let mut items = [0u8, 1, 1];
        let mut seen = vec![items];
        while next_permutation(&mut items) {
            seen.push(items);
        }
        assert_eq!(seen, vec![[0, 1, 1], [1, 0, 1], [1, 1, 0]]);
    }

    #[test]
    fn small_plies_match_closed_form() {
        // No line can be complete before five marks, so every arrangement counts
        assert_eq!(placed_positions(0), vec![Position::new()]);
        assert_eq!(placed_positions(1).len(), 9);
        assert_eq!(placed_positions(2).len(), 72);
        assert_eq!(permuted_positions(3).len(), 252);
        assert_eq!(permuted_positions(4).len(), 756);
    }

    #[test]
    fn placed_positions_are_distinct() {
        for marks in 0..=CELL_COUNT {
            let positions = placed_positions(marks);
            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), positions.len(), "duplicates at ply {marks}");
        }
    }

    #[test]
    fn default_strategy_is_recursive() {
        assert_eq!(Enumeration::default(), Enumeration::Recursive);
        assert_eq!(
            Enumeration::Permutation.positions(1).len(),
            Enumeration::Recursive.positions(1).len()
        );
    }
}
