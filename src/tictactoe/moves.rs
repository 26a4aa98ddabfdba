//! One-ply move generation

use super::{CELL_COUNT, Mark, Position, TerminalState};

/// Lazy, restartable sequence of `(cell, child)` pairs for one position.
///
/// Cells are visited in ascending order. Candidates that classify as
/// [`TerminalState::Illegal`] are skipped. Cloning the iterator, or calling
/// [`Position::children`] again, restarts from cell 0.
#[derive(Debug, Clone)]
pub struct Children {
    parent: Position,
    mark: Mark,
    next_cell: usize,
}

impl Iterator for Children {
    type Item = (usize, Position);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_cell < CELL_COUNT {
            let cell = self.next_cell;
            self.next_cell += 1;

            if !self.parent.is_empty(cell) {
                continue;
            }
            let child = self.parent.with_mark(cell, self.mark);
            if child.classify() != TerminalState::Illegal {
                return Some((cell, child));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CELL_COUNT - self.next_cell))
    }
}

impl Position {
    /// Every legal one-ply successor, placing the side-to-move's mark.
    ///
    /// Children are produced for any position with a defined side to move;
    /// callers decide whether a finished game should be expanded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] if the position has no
    /// defined side to move.
    pub fn children(&self) -> Result<Children, crate::Error> {
        Ok(Children {
            parent: *self,
            mark: self.to_play()?,
            next_cell: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn empty_board_has_nine_children_in_cell_order() {
        let children: Vec<_> = Position::new().children().unwrap().collect();
        assert_eq!(children.len(), 9);
        for (expected, (cell, child)) in children.iter().enumerate() {
            assert_eq!(*cell, expected);
            assert_eq!(child.get(expected), Some(Cell::X));
            assert_eq!(child.occupied_count(), 1);
        }
    }

    #[test]
    fn children_place_the_side_to_move() {
        let parent: Position = "X________".parse().unwrap();
        for (cell, child) in parent.children().unwrap() {
            assert_eq!(child.get(cell), Some(Cell::O));
            assert_eq!(child.differential(), 0);
        }
    }

    #[test]
    fn sequence_is_restartable() {
        let parent: Position = "XOX_O____".parse().unwrap();
        let first: Vec<_> = parent.children().unwrap().collect();
        let again: Vec<_> = parent.children().unwrap().collect();
        assert_eq!(first, again);

        let mut iter = parent.children().unwrap();
        let snapshot = iter.clone();
        iter.next();
        assert_eq!(snapshot.collect::<Vec<_>>(), first);
    }

    #[test]
    fn illegal_candidates_are_filtered() {
        // O has just completed row 1; any further mark is an illegal continuation
        let parent: Position = "XX_OOOX__".parse().unwrap();
        assert_eq!(parent.classify(), TerminalState::Won(Mark::O));
        assert_eq!(parent.children().unwrap().count(), 0);
    }

    #[test]
    fn invalid_differential_has_no_side_to_move() {
        let parent: Position = "OO_______".parse().unwrap();
        assert!(matches!(
            parent.children(),
            Err(crate::Error::InvalidPieceCounts { .. })
        ));
    }
}
