//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Cell, Mark, Position};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The mark that fills `line` three in a row, if any
    pub fn completed_by(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Mark> {
        let first = cells[line[0]].to_mark()?;
        line.iter()
            .all(|&idx| cells[idx] == first.to_cell())
            .then_some(first)
    }

    /// Distinct marks that own at least one completed line.
    ///
    /// A mark completing two lines at once is reported once.
    pub fn winning_marks(cells: &[Cell; 9]) -> BTreeSet<Mark> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::completed_by(cells, line))
            .collect()
    }

    /// Find all cells that would immediately complete a line for `mark`
    pub fn winning_moves(position: &Position, mark: Mark) -> BTreeSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(&position.cells, mark, line))
            .collect()
    }

    /// Find the winning cell in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], mark: Mark, line: &[usize; 3]) -> Option<usize> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(key: &str) -> Position {
        key.parse().unwrap()
    }

    #[test]
    fn test_winning_marks_horizontal() {
        let cells = position("XXX______").cells;
        assert_eq!(LineAnalyzer::winning_marks(&cells), BTreeSet::from([Mark::X]));
    }

    #[test]
    fn test_winning_marks_vertical() {
        let cells = position("O__O__O__").cells;
        assert_eq!(LineAnalyzer::winning_marks(&cells), BTreeSet::from([Mark::O]));
    }

    #[test]
    fn test_winning_marks_anti_diagonal() {
        let cells = position("__X_X_X__").cells;
        assert_eq!(LineAnalyzer::winning_marks(&cells), BTreeSet::from([Mark::X]));
        assert_eq!(
            LineAnalyzer::completed_by(&cells, &[2, 4, 6]),
            Some(Mark::X)
        );
    }

    #[test]
    fn test_winning_marks_deduplicates_double_lines() {
        // X X X
        // X O O
        // X O O
        let cells = position("XXXXOOXOO").cells;
        let marks = LineAnalyzer::winning_marks(&cells);
        assert_eq!(marks.into_iter().collect::<Vec<_>>(), vec![Mark::X]);
    }

    #[test]
    fn test_winning_marks_reports_both_players() {
        let cells = position("XXXOOO___").cells;
        assert_eq!(LineAnalyzer::winning_marks(&cells).len(), 2);
    }

    #[test]
    fn test_winning_moves() {
        let moves = LineAnalyzer::winning_moves(&position("X_X______"), Mark::X);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let moves = LineAnalyzer::winning_moves(&position("XX_X_____"), Mark::X);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![2, 6]);
    }

    #[test]
    fn test_blocked_line_has_no_winning_move() {
        let moves = LineAnalyzer::winning_moves(&position("XXO______"), Mark::X);
        assert!(moves.is_empty());
    }
}
