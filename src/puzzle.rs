// Crossword – A crossword game
// Copyright (C) 2024  The Crossword authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::HashSet;
use std::fmt;
use super::clue::{Clue, Direction};
use super::definition::{Difficulty, PuzzleDefinition};
use super::grid::{CrosswordCell, Grid};
use super::solution_key::{SolutionKey, BLOCK};

// Position of a cell, displayed as “row-col”
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: u32,
    pub col: u32,
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

// A playable copy of a puzzle. Cloning copies the whole grid so two
// games never share their letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordPuzzle {
    definition: PuzzleDefinition,
    grid: Grid,
}

impl CrosswordPuzzle {
    pub fn new(
        definition: PuzzleDefinition,
        key: &SolutionKey,
    ) -> CrosswordPuzzle {
        let grid = Grid::build(&definition, key);

        CrosswordPuzzle { definition, grid }
    }

    pub fn definition(&self) -> &PuzzleDefinition {
        &self.definition
    }

    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn title(&self) -> &str {
        &self.definition.title
    }

    pub fn difficulty(&self) -> Difficulty {
        self.definition.difficulty
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn clues(&self) -> &[Clue] {
        &self.definition.clues
    }

    pub fn clue(&self, id: &str) -> Option<&Clue> {
        self.definition.clues.iter().find(|clue| clue.id == id)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // Positions that fall outside the grid are left out rather than
    // treated as an error
    pub fn cells_for_clue(&self, clue: &Clue) -> Vec<&CrosswordCell> {
        clue.positions()
            .filter_map(|(row, col)| self.grid.get(row, col))
            .collect()
    }

    pub fn clue_for_cell(
        &self,
        row: u32,
        col: u32,
        preferred_direction: Option<Direction>,
    ) -> Option<&Clue> {
        let mut matching = self.definition.clues.iter()
            .filter(|clue| clue.covers(row, col))
            .peekable();

        let &first = matching.peek()?;

        if let Some(direction) = preferred_direction {
            if let Some(preferred) =
                matching.find(|clue| clue.direction == direction)
            {
                return Some(preferred);
            }
        }

        Some(first)
    }

    pub fn is_solved(&self) -> bool {
        self.grid.cells()
            .filter(|cell| !cell.is_block())
            .all(|cell| cell.is_correct())
    }

    pub fn incorrect_cells(&self) -> HashSet<CellKey> {
        self.grid.cells()
            .filter(|cell| cell.is_incorrect())
            .map(|cell| CellKey { row: cell.row(), col: cell.col() })
            .collect()
    }

    // Stores the player’s letter for a cell. Blocks and positions
    // outside the grid are ignored. Returns whether anything changed.
    pub fn set_user_letter(
        &mut self,
        row: u32,
        col: u32,
        letter: Option<char>,
    ) -> bool {
        let Some(cell) = self.grid.get_mut(row, col)
        else {
            return false;
        };

        if cell.is_block() {
            return false;
        }

        let letter = letter.and_then(|ch| ch.to_uppercase().next());

        if cell.user_letter() == letter {
            false
        } else {
            cell.set_user_letter(letter);
            true
        }
    }

    pub fn clear_user_letters(&mut self) {
        for cell in self.grid.cells_mut() {
            cell.set_user_letter(None);
        }
    }

    pub fn playable_count(&self) -> usize {
        self.grid.cells().filter(|cell| !cell.is_block()).count()
    }

    pub fn filled_count(&self) -> usize {
        self.grid.cells()
            .filter(|cell| !cell.is_block() && cell.user_letter().is_some())
            .count()
    }

    // The player’s letters as one string per row in the form sent for
    // verification. Blocks are written as ‘#’ and empty cells as
    // spaces.
    pub fn user_solution(&self) -> Vec<String> {
        self.grid.rows()
            .map(|row| {
                row.iter().map(|cell| {
                    if cell.is_block() {
                        BLOCK
                    } else {
                        cell.user_letter().unwrap_or(' ')
                    }
                }).collect::<String>()
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn clue(
        id: &str,
        number: u32,
        direction: Direction,
        row: u32,
        col: u32,
        length: u32,
    ) -> Clue {
        Clue {
            id: id.to_string(),
            number,
            direction,
            row,
            col,
            length,
            prompt: format!("Clue {}", id),
        }
    }

    // C A T
    // A # O
    // B O Y
    fn cab_puzzle() -> CrosswordPuzzle {
        let definition = PuzzleDefinition {
            id: "cab".to_string(),
            title: "Cab".to_string(),
            difficulty: Difficulty::Easy,
            width: 3,
            height: 3,
            clues: vec![
                clue("a1", 1, Direction::Across, 0, 0, 3),
                clue("a3", 3, Direction::Across, 2, 0, 3),
                clue("d1", 1, Direction::Down, 0, 0, 3),
                clue("d2", 2, Direction::Down, 0, 2, 3),
            ],
            solution: None,
        };

        CrosswordPuzzle::new(
            definition,
            &SolutionKey::new("CAT\nA#O\nBOY").unwrap(),
        )
    }

    fn fill(puzzle: &mut CrosswordPuzzle, rows: &[&str]) {
        for (row, letters) in rows.iter().enumerate() {
            for (col, letter) in letters.chars().enumerate() {
                if letter != '.' {
                    puzzle.set_user_letter(
                        row as u32,
                        col as u32,
                        Some(letter),
                    );
                }
            }
        }
    }

    #[test]
    fn cells_for_clue() {
        let puzzle = cab_puzzle();

        let cells = puzzle.cells_for_clue(puzzle.clue("a3").unwrap());
        assert_eq!(
            cells.iter().map(|c| (c.row(), c.col())).collect::<Vec<_>>(),
            [(2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(
            cells.iter().filter_map(|c| c.letter()).collect::<String>(),
            "BOY",
        );

        let cells = puzzle.cells_for_clue(puzzle.clue("d2").unwrap());
        assert_eq!(
            cells.iter().filter_map(|c| c.letter()).collect::<String>(),
            "TOY",
        );
        assert!(cells.iter().all(|c| c.col() == 2));
    }

    #[test]
    fn cells_for_clue_off_grid() {
        let puzzle = cab_puzzle();

        let cells = puzzle.cells_for_clue(
            &clue("x", 9, Direction::Across, 1, 1, 5),
        );
        assert_eq!(
            cells.iter().map(|c| (c.row(), c.col())).collect::<Vec<_>>(),
            [(1, 1), (1, 2)],
        );

        let cells = puzzle.cells_for_clue(
            &clue("y", 9, Direction::Down, 4, 0, 2),
        );
        assert!(cells.is_empty());
    }

    #[test]
    fn clue_for_cell() {
        let puzzle = cab_puzzle();

        let id = |row, col, direction| {
            puzzle.clue_for_cell(row, col, direction)
                .map(|clue| clue.id.as_str())
        };

        // Covered by both a1 and d1
        assert_eq!(id(0, 0, None), Some("a1"));
        assert_eq!(id(0, 0, Some(Direction::Across)), Some("a1"));
        assert_eq!(id(0, 0, Some(Direction::Down)), Some("d1"));

        // Only covered by an across clue
        assert_eq!(id(0, 1, Some(Direction::Down)), Some("a1"));
        // Only covered by a down clue
        assert_eq!(id(1, 2, Some(Direction::Across)), Some("d2"));
        assert_eq!(id(2, 2, Some(Direction::Down)), Some("d2"));

        assert_eq!(id(1, 1, None), None);
        assert_eq!(id(7, 7, Some(Direction::Across)), None);
    }

    #[test]
    fn solved() {
        let mut puzzle = cab_puzzle();

        assert!(!puzzle.is_solved());
        assert!(puzzle.incorrect_cells().is_empty());

        fill(&mut puzzle, &["cat", "a.o", "bo."]);
        assert!(!puzzle.is_solved());
        assert!(puzzle.incorrect_cells().is_empty());

        fill(&mut puzzle, &["...", "...", "..y"]);
        assert!(puzzle.is_solved());
    }

    #[test]
    fn empty_puzzle_is_solved() {
        let definition = PuzzleDefinition {
            id: "blocks".to_string(),
            title: "Blocks".to_string(),
            difficulty: Difficulty::Easy,
            width: 2,
            height: 1,
            clues: Vec::new(),
            solution: None,
        };
        let puzzle = CrosswordPuzzle::new(
            definition,
            &SolutionKey::new("##").unwrap(),
        );

        assert_eq!(puzzle.playable_count(), 0);
        assert!(puzzle.is_solved());
    }

    #[test]
    fn incorrect_cells() {
        let mut puzzle = cab_puzzle();

        fill(&mut puzzle, &["CUT", "...", "BOX"]);

        let mut incorrect = puzzle.incorrect_cells()
            .into_iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>();
        incorrect.sort_unstable();

        assert_eq!(incorrect, ["0-1", "2-2"]);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn set_user_letter() {
        let mut puzzle = cab_puzzle();

        assert!(puzzle.set_user_letter(0, 0, Some('c')));
        assert_eq!(puzzle.grid().at(0, 0).user_letter(), Some('C'));
        assert!(!puzzle.set_user_letter(0, 0, Some('C')));

        // Blocks and positions outside the grid can’t be changed
        assert!(!puzzle.set_user_letter(1, 1, Some('A')));
        assert_eq!(puzzle.grid().at(1, 1).user_letter(), None);
        assert!(!puzzle.set_user_letter(3, 0, Some('A')));

        assert_eq!(puzzle.filled_count(), 1);
        assert_eq!(puzzle.playable_count(), 8);

        assert!(puzzle.set_user_letter(0, 0, None));
        assert_eq!(puzzle.filled_count(), 0);

        fill(&mut puzzle, &["CAT"]);
        puzzle.clear_user_letters();
        assert_eq!(puzzle.filled_count(), 0);
    }

    #[test]
    fn user_solution() {
        let mut puzzle = cab_puzzle();

        fill(&mut puzzle, &["CA.", "A", "..Y"]);

        assert_eq!(puzzle.user_solution(), ["CA ", "A# ", "  Y"]);
    }

    #[test]
    fn clone_does_not_share_cells() {
        let original = cab_puzzle();
        let mut copy = original.clone();

        assert_eq!(copy, original);

        copy.set_user_letter(0, 0, Some('C'));

        assert_eq!(copy.grid().at(0, 0).user_letter(), Some('C'));
        assert_eq!(original.grid().at(0, 0).user_letter(), None);
        assert_ne!(copy, original);
    }
}
