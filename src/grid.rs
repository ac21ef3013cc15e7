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

use serde::Serialize;
use std::collections::HashMap;
use super::definition::PuzzleDefinition;
use super::solution_key::SolutionKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordCell {
    row: u32,
    col: u32,
    letter: Option<char>,
    user_letter: Option<char>,
    is_block: bool,
    number: Option<u32>,
}

impl CrosswordCell {
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn user_letter(&self) -> Option<char> {
        self.user_letter
    }

    pub fn is_block(&self) -> bool {
        self.is_block
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn set_user_letter(&mut self, letter: Option<char>) {
        self.user_letter = letter;
    }

    pub fn is_correct(&self) -> bool {
        match (self.user_letter, self.letter) {
            (Some(user_letter), Some(letter)) => {
                same_letter(user_letter, letter)
            },
            _ => false,
        }
    }

    pub fn is_incorrect(&self) -> bool {
        !self.is_block && self.user_letter.is_some() && !self.is_correct()
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[CrosswordCell]>,
    width: u32,
    height: u32,
}

impl Grid {
    pub fn build(definition: &PuzzleDefinition, key: &SolutionKey) -> Grid {
        let mut numbers = HashMap::new();

        // If two clues start on the same cell then the first one in
        // the list decides the number
        for clue in definition.clues.iter() {
            numbers.entry(clue.start()).or_insert(clue.number);
        }

        let mut cells = Vec::with_capacity(
            definition.width as usize * definition.height as usize
        );

        for row in 0..definition.height {
            for col in 0..definition.width {
                let letter = if row < key.height() && col < key.width() {
                    key.letter(row, col)
                } else {
                    None
                };

                cells.push(CrosswordCell {
                    row,
                    col,
                    letter,
                    user_letter: None,
                    is_block: letter.is_none(),
                    number: numbers.get(&(row, col)).copied(),
                });
            }
        }

        Grid {
            cells: cells.into_boxed_slice(),
            width: definition.width,
            height: definition.height,
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    pub fn at(&self, row: u32, col: u32) -> &CrosswordCell {
        assert!(col < self.width);

        &self.cells[self.index(row, col)]
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&CrosswordCell> {
        self.contains(row, col).then(|| self.at(row, col))
    }

    pub fn get_mut(
        &mut self,
        row: u32,
        col: u32,
    ) -> Option<&mut CrosswordCell> {
        if self.contains(row, col) {
            let index = self.index(row, col);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &CrosswordCell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut CrosswordCell> {
        self.cells.iter_mut()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CrosswordCell]> {
        // Chunk size can’t be zero even for an empty grid
        self.cells.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::clue::{Clue, Direction};
    use super::super::definition::Difficulty;

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
            prompt: String::new(),
        }
    }

    fn definition(clues: Vec<Clue>) -> PuzzleDefinition {
        PuzzleDefinition {
            id: "tiny".to_string(),
            title: "Tiny".to_string(),
            difficulty: Difficulty::Easy,
            width: 3,
            height: 3,
            clues,
            solution: None,
        }
    }

    #[test]
    fn build() {
        let definition = definition(vec![
            clue("a1", 1, Direction::Across, 0, 0, 3),
            clue("d1", 1, Direction::Down, 0, 0, 3),
            clue("d2", 2, Direction::Down, 0, 2, 3),
        ]);
        let key = SolutionKey::new("CAT\nA#O\nBOY").unwrap();
        let grid = Grid::build(&definition, &key);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 3));

        let cell = grid.at(0, 0);
        assert_eq!((cell.row(), cell.col()), (0, 0));
        assert_eq!(cell.letter(), Some('C'));
        assert_eq!(cell.number(), Some(1));
        assert!(!cell.is_block());
        assert_eq!(cell.user_letter(), None);

        assert_eq!(grid.at(0, 2).number(), Some(2));
        assert_eq!(grid.at(0, 1).number(), None);

        let block = grid.at(1, 1);
        assert!(block.is_block());
        assert_eq!(block.letter(), None);
        assert_eq!(block.number(), None);
    }

    #[test]
    fn first_clue_numbers_shared_start() {
        let definition = definition(vec![
            clue("a1", 7, Direction::Across, 0, 0, 3),
            clue("d1", 9, Direction::Down, 0, 0, 3),
        ]);
        let key = SolutionKey::new("CAT\nA#O\nBOY").unwrap();
        let grid = Grid::build(&definition, &key);

        assert_eq!(grid.at(0, 0).number(), Some(7));
    }

    #[test]
    fn small_key() {
        let definition = definition(Vec::new());
        let key = SolutionKey::new("AB").unwrap();
        let grid = Grid::build(&definition, &key);

        assert_eq!(grid.at(0, 1).letter(), Some('B'));
        assert!(grid.at(0, 2).is_block());
        assert!(grid.at(2, 0).is_block());
    }

    #[test]
    fn bounds() {
        let key = SolutionKey::new("CAT\nA#O\nBOY").unwrap();
        let mut grid = Grid::build(&definition(Vec::new()), &key);

        assert!(grid.get(2, 2).is_some());
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 3).is_none());
        assert!(grid.get_mut(0, 3).is_none());
    }

    #[test]
    fn correctness() {
        let key = SolutionKey::new("CAT\nA#O\nBOY").unwrap();
        let mut grid = Grid::build(&definition(Vec::new()), &key);

        let cell = grid.get_mut(0, 0).unwrap();
        assert!(!cell.is_correct());
        assert!(!cell.is_incorrect());

        cell.set_user_letter(Some('c'));
        assert!(cell.is_correct());
        assert!(!cell.is_incorrect());

        cell.set_user_letter(Some('X'));
        assert!(!cell.is_correct());
        assert!(cell.is_incorrect());

        let block = grid.get_mut(1, 1).unwrap();
        block.set_user_letter(Some('X'));
        assert!(!block.is_incorrect());
    }
}
