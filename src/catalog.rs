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

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;
use super::clue::{Clue, Direction};
use super::definition::{self, Difficulty, PuzzleDefinition};
use super::puzzle::CrosswordPuzzle;
use super::solution_key::{self, SolutionKey};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Empty,
    DuplicateId(String),
    MissingSolution(String),
    InvalidSolution(String, solution_key::Error),
    InvalidDefinition(String, definition::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "the catalog has no puzzles"),
            Error::DuplicateId(id) => {
                write!(f, "{}: puzzle id is used more than once", id)
            },
            Error::MissingSolution(id) => {
                write!(f, "{}: no solution key for puzzle", id)
            },
            Error::InvalidSolution(id, e) => write!(f, "{}: {}", id, e),
            Error::InvalidDefinition(id, e) => write!(f, "{}: {}", id, e),
        }
    }
}

// Read-only set of puzzles along with the solution key for each one
#[derive(Debug)]
pub struct Catalog {
    definitions: Vec<PuzzleDefinition>,
    solutions: HashMap<String, SolutionKey>,
}

impl Catalog {
    pub fn new(
        definitions: Vec<PuzzleDefinition>,
        solutions: HashMap<String, SolutionKey>,
    ) -> Result<Catalog, Error> {
        if definitions.is_empty() {
            return Err(Error::Empty);
        }

        let mut ids = HashSet::new();

        for definition in definitions.iter() {
            if !ids.insert(definition.id.as_str()) {
                return Err(Error::DuplicateId(definition.id.clone()));
            }

            let Some(key) = solutions.get(&definition.id)
            else {
                return Err(Error::MissingSolution(definition.id.clone()));
            };

            definition.validate(key).map_err(|e| {
                Error::InvalidDefinition(definition.id.clone(), e)
            })?;
        }

        Ok(Catalog { definitions, solutions })
    }

    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();

        CATALOG.get_or_init(|| {
            match load_builtin() {
                Ok(catalog) => catalog,
                Err(e) => panic!("built-in catalog: {}", e),
            }
        })
    }

    pub fn definitions(&self) -> &[PuzzleDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn get(&self, id: &str) -> Option<&PuzzleDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    pub fn list_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Vec<&PuzzleDefinition> {
        self.definitions.iter()
            .filter(|d| d.difficulty == difficulty)
            .collect()
    }

    // With a seed the choice is repeatable, otherwise it is random.
    // If there is nothing for the difficulty then the first puzzle in
    // the catalog is used instead.
    pub fn pick(
        &self,
        difficulty: Difficulty,
        seed: Option<u32>,
    ) -> &PuzzleDefinition {
        let candidates = self.list_by_difficulty(difficulty);

        if candidates.is_empty() {
            return &self.definitions[0];
        }

        let index = match seed {
            Some(seed) => seed as usize % candidates.len(),
            None => random_index(candidates.len()),
        };

        candidates[index]
    }

    pub fn solution_key(&self, id: &str) -> Result<&SolutionKey, Error> {
        self.solutions.get(id)
            .ok_or_else(|| Error::MissingSolution(id.to_string()))
    }

    // Makes a fresh playable grid for any definition whose id has a
    // key in this catalog. The definition doesn’t have to be the one
    // stored in the catalog so it is checked against the key first.
    pub fn build_puzzle(
        &self,
        definition: &PuzzleDefinition,
    ) -> Result<CrosswordPuzzle, Error> {
        let key = self.solution_key(&definition.id)?;

        definition.validate(key).map_err(|e| {
            Error::InvalidDefinition(definition.id.clone(), e)
        })?;

        Ok(CrosswordPuzzle::new(definition.clone(), key))
    }

    pub fn puzzle(
        &self,
        difficulty: Difficulty,
        seed: Option<u32>,
    ) -> CrosswordPuzzle {
        self.build_own(self.pick(difficulty, seed))
    }

    pub fn puzzle_at(&self, index: usize) -> CrosswordPuzzle {
        self.build_own(&self.definitions[index % self.definitions.len()])
    }

    fn build_own(&self, definition: &PuzzleDefinition) -> CrosswordPuzzle {
        // Every definition was checked for a key in Catalog::new
        CrosswordPuzzle::new(
            definition.clone(),
            &self.solutions[&definition.id],
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn log_error(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(message: &str) {
    eprintln!("{}", message);
}

// A failing random source still has to give a puzzle so it falls back
// to the first candidate
fn random_index(n: usize) -> usize {
    let mut bytes = [0u8; 4];

    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u32::from_ne_bytes(bytes) as usize % n,
        Err(e) => {
            log_error(&format!("random puzzle choice failed: {}", e));
            0
        },
    }
}

struct BuiltinPuzzle {
    id: &'static str,
    title: &'static str,
    difficulty: Difficulty,
    width: u32,
    height: u32,
    // (id, number, direction, row, col, length, prompt)
    clues: &'static [(
        &'static str,
        u32,
        Direction,
        u32,
        u32,
        u32,
        &'static str,
    )],
    solution: &'static str,
}

static BUILTIN_PUZZLES: [BuiltinPuzzle; 3] = [
    BuiltinPuzzle {
        id: "base-basics-1",
        title: "Base Basics",
        difficulty: Difficulty::Easy,
        width: 7,
        height: 7,
        clues: &[
            ("a1", 1, Direction::Across, 0, 2, 4,
             "The L2 network built on Ethereum"),
            ("a2", 2, Direction::Across, 4, 0, 7,
             "Where the new economy is moving (___ economy)"),
            ("d1", 1, Direction::Down, 0, 2, 5,
             "Core mantra: ___ on Base"),
            ("d2", 2, Direction::Down, 0, 5, 3,
             "The gas token used on Base"),
        ],
        solution: "\
            ##BASE#\n\
            ##U##T#\n\
            ##I##H#\n\
            ##L####\n\
            ONCHAIN\n\
            #######\n\
            #######",
    },
    BuiltinPuzzle {
        id: "base-culture-1",
        title: "Base Culture",
        difficulty: Difficulty::Medium,
        width: 9,
        height: 9,
        clues: &[
            ("a1", 1, Direction::Across, 1, 1, 4,
             "Create a new NFT"),
            ("a2", 2, Direction::Across, 3, 0, 8,
             "Exchange that incubated Base"),
            ("a3", 3, Direction::Across, 5, 2, 5,
             "We are all gonna make it (abbr)"),
            ("d1", 1, Direction::Down, 1, 1, 5,
             "Viral meme coin on Base (cat)"),
            ("d2", 2, Direction::Down, 0, 4, 5,
             "Creator of Base (first name)"),
            ("d3", 3, Direction::Down, 3, 7, 3,
             "Gas token"),
        ],
        solution: "\
            ####J####\n\
            #MINT####\n\
            #O##S####\n\
            COINBASE#\n\
            #C##E##T#\n\
            #HWAGMIH#\n\
            #I#######\n\
            #########\n\
            #########",
    },
    BuiltinPuzzle {
        id: "crypto-expert-1",
        title: "Crypto Expert",
        difficulty: Difficulty::Hard,
        width: 11,
        height: 11,
        clues: &[
            ("a1", 1, Direction::Across, 0, 0, 9,
             "Entity that orders transactions on L2"),
            ("a2", 2, Direction::Across, 2, 2, 4,
             "Data storage unit introduced in EIP-4844"),
            ("a3", 3, Direction::Across, 4, 0, 8,
             "Technology stack Base is built on"),
            ("a4", 4, Direction::Across, 6, 3, 6,
             "Scaling solution type (Optimistic ___)"),
            ("d1", 1, Direction::Down, 0, 0, 10,
             "Network of networks (___chain)"),
            ("d2", 2, Direction::Down, 0, 5, 7,
             "Mainnet launch month (2023)"),
            ("d3", 3, Direction::Down, 4, 9, 3,
             "Layer 1 blockchain"),
        ],
        solution: "\
            SEQUENCER##\n\
            U####U#####\n\
            P#BLOB#####\n\
            E####G#####\n\
            OPTIMISM#E#\n\
            C####S###T#\n\
            H##ROLLUPH#\n\
            A##########\n\
            I##########\n\
            N##########\n\
            ###########",
    },
];

// Builds the catalog of puzzles that ship with the game. Catalog::builtin
// keeps a single copy of this for the whole program.
pub fn load_builtin() -> Result<Catalog, Error> {
    let mut definitions = Vec::with_capacity(BUILTIN_PUZZLES.len());
    let mut solutions = HashMap::with_capacity(BUILTIN_PUZZLES.len());

    for builtin in BUILTIN_PUZZLES.iter() {
        let key = SolutionKey::new(builtin.solution).map_err(|e| {
            Error::InvalidSolution(builtin.id.to_string(), e)
        })?;

        solutions.insert(builtin.id.to_string(), key);

        definitions.push(PuzzleDefinition {
            id: builtin.id.to_string(),
            title: builtin.title.to_string(),
            difficulty: builtin.difficulty,
            width: builtin.width,
            height: builtin.height,
            clues: builtin.clues.iter().map(|clue| {
                let &(id, number, direction, row, col, length, prompt) =
                    clue;

                Clue {
                    id: id.to_string(),
                    number,
                    direction,
                    row,
                    col,
                    length,
                    prompt: prompt.to_string(),
                }
            }).collect(),
            solution: None,
        });
    }

    Catalog::new(definitions, solutions)
}

#[cfg(test)]
mod test {
    use super::*;

    fn fill_from_key(puzzle: &mut CrosswordPuzzle, key: &SolutionKey) {
        for row in 0..key.height() {
            for col in 0..key.width() {
                puzzle.set_user_letter(row, col, key.letter(row, col));
            }
        }
    }

    #[test]
    fn builtin_is_valid() {
        let catalog = load_builtin().unwrap();

        assert_eq!(catalog.len(), 3);

        for definition in catalog.definitions() {
            let key = catalog.solution_key(&definition.id).unwrap();
            assert_eq!(definition.validate(key), Ok(()));
        }
    }

    #[test]
    fn built_grids() {
        let catalog = Catalog::builtin();

        for definition in catalog.definitions() {
            let puzzle = catalog.build_puzzle(definition).unwrap();

            assert_eq!(
                puzzle.grid().rows().count(),
                definition.height as usize,
            );

            for row in puzzle.grid().rows() {
                assert_eq!(row.len(), definition.width as usize);

                for cell in row {
                    if cell.is_block() {
                        assert_eq!(cell.letter(), None);
                    } else {
                        assert!(cell.letter().unwrap().is_ascii_uppercase());
                    }
                }
            }
        }
    }

    #[test]
    fn clue_numbers() {
        let puzzle = Catalog::builtin().puzzle(Difficulty::Easy, Some(0));

        assert_eq!(puzzle.id(), "base-basics-1");
        assert_eq!(puzzle.grid().at(0, 2).number(), Some(1));
        assert_eq!(puzzle.grid().at(0, 5).number(), Some(2));
        assert_eq!(puzzle.grid().at(4, 0).number(), Some(2));
        assert_eq!(puzzle.grid().at(0, 3).number(), None);
    }

    #[test]
    fn list_by_difficulty() {
        let catalog = Catalog::builtin();

        for (difficulty, id) in [
            (Difficulty::Easy, "base-basics-1"),
            (Difficulty::Medium, "base-culture-1"),
            (Difficulty::Hard, "crypto-expert-1"),
        ] {
            let list = catalog.list_by_difficulty(difficulty);
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].id, id);
        }
    }

    #[test]
    fn pick() {
        let catalog = Catalog::builtin();

        for seed in [0, 1, 17, u32::MAX] {
            assert_eq!(
                catalog.pick(Difficulty::Medium, Some(seed)).id,
                catalog.pick(Difficulty::Medium, Some(seed)).id,
            );
        }

        assert_eq!(catalog.pick(Difficulty::Hard, None).id, "crypto-expert-1");
    }

    fn two_easy_catalog() -> Catalog {
        let key = SolutionKey::new("AB").unwrap();
        let definitions = ["one", "two"].iter().map(|&id| {
            PuzzleDefinition {
                id: id.to_string(),
                title: id.to_string(),
                difficulty: Difficulty::Easy,
                width: 2,
                height: 1,
                clues: Vec::new(),
                solution: None,
            }
        }).collect::<Vec<_>>();
        let solutions = ["one", "two"].iter()
            .map(|&id| (id.to_string(), key.clone()))
            .collect::<HashMap<_, _>>();

        Catalog::new(definitions, solutions).unwrap()
    }

    #[test]
    fn pick_with_seed() {
        let catalog = two_easy_catalog();

        assert_eq!(catalog.pick(Difficulty::Easy, Some(0)).id, "one");
        assert_eq!(catalog.pick(Difficulty::Easy, Some(1)).id, "two");
        assert_eq!(catalog.pick(Difficulty::Easy, Some(5)).id, "two");

        let random = &catalog.pick(Difficulty::Easy, None).id;
        assert!(random == "one" || random == "two");
    }

    #[test]
    fn pick_fallback() {
        let catalog = two_easy_catalog();

        assert_eq!(catalog.pick(Difficulty::Hard, Some(1)).id, "one");
        assert_eq!(catalog.pick(Difficulty::Medium, None).id, "one");
    }

    #[test]
    fn missing_solution() {
        let definition = Catalog::builtin().definitions()[0].clone();

        assert_eq!(
            Catalog::new(vec![definition.clone()], HashMap::new())
                .unwrap_err(),
            Error::MissingSolution("base-basics-1".to_string()),
        );

        let mut unknown = definition;
        unknown.id = "unknown".to_string();
        assert_eq!(
            &Catalog::builtin().build_puzzle(&unknown)
                .unwrap_err()
                .to_string(),
            "unknown: no solution key for puzzle",
        );
    }

    #[test]
    fn build_puzzle_checks_key() {
        let catalog = Catalog::builtin();
        let mut definition = catalog.get("base-culture-1").unwrap().clone();
        definition.height = 8;

        assert_eq!(
            catalog.build_puzzle(&definition).unwrap_err(),
            Error::InvalidDefinition(
                "base-culture-1".to_string(),
                definition::Error::DimensionMismatch,
            ),
        );
    }

    #[test]
    fn bad_catalogs() {
        assert_eq!(
            Catalog::new(Vec::new(), HashMap::new()).unwrap_err(),
            Error::Empty,
        );

        let catalog = Catalog::builtin();
        let definition = catalog.definitions()[0].clone();
        let solutions = [(
            definition.id.clone(),
            catalog.solution_key(&definition.id).unwrap().clone(),
        )].into_iter().collect::<HashMap<_, _>>();

        assert_eq!(
            Catalog::new(
                vec![definition.clone(), definition.clone()],
                solutions.clone(),
            ).unwrap_err(),
            Error::DuplicateId("base-basics-1".to_string()),
        );

        let mut bad = definition;
        bad.width = 6;
        assert_eq!(
            Catalog::new(vec![bad], solutions).unwrap_err(),
            Error::InvalidDefinition(
                "base-basics-1".to_string(),
                definition::Error::DimensionMismatch,
            ),
        );
    }

    #[test]
    fn solve_base_basics() {
        let catalog = Catalog::builtin();
        let mut puzzle = catalog.puzzle(Difficulty::Easy, Some(0));
        let key = catalog.solution_key("base-basics-1").unwrap();

        assert!(!puzzle.is_solved());

        fill_from_key(&mut puzzle, key);
        assert!(puzzle.is_solved());
        assert!(puzzle.incorrect_cells().is_empty());

        // Lower case input still counts
        puzzle.clear_user_letters();
        for row in 0..key.height() {
            for col in 0..key.width() {
                let letter = key.letter(row, col)
                    .map(|letter| letter.to_ascii_lowercase());
                puzzle.set_user_letter(row, col, letter);
            }
        }
        assert!(puzzle.is_solved());
    }

    #[test]
    fn one_wrong_letter() {
        let catalog = Catalog::builtin();
        let mut puzzle = catalog.puzzle(Difficulty::Easy, Some(0));

        // The ‘B’ of BASE
        puzzle.set_user_letter(0, 2, Some('X'));

        let incorrect = puzzle.incorrect_cells();
        assert_eq!(incorrect.len(), 1);
        assert_eq!(
            incorrect.iter().next().map(|key| key.to_string()),
            Some("0-2".to_string()),
        );
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn fresh_puzzles_are_separate() {
        let catalog = Catalog::builtin();
        let mut first = catalog.puzzle(Difficulty::Easy, Some(0));
        let second = catalog.puzzle(Difficulty::Easy, Some(0));

        first.set_user_letter(0, 2, Some('B'));

        assert_eq!(second.grid().at(0, 2).user_letter(), None);
    }
}
