//! `GuessIt`: claim cells on a small grid, one per turn.
//!
//! Named after the `GuessIt` family in
//! `original_source/tests/mcts_tests.py`, but not a port of it: the
//! Python original's terminal reward rule lives in `games/guessit.py`,
//! which was filtered out of the retained corpus (see
//! `original_source/_INDEX.md`). This module defines its own
//! fully-specified, documented reward rule instead of guessing at the
//! original's — see `DESIGN.md` for the rationale. The shared-position,
//! round-robin shape is authentic; the scoring is this crate's own.

use crate::game::{Action, Game, StateHash};

const GRID_SIZE: usize = 4;

/// Claims one of the four grid cells, identified by its canonical index.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub struct Cell(pub usize);

impl Action for Cell {
    fn id(&self) -> usize {
        self.0
    }
}

/// A single player fills in all four cells; the reward is a constant win,
/// useful only as the smallest possible non-trivial `Game` (four actions,
/// depth four, no branching in outcome).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OnePlayerGuessIt {
    marked: [bool; GRID_SIZE],
}

impl OnePlayerGuessIt {
    fn marked_count(&self) -> usize {
        self.marked.iter().filter(|m| **m).count()
    }
}

impl Game for OnePlayerGuessIt {
    type Action = Cell;

    fn initial_state() -> Self {
        OnePlayerGuessIt::default()
    }

    fn action_space_size() -> usize {
        GRID_SIZE
    }

    fn legal_actions(&self) -> Vec<Cell> {
        (0..GRID_SIZE)
            .filter(|&i| !self.marked[i])
            .map(Cell)
            .collect()
    }

    fn take_action(&self, action: &Cell) -> Self {
        let mut next = self.clone();
        next.marked[action.0] = true;
        next
    }

    fn is_terminal(&self) -> bool {
        self.marked_count() == GRID_SIZE
    }

    fn terminal_value(&self) -> Vec<f64> {
        debug_assert!(self.is_terminal());
        vec![1.0]
    }

    fn current_player(&self) -> usize {
        0
    }

    fn num_players(&self) -> usize {
        1
    }

    fn hash(&self) -> StateHash {
        self.marked
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &m)| acc | ((m as u64) << i))
    }
}

/// Two players alternate claiming cells, starting with player 0. Cell
/// `TARGET` decides the game: whoever claims it wins, the other player
/// loses, and the game ends immediately, regardless of how many cells
/// remain unclaimed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TwoPlayerGuessIt {
    marked: [bool; GRID_SIZE],
}

const TARGET: usize = 3;

impl TwoPlayerGuessIt {
    fn marked_count(&self) -> usize {
        self.marked.iter().filter(|m| **m).count()
    }
}

impl Game for TwoPlayerGuessIt {
    type Action = Cell;

    fn initial_state() -> Self {
        TwoPlayerGuessIt::default()
    }

    fn action_space_size() -> usize {
        GRID_SIZE
    }

    fn legal_actions(&self) -> Vec<Cell> {
        (0..GRID_SIZE)
            .filter(|&i| !self.marked[i])
            .map(Cell)
            .collect()
    }

    fn take_action(&self, action: &Cell) -> Self {
        let mut next = self.clone();
        next.marked[action.0] = true;
        next
    }

    fn is_terminal(&self) -> bool {
        self.marked[TARGET]
    }

    fn terminal_value(&self) -> Vec<f64> {
        debug_assert!(self.is_terminal());
        // The mover who set TARGET was to-move when one fewer cell was
        // marked than now; player index alternates by marked-count parity.
        let winner = (self.marked_count() - 1) % 2;
        let mut values = vec![-1.0; 2];
        values[winner] = 1.0;
        values
    }

    fn current_player(&self) -> usize {
        self.marked_count() % 2
    }

    fn num_players(&self) -> usize {
        2
    }

    fn hash(&self) -> StateHash {
        self.marked
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &m)| acc | ((m as u64) << i))
    }
}
