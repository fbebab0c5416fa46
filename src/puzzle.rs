//! The 3x3 sliding puzzle engine.
//!
//! Ports the `createPuzzle()` / `attemptMove()` / `isPuzzleSolved()` logic
//! from `script.js`. The engine owns the board and the move counter; the
//! presentation layer only renders what the engine reports, so several
//! independent puzzles (or tests) can run side by side.

use crate::rng::GameRng;
use crate::types::{adjacent, neighbors_of, Board, CELLS};

/// Minimum number of random blank-swaps performed by a shuffle.
pub const MIN_SHUFFLE_STEPS: usize = 12;

/// Upper bound (exclusive) on the extra random steps added to the minimum.
pub const EXTRA_SHUFFLE_STEPS: usize = 20;

/// What a move request did. Rejected moves leave the engine untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    /// True if the clicked cell slid into the blank.
    pub accepted: bool,
    /// True if the board is fully ordered after this move. Only ever true
    /// on an accepted move.
    pub solved: bool,
}

/// Engine state: board plus move counter.
pub struct SlidingPuzzle {
    board: Board,
    moves: u32,
}

impl SlidingPuzzle {
    /// Create an engine holding the solved board with zero moves.
    /// Call [`new_game`](Self::new_game) to shuffle.
    pub fn new() -> Self {
        Self {
            board: Board::solved(),
            moves: 0,
        }
    }

    /// Start a fresh game: reset the move counter and shuffle from the
    /// solved board with `12 + rng.gen_range(20)` random legal swaps.
    ///
    /// Shuffling by legal blank-swaps keeps the board inside the
    /// permutation-parity class reachable from solved, so every game is
    /// solvable by construction.
    pub fn new_game(&mut self, rng: &mut GameRng) {
        let mut board = Board::solved();
        let steps = MIN_SHUFFLE_STEPS + rng.gen_range(EXTRA_SHUFFLE_STEPS);
        for _ in 0..steps {
            let blank = board.blank_pos();
            let neighbors = neighbors_of(blank);
            let swap_with = neighbors[rng.gen_range(neighbors.len())];
            board.swap(blank, swap_with);
        }
        self.board = board;
        self.moves = 0;
    }

    /// Try to slide the piece at `cell` into the blank.
    ///
    /// Rejected when `cell` is out of range, is the blank itself, or does
    /// not share an edge with the blank. Rejection has no side effects:
    /// board and move counter are untouched. An accepted move swaps the
    /// piece with the blank and increments the counter by exactly one.
    pub fn attempt_move(&mut self, cell: usize) -> MoveOutcome {
        let rejected = MoveOutcome {
            accepted: false,
            solved: false,
        };
        if cell >= CELLS {
            return rejected;
        }
        let blank = self.board.blank_pos();
        if cell == blank || !adjacent(cell, blank) {
            return rejected;
        }

        self.board.swap(cell, blank);
        self.moves += 1;
        MoveOutcome {
            accepted: true,
            solved: self.board.is_solved(),
        }
    }

    /// True iff the board is fully ordered.
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }
}

impl Default for SlidingPuzzle {
    fn default() -> Self {
        Self::new()
    }
}
