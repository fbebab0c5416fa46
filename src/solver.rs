//! Breadth-first solver for the 3x3 puzzle.
//!
//! The state space of one parity class is 9!/2 = 181,440 boards, small
//! enough to search exhaustively. Used to certify that shuffled boards
//! are solvable and to produce hints (the next cell to click on a
//! shortest solution).

use crate::types::{neighbors_of, Board};
use std::collections::{HashMap, VecDeque};

/// Shortest click sequence from `start` to the solved board.
///
/// Each entry is the cell index to click (the piece that slides into the
/// blank). Returns an empty vec when `start` is already solved, `None`
/// when the solved board is unreachable (wrong parity class).
pub fn solve(start: &Board) -> Option<Vec<u8>> {
    if start.is_solved() {
        return Some(Vec::new());
    }

    // predecessor: board -> (previous board, cell clicked to get here)
    let mut predecessor: HashMap<Board, (Board, u8)> = HashMap::new();
    let mut queue: VecDeque<Board> = VecDeque::new();
    predecessor.insert(*start, (*start, 0));
    queue.push_back(*start);

    while let Some(board) = queue.pop_front() {
        let blank = board.blank_pos();
        for target in neighbors_of(blank) {
            let mut next = board;
            next.swap(blank, target);
            if predecessor.contains_key(&next) {
                continue;
            }
            predecessor.insert(next, (board, target as u8));
            if next.is_solved() {
                return Some(backtrack(&predecessor, start, &next));
            }
            queue.push_back(next);
        }
    }

    None
}

fn backtrack(predecessor: &HashMap<Board, (Board, u8)>, start: &Board, end: &Board) -> Vec<u8> {
    let mut clicks = Vec::new();
    let mut current = *end;
    while current != *start {
        let (prev, click) = predecessor[&current];
        clicks.push(click);
        current = prev;
    }
    clicks.reverse();
    clicks
}

/// True if the solved board is reachable from `board` by legal moves.
pub fn is_reachable(board: &Board) -> bool {
    solve(board).is_some()
}

/// Next cell to click on a shortest solution, or `None` when the board
/// is already solved (or unreachable).
pub fn hint(board: &Board) -> Option<u8> {
    solve(board).and_then(|clicks| clicks.first().copied())
}
