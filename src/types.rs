//! Core data types for the sliding puzzle.
//!
//! The board is stored flat in row-major order: `cells[row * 3 + col]`
//! maps to the JS tile grid. Value 8 is the blank cell the pieces slide
//! into; values 0-7 are pieces whose home position equals their value.

/// Grid side length. The puzzle is always 3x3.
pub const SIZE: usize = 3;

/// Total cell count.
pub const CELLS: usize = SIZE * SIZE;

/// Sentinel value for the blank cell. Its home is the bottom-right corner,
/// so `value == index` holds for all nine cells of a solved board.
pub const BLANK: u8 = 8;

/// Row of a flat cell index.
#[inline(always)]
pub fn row_of(index: usize) -> usize {
    index / SIZE
}

/// Column of a flat cell index.
#[inline(always)]
pub fn col_of(index: usize) -> usize {
    index % SIZE
}

/// True if two cell indices share a grid edge (Manhattan distance 1,
/// same row or same column). A cell is never adjacent to itself.
#[inline(always)]
pub fn adjacent(a: usize, b: usize) -> bool {
    let row_diff = row_of(a).abs_diff(row_of(b));
    let col_diff = col_of(a).abs_diff(col_of(b));
    (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
}

/// The edge neighbors of a cell, clipped to the 3x3 grid.
///
/// Order matches the JS shuffle loop: up, down, left, right.
pub fn neighbors_of(index: usize) -> Vec<usize> {
    let mut neighbors = Vec::with_capacity(4);
    if row_of(index) > 0 {
        neighbors.push(index - SIZE);
    }
    if row_of(index) < SIZE - 1 {
        neighbors.push(index + SIZE);
    }
    if col_of(index) > 0 {
        neighbors.push(index - 1);
    }
    if col_of(index) < SIZE - 1 {
        neighbors.push(index + 1);
    }
    neighbors
}

/// The 9-cell arrangement: a permutation of {0..8} with exactly one blank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// The solved arrangement: pieces 0-7 in order, blank in the last cell.
    pub fn solved() -> Self {
        Self {
            cells: [0, 1, 2, 3, 4, 5, 6, 7, BLANK],
        }
    }

    /// Build a board from raw cell values. Returns `None` unless the
    /// values are a permutation of {0..8}.
    pub fn from_cells(cells: [u8; CELLS]) -> Option<Self> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            if value as usize >= CELLS || seen[value as usize] {
                return None;
            }
            seen[value as usize] = true;
        }
        Some(Self { cells })
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Raw cell values, for handing across the wasm boundary.
    #[inline(always)]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Current position of the blank cell.
    pub fn blank_pos(&self) -> usize {
        // Invariant: exactly one BLANK exists, so this always finds one.
        self.cells.iter().position(|&v| v == BLANK).unwrap_or(CELLS - 1)
    }

    /// Swap two cells. Used only by shuffle and validated moves, which
    /// preserve the permutation invariant.
    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    /// True iff every cell holds its own index (blank included).
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(index, &value)| value as usize == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board_layout() {
        let board = Board::solved();
        assert!(board.is_solved());
        assert_eq!(board.blank_pos(), 8);
        for i in 0..CELLS {
            assert_eq!(board.get(i) as usize, i);
        }
    }

    #[test]
    fn test_from_cells_rejects_duplicates() {
        assert!(Board::from_cells([0, 0, 2, 3, 4, 5, 6, 7, 8]).is_none());
        assert!(Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 9]).is_none());
        assert!(Board::from_cells([1, 0, 2, 3, 4, 5, 6, 7, 8]).is_some());
    }

    #[test]
    fn test_adjacency_center() {
        // Center cell (index 4) touches exactly 1, 3, 5, 7.
        for other in 0..CELLS {
            let expected = matches!(other, 1 | 3 | 5 | 7);
            assert_eq!(adjacent(4, other), expected, "cell {}", other);
        }
    }

    #[test]
    fn test_adjacency_is_not_diagonal() {
        assert!(!adjacent(0, 4));
        assert!(!adjacent(2, 4));
        assert!(!adjacent(0, 8));
    }

    #[test]
    fn test_adjacency_not_reflexive() {
        for i in 0..CELLS {
            assert!(!adjacent(i, i));
        }
    }

    #[test]
    fn test_neighbors_match_adjacency() {
        for index in 0..CELLS {
            let neighbors = neighbors_of(index);
            for other in 0..CELLS {
                assert_eq!(
                    neighbors.contains(&other),
                    adjacent(index, other),
                    "cells {} and {}",
                    index,
                    other
                );
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        // Corners have 2 neighbors, edges 3, center 4.
        assert_eq!(neighbors_of(0).len(), 2);
        assert_eq!(neighbors_of(1).len(), 3);
        assert_eq!(neighbors_of(4).len(), 4);
        assert_eq!(neighbors_of(8).len(), 2);
    }

    #[test]
    fn test_unsolved_after_swap() {
        let mut board = Board::solved();
        board.swap(7, 8);
        assert!(!board.is_solved());
        assert_eq!(board.blank_pos(), 7);
    }
}
