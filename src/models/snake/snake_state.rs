//! Module for containing the body of the snake.
use std::{
    collections::{vec_deque, VecDeque},
    iter::Take,
};

use super::{direction::Direction, grid::Cell};

/// Ordered body of the snake, head at the front and tail at the back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeState {
    squares_taken: VecDeque<Cell>,
}

impl SnakeState {
    /// Lays out `length` segments starting at `head` and trailing away from
    /// `heading`.
    #[must_use]
    pub fn new(head: Cell, heading: Direction, length: usize) -> Self {
        let behind = heading.get_opposite();
        let mut squares_taken = VecDeque::with_capacity(length.max(1));
        let mut cell = head;
        squares_taken.push_back(cell);
        for _ in 1..length {
            cell = cell.step(behind);
            squares_taken.push_back(cell);
        }
        Self { squares_taken }
    }

    /// Builds a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let squares_taken: VecDeque<Cell> = cells.into_iter().collect();
        if squares_taken.is_empty() {
            return None;
        }
        Some(Self { squares_taken })
    }

    /// Where the head would land moving in `direction`. Does not mutate.
    #[must_use]
    pub fn advance(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Prepends `new_head` and keeps the tail.
    pub fn grow(&mut self, new_head: Cell) {
        self.squares_taken.push_front(new_head);
    }

    /// Prepends `new_head` and drops the tail.
    pub fn move_to(&mut self, new_head: Cell) {
        self.squares_taken.push_front(new_head);
        self.squares_taken.pop_back();
    }

    /// # Panics
    ///
    /// Never expected to panic: the body always holds at least one cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self.squares_taken.front().expect("snake body is never empty")
    }

    /// # Panics
    ///
    /// Never expected to panic: the body always holds at least one cell.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self.squares_taken.back().expect("snake body is never empty")
    }

    /// Segments still occupied while the head moves this tick. The tail leaves
    /// its cell unless the snake grows.
    pub fn segments_blocking(&self, grows: bool) -> Take<vec_deque::Iter<'_, Cell>> {
        let keep = if grows {
            self.squares_taken.len()
        } else {
            self.squares_taken.len() - 1
        };
        self.squares_taken.iter().take(keep)
    }

    pub fn segments(&self) -> vec_deque::Iter<'_, Cell> {
        self.squares_taken.iter()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.squares_taken.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares_taken.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares_taken.is_empty()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Cell> {
        self.squares_taken.iter().copied().collect()
    }
}
