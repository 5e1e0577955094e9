use super::{direction::Direction, grid::Cell};

/// Immutable picture of the board handed to a [`Renderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub grid_size: i32,
    /// Head first.
    pub snake: Vec<Cell>,
    /// `None` only once the board is full.
    pub food: Option<Cell>,
    pub direction: Direction,
}

/// Anything that can show the board. Output never feeds back into the game.
pub trait Renderer {
    fn draw(&mut self, snapshot: &BoardSnapshot);
}
