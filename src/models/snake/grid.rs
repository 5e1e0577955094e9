//! Board geometry: cells and the square grid they live on.

use super::direction::Direction;

/// A single board square. Coordinates may be negative or past the edge while a
/// candidate head is being validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.value();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square grid of `size` x `size` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    #[must_use]
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let side = usize::try_from(self.size.max(0)).unwrap_or_default();
        side * side
    }

    #[must_use]
    pub fn center(&self) -> Cell {
        Cell::new(self.size / 2, self.size / 2)
    }

    /// Row-major iterator over every cell on the board.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let grid = Grid::new(20);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 5)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }

    #[test]
    fn cells_cover_board_once() {
        let grid = Grid::new(4);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(1, 1));
        assert!(cells.iter().all(|c| grid.contains(*c)));
    }

    #[test]
    fn step_follows_direction() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(cell.step(Direction::Right), Cell::new(6, 5));
    }
}
