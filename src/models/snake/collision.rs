//! Wall and self collision checks for a candidate head.

use super::grid::{Cell, Grid};

/// Type of collision that ended a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

#[must_use]
pub fn hits_wall(cell: Cell, grid: &Grid) -> bool {
    !grid.contains(cell)
}

/// True if `cell` lands on any of `segments`.
///
/// Pass the segments that stay occupied this tick (see
/// [`super::snake_state::SnakeState::segments_blocking`]) so the head may
/// follow the tail into the cell it vacates.
pub fn hits_self<'a>(cell: Cell, segments: impl IntoIterator<Item = &'a Cell>) -> bool {
    segments.into_iter().any(|segment| *segment == cell)
}

/// Runs both checks, wall first.
pub fn check<'a>(
    cell: Cell,
    grid: &Grid,
    segments: impl IntoIterator<Item = &'a Cell>,
) -> Option<Collision> {
    if hits_wall(cell, grid) {
        Some(Collision::Wall)
    } else if hits_self(cell, segments) {
        Some(Collision::SelfCollision)
    } else {
        None
    }
}
