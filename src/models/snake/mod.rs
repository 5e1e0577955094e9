//! Game rules for single-player snake, free of any UI dependencies.

pub mod collision;
pub mod config;
pub mod direction;
pub mod food_spawner;
pub mod game_clock;
pub mod grid;
pub mod persistence;
pub mod renderer;
pub mod snake_game;
pub mod snake_state;
