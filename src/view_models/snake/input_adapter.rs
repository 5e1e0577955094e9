//! Translates raw key presses into game commands.
use iced::keyboard::{key::Named, Key};

use crate::models::snake::direction::Direction;

/// Something the player asked the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    /// Space bar: start when stopped, otherwise flip pause.
    StartOrPause,
    Start,
    TogglePause,
    Restart,
}

/// Arrow keys and WASD (either case) steer; space starts or pauses.
#[must_use]
pub fn command_for_key(key: &Key) -> Option<SnakeCommand> {
    match key {
        Key::Named(code) => match code {
            Named::ArrowUp => Some(SnakeCommand::Turn(Direction::Up)),
            Named::ArrowDown => Some(SnakeCommand::Turn(Direction::Down)),
            Named::ArrowLeft => Some(SnakeCommand::Turn(Direction::Left)),
            Named::ArrowRight => Some(SnakeCommand::Turn(Direction::Right)),
            Named::Space => Some(SnakeCommand::StartOrPause),
            _ => None,
        },
        Key::Character(c) => match c.as_str() {
            "w" | "W" => Some(SnakeCommand::Turn(Direction::Up)),
            "s" | "S" => Some(SnakeCommand::Turn(Direction::Down)),
            "a" | "A" => Some(SnakeCommand::Turn(Direction::Left)),
            "d" | "D" => Some(SnakeCommand::Turn(Direction::Right)),
            " " => Some(SnakeCommand::StartOrPause),
            _ => None,
        },
        Key::Unidentified => None,
    }
}
