use std::time::Duration;

use log::{debug, info, warn};

use crate::{
    app::Message,
    models::snake::{
        config::{ConfigError, GameConfig},
        game_clock::{GameClock, IntervalClock},
        persistence::HighScoreStore,
        snake_game::{GameEnd, GameStatus, SnakeGame, TickOutcome},
    },
    view_model::ViewModel,
    views::snake::{board_canvas::BoardCanvas, snake_game_screen::SnakeMessage},
};

use super::input_adapter::{command_for_key, SnakeCommand};

/// Title and subtitle shown over the board when the game is not running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug)]
pub struct SnakeViewModel<S: HighScoreStore> {
    game: SnakeGame<IntervalClock, S, BoardCanvas>,
}

impl<S: HighScoreStore> SnakeViewModel<S> {
    /// Creates a new view model with an idle game.
    ///
    /// # Errors
    ///
    /// If `config` cannot hold a game, returns a [`ConfigError`].
    pub fn new(config: GameConfig, store: S) -> Result<Self, ConfigError> {
        debug!("New SnakeViewModel config: {:#?}", config);
        let clock = IntervalClock::new(config.tick_interval());
        #[allow(clippy::cast_precision_loss)]
        let canvas = BoardCanvas::new(config.cell_pixels as f32);
        let game = SnakeGame::new(config, clock, store, canvas)?;
        Ok(Self { game })
    }

    fn apply(&mut self, command: SnakeCommand) -> Option<Message> {
        match command {
            SnakeCommand::Turn(direction) => {
                self.game.turn(direction);
                None
            }
            SnakeCommand::StartOrPause => {
                let next = match self.game.status() {
                    GameStatus::Idle | GameStatus::Over => SnakeMessage::Start,
                    GameStatus::Running | GameStatus::Paused => SnakeMessage::Pause,
                };
                Some(Message::Snake(next))
            }
            SnakeCommand::Start => {
                self.game.start();
                None
            }
            SnakeCommand::TogglePause => {
                self.game.toggle_pause();
                None
            }
            SnakeCommand::Restart => {
                self.game.restart();
                None
            }
        }
    }

    #[must_use]
    pub fn board(&self) -> &BoardCanvas {
        self.game.renderer()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.game.high_score()
    }

    #[must_use]
    pub fn board_pixels(&self) -> u32 {
        self.game.config().board_pixels
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.game.clock().is_ticking()
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> Duration {
        self.game.clock().interval()
    }

    #[must_use]
    pub fn pause_label(&self) -> &'static str {
        if self.game.status() == GameStatus::Paused {
            "Resume"
        } else {
            "Pause"
        }
    }

    /// Text to show over the board, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay> {
        let (title, subtitle) = match (self.game.status(), self.game.end()) {
            (GameStatus::Running, _) => return None,
            (GameStatus::Idle, _) => (
                "Press SPACE to Start".to_string(),
                "Use Arrow Keys or WASD to move".to_string(),
            ),
            (GameStatus::Paused, _) => (
                "PAUSED".to_string(),
                "Press SPACE to Resume".to_string(),
            ),
            (GameStatus::Over, Some(GameEnd::BoardFull)) => (
                "You Win!".to_string(),
                format!(
                    "Final Score: {} | Press SPACE to Restart",
                    self.game.score()
                ),
            ),
            (GameStatus::Over, _) => (
                "Game Over!".to_string(),
                format!(
                    "Final Score: {} | Press SPACE to Restart",
                    self.game.score()
                ),
            ),
        };
        Some(Overlay { title, subtitle })
    }
}

impl<S: HighScoreStore> ViewModel for SnakeViewModel<S> {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(snake_message) = message;
        match snake_message {
            SnakeMessage::Key(key) => {
                let command = command_for_key(&key)?;
                debug!("Key {:?} -> {:?}", key, command);
                self.apply(command)
            }
            SnakeMessage::Timer(_) => {
                if let TickOutcome::Ended(reason) = self.game.tick() {
                    info!("Run ended by {:?} with score {}", reason, self.game.score());
                }
                None
            }
            SnakeMessage::Start => self.apply(SnakeCommand::Start),
            SnakeMessage::Pause => self.apply(SnakeCommand::TogglePause),
            SnakeMessage::Restart => self.apply(SnakeCommand::Restart),
        }
    }
}

impl<S: HighScoreStore> Drop for SnakeViewModel<S> {
    fn drop(&mut self) {
        if self.game.status() == GameStatus::Running {
            warn!("Closing with a game in progress (score {})", self.game.score());
        }
    }
}
