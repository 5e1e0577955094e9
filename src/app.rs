use iced::{Element, Subscription};
use log::debug;

use crate::{
    models::snake::{
        config::{ConfigError, GameConfig},
        persistence::FileHighScoreStore,
    },
    view::View,
    views::snake::snake_game_screen::{SnakeGameScreen, SnakeMessage},
};

pub struct State {
    screen: SnakeGameScreen,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeMessage),
}

impl State {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` cannot hold a game.
    pub fn new(config: GameConfig, store: FileHighScoreStore) -> Result<Self, ConfigError> {
        Ok(Self {
            screen: SnakeGameScreen::with_config(config, store)?,
        })
    }

    pub fn update(state: &mut State, message: Message) {
        // screens hand back follow-up messages, e.g. space bar -> start
        let mut next = state.screen.update(message);
        while let Some(message) = next {
            debug!("Follow-up message: {:?}", message);
            next = state.screen.update(message);
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}
