use iced::{
    keyboard::{self, Key},
    time::{self, Instant},
    widget::{button, canvas, column, container, row, text},
    Element, Length, Subscription,
};
use crate::{
    app::Message,
    models::snake::{
        config::{ConfigError, GameConfig},
        persistence::FileHighScoreStore,
    },
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::SnakeViewModel,
};

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    Key(Key),
    Timer(Instant),
    Start,
    Pause,
    Restart,
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel<FileHighScoreStore>,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel<FileHighScoreStore>) -> Self {
        Self { view_model }
    }

    /// Screen for the given config, keeping the high score in `store`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` cannot hold a game.
    pub fn with_config(
        config: GameConfig,
        store: FileHighScoreStore,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(SnakeViewModel::new(config, store)?))
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        #[allow(clippy::cast_precision_loss)]
        let board_size = self.view_model.board_pixels() as f32;

        let scores = row![
            text(format!("Score: {}", self.view_model.score())).size(20),
            text(format!("High Score: {}", self.view_model.high_score())).size(20),
        ]
        .spacing(40);

        let board = canvas(self.view_model.board().clone())
            .width(Length::Fixed(board_size))
            .height(Length::Fixed(board_size));

        let start_button = button(text("Start"))
            .on_press(Message::Snake(SnakeMessage::Start))
            .width(100)
            .height(40);
        let pause_button = button(text(self.view_model.pause_label()))
            .on_press(Message::Snake(SnakeMessage::Pause))
            .width(100)
            .height(40);
        let restart_button = button(text("Restart"))
            .on_press(Message::Snake(SnakeMessage::Restart))
            .width(100)
            .height(40);

        let mut content = column![scores, board].spacing(10);
        if let Some(overlay) = self.view_model.overlay() {
            content = content.push(
                column![text(overlay.title).size(28), text(overlay.subtitle)]
                    .spacing(4)
                    .align_x(iced::alignment::Horizontal::Center),
            );
        }
        content = content.push(row![start_button, pause_button, restart_button].spacing(10));

        container(content.align_x(iced::alignment::Horizontal::Center))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard =
            keyboard::on_key_press(|key, _| Some(Message::Snake(SnakeMessage::Key(key))));
        if !self.view_model.is_ticking() {
            return keyboard;
        }
        let timer = time::every(self.view_model.get_time_between_frames())
            .map(SnakeMessage::Timer)
            .map(Message::Snake);
        Subscription::batch(vec![timer, keyboard])
    }
}
