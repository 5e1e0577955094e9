use log::{debug, error};
use retro_snake::{
    app::State,
    models::snake::{
        config::{GameConfig, BOARD_PIXELS, HIGH_SCORE_FILE},
        persistence::FileHighScoreStore,
    },
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("retro_snake=info"))
        .init();
    debug!("Debug on");
    let state = match State::new(
        GameConfig::default(),
        FileHighScoreStore::new(HIGH_SCORE_FILE),
    ) {
        Ok(state) => state,
        Err(e) => {
            error!("Refusing to start: {e}");
            return;
        }
    };
    #[allow(clippy::cast_precision_loss)]
    let side = BOARD_PIXELS as f32;
    if let Err(e) = iced::application("Snake", State::update, State::view)
        .window_size(iced::Size::new(side + 120.0, side + 220.0))
        .subscription(State::subscription)
        .run_with(move || (state, iced::Task::none()))
    {
        error!("Snake exited with an error: {e}");
    }
}
