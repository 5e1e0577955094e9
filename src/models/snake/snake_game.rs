//! Model of the Snake Game.
//!
//! [`SnakeGame`] owns the whole game state and is the only thing that mutates
//! it. Timing, persistence and drawing are reached through the
//! [`GameClock`], [`HighScoreStore`] and [`Renderer`] capabilities so the
//! rules run the same under the UI and under tests.
use log::{debug, error, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    collision::{self, Collision},
    config::{ConfigError, GameConfig},
    direction::Direction,
    food_spawner::FoodSpawner,
    game_clock::GameClock,
    grid::{Cell, Grid},
    persistence::HighScoreStore,
    renderer::{BoardSnapshot, Renderer},
    snake_state::SnakeState,
};

/// Direction every fresh snake starts out with.
pub const STARTING_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    Over,
}

/// Why the last game finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Wall,
    SelfCollision,
    /// No free cell was left for food. The player wins.
    BoardFull,
}

impl From<Collision> for GameEnd {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => GameEnd::Wall,
            Collision::SelfCollision => GameEnd::SelfCollision,
        }
    }
}

/// What a call to [`SnakeGame::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running.
    Skipped,
    Moved,
    Ate,
    Ended(GameEnd),
}

#[derive(Debug)]
pub struct SnakeGame<C, S, R> {
    config: GameConfig,
    grid: Grid,
    snake: SnakeState,
    food: Option<Cell>,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    high_score: u32,
    status: GameStatus,
    end: Option<GameEnd>,
    spawner: FoodSpawner<StdRng>,
    clock: C,
    store: S,
    renderer: R,
}

impl<C, S, R> SnakeGame<C, S, R>
where
    C: GameClock,
    S: HighScoreStore,
    R: Renderer,
{
    /// Creates an idle game with a fresh board and draws it once.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` cannot hold a game.
    pub fn new(config: GameConfig, clock: C, store: S, renderer: R) -> Result<Self, ConfigError> {
        Self::with_rng(config, clock, store, renderer, StdRng::from_entropy())
    }

    /// Same as [`SnakeGame::new`] with a caller supplied random source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` cannot hold a game.
    pub fn with_rng(
        config: GameConfig,
        clock: C,
        store: S,
        renderer: R,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid();
        let high_score = store.load_high_score().unwrap_or_else(|e| {
            error!("Error loading high score: {e}");
            0
        });
        debug!("New SnakeGame on a {0}x{0} grid, high score {high_score}", grid.size());
        let mut game = Self {
            snake: SnakeState::new(grid.center(), STARTING_DIRECTION, config.initial_length),
            config,
            grid,
            food: None,
            direction: STARTING_DIRECTION,
            pending_direction: STARTING_DIRECTION,
            score: 0,
            high_score,
            status: GameStatus::Idle,
            end: None,
            spawner: FoodSpawner::new(rng),
            clock,
            store,
            renderer,
        };
        game.reset_board();
        game.draw();
        Ok(game)
    }

    fn reset_board(&mut self) {
        self.snake = SnakeState::new(
            self.grid.center(),
            STARTING_DIRECTION,
            self.config.initial_length,
        );
        self.direction = STARTING_DIRECTION;
        self.pending_direction = STARTING_DIRECTION;
        self.score = 0;
        self.end = None;
        self.food = self.spawner.spawn(&self.grid, self.snake.segments());
        if self.food.is_none() {
            warn!("Fresh board has no room for food");
        }
    }

    fn draw(&mut self) {
        let snapshot = self.snapshot();
        self.renderer.draw(&snapshot);
    }

    fn finish(&mut self, reason: GameEnd) {
        self.clock.stop();
        self.status = GameStatus::Over;
        self.end = Some(reason);
        info!("Game over ({reason:?}). Final score {}", self.score);
    }

    fn record_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        info!("New high score: {}", self.high_score);
        if let Err(e) = self.store.save_high_score(self.high_score) {
            error!("Error saving high score: {e}");
        }
    }

    /// Starts a new game from `Idle` or `Over`. Returns false otherwise.
    pub fn start(&mut self) -> bool {
        if !matches!(self.status, GameStatus::Idle | GameStatus::Over) {
            debug!("Start requested while {:?}", self.status);
            return false;
        }
        self.reset_board();
        self.status = GameStatus::Running;
        self.clock.start();
        self.draw();
        info!("Game started");
        true
    }

    /// Advances the game by one step. Does nothing unless running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }
        self.direction = self.pending_direction;
        let new_head = self.snake.advance(self.direction);
        let grows = self.food == Some(new_head);

        if let Some(collision) =
            collision::check(new_head, &self.grid, self.snake.segments_blocking(grows))
        {
            debug!("Snake hit {collision:?} at {new_head:?}");
            let reason = GameEnd::from(collision);
            self.finish(reason);
            return TickOutcome::Ended(reason);
        }

        if !grows {
            self.snake.move_to(new_head);
            self.draw();
            return TickOutcome::Moved;
        }

        self.snake.grow(new_head);
        self.score = self.score.saturating_add(self.config.food_reward);
        self.record_score();
        self.food = self.spawner.spawn(&self.grid, self.snake.segments());
        self.draw();
        if self.food.is_none() {
            self.finish(GameEnd::BoardFull);
            return TickOutcome::Ended(GameEnd::BoardFull);
        }
        TickOutcome::Ate
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        self.clock.pause();
        debug!("Game paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        self.clock.resume();
        debug!("Game resumed");
        true
    }

    /// Flips between running and paused. Returns false in any other state.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Idle | GameStatus::Over => false,
        }
    }

    /// Queues `direction` for the next tick.
    ///
    /// The exact reverse of the committed direction is refused. Only the last
    /// accepted intent before a tick is applied. Ignored unless running.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        if direction.is_opposite(self.direction) {
            debug!("Refused turn {direction} while heading {}", self.direction);
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Abandons whatever is going on and returns to an idle fresh board.
    pub fn restart(&mut self) {
        self.clock.stop();
        self.reset_board();
        self.status = GameStatus::Idle;
        self.draw();
        debug!("Game restarted");
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid_size: self.grid.size(),
            snake: self.snake.to_vec(),
            food: self.food,
            direction: self.direction,
        }
    }
}

impl<C, S, R> SnakeGame<C, S, R> {
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn end(&self) -> Option<GameEnd> {
        self.end
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, time::Duration};

    use super::*;
    use crate::models::snake::{
        game_clock::IntervalClock,
        persistence::{MemoryHighScoreStore, PersistenceError},
    };

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        frames: Vec<BoardSnapshot>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, snapshot: &BoardSnapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    #[derive(Debug, Default)]
    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load_high_score(&self) -> Result<u32, PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("unreadable")))
        }

        fn save_high_score(&mut self, _score: u32) -> Result<(), PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("read only")))
        }
    }

    type TestGame = SnakeGame<IntervalClock, MemoryHighScoreStore, RecordingRenderer>;

    fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
        raw.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn new_game(seed: u64) -> TestGame {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = GameConfig::default();
        SnakeGame::with_rng(
            config.clone(),
            IntervalClock::new(config.tick_interval()),
            MemoryHighScoreStore::default(),
            RecordingRenderer::default(),
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn running_game(seed: u64) -> TestGame {
        let mut game = new_game(seed);
        assert!(game.start());
        game
    }

    /// Puts food somewhere the snake will not reach in the next few ticks.
    fn park_food(game: &mut TestGame) {
        game.food = Some(Cell::new(0, 19));
    }

    #[test]
    fn starts_idle_with_drawn_board() {
        let game = new_game(1);
        assert_eq!(game.status(), GameStatus::Idle);
        assert_eq!(game.snake().to_vec(), cells(&[(10, 10), (9, 10), (8, 10)]));
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.renderer().frames.len(), 1);
        let food = game.food().unwrap();
        assert!(!game.snake().contains(food));
        assert!(!game.clock().is_ticking());
    }

    #[test]
    fn ticks_are_ignored_until_started() {
        let mut game = new_game(2);
        let before = game.snapshot();
        assert_eq!(game.tick(), TickOutcome::Skipped);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn eating_grows_scores_and_respawns() {
        let mut game = running_game(3);
        game.food = Some(Cell::new(11, 10));
        assert_eq!(game.tick(), TickOutcome::Ate);
        assert_eq!(
            game.snake().to_vec(),
            cells(&[(11, 10), (10, 10), (9, 10), (8, 10)])
        );
        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.score(), 10);
        assert_eq!(game.high_score(), 10);
        assert_eq!(game.store().score, 10);
        let food = game.food().unwrap();
        assert_ne!(food, Cell::new(11, 10));
        assert!(!game.snake().contains(food));
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut game = running_game(4);
        park_food(&mut game);
        let frames = game.renderer().frames.len();
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.snake().to_vec(), cells(&[(11, 10), (10, 10), (9, 10)]));
        assert_eq!(game.score(), 0);
        assert_eq!(game.renderer().frames.len(), frames + 1);
    }

    #[test]
    fn wall_hit_ends_game_and_stops_clock() {
        let mut game = running_game(5);
        park_food(&mut game);
        game.snake = SnakeState::from_cells(cells(&[(0, 5), (1, 5), (2, 5)])).unwrap();
        game.direction = Direction::Left;
        game.pending_direction = Direction::Left;
        game.score = 30;

        assert_eq!(game.tick(), TickOutcome::Ended(GameEnd::Wall));
        assert_eq!(game.status(), GameStatus::Over);
        assert_eq!(game.end(), Some(GameEnd::Wall));
        assert!(!game.clock().is_ticking());

        let frozen = game.snapshot();
        assert_eq!(game.tick(), TickOutcome::Skipped);
        assert_eq!(game.score(), 30);
        assert_eq!(game.snapshot(), frozen);
    }

    #[test]
    fn turning_into_second_segment_ends_game() {
        let mut game = running_game(6);
        park_food(&mut game);
        // heading recorded as right although the head arrived moving up
        game.snake =
            SnakeState::from_cells(cells(&[(5, 5), (5, 6), (6, 6), (6, 5)])).unwrap();
        assert!(game.turn(Direction::Down));
        assert_eq!(game.tick(), TickOutcome::Ended(GameEnd::SelfCollision));
        assert_eq!(game.status(), GameStatus::Over);
    }

    #[test]
    fn head_may_follow_tail() {
        let mut game = running_game(7);
        park_food(&mut game);
        game.snake =
            SnakeState::from_cells(cells(&[(5, 5), (6, 5), (6, 6), (5, 6)])).unwrap();
        game.direction = Direction::Left;
        game.pending_direction = Direction::Down;
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(
            game.snake().to_vec(),
            cells(&[(5, 6), (5, 5), (6, 5), (6, 6)])
        );
    }

    #[test]
    fn reverse_intent_is_refused() {
        let mut game = running_game(8);
        assert!(!game.turn(Direction::Left));
        assert_eq!(game.pending_direction(), Direction::Right);

        assert!(game.turn(Direction::Up));
        assert!(game.turn(Direction::Down));
        // checked against the committed direction, so the later intent wins
        assert_eq!(game.pending_direction(), Direction::Down);
    }

    #[test]
    fn latest_intent_before_tick_wins() {
        let mut game = running_game(9);
        park_food(&mut game);
        assert!(game.turn(Direction::Up));
        assert!(game.turn(Direction::Right));
        game.tick();
        assert_eq!(game.snake().head(), Cell::new(11, 10));
        assert_eq!(game.direction(), Direction::Right);
    }

    #[test]
    fn pause_freezes_state() {
        let mut game = running_game(10);
        park_food(&mut game);
        assert!(game.pause());
        assert!(!game.clock().is_ticking());
        let frozen = game.snapshot();
        for _ in 0..5 {
            assert_eq!(game.tick(), TickOutcome::Skipped);
        }
        assert!(!game.turn(Direction::Up));
        assert_eq!(game.snapshot(), frozen);

        assert!(game.toggle_pause());
        assert_eq!(game.status(), GameStatus::Running);
        assert!(game.clock().is_ticking());
        assert_eq!(game.tick(), TickOutcome::Moved);
    }

    #[test]
    fn start_only_from_idle_or_over() {
        let mut game = running_game(11);
        assert!(!game.start());
        assert!(game.pause());
        assert!(!game.start());
        assert!(game.resume());
        assert!(!game.resume());
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn restart_returns_to_idle_fresh_board() {
        let mut game = running_game(12);
        game.food = Some(Cell::new(11, 10));
        game.tick();
        assert_eq!(game.score(), 10);

        game.restart();
        assert_eq!(game.status(), GameStatus::Idle);
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 10);
        assert_eq!(game.snake().len(), 3);
        assert!(!game.clock().is_ticking());
        assert!(game.start());
    }

    #[test]
    fn high_score_never_decreases() {
        let mut game = running_game(13);
        game.food = Some(Cell::new(11, 10));
        game.tick();
        game.food = Some(Cell::new(12, 10));
        game.tick();
        assert_eq!(game.high_score(), 20);
        let saves = game.store().saves;

        let mut highs = vec![game.high_score()];
        for _ in 0..3 {
            game.restart();
            game.start();
            park_food(&mut game);
            while game.tick() != TickOutcome::Ended(GameEnd::Wall) {}
            highs.push(game.high_score());
        }
        assert!(highs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(game.high_score(), 20);
        assert_eq!(game.store().saves, saves);
    }

    #[test]
    fn segments_stay_distinct_while_alive() {
        let mut game = running_game(14);
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        for step in 0..400 {
            if step % 3 == 0 {
                game.turn(turns[(step / 3) % turns.len()]);
            }
            let outcome = game.tick();
            if matches!(outcome, TickOutcome::Ended(_)) {
                break;
            }
            let unique: HashSet<Cell> = game.snake().segments().copied().collect();
            assert_eq!(unique.len(), game.snake().len());
            if let Some(food) = game.food() {
                assert!(!game.snake().contains(food));
            }
        }
    }

    #[test]
    fn full_board_is_a_win() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = GameConfig {
            board_pixels: 80,
            ..GameConfig::default()
        };
        let mut game = SnakeGame::with_rng(
            config,
            IntervalClock::new(Duration::from_millis(100)),
            MemoryHighScoreStore::default(),
            RecordingRenderer::default(),
            StdRng::seed_from_u64(15),
        )
        .unwrap();
        game.start();
        // serpentine over a 4x4 board leaving (0,0) as the last free cell
        let body = cells(&[
            (1, 0),
            (2, 0),
            (3, 0),
            (3, 1),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (0, 3),
        ]);
        game.snake = SnakeState::from_cells(body).unwrap();
        game.direction = Direction::Left;
        game.pending_direction = Direction::Left;
        game.food = Some(Cell::new(0, 0));

        assert_eq!(game.tick(), TickOutcome::Ended(GameEnd::BoardFull));
        assert_eq!(game.status(), GameStatus::Over);
        assert_eq!(game.food(), None);
        assert_eq!(game.snake().len(), 16);
    }

    #[test]
    fn broken_store_does_not_stop_play() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = GameConfig::default();
        let mut game = SnakeGame::with_rng(
            config.clone(),
            IntervalClock::new(config.tick_interval()),
            BrokenStore,
            RecordingRenderer::default(),
            StdRng::seed_from_u64(16),
        )
        .unwrap();
        assert_eq!(game.high_score(), 0);
        game.start();
        game.food = Some(Cell::new(11, 10));
        assert_eq!(game.tick(), TickOutcome::Ate);
        assert_eq!(game.high_score(), 10);
    }

    #[test]
    fn stored_high_score_is_loaded() {
        let config = GameConfig::default();
        let game = SnakeGame::with_rng(
            config.clone(),
            IntervalClock::new(config.tick_interval()),
            MemoryHighScoreStore {
                score: 250,
                saves: 0,
            },
            RecordingRenderer::default(),
            StdRng::seed_from_u64(17),
        )
        .unwrap();
        assert_eq!(game.high_score(), 250);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let mut game = running_game(18);
        game.score = u32::MAX - 5;
        game.food = Some(Cell::new(11, 10));
        assert_eq!(game.tick(), TickOutcome::Ate);
        assert_eq!(game.score(), u32::MAX);
        assert_eq!(game.high_score(), u32::MAX);
    }

    #[test]
    fn oversized_reward_is_rejected() {
        let config = GameConfig {
            food_reward: u32::MAX,
            ..GameConfig::default()
        };
        let result = SnakeGame::new(
            config,
            IntervalClock::new(Duration::from_millis(100)),
            MemoryHighScoreStore::default(),
            RecordingRenderer::default(),
        );
        assert!(matches!(result, Err(ConfigError::RewardTooLarge { .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            tick_millis: 0,
            ..GameConfig::default()
        };
        let result = SnakeGame::new(
            config,
            IntervalClock::new(Duration::ZERO),
            MemoryHighScoreStore::default(),
            RecordingRenderer::default(),
        );
        assert!(matches!(result, Err(ConfigError::ZeroTickInterval)));
    }
}
