//! Tunables for a game of snake.

use std::time::Duration;

use super::grid::Grid;

/// Size of the square board in pixels.
pub const BOARD_PIXELS: u32 = 400;
/// Size of one cell in pixels.
pub const CELL_PIXELS: u32 = 20;
/// Amount of time between forced moves.
pub const MILLIS_BETWEEN_FRAMES: u64 = 100;
/// Points awarded per food eaten.
pub const FOOD_REWARD: u32 = 10;
/// Segments in a freshly started snake.
pub const INITIAL_LENGTH: usize = 3;
/// Where the high score is kept between runs.
pub const HIGH_SCORE_FILE: &str = ".retro_snake_high_score";

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCellSize,
    ZeroTickInterval,
    ZeroInitialLength,
    BoardTooSmall { tiles: u32, initial_length: usize },
    /// Clearing the whole board would overflow the score.
    RewardTooLarge { reward: u32, cells: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroCellSize => write!(f, "cell size must be at least one pixel"),
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be non-zero"),
            ConfigError::ZeroInitialLength => write!(f, "snake needs at least one segment"),
            ConfigError::BoardTooSmall {
                tiles,
                initial_length,
            } => write!(
                f,
                "a {tiles}x{tiles} board cannot fit a snake of length {initial_length} plus food"
            ),
            ConfigError::RewardTooLarge { reward, cells } => write!(
                f,
                "a reward of {reward} over {cells} cells does not fit in a score"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board_pixels: u32,
    pub cell_pixels: u32,
    pub tick_millis: u64,
    pub food_reward: u32,
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_pixels: BOARD_PIXELS,
            cell_pixels: CELL_PIXELS,
            tick_millis: MILLIS_BETWEEN_FRAMES,
            food_reward: FOOD_REWARD,
            initial_length: INITIAL_LENGTH,
        }
    }
}

impl GameConfig {
    /// Number of cells along one side of the board.
    #[must_use]
    pub fn tile_count(&self) -> u32 {
        self.board_pixels.checked_div(self.cell_pixels).unwrap_or(0)
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(i32::try_from(self.tile_count()).unwrap_or(i32::MAX))
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Checks that a game can actually be started with these values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the cell size, tick interval or snake length
    /// is zero, if the centred starting snake would leave the board or fill
    /// it with no room for food, or if eating every cell's worth of food would
    /// overflow the score.
    pub fn validate(&self) -> Result<()> {
        if self.cell_pixels == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }
        let tiles = self.tile_count();
        let half = usize::try_from(tiles / 2).unwrap_or(usize::MAX);
        let cells = usize::try_from(tiles)
            .unwrap_or(usize::MAX)
            .saturating_mul(usize::try_from(tiles).unwrap_or(usize::MAX));
        // the tail trails left of the centre cell
        if tiles == 0 || self.initial_length > half + 1 || self.initial_length >= cells {
            return Err(ConfigError::BoardTooSmall {
                tiles,
                initial_length: self.initial_length,
            });
        }
        let most_food = u64::try_from(cells).unwrap_or(u64::MAX);
        if most_food.saturating_mul(u64::from(self.food_reward)) > u64::from(u32::MAX) {
            return Err(ConfigError::RewardTooLarge {
                reward: self.food_reward,
                cells,
            });
        }
        Ok(())
    }
}
