//! High score storage.
use std::{
    fs, io,
    num::ParseIntError,
    path::PathBuf,
};

use log::debug;

type Result<T> = std::result::Result<T, PersistenceError>;

#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Parse(ParseIntError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "could not access high score file: {e}"),
            PersistenceError::Parse(e) => write!(f, "high score file is corrupt: {e}"),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Io(e) => Some(e),
            PersistenceError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for PersistenceError {
    fn from(e: io::Error) -> Self {
        PersistenceError::Io(e)
    }
}

impl From<ParseIntError> for PersistenceError {
    fn from(e: ParseIntError) -> Self {
        PersistenceError::Parse(e)
    }
}

pub trait HighScoreStore {
    /// Reads the stored high score; `0` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the backing storage is unreadable or
    /// holds something other than a score.
    fn load_high_score(&self) -> Result<u32>;

    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the backing storage cannot be written.
    fn save_high_score(&mut self, score: u32) -> Result<()>;
}

/// Keeps the high score as a plain decimal number in a file.
#[derive(Clone, Debug)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_high_score(&self) -> Result<u32> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim().parse()?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No high score file at {}", self.path.display());
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save_high_score(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// Session-only store.
#[derive(Clone, Debug, Default)]
pub struct MemoryHighScoreStore {
    pub score: u32,
    pub saves: usize,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&self) -> Result<u32> {
        Ok(self.score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<()> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}
