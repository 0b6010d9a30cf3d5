//! Crate error type.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("input closed before the game ended")]
    InputClosed,

    #[error("loadout file is malformed: {0}")]
    Save(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
