/// Error types shared by the render core and its frame sinks
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before a shape was chosen")]
    InputClosed,
    #[error("invalid shape choice: {0:?}")]
    InvalidChoice(String),
}

pub type Result<T> = std::result::Result<T, Error>;
