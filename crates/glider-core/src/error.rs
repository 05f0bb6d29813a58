use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Deck parsing error: {0}")]
    Deck(String),

    #[error("Deck contains no slides")]
    EmptyDeck,

    #[error("No slide at or beyond scroll offset {0}")]
    NoCurrentSlide(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
