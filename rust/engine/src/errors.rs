use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("No cards left in the deck")]
    DeckExhausted,
    #[error("{name} already holds two hole cards")]
    HoleCardsFull { name: String },
}
