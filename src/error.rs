use thiserror::Error;

use crate::game::RoundState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Cannot {action} while round is {state:?}")]
    InvalidState {
        action: &'static str,
        state: RoundState,
    },
    #[error("Invalid config: {0}")]
    Config(String),
}
