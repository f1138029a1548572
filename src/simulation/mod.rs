//! Monte Carlo showdown simulation.
//!
//! A [`SimulationRequest`] describes the table (seats with known or random hole
//! cards, revealed board cards). A [`Simulator`] configured by a
//! [`SimulationConfig`] completes the unknown cards `trials` times, evaluates
//! every seat and folds each [`TrialOutcome`] into a
//! [`SimulationResult`](crate::results::SimulationResult).
//!
//! ```
//! use poker_odds::simulation::{simulate, SimulationConfig, SimulationRequest};
//!
//! let request = SimulationRequest::from_form(2, "as, ks", "").unwrap();
//! let config = SimulationConfig::default().with_trials(500).with_seed(420);
//! let result = simulate(&request, &config).unwrap();
//! assert_eq!(result.trials(), 500);
//! assert!(result.equity(0).unwrap() > 0.5);
//! ```

mod config;
mod request;
mod runner;
mod trial;

pub use config::{SimulationConfig, DEFAULT_TRIALS};
pub use request::{
    seat_name, Seat, SimulationRequest, SimulationRequestBuilder, ValidationError, MAX_PLAYERS,
    MIN_PLAYERS,
};
pub use runner::{simulate, CancelToken, Simulator};
pub use trial::{run_trial, TrialOutcome};

use crate::cards::CardParseError;
use crate::deck::DeckError;
use crate::evaluator::EvalError;
use crate::hand::HandError;

/// Everything that can stop a simulation run. No partial result is ever
/// returned alongside an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    #[error(transparent)]
    Parse(#[from] CardParseError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("simulation cancelled")]
    Cancelled,
    #[error("failed to start worker threads: {0}")]
    ThreadPool(String),
}

impl From<HandError> for SimulationError {
    fn from(err: HandError) -> Self {
        match err {
            HandError::Parse(e) => SimulationError::Parse(e),
            HandError::DuplicateHoleCards(c) | HandError::DuplicateBoardCard(c) => {
                SimulationError::Deck(DeckError::DuplicateCard(c))
            }
            HandError::HoleCount(n) => {
                SimulationError::Validation(ValidationError::HoleCardCount { player: None, count: n })
            }
            HandError::TooManyBoardCards(n) => {
                SimulationError::Validation(ValidationError::BoardCardCount(n))
            }
        }
    }
}
