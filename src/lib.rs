//! poker-odds: Monte Carlo equity simulator for Texas Hold'em
//!
//! Goals:
//! - Exact five-to-seven card hand evaluation with a total order
//! - Reproducible simulations: a seed and a worker count fix the result
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: equity of a hand against random opponents
//! ```
//! use poker_odds::cards::parse_cards;
//! use poker_odds::simulation::{simulate, SimulationConfig, SimulationRequest};
//!
//! let request = SimulationRequest::builder()
//!     .player("You", &parse_cards("ah, ad").unwrap())
//!     .random("Player 2")
//!     .random("Player 3")
//!     .board(parse_cards("ks, 7d, 2c").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let config = SimulationConfig::default().with_trials(2_000).with_seed(42);
//! let result = simulate(&request, &config).unwrap();
//! let you = result.player_by_name("You").unwrap();
//! assert!(you.equity() > you.tie_probability());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin poker-odds
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod results;
pub mod simulation;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
