use super::SimulationError;
use crate::cards::{parse_cards, Card};
use crate::deck::{Deck, DeckError};
use crate::hand::{Board, HoleCards, HoleState, MAX_BOARD_CARDS};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 9;

/// Default seat label: the first seat is the user, the rest are numbered from 2.
pub fn seat_name(index: usize) -> String {
    if index == 0 {
        "You".to_string()
    } else {
        format!("Player {}", index + 1)
    }
}

fn player_prefix(player: &Option<String>) -> String {
    player.as_ref().map(|p| format!("{p}: ")).unwrap_or_default()
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("player count must be between 2 and 9, got {0}")]
    PlayerCount(usize),
    #[error("a table of {total} cannot seat {seats} named players")]
    TooFewSeats { total: usize, seats: usize },
    #[error("{}a player needs 0 or 2 hole cards, got {count}", player_prefix(.player))]
    HoleCardCount { player: Option<String>, count: usize },
    #[error("at most 5 community cards, got {0}")]
    BoardCardCount(usize),
    #[error("player name {0:?} is used twice")]
    DuplicateName(String),
    #[error("trial count must be positive")]
    NoTrials,
    #[error("worker count must be positive")]
    NoJobs,
}

/// One player at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    name: String,
    hole: HoleState,
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hole(&self) -> HoleState {
        self.hole
    }
}

/// A validated table: every card in it is distinct, the board has at most five
/// cards and every seat has zero or two hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    seats: Vec<Seat>,
    board: Board,
}

/// Collects seats and board cards, validating everything in [`build`](Self::build).
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::simulation::SimulationRequest;
///
/// let request = SimulationRequest::builder()
///     .player("Alice", &parse_cards("as ks").unwrap())
///     .random("Bob")
///     .board(parse_cards("qs js 2d").unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(request.num_players(), 2);
/// assert_eq!(request.remaining_deck().unwrap().len(), 47);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationRequestBuilder {
    players: Vec<(String, Vec<Card>)>,
    board: Vec<Card>,
    total: Option<usize>,
}

impl SimulationRequestBuilder {
    /// Seat with the given hole cards (empty means dealt at random).
    pub fn player(mut self, name: impl Into<String>, hole: &[Card]) -> Self {
        self.players.push((name.into(), hole.to_vec()));
        self
    }

    pub fn known(self, name: impl Into<String>, hole: HoleCards) -> Self {
        self.player(name, &hole.as_array())
    }

    pub fn random(self, name: impl Into<String>) -> Self {
        self.player(name, &[])
    }

    pub fn board(mut self, cards: Vec<Card>) -> Self {
        self.board = cards;
        self
    }

    /// Pad the table with random seats up to `n` players.
    pub fn total_players(mut self, n: usize) -> Self {
        self.total = Some(n);
        self
    }

    pub fn build(self) -> Result<SimulationRequest, SimulationError> {
        let mut players = self.players;
        if let Some(total) = self.total {
            if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&total) {
                return Err(ValidationError::PlayerCount(total).into());
            }
            if total < players.len() {
                return Err(ValidationError::TooFewSeats { total, seats: players.len() }.into());
            }
            for i in players.len()..total {
                players.push((seat_name(i), Vec::new()));
            }
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(ValidationError::PlayerCount(players.len()).into());
        }
        for (i, (name, _)) in players.iter().enumerate() {
            if players[..i].iter().any(|(n, _)| n == name) {
                return Err(ValidationError::DuplicateName(name.clone()).into());
            }
        }
        for (name, hole) in &players {
            if !matches!(hole.len(), 0 | 2) {
                return Err(ValidationError::HoleCardCount {
                    player: Some(name.clone()),
                    count: hole.len(),
                }
                .into());
            }
        }
        if self.board.len() > MAX_BOARD_CARDS {
            return Err(ValidationError::BoardCardCount(self.board.len()).into());
        }

        let mut known: Vec<Card> = players.iter().flat_map(|(_, h)| h.iter().copied()).collect();
        known.extend_from_slice(&self.board);
        Deck::standard().remove_known(&known)?;

        let seats = players
            .into_iter()
            .map(|(name, hole)| Ok(Seat { name, hole: HoleState::from_cards(&hole)? }))
            .collect::<Result<Vec<_>, SimulationError>>()?;
        let board = Board::try_new(self.board)?;
        Ok(SimulationRequest { seats, board })
    }
}

impl SimulationRequest {
    pub fn builder() -> SimulationRequestBuilder {
        SimulationRequestBuilder::default()
    }

    /// Request in the shape the interactive form collects: the user's cards
    /// (possibly empty), the community cards and a player count. Seats are
    /// named by [`seat_name`].
    pub fn from_form(
        num_players: usize,
        your_cards: &str,
        community: &str,
    ) -> Result<Self, SimulationError> {
        let yours = parse_cards(your_cards)?;
        let board = parse_cards(community)?;
        Self::builder().player(seat_name(0), &yours).board(board).total_players(num_players).build()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn num_players(&self) -> usize {
        self.seats.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.seats.iter().map(|s| s.name.clone()).collect()
    }

    /// Every card fixed before the simulation: known hole cards, then the board.
    pub fn known_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .seats
            .iter()
            .filter_map(|s| s.hole.known())
            .flat_map(|h| h.as_array())
            .collect();
        cards.extend_from_slice(self.board.as_slice());
        cards
    }

    /// The standard deck minus [`known_cards`](Self::known_cards).
    pub fn remaining_deck(&self) -> Result<Deck, DeckError> {
        Deck::standard().remove_known(&self.known_cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn from_form_pads_with_random_seats() {
        let r = SimulationRequest::from_form(4, "as ks", "").unwrap();
        assert_eq!(r.names(), vec!["You", "Player 2", "Player 3", "Player 4"]);
        assert!(!r.seats()[0].hole().is_random());
        assert!(r.seats()[1..].iter().all(|s| s.hole().is_random()));
        assert_eq!(r.remaining_deck().unwrap().len(), 50);
    }

    #[test]
    fn player_count_is_bounded() {
        for n in [0, 1, 10] {
            let err = SimulationRequest::from_form(n, "", "").unwrap_err();
            assert_eq!(err, SimulationError::Validation(ValidationError::PlayerCount(n)));
        }
        assert!(SimulationRequest::from_form(9, "", "").is_ok());
    }

    #[test]
    fn total_below_named_seats_reports_both_counts() {
        let err = SimulationRequest::builder()
            .random("A")
            .random("B")
            .random("C")
            .total_players(2)
            .build()
            .unwrap_err();
        let expected = ValidationError::TooFewSeats { total: 2, seats: 3 };
        assert_eq!(err.to_string(), expected.to_string());
        assert_eq!(err, SimulationError::Validation(expected));
    }

    #[test]
    fn one_hole_card_is_rejected() {
        let err = SimulationRequest::from_form(2, "as", "").unwrap_err();
        assert_eq!(
            err,
            SimulationError::Validation(ValidationError::HoleCardCount {
                player: Some("You".into()),
                count: 1
            })
        );
        assert_eq!(err.to_string(), "You: a player needs 0 or 2 hole cards, got 1");
    }

    #[test]
    fn board_over_five_is_rejected() {
        let err = SimulationRequest::from_form(2, "", "2c 3c 4c 5c 6c 7c").unwrap_err();
        assert_eq!(err, SimulationError::Validation(ValidationError::BoardCardCount(6)));
    }

    #[test]
    fn duplicate_across_hole_and_board_is_rejected() {
        let err = SimulationRequest::from_form(2, "as ks", "as 2d 3d").unwrap_err();
        assert_eq!(
            err,
            SimulationError::Deck(DeckError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)))
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = SimulationRequest::builder().random("Bob").random("Bob").build().unwrap_err();
        assert_eq!(err, SimulationError::Validation(ValidationError::DuplicateName("Bob".into())));
    }

    #[test]
    fn bad_tokens_surface_as_parse_errors() {
        let err = SimulationRequest::from_form(2, "zz", "").unwrap_err();
        assert!(matches!(err, SimulationError::Parse(_)));
    }

    #[test]
    fn known_cards_list_holes_then_board() {
        let r = SimulationRequest::builder()
            .random("A")
            .known("B", "qh jh".parse().unwrap())
            .board(parse_cards("2c").unwrap())
            .build()
            .unwrap();
        let names: Vec<String> = r.known_cards().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["Qh", "Jh", "2c"]);
    }
}
