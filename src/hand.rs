use crate::cards::{parse_cards, Card, CardParseError};
use std::fmt;
use std::str::FromStr;

/// Most community cards a Hold'em board can show.
pub const MAX_BOARD_CARDS: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hole cards must be two different cards, got {0} twice")]
    DuplicateHoleCards(Card),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("a board holds at most 5 cards, got {0}")]
    TooManyBoardCards(usize),
    #[error("card {0} appears twice on the board")]
    DuplicateBoardCard(Card),
    #[error(transparent)]
    Parse(#[from] CardParseError),
}

/// A player's two private hole cards.
///
/// ```
/// use poker_odds::hand::HoleCards;
///
/// let hole: HoleCards = "as, ks".parse().unwrap();
/// assert_eq!(hole.to_string(), "As Ks");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards(a));
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

/// What is known about a seat's hole cards before the simulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleState {
    /// Both cards fixed by the user.
    Known(HoleCards),
    /// Both cards dealt from the deck in every trial.
    Random,
}

impl HoleState {
    /// Build from zero or two parsed cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        if cards.is_empty() {
            return Ok(HoleState::Random);
        }
        HoleCards::from_slice(cards).map(HoleState::Known)
    }

    pub fn known(&self) -> Option<HoleCards> {
        match self {
            HoleState::Known(h) => Some(*h),
            HoleState::Random => None,
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, HoleState::Random)
    }
}

/// Revealed community cards (0 to 5, in deal order).
///
/// ```
/// use poker_odds::hand::Board;
///
/// let board: Board = "4s, 4h, 10s".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.missing(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > MAX_BOARD_CARDS {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        for (i, c) in cards.iter().enumerate() {
            if cards[..i].contains(c) {
                return Err(HandError::DuplicateBoardCard(*c));
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of slots still to be dealt.
    pub fn missing(&self) -> usize {
        MAX_BOARD_CARDS - self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_new(parse_cards(s)?)
    }
}
