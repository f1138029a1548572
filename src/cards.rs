use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside 2..=14.
    pub const fn from_value(v: u8) -> Option<Rank> {
        if v < 2 || v > 14 {
            return None;
        }
        Some(Rank::ALL[(v - 2) as usize])
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Rank as typed in form input: `10` for Ten, lowercase letters for faces.
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "j",
            Rank::Queen => "q",
            Rank::King => "k",
            Rank::Ace => "a",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("unknown rank '{0}' (expected 2-10, j, q, k or a)")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = match s.to_ascii_lowercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" => Rank::Ten,
            "j" => Rank::Jack,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Four suits. The order (c < d < h < s) only makes cards sortable; it never
/// affects hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("unknown suit '{0}' (expected s, h, d or c)")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use poker_odds::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Spades);
/// assert_eq!(card.to_string(), "Ts");
/// assert_eq!(card.token(), "10s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Dense index in 0..52, suit-major. Used for bit sets of seen cards.
    pub const fn index(self) -> usize {
        self.suit.index() * 13 + (self.rank.value() as usize - 2)
    }

    /// Token in the input grammar, e.g. `10s`, `ah`.
    pub fn token(self) -> String {
        format!("{}{}", self.rank.token(), self.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("malformed card '{0}': expected rank followed by suit, e.g. 'as' or '10h'")]
    Malformed(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // Only "10x" needs three characters.
        // Rank and suit must be adjacent.
        if !t.is_ascii() || !(2..=3).contains(&t.len()) || t.contains(char::is_whitespace) {
            return Err(CardParseError::Malformed(s.to_string()));
        }
        let (rank_str, suit_str) = t.split_at(t.len() - 1);
        let suit_ch = suit_str.chars().next().ok_or_else(|| CardParseError::Malformed(s.to_string()))?;
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse a single card token such as `as`, `10s` or `QS`.
///
/// ```
/// use poker_odds::cards::{parse_card, Card, Rank, Suit};
///
/// assert_eq!(parse_card(" 10s ").unwrap(), Card::new(Rank::Ten, Suit::Spades));
/// assert!(parse_card("1s").is_err());
/// ```
pub fn parse_card(text: &str) -> Result<Card, CardParseError> {
    Card::from_str(text)
}

/// Parse multiple cards separated by commas or whitespace.
///
/// ```
/// use poker_odds::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("4s, 4h,10s").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Four, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::Four, Suit::Hearts));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Spades));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("t").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("Q").unwrap(), Rank::Queen);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("11").is_err());
    }

    #[test]
    fn rank_from_value_round_trips() {
        for r in Rank::ALL {
            assert_eq!(Rank::from_value(r.value()), Some(r));
        }
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn card_tokens_follow_form_grammar() {
        assert_eq!(Card::from_str("as").unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(Card::from_str("10s").unwrap(), Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(Card::from_str("QS").unwrap(), Card::new(Rank::Queen, Suit::Spades));
        assert_eq!(Card::from_str(" 4h ").unwrap(), Card::new(Rank::Four, Suit::Hearts));
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).token(), "10d");
    }

    #[test]
    fn card_parse_errors_name_the_problem() {
        assert!(matches!(Card::from_str("a"), Err(CardParseError::Malformed(_))));
        assert!(matches!(Card::from_str("100s"), Err(CardParseError::Malformed(_))));
        assert!(matches!(Card::from_str(""), Err(CardParseError::Malformed(_))));
        assert!(matches!(Card::from_str("1s"), Err(CardParseError::Rank(_))));
        assert!(matches!(Card::from_str("ax"), Err(CardParseError::Suit(_))));
        assert!(matches!(Card::from_str("a♠"), Err(CardParseError::Malformed(_))));
    }

    #[test]
    fn rank_and_suit_must_be_adjacent() {
        assert!(matches!(parse_card("a s"), Err(CardParseError::Malformed(_))));
        assert!(matches!(parse_card("k\th"), Err(CardParseError::Malformed(_))));
        assert!(matches!(parse_card("1 0s"), Err(CardParseError::Malformed(_))));
        assert!(Rank::from_str(" a").is_err());
    }

    #[test]
    fn indices_are_dense_and_unique() {
        let mut seen = [false; 52];
        for s in Suit::ALL {
            for r in Rank::ALL {
                let i = Card::new(r, s).index();
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|b| *b));
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("as, qs").unwrap();
        assert_eq!(xs, vec![Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Queen, Suit::Spades)]);
        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("as, zz").is_err());
    }
}
