pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;

use crate::cards::{Card, Rank};
use crate::hand::{Board, HoleCards};
use core::cmp::Ordering;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
///
/// Layout (most significant first): category (4 bits) followed by five
/// 4-bit tiebreak ranks, primary tiebreaker first. Unused slots are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const COUNT: usize = 9;

    pub const ALL: [Category; Category::COUNT] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(v: u8) -> Option<Category> {
        if v as usize >= Category::COUNT {
            return None;
        }
        Some(Category::ALL[v as usize])
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl HandValue {
    const CAT_SHIFT: u32 = 20;
    const RANK_BITS: u32 = 4;

    /// Pack a category and up to five tiebreak ranks (most significant first).
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        debug_assert!(tiebreak.len() <= 5);
        let mut v = (category.ordinal() as u32) << Self::CAT_SHIFT;
        for (i, r) in tiebreak.iter().take(5).enumerate() {
            let offset = Self::CAT_SHIFT - Self::RANK_BITS * (i as u32 + 1);
            v |= (r.value() as u32) << offset;
        }
        HandValue(v)
    }

    /// Return the packed comparable value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn category(self) -> Category {
        Category::from_ordinal((self.0 >> Self::CAT_SHIFT) as u8).unwrap_or(Category::HighCard)
    }

    /// Tiebreak ranks in significance order, without padding.
    pub fn tiebreak(self) -> Vec<Rank> {
        (0..5)
            .map(|i| {
                let offset = Self::CAT_SHIFT - Self::RANK_BITS * (i + 1);
                ((self.0 >> offset) & 0xF) as u8
            })
            .map_while(Rank::from_value)
            .collect()
    }
}

/// Best five-card hand found for a set of cards. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality is strength equality: two hands of different suits can tie.
impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Packed comparable value (category + tiebreak key).
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("a hand needs 5 to 7 cards, got {0}")]
    CardCount(usize),
    #[error("card {0} appears twice in the hand")]
    DuplicateCard(Card),
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let analysis = hand_analysis::HandAnalysis::new(cards);
    detector::classify(&analysis)
}

/// Evaluate seven cards by scoring all 21 five-card subsets.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    best_of_subsets(cards)
}

fn best_of_subsets(cards: &[Card]) -> Evaluation {
    use combinations::FiveOf;

    let mut best: Option<Evaluation> = None;
    for idx in FiveOf::new(cards.len()) {
        let hand = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
        let eval = evaluate_five(&hand);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }
    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Best five-card hand out of 5, 6 or 7 distinct cards.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{best_hand, Category};
///
/// let cards = parse_cards("ah, 2h, 3h, 4h, 5h, kd").unwrap();
/// assert_eq!(best_hand(&cards).unwrap().category, Category::StraightFlush);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::CardCount(cards.len()));
    }
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    Ok(match cards {
        [a, b, c, d, e] => evaluate_five(&[*a, *b, *c, *d, *e]),
        _ => best_of_subsets(cards),
    })
}

/// Evaluate hole cards with a board of at least three cards.
///
/// ```
/// use poker_odds::evaluator::{evaluate_holdem, Category};
/// use poker_odds::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "as, ah".parse().unwrap();
/// let board: Board = "qc, jd, 9h, 3s, 2c".parse().unwrap();
/// assert_eq!(evaluate_holdem(&hole, &board).unwrap().category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    let mut cards = Vec::with_capacity(7);
    cards.extend_from_slice(&hole.as_array());
    cards.extend_from_slice(board.as_slice());
    best_hand(&cards)
}

/// Total order over evaluations: category first, then tiebreak key.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{best_hand, compare};
/// use std::cmp::Ordering;
///
/// let a = best_hand(&parse_cards("ks kh 7c 7d 2s").unwrap()).unwrap();
/// let b = best_hand(&parse_cards("kd kc 7s 7h 2d").unwrap()).unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Equal);
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cmp(b)
}
