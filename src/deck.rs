use crate::cards::{Card, Rank, Suit};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("card {0} is specified more than once")]
    DuplicateCard(Card),
    #[error("card {0} is not in the deck")]
    CardNotInDeck(Card),
    #[error("cannot draw {requested} cards: only {remaining} left in the deck")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// A deck of undealt cards. Starts as the standard 52; known cards are
/// removed before any random draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Return a copy of this deck without `used`.
    ///
    /// Every card in `used` must be distinct and still present in the deck.
    ///
    /// ```
    /// use poker_odds::cards::parse_cards;
    /// use poker_odds::deck::{Deck, DeckError};
    ///
    /// let known = parse_cards("as, ks, 4h").unwrap();
    /// let deck = Deck::standard().remove_known(&known).unwrap();
    /// assert_eq!(deck.len(), 49);
    ///
    /// let dup = parse_cards("as, as").unwrap();
    /// assert!(matches!(Deck::standard().remove_known(&dup), Err(DeckError::DuplicateCard(_))));
    /// ```
    pub fn remove_known(&self, used: &[Card]) -> Result<Deck, DeckError> {
        let mut seen = 0u64;
        for &card in used {
            let bit = 1u64 << card.index();
            if seen & bit != 0 {
                return Err(DeckError::DuplicateCard(card));
            }
            seen |= bit;
            if !self.contains(card) {
                return Err(DeckError::CardNotInDeck(card));
            }
        }
        let cards = self.cards.iter().copied().filter(|c| seen & (1u64 << c.index()) == 0).collect();
        Ok(Deck { cards })
    }

    /// Draw `count` cards uniformly at random without replacement.
    ///
    /// The drawn cards leave the deck, so repeated calls never repeat a card.
    /// Given the same RNG state the same cards come out.
    pub fn draw_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<Card>, DeckError> {
        let mut out = Vec::with_capacity(count);
        self.draw_random_into(rng, count, &mut out)?;
        Ok(out)
    }

    /// Like [`Deck::draw_random`] but appends to `out`, avoiding an allocation
    /// in the trial loop.
    pub fn draw_random_into<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        out: &mut Vec<Card>,
    ) -> Result<(), DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards { requested: count, remaining: self.cards.len() });
        }
        for _ in 0..count {
            let idx = rng.random_range(0..self.cards.len());
            out.push(self.cards.swap_remove(idx));
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn remove_known_drops_exactly_those_cards() {
        let known = parse_cards("as, ks, 10h, 2c").unwrap();
        let d = Deck::standard().remove_known(&known).unwrap();
        assert_eq!(d.len(), 48);
        for c in &known {
            assert!(!d.contains(*c));
        }
    }

    #[test]
    fn remove_known_rejects_duplicates_and_missing_cards() {
        let dup = parse_cards("as, kd, as").unwrap();
        let err = Deck::standard().remove_known(&dup).unwrap_err();
        assert_eq!(err, DeckError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)));

        let d = Deck::standard().remove_known(&parse_cards("kd").unwrap()).unwrap();
        let err = d.remove_known(&parse_cards("kd").unwrap()).unwrap_err();
        assert_eq!(err, DeckError::CardNotInDeck(Card::new(Rank::King, Suit::Diamonds)));
    }

    #[test]
    fn draw_random_never_repeats_or_returns_known_cards() {
        let known = parse_cards("as, ks").unwrap();
        let mut d = Deck::standard().remove_known(&known).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen: HashSet<Card> = HashSet::new();
        for _ in 0..10 {
            for c in d.draw_random(&mut rng, 5).unwrap() {
                assert!(!known.contains(&c));
                assert!(seen.insert(c), "card {c} drawn twice");
            }
        }
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn draw_random_is_reproducible_for_a_seed() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        let xs = a.draw_random(&mut ChaCha8Rng::seed_from_u64(3), 7).unwrap();
        let ys = b.draw_random(&mut ChaCha8Rng::seed_from_u64(3), 7).unwrap();
        assert_eq!(xs, ys);
        assert_eq!(a, b);
    }

    #[test]
    fn draw_random_reports_insufficient_cards() {
        let mut d = Deck::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = d.draw_random(&mut rng, 53).unwrap_err();
        assert_eq!(err, DeckError::InsufficientCards { requested: 53, remaining: 52 });
        assert_eq!(d.len(), 52, "failed draw must not consume cards");
    }
}
