use crate::cards::{Card, Rank};

/// Rank bit for `r` in a 15-bit mask indexed by rank value.
const fn bit(r: Rank) -> u16 {
    1 << r.value()
}

const WHEEL: u16 = bit(Rank::Ace) | bit(Rank::Two) | bit(Rank::Three) | bit(Rank::Four) | bit(Rank::Five);

/// Highest straight contained in a rank mask, if any. The wheel tops out at Five.
pub fn straight_top(mask: u16) -> Option<Rank> {
    for top in (6u8..=14).rev() {
        let run = 0b11111u16 << (top - 4);
        if mask & run == run {
            return Rank::from_value(top);
        }
    }
    if mask & WHEEL == WHEEL {
        return Some(Rank::Five);
    }
    None
}

/// Ranks of a 5-card hand grouped by multiplicity, ordered by
/// (count desc, rank desc). `AAKKQ` groups as `[(A,2), (K,2), (Q,1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    entries: [(Rank, u8); 5],
    len: usize,
}

impl RankGroups {
    fn from_sorted(ranks: &[Rank; 5]) -> Self {
        let mut entries = [(Rank::Two, 0u8); 5];
        let mut len = 0;
        for &r in ranks {
            if len > 0 && entries[len - 1].0 == r {
                entries[len - 1].1 += 1;
            } else {
                entries[len] = (r, 1);
                len += 1;
            }
        }
        // Stable sort keeps rank-descending order inside equal counts.
        entries[..len].sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries, len }
    }

    pub fn as_slice(&self) -> &[(Rank, u8)] {
        &self.entries[..self.len]
    }

    /// Group sizes, largest first, e.g. `[3, 2]` for a full house.
    pub fn shape(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_slice().iter().map(|(_, c)| *c)
    }

    pub fn is_shape(&self, shape: &[u8]) -> bool {
        self.shape().eq(shape.iter().copied())
    }

    /// Group ranks in significance order; this is the tiebreak key for every
    /// category except straights.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.as_slice().iter().map(|(r, _)| *r)
    }
}

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    pub groups: RankGroups,
    pub is_flush: bool,
    pub straight_top: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks = sorted_cards.map(Card::rank);

        let groups = RankGroups::from_sorted(&ranks);
        let is_flush = sorted_cards.iter().all(|c| c.suit() == sorted_cards[0].suit());
        let straight_top = if groups.len == 5 {
            straight_top(ranks.iter().fold(0u16, |m, r| m | bit(*r)))
        } else {
            None
        };

        Self { sorted_cards, groups, is_flush, straight_top }
    }
}
