use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation, HandValue};

/// Strategy pattern: each detector recognises one category and knows how to
/// derive that category's tiebreak ranks.
pub trait CategoryDetector: Sync {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;

    /// Tiebreak ranks, most significant first. Grouped hands and flushes use
    /// the group order (count desc, rank desc).
    fn tiebreak(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.groups.ranks().collect()
    }
}

fn straight_tiebreak(analysis: &HandAnalysis) -> Vec<Rank> {
    analysis.straight_top.into_iter().collect()
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush && analysis.straight_top.is_some()
    }
    fn tiebreak(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        straight_tiebreak(analysis)
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.groups.is_shape(&[4, 1])
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.groups.is_shape(&[3, 2])
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_top.is_some()
    }
    fn tiebreak(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        straight_tiebreak(analysis)
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.groups.is_shape(&[3, 1, 1])
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.groups.is_shape(&[2, 2, 1])
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.groups.is_shape(&[2, 1, 1, 1])
    }
}

/// Fallback: always matches.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }
}

/// Detectors in priority order, strongest category first.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

/// Run the detectors in priority order and build the evaluation of the first match.
pub fn classify(analysis: &HandAnalysis) -> Evaluation {
    let detector: &dyn CategoryDetector =
        DETECTORS.iter().copied().find(|d| d.detect(analysis)).unwrap_or(&HighCardDetector);
    let category = detector.category();
    let value = HandValue::from_parts(category, &detector.tiebreak(analysis));
    Evaluation { category, best_five: analysis.sorted_cards, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let v = parse_cards(s).unwrap();
        HandAnalysis::new(&[v[0], v[1], v[2], v[3], v[4]])
    }

    #[test]
    fn fixture_table() {
        let table = [
            ("2h 2d 5s 5c 9h", Category::TwoPair),
            ("2h 3h 4h 5h 6h", Category::StraightFlush),
            ("ah 2h 3h 4h 5h", Category::StraightFlush),
            ("9c 9d 9h 9s ac", Category::FourOfAKind),
            ("3c 3d 3h js jc", Category::FullHouse),
            ("kh 10h 8h 6h 3h", Category::Flush),
            ("ac 5c 4d 3h 2s", Category::Straight),
            ("qc qd qh 10s 2c", Category::ThreeOfAKind),
            ("ah ad 10s 9c 2d", Category::Pair),
            ("ah kd 7s 5c 2d", Category::HighCard),
        ];
        for (cards, expected) in table {
            assert_eq!(classify(&analyze(cards)).category, expected, "{cards}");
        }
    }

    #[test]
    fn straight_flush_outranks_plain_flush_and_straight() {
        let a = analyze("9h 8h 7h 6h 5h");
        assert!(StraightFlushDetector.detect(&a));
        assert!(FlushDetector.detect(&a));
        assert!(StraightDetector.detect(&a));
        assert_eq!(classify(&a).category, Category::StraightFlush);
    }

    #[test]
    fn straight_tiebreak_is_top_card_only() {
        assert_eq!(StraightDetector.tiebreak(&analyze("ac 2d 3h 4s 5c")), vec![Rank::Five]);
    }

    #[test]
    fn quad_tiebreak_is_quad_then_kicker() {
        let a = analyze("as ah ad ac ks");
        assert_eq!(FourOfAKindDetector.tiebreak(&a), vec![Rank::Ace, Rank::King]);
    }

    #[test]
    fn pair_tiebreak_lists_kickers_descending() {
        let a = analyze("js jh 3d 9c 7s");
        assert_eq!(
            OnePairDetector.tiebreak(&a),
            vec![Rank::Jack, Rank::Nine, Rank::Seven, Rank::Three]
        );
    }
}
