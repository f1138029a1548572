use super::SimulationRequest;
use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_seven, Category, HandValue};
use crate::hand::HoleState;
use rand::Rng;

/// Result of a single simulated showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Seat indices sharing the best hand. More than one means a split pot.
    pub winners: Vec<usize>,
    /// Final category of every seat, in seat order.
    pub categories: Vec<Category>,
}

/// Play one trial: complete the board, deal random hole cards and score
/// every seat.
///
/// `deck` must be the request's remaining deck; it is cloned so the caller
/// can reuse it across trials.
pub fn run_trial<R: Rng + ?Sized>(
    request: &SimulationRequest,
    deck: &Deck,
    rng: &mut R,
) -> Result<TrialOutcome, DeckError> {
    let mut deck = deck.clone();

    let mut board: Vec<Card> = Vec::with_capacity(5);
    board.extend_from_slice(request.board().as_slice());
    deck.draw_random_into(rng, request.board().missing(), &mut board)?;

    let mut values: Vec<HandValue> = Vec::with_capacity(request.num_players());
    let mut categories = Vec::with_capacity(request.num_players());
    let mut hole: Vec<Card> = Vec::with_capacity(2);
    for seat in request.seats() {
        hole.clear();
        match seat.hole() {
            HoleState::Known(h) => hole.extend_from_slice(&h.as_array()),
            HoleState::Random => deck.draw_random_into(rng, 2, &mut hole)?,
        }
        let seven = [hole[0], hole[1], board[0], board[1], board[2], board[3], board[4]];
        let eval = evaluate_seven(&seven);
        values.push(eval.value());
        categories.push(eval.category);
    }

    let best = values.iter().copied().max();
    let winners = values
        .iter()
        .enumerate()
        .filter(|(_, v)| Some(**v) == best)
        .map(|(i, _)| i)
        .collect();
    Ok(TrialOutcome { winners, categories })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn full_board_royal_flush_always_wins() {
        let request = SimulationRequest::builder()
            .player("Hero", &parse_cards("as ks").unwrap())
            .random("Villain")
            .board(parse_cards("qs js 10s 2d 3c").unwrap())
            .build()
            .unwrap();
        let deck = request.remaining_deck().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            let out = run_trial(&request, &deck, &mut rng).unwrap();
            assert_eq!(out.winners, vec![0]);
            assert_eq!(out.categories[0], Category::StraightFlush);
        }
    }

    #[test]
    fn board_plays_for_everyone_is_a_split() {
        let request = SimulationRequest::builder()
            .player("A", &parse_cards("2c 3d").unwrap())
            .player("B", &parse_cards("2d 3c").unwrap())
            .board(parse_cards("as ks qs js 10s").unwrap())
            .build()
            .unwrap();
        let deck = request.remaining_deck().unwrap();
        let out = run_trial(&request, &deck, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(out.winners, vec![0, 1]);
        assert_eq!(out.categories, vec![Category::StraightFlush; 2]);
    }

    #[test]
    fn deck_is_left_untouched() {
        let request = SimulationRequest::from_form(3, "", "").unwrap();
        let deck = request.remaining_deck().unwrap();
        let before = deck.clone();
        let out = run_trial(&request, &deck, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(deck, before);
        assert_eq!(out.categories.len(), 3);
        assert!(!out.winners.is_empty());
    }

    #[test]
    fn same_rng_state_gives_same_outcome() {
        let request = SimulationRequest::from_form(4, "7h 7d", "2s").unwrap();
        let deck = request.remaining_deck().unwrap();
        let a = run_trial(&request, &deck, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        let b = run_trial(&request, &deck, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }
}
