use poker_odds::cards::parse_cards;
use poker_odds::deck::DeckError;
use poker_odds::evaluator::Category;
use poker_odds::simulation::{
    simulate, CancelToken, SimulationConfig, SimulationError, SimulationRequest, Simulator,
    ValidationError,
};

fn config(trials: u64, seed: u64) -> SimulationConfig {
    SimulationConfig::default().with_trials(trials).with_seed(seed)
}

#[test]
fn same_seed_same_inputs_same_result() {
    let request = SimulationRequest::from_form(3, "jh, jd", "2c, 7s, kd").unwrap();
    let a = simulate(&request, &config(2_000, 99)).unwrap();
    let b = simulate(&request, &config(2_000, 99)).unwrap();
    assert_eq!(a, b);

    let c = simulate(&request, &config(2_000, 100)).unwrap();
    assert_ne!(a, c, "different seeds should explore different deals");
}

#[test]
fn parallel_runs_are_deterministic_per_job_count() {
    let request = SimulationRequest::from_form(4, "as, ks", "").unwrap();
    let cfg = config(4_000, 7).with_jobs(4);
    let a = simulate(&request, &cfg).unwrap();
    let b = simulate(&request, &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.trials(), 4_000);

    let serial = simulate(&request, &config(4_000, 7)).unwrap();
    let diff = (a.equity(0).unwrap() - serial.equity(0).unwrap()).abs();
    assert!(diff < 0.04, "parallel and serial estimates drifted apart: {diff}");
}

#[test]
fn category_counts_sum_to_trials() {
    let request = SimulationRequest::from_form(5, "", "").unwrap();
    let result = simulate(&request, &config(1_500, 3).with_jobs(3)).unwrap();
    for p in result.players() {
        let total: u64 = Category::ALL.iter().map(|c| p.category_count(*c)).sum();
        assert_eq!(total, 1_500, "{}", p.name());
    }
    let equity: f64 = result.winner_distribution().iter().map(|(_, e)| e).sum();
    assert!((equity - 1.0).abs() < 1e-9);
}

#[test]
fn royal_flush_on_a_full_board_wins_every_trial() {
    let request = SimulationRequest::from_form(6, "as, ks", "qs, js, 10s, 2d, 3c").unwrap();
    let result = simulate(&request, &config(1_000, 1)).unwrap();
    let you = result.player_by_name("You").unwrap();
    assert_eq!(you.wins(), 1_000);
    assert_eq!(you.win_probability(), 1.0);
    assert_eq!(you.equity(), 1.0);
    assert_eq!(you.category_probability(Category::StraightFlush), 1.0);
    for other in result.players().skip(1) {
        assert_eq!(other.losses(), 1_000);
    }
}

#[test]
fn ace_king_suited_against_a_random_hand() {
    let request = SimulationRequest::from_form(2, "as, ks", "").unwrap();
    let result = simulate(&request, &config(10_000, 2024)).unwrap();
    let equity = result.equity(0).unwrap();
    assert!((equity - 0.67).abs() <= 0.02, "AKs equity {equity}");
}

#[test]
fn ties_are_split_evenly_when_the_board_plays() {
    let request = SimulationRequest::builder()
        .player("A", &parse_cards("2c, 3d").unwrap())
        .player("B", &parse_cards("2d, 3c").unwrap())
        .board(parse_cards("as, ks, qs, js, 10s").unwrap())
        .build()
        .unwrap();
    let result = simulate(&request, &config(50, 5)).unwrap();
    for p in result.players() {
        assert_eq!(p.ties(), 50);
        assert_eq!(p.win_probability(), 0.0);
        assert!((p.equity() - 0.5).abs() < 1e-12);
    }
}

#[test]
fn invalid_requests_never_reach_the_trial_loop() {
    assert_eq!(
        SimulationRequest::from_form(1, "", "").unwrap_err(),
        SimulationError::Validation(ValidationError::PlayerCount(1))
    );
    assert!(matches!(
        SimulationRequest::from_form(2, "as, as", "").unwrap_err(),
        SimulationError::Deck(DeckError::DuplicateCard(_))
    ));
    assert!(matches!(
        SimulationRequest::from_form(2, "as, kx", "").unwrap_err(),
        SimulationError::Parse(_)
    ));
    let request = SimulationRequest::from_form(2, "", "").unwrap();
    assert_eq!(
        simulate(&request, &config(10, 1).with_jobs(0)).unwrap_err(),
        SimulationError::Validation(ValidationError::NoJobs)
    );
}

#[test]
fn cancellation_discards_partial_counts() {
    let request = SimulationRequest::from_form(9, "", "").unwrap();
    let token = CancelToken::new();
    let sim = Simulator::new(config(1_000_000, 8).with_jobs(2)).with_cancel_token(token.clone());
    token.cancel();
    assert_eq!(sim.run(&request).unwrap_err(), SimulationError::Cancelled);
}

#[test]
fn nine_players_with_no_known_cards_fit_in_the_deck() {
    let request = SimulationRequest::from_form(9, "", "").unwrap();
    let result = simulate(&request, &config(200, 4)).unwrap();
    assert_eq!(result.num_players(), 9);
    assert_eq!(result.trials(), 200);
}
