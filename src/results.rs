//! Aggregation of trial outcomes into per-player statistics.
//!
//! Wins and ties are counted separately. A trial with `k` tied winners also
//! records a split of size `k`, so equity can be computed exactly as
//! `wins/N + sum(1/k)/N` without floating point accumulation during the run.

use crate::evaluator::Category;
use crate::simulation::{TrialOutcome, MAX_PLAYERS};

/// Raw counters for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTally {
    wins: u64,
    ties: u64,
    // splits[k] = trials this player shared with k-1 others
    splits: [u64; MAX_PLAYERS + 1],
    categories: [u64; Category::COUNT],
}

impl Default for PlayerTally {
    fn default() -> Self {
        Self { wins: 0, ties: 0, splits: [0; MAX_PLAYERS + 1], categories: [0; Category::COUNT] }
    }
}

impl PlayerTally {
    fn merge(&mut self, other: &PlayerTally) {
        self.wins += other.wins;
        self.ties += other.ties;
        for (a, b) in self.splits.iter_mut().zip(other.splits.iter()) {
            *a += b;
        }
        for (a, b) in self.categories.iter_mut().zip(other.categories.iter()) {
            *a += b;
        }
    }

    /// Pots won, counting a k-way split as 1/k of a pot.
    fn pot_share(&self) -> f64 {
        let split_share: f64 =
            self.splits.iter().enumerate().skip(2).map(|(k, n)| *n as f64 / k as f64).sum();
        self.wins as f64 + split_share
    }
}

/// Aggregated statistics of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    names: Vec<String>,
    tallies: Vec<PlayerTally>,
    trials: u64,
    seed: u64,
}

impl SimulationResult {
    /// Empty result for the given players. `seed` is the run seed that produced it.
    pub fn new(names: Vec<String>, seed: u64) -> Self {
        let tallies = vec![PlayerTally::default(); names.len()];
        Self { names, tallies, trials: 0, seed }
    }

    /// Fold one trial into the counters.
    pub fn record(&mut self, outcome: &TrialOutcome) {
        debug_assert_eq!(outcome.categories.len(), self.tallies.len());
        let k = outcome.winners.len();
        for &w in &outcome.winners {
            if let Some(t) = self.tallies.get_mut(w) {
                if k == 1 {
                    t.wins += 1;
                } else {
                    t.ties += 1;
                    t.splits[k.min(MAX_PLAYERS)] += 1;
                }
            }
        }
        for (t, cat) in self.tallies.iter_mut().zip(outcome.categories.iter()) {
            t.categories[cat.ordinal() as usize] += 1;
        }
        self.trials += 1;
    }

    /// Add another partial result for the same players (reduction step).
    pub fn merge(&mut self, other: &SimulationResult) {
        debug_assert_eq!(self.names, other.names);
        for (a, b) in self.tallies.iter_mut().zip(other.tallies.iter()) {
            a.merge(b);
        }
        self.trials += other.trials;
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn num_players(&self) -> usize {
        self.names.len()
    }

    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn player(&self, idx: usize) -> Option<PlayerStats<'_>> {
        let tally = self.tallies.get(idx)?;
        Some(PlayerStats { name: &self.names[idx], tally, trials: self.trials })
    }

    pub fn player_by_name(&self, name: &str) -> Option<PlayerStats<'_>> {
        self.player(self.player_index(name)?)
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerStats<'_>> {
        (0..self.names.len()).filter_map(move |i| self.player(i))
    }

    pub fn win_probability(&self, idx: usize) -> Option<f64> {
        self.player(idx).map(|p| p.win_probability())
    }

    pub fn tie_probability(&self, idx: usize) -> Option<f64> {
        self.player(idx).map(|p| p.tie_probability())
    }

    pub fn equity(&self, idx: usize) -> Option<f64> {
        self.player(idx).map(|p| p.equity())
    }

    pub fn loss_probability(&self, idx: usize) -> Option<f64> {
        self.player(idx).map(|p| p.loss_probability())
    }

    pub fn category_distribution(&self, idx: usize) -> Option<Vec<(Category, f64)>> {
        self.player(idx).map(|p| p.category_distribution())
    }

    pub fn category_counts(&self, idx: usize) -> Option<Vec<(Category, u64)>> {
        self.player(idx).map(|p| p.category_counts())
    }

    /// Equity of every player, in seat order. Sums to 1 for a completed run.
    pub fn winner_distribution(&self) -> Vec<(&str, f64)> {
        self.players().map(|p| (p.name(), p.equity())).collect()
    }
}

/// Read-only view of one player's statistics.
#[derive(Debug, Clone, Copy)]
pub struct PlayerStats<'a> {
    name: &'a str,
    tally: &'a PlayerTally,
    trials: u64,
}

impl<'a> PlayerStats<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn wins(&self) -> u64 {
        self.tally.wins
    }

    pub fn ties(&self) -> u64 {
        self.tally.ties
    }

    pub fn losses(&self) -> u64 {
        self.trials - self.tally.wins - self.tally.ties
    }

    fn ratio(&self, x: f64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            x / self.trials as f64
        }
    }

    /// Outright wins / N.
    pub fn win_probability(&self) -> f64 {
        self.ratio(self.tally.wins as f64)
    }

    /// Trials ending in a split pot this player shared / N.
    pub fn tie_probability(&self) -> f64 {
        self.ratio(self.tally.ties as f64)
    }

    pub fn loss_probability(&self) -> f64 {
        self.ratio(self.losses() as f64)
    }

    /// Expected share of the pot: wins/N plus 1/k per k-way split, over N.
    pub fn equity(&self) -> f64 {
        self.ratio(self.tally.pot_share())
    }

    pub fn category_count(&self, category: Category) -> u64 {
        self.tally.categories[category.ordinal() as usize]
    }

    pub fn category_probability(&self, category: Category) -> f64 {
        self.ratio(self.category_count(category) as f64)
    }

    /// Raw count per category, weakest first.
    pub fn category_counts(&self) -> Vec<(Category, u64)> {
        Category::ALL.iter().map(|&c| (c, self.category_count(c))).collect()
    }

    /// Share of trials ending in each category, weakest first.
    pub fn category_distribution(&self) -> Vec<(Category, f64)> {
        Category::ALL.iter().map(|&c| (c, self.category_probability(c))).collect()
    }

    /// Most frequent category, ties going to the stronger one.
    pub fn most_likely_category(&self) -> Option<Category> {
        if self.trials == 0 {
            return None;
        }
        Category::ALL.iter().copied().max_by_key(|c| self.category_count(*c))
    }
}
