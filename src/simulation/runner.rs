use super::{run_trial, SimulationConfig, SimulationError, SimulationRequest};
use crate::deck::Deck;
use crate::results::SimulationResult;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, warn};

/// Shared flag that stops a running simulation between trials.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs requests under a fixed [`SimulationConfig`].
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
    cancel: Option<CancelToken>,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config, cancel: None }
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run `config.trials` trials split over `config.jobs` workers.
    ///
    /// Worker `w` draws from a ChaCha8 stream `w` keyed by the run seed and
    /// plays its share of the trials; partial results are merged in worker
    /// order. The same `(seed, jobs)` therefore always gives the same result.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        self.config.validate()?;
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let trials = self.config.trials;
        let jobs = (self.config.jobs as u64).min(trials).max(1) as usize;

        let span = info_span!("simulate", players = request.num_players(), trials, jobs, seed);
        let _enter = span.enter();
        let started = Instant::now();

        let deck = request.remaining_deck()?;
        let share = |w: usize| trials / jobs as u64 + u64::from((w as u64) < trials % jobs as u64);

        let partials: Vec<SimulationResult> = if jobs == 1 {
            vec![self.run_worker(request, &deck, seed, 0, trials)?]
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;
            pool.install(|| {
                (0..jobs)
                    .into_par_iter()
                    .map(|w| self.run_worker(request, &deck, seed, w, share(w)))
                    .collect::<Result<Vec<_>, _>>()
            })?
        };

        let mut result = SimulationResult::new(request.names(), seed);
        for partial in &partials {
            result.merge(partial);
        }
        info!(
            trials = result.trials(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "simulation finished"
        );
        Ok(result)
    }

    fn run_worker(
        &self,
        request: &SimulationRequest,
        deck: &Deck,
        seed: u64,
        worker: usize,
        trials: u64,
    ) -> Result<SimulationResult, SimulationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(worker as u64);
        debug!(worker, trials, "worker started");

        let mut partial = SimulationResult::new(request.names(), seed);
        for _ in 0..trials {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                warn!(worker, done = partial.trials(), "simulation cancelled");
                return Err(SimulationError::Cancelled);
            }
            let outcome = run_trial(request, deck, &mut rng)?;
            partial.record(&outcome);
        }
        Ok(partial)
    }
}

/// Run `request` once under `config`.
pub fn simulate(
    request: &SimulationRequest,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new(config.clone()).run(request)
}
