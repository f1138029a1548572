use super::ValidationError;

/// Trials per run when nothing else is configured.
pub const DEFAULT_TRIALS: u64 = 10_000;

/// Run parameters. Everything that influences the random stream lives here,
/// so `(request, config)` fully determines a seeded run.
///
/// ```
/// use poker_odds::simulation::SimulationConfig;
///
/// let cfg = SimulationConfig::default().with_trials(2_000).with_jobs(4).with_seed(7);
/// assert_eq!((cfg.trials, cfg.jobs, cfg.seed), (2_000, 4, Some(7)));
/// cfg.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub trials: u64,
    /// Worker threads (`n_jobs`). Results are reproducible for a fixed
    /// `(seed, jobs)` pair.
    pub jobs: usize,
    /// `None` draws a fresh seed per run; the seed used is reported in the result.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { trials: DEFAULT_TRIALS, jobs: 1, seed: None }
    }
}

impl SimulationConfig {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trials == 0 {
            return Err(ValidationError::NoTrials);
        }
        if self.jobs == 0 {
            return Err(ValidationError::NoJobs);
        }
        Ok(())
    }
}
