use crate::cards::{parse_cards, Card};
use crate::results::{PlayerStats, SimulationResult};
use crate::simulation::{seat_name, simulate, SimulationConfig, SimulationRequest, MIN_PLAYERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Form,
    Results,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    FormNext,
    FormPrev,
    FormInc,
    FormDec,
    Type(char),
    Backspace,
    /// Enter: add community cards on that field, run the simulation elsewhere.
    Submit,
    ClearStatus,
    ToggleScene,
    SelectNext,
    SelectPrev,
    SelectPlayer(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub form_index: usize,
    pub num_players: usize,
    pub your_cards: String,
    // Text typed into the community field, not yet added
    pub community_input: String,
    pub community: Vec<Card>,
    pub trials: u64,
    // Set once a digit is typed into Trials; cleared when focus moves
    pub(super) trials_typed: bool,
    pub jobs: usize,
    pub seed_input: String,
    // Player whose category distribution the results view shows
    pub selected_player: usize,
    result: Option<SimulationResult>,
    status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            scene: Scene::Form,
            form_index: 0,
            num_players: MIN_PLAYERS,
            your_cards: String::new(),
            community_input: String::new(),
            community: Vec::new(),
            trials: config.trials,
            trials_typed: false,
            jobs: config.jobs,
            seed_input: String::new(),
            selected_player: 0,
            result: None,
            status: None,
        }
    }
}

impl AppState {
    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    pub fn selected_stats(&self) -> Option<PlayerStats<'_>> {
        self.result.as_ref()?.player(self.selected_player)
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub(crate) fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(Status { kind, message: message.into() });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Build a request from the form, run it and switch to the results view.
    ///
    /// The pending community cards are cleared on success; on failure the
    /// form is left as it was and the error goes to the status line.
    pub fn run_simulation(&mut self) -> bool {
        let yours = match parse_cards(&self.your_cards) {
            Ok(cards) => cards,
            Err(err) => {
                self.set_status(StatusKind::Error, format!("Your cards: {err}"));
                return false;
            }
        };
        let mut config = SimulationConfig::default().with_trials(self.trials).with_jobs(self.jobs);
        if !self.seed_input.is_empty() {
            match self.seed_input.parse::<u64>() {
                Ok(seed) => config = config.with_seed(seed),
                Err(_) => {
                    self.set_status(StatusKind::Error, "Seed must fit in 64 bits");
                    return false;
                }
            }
        }
        let outcome = SimulationRequest::builder()
            .player(seat_name(0), &yours)
            .board(self.community.clone())
            .total_players(self.num_players)
            .build()
            .and_then(|request| simulate(&request, &config));
        match outcome {
            Ok(result) => {
                self.set_status(
                    StatusKind::Success,
                    format!("Ran {} trials (seed {})", result.trials(), result.seed()),
                );
                self.result = Some(result);
                self.selected_player = 0;
                self.community.clear();
                self.community_input.clear();
                self.scene = Scene::Results;
                true
            }
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                false
            }
        }
    }

    pub fn toggle_scene(&mut self) {
        match self.scene {
            Scene::Results => self.scene = Scene::Form,
            _ if self.result.is_none() => {
                self.set_status(StatusKind::Warning, "No results yet: press Enter to run");
            }
            _ => self.scene = Scene::Results,
        }
    }

    fn num_result_players(&self) -> usize {
        self.result.as_ref().map_or(0, SimulationResult::num_players)
    }

    pub fn select_next(&mut self) {
        let n = self.num_result_players();
        if n > 0 {
            self.selected_player = (self.selected_player + 1) % n;
        }
    }

    pub fn select_prev(&mut self) {
        let n = self.num_result_players();
        if n > 0 {
            self.selected_player = (self.selected_player + n - 1) % n;
        }
    }

    pub fn select_player(&mut self, idx: usize) -> bool {
        if idx < self.num_result_players() {
            self.selected_player = idx;
            return true;
        }
        self.set_status(StatusKind::Warning, format!("No {} in the last run", seat_name(idx)));
        false
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::FormNext => {
                if self.scene == Scene::Form {
                    self.form_next();
                }
                false
            }
            InputAction::FormPrev => {
                if self.scene == Scene::Form {
                    self.form_prev();
                }
                false
            }
            InputAction::FormInc => {
                if self.scene == Scene::Form {
                    self.form_inc();
                }
                false
            }
            InputAction::FormDec => {
                if self.scene == Scene::Form {
                    self.form_dec();
                }
                false
            }
            InputAction::Type(c) => {
                if self.scene == Scene::Form {
                    self.form_type(c);
                }
                false
            }
            InputAction::Backspace => {
                if self.scene == Scene::Form {
                    self.form_backspace();
                }
                false
            }
            InputAction::Submit => {
                if self.scene != Scene::Form {
                    return false;
                }
                if self.focused_item() == super::FormItem::Community {
                    self.add_community_cards()
                } else {
                    self.run_simulation()
                }
            }
            InputAction::ClearStatus => {
                self.clear_status();
                false
            }
            InputAction::ToggleScene => {
                self.toggle_scene();
                false
            }
            InputAction::SelectNext => {
                if self.scene == Scene::Results {
                    self.select_next();
                }
                false
            }
            InputAction::SelectPrev => {
                if self.scene == Scene::Results {
                    self.select_prev();
                }
                false
            }
            InputAction::SelectPlayer(idx) => {
                self.scene == Scene::Results && self.select_player(idx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::FormItem;

    fn focus(app: &mut AppState, item: FormItem) {
        while app.focused_item() != item {
            app.form_next();
        }
    }

    #[test]
    fn defaults_are_two_players_and_ten_thousand_trials() {
        let app = AppState::default();
        assert_eq!(app.num_players, 2);
        assert_eq!(app.trials, 10_000);
        assert_eq!(app.jobs, 1);
        assert!(app.result().is_none());
    }

    #[test]
    fn failed_run_keeps_the_form_and_reports() {
        let mut app = AppState::default();
        app.your_cards = "as".into();
        assert!(!app.run_simulation());
        assert_eq!(app.scene, Scene::Form);
        assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn successful_run_clears_pending_board() {
        let mut app = AppState::default();
        app.your_cards = "as ks".into();
        app.trials = 300;
        app.seed_input = "11".into();
        focus(&mut app, FormItem::Community);
        app.community_input = "qs js".into();
        assert!(app.handle_input(InputAction::Submit));
        assert_eq!(app.community.len(), 2);

        focus(&mut app, FormItem::Trials);
        assert!(app.handle_input(InputAction::Submit));
        assert_eq!(app.scene, Scene::Results);
        assert!(app.community.is_empty());
        assert_eq!(app.result().map(|r| r.seed()), Some(11));
    }
}
