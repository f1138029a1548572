use crate::cards::parse_cards;
use crate::hand::MAX_BOARD_CARDS;
use crate::simulation::{MAX_PLAYERS, MIN_PLAYERS};

use super::{AppState, StatusKind};

const TRIAL_STEP: u64 = 1_000;
const MAX_TRIALS: u64 = 10_000_000;
const MAX_JOBS: usize = 64;
const MAX_SEED_DIGITS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItem {
    Players,
    YourCards,
    Community,
    Trials,
    Jobs,
    Seed,
}

pub(super) const FORM_ITEMS: [FormItem; 6] = [
    FormItem::Players,
    FormItem::YourCards,
    FormItem::Community,
    FormItem::Trials,
    FormItem::Jobs,
    FormItem::Seed,
];

fn is_card_char(c: char) -> bool {
    c.is_ascii_digit() || " ,akqjtshdcAKQJTSHDC".contains(c)
}

impl FormItem {
    fn display(self, app: &AppState) -> String {
        match self {
            FormItem::Players => format!("Players: {}", app.num_players),
            FormItem::YourCards => format!("Your Cards: {}", app.your_cards),
            FormItem::Community => {
                let pending: Vec<String> = app.community.iter().map(|c| c.to_string()).collect();
                format!(
                    "Community ({}/{}): [{}] + {}",
                    app.community.len(),
                    MAX_BOARD_CARDS,
                    pending.join(" "),
                    app.community_input
                )
            }
            FormItem::Trials => format!("Trials: {}", app.trials),
            FormItem::Jobs => format!("Jobs: {}", app.jobs),
            FormItem::Seed => {
                if app.seed_input.is_empty() {
                    "Seed: random".to_string()
                } else {
                    format!("Seed: {}", app.seed_input)
                }
            }
        }
    }

    /// Whether a typed character edits this item rather than acting as a shortcut.
    pub fn accepts(self, c: char) -> bool {
        match self {
            FormItem::YourCards | FormItem::Community => is_card_char(c),
            FormItem::Trials | FormItem::Seed => c.is_ascii_digit(),
            FormItem::Players | FormItem::Jobs => false,
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            FormItem::Players => {
                if app.num_players < MAX_PLAYERS {
                    app.num_players += 1;
                }
            }
            FormItem::Trials => {
                app.trials = app.trials.saturating_add(TRIAL_STEP).min(MAX_TRIALS);
            }
            FormItem::Jobs => {
                if app.jobs < MAX_JOBS {
                    app.jobs += 1;
                }
            }
            FormItem::YourCards | FormItem::Community | FormItem::Seed => {}
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            FormItem::Players => {
                if app.num_players > MIN_PLAYERS {
                    app.num_players -= 1;
                }
            }
            FormItem::Trials => {
                app.trials = app.trials.saturating_sub(TRIAL_STEP).max(1);
            }
            FormItem::Jobs => {
                if app.jobs > 1 {
                    app.jobs -= 1;
                }
            }
            FormItem::YourCards | FormItem::Community | FormItem::Seed => {}
        }
    }

    fn push(self, app: &mut AppState, c: char) {
        if !self.accepts(c) {
            return;
        }
        match self {
            FormItem::YourCards => app.your_cards.push(c),
            FormItem::Community => app.community_input.push(c),
            FormItem::Trials => {
                // The first digit after focusing replaces the value.
                if !app.trials_typed {
                    app.trials = 0;
                    app.trials_typed = true;
                }
                let d = u64::from(c as u8 - b'0');
                app.trials = app.trials.saturating_mul(10).saturating_add(d).min(MAX_TRIALS);
            }
            FormItem::Seed => {
                if app.seed_input.len() < MAX_SEED_DIGITS {
                    app.seed_input.push(c);
                }
            }
            FormItem::Players | FormItem::Jobs => {}
        }
    }

    fn pop(self, app: &mut AppState) {
        match self {
            FormItem::YourCards => {
                app.your_cards.pop();
            }
            FormItem::Community => {
                // Empty input: take back the last pending card instead.
                if app.community_input.pop().is_none() {
                    app.community.pop();
                }
            }
            FormItem::Trials => app.trials /= 10,
            FormItem::Seed => {
                app.seed_input.pop();
            }
            FormItem::Players | FormItem::Jobs => {}
        }
    }
}

impl AppState {
    pub fn form_items_display(&self) -> Vec<String> {
        FORM_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn focused_item(&self) -> FormItem {
        FORM_ITEMS[self.form_index % FORM_ITEMS.len()]
    }

    pub fn form_next(&mut self) {
        self.form_index = (self.form_index + 1) % FORM_ITEMS.len();
        self.trials_typed = false;
    }

    pub fn form_prev(&mut self) {
        self.form_index = (self.form_index + FORM_ITEMS.len() - 1) % FORM_ITEMS.len();
        self.trials_typed = false;
    }

    pub fn form_inc(&mut self) {
        let item = self.focused_item();
        item.inc(self);
    }

    pub fn form_dec(&mut self) {
        let item = self.focused_item();
        item.dec(self);
    }

    pub fn form_type(&mut self, c: char) {
        let item = self.focused_item();
        item.push(self, c);
    }

    pub fn form_backspace(&mut self) {
        let item = self.focused_item();
        item.pop(self);
    }

    /// Move the typed community card(s) into the pending board.
    ///
    /// Returns `true` when at least one card was added.
    pub fn add_community_cards(&mut self) -> bool {
        let text = self.community_input.trim().to_string();
        if text.is_empty() {
            self.set_status(StatusKind::Warning, "Type a card first, e.g. Kd");
            return false;
        }
        let cards = match parse_cards(&text) {
            Ok(cards) => cards,
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                return false;
            }
        };
        if self.community.len() + cards.len() > MAX_BOARD_CARDS {
            self.set_status(
                StatusKind::Warning,
                format!("At most {MAX_BOARD_CARDS} community cards can be set"),
            );
            return false;
        }
        for (i, card) in cards.iter().enumerate() {
            if self.community.contains(card) || cards[..i].contains(card) {
                self.set_status(StatusKind::Error, format!("Card {card} is already on the board"));
                return false;
            }
        }
        let added: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
        self.community.extend(cards);
        self.community_input.clear();
        self.set_status(StatusKind::Success, format!("Added {}", added.join(" ")));
        true
    }
}
