use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    poll_interval: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Map a key press to an action. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    if matches!(key.code, KeyCode::Esc) {
        let _ = app.handle_input(InputAction::ClearStatus);
        return false;
    }

    match app.scene {
        Scene::Form => match key.code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::FormPrev);
            }
            KeyCode::Down | KeyCode::Tab => {
                let _ = app.handle_input(InputAction::FormNext);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::Submit);
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::Backspace);
            }
            // Text fields take precedence over single-letter shortcuts.
            KeyCode::Char(c) if app.focused_item().accepts(c) => {
                let _ = app.handle_input(InputAction::Type(c));
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::FormInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::FormDec);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleScene);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Results => match key.code {
            KeyCode::Char(']') | KeyCode::Right | KeyCode::Down => {
                let _ = app.handle_input(InputAction::SelectNext);
            }
            KeyCode::Char('[') | KeyCode::Left | KeyCode::Up => {
                let _ = app.handle_input(InputAction::SelectPrev);
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let idx = (c as u8 - b'1') as usize;
                let _ = app.handle_input(InputAction::SelectPlayer(idx));
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::ToggleScene);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
    }
    false
}
