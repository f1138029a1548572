use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_odds::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILE: &str = "poker-odds.log";

/// The UI owns the terminal, so logs go to a file and only when `RUST_LOG` is set.
fn init_logging() -> io::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = std::env::var("POKER_ODDS_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-odds needs a real terminal (TTY).\nRun it in a terminal and press q to quit. Version: {}",
            poker_odds::VERSION
        );
        return Ok(());
    }
    init_logging()?;
    tracing::info!(version = poker_odds::VERSION, "poker-odds starting");

    let mut terminal = setup_terminal()?;
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
