//! battle_tui - Play a six-versus-six battle against the AI in the terminal

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use battle_core::BattleConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file so tracing output does not tear the TUI
fn init_logging() -> WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "battle_tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

/// Config path from the first argument or `BATTLE_CONFIG`
fn load_config() -> Result<BattleConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BATTLE_CONFIG").ok())
        .map(PathBuf::from);

    match path {
        Some(path) => BattleConfig::load(&path)
            .with_context(|| format!("loading battle config from {}", path.display())),
        None => Ok(BattleConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging();
    let config = load_config()?;
    info!(roster_size = config.roster_size, "starting battle_tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.poll_loading();
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::PageUp, _) => app.scroll_log_up(),
                    (KeyCode::PageDown, _) => app.scroll_log_down(),
                    (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(),
                    (KeyCode::Char(c @ '1'..='4'), _) => {
                        app.attack(c as usize - '1' as usize);
                    }
                    (KeyCode::Char('r'), _) => app.restart(),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
