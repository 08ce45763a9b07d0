//! Tic Tac Toe - terminal front end
//!
//! Renders the engine state with ratatui and forwards clicks and key
//! presses to it. Every event is handled to completion before the next one
//! is read.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tictactoe::Engine;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.player_a, cli.player_b)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { moves, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(io::stderr)
                .init();
            println!("{}", replay::replay(&config, &moves, json)?);
            Ok(())
        }
    }
}

/// Sends logs to a file so they do not draw over the UI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Run the terminal UI
fn run_tui(config: &Config) -> Result<()> {
    init_file_tracing(config.log_file())?;
    info!(player_a = %config.player_a(), player_b = %config.player_b(), "Starting Tic Tac Toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(Engine::with_players(
        config.player_a().as_str(),
        config.player_b().as_str(),
    ));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one event, apply it, repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let cells = ui::draw(f, &app);
            app.set_cell_areas(cells);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            other => debug!(event = ?other, "Ignoring event"),
        }

        if app.should_quit() {
            let scores = app.engine().scores();
            info!(rounds = scores.rounds(), ties = scores.ties(), "User quit");
            return Ok(());
        }
    }
}
