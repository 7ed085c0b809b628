pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod render;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::{
    fs::File,
    io::{self, Stdout},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use app::{
    events::{AppEvent, spawn_input_task},
    settings::{load_runtime_settings, save_runtime_settings},
    state::{AppMode, AppState},
};
use cli::Cli;
use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }
    let (settings, settings_path) = load_runtime_settings(&cli, true);
    let size = terminal::size().context("reading terminal size failed")?;
    let mut app = AppState::new(&cli, settings, size)?;
    app.settings_path = settings_path;

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &mut app, &cli).await;
    restore_terminal(&mut terminal)?;

    if let Some(path) = &app.settings_path
        && let Err(err) = save_runtime_settings(path, &app.settings_snapshot())
    {
        warn!(error = %err, path = %path.display(), "saving settings failed");
    }
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    cli: &Cli,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {} failed", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
