//! Terminal entry point.
//!
//! # Responsibility
//! - Bootstrap logging, storage and application state.
//! - Run the draw/input loop and restore the terminal on exit.

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{self, Event, KeyEventKind};
use kalender_core::db::open_db;
use kalender_core::{IdentityService, SqliteIdentityRepository};
use log::info;
use ratatui::DefaultTerminal;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    let data_dir = data_dir()?;
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;
    let data_dir = data_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve data directory {}", data_dir.display()))?;

    kalender_core::init_logging(
        kalender_core::default_log_level(),
        &data_dir.join("logs").to_string_lossy(),
    )
    .map_err(anyhow::Error::msg)?;

    let conn = open_db(data_dir.join("kalender.db"))?;
    let identity = IdentityService::load(SqliteIdentityRepository::new(&conn))?;
    let mut app = App::new(identity);

    info!("event=tui_start module=tui status=ok data_dir={}", data_dir.display());

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run<R: kalender_core::IdentityRepository>(
    terminal: &mut DefaultTerminal,
    app: &mut App<R>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.on_key(key);
            }
        }
    }
    Ok(())
}

/// Data directory: `KALENDER_DATA_DIR` override, else the platform data
/// directory under `kalender-ramadan`.
fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("KALENDER_DATA_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let base = dirs::data_dir().context("could not determine platform data directory")?;
    Ok(base.join("kalender-ramadan"))
}
