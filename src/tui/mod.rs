//! Terminal page shell hosting the essay search
//!
//! Pages are switched through the [`Router`](crate::router::Router); the
//! essays page mounts an [`EssayFilter`](crate::filter::EssayFilter) on entry
//! and drops it on exit.

pub mod app;
pub mod colors;
pub mod essay_list;
pub mod ui;

use crate::config::AppConfig;
use crate::error::{EssayError, Result};
use crate::essay::Entry;
use crate::router::Page;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::stdout;

/// Run the interactive reader until the user quits
pub fn run(entries: Vec<Entry>, config: AppConfig, page: Page, query: Option<&str>) -> Result<()> {
    let mut app = app::App::new(entries, config, page);
    if let Some(query) = query {
        app.preset_query(query);
    }

    let mut terminal = ratatui::try_init().map_err(|e| EssayError::terminal("init", e))?;
    if let Err(e) = execute!(stdout(), EnableMouseCapture) {
        tracing::warn!(error = %e, "mouse capture unavailable");
    }

    let result = app.run(&mut terminal);

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
