//! Terminal User Interface (TUI) module
//!
//! Interactive terminal dashboard over the shortening service: create,
//! filter, delete and inspect short links.

use std::io;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub mod app;
pub mod constants;
mod event_handler;
mod ui;

use app::App;
use ui::ui;

use crate::api::ShortenerApi;
use crate::clipboard::ClipboardSink;
use crate::config::Config;

/// Run the TUI application
pub async fn run_tui(
    api: Box<dyn ShortenerApi>,
    clipboard: Box<dyn ClipboardSink>,
    config: &Config,
) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app, load the collection, and run
    let mut app = App::new(api, clipboard, config);
    app.refresh_links().await;
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
async fn run_app<B: Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            let should_exit = event_handler::handle_key_event(app, key.code).await?;

            if should_exit {
                return Ok(());
            }
        }
    }
}
