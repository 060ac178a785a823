//! Keyboard event dispatch
//!
//! Routes key events to the handler of the current screen. Handlers
//! return `true` when the application should exit.

mod link_screens;
mod stats_screen;

use ratatui::crossterm::event::KeyCode;

use super::app::{App, CurrentScreen};

pub async fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    // Inline filter captures input before normal screen handling
    if app.current_screen == CurrentScreen::Main && app.inline_filter_mode {
        return link_screens::handle_inline_filter(app, key_code);
    }

    match app.current_screen {
        CurrentScreen::Main => link_screens::handle_main_screen(app, key_code).await,
        CurrentScreen::Shorten => link_screens::handle_shorten_screen(app, key_code).await,
        CurrentScreen::DeleteConfirm => {
            link_screens::handle_delete_confirm_screen(app, key_code).await
        }
        CurrentScreen::Stats => stats_screen::handle_stats_screen(app, key_code).await,
        CurrentScreen::Help => {
            if matches!(key_code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                app.current_screen = CurrentScreen::Main;
            }
            Ok(false)
        }
        CurrentScreen::Exiting => match key_code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Ok(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.current_screen = CurrentScreen::Main;
                Ok(false)
            }
            _ => Ok(false),
        },
    }
}
