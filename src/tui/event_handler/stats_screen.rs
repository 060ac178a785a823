//! Event handler for the stats screen

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen};

pub async fn handle_stats_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.stats = None;
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reload_stats().await;
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(stats) = &app.stats {
                let short_url = format!(
                    "{}/{}",
                    app.short_base.trim_end_matches('/'),
                    stats.data.code
                );
                if app.clipboard.copy(&short_url) {
                    app.set_status(format!("Copied: {}", short_url));
                }
            }
        }
        _ => {}
    }
    Ok(false)
}
