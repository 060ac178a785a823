//! Event handlers for link-related screens
//!
//! Handles: Main, Shorten, DeleteConfirm, inline filter

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen, EditingField, SubmitState};

/// Handle main screen input
pub async fn handle_main_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Esc => {
            if !app.filter_input.is_empty() {
                app.clear_filter();
            }
        }
        KeyCode::Char('/') => {
            app.inline_filter_mode = true;
        }
        KeyCode::Char('?') | KeyCode::Char('h') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.form.clear();
            app.form.currently_editing = Some(EditingField::OriginalUrl);
            app.current_screen = CurrentScreen::Shorten;
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            // Deletion always goes through explicit confirmation
            if app.get_selected_link().is_some() {
                app.current_screen = CurrentScreen::DeleteConfirm;
            }
        }
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.open_stats_for_selected().await;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh_links().await;
            if matches!(app.load_state, crate::tui::app::LoadState::Loaded) {
                app.set_status(format!("Reloaded {} links", app.items.len()));
            }
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.copy_selected_short_url();
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle shorten form input
pub async fn handle_shorten_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    // After a success or failure the form shows the outcome; any key other
    // than Esc starts the next round by returning the machine to Idle.
    if matches!(
        app.form.submit_state,
        SubmitState::Success(_) | SubmitState::Failed(_)
    ) {
        match key_code {
            KeyCode::Esc => {
                app.form.clear();
                app.current_screen = CurrentScreen::Main;
            }
            _ => {
                app.form.submit_state = SubmitState::Idle;
            }
        }
        return Ok(false);
    }

    match key_code {
        KeyCode::Enter => {
            app.submit_shorten().await;
        }
        KeyCode::Tab => app.form.toggle_field(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Esc => {
            app.form.clear();
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle delete confirmation input
pub async fn handle_delete_confirm_screen(
    app: &mut App,
    key_code: KeyCode,
) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.delete_selected_link().await;
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle inline filter input
pub fn handle_inline_filter(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc => {
            app.clear_filter();
        }
        KeyCode::Enter => {
            // Keep the filter applied, return focus to the list
            app.inline_filter_mode = false;
        }
        KeyCode::Backspace => {
            app.filter_input.pop();
            app.clamp_selection();
        }
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => {
            app.filter_input.push(c);
            app.clamp_selection();
        }
        _ => {}
    }
    Ok(false)
}
