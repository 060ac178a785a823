// UI submodules
mod common;
mod delete_confirm;
mod exiting;
mod help;
mod inline_search;
mod main_screen;
mod shorten_form;
mod stats_screen;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use inline_search::draw_inline_filter_bar;
pub use main_screen::draw_main_screen;
pub use shorten_form::draw_shorten_screen;
pub use stats_screen::draw_stats_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Layout shifts when the inline filter bar is active
    let main_chunks = if app.inline_filter_mode {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Inline filter bar
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    };

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        CurrentScreen::Main => draw_main_screen(frame, app, main_chunks[1]),
        CurrentScreen::Shorten => {
            // The list stays visible behind the popup
            draw_main_screen(frame, app, main_chunks[1]);
            draw_shorten_screen(frame, app, main_chunks[1]);
        }
        CurrentScreen::DeleteConfirm => {
            draw_main_screen(frame, app, main_chunks[1]);
            draw_delete_confirm_screen(frame, app, main_chunks[1]);
        }
        CurrentScreen::Stats => draw_stats_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => {
            draw_main_screen(frame, app, main_chunks[1]);
            draw_help_screen(frame, app, main_chunks[1]);
        }
        CurrentScreen::Exiting => {
            draw_main_screen(frame, app, main_chunks[1]);
            draw_exiting_screen(frame, app, main_chunks[1]);
        }
    }

    if app.inline_filter_mode {
        draw_inline_filter_bar(frame, app, main_chunks[2]);
        draw_status_bar(frame, app, main_chunks[3]);
        draw_footer(frame, app, main_chunks[4]);
    } else {
        draw_status_bar(frame, app, main_chunks[2]);
        draw_footer(frame, app, main_chunks[3]);
    }
}
