//! Inline filter bar component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::app::App;

/// Draw the inline filter bar
pub fn draw_inline_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let filter_text = vec![Line::from(vec![
        Span::styled(
            "/",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(&app.filter_input, Style::default().fg(palette.text)),
        Span::styled(
            "_",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::RAPID_BLINK),
        ),
    ])];

    let matches = app.visible_count();
    let result_count = if app.filter_input.trim().is_empty() {
        String::new()
    } else if matches == 0 {
        " (no matches)".to_string()
    } else {
        format!(" ({} matches)", matches)
    };

    let block = Block::default()
        .title(format!("Filter{}", result_count))
        .title_style(Style::default().fg(palette.accent))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.warning));

    let paragraph = Paragraph::new(filter_text).block(block);

    frame.render_widget(paragraph, area);
}
