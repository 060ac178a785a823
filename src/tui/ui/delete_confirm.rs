use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::common::centered_rect;
use crate::tui::app::App;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    if let Some(link) = app.get_selected_link() {
        let popup_area = centered_rect(65, 45, area);

        // Shadow effect
        let shadow = Block::default().style(Style::default().bg(Color::Black));
        frame.render_widget(shadow, popup_area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Delete")
            .title_style(
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(palette.error));
        frame.render_widget(block, popup_area);

        let inner_area = popup_area.inner(Margin::new(2, 2));

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Delete this short link?",
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Code: ", Style::default().fg(palette.muted)),
                Span::styled(
                    link.code.clone(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("URL: ", Style::default().fg(palette.muted)),
                Span::styled(link.original_url.clone(), Style::default().fg(palette.link)),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "This action cannot be undone!",
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            )]),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, inner_area);
    }
}
