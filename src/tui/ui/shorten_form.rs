use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::common::centered_rect;
use super::widgets::InputField;
use crate::tui::app::{App, EditingField, SubmitState};
use crate::tui::constants::MAX_ALIAS_LENGTH;

pub fn draw_shorten_screen(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let popup_area = centered_rect(80, 70, area);

    // Shadow effect
    let shadow = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(shadow, popup_area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Shorten URL")
        .title_style(
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.success));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    match &app.form.submit_state {
        SubmitState::Success(resp) => draw_result_panel(frame, app, inner_area, resp),
        SubmitState::Failed(message) => draw_error_panel(frame, app, inner_area, message),
        _ => draw_form_fields(frame, app, inner_area),
    }
}

fn draw_form_fields(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let url_error = app.form.url_error();
    let url_field = InputField::new("Original URL", &app.form.original_url, palette)
        .active(matches!(
            app.form.currently_editing,
            Some(EditingField::OriginalUrl)
        ))
        .required()
        .placeholder("https://...")
        .error(url_error.as_deref());

    let alias_title = format!("Custom Alias (max {})", MAX_ALIAS_LENGTH);
    let alias_field = InputField::new(&alias_title, &app.form.custom_alias, palette)
        .active(matches!(
            app.form.currently_editing,
            Some(EditingField::CustomAlias)
        ))
        .placeholder("empty = assigned by server");

    let expires_field = InputField::new("Expires At", &app.form.expires_at, palette)
        .active(matches!(
            app.form.currently_editing,
            Some(EditingField::ExpiresAt)
        ))
        .placeholder("YYYY-MM-DD, empty = server default");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(url_field.height()),
            Constraint::Length(alias_field.height()),
            Constraint::Length(1), // Alias preview
            Constraint::Length(expires_field.height()),
            Constraint::Length(1), // Submit indicator
        ])
        .split(area);

    url_field.render(frame, chunks[0]);
    alias_field.render(frame, chunks[1]);

    if let Some(preview) = app.form.alias_preview(&app.short_base) {
        let preview_line = Line::from(vec![
            Span::styled("Preview: ", Style::default().fg(palette.muted)),
            Span::styled(preview, Style::default().fg(palette.link)),
        ]);
        frame.render_widget(Paragraph::new(preview_line), chunks[2]);
    }

    expires_field.render(frame, chunks[3]);

    if matches!(
        app.form.submit_state,
        SubmitState::Validating | SubmitState::Submitting
    ) {
        let submitting = Paragraph::new(Line::from(vec![Span::styled(
            "Submitting...",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )]));
        frame.render_widget(submitting, chunks[4]);
    }
}

fn draw_result_panel(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    resp: &crate::api::ShortenResponse,
) {
    let palette = app.palette();

    let expiry_line = match resp.expires_at {
        Some(at) => Line::from(vec![
            Span::styled("Expires: ", Style::default().fg(palette.muted)),
            Span::styled(
                at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(palette.text),
            ),
        ]),
        None => Line::from(vec![
            Span::styled("Expires: ", Style::default().fg(palette.muted)),
            Span::styled("never", Style::default().fg(palette.text)),
        ]),
    };

    let clipboard_line = if app.form.copied {
        Line::from(vec![Span::styled(
            "Copied to clipboard",
            Style::default().fg(palette.success),
        )])
    } else {
        Line::from(vec![Span::styled(
            "Clipboard unavailable, copy manually",
            Style::default().fg(palette.warning),
        )])
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Short link created",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Code: ", Style::default().fg(palette.muted)),
            Span::styled(
                resp.code.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(palette.muted)),
            Span::styled(resp.short_url.clone(), Style::default().fg(palette.link)),
        ]),
        expiry_line,
        Line::from(""),
        clipboard_line,
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to shorten another, [Esc] to close",
            Style::default().fg(palette.muted),
        )]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_error_panel(frame: &mut Frame, app: &App, area: Rect, message: &str) {
    let palette = app.palette();

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Could not create short link",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            message.to_string(),
            Style::default().fg(palette.text),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to edit, [Esc] to close",
            Style::default().fg(palette.muted),
        )]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
