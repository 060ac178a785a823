use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::tui::app::{App, LoadState};

pub fn draw_main_screen(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let visible = app.visible_items();
    let filtering = !app.filter_input.trim().is_empty();

    if visible.is_empty() {
        let empty_text = if filtering {
            vec![
                Line::from(""),
                Line::from(""),
                Line::from(vec![Span::styled(
                    "No links match your filter",
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Filter: ", Style::default().fg(palette.muted)),
                    Span::styled(
                        app.filter_input.clone(),
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(palette.muted)),
                    Span::styled(
                        "[Esc]",
                        Style::default()
                            .fg(palette.warning)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" to clear the filter", Style::default().fg(palette.muted)),
                ]),
            ]
        } else if matches!(app.load_state, LoadState::Loading) {
            vec![
                Line::from(""),
                Line::from(""),
                Line::from(vec![Span::styled(
                    "Loading links...",
                    Style::default().fg(palette.warning),
                )]),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(""),
                Line::from(vec![Span::styled(
                    "No short links yet",
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(palette.muted)),
                    Span::styled(
                        "[a]",
                        Style::default()
                            .fg(palette.success)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        " to shorten your first URL",
                        Style::default().fg(palette.muted),
                    ),
                ]),
            ]
        };

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.border))
                    .title("Short Links")
                    .title_style(Style::default().fg(palette.accent)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled(
            "Code",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "URL",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Created",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Expires",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Clicks",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Status",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let mut rows = Vec::with_capacity(visible.len());
    for link in &visible {
        let display_url = if link.original_url.chars().count() > app.url_truncate {
            let truncated: String = link.original_url.chars().take(app.url_truncate).collect();
            format!("{}...", truncated)
        } else {
            link.original_url.clone()
        };

        let expires = match link.expires_at {
            Some(at) => at.format("%Y-%m-%d").to_string(),
            None => "never".to_string(),
        };

        let (status_text, status_color) = if link.is_expired() {
            ("EXPIRED", palette.error)
        } else {
            ("ACTIVE", palette.success)
        };

        rows.push(Row::new(vec![
            Span::styled(
                link.code.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_url, Style::default().fg(palette.link)),
            Span::styled(
                link.created_at.format("%Y-%m-%d").to_string(),
                Style::default().fg(palette.text),
            ),
            Span::styled(expires, Style::default().fg(palette.text)),
            Span::styled(
                format!("{}", link.total_clicks),
                Style::default().fg(palette.success),
            ),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]));
    }

    // The filtered view is a subset; the title keeps the full count visible
    let title = if filtering {
        format!(
            "Short Links | Filter: \"{}\" (showing {} of {})",
            app.filter_input.trim(),
            visible.len(),
            app.items.len()
        )
    } else {
        format!("Short Links ({})", app.items.len())
    };

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(18), // Code
            ratatui::layout::Constraint::Min(20),    // URL
            ratatui::layout::Constraint::Length(10), // Created
            ratatui::layout::Constraint::Length(10), // Expires
            ratatui::layout::Constraint::Length(8),  // Clicks
            ratatui::layout::Constraint::Length(8),  // Status
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(
        Style::default()
            .bg(palette.highlight_bg)
            .fg(palette.highlight_fg),
    )
    .highlight_symbol("> ")
    .column_spacing(1);

    let mut state = TableState::default();
    if app.selected_index < visible.len() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
