use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::app::{App, CurrentScreen, LoadState};

/// Draw title bar with version and collection size
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let title_text = vec![Line::from(vec![
        Span::styled(
            "Linkdeck",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(palette.muted),
        ),
        Span::styled("| ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("Links: {} ", app.items.len()),
            Style::default().fg(palette.warning),
        ),
        Span::styled("| ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("Theme: {} ", app.theme.label()),
            Style::default().fg(palette.muted),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.accent)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.error)
                .add_modifier(Modifier::BOLD),
        )
    } else if matches!(app.load_state, LoadState::Loading) {
        (
            "Loading links...".to_string(),
            Style::default().fg(palette.warning),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(palette.accent))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts for the current screen
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let shortcuts = match app.current_screen {
        CurrentScreen::Main => vec![
            ("Up/Down", "Navigate", palette.accent),
            ("/", "Filter", palette.accent),
            ("a", "Shorten", palette.success),
            ("Enter/s", "Stats", palette.accent),
            ("d", "Delete", palette.error),
            ("y", "Copy", palette.success),
            ("r", "Reload", palette.warning),
            ("t", "Theme", palette.warning),
            ("?", "Help", palette.link),
            ("q", "Quit", palette.muted),
        ],
        CurrentScreen::Shorten => vec![
            ("Tab", "Switch Field", palette.accent),
            ("Enter", "Submit", palette.success),
            ("Esc", "Cancel", palette.error),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", palette.success), ("n", "No", palette.error)]
        }
        CurrentScreen::Stats => vec![
            ("r", "Reload", palette.warning),
            ("y", "Copy", palette.success),
            ("q/Esc", "Back", palette.error),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", palette.error)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(palette.text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}

/// Rectangle centered in `r`, sized as percentages of it
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
