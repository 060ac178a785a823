use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::common::centered_rect;
use crate::theme::Palette;
use crate::tui::app::App;

fn section(title: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(keys: &'static str, desc: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(keys, Style::default().fg(palette.accent)),
        Span::styled(desc, Style::default().fg(palette.text)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let popup_area = centered_rect(80, 90, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Help - Keyboard Shortcuts")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    let help_text = vec![
        Line::from(""),
        section("NAVIGATION", palette),
        entry("  Up/Down, j/k    ", "Navigate list", palette),
        entry("  Home, g          ", "Jump to top", palette),
        entry("  End, G           ", "Jump to bottom", palette),
        entry("  PageUp/PageDown  ", "Scroll 10 items", palette),
        Line::from(""),
        section("ACTIONS", palette),
        entry("  a                ", "Shorten a new URL", palette),
        entry("  d                ", "Delete selected link", palette),
        entry("  Enter, s         ", "View click stats", palette),
        entry("  r                ", "Reload from server", palette),
        Line::from(""),
        section("FILTER", palette),
        entry("  /                ", "Filter by code or URL", palette),
        entry("  Enter            ", "Keep filter, back to list", palette),
        entry("  Esc              ", "Clear filter", palette),
        Line::from(""),
        section("CLIPBOARD", palette),
        entry("  y                ", "Copy short URL", palette),
        Line::from(""),
        section("DISPLAY", palette),
        entry("  t                ", "Toggle dark/light theme", palette),
        Line::from(""),
        section("FORM EDITING", palette),
        entry("  Tab              ", "Switch field", palette),
        entry("  Enter            ", "Submit", palette),
        entry("  Esc              ", "Cancel", palette),
        Line::from(""),
        section("STATUS INDICATORS", palette),
        entry("  ACTIVE           ", "Link is live", palette),
        entry("  EXPIRED          ", "Link has expired", palette),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press [q] or [Esc] to close",
            Style::default().fg(palette.muted),
        )]),
    ];

    let help_para = Paragraph::new(help_text).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
