use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::theme::Palette;
use crate::tui::app::{App, StatsView};
use crate::tui::constants::{CHART_BAR_WIDTH, USER_AGENT_TRUNCATE};

pub fn draw_stats_screen(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let Some(stats) = &app.stats else {
        let empty = Paragraph::new("No stats loaded")
            .style(Style::default().fg(palette.muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Summary cards
            Constraint::Percentage(45), // Daily chart
            Constraint::Min(6),         // Recent clicks
        ])
        .split(area);

    draw_summary_cards(frame, palette, stats, chunks[0]);
    draw_daily_chart(frame, palette, stats, chunks[1]);
    draw_recent_clicks(frame, palette, stats, chunks[2]);
}

fn summary_card(title: &str, value: String, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            value,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(title.to_string())
            .title_style(Style::default().fg(palette.muted)),
    )
    .alignment(ratatui::layout::Alignment::Center)
}

fn draw_summary_cards(frame: &mut Frame, palette: &Palette, stats: &StatsView, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let expires = match stats.data.expires_at {
        Some(at) => at.format("%Y-%m-%d").to_string(),
        None => "never".to_string(),
    };

    frame.render_widget(
        summary_card(
            "Total Clicks",
            format!("{}", stats.data.total_clicks),
            palette,
        ),
        cards[0],
    );
    frame.render_widget(
        summary_card(
            "Created",
            stats.data.created_at.format("%Y-%m-%d").to_string(),
            palette,
        ),
        cards[1],
    );
    frame.render_widget(summary_card("Expires", expires, palette), cards[2]);
    frame.render_widget(
        summary_card(
            "Recent Window",
            format!("{} clicks", stats.data.last_clicks.len()),
            palette,
        ),
        cards[3],
    );
}

fn draw_daily_chart(frame: &mut Frame, palette: &Palette, stats: &StatsView, area: Rect) {
    // The series only covers the recent window; say so in the title
    let title = format!(
        "Daily Clicks (last {} recorded, peak {})",
        stats.data.last_clicks.len(),
        crate::analytics::peak_count(&stats.series)
    );

    if stats.series.is_empty() {
        let empty = Paragraph::new("No recent clicks")
            .style(Style::default().fg(palette.muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.border))
                    .title(title)
                    .title_style(Style::default().fg(palette.accent)),
            )
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    // Label bars with MM-DD; the full ISO date does not fit under a bar
    let data: Vec<(&str, u64)> = stats
        .series
        .iter()
        .map(|d| (d.day.get(5..).unwrap_or(d.day.as_str()), d.count))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border))
                .title(title)
                .title_style(Style::default().fg(palette.accent)),
        )
        .data(data.as_slice())
        .bar_width(CHART_BAR_WIDTH)
        .bar_gap(1)
        .bar_style(Style::default().fg(palette.accent))
        .value_style(
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(palette.muted));

    frame.render_widget(chart, area);
}

fn draw_recent_clicks(frame: &mut Frame, palette: &Palette, stats: &StatsView, area: Rect) {
    let header = Row::new(vec![
        Span::styled(
            "Time",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "IP",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "User Agent",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let mut rows = Vec::with_capacity(stats.data.last_clicks.len());
    for click in &stats.data.last_clicks {
        let user_agent = match &click.user_agent {
            Some(ua) if ua.chars().count() > USER_AGENT_TRUNCATE => {
                let truncated: String = ua.chars().take(USER_AGENT_TRUNCATE).collect();
                format!("{}...", truncated)
            }
            Some(ua) => ua.clone(),
            None => "-".to_string(),
        };

        rows.push(Row::new(vec![
            Span::styled(
                click.clicked_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                click.ip_address.clone().unwrap_or_else(|| "-".to_string()),
                Style::default().fg(palette.muted),
            ),
            Span::styled(user_agent, Style::default().fg(palette.muted)),
        ]));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(17),
            Constraint::Length(16),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(format!("Recent Clicks | {}", stats.data.code))
            .title_style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .column_spacing(1);

    frame.render_widget(table, area);
}
