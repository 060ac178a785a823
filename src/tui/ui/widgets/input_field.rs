//! Text input widget for forms
//!
//! Builder-pattern input box with active-field highlight, validation
//! error line, character count and placeholder hint.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::Palette;

/// A single-line text input.
///
/// ```rust,ignore
/// InputField::new("Original URL", &app.form.original_url, app.palette())
///     .active(true)
///     .required()
///     .placeholder("https://...")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    palette: &'a Palette,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    show_char_count: bool,
    required: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            value,
            palette,
            is_active: false,
            error: None,
            placeholder: None,
            show_char_count: true,
            required: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[allow(dead_code)]
    pub fn char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Height the field needs (input box plus optional error line).
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.required {
            title.push_str(" *");
        }

        if self.show_char_count && !self.value.is_empty() {
            title = format!("{} ({} chars)", title, self.value.chars().count());
        }

        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            title = format!("{} ({})", self.title, placeholder);
        }

        title
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(self.palette.highlight_fg)
                .bg(self.palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(self.palette.error));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}
