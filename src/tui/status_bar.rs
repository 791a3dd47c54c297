//! Status bar widget for errors, copy feedback and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use super::{AppState, Focus, Theme};

/// What the status line shows, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine<'a> {
    /// Last action failed
    Error(&'a str),
    /// Clipboard copy happened recently
    Copied(&'a str),
    /// Informational message from the last action
    Info(&'a str),
    /// Nothing to report; show key hints
    Hints,
}

impl<'a> StatusLine<'a> {
    /// Picks the line to show for `state` at `now`.
    #[must_use]
    pub fn for_state(state: &'a AppState, now: Instant) -> Self {
        if let Some(error) = &state.error_message {
            Self::Error(error)
        } else if let Some(copied) = state.copy_feedback.message(now) {
            Self::Copied(copied)
        } else if !state.status_message.is_empty() {
            Self::Info(&state.status_message)
        } else {
            Self::Hints
        }
    }
}

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let line = match StatusLine::for_state(state, Instant::now()) {
            StatusLine::Error(error) => Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error, Style::default().fg(theme.text)),
            ]),
            StatusLine::Copied(message) => {
                Line::from(Span::styled(message, Style::default().fg(theme.success)))
            }
            StatusLine::Info(message) => {
                Line::from(Span::styled(message, Style::default().fg(theme.text)))
            }
            StatusLine::Hints => Self::hints_line(state, theme),
        };

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.inactive))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, area);
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.focus {
            Focus::Field(_) => &[
                ("Tab", "next"),
                ("Ctrl-T", "mode"),
                ("Ctrl-R", "random"),
                ("Ctrl-Y", "copy"),
                ("Ctrl-A", "save chip"),
                ("F1", "help"),
                ("Esc", "quit"),
            ],
            Focus::Palette => &[
                ("Left/Right", "select"),
                ("Enter", "copy"),
                ("Del", "remove"),
                ("Ctrl-L", "clear"),
                ("?", "help"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, label) in hints {
            spans.push(Span::styled(
                format!("{key} "),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::styled(
                format!("{label}  "),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
