//! Help overlay widget listing the keyboard shortcuts.
//!
//! Content is generated from the shortcut registry, grouped by focus
//! context, and rendered as a scrollable centered modal.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::{Component, Theme};
use crate::shortcuts::{ShortcutContext, ShortcutRegistry};

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// User dismissed the overlay
    Closed,
}

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Pre-rendered (keys, description) rows per section
    sections: Vec<(&'static str, Vec<(String, &'static str)>)>,
}

impl HelpOverlay {
    /// Creates a help overlay from the registry's bindings.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        let field = registry.help_entries(ShortcutContext::Field);
        let palette: Vec<_> = registry
            .help_entries(ShortcutContext::Palette)
            .into_iter()
            .filter(|entry| !field.contains(entry))
            .collect();

        Self {
            scroll_offset: 0,
            sections: vec![
                (
                    "Editing",
                    vec![
                        ("Type".to_string(), "Edit focused field"),
                        ("Left / Right".to_string(), "Move cursor"),
                        ("Home / End".to_string(), "Jump to start / end"),
                        ("Backspace / Delete".to_string(), "Delete character"),
                    ],
                ),
                ("Anywhere", field),
                ("Palette focus", palette),
            ],
        }
    }

    fn total_lines(&self) -> usize {
        self.sections
            .iter()
            .map(|(_, rows)| rows.len() + 2)
            .sum()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines() {
            self.scroll_offset += 1;
        }
    }

    fn content(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.total_lines());
        for (title, rows) in &self.sections {
            lines.push(Line::from(Span::styled(
                (*title).to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, desc) in rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<22}"), Style::default().fg(theme.accent)),
                    Span::styled((*desc).to_string(), Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?' | 'q') => {
                return Some(HelpOverlayEvent::Closed);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Centered modal, 60% width, 80% height
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        frame.render_widget(Clear, modal_area);

        let paragraph = Paragraph::new(self.content(theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines().saturating_sub(visible_height))
                .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}
