//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod clipboard;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod input;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Color, ContrastMode, Palette};
use crate::services::{ConverterState, Field};
use crate::shortcuts::{ShortcutContext, ShortcutRegistry};

pub use clipboard::CopyFeedback;
pub use component::Component;
pub use help_overlay::HelpOverlay;
pub use input::TextInput;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A color text field
    Field(Field),
    /// The palette strip
    Palette,
}

impl Focus {
    /// Tab order.
    pub const ORDER: [Self; 4] = [
        Self::Field(Field::Hex),
        Self::Field(Field::Rgb),
        Self::Field(Field::Hsl),
        Self::Palette,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next focus target, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous focus target, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Shortcut table to consult.
    #[must_use]
    pub const fn context(self) -> ShortcutContext {
        match self {
            Self::Field(_) => ShortcutContext::Field,
            Self::Palette => ShortcutContext::Palette,
        }
    }
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Converter fields, color and contrast
    pub converter: ConverterState,
    /// Saved colors
    pub palette: Palette,
    /// Editable text for each field (hex, rgb, hsl)
    pub inputs: [TextInput; 3],

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Widget with keyboard focus
    pub focus: Focus,
    /// Selected palette chip
    pub selected_chip: usize,
    /// Help overlay, when open
    pub help: Option<HelpOverlay>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Transient clipboard confirmation
    pub copy_feedback: CopyFeedback,

    // System resources
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the UI state, optionally preloaded with `color`.
    ///
    /// `mode` overrides the configured default contrast mode.
    #[must_use]
    pub fn new(config: Config, color: Option<Color>, mode: Option<ContrastMode>) -> Self {
        let mode = mode.unwrap_or(config.contrast.default_mode);
        let converter = color.map_or_else(
            || ConverterState::new(mode),
            |color| ConverterState::with_color(color, mode),
        );
        let shortcuts = ShortcutRegistry::new();
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlay::new(&shortcuts));

        let mut state = Self {
            palette: Palette::new(config.palette.max_chips),
            inputs: Default::default(),
            theme: Theme::from_mode(config.ui.theme_mode),
            focus: Focus::Field(Field::Hex),
            selected_chip: 0,
            help,
            status_message: String::new(),
            error_message: None,
            copy_feedback: CopyFeedback::new(),
            converter,
            shortcuts,
            config,
            should_quit: false,
        };
        state.sync_inputs();
        state
    }

    const fn input_index(field: Field) -> usize {
        match field {
            Field::Hex => 0,
            Field::Rgb => 1,
            Field::Hsl => 2,
        }
    }

    /// Text input backing `field`.
    #[must_use]
    pub const fn input(&self, field: Field) -> &TextInput {
        &self.inputs[Self::input_index(field)]
    }

    /// Applies an editing key to `field` and reconverts on change.
    ///
    /// Unparseable text stays in the field; the other fields keep their
    /// previous values.
    pub fn edit_field(&mut self, field: Field, key: event::KeyEvent) {
        let input = &mut self.inputs[Self::input_index(field)];
        if input.handle_key(key) {
            let text = input.value().to_string();
            if self.converter.edit(field, text).is_ok() {
                self.sync_inputs();
            }
        }
    }

    /// Copies converter text into any input that differs from it. Rewritten
    /// inputs get their cursor at the end.
    pub fn sync_inputs(&mut self) {
        for field in Field::ALL {
            let text = self.converter.field(field);
            let input = &mut self.inputs[Self::input_index(field)];
            if input.value() != text {
                *input = TextInput::new(text);
            }
        }
    }

    /// Moves focus, keeping the chip selection in range.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.selected_chip = self
            .selected_chip
            .min(self.palette.len().saturating_sub(1));
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the converter UI until the user quits.
pub fn launch(config: Config, color: Option<Color>, mode: Option<ContrastMode>) -> Result<()> {
    let mut state = AppState::new(config, color, mode);
    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.copy_feedback.expire(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Ctrl-C always quits, even with the help overlay open
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }
    handlers::handle_main_input(state, key)
}

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.clamped();
    TermColor::Rgb(r, g, b)
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(12),   // Fields and preview
            Constraint::Length(3), // Palette strip
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let body = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_fields(f, body[0], state);
    render_preview(f, body[1], state);

    render_palette(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, theme);

    if let Some(help) = &state.help {
        help.render(f, f.area(), theme);
    }
}

/// Render title bar with the active mode
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {APP_NAME} - {} mode", state.converter.mode());

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

fn render_fields(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (field, row) in Field::ALL.into_iter().zip(rows.iter()) {
        let focused = state.focus == Focus::Field(field);
        let input = state.input(field);
        let border = if focused { theme.accent } else { theme.inactive };

        let widget = Paragraph::new(input.value().to_string())
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .title(format!(" {} ", field.label()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(widget, *row);

        if focused && state.help.is_none() {
            let x = row.x + 1 + input.cursor() as u16;
            f.set_cursor_position((x.min(row.right().saturating_sub(2)), row.y + 1));
        }
    }
}

fn render_preview(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mode = state.converter.mode();
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    // Background mode paints the color behind reference text; text mode the reverse
    let (bg, fg) = match state.converter.color() {
        Some(color) => {
            let reference = term_color(mode.reference());
            match mode {
                ContrastMode::Background => (term_color(color), reference),
                ContrastMode::Text => (reference, term_color(color)),
            }
        }
        None => (theme.background, theme.text_muted),
    };

    let sample = match state.converter.swatch_hex() {
        Some(hex) => vec![
            Line::from(""),
            Line::from(Span::styled(
                " Sample text ",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(" {hex}")),
        ],
        None => vec![Line::from(""), Line::from(" Enter a color")],
    };
    let swatch = Paragraph::new(sample)
        .style(Style::default().fg(fg).bg(bg))
        .block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.inactive)),
        );
    f.render_widget(swatch, chunks[0]);

    let mut lines = Vec::with_capacity(2);
    if let Some(report) = state.converter.report() {
        lines.push(Line::from(vec![
            Span::styled("Ratio ", Style::default().fg(theme.text_muted)),
            Span::styled(
                report.ratio_text(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" vs {}", report.reference.to_hex()),
                Style::default().fg(theme.text_muted),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Level ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!(" {} ", report.level),
                Style::default()
                    .fg(TermColor::Black)
                    .bg(theme.level_color(report.level))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "No contrast yet",
            Style::default().fg(theme.text_muted),
        )));
    }

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.inactive))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(info, chunks[1]);
}

fn render_palette(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Palette;

    let line = if state.palette.is_empty() {
        Line::from(Span::styled(
            "Ctrl-A saves the current color",
            Style::default().fg(theme.text_muted),
        ))
    } else {
        let spans: Vec<Span> = state
            .palette
            .iter()
            .enumerate()
            .flat_map(|(i, color)| {
                let marker = if focused && i == state.selected_chip {
                    Span::styled("[", Style::default().fg(theme.accent))
                } else {
                    Span::raw(" ")
                };
                let close = if focused && i == state.selected_chip {
                    Span::styled("]", Style::default().fg(theme.accent))
                } else {
                    Span::raw(" ")
                };
                [
                    marker,
                    Span::styled("██", Style::default().fg(term_color(*color))),
                    close,
                ]
            })
            .collect();
        Line::from(spans)
    };

    let border = if focused { theme.accent } else { theme.inactive };
    let widget = Paragraph::new(line).block(
        Block::default()
            .title(format!(
                " Palette ({}/{}) ",
                state.palette.len(),
                state.palette.capacity()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(widget, area);
}
