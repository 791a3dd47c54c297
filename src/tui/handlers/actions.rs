//! Action dispatch for the converter TUI.

use anyhow::Result;
use std::time::Instant;

use crate::shortcuts::Action;
use crate::tui::clipboard;
use crate::tui::help_overlay::HelpOverlay;
use crate::tui::{AppState, Focus};

/// Execute an action. Returns `true` when the app should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::FocusNext => state.set_focus(state.focus.next()),
        Action::FocusPrevious => state.set_focus(state.focus.previous()),

        Action::SwapMode => {
            state.converter.swap_mode();
            state.set_status(format!("Mode: {}", state.converter.mode()));
        }
        Action::RandomColor => {
            let color = state.converter.randomize(&mut rand::thread_rng());
            state.sync_inputs();
            state.set_status(format!("Random color {}", color.to_hex()));
        }
        Action::CopyField => match state.focus {
            Focus::Field(field) => {
                let text = state.converter.field(field).to_string();
                if text.is_empty() {
                    state.set_error(format!("{} field is empty", field.label()));
                } else {
                    copy_to_clipboard(state, &text);
                }
            }
            Focus::Palette => copy_selected_chip(state),
        },

        Action::AddToPalette => match state.converter.color() {
            Some(color) => match state.palette.add(color) {
                Ok(index) => {
                    state.selected_chip = index;
                    state.set_status(format!("Added {} to palette", color.to_hex()));
                }
                Err(e) => state.set_error(e.to_string()),
            },
            None => state.set_error("No valid color to add"),
        },
        Action::ClearPalette => {
            state.palette.clear();
            state.selected_chip = 0;
            state.set_status("Palette cleared");
        }
        Action::SelectPreviousChip => {
            state.selected_chip = state.selected_chip.saturating_sub(1);
        }
        Action::SelectNextChip => {
            if state.selected_chip + 1 < state.palette.len() {
                state.selected_chip += 1;
            }
        }
        Action::CopyChip => copy_selected_chip(state),
        Action::RemoveChip => {
            if let Some(color) = state.palette.remove(state.selected_chip) {
                state.selected_chip = state
                    .selected_chip
                    .min(state.palette.len().saturating_sub(1));
                state.set_status(format!("Removed {}", color.to_hex()));
            }
        }

        Action::ToggleHelp => {
            state.help = match state.help {
                Some(_) => None,
                None => Some(HelpOverlay::new(&state.shortcuts)),
            };
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}

fn copy_selected_chip(state: &mut AppState) {
    match state.palette.get(state.selected_chip) {
        Some(color) => copy_to_clipboard(state, &color.to_hex()),
        None => state.set_error("Palette is empty"),
    }
}

fn copy_to_clipboard(state: &mut AppState, text: &str) {
    match clipboard::copy_text(text) {
        Ok(()) => state.copy_feedback.show(text, Instant::now()),
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
}
