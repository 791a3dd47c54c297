//! Main UI input handler.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::help_overlay::HelpOverlayEvent;
use crate::tui::{AppState, Component, Focus};

/// Handle input for the main UI. Returns `true` when the app should exit.
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    state.clear_error();

    // Help overlay swallows everything except its own keys
    if let Some(help) = state.help.as_mut() {
        if help.handle_input(key) == Some(HelpOverlayEvent::Closed) {
            state.help = None;
        }
        return Ok(false);
    }

    if let Some(action) = state.shortcuts.lookup(state.focus.context(), key) {
        return super::dispatch_action(state, action);
    }

    // Unmapped keys edit the focused text field
    if let Focus::Field(field) = state.focus {
        state.edit_field(field, key);
    }
    Ok(false)
}
