//! Centralized shortcut and action system.
//!
//! Maps key events to converter actions for the focused context. The help
//! overlay reads its key list from the same table so the two never drift.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Where keyboard focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// One of the three color text fields
    Field,
    /// The palette strip
    Palette,
}

/// All possible actions in the converter UI.
///
/// Variants are described by [`Action::description`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    // === NAVIGATION ===
    FocusNext,
    FocusPrevious,

    // === COLOR ===
    SwapMode,
    RandomColor,
    CopyField,

    // === PALETTE ===
    AddToPalette,
    ClearPalette,
    SelectPreviousChip,
    SelectNextChip,
    CopyChip,
    RemoveChip,

    // === GENERAL ===
    ToggleHelp,
    Quit,
}

impl Action {
    /// Short description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FocusNext => "Focus next field",
            Self::FocusPrevious => "Focus previous field",
            Self::SwapMode => "Swap background / text mode",
            Self::RandomColor => "Random color",
            Self::CopyField => "Copy focused field",
            Self::AddToPalette => "Add color to palette",
            Self::ClearPalette => "Clear palette",
            Self::SelectPreviousChip => "Select previous chip",
            Self::SelectNextChip => "Select next chip",
            Self::CopyChip => "Copy chip hex",
            Self::RemoveChip => "Remove chip",
            Self::ToggleHelp => "Toggle help",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key pressed
    pub code: KeyCode,
    /// Modifiers held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a `KeyEvent`.
    ///
    /// Shift is dropped for plain characters since the char already carries
    /// the case.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            KeyCode::BackTab => KeyModifiers::NONE,
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable form, e.g. `Ctrl-T`.
    #[must_use]
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) if self.modifiers.contains(KeyModifiers::CONTROL) => {
                c.to_ascii_uppercase().to_string()
            }
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift-Tab".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl-{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    bindings: HashMap<(ShortcutContext, KeyBinding), Action>,
    /// Registration order, for help output
    order: Vec<(ShortcutContext, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        for ctx in [ShortcutContext::Field, ShortcutContext::Palette] {
            registry.register_common_shortcuts(ctx);
        }
        registry.register_palette_shortcuts();
        registry
    }

    /// Shortcuts available regardless of focus.
    fn register_common_shortcuts(&mut self, ctx: ShortcutContext) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === NAVIGATION ===
        self.register(ctx, K::Tab, M::NONE, Action::FocusNext);
        self.register(ctx, K::Down, M::NONE, Action::FocusNext);
        self.register(ctx, K::BackTab, M::NONE, Action::FocusPrevious);
        self.register(ctx, K::Up, M::NONE, Action::FocusPrevious);

        // === COLOR ===
        self.register(ctx, K::Char('t'), M::CONTROL, Action::SwapMode);
        self.register(ctx, K::Char('r'), M::CONTROL, Action::RandomColor);
        self.register(ctx, K::Char('y'), M::CONTROL, Action::CopyField);

        // === PALETTE ===
        self.register(ctx, K::Char('a'), M::CONTROL, Action::AddToPalette);
        self.register(ctx, K::Char('l'), M::CONTROL, Action::ClearPalette);

        // === GENERAL ===
        self.register(ctx, K::F(1), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Chip selection keys. Text fields use these keys for editing instead.
    fn register_palette_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Palette;

        self.register(ctx, K::Left, M::NONE, Action::SelectPreviousChip);
        self.register(ctx, K::Right, M::NONE, Action::SelectNextChip);
        self.register(ctx, K::Enter, M::NONE, Action::CopyChip);
        self.register(ctx, K::Delete, M::NONE, Action::RemoveChip);
        self.register(ctx, K::Backspace, M::NONE, Action::RemoveChip);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
    }

    fn register(
        &mut self,
        context: ShortcutContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
        self.order.push((context, binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: ShortcutContext, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// Help rows for a context: every key bound to each action, joined.
    #[must_use]
    pub fn help_entries(&self, context: ShortcutContext) -> Vec<(String, &'static str)> {
        let mut rows: Vec<(Action, Vec<String>)> = Vec::new();
        for (ctx, binding, action) in &self.order {
            if *ctx != context {
                continue;
            }
            match rows.iter_mut().find(|(a, _)| a == action) {
                Some((_, keys)) => keys.push(binding.display()),
                None => rows.push((*action, vec![binding.display()])),
            }
        }
        rows.into_iter()
            .map(|(action, keys)| (keys.join(" / "), action.description()))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
