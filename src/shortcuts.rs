//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context used while moving between form fields.
pub const MAIN_CONTEXT: &str = "main";

/// Context used while a field is being edited.
pub const EDIT_CONTEXT: &str = "edit";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Focus the next form field
    FocusNext,
    /// Focus the previous form field
    FocusPrevious,
    /// Focus the first form field
    FocusFirst,
    /// Focus the last form field
    FocusLast,

    // === EDITING ===
    /// Start editing the focused field
    StartEdit,
    /// Leave edit mode
    FinishEdit,

    // === PREVIEW ===
    /// One more placeholder box
    MoreItems,
    /// One fewer placeholder box
    FewerItems,

    // === BREAKPOINTS ===
    /// Append a breakpoint after the widest one
    AddBreakpoint,
    /// Remove the focused breakpoint row
    RemoveBreakpoint,

    // === CLIPBOARD ===
    /// Copy the sizing expression
    CopyExpression,
    /// Copy the whole rule
    CopyRule,

    // === HELP ===
    /// Open or close the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Quit the application
    Quit,
}

impl Action {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::FocusFirst => "focus_first",
            Self::FocusLast => "focus_last",
            Self::StartEdit => "start_edit",
            Self::FinishEdit => "finish_edit",
            Self::MoreItems => "more_items",
            Self::FewerItems => "fewer_items",
            Self::AddBreakpoint => "add_breakpoint",
            Self::RemoveBreakpoint => "remove_breakpoint",
            Self::CopyExpression => "copy_expression",
            Self::CopyRule => "copy_rule",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
        }
    }

    /// Short label for hints and help.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FocusNext => "Next field",
            Self::FocusPrevious => "Previous field",
            Self::FocusFirst => "First field",
            Self::FocusLast => "Last field",
            Self::StartEdit => "Edit field",
            Self::FinishEdit => "Done editing",
            Self::MoreItems => "More items",
            Self::FewerItems => "Less items",
            Self::AddBreakpoint => "Add more breakpoints",
            Self::RemoveBreakpoint => "Remove query",
            Self::CopyExpression => "Copy clamp function",
            Self::CopyRule => "Copy rule",
            Self::ToggleHelp => "Help",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifiers held with it
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
    /// Shift is dropped for character keys, since the character already
    /// carries the case and terminals disagree on reporting it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = if matches!(event.code, KeyCode::Char(_)) {
            event.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            event.modifiers
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_edit_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === NAVIGATION ===
        self.register(ctx, K::Down, M::NONE, Action::FocusNext);
        self.register(ctx, K::Tab, M::NONE, Action::FocusNext);
        self.register(ctx, K::Char('j'), M::NONE, Action::FocusNext);
        self.register(ctx, K::Up, M::NONE, Action::FocusPrevious);
        self.register(ctx, K::BackTab, M::SHIFT, Action::FocusPrevious);
        self.register(ctx, K::BackTab, M::NONE, Action::FocusPrevious);
        self.register(ctx, K::Char('k'), M::NONE, Action::FocusPrevious);
        self.register(ctx, K::Home, M::NONE, Action::FocusFirst);
        self.register(ctx, K::End, M::NONE, Action::FocusLast);

        // === EDITING ===
        self.register(ctx, K::Enter, M::NONE, Action::StartEdit);
        self.register(ctx, K::Char('e'), M::NONE, Action::StartEdit);

        // === PREVIEW ===
        self.register(ctx, K::Char('+'), M::NONE, Action::MoreItems);
        self.register(ctx, K::Char('='), M::NONE, Action::MoreItems);
        self.register(ctx, K::Char('-'), M::NONE, Action::FewerItems);

        // === BREAKPOINTS ===
        self.register(ctx, K::Char('a'), M::NONE, Action::AddBreakpoint);
        self.register(ctx, K::Char('d'), M::NONE, Action::RemoveBreakpoint);
        self.register(ctx, K::Delete, M::NONE, Action::RemoveBreakpoint);

        // === CLIPBOARD ===
        self.register(ctx, K::Char('c'), M::NONE, Action::CopyExpression);
        self.register(ctx, K::Char('C'), M::NONE, Action::CopyRule);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts that stay live while typing into a field.
    fn register_edit_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = EDIT_CONTEXT;

        self.register(ctx, K::Enter, M::NONE, Action::FinishEdit);
        self.register(ctx, K::Esc, M::NONE, Action::FinishEdit);
        self.register(ctx, K::Tab, M::NONE, Action::FocusNext);
        self.register(ctx, K::BackTab, M::SHIFT, Action::FocusPrevious);
        self.register(ctx, K::BackTab, M::NONE, Action::FocusPrevious);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Key names bound to `action` in `context`, sorted for display.
    #[must_use]
    pub fn keys_for(&self, context: &str, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|((ctx, _), bound)| ctx == context && **bound == action)
            .map(|((_, binding), _)| describe_binding(*binding))
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable name for a binding, e.g. `Ctrl+C` or `Tab`.
fn describe_binding(binding: KeyBinding) -> String {
    let key = match binding.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        other => format!("{other:?}"),
    };
    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{}", key.to_uppercase())
    } else {
        key
    }
}
