//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod code_view;
pub mod component;
pub mod form;
pub mod help_overlay;
pub mod preview;
pub mod status_bar;
pub mod theme;
pub mod toast;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::configurator::{Configurator, CopyTarget, RenderPass};
use crate::constants::APP_NAME;
use crate::models::NotificationPhase;
use crate::shortcuts::{Action, ShortcutRegistry, EDIT_CONTEXT, MAIN_CONTEXT};

// Re-export TUI components
pub use component::{Component, ContextualComponent};
pub use form::{FormEvent, FormField, SettingsForm};
pub use help_overlay::{HelpEvent, HelpOverlay};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Width of the settings panel in columns
const FORM_WIDTH: u16 = 40;

/// Longest wait for input between redraws
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Session settings and the copy toast
    pub configurator: Configurator,
    /// Output derived from the last successful state
    pub pass: Option<RenderPass>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Form focus and edit buffer
    pub form: SettingsForm,
    /// Help overlay, while open
    pub help: Option<HelpOverlay>,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,
    clipboard: Box<dyn ClipboardWriter>,
    rng: StdRng,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a new session from the configured defaults.
    #[must_use]
    pub fn new(config: Config, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self::with_rng(config, clipboard, StdRng::from_entropy())
    }

    /// Like [`Self::new`] with a caller-provided color source.
    #[must_use]
    pub fn with_rng(config: Config, clipboard: Box<dyn ClipboardWriter>, rng: StdRng) -> Self {
        let configurator = Configurator::new(
            config.defaults.layout(),
            config.notification.phase_duration(),
        );
        let shortcuts = ShortcutRegistry::new();
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlay::new(&shortcuts));

        let mut state = Self {
            configurator,
            pass: None,
            theme: Theme::from_mode(config.ui.theme_mode),
            form: SettingsForm::new(),
            help,
            shortcuts,
            status_message: String::new(),
            error_message: None,
            config,
            clipboard,
            rng,
            should_quit: false,
        };
        state.refresh();
        state
    }

    /// Re-derives everything drawn from the current settings.
    ///
    /// Colors are drawn again on every call. A formatting failure keeps the
    /// previous pass on screen and opens the error overlay.
    pub fn refresh(&mut self) {
        self.form.sync(self.configurator.layout());
        match self.configurator.render_pass(&mut self.rng) {
            Ok(pass) => self.pass = Some(pass),
            Err(e) => {
                tracing::warn!("Render failed: {e:#}");
                self.set_error(format!("{e:#}"));
            }
        }
    }

    /// Draws new placeholder colors for unchanged settings.
    ///
    /// Unlike [`Self::refresh`], a failure here leaves the error overlay
    /// closed; the settings that caused it have already been reported.
    fn repaint(&mut self) {
        match self.configurator.render_pass(&mut self.rng) {
            Ok(pass) => self.pass = Some(pass),
            Err(e) => tracing::debug!("Repaint skipped: {e:#}"),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Advances the copy toast. Returns `true` if its phase changed.
    ///
    /// Every phase change is a state update and repaints the preview.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.configurator.tick(now);
        if changed {
            self.repaint();
        }
        changed
    }

    /// Handles one key press at time `now`.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Error overlay blocks all other input until dismissed
        if self.error_message.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.clear_error();
            }
            return;
        }

        // Messages last until the next key
        self.status_message.clear();

        if let Some(help) = self.help.as_mut() {
            if help.handle_input(key) == Some(HelpEvent::Closed) {
                self.help = None;
            }
            return;
        }

        if self.form.is_editing() {
            if let Some(action) = self.shortcuts.lookup(EDIT_CONTEXT, key) {
                self.dispatch(action, now);
            } else if let Some(event) = self.form.handle_input(key, self.configurator.layout()) {
                self.apply_form_event(event);
            }
            return;
        }

        if let Some(action) = self.shortcuts.lookup(MAIN_CONTEXT, key) {
            self.dispatch(action, now);
        }
    }

    /// Performs a shortcut action.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        tracing::trace!(action = action.id(), "Dispatch");
        let layout = self.configurator.layout();
        match action {
            Action::FocusNext => self.form.focus_next(layout),
            Action::FocusPrevious => self.form.focus_previous(layout),
            Action::FocusFirst => self.form.focus_first(),
            Action::FocusLast => self.form.focus_last(layout),
            Action::StartEdit => self.form.start_edit(layout),
            Action::FinishEdit => self.form.finish_edit(),
            Action::MoreItems => {
                self.configurator.more_items();
                self.refresh();
            }
            Action::FewerItems => {
                self.configurator.fewer_items();
                self.refresh();
            }
            Action::AddBreakpoint => {
                if self.configurator.add_breakpoint() {
                    self.set_status("Breakpoint added");
                    self.refresh();
                } else {
                    self.set_status("Add more breakpoints is disabled: fix the 0 breakpoint or add one first");
                }
            }
            Action::RemoveBreakpoint => {
                if let Some(width) = self.form.focus().breakpoint() {
                    self.configurator.remove_breakpoint(width);
                    self.set_status(format!("Removed {width}px breakpoint"));
                    self.refresh();
                }
            }
            Action::CopyExpression => self.copy(CopyTarget::Expression, now),
            Action::CopyRule => self.copy(CopyTarget::Rule, now),
            Action::ToggleHelp => self.help = Some(HelpOverlay::new(&self.shortcuts)),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Applies a form edit to the session.
    pub fn apply_form_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::ClassNameChanged(class_name) => self.configurator.set_class_name(class_name),
            FormEvent::GapChanged(gap) => self.configurator.set_gap(gap),
            FormEvent::WidthChanged { old, new } => self.configurator.rename_breakpoint(old, new),
            FormEvent::ColumnsChanged { width, columns } => {
                self.configurator.set_columns(width, columns);
            }
        }
        self.refresh();
    }

    fn copy(&mut self, target: CopyTarget, now: Instant) {
        match self.configurator.copy(target, now, self.clipboard.as_mut()) {
            Ok(true) => {
                self.set_status(match target {
                    CopyTarget::Expression => "Copied clamp function",
                    CopyTarget::Rule => "Copied rule",
                });
                self.repaint();
            }
            Ok(false) => {}
            Err(e) => self.set_error(format!("{e:#}")),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configurator", &self.configurator)
            .field("form", &self.form)
            .field("error_message", &self.error_message)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
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

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Late ticks apply every overdue toast transition
        if state.tick(Instant::now()) {
            tracing::debug!(phase = %state.configurator.notification_phase(), "Toast phase");
        }

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Wake early when the toast is due to change
        let timeout = state
            .configurator
            .notification()
            .remaining(Instant::now())
            .map_or(POLL_INTERVAL, |remaining| remaining.min(POLL_INTERVAL));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key(key, Instant::now());
                }
            }
            // Resize and other events just trigger a redraw
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let screen = f.area();

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, screen);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(screen);

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    toast::render_toast(
        f,
        screen,
        &state.theme,
        state.configurator.notification_phase(),
    );

    if let Some(help) = &state.help {
        help.render(f, screen, &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the application name
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {APP_NAME}"),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  .{}", state.configurator.layout().display_class_name()),
            Style::default().fg(state.theme.text_muted),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title, area);
}

/// Render the form, the code pane, and the preview grid
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
        .split(area);

    state
        .form
        .render(f, columns[0], &state.theme, state.configurator.layout());

    let Some(pass) = &state.pass else {
        return;
    };

    // Code lines + borders + the copy controls
    let code_height = u16::try_from(pass.code.lines().count())
        .unwrap_or(u16::MAX)
        .saturating_add(3);
    let right = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(code_height), Constraint::Min(5)])
        .split(columns[1]);

    let copy_enabled = state.configurator.notification_phase() == NotificationPhase::Hidden;
    code_view::render_code(f, right[0], &state.theme, &pass.code, copy_enabled);
    preview::render_preview(
        f,
        right[1],
        &state.theme,
        pass,
        state.config.ui.preview_cell_px,
    );
}

/// Draws the rendering failure over everything else until dismissed.
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(
            "Could not render the rule",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter/Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Dismiss, then fix the field being edited",
                Style::default().fg(theme.text_muted),
            ),
        ]),
    ];

    let overlay = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(overlay, area);
}

/// Rectangle of `percent_x` by `percent_y` of `r`, centered in it.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let width = (u32::from(r.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(r.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Launches the TUI and blocks until the user quits.
pub fn run(config: Config, clipboard: Box<dyn ClipboardWriter>) -> Result<()> {
    let mut state = AppState::new(config, clipboard);
    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result
}
