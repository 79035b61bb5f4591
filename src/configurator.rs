//! The layout configurator: session state plus everything derived from it.
//!
//! [`Configurator`] owns the [`LayoutConfig`] and the copy toast. Rendering
//! never reads cached output; each [`RenderPass`] is derived from the current
//! state, so the code preview and the placeholder boxes always agree.

use anyhow::Result;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardWriter;
use crate::css::{render_rule, ClampFormula, ColumnsExpression, ColumnsFormula};
use crate::models::{CopyNotification, LayoutConfig, NotificationPhase, RgbColor};

/// What a copy action puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyTarget {
    /// Just the sizing expression (the "clamp function")
    #[default]
    Expression,
    /// The whole formatted rule
    Rule,
}

/// One placeholder box in the preview grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    /// Background color, picked when the pass was built
    pub color: RgbColor,
    /// `flex` value (the sizing expression)
    pub flex: String,
    /// `max-width` value (the sizing expression)
    pub max_width: String,
}

/// Everything the UI draws for one state of the configurator.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    /// Derived sizing expression
    pub width_expression: ColumnsExpression,
    /// Pretty-printed rule embedding the expression
    pub code: String,
    /// Class name used in the rule (after fallback)
    pub class_name: String,
    /// Gap in pixels
    pub gap: f64,
    /// Placeholder boxes
    pub items: Vec<PreviewItem>,
}

/// Session state and the operations the UI exposes on it.
pub struct Configurator {
    layout: LayoutConfig,
    notification: CopyNotification,
    formula: Box<dyn ColumnsFormula>,
}

impl Configurator {
    /// Creates a configurator using the default clamp formula.
    #[must_use]
    pub fn new(layout: LayoutConfig, phase_duration: Duration) -> Self {
        Self::with_formula(layout, phase_duration, Box::new(ClampFormula))
    }

    /// Creates a configurator with a custom columns formula.
    #[must_use]
    pub fn with_formula(
        layout: LayoutConfig,
        phase_duration: Duration,
        formula: Box<dyn ColumnsFormula>,
    ) -> Self {
        Self {
            layout,
            notification: CopyNotification::new(phase_duration),
            formula,
        }
    }

    /// Current session settings.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Copy toast state.
    #[must_use]
    pub const fn notification(&self) -> &CopyNotification {
        &self.notification
    }

    // === Breakpoints ===

    /// Moves a breakpoint to a new width, keeping its column count.
    pub fn rename_breakpoint(&mut self, old_width: u32, new_width: u32) {
        tracing::debug!(old_width, new_width, "Rename breakpoint");
        self.layout.breakpoints = self.layout.breakpoints.rename_breakpoint(old_width, new_width);
    }

    /// Sets the column count at a width.
    pub fn set_columns(&mut self, width: u32, columns: u32) {
        tracing::debug!(width, columns, "Set columns");
        self.layout.breakpoints = self.layout.breakpoints.set_columns(width, columns);
    }

    /// Whether [`Self::add_breakpoint`] would do anything.
    #[must_use]
    pub fn can_add_breakpoint(&self) -> bool {
        self.layout.breakpoints.can_add_breakpoint()
    }

    /// Adds a breakpoint after the widest one. Returns `false` when disabled.
    pub fn add_breakpoint(&mut self) -> bool {
        match self.layout.breakpoints.add_breakpoint() {
            Some(map) => {
                self.layout.breakpoints = map;
                tracing::debug!(breakpoints = %self.layout.breakpoints, "Added breakpoint");
                true
            }
            None => false,
        }
    }

    /// Removes the breakpoint at `width`.
    pub fn remove_breakpoint(&mut self, width: u32) {
        tracing::debug!(width, "Remove breakpoint");
        self.layout.breakpoints = self.layout.breakpoints.remove_breakpoint(width);
    }

    // === Other fields ===

    /// Sets the gap in pixels.
    pub fn set_gap(&mut self, gap: f64) {
        self.layout.gap = gap;
    }

    /// Sets the class name as typed.
    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.layout.class_name = class_name.into();
    }

    /// One more placeholder.
    pub fn more_items(&mut self) {
        self.layout.items_on_screen = self.layout.items_on_screen.saturating_add(1);
    }

    /// One fewer placeholder; the count may go negative.
    pub fn fewer_items(&mut self) {
        self.layout.items_on_screen = self.layout.items_on_screen.saturating_sub(1);
    }

    // === Derivation ===

    /// Derives the sizing expression from the current breakpoints and gap.
    #[must_use]
    pub fn width_expression(&self) -> ColumnsExpression {
        self.formula
            .expression(&self.layout.breakpoints, self.layout.gap)
    }

    /// Pretty-printed rule for the current state.
    pub fn code(&self) -> Result<String> {
        let expression = self.width_expression();
        render_rule(
            self.layout.display_class_name(),
            &expression.css,
            self.layout.gap,
        )
    }

    /// Builds a full render pass, drawing fresh placeholder colors from `rng`.
    pub fn render_pass<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RenderPass> {
        let width_expression = self.width_expression();
        let class_name = self.layout.display_class_name().to_string();
        let code = render_rule(&class_name, &width_expression.css, self.layout.gap)?;

        let items = (0..self.layout.visible_items())
            .map(|_| PreviewItem {
                color: RgbColor::random(rng),
                flex: width_expression.css.clone(),
                max_width: width_expression.css.clone(),
            })
            .collect();

        Ok(RenderPass {
            width_expression,
            code,
            class_name,
            gap: self.layout.gap,
            items,
        })
    }

    // === Copy & notification ===

    /// Copies `target` and starts the toast.
    ///
    /// Does nothing and returns `false` while a previous toast is still
    /// shown. A failed clipboard write is logged and otherwise ignored.
    pub fn copy(
        &mut self,
        target: CopyTarget,
        now: Instant,
        clipboard: &mut dyn ClipboardWriter,
    ) -> Result<bool> {
        if !self.notification.can_copy() {
            return Ok(false);
        }
        let text = match target {
            CopyTarget::Expression => self.width_expression().css,
            CopyTarget::Rule => self.code()?,
        };
        self.notification.trigger(now);
        tracing::info!(?target, "Copied to clipboard");
        if let Err(e) = clipboard.write_text(&text) {
            tracing::warn!("Clipboard write failed: {e:#}");
        }
        Ok(true)
    }

    /// Advances the toast timers. Returns `true` if its phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notification.tick(now)
    }

    /// Current toast phase.
    #[must_use]
    pub fn notification_phase(&self) -> NotificationPhase {
        self.notification.phase()
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new(
            LayoutConfig::default(),
            crate::models::DEFAULT_PHASE_DURATION,
        )
    }
}

impl std::fmt::Debug for Configurator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configurator")
            .field("layout", &self.layout)
            .field("notification", &self.notification)
            .finish_non_exhaustive()
    }
}
