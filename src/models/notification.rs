//! Timed "Copied!" toast lifecycle.
//!
//! The toast runs `Hidden -> Visible -> Closing -> Hidden`, spending one
//! phase duration in each of the two shown phases. A running cycle cannot
//! be cancelled or restarted; copying is only possible while hidden.

use std::fmt;
use std::time::{Duration, Instant};

/// Default time spent in each shown phase.
pub const DEFAULT_PHASE_DURATION: Duration = Duration::from_millis(2000);

/// Lifecycle phase of the copy notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPhase {
    /// No toast on screen; copy is available
    #[default]
    Hidden,
    /// Toast shown
    Visible,
    /// Toast fading out
    Closing,
}

impl fmt::Display for NotificationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
            Self::Closing => "closing",
        };
        write!(f, "{name}")
    }
}

/// State machine behind the copy toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotification {
    phase: NotificationPhase,
    /// When the current phase was entered (None while hidden)
    entered_at: Option<Instant>,
    phase_duration: Duration,
}

impl CopyNotification {
    /// Creates a hidden notification using the given phase duration.
    #[must_use]
    pub const fn new(phase_duration: Duration) -> Self {
        Self {
            phase: NotificationPhase::Hidden,
            entered_at: None,
            phase_duration,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> NotificationPhase {
        self.phase
    }

    /// Time spent in each shown phase.
    #[must_use]
    pub const fn phase_duration(&self) -> Duration {
        self.phase_duration
    }

    /// Whether a copy may start now.
    #[must_use]
    pub fn can_copy(&self) -> bool {
        self.phase == NotificationPhase::Hidden
    }

    /// Whether the toast should be drawn (visible or closing).
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase != NotificationPhase::Hidden
    }

    /// Starts a new cycle. Returns `false`, changing nothing, unless hidden.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if !self.can_copy() {
            return false;
        }
        self.phase = NotificationPhase::Visible;
        self.entered_at = Some(now);
        true
    }

    /// Applies every timed transition due at `now`.
    ///
    /// Returns `true` if the phase changed. A late tick walks through all the
    /// phases that have elapsed rather than skipping any.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(entered_at) = self.entered_at {
            let due = entered_at + self.phase_duration;
            if now < due {
                break;
            }
            match self.phase {
                NotificationPhase::Visible => {
                    self.phase = NotificationPhase::Closing;
                    self.entered_at = Some(due);
                }
                NotificationPhase::Closing | NotificationPhase::Hidden => {
                    self.phase = NotificationPhase::Hidden;
                    self.entered_at = None;
                }
            }
            tracing::debug!(phase = %self.phase, "Copy notification transition");
            changed = true;
        }
        changed
    }

    /// Time left until the next transition, if one is pending.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.entered_at
            .map(|entered_at| (entered_at + self.phase_duration).saturating_duration_since(now))
    }
}

impl Default for CopyNotification {
    fn default() -> Self {
        Self::new(DEFAULT_PHASE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_starts_hidden() {
        let toast = CopyNotification::default();
        assert_eq!(toast.phase(), NotificationPhase::Hidden);
        assert!(toast.can_copy());
        assert!(!toast.is_shown());
        assert_eq!(toast.phase_duration(), ms(2000));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(NotificationPhase::Hidden.to_string(), "hidden");
        assert_eq!(NotificationPhase::Visible.to_string(), "visible");
        assert_eq!(NotificationPhase::Closing.to_string(), "closing");
    }

    #[test]
    fn test_full_cycle() {
        let start = Instant::now();
        let mut toast = CopyNotification::default();

        assert!(toast.trigger(start));
        assert_eq!(toast.phase(), NotificationPhase::Visible);

        assert!(!toast.tick(start + ms(1999)));
        assert_eq!(toast.phase(), NotificationPhase::Visible);

        assert!(toast.tick(start + ms(2000)));
        assert_eq!(toast.phase(), NotificationPhase::Closing);

        assert!(!toast.tick(start + ms(3999)));
        assert_eq!(toast.phase(), NotificationPhase::Closing);

        assert!(toast.tick(start + ms(4000)));
        assert_eq!(toast.phase(), NotificationPhase::Hidden);
        assert!(toast.can_copy());
    }

    #[test]
    fn test_trigger_ignored_while_shown() {
        let start = Instant::now();
        let mut toast = CopyNotification::default();
        toast.trigger(start);

        // Re-trigger while visible does not restart the timer
        assert!(!toast.trigger(start + ms(1500)));
        toast.tick(start + ms(2000));
        assert_eq!(toast.phase(), NotificationPhase::Closing);

        // Re-trigger while closing is ignored too
        assert!(!toast.trigger(start + ms(2500)));
        assert_eq!(toast.phase(), NotificationPhase::Closing);

        toast.tick(start + ms(4000));
        assert!(toast.trigger(start + ms(4001)));
    }

    #[test]
    fn test_late_tick_applies_all_transitions() {
        let start = Instant::now();
        let mut toast = CopyNotification::default();
        toast.trigger(start);
        assert!(toast.tick(start + ms(10_000)));
        assert_eq!(toast.phase(), NotificationPhase::Hidden);
    }

    #[test]
    fn test_closing_timer_counts_from_transition() {
        let start = Instant::now();
        let mut toast = CopyNotification::default();
        toast.trigger(start);
        // Observed late, but closing still ends at start + 4000
        toast.tick(start + ms(3000));
        assert_eq!(toast.phase(), NotificationPhase::Closing);
        assert_eq!(toast.remaining(start + ms(3000)), Some(ms(1000)));
        toast.tick(start + ms(4000));
        assert_eq!(toast.phase(), NotificationPhase::Hidden);
        assert_eq!(toast.remaining(start + ms(4000)), None);
    }

    #[test]
    fn test_tick_while_hidden_is_noop() {
        let mut toast = CopyNotification::default();
        assert!(!toast.tick(Instant::now()));
        assert_eq!(toast.phase(), NotificationPhase::Hidden);
    }

    #[test]
    fn test_custom_phase_duration() {
        let start = Instant::now();
        let mut toast = CopyNotification::new(ms(10));
        toast.trigger(start);
        toast.tick(start + ms(10));
        assert_eq!(toast.phase(), NotificationPhase::Closing);
        toast.tick(start + ms(20));
        assert_eq!(toast.phase(), NotificationPhase::Hidden);
    }
}
