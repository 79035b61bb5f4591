//! Breakpoint width to column count mapping.
//!
//! Every operation takes `&self` and hands back a new map, so a caller that
//! still holds the previous map never observes a half-applied change.

// Allow intentional casts for the 1.1 growth factor
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Growth factor applied to the widest breakpoint when a new one is added.
pub const BREAKPOINT_GROWTH: f64 = 1.1;

/// A single breakpoint row: viewport width in pixels and the columns shown from it upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Viewport width in pixels
    pub width: u32,
    /// Number of columns
    pub columns: u32,
}

impl Breakpoint {
    /// Creates a new breakpoint entry.
    #[must_use]
    pub const fn new(width: u32, columns: u32) -> Self {
        Self { width, columns }
    }
}

/// Mapping from breakpoint width (px) to column count.
///
/// Entries iterate in ascending width order. A width of `0` is the sentinel
/// left behind by a width field whose text did not parse as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct BreakpointMap {
    entries: BTreeMap<u32, u32>,
}

impl BreakpointMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no breakpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column count for a width, if present.
    #[must_use]
    pub fn columns(&self, width: u32) -> Option<u32> {
        self.entries.get(&width).copied()
    }

    /// Whether a breakpoint exists at `width`.
    #[must_use]
    pub fn contains(&self, width: u32) -> bool {
        self.entries.contains_key(&width)
    }

    /// Iterates breakpoints in ascending width order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Breakpoint> + '_ {
        self.entries
            .iter()
            .map(|(&width, &columns)| Breakpoint::new(width, columns))
    }

    /// Widths in ascending order.
    #[must_use]
    pub fn widths(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    /// The widest breakpoint, if any.
    #[must_use]
    pub fn widest(&self) -> Option<Breakpoint> {
        self.iter().next_back()
    }

    /// Largest column count across all breakpoints (0 when empty).
    #[must_use]
    pub fn max_columns(&self) -> u32 {
        self.entries.values().copied().max().unwrap_or(0)
    }

    /// Whether a new breakpoint can be derived from the current set.
    ///
    /// Disabled when the map is empty or any width is the non-numeric sentinel.
    #[must_use]
    pub fn can_add_breakpoint(&self) -> bool {
        !self.entries.is_empty() && !self.entries.contains_key(&0)
    }

    /// Moves the columns stored under `old_width` to `new_width`.
    ///
    /// An existing entry at `new_width` is overwritten. Unknown `old_width` leaves the map as is.
    #[must_use]
    pub fn rename_breakpoint(&self, old_width: u32, new_width: u32) -> Self {
        let mut entries = self.entries.clone();
        if let Some(columns) = entries.remove(&old_width) {
            if old_width != new_width && entries.contains_key(&new_width) {
                tracing::debug!(
                    old_width,
                    new_width,
                    "Breakpoint rename overwrites existing entry"
                );
            }
            entries.insert(new_width, columns);
        }
        Self { entries }
    }

    /// Sets the column count for `width`, inserting the breakpoint if needed.
    #[must_use]
    pub fn set_columns(&self, width: u32, columns: u32) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(width, columns);
        Self { entries }
    }

    /// Adds a breakpoint 10% wider than the widest one, with one more column.
    ///
    /// Returns `None` when [`Self::can_add_breakpoint`] is false.
    #[must_use]
    pub fn add_breakpoint(&self) -> Option<Self> {
        if !self.can_add_breakpoint() {
            return None;
        }
        let widest = self.widest()?;
        let next = Self::next_breakpoint(widest);

        let mut entries = self.entries.clone();
        entries.insert(next.width, next.columns);
        Some(Self { entries })
    }

    /// The breakpoint that [`Self::add_breakpoint`] derives from `widest`.
    #[must_use]
    pub fn next_breakpoint(widest: Breakpoint) -> Breakpoint {
        let width = (f64::from(widest.width) * BREAKPOINT_GROWTH).floor() as u32;
        Breakpoint::new(width, widest.columns.saturating_add(1))
    }

    /// Removes the breakpoint at `width`.
    #[must_use]
    pub fn remove_breakpoint(&self, width: u32) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(&width);
        Self { entries }
    }
}

impl From<Vec<Breakpoint>> for BreakpointMap {
    fn from(list: Vec<Breakpoint>) -> Self {
        list.into_iter().collect()
    }
}

impl From<BreakpointMap> for Vec<Breakpoint> {
    fn from(map: BreakpointMap) -> Self {
        map.iter().collect()
    }
}

impl FromIterator<Breakpoint> for BreakpointMap {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|bp| (bp.width, bp.columns)).collect(),
        }
    }
}

impl<const N: usize> From<[(u32, u32); N]> for BreakpointMap {
    fn from(pairs: [(u32, u32); N]) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }
}

impl fmt::Display for BreakpointMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, bp) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", bp.width, bp.columns)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> BreakpointMap {
        BreakpointMap::from([(500, 5), (600, 6), (700, 7)])
    }

    #[test]
    fn test_iterates_in_ascending_width_order() {
        let map = BreakpointMap::from([(700, 7), (500, 5), (600, 6)]);
        assert_eq!(map.widths(), vec![500, 600, 700]);
        assert_eq!(map.widest(), Some(Breakpoint::new(700, 7)));
    }

    #[test]
    fn test_add_breakpoint_grows_widest() {
        let map = initial().add_breakpoint().unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.columns(770), Some(8));
        // Existing entries untouched
        assert_eq!(map.columns(500), Some(5));
        assert_eq!(map.columns(600), Some(6));
        assert_eq!(map.columns(700), Some(7));
    }

    #[test]
    fn test_add_breakpoint_twice() {
        let map = initial().add_breakpoint().unwrap().add_breakpoint().unwrap();
        // floor(770 * 1.1) = 847
        assert_eq!(map.columns(847), Some(9));
    }

    #[test]
    fn test_add_breakpoint_disabled_when_empty() {
        let map = BreakpointMap::new();
        assert!(!map.can_add_breakpoint());
        assert!(map.add_breakpoint().is_none());
    }

    #[test]
    fn test_add_breakpoint_disabled_with_sentinel_key() {
        let map = initial().rename_breakpoint(600, 0);
        assert!(!map.can_add_breakpoint());
        assert!(map.add_breakpoint().is_none());
    }

    #[test]
    fn test_add_breakpoint_does_not_mutate_source() {
        let map = initial();
        let _ = map.add_breakpoint();
        assert_eq!(map, initial());
    }

    #[test]
    fn test_rename_preserves_columns() {
        let map = initial().rename_breakpoint(600, 650);
        assert!(!map.contains(600));
        assert_eq!(map.columns(650), Some(6));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_rename_collision_last_write_wins() {
        let map = initial().rename_breakpoint(500, 700);
        assert_eq!(map.len(), 2);
        assert_eq!(map.columns(700), Some(5));
        assert!(!map.contains(500));
    }

    #[test]
    fn test_rename_missing_key_is_noop() {
        assert_eq!(initial().rename_breakpoint(123, 456), initial());
    }

    #[test]
    fn test_rename_to_same_width() {
        assert_eq!(initial().rename_breakpoint(600, 600), initial());
    }

    #[test]
    fn test_set_columns_upserts() {
        let map = initial().set_columns(600, 3).set_columns(900, 10);
        assert_eq!(map.columns(600), Some(3));
        assert_eq!(map.columns(900), Some(10));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_remove_breakpoint_leaves_others() {
        let original = initial();
        for width in original.widths() {
            let map = original.remove_breakpoint(width);
            assert!(!map.contains(width));
            assert_eq!(map.len(), original.len() - 1);
            for bp in map.iter() {
                assert_eq!(original.columns(bp.width), Some(bp.columns));
            }
        }
    }

    #[test]
    fn test_remove_until_empty() {
        let map = initial()
            .remove_breakpoint(500)
            .remove_breakpoint(600)
            .remove_breakpoint(700);
        assert!(map.is_empty());
        assert_eq!(map.max_columns(), 0);
    }

    #[test]
    fn test_next_breakpoint_saturates() {
        let next = BreakpointMap::next_breakpoint(Breakpoint::new(u32::MAX, u32::MAX));
        assert_eq!(next.width, u32::MAX);
        assert_eq!(next.columns, u32::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(initial().to_string(), "{500: 5, 600: 6, 700: 7}");
    }

    #[test]
    fn test_serde_as_list() {
        let json = serde_json::to_string(&initial()).unwrap();
        assert_eq!(
            json,
            r#"[{"width":500,"columns":5},{"width":600,"columns":6},{"width":700,"columns":7}]"#
        );
        let back: BreakpointMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, initial());
    }
}
