//! Navigation path
//!
//! This module provides the ordered stack of destinations behind one
//! navigation root. The path starts empty: the root screen is implicit and
//! never appears as an entry.

use crate::destination::Destination;

/// Ordered drill-down history for one navigation root.
///
/// Append/remove-from-end only. Entries have no identity beyond their
/// position, and the same destination may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath {
    entries: Vec<Destination>,
}

impl NavigationPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a destination onto the path.
    pub fn push(&mut self, destination: Destination) {
        self.entries.push(destination);
    }

    /// Pop the top destination (returns it, or `None` if the path is empty).
    pub fn pop(&mut self) -> Option<Destination> {
        self.entries.pop()
    }

    /// Remove up to `levels` entries from the end.
    ///
    /// Removes `min(levels, len)` entries and returns how many were removed.
    pub fn pop_levels(&mut self, levels: usize) -> usize {
        let removed = levels.min(self.entries.len());
        self.entries.truncate(self.entries.len() - removed);
        removed
    }

    /// Replace the top entry, or push when the path is empty.
    pub fn replace_top(&mut self, destination: Destination) {
        match self.entries.last_mut() {
            Some(last) => *last = destination,
            None => self.entries.push(destination),
        }
    }

    /// Clear the path back to the root.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the top entry, if any.
    pub fn top(&self) -> Option<&Destination> {
        self.entries.last()
    }

    /// Number of pushed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the path is at the root (no pushed entries).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, bottom to top.
    pub fn entries(&self) -> &[Destination] {
        &self.entries
    }
}
