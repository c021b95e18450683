//! Per-pass bookkeeping for cycle detection and depth limiting.
//!
//! A [`VisitedSet`] belongs to exactly one root resolution. It tracks three
//! things:
//! 1. **Identities**: the pass-local `TypeIdentity` of every object-like node
//!    seen so far, numbered from 1 in first-seen order
//! 2. **In-progress marks**: nodes whose children are currently being
//!    expanded; re-entering one of them yields a reference
//! 3. **Depth**: how deep the current recursion is, bounded by `max_depth`
//!
//! Ordinary object marks are removed once the object's properties are
//! built. Indexable-object marks are pinned and stay until the pass ends.
//!
//! # Debug-mode safety
//!
//! In debug builds, [`finish`](VisitedSet::finish) panics if an unpinned
//! mark is still present, and [`unmark`](VisitedSet::unmark) panics on a key
//! that is not marked.

use crate::limits::{MAX_RESOLUTION_DEPTH, VISITED_SET_INITIAL_CAPACITY};
use crate::types::TypeIdentity;
use rustc_hash::FxHashMap;

/// How a key came to be marked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    /// Removed when the node's children are done.
    InProgress,
    /// Kept for the remainder of the pass.
    Pinned,
}

/// Result of trying to descend one level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DepthResult {
    Entered,
    Exceeded,
}

/// Visited set scoped to a single resolution pass.
pub struct VisitedSet {
    identities: FxHashMap<u64, TypeIdentity>,
    marks: FxHashMap<u64, Mark>,
    next_id: u32,
    depth: u32,
    max_depth: u32,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_RESOLUTION_DEPTH)
    }

    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            identities: FxHashMap::with_capacity_and_hasher(
                VISITED_SET_INITIAL_CAPACITY,
                Default::default(),
            ),
            marks: FxHashMap::default(),
            next_id: 1,
            depth: 0,
            max_depth,
        }
    }

    // -----------------------------------------------------------------------
    // Identities
    // -----------------------------------------------------------------------

    /// Pass-local identity of `key`, allocating the next id on first sight.
    pub fn identity(&mut self, key: u64, name: impl FnOnce() -> String) -> TypeIdentity {
        if let Some(existing) = self.identities.get(&key) {
            return existing.clone();
        }
        let identity = TypeIdentity::new(self.next_id, name());
        self.next_id += 1;
        self.identities.insert(key, identity.clone());
        identity
    }

    // -----------------------------------------------------------------------
    // Marks
    // -----------------------------------------------------------------------

    /// Identity of `key` if it is currently marked.
    pub fn marked(&self, key: u64) -> Option<&TypeIdentity> {
        if self.marks.contains_key(&key) {
            self.identities.get(&key)
        } else {
            None
        }
    }

    /// Mark `key` while its children expand. Pair with [`unmark`](Self::unmark).
    pub fn mark(&mut self, key: u64) {
        self.marks.entry(key).or_insert(Mark::InProgress);
    }

    /// Mark `key` for the rest of the pass.
    pub fn pin(&mut self, key: u64) {
        self.marks.insert(key, Mark::Pinned);
    }

    /// Remove an in-progress mark.
    ///
    /// # Debug panics
    ///
    /// Panics in debug builds when `key` was never marked.
    pub fn unmark(&mut self, key: u64) {
        let removed = self.marks.remove(&key);
        debug_assert!(
            removed.is_some(),
            "VisitedSet::unmark() called for a key that is not marked. \
             This indicates an unmark without a matching mark()."
        );
        if removed == Some(Mark::Pinned) {
            self.marks.insert(key, Mark::Pinned);
        }
    }

    // -----------------------------------------------------------------------
    // Depth
    // -----------------------------------------------------------------------

    pub fn descend(&mut self) -> DepthResult {
        if self.depth >= self.max_depth {
            return DepthResult::Exceeded;
        }
        self.depth += 1;
        DepthResult::Entered
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    // -----------------------------------------------------------------------
    // End of pass
    // -----------------------------------------------------------------------

    /// Close the pass.
    ///
    /// # Debug panics
    ///
    /// Panics in debug builds when an in-progress mark was never removed.
    pub fn finish(self) {
        debug_assert!(
            self.marks.values().all(|mark| *mark == Mark::Pinned),
            "VisitedSet finished with {} in-progress mark(s) still set",
            self.marks
                .values()
                .filter(|mark| **mark == Mark::InProgress)
                .count()
        );
        debug_assert_eq!(self.depth, 0, "VisitedSet finished at depth {}", self.depth);
    }
}

impl Default for VisitedSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_are_numbered_in_first_seen_order() {
        let mut visited = VisitedSet::new();
        let a = visited.identity(900, || "A".to_string());
        let b = visited.identity(7, || "B".to_string());
        let a_again = visited.identity(900, || unreachable!());

        assert_eq!(a, TypeIdentity::new(1, "A"));
        assert_eq!(b, TypeIdentity::new(2, "B"));
        assert_eq!(a_again, a);
    }

    #[test]
    fn test_mark_and_unmark() {
        let mut visited = VisitedSet::new();
        let identity = visited.identity(1, || "Node".to_string());

        assert!(visited.marked(1).is_none());
        visited.mark(1);
        assert_eq!(visited.marked(1), Some(&identity));
        visited.unmark(1);
        assert!(visited.marked(1).is_none());
        visited.finish();
    }

    #[test]
    fn test_pinned_mark_survives_unmark() {
        let mut visited = VisitedSet::new();
        let identity = visited.identity(5, || "Dict".to_string());
        visited.pin(5);
        visited.unmark(5);
        assert_eq!(visited.marked(5), Some(&identity));
        visited.finish();
    }

    #[test]
    fn test_depth_limit() {
        let mut visited = VisitedSet::with_max_depth(2);
        assert_eq!(visited.descend(), DepthResult::Entered);
        assert_eq!(visited.descend(), DepthResult::Entered);
        assert_eq!(visited.descend(), DepthResult::Exceeded);
        assert_eq!(visited.depth(), 2);
        visited.ascend();
        visited.ascend();
        visited.finish();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "in-progress mark")]
    fn test_finish_with_open_mark_panics() {
        let mut visited = VisitedSet::new();
        visited.mark(3);
        visited.finish();
    }
}
