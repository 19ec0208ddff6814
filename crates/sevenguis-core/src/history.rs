//! Undo/redo history of reversible actions.
//!
//! Entries are never popped on undo. Instead the log counts how many
//! trailing entries are currently undone; those form the redo branch and are
//! dropped wholesale the next time a new action is appended.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Change notification emitted by an [`UndoLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEvent {
    /// A new entry was appended.
    Pushed,
    /// The active top entry was undone.
    Undone,
    /// The oldest undone entry was redone.
    Redone,
}

/// How a [`UndoLog::push`] was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushKind {
    /// Appended as a new entry.
    Appended,
    /// Merged into the active top entry, which shared its key.
    Coalesced,
}

/// One reversible action: the payload that undoes it and the one that redoes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry<K, A> {
    /// Actions with equal keys pushed back to back merge into one entry.
    pub key: K,
    /// Applied on undo.
    pub before: A,
    /// Applied on redo.
    pub after: A,
}

/// Ordered action history with coalescing pushes.
pub struct UndoLog<K, A> {
    entries: Vec<LogEntry<K, A>>,
    /// Number of trailing entries that are undone but not redone.
    undone: usize,
    observers: Vec<Box<dyn FnMut(LogEvent)>>,
}

impl<K, A> Default for UndoLog<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, A: fmt::Debug> fmt::Debug for UndoLog<K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoLog")
            .field("entries", &self.entries)
            .field("undone", &self.undone)
            .finish_non_exhaustive()
    }
}

impl<K, A> UndoLog<K, A> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            undone: 0,
            observers: Vec::new(),
        }
    }

    /// Index of the most recent entry that is not undone.
    fn active_top(&self) -> Option<usize> {
        self.entries.len().checked_sub(self.undone + 1)
    }

    /// Record an action.
    ///
    /// If the active top entry carries the same key, only its `after`
    /// payload is replaced. Otherwise the redo branch is discarded and a new
    /// entry is appended.
    pub fn push(&mut self, key: K, before: A, after: A) -> PushKind
    where
        K: PartialEq,
    {
        if let Some(top) = self.active_top() {
            let entry = &mut self.entries[top];
            if entry.key == key {
                entry.after = after;
                return PushKind::Coalesced;
            }
        }

        if self.undone > 0 {
            let keep = self.entries.len() - self.undone;
            self.entries.truncate(keep);
            self.undone = 0;
        }

        self.entries.push(LogEntry { key, before, after });
        self.emit(LogEvent::Pushed);
        PushKind::Appended
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.entries.len() != self.undone
    }

    /// Apply the `before` payload of the active top entry.
    /// Returns false if there is nothing to undo.
    pub fn undo(&mut self, apply: impl FnOnce(&A)) -> bool {
        let Some(top) = self.active_top() else {
            return false;
        };
        apply(&self.entries[top].before);
        self.undone += 1;
        self.emit(LogEvent::Undone);
        true
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.undone != 0
    }

    /// Apply the `after` payload of the oldest undone entry.
    /// Returns false if there is nothing to redo.
    pub fn redo(&mut self, apply: impl FnOnce(&A)) -> bool {
        if !self.can_redo() {
            return false;
        }
        let index = self.entries.len() - self.undone;
        apply(&self.entries[index].after);
        self.undone -= 1;
        self.emit(LogEvent::Redone);
        true
    }

    /// Register a callback for push/undo/redo events.
    pub fn subscribe(&mut self, observer: impl FnMut(LogEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// All entries, including the redo branch.
    pub fn entries(&self) -> &[LogEntry<K, A>] {
        &self.entries
    }

    /// Total number of entries, including the redo branch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of trailing entries that can be redone.
    pub fn undone_count(&self) -> usize {
        self.undone
    }

    fn emit(&mut self, event: LogEvent) {
        for observer in self.observers.iter_mut() {
            observer(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn log_with(keys: &[&'static str]) -> UndoLog<&'static str, i32> {
        let mut log = UndoLog::new();
        for (i, key) in keys.iter().enumerate() {
            let i = i as i32;
            log.push(*key, i * 10, i * 10 + 1);
        }
        log
    }

    #[test]
    fn test_empty_log() {
        let mut log: UndoLog<&str, i32> = UndoLog::new();
        assert!(!log.can_undo());
        assert!(!log.can_redo());
        assert!(!log.undo(|_| panic!("nothing to undo")));
        assert!(!log.redo(|_| panic!("nothing to redo")));
        assert!(log.is_empty());
    }

    #[test]
    fn test_undo_replays_before_in_reverse_order() {
        let mut log = UndoLog::new();
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            log.push(key, i, i + 100);
            assert!(log.can_undo());
        }

        let mut replayed = Vec::new();
        while log.undo(|before| replayed.push(*before)) {}

        assert_eq!(replayed, vec![3, 2, 1, 0]);
        assert!(!log.can_undo());
        assert_eq!(log.undone_count(), 4);
    }

    #[test]
    fn test_redo_replays_after_in_push_order() {
        let mut log = log_with(&["a", "b", "c"]);
        while log.undo(|_| {}) {}

        let mut replayed = Vec::new();
        while log.redo(|after| replayed.push(*after)) {}

        assert_eq!(replayed, vec![1, 11, 21]);
        assert!(!log.can_redo());
        assert!(log.can_undo());
    }

    #[test]
    fn test_same_key_coalesces_into_after_only() {
        let mut log = UndoLog::new();
        assert_eq!(log.push("radius-1", 10, 30), PushKind::Appended);
        assert_eq!(log.push("radius-1", 99, 40), PushKind::Coalesced);

        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.key, "radius-1");
        assert_eq!(entry.before, 10);
        assert_eq!(entry.after, 40);
    }

    #[test]
    fn test_coalesce_compares_against_active_top() {
        let mut log = log_with(&["a", "b"]);
        assert!(log.undo(|_| {}));

        // "b" is undone, so pushing "a" again merges into the active top.
        assert_eq!(log.push("a", 500, 501), PushKind::Coalesced);
        assert_eq!(log.entries()[0].before, 0);
        assert_eq!(log.entries()[0].after, 501);
        // Coalescing leaves the redo branch alone.
        assert!(log.can_redo());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_push_after_undo_discards_redo_branch() {
        let mut log = log_with(&["a", "b", "c"]);
        assert!(log.undo(|_| {}));
        assert!(log.undo(|_| {}));
        assert!(log.can_redo());

        // Same key as a discarded entry must not resurrect it.
        assert_eq!(log.push("c", 7, 8), PushKind::Appended);

        assert!(!log.can_redo());
        assert_eq!(log.undone_count(), 0);
        let keys: Vec<_> = log.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(log.entries()[1].before, 7);
    }

    #[test]
    fn test_push_after_undoing_everything() {
        let mut log = log_with(&["a"]);
        assert!(log.undo(|_| {}));

        // No active top exists; "a" is appended fresh.
        assert_eq!(log.push("a", 1, 2), PushKind::Appended);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].before, 1);
    }

    #[test]
    fn test_events_emitted() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut log = UndoLog::new();
        let sink = Rc::clone(&events);
        log.subscribe(move |e| sink.borrow_mut().push(e));

        log.push("a", 0, 1);
        log.push("a", 0, 2);
        log.undo(|_| {});
        log.redo(|_| {});
        log.undo(|_| {});
        log.undo(|_| {});

        assert_eq!(
            *events.borrow(),
            vec![LogEvent::Pushed, LogEvent::Undone, LogEvent::Redone, LogEvent::Undone]
        );
    }
}
