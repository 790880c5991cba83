//! Shared append-only note history
//!
//! Notes are grouped by the exact location they were left at. Each location
//! owns its own lock, so sessions chatting about different places never
//! contend; the outer map lock is only held to find or create an entry.

use routeguide_domain::{Note, Point, PointKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

type Entry = Arc<Mutex<Vec<Note>>>;

/// Per-location note history shared by all chat sessions
///
/// Entries are created on the first note at a location and never removed.
#[derive(Debug, Default)]
pub struct NoteLog {
    entries: RwLock<HashMap<PointKey, Entry>>,
}

impl NoteLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `note` and return the history recorded before it
    ///
    /// Reading the prior history and appending happen under the same
    /// per-location lock, so no other append to that location can slip in
    /// between. The returned history never contains `note` itself.
    pub fn record(&self, note: Note) -> Vec<Note> {
        let entry = self.entry(note.location.key());
        let mut notes = lock(&entry);
        let history = notes.clone();
        notes.push(note);
        history
    }

    /// Snapshot of everything recorded at `point`, in insertion order
    pub fn history(&self, point: Point) -> Vec<Note> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&point.key())
            .map(|entry| lock(entry).clone())
            .unwrap_or_default()
    }

    /// Number of locations that have at least one note
    pub fn location_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Total number of notes across all locations
    pub fn note_count(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.values().map(|entry| lock(entry).len()).sum()
    }

    fn entry(&self, key: PointKey) -> Entry {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = entries.get(&key) {
                return Arc::clone(entry);
            }
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_default())
    }
}

// The log is append-only, so a panic mid-push cannot leave it inconsistent.
fn lock(entry: &Mutex<Vec<Note>>) -> MutexGuard<'_, Vec<Note>> {
    entry.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_first_note_sees_empty_history() {
        let log = NoteLog::new();
        let history = log.record(Note::new(Point::new(1, 1), "first"));
        assert!(history.is_empty());
        assert_eq!(log.location_count(), 1);
    }

    #[test]
    fn test_history_excludes_own_note() {
        let log = NoteLog::new();
        let p = Point::new(1, 1);
        log.record(Note::new(p, "m1"));
        let history = log.record(Note::new(p, "m2"));
        let messages: Vec<&str> = history.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["m1"]);
        assert_eq!(log.history(p).len(), 2);
    }

    #[test]
    fn test_locations_are_isolated() {
        let log = NoteLog::new();
        log.record(Note::new(Point::new(1, 2), "a"));
        let history = log.record(Note::new(Point::new(2, 1), "b"));
        assert!(history.is_empty());
        assert_eq!(log.location_count(), 2);
        assert_eq!(log.note_count(), 2);
        assert!(log.history(Point::new(9, 9)).is_empty());
    }

    #[test]
    fn test_attributes_pass_through() {
        let log = NoteLog::new();
        let p = Point::new(1, 1);
        let note = Note::new(p, "hello").with_attribute("sender", "alice");
        log.record(note.clone());
        assert_eq!(log.history(p), vec![note]);
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let log = Arc::new(NoteLog::new());
        let p = Point::new(7, 7);
        let threads = 8;
        let per_thread = 50;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    for i in 0..per_thread {
                        let history = log.record(Note::new(p, format!("{}-{}", t, i)));
                        seen.push(history.len());
                    }
                    seen
                })
            })
            .collect();

        let mut all_lengths = Vec::new();
        for handle in handles {
            let seen = handle.join().unwrap();
            // A session's later notes always see a longer history
            assert!(seen.windows(2).all(|w| w[0] < w[1]));
            all_lengths.extend(seen);
        }

        // Each append observed a distinct prefix length: no two interleaved
        all_lengths.sort_unstable();
        let expected: Vec<usize> = (0..threads * per_thread).collect();
        assert_eq!(all_lengths, expected);
        assert_eq!(log.history(p).len(), threads * per_thread);
    }
}
