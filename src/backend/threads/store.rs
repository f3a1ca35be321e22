/**
 * Thread Store
 *
 * This module defines the `ThreadStore` trait used by the thread handlers and
 * its in-memory implementation.
 *
 * # Ordering
 *
 * Threads are listed in insertion order. Each record gets a monotonically
 * increasing sequence number on insert; removal drops that entry, so the
 * relative order of the remaining threads never changes.
 *
 * # Thread Safety
 *
 * All state sits behind one `RwLock`. Writers (insert, update, remove) are
 * serialized; readers get a consistent snapshot.
 */

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use thiserror::Error;

use crate::backend::error::BackendError;
use crate::shared::{Thread, ThreadPatch};

/// Errors reported by a thread store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThreadStoreError {
    /// A thread with this id is already stored
    #[error("thread id already exists: {0}")]
    DuplicateId(String),
}

impl From<ThreadStoreError> for BackendError {
    fn from(err: ThreadStoreError) -> Self {
        match err {
            ThreadStoreError::DuplicateId(_) => BackendError::duplicate("Thread id already exists"),
        }
    }
}

/// Storage operations for discussion threads
pub trait ThreadStore: Send + Sync {
    /// Store a new thread and return the stored record
    ///
    /// # Errors
    /// `ThreadStoreError::DuplicateId` if the id is already taken.
    fn insert(&self, thread: Thread) -> Result<Thread, ThreadStoreError>;

    /// All threads in insertion order
    fn list(&self) -> Vec<Thread>;

    /// Thread with the given id
    fn get(&self, id: &str) -> Option<Thread>;

    /// Apply `patch` to the thread with the given id and return the result
    fn update(&self, id: &str, patch: ThreadPatch) -> Option<Thread>;

    /// Remove the thread with the given id, returning it if it existed
    fn remove(&self, id: &str) -> Option<Thread>;
}

#[derive(Debug, Default)]
struct Threads {
    next_seq: u64,
    by_seq: BTreeMap<u64, Thread>,
    seq_by_id: HashMap<String, u64>,
}

/// `ThreadStore` kept entirely in process memory
///
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryThreadStore {
    inner: RwLock<Threads>,
}

impl InMemoryThreadStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored threads
    pub fn len(&self) -> usize {
        self.inner.read().by_seq.len()
    }

    /// Whether no threads are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ThreadStore for InMemoryThreadStore {
    fn insert(&self, thread: Thread) -> Result<Thread, ThreadStoreError> {
        let mut threads = self.inner.write();
        if threads.seq_by_id.contains_key(&thread.id) {
            return Err(ThreadStoreError::DuplicateId(thread.id));
        }

        let seq = threads.next_seq;
        threads.next_seq += 1;
        threads.seq_by_id.insert(thread.id.clone(), seq);
        threads.by_seq.insert(seq, thread.clone());

        Ok(thread)
    }

    fn list(&self) -> Vec<Thread> {
        self.inner.read().by_seq.values().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<Thread> {
        let threads = self.inner.read();
        let seq = threads.seq_by_id.get(id)?;
        threads.by_seq.get(seq).cloned()
    }

    fn update(&self, id: &str, patch: ThreadPatch) -> Option<Thread> {
        let mut threads = self.inner.write();
        let seq = *threads.seq_by_id.get(id)?;
        let thread = threads.by_seq.get_mut(&seq)?;
        patch.apply_to(thread);
        Some(thread.clone())
    }

    fn remove(&self, id: &str) -> Option<Thread> {
        let mut threads = self.inner.write();
        let seq = threads.seq_by_id.remove(id)?;
        threads.by_seq.remove(&seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn thread(id: &str) -> Thread {
        Thread {
            id: id.to_string(),
            title: format!("title {}", id),
            description: format!("description {}", id),
        }
    }

    fn ids(store: &InMemoryThreadStore) -> Vec<String> {
        store.list().into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_insert_then_get_returns_input() {
        let store = InMemoryThreadStore::new();
        assert!(store.is_empty());
        let stored = store.insert(thread("1")).unwrap();

        assert_eq!(stored, thread("1"));
        assert_eq!(store.get("1"), Some(thread("1")));
        assert_eq!(store.get("2"), None);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let store = InMemoryThreadStore::new();
        store.insert(thread("1")).unwrap();

        let err = store.insert(thread("1")).unwrap_err();
        assert_eq!(err, ThreadStoreError::DuplicateId("1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = InMemoryThreadStore::new();
        for id in ["c", "a", "b"] {
            store.insert(thread(id)).unwrap();
        }
        assert_eq!(ids(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let store = InMemoryThreadStore::new();
        for id in ["1", "2", "3", "4"] {
            store.insert(thread(id)).unwrap();
        }

        assert_eq!(store.remove("2"), Some(thread("2")));
        assert_eq!(ids(&store), vec!["1", "3", "4"]);

        store.insert(thread("2")).unwrap();
        assert_eq!(ids(&store), vec!["1", "3", "4", "2"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let store = InMemoryThreadStore::new();
        store.insert(thread("1")).unwrap();

        assert_eq!(store.remove("nope"), None);
        assert_eq!(ids(&store), vec!["1"]);
    }

    #[test]
    fn test_update_applies_non_empty_fields() {
        let store = InMemoryThreadStore::new();
        store.insert(thread("1")).unwrap();

        let updated = store
            .update(
                "1",
                ThreadPatch {
                    title: Some(String::new()),
                    description: Some("new".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated.title, "title 1");
        assert_eq!(updated.description, "new");
        assert_eq!(store.get("1"), Some(updated));
    }

    #[test]
    fn test_update_missing_returns_none() {
        let store = InMemoryThreadStore::new();
        assert_eq!(store.update("1", ThreadPatch::default()), None);
    }

    #[test]
    fn test_concurrent_inserts_are_all_kept() {
        let store = Arc::new(InMemoryThreadStore::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for n in 0..50 {
                        store.insert(thread(&format!("{}-{}", worker, n))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 400);
    }

    #[test]
    fn test_concurrent_duplicate_insert_keeps_one() {
        let store = Arc::new(InMemoryThreadStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert(thread("same")).is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }
}
