use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{NoteStore, StoreResult};
use crate::models::{NewNote, Note};

/// Process-local store, ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    notes: BTreeMap<i64, Note>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn insert(&self, note: NewNote) -> StoreResult<Note> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let note = note.with_id(inner.last_id);
        inner.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Note>> {
        Ok(self.inner.lock().await.notes.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        Ok(self.inner.lock().await.notes.values().cloned().collect())
    }

    async fn update(&self, id: i64, note: NewNote) -> StoreResult<Option<Note>> {
        let mut inner = self.inner.lock().await;
        Ok(inner.notes.get_mut(&id).map(|stored| {
            stored.note_name = note.note_name;
            stored.note_body = note.note_body;
            stored.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        Ok(self.inner.lock().await.notes.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryNoteStore::new();

        let first = store.insert(NewNote::new("a", "1")).await.unwrap();
        let second = store.insert(NewNote::new("b", "2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryNoteStore::new();

        let first = store.insert(NewNote::new("a", "1")).await.unwrap();
        assert!(store.delete_by_id(first.id).await.unwrap());
        let second = store.insert(NewNote::new("b", "2")).await.unwrap();

        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = InMemoryNoteStore::new();
        let note = store.insert(NewNote::new("old", "old body")).await.unwrap();

        let updated = store
            .update(note.id, NewNote::new("new", "new body"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated, NewNote::new("new", "new body").with_id(note.id));
        assert_eq!(store.find_by_id(note.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn unknown_ids_are_reported_as_absent() {
        let store = InMemoryNoteStore::new();

        assert_eq!(store.find_by_id(7).await.unwrap(), None);
        assert_eq!(store.update(7, NewNote::new("x", "y")).await.unwrap(), None);
        assert!(!store.delete_by_id(7).await.unwrap());
    }
}
