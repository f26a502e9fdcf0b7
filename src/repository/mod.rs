mod embedded;
mod memory;
mod postgres;

pub use memory::InMemoryNoteStore;
pub use postgres::PgNoteStore;

use async_trait::async_trait;

use crate::models::{NewNote, Note};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("migration error: {0}")]
    Migration(#[from] refinery::Error),

    #[error("note storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence primitives over the `notes` table.
///
/// Absent rows are reported as `None`/`false`; only infrastructure faults are
/// errors.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persists a note and returns it with its freshly assigned id.
    async fn insert(&self, note: NewNote) -> StoreResult<Note>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Note>>;

    /// All notes, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Note>>;

    /// Replaces both text fields of the note with the given id.
    async fn update(&self, id: i64, note: NewNote) -> StoreResult<Option<Note>>;

    /// Returns `false` when no note with the given id exists.
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;
}
