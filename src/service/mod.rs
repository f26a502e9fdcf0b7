use crate::{
    dto::{CreateNoteRequest, UpdateNoteRequest},
    models::{NewNote, Note},
    repository::{NoteStore, StoreError},
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum NoteServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Note with id: {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateNoteRequest) -> NoteServiceResult<Note> {
        let note = command(request.note_name, request.note_body)?;
        Ok(self.store.insert(note).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> NoteServiceResult<Note> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(NoteServiceError::NotFound(id))
    }

    pub async fn list_all(&self) -> NoteServiceResult<Vec<Note>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn update(&self, id: i64, request: UpdateNoteRequest) -> NoteServiceResult<Note> {
        let note = command(request.note_name, request.note_body)?;
        self.store
            .update(id, note)
            .await?
            .ok_or(NoteServiceError::NotFound(id))
    }

    pub async fn delete_by_id(&self, id: i64) -> NoteServiceResult<()> {
        if self.store.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(NoteServiceError::NotFound(id))
        }
    }
}

fn command(note_name: Option<String>, note_body: Option<String>) -> NoteServiceResult<NewNote> {
    match (note_name, note_body) {
        (Some(note_name), Some(note_body)) => Ok(NewNote {
            note_name,
            note_body,
        }),
        (None, None) => Err(NoteServiceError::Validation(
            "noteName and noteBody must be provided".to_string(),
        )),
        (None, _) => Err(NoteServiceError::Validation(
            "noteName must be provided".to_string(),
        )),
        (_, None) => Err(NoteServiceError::Validation(
            "noteBody must be provided".to_string(),
        )),
    }
}
