use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub note_name: String,
    /// Note text
    pub note_body: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            note_name: note.note_name,
            note_body: note.note_body,
        }
    }
}

// Fields are optional on the wire, presence is checked by the service.

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    /// Note title, required
    pub note_name: Option<String>,
    /// Note text, required
    pub note_body: Option<String>,
}

impl CreateNoteRequest {
    pub fn new(note_name: impl Into<String>, note_body: impl Into<String>) -> Self {
        Self {
            note_name: Some(note_name.into()),
            note_body: Some(note_body.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    /// New note title, replaces the stored one
    pub note_name: Option<String>,
    /// New note text, replaces the stored one
    pub note_body: Option<String>,
}

impl UpdateNoteRequest {
    pub fn new(note_name: impl Into<String>, note_body: impl Into<String>) -> Self {
        Self {
            note_name: Some(note_name.into()),
            note_body: Some(note_body.into()),
        }
    }
}
