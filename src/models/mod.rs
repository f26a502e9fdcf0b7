/// A note as persisted by a [`crate::repository::NoteStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub note_name: String,
    pub note_body: String,
}

/// Note contents that have not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub note_name: String,
    pub note_body: String,
}

impl NewNote {
    pub fn new(note_name: impl Into<String>, note_body: impl Into<String>) -> Self {
        Self {
            note_name: note_name.into(),
            note_body: note_body.into(),
        }
    }

    pub fn with_id(self, id: i64) -> Note {
        Note {
            id,
            note_name: self.note_name,
            note_body: self.note_body,
        }
    }
}
