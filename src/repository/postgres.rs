use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use super::{NoteStore, StoreError, StoreResult, embedded::migrations};
use crate::models::{NewNote, Note};

pub struct PgNoteStore {
    client: Client,
}

impl PgNoteStore {
    pub async fn new(database_dsn: &str) -> Result<Self, StoreError> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), StoreError> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    fn client(&self) -> StoreResult<&Client> {
        if self.client.is_closed() {
            return Err(StoreError::Unavailable(
                "database connection is closed".to_string(),
            ));
        }
        Ok(&self.client)
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        note_name: row.get("note_name"),
        note_body: row.get("note_body"),
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn insert(&self, note: NewNote) -> StoreResult<Note> {
        let row = self
            .client()?
            .query_one(
                "INSERT INTO notes (note_name, note_body) VALUES ($1, $2) \
                 RETURNING id, note_name, note_body",
                &[&note.note_name, &note.note_body],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Note>> {
        let row = self
            .client()?
            .query_opt(
                "SELECT id, note_name, note_body FROM notes WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        let rows = self
            .client()?
            .query("SELECT id, note_name, note_body FROM notes ORDER BY id", &[])
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn update(&self, id: i64, note: NewNote) -> StoreResult<Option<Note>> {
        let row = self
            .client()?
            .query_opt(
                "UPDATE notes SET note_name = $1, note_body = $2 WHERE id = $3 \
                 RETURNING id, note_name, note_body",
                &[&note.note_name, &note.note_body, &id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let rows = self
            .client()?
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }
}
