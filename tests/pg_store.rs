//! Runs against a live database: `PG_DSN=... cargo test -- --ignored`

use notes_server::{
    models::NewNote,
    repository::{NoteStore, PgNoteStore},
};

async fn store() -> PgNoteStore {
    let dsn = std::env::var("PG_DSN").expect("PG_DSN must point at a test database");
    let mut store = PgNoteStore::new(&dsn).await.unwrap();
    store.migrate().await.unwrap();
    store
}

#[tokio::test]
#[ignore = "requires a running postgres"]
async fn pg_store_crud() {
    let store = store().await;

    let created = store
        .insert(NewNote::new("pg name", "pg body"))
        .await
        .unwrap();
    assert!(created.id > 0);

    assert_eq!(
        store.find_by_id(created.id).await.unwrap(),
        Some(created.clone())
    );
    assert!(store.find_all().await.unwrap().contains(&created));

    let updated = store
        .update(created.id, NewNote::new("pg name 2", "pg body 2"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated, NewNote::new("pg name 2", "pg body 2").with_id(created.id));

    assert!(store.delete_by_id(created.id).await.unwrap());
    assert!(!store.delete_by_id(created.id).await.unwrap());
    assert_eq!(store.find_by_id(created.id).await.unwrap(), None);
    assert_eq!(
        store
            .update(created.id, NewNote::new("gone", "gone"))
            .await
            .unwrap(),
        None
    );
}
