mod common;

use book_manager::adapters::postgres::PostgresBookRepository;
use book_manager::application::book::{BookApplicationError, BookManagerService};
use book_manager::domain::{Book, BookId, Genre};
use book_manager::ports::{BookRepository, DuplicateBook};
use serial_test::serial;
use std::sync::Arc;

// PostgreSQLが必要なテストは `cargo test -- --ignored` で実行する

async fn setup() -> PostgresBookRepository {
    let pool = common::create_test_pool().await;
    common::cleanup_books(&pool).await;
    PostgresBookRepository::new(pool)
}

fn book(title: &str, author: &str, genre: Genre) -> Book {
    Book::new(
        title,
        Some(format!("This is the description for {}", title)),
        author,
        genre,
    )
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_find_all_returns_saved_books() {
    let repo = setup().await;

    repo.save(book("Book One", "Person One", Genre::Education))
        .await
        .expect("Failed to save book");

    let books = repo.find_all().await.expect("Failed to list books");
    assert_eq!(books.len(), 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_save_and_find_by_id() {
    let repo = setup().await;

    let saved = repo
        .save(book("Book Two", "Person Two", Genre::Fantasy))
        .await
        .expect("Failed to save book");
    let id = saved.id.expect("store must assign an id");

    let found = repo.find_by_id(id).await.expect("Failed to find book");
    assert_eq!(found, Some(saved));
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_save_with_id_updates_full_record() {
    let repo = setup().await;
    let saved = repo
        .save(book("Book Three", "Person Three", Genre::Fiction))
        .await
        .unwrap();

    let updated = Book {
        description: None,
        genre: Genre::Horror,
        ..saved.clone()
    };
    let result = repo.save(updated.clone()).await.unwrap();

    assert_eq!(result, updated);
    assert_eq!(repo.find_by_id(saved.id.unwrap()).await.unwrap(), Some(updated));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_create_and_delete_book() {
    let repo = setup().await;
    let saved = repo
        .save(book("Book Four", "Person Four", Genre::Fantasy))
        .await
        .unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(id).await.unwrap();

    assert!(!repo.exists_by_id(id).await.unwrap());
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_unique_constraint_maps_to_duplicate_book() {
    let repo = setup().await;
    repo.save(book("Book One", "Person One", Genre::Education))
        .await
        .unwrap();

    assert!(!repo.is_unique_book("Person One", "Book One").await.unwrap());
    assert!(repo.is_unique_book("Person Two", "Book One").await.unwrap());

    let err = repo
        .save(book("Book One", "Person One", Genre::Romance))
        .await
        .unwrap_err();
    let duplicate = err
        .downcast_ref::<DuplicateBook>()
        .expect("unique violation must map to DuplicateBook");
    assert_eq!(duplicate.title, "Book One");
    assert_eq!(duplicate.author, "Person One");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_service_scenario_against_postgres() {
    let repo = Arc::new(setup().await);
    let service = BookManagerService::new(repo.clone());

    let inserted = service
        .insert_book(Book::new("Book One", None, "Person One", Genre::Education))
        .await
        .unwrap();
    assert!(inserted.id.is_some());

    let err = service
        .insert_book(Book::new("Book One", None, "Person One", Genre::Education))
        .await
        .unwrap_err();
    assert!(matches!(err, BookApplicationError::AlreadyExists { .. }));

    let err = service
        .delete_book_by_id(BookId::new(999999))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Book with ID 999999 is not found");
}
