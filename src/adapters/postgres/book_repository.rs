use crate::domain::{Book, BookId, Genre};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, DuplicateBook, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをBookに変換する
///
/// genreは文字列からの変換でエラーハンドリングを行う。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let genre_str: &str = row.get("genre");
    let genre = Genre::from_str(genre_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Book {
        id: Some(BookId::new(row.get("id"))),
        title: row.get("title"),
        description: row.get("description"),
        author: row.get("author"),
        genre,
    })
}

/// 一意制約違反をDuplicateBookに変換する
///
/// それ以外のsqlxエラーはそのまま返す。
fn map_save_error(err: sqlx::Error, book: &Book) -> Box<dyn std::error::Error + Send + Sync> {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return Box::new(DuplicateBook {
                title: book.title.clone(),
                author: book.author.clone(),
            });
        }
    }
    Box::new(err)
}

/// BookRepositoryのPostgreSQL実装
///
/// `books`テーブル（migrations/0001_create_books.sql）に対するCRUDを提供する。
/// (title, author)の一意性はテーブルのUNIQUE制約が保証する。
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQLコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    /// 全書籍を取得（ID昇順）
    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, author, genre
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_book).collect()
    }

    /// IDで書籍を取得
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, author, genre
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    async fn exists_by_id(&self, id: BookId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM books WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// 書籍を保存
    ///
    /// IDなしはINSERT（IDはIDENTITY列が採番）、IDありはレコード全体をUPDATE。
    /// UPDATE対象の行がなければRowNotFoundを返す。
    async fn save(&self, book: Book) -> Result<Book> {
        let result = match book.id {
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO books (title, description, author, genre)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, title, description, author, genre
                    "#,
                )
                .bind(&book.title)
                .bind(&book.description)
                .bind(&book.author)
                .bind(book.genre.as_str())
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE books
                    SET title = $2,
                        description = $3,
                        author = $4,
                        genre = $5
                    WHERE id = $1
                    RETURNING id, title, description, author, genre
                    "#,
                )
                .bind(id.value())
                .bind(&book.title)
                .bind(&book.description)
                .bind(&book.author)
                .bind(book.genre.as_str())
                .fetch_one(&self.pool)
                .await
            }
        };

        let row = result.map_err(|e| map_save_error(e, &book))?;
        map_row_to_book(&row)
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// (author, title)の組が未登録か確認
    async fn is_unique_book(&self, author: &str, title: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author = $1 AND title = $2")
                .bind(author)
                .bind(title)
                .fetch_one(&self.pool)
                .await?;

        Ok(count == 0)
    }
}
