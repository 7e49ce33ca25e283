use serde::{Deserialize, Serialize};

use crate::domain::{Book, Genre};

/// 書籍の登録・更新リクエスト（POST /api/v1/book と PUT /api/v1/book/:id）
///
/// IDはストアが採番するため受け付けない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub author: String,
    pub genre: Genre,
}

impl BookRequest {
    /// リクエストを未永続化の書籍に変換する
    pub fn into_book(self) -> Book {
        Book::new(self.title, self.description, self.author, self.genre)
    }
}

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub genre: Genre,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.map(|id| id.value()),
            title: book.title,
            description: book.description,
            author: book.author,
            genre: book.genre,
        }
    }
}

/// エラーレスポンス
///
/// `status`はHTTPステータスコードの文字列表現。
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }
}
