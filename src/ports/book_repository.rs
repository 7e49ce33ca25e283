use crate::domain::{Book, BookId};
use async_trait::async_trait;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// (title, author)の一意制約違反
///
/// ストアの`save`が一意制約に違反したときに返す。
/// アプリケーション層はこのエラーをダウンキャストして識別する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("book with title {title} and author {author} violates the unique constraint")]
pub struct DuplicateBook {
    pub title: String,
    pub author: String,
}

/// 書籍リポジトリポート
///
/// 書籍レコードに対する汎用CRUDと、(title, author)の一意性確認クエリを提供する。
/// ストアが唯一の真実の情報源であり、サービスは書籍を保持しない。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 全書籍を取得する（ID昇順）
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// IDで書籍を取得する
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// IDの書籍が存在するか確認する
    async fn exists_by_id(&self, id: BookId) -> Result<bool>;

    /// 書籍を保存する
    ///
    /// `id`が`None`ならINSERTしてストアがIDを採番する。
    /// `id`があればレコード全体をUPDATEする（存在しないIDはエラー）。
    /// 一意制約違反は`DuplicateBook`で返す。
    async fn save(&self, book: Book) -> Result<Book>;

    /// IDの書籍を削除する
    ///
    /// 存在確認は呼び出し側（サービス）の責務。
    async fn delete_by_id(&self, id: BookId) -> Result<()>;

    /// (author, title)の組を持つ書籍が存在しなければtrueを返す
    async fn is_unique_book(&self, author: &str, title: &str) -> Result<bool>;
}
