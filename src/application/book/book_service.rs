use crate::domain::{Book, BookId};
use crate::ports::{BookRepository, DuplicateBook};
use std::sync::Arc;

use super::errors::{BookApplicationError, Result};

/// 書籍管理サービス
///
/// ビジネスルール（存在確認と(title, author)の一意性）を強制し、
/// それ以外はリポジトリに委譲する。リポジトリはコンストラクタで注入される。
///
/// # 一貫性保証
///
/// 挿入前の一意性確認と`save`の間にはロックがない。同じ(title, author)の
/// 同時挿入は両方が事前確認を通過しうるが、ストアの一意制約が最終判定となり、
/// 敗れた側も`AlreadyExists`として報告される。
#[derive(Clone)]
pub struct BookManagerService {
    repository: Arc<dyn BookRepository>,
}

/// `save`のエラーを変換する
///
/// 一意制約違反は`AlreadyExists`、それ以外はリポジトリエラーとする。
fn map_save_error(err: Box<dyn std::error::Error + Send + Sync>) -> BookApplicationError {
    match err.downcast::<DuplicateBook>() {
        Ok(duplicate) => {
            let DuplicateBook { title, author } = *duplicate;
            BookApplicationError::AlreadyExists { title, author }
        }
        Err(err) => BookApplicationError::RepositoryError(err),
    }
}

impl BookManagerService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// 全書籍を取得する
    ///
    /// ストアが空なら空のVecを返す。
    pub async fn get_all_books(&self) -> Result<Vec<Book>> {
        let books = self
            .repository
            .find_all()
            .await
            .map_err(BookApplicationError::RepositoryError)?;

        tracing::debug!(count = books.len(), "listed books");
        Ok(books)
    }

    /// 書籍を登録する
    ///
    /// ビジネスルール：
    /// - 同じ(title, author)の書籍が存在しないこと
    ///
    /// 候補が持つIDは無視され、常に新規レコードとして採番される。
    /// 一意性確認に失敗した場合`save`は呼ばれない。
    pub async fn insert_book(&self, candidate: Book) -> Result<Book> {
        let is_unique = self
            .repository
            .is_unique_book(&candidate.author, &candidate.title)
            .await
            .map_err(BookApplicationError::RepositoryError)?;

        if !is_unique {
            tracing::warn!(
                title = %candidate.title,
                author = %candidate.author,
                "rejected duplicate book"
            );
            return Err(BookApplicationError::AlreadyExists {
                title: candidate.title,
                author: candidate.author,
            });
        }

        let saved = self
            .repository
            .save(candidate.without_id())
            .await
            .map_err(map_save_error)?;

        tracing::info!(id = ?saved.id, title = %saved.title, "inserted book");
        Ok(saved)
    }

    /// IDで書籍を取得する
    pub async fn get_book_by_id(&self, id: BookId) -> Result<Book> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(BookApplicationError::RepositoryError)?
            .ok_or(BookApplicationError::NotFound(id))
    }

    /// IDの書籍を更新する
    ///
    /// ID以外の全フィールド（title, description, author, genre）を
    /// `updates`の値で置き換える。IDは上書きされない。
    /// 更新後の書籍は返さない（必要なら再取得する）。
    pub async fn update_book_by_id(&self, id: BookId, updates: Book) -> Result<()> {
        let existing = self.get_book_by_id(id).await?;

        let updated = Book {
            id: existing.id,
            title: updates.title,
            description: updates.description,
            author: updates.author,
            genre: updates.genre,
        };

        self.repository
            .save(updated)
            .await
            .map_err(map_save_error)?;

        tracing::info!(%id, "updated book");
        Ok(())
    }

    /// IDの書籍を削除する
    pub async fn delete_book_by_id(&self, id: BookId) -> Result<()> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(BookApplicationError::RepositoryError)?;

        if !exists {
            tracing::warn!(%id, "attempted to delete missing book");
            return Err(BookApplicationError::NotFound(id));
        }

        self.repository
            .delete_by_id(id)
            .await
            .map_err(BookApplicationError::RepositoryError)?;

        tracing::info!(%id, "deleted book");
        Ok(())
    }
}
