use crate::domain::BookId;
use thiserror::Error;

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// 指定IDの書籍が存在しない
    #[error("Book with ID {0} is not found")]
    NotFound(BookId),

    /// (title, author)の組が既に存在する
    #[error("title {title} with author {author} already exists")]
    AlreadyExists { title: String, author: String },

    /// BookRepositoryのエラー
    #[error("Book repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = BookApplicationError::NotFound(BookId::new(999999));
        assert_eq!(err.to_string(), "Book with ID 999999 is not found");
    }

    #[test]
    fn test_already_exists_message() {
        let err = BookApplicationError::AlreadyExists {
            title: "Book One".to_string(),
            author: "Person One".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "title Book One with author Person One already exists"
        );
    }

    #[test]
    fn test_repository_error_keeps_source() {
        let source: Box<dyn std::error::Error + Send + Sync> = "connection reset".into();
        let err = BookApplicationError::RepositoryError(source);
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source, Some("connection reset".to_string()));
    }
}
