use crate::application::book::BookApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(BookApplicationError);

impl From<BookApplicationError> for ApiError {
    fn from(err: BookApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // 404 Not Found - リクエストされた書籍が存在しない
            BookApplicationError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            // 409 Conflict - (title, author)の重複
            BookApplicationError::AlreadyExists { .. } => {
                (StatusCode::CONFLICT, self.0.to_string())
            }

            // 500 Internal Server Error - ストア障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            BookApplicationError::RepositoryError(e) => {
                tracing::error!("Book repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(status.as_u16().to_string(), message));
        (status, body).into_response()
    }
}
