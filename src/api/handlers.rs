use crate::application::book::BookManagerService;
use crate::domain::BookId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookRequest, BookResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub book_service: BookManagerService,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /api/v1/book - 全書籍を取得
pub async fn get_all_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.book_service.get_all_books().await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /api/v1/book/:id - IDで書籍を取得
///
/// 見つからない場合は404を返す。
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.book_service.get_book_by_id(BookId::new(id)).await?;

    Ok(Json(BookResponse::from(book)))
}

// ============================================================================
// Command handlers (POST / PUT / DELETE)
// ============================================================================

/// POST /api/v1/book - 書籍を登録
///
/// 強制されるビジネスルール:
/// - 同じ(title, author)の書籍が存在しないこと（違反時は409）
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let book = state.book_service.insert_book(req.into_book()).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// PUT /api/v1/book/:id - 書籍を更新
///
/// 更新後の書籍を再取得して返す。
pub async fn update_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let id = BookId::new(id);

    state
        .book_service
        .update_book_by_id(id, req.into_book())
        .await?;

    // 更新された書籍を取得して返す
    let book = state.book_service.get_book_by_id(id).await?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /api/v1/book/:id - 書籍を削除
pub async fn delete_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .book_service
        .delete_book_by_id(BookId::new(id))
        .await?;

    Ok(StatusCode::OK)
}
