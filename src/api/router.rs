use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_book, delete_book_by_id, get_all_books, get_book_by_id, update_book_by_id,
};

/// Creates the API router with all book management endpoints
///
/// - GET /api/v1/book - List all books
/// - POST /api/v1/book - Add a book
/// - GET /api/v1/book/:id - Get a book
/// - PUT /api/v1/book/:id - Update a book
/// - DELETE /api/v1/book/:id - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/api/v1/book", get(get_all_books).post(add_book))
        .route(
            "/api/v1/book/:id",
            get(get_book_by_id)
                .put(update_book_by_id)
                .delete(delete_book_by_id),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
