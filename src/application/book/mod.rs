mod book_service;
mod errors;

pub use book_service::BookManagerService;
pub use errors::{BookApplicationError, Result};
