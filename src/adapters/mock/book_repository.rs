use crate::domain::{Book, BookId};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, DuplicateBook, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory implementation of BookRepository
///
/// Honors the same contract as the PostgreSQL adapter: ids are assigned
/// from 1 on insert, (title, author) pairs are unique, and updating an
/// unknown id is an error.
pub struct BookRepository {
    state: Mutex<State>,
}

struct State {
    books: BTreeMap<BookId, Book>,
    next_id: i64,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                books: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Whether another book already holds (title, author)
    fn conflicts(&self, book: &Book) -> bool {
        self.books
            .values()
            .any(|other| other.id != book.id && other.has_same_identity(&book.title, &book.author))
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.state.lock().unwrap().books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        Ok(self.state.lock().unwrap().books.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: BookId) -> Result<bool> {
        Ok(self.state.lock().unwrap().books.contains_key(&id))
    }

    async fn save(&self, book: Book) -> Result<Book> {
        let mut state = self.state.lock().unwrap();

        if state.conflicts(&book) {
            return Err(Box::new(DuplicateBook {
                title: book.title,
                author: book.author,
            }));
        }

        let id = book.id;
        let book = match id {
            Some(id) if !state.books.contains_key(&id) => {
                return Err(format!("book {} does not exist", id).into());
            }
            Some(_) => book,
            None => {
                let id = BookId::new(state.next_id);
                state.next_id += 1;
                book.with_id(id)
            }
        };

        if let Some(id) = book.id {
            state.books.insert(id, book.clone());
        }
        Ok(book)
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        self.state.lock().unwrap().books.remove(&id);
        Ok(())
    }

    async fn is_unique_book(&self, author: &str, title: &str) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(!state
            .books
            .values()
            .any(|book| book.has_same_identity(title, author)))
    }
}
