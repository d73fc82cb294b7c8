//! In-memory book store
//!
//! Books are kept in insertion order behind a single read/write lock.
//! Readers share the lock; every mutation holds the write guard for its
//! whole duration, so ids are assigned and records appended atomically.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookData},
};

const NOT_FOUND: &str = "Book not found";

#[derive(Debug, Default)]
struct Shelf {
    books: Vec<Book>,
    /// Last id handed out; ids are never reused after a delete
    last_id: u64,
}

impl Shelf {
    fn find_index_by_id(&self, id: u64) -> AppResult<usize> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    fn next_id(&self) -> AppResult<u64> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("Book id counter exhausted".to_string()))?;
        if self.find_index_by_id(id).is_ok() {
            return Err(AppError::Internal(format!("Book id {} already assigned", id)));
        }
        Ok(id)
    }
}

/// Handle to a shared book collection
///
/// Clones share the same collection; `BooksRepository::default()` starts an
/// independent, empty one.
#[derive(Clone, Default)]
pub struct BooksRepository {
    shelf: Arc<RwLock<Shelf>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.shelf.read().await.books.clone()
    }

    /// Store a new book and return it with its assigned id
    pub async fn add(&self, data: BookData) -> AppResult<Book> {
        let mut shelf = self.shelf.write().await;
        let id = shelf.next_id()?;
        let book = Book::new(id, data);
        shelf.books.push(book.clone());
        shelf.last_id = id;
        Ok(book)
    }

    /// Position of a book in the listing order
    pub async fn find_index_by_id(&self, id: u64) -> AppResult<usize> {
        self.shelf.read().await.find_index_by_id(id)
    }

    /// Get a book by ID
    pub async fn find_by_id(&self, id: u64) -> AppResult<Book> {
        let shelf = self.shelf.read().await;
        let index = shelf.find_index_by_id(id)?;
        Ok(shelf.books[index].clone())
    }

    /// Replace every field but the id of an existing book
    pub async fn update_by_id(&self, id: u64, data: BookData) -> AppResult<Book> {
        let mut shelf = self.shelf.write().await;
        let index = shelf.find_index_by_id(id)?;
        let book = &mut shelf.books[index];
        book.replace(data);
        Ok(book.clone())
    }

    /// Remove a book, keeping the order of the remaining ones
    pub async fn delete_by_id(&self, id: u64) -> AppResult<()> {
        let mut shelf = self.shelf.write().await;
        let index = shelf.find_index_by_id(id)?;
        shelf.books.remove(index);
        Ok(())
    }
}
