//! Book catalog service

use crate::{
    error::AppResult,
    models::book::{Book, BookData},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: u64) -> AppResult<Book> {
        tracing::debug!("Looking up book {}", id);
        self.repository.books.find_by_id(id).await
    }

    pub async fn create(&self, data: BookData) -> AppResult<Book> {
        let book = self.repository.books.add(data).await?;
        tracing::info!("Book {} created: {:?}", book.id, book.title);
        Ok(book)
    }

    pub async fn update(&self, id: u64, data: BookData) -> AppResult<Book> {
        let book = self.repository.books.update_by_id(id, data).await?;
        tracing::info!("Book {} updated", id);
        Ok(book)
    }

    pub async fn delete(&self, id: u64) -> AppResult<()> {
        self.repository.books.delete_by_id(id).await?;
        tracing::info!("Book {} deleted", id);
        Ok(())
    }
}
