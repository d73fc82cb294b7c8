//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Identifier assigned by the store, never reused
    pub id: u64,
    pub title: String,
    pub author: String,
    /// ISBN, stored as given
    pub isbn: String,
}

impl Book {
    pub fn new(id: u64, data: BookData) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            isbn: data.isbn,
        }
    }

    /// Replace every field except the id
    pub fn replace(&mut self, data: BookData) {
        self.title = data.title;
        self.author = data.author;
        self.isbn = data.isbn;
    }
}

/// Create or replace book request
///
/// An `id` key in the payload is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookData {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
}
