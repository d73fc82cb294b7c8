//! Data models for Bookshelf

pub mod book;

pub use book::{Book, BookData};
