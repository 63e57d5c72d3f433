//! Library exercise: a small book taxonomy.

pub mod book;

pub use book::{AudioBook, Book, Document, PaperBook};
