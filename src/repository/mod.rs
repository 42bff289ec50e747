//! Repository layer for book storage

pub mod books;

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Book;

pub use books::MemoryBookStore;

/// Ordered sequence of book records.
///
/// Implementations keep insertion order; `find_*` scan that order.
pub trait BookStore: Send + Sync {
    /// All records, in insertion order
    fn books(&self) -> &[Book];

    fn append(&mut self, book: Book);

    /// Replace the record at `index`, returning the previous one
    fn replace_at(&mut self, index: usize, book: Book) -> Option<Book>;

    fn remove_at(&mut self, index: usize) -> Option<Book>;

    fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books().iter().find(|book| book.id == id)
    }

    fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.books().iter().position(|book| book.id == id)
    }
}

/// Shared handle to the book store.
///
/// Each guard covers one whole operation, so a lookup and the mutation
/// that follows it see the same sequence.
#[derive(Clone)]
pub struct Repository {
    books: Arc<RwLock<dyn BookStore>>,
}

impl Repository {
    /// Create a repository over the given store
    pub fn new<S: BookStore + 'static>(store: S) -> Self {
        let books: Arc<RwLock<dyn BookStore>> = Arc::new(RwLock::new(store));
        Self { books }
    }

    /// Create a repository backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(MemoryBookStore::default())
    }

    pub fn read(&self) -> RwLockReadGuard<'_, dyn BookStore> {
        self.books.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, dyn BookStore> {
        self.books.write()
    }
}
