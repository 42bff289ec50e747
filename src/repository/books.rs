//! In-memory book store

use super::BookStore;
use crate::models::Book;

/// Book store held in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: Vec<Book>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookStore for MemoryBookStore {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    fn replace_at(&mut self, index: usize, book: Book) -> Option<Book> {
        let slot = self.books.get_mut(index)?;
        Some(std::mem::replace(slot, book))
    }

    fn remove_at(&mut self, index: usize) -> Option<Book> {
        if index < self.books.len() {
            Some(self.books.remove(index))
        } else {
            None
        }
    }
}
