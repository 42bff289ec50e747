//! Book management service

use std::sync::Arc;

use chrono::Utc;

use super::IdGenerator;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload, BookQuery, BookShort},
    repository::Repository,
};

/// Which write a payload is checked for; selects the failure message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Update,
}

impl Action {
    fn failure(self) -> &'static str {
        match self {
            Action::Add => "Failed to add book",
            Action::Update => "Failed to update book",
        }
    }
}

/// Check a create/update payload and return the book name.
fn validate(payload: &BookPayload, action: Action) -> AppResult<String> {
    let name = payload.name().ok_or_else(|| {
        AppError::Validation(format!("{}. Please provide the book name", action.failure()))
    })?;

    if payload.read_page_exceeds_count() {
        return Err(AppError::Validation(format!(
            "{}. readPage must not be greater than pageCount",
            action.failure()
        )));
    }

    Ok(name.to_string())
}

fn not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    ids: Arc<dyn IdGenerator>,
}

impl BooksService {
    pub fn new(repository: Repository, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Validate and store a new book
    pub fn create(&self, payload: BookPayload) -> AppResult<Book> {
        let name = validate(&payload, Action::Add)?;
        let book = Book::new(self.ids.generate(), name, payload, Utc::now());

        self.repository.write().append(book.clone());
        tracing::info!(book_id = %book.id, "Book added");
        Ok(book)
    }

    /// List books matching the query, projected to `{id, name, publisher}`.
    ///
    /// `reading` and `finished` narrow the set first; `bookName` then keeps
    /// only the records whose name equals it exactly.
    pub fn list(&self, query: &BookQuery) -> Vec<BookShort> {
        self.repository
            .read()
            .books()
            .iter()
            .filter(|book| query.matches(book))
            .map(Book::to_short)
            .collect()
    }

    /// Number of books on the shelf
    pub fn count(&self) -> usize {
        self.repository.read().books().len()
    }

    pub fn get(&self, id: &str) -> AppResult<Book> {
        self.repository
            .read()
            .find_by_id(id)
            .cloned()
            .ok_or_else(not_found)
    }

    /// Replace every field of an existing book except its id and insertion
    /// time. An unknown id fails before the payload is looked at.
    pub fn update(&self, id: &str, payload: BookPayload) -> AppResult<Book> {
        let mut store = self.repository.write();
        let index = store.find_index_by_id(id).ok_or_else(not_found)?;
        let name = validate(&payload, Action::Update)?;

        let mut book = store.books()[index].clone();
        book.apply(name, payload, Utc::now());
        store.replace_at(index, book.clone()).ok_or_else(not_found)?;

        tracing::info!(book_id = %id, "Book updated");
        Ok(book)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut store = self.repository.write();
        let removed = store
            .find_index_by_id(id)
            .and_then(|index| store.remove_at(index));

        match removed {
            Some(_) => {
                tracing::info!(book_id = %id, "Book deleted");
                Ok(())
            }
            None => Err(AppError::NotFound(
                "Failed to delete book. Id not found".to_string(),
            )),
        }
    }
}
