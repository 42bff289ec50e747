//! Book models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Book record as held in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    /// Free-form, stored as sent
    #[schema(value_type = Option<Object>)]
    pub year: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub author: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub summary: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub publisher: Option<Value>,
    /// Total number of pages
    pub page_count: u32,
    /// Pages read so far, never greater than `page_count`
    pub read_page: u32,
    pub reading: bool,
    /// `true` when `read_page == page_count`
    pub finished: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a checked payload. `name` comes from
    /// [`BookPayload::name`] once validated.
    pub fn new(id: String, name: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        let finished = payload.is_finished();
        Self {
            id,
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            reading: payload.reading,
            finished,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every user-editable field, keeping `id` and `inserted_at`.
    pub fn apply(&mut self, name: String, payload: BookPayload, now: DateTime<Utc>) {
        self.finished = payload.is_finished();
        self.name = name;
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.updated_at = now;
    }

    pub fn to_short(&self) -> BookShort {
        BookShort {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Short representation used in list results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    #[schema(value_type = Option<Object>)]
    pub publisher: Option<Value>,
}

/// Create / update request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Required, must not be empty
    pub name: Option<String>,
    /// Free-form, stored as sent
    #[schema(value_type = Option<Object>)]
    pub year: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub author: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub summary: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub publisher: Option<Value>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

impl BookPayload {
    /// The book name, if present and not empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn read_page_exceeds_count(&self) -> bool {
        self.read_page > self.page_count
    }

    pub fn is_finished(&self) -> bool {
        self.read_page == self.page_count
    }
}

/// Boolean query flag. `1` (or `true`) is yes, any other value is no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn as_bool(self) -> bool {
        matches!(self, Flag::Yes)
    }
}

impl From<String> for Flag {
    fn from(value: String) -> Self {
        match value.as_str() {
            "1" | "true" => Flag::Yes,
            _ => Flag::No,
        }
    }
}

/// Query parameters for listing books.
///
/// Absent flags apply no filter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// `1` keeps books being read, any other value keeps the rest
    #[param(value_type = Option<String>)]
    pub reading: Option<Flag>,
    /// `1` keeps finished books, any other value keeps unfinished ones
    #[param(value_type = Option<String>)]
    pub finished: Option<Flag>,
    /// Only books with exactly this name
    pub book_name: Option<String>,
}

impl BookQuery {
    pub fn matches(&self, book: &Book) -> bool {
        self.reading.map_or(true, |flag| book.reading == flag.as_bool())
            && self.finished.map_or(true, |flag| book.finished == flag.as_bool())
            && self.book_name.as_ref().map_or(true, |name| &book.name == name)
    }
}
