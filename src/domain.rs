use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("invalid book id")]
    InvalidId,
    #[error("invalid number for {field}: `{value}`")]
    InvalidNumber { field: &'static str, value: String },
}

/// A single catalog entry, persisted one-per-file under the `books` directory.
///
/// Field names double as the on-disk JSON keys, so renaming a field here
/// changes the file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub page_count: i64,
    pub year: i64,
}

impl Book {
    /// Builds a `Book` from raw prompt input.
    ///
    /// Validates the id and parses both numeric fields before anything else
    /// is constructed, so a bad value never produces a half-filled record.
    ///
    /// # Errors
    /// - [`BookError::InvalidId`] if the id is empty or contains characters
    ///   that cannot appear in a file name.
    /// - [`BookError::InvalidNumber`] if the page count or year does not
    ///   parse as an integer.
    pub fn from_input(
        id: &str,
        title: &str,
        author: &str,
        publisher: &str,
        page_count: &str,
        year: &str,
    ) -> Result<Book, BookError> {
        let id = valid_id(id)?;
        let page_count = parse_number("page_count", page_count)?;
        let year = parse_number("year", year)?;

        Ok(Book {
            id,
            title: title.to_owned(),
            author: author.to_owned(),
            publisher: publisher.to_owned(),
            page_count,
            year,
        })
    }
}

/// A partial update to an existing [`Book`].
///
/// `None` fields leave the current value unchanged. Build one with
/// [`BookPatch::parse`] so numeric input is validated up front: a patch
/// either parses completely or does not exist at all.
#[derive(Debug, Default, Clone)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i64>,
    pub year: Option<i64>,
}

impl BookPatch {
    /// Parses raw prompt input into a patch. Empty (or whitespace-only)
    /// input for a field means "leave unchanged".
    ///
    /// # Errors
    /// Returns [`BookError::InvalidNumber`] if a non-empty page count or
    /// year fails to parse; no field of the patch survives the error.
    pub fn parse(
        title: &str,
        author: &str,
        publisher: &str,
        page_count: &str,
        year: &str,
    ) -> Result<BookPatch, BookError> {
        Ok(BookPatch {
            title: non_empty(title),
            author: non_empty(author),
            publisher: non_empty(publisher),
            page_count: parse_optional_number("page_count", page_count)?,
            year: parse_optional_number("year", year)?,
        })
    }

    /// True if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.publisher.is_none()
            && self.page_count.is_none()
            && self.year.is_none()
    }

    /// Applies every set field to `book` in place.
    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(publisher) = &self.publisher {
            book.publisher = publisher.clone();
        }
        if let Some(page_count) = self.page_count {
            book.page_count = page_count;
        }
        if let Some(year) = self.year {
            book.year = year;
        }
    }
}

/// Validates a proposed book id.
///
/// The id becomes part of a file name (`book-{id}.json`), so it is trimmed,
/// must be non-empty, and must not contain OS-invalid characters
/// (`/`, `\`, `:`, `"`, `*`, `?`, `<`, `>`, `|`).
pub fn valid_id(id: &str) -> Result<String, BookError> {
    let trimmed = id.trim();

    if trimmed.is_empty() {
        return Err(BookError::InvalidId);
    }

    if trimmed.contains(&['/', '\\', ':', '"', '*', '?', '<', '>', '|'][..]) {
        return Err(BookError::InvalidId);
    }

    Ok(trimmed.to_owned())
}

/// Parses a required integer field from raw input.
pub fn parse_number(field: &'static str, raw: &str) -> Result<i64, BookError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BookError::InvalidNumber {
            field,
            value: raw.trim().to_owned(),
        })
}

fn parse_optional_number(field: &'static str, raw: &str) -> Result<Option<i64>, BookError> {
    match non_empty(raw) {
        Some(value) => Ok(Some(parse_number(field, &value)?)),
        None => Ok(None),
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
