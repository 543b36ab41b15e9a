use crate::domain::{Book, BookPatch};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("book id already in use: {0}")]
    DuplicateId(String),

    #[error("book not found: {0}")]
    NotFound(String),
}

/// The in-memory collection of books for the current run.
///
/// Insertion order is preserved and every lookup is a linear scan; a
/// personal library stays small enough that no index is worth keeping.
/// The one invariant is uniqueness: no two books ever share an id.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { books: Vec::new() }
    }

    /// Wraps books already known to have distinct ids (e.g. read back from
    /// the store, where the id is the file name and cannot repeat).
    pub fn from_books(books: Vec<Book>) -> Self {
        Catalog { books }
    }

    /// Appends a book to the end of the catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] if a book with the same id is
    /// already present; the catalog is left untouched.
    pub fn add(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.contains(&book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }

        self.books.push(book);
        Ok(())
    }

    /// Finds a book by id.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if no book has the given id.
    pub fn find(&self, id: &str) -> Result<&Book, CatalogError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_owned()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.books.iter().any(|book| book.id == id)
    }

    /// Removes a book by id, returning the removed record.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if no book has the given id.
    pub fn remove(&mut self, id: &str) -> Result<Book, CatalogError> {
        let position = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_owned()))?;

        Ok(self.books.remove(position))
    }

    /// Applies a validated [`BookPatch`] to the book with the given id.
    ///
    /// The patch has already parsed completely, so this either changes
    /// every set field or (on a missing id) nothing at all. The id itself
    /// is immutable once assigned.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if no book has the given id.
    pub fn update(&mut self, id: &str, patch: &BookPatch) -> Result<&Book, CatalogError> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_owned()))?;

        patch.apply(book);
        Ok(book)
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
