use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::domain::{Book, BookPatch};
use crate::error::BiblioResult;
use crate::report::ReportWriter;
use crate::store::layout::Library;
use crate::store::records::RecordStore;

/// High-level operations over one library: owns the in-memory [`Catalog`]
/// and the on-disk [`Library`], and keeps the two synchronized by flushing
/// after every mutation.
///
/// The service is the single source of truth for a running process. It
/// loads the catalog from disk once at startup; afterwards listings read
/// memory and every add/remove/update rewrites the record files.
pub struct LibraryService {
    catalog: Catalog,
    library: Library,
}

impl LibraryService {
    /// Opens a library, loading any previously flushed records into the
    /// catalog. A library that has never been written to opens empty.
    ///
    /// # Errors
    /// Returns [`crate::BiblioError`] if the record directory exists but
    /// cannot be read, or any record file is corrupt.
    pub fn open(library: Library) -> BiblioResult<Self> {
        let books = RecordStore::new(&library).read_all()?;
        debug!(count = books.len(), "catalog loaded");

        Ok(LibraryService {
            catalog: Catalog::from_books(books),
            library,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Adds a book, then flushes the whole catalog to disk.
    ///
    /// A duplicate id fails before anything is written, leaving both
    /// memory and disk untouched.
    pub fn add_book(&mut self, book: Book) -> BiblioResult<()> {
        let id = book.id.clone();
        self.catalog.add(book)?;
        self.flush()?;

        info!(%id, "book added");
        Ok(())
    }

    /// Removes a book, deletes its record file, and flushes the remainder.
    ///
    /// A failure to delete the file is logged and swallowed; the book is
    /// already gone from the catalog and the operation counts as done.
    pub fn remove_book(&mut self, id: &str) -> BiblioResult<()> {
        self.catalog.remove(id)?;

        let store = RecordStore::new(&self.library);
        if let Err(err) = store.delete_record(id) {
            warn!(%id, %err, "could not delete record file");
        }
        store.flush_all(self.catalog.books())?;

        info!(%id, "book removed");
        Ok(())
    }

    /// Applies a validated patch to a book, then flushes.
    pub fn update_book(&mut self, id: &str, patch: &BookPatch) -> BiblioResult<()> {
        self.catalog.update(id, patch)?;
        self.flush()?;

        info!(%id, "book updated");
        Ok(())
    }

    /// Numbered listing lines for the whole catalog, in insertion order.
    pub fn list_lines(&self) -> Vec<String> {
        self.catalog
            .books()
            .iter()
            .enumerate()
            .map(|(i, book)| {
                format!(
                    "{}. {} - {} ({} halaman, {})",
                    i + 1,
                    book.title,
                    book.author,
                    book.page_count,
                    book.year
                )
            })
            .collect()
    }

    /// Exports the whole catalog to `pdf/all_books.pdf`.
    pub fn export_all(&self) -> BiblioResult<PathBuf> {
        Ok(ReportWriter::new(&self.library).export_all(self.catalog.books())?)
    }

    /// Exports one book to `pdf/book_{id}.pdf`.
    ///
    /// # Errors
    /// Returns [`crate::catalog::CatalogError::NotFound`] (wrapped) if the
    /// id is unknown, before any file is touched.
    pub fn export_one(&self, id: &str) -> BiblioResult<PathBuf> {
        let book = self.catalog.find(id)?;
        Ok(ReportWriter::new(&self.library).export_one(book)?)
    }

    fn flush(&self) -> BiblioResult<()> {
        RecordStore::new(&self.library).flush_all(self.catalog.books())?;
        Ok(())
    }
}
