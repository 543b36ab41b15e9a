use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::Book;
use crate::store::layout::{Library, StoreError};

/// Reads and writes the per-book record files inside a [`Library`].
///
/// The store is stateless: every call re-reads or rewrites the directory,
/// and the caller's catalog remains the source of truth between calls.
pub struct RecordStore<'a> {
    library: &'a Library,
}

impl<'a> RecordStore<'a> {
    pub fn new(library: &'a Library) -> Self {
        RecordStore { library }
    }

    /// The file a given book id persists to: `{books}/book-{id}.json`.
    ///
    /// Both writes and deletes resolve names through here, so the two can
    /// never disagree about which file belongs to an id.
    pub fn record_path(&self, id: &str) -> PathBuf {
        self.library.books_dir().join(format!("book-{id}.json"))
    }

    /// Writes every book to its own file, creating the record directory
    /// first if needed. Existing files are overwritten in place; files for
    /// ids no longer in `books` are left alone.
    ///
    /// Each file is written atomically (tempfile + rename), but the flush
    /// as a whole is not transactional: the first failed write aborts and
    /// files already written in this call stay on disk.
    ///
    /// # Errors
    /// - [`StoreError::Unavailable`] if the directory cannot be created or
    ///   a write fails.
    /// - [`StoreError::Encode`] if a record cannot be serialized.
    pub fn flush_all(&self, books: &[Book]) -> Result<(), StoreError> {
        self.library.ensure_books_dir()?;

        for book in books {
            let data = serde_json::to_vec_pretty(book).map_err(|source| StoreError::Encode {
                id: book.id.clone(),
                source,
            })?;
            write_atomic(&self.record_path(&book.id), &data)?;
        }

        debug!(count = books.len(), "flushed catalog to disk");
        Ok(())
    }

    /// Removes the record file for one id.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the file cannot be removed.
    /// Callers treat this as a warning, not a failure of the surrounding
    /// operation.
    pub fn delete_record(&self, id: &str) -> Result<(), StoreError> {
        fs::remove_file(self.record_path(id))?;
        Ok(())
    }

    /// Reads every record file back from disk, sorted by id.
    ///
    /// A library whose record directory does not exist yet (nothing has
    /// been flushed) reads as empty. Directory entries that are themselves
    /// directories are skipped; every other entry must parse.
    ///
    /// # Errors
    /// - [`StoreError::Corrupt`] if any file fails to deserialize; no
    ///   partial result is returned.
    /// - [`StoreError::Unavailable`] for underlying I/O failures.
    pub fn read_all(&self) -> Result<Vec<Book>, StoreError> {
        let dir = self.library.books_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut books = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                continue;
            }

            let data = fs::read(&path)?;
            let book: Book =
                serde_json::from_slice(&data).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?;
            books.push(book);
        }

        // Directory order is platform noise; ids give a stable order back.
        books.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(count = books.len(), "read catalog from disk");
        Ok(books)
    }
}

/// Writes data to a temporary file in the target directory and renames it
/// in place, so a record file is never left half-written by a crash.
fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let dir = path.parent().ok_or_else(|| {
        StoreError::Unavailable(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "record path has no parent directory",
        ))
    })?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path)
        .map_err(|e| StoreError::Unavailable(e.error))?;
    Ok(())
}
