use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("corrupt record file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not encode record {id}: {source}")]
    Encode {
        id: String,
        source: serde_json::Error,
    },

    #[error("documents directory not found")]
    NoDocumentsDir,
}

/// The fixed directory layout of one library on disk.
///
/// Everything lives under a single base directory: record files in
/// `{root}/books`, exported reports in `{root}/pdf`. Constructing a
/// `Library` does no I/O; directories are created on first use by the
/// `ensure_*` methods.
pub struct Library {
    pub root: PathBuf,
}

impl Library {
    /// Points a library at an arbitrary base directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Library { root: root.into() }
    }

    /// Resolves the default library under `~/Documents/library`.
    ///
    /// # Errors
    /// Returns [`StoreError::NoDocumentsDir`] if the user's documents
    /// directory cannot be determined.
    pub fn in_documents() -> Result<Self, StoreError> {
        let docs = dirs::document_dir().ok_or(StoreError::NoDocumentsDir)?;
        Ok(Library::at(docs.join("library")))
    }

    /// Where record files live (`{root}/books`).
    pub fn books_dir(&self) -> PathBuf {
        self.root.join("books")
    }

    /// Where exported reports live (`{root}/pdf`).
    pub fn reports_dir(&self) -> PathBuf {
        self.root.join("pdf")
    }

    /// Creates the record directory if missing and returns its path.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if creation fails.
    pub fn ensure_books_dir(&self) -> Result<PathBuf, StoreError> {
        let dir = self.books_dir();
        ensure_dir(&dir)?;
        Ok(dir)
    }

    /// Creates the report directory if missing and returns its path.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if creation fails.
    pub fn ensure_reports_dir(&self) -> Result<PathBuf, StoreError> {
        let dir = self.reports_dir();
        ensure_dir(&dir)?;
        Ok(dir)
    }
}

fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?; // converted to StoreError::Unavailable automatically
    }
    Ok(())
}
