//! # biblio_core
//!
//! A small Rust library (plus interactive binary) for managing a personal
//! book catalog: add, list, edit, and delete records, mirror them as
//! individual JSON files on disk, and export formatted PDF reports.
//!
//! ## Features
//!
//! - **Catalog Management**: An ordered in-memory catalog with a unique-id
//!   invariant and all-or-nothing partial updates
//! - **Per-record Persistence**: One JSON file per book with atomic writes,
//!   rewritten after every mutation
//! - **PDF Reports**: Paginated A4 reports for the whole catalog or a
//!   single book
//! - **Robust Error Handling**: Per-module error types unified by a single
//!   crate-level error with automatic conversions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use biblio_core::domain::Book;
//! use biblio_core::service::LibraryService;
//! use biblio_core::store::layout::Library;
//!
//! # fn main() -> biblio_core::BiblioResult<()> {
//! // Open (or start) a library rooted at the given directory.
//! let mut service = LibraryService::open(Library::at("my-library"))?;
//!
//! // Add a book; the catalog is flushed to disk immediately.
//! let book = Book::from_input("1", "Laskar Pelangi", "Andrea Hirata", "Bentang", "529", "2005")?;
//! service.add_book(book)?;
//!
//! // List what we have.
//! for line in service.list_lines() {
//!     println!("{line}");
//! }
//!
//! // Export everything to pdf/all_books.pdf.
//! let report = service.export_all()?;
//! println!("report at {}", report.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`domain`]**: The [`Book`](domain::Book) record, input validation,
//!   and [`BookPatch`](domain::BookPatch) partial updates
//! - **[`catalog`]**: The in-memory ordered collection and its uniqueness
//!   invariant
//! - **[`store`]**: Directory layout and per-record file persistence
//! - **[`report`]**: PDF report rendering
//! - **[`service`]**: The coordinator tying catalog, store, and reports
//!   together (mutate, then flush)
//! - **[`error`]**: Unified error handling throughout the library
//!
//! ## Persistence model
//!
//! Records live under `{root}/books` as `book-{id}.json`, field-tagged and
//! human-readable. Every mutation rewrites the full catalog; writes are
//! atomic per file but the flush as a whole is best-effort. Reports land
//! under `{root}/pdf`.
//!
//! ## Error Handling
//!
//! All operations return [`BiblioResult<T>`] wrapping the unified
//! [`BiblioError`] type, which converts automatically from each module's
//! own error, so `?` works throughout.
//!
//! ```rust,no_run
//! use biblio_core::{BiblioResult, domain::Book};
//!
//! fn build_book() -> BiblioResult<Book> {
//!     // BookError converts into BiblioError automatically.
//!     let book = Book::from_input("7", "Bumi Manusia", "Pramoedya", "Hasta Mitra", "535", "1980")?;
//!     Ok(book)
//! }
//! ```

pub mod catalog;
pub mod domain;
pub mod error;
pub mod report;
pub mod service;
pub mod store;

/// Re-exports the most commonly used types for convenience.
pub use error::{BiblioError, BiblioResult};
