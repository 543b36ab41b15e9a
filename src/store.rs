//! Persistence: the on-disk mirror of the catalog.
//!
//! [`layout`] owns the directory structure (`books/` for record files,
//! `pdf/` for reports); [`records`] reads and writes the per-book JSON
//! files inside it.

pub mod layout;
pub mod records;
