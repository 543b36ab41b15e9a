use std::fs;

use biblio_core::domain::Book;
use biblio_core::store::layout::{Library, StoreError};
use biblio_core::store::records::RecordStore;
use tempfile::TempDir;

fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "A".to_string(),
        publisher: "P".to_string(),
        page_count: 300,
        year: 2020,
    }
}

#[test]
fn flush_then_read_round_trips_all_fields() -> Result<(), StoreError> {
    let tmpdir = TempDir::new()?;
    let library = Library::at(tmpdir.path());
    let store = RecordStore::new(&library);

    let books = vec![book("1", "Go"), book("2", "Rust")];
    store.flush_all(&books)?;

    let read_back = store.read_all()?;
    assert_eq!(read_back, books);

    Ok(())
}

#[test]
fn unflushed_library_reads_as_empty() -> Result<(), StoreError> {
    let tmpdir = TempDir::new()?;
    let library = Library::at(tmpdir.path());

    // no books/ directory exists yet
    let books = RecordStore::new(&library).read_all()?;
    assert!(books.is_empty());

    Ok(())
}

#[test]
fn record_files_land_at_deterministic_paths() -> Result<(), StoreError> {
    let tmpdir = TempDir::new()?;
    let library = Library::at(tmpdir.path());
    let store = RecordStore::new(&library);

    store.flush_all(&[book("7", "Go")])?;

    let path = store.record_path("7");
    assert!(path.ends_with("books/book-7.json"));
    assert!(path.exists());

    Ok(())
}

#[test]
fn corrupt_file_aborts_the_whole_read() -> Result<(), StoreError> {
    let tmpdir = TempDir::new()?;
    let library = Library::at(tmpdir.path());
    let store = RecordStore::new(&library);

    store.flush_all(&[book("1", "Go")])?;
    fs::write(library.books_dir().join("book-9.json"), "bukan json")?;

    let result = store.read_all();
    assert!(matches!(result, Err(StoreError::Corrupt { .. })));

    Ok(())
}

#[test]
fn delete_record_removes_the_file() -> Result<(), StoreError> {
    let tmpdir = TempDir::new()?;
    let library = Library::at(tmpdir.path());
    let store = RecordStore::new(&library);

    store.flush_all(&[book("1", "Go")])?;
    assert!(store.record_path("1").exists());

    store.delete_record("1")?;
    assert!(!store.record_path("1").exists());

    Ok(())
}

#[test]
fn flush_overwrites_existing_record_files() -> Result<(), StoreError> {
    let tmpdir = TempDir::new()?;
    let library = Library::at(tmpdir.path());
    let store = RecordStore::new(&library);

    store.flush_all(&[book("1", "Go")])?;
    store.flush_all(&[book("1", "Go, edisi kedua")])?;

    let read_back = store.read_all()?;
    assert_eq!(read_back.len(), 1);
    assert_eq!(read_back[0].title, "Go, edisi kedua");

    Ok(())
}

#[test]
fn flush_does_not_remove_stale_files() -> Result<(), StoreError> {
    let tmpdir = TempDir::new()?;
    let library = Library::at(tmpdir.path());
    let store = RecordStore::new(&library);

    store.flush_all(&[book("1", "Go"), book("2", "Rust")])?;
    // flushing a shrunk catalog leaves the other file alone; only an
    // explicit delete removes it
    store.flush_all(&[book("1", "Go")])?;

    assert!(store.record_path("2").exists());

    Ok(())
}
