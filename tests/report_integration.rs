use std::fs;

use biblio_core::domain::Book;
use biblio_core::report::{ReportError, ReportWriter};
use biblio_core::store::layout::Library;
use tempfile::TempDir;

fn book(id: &str) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Judul {id}"),
        author: "Penulis".to_string(),
        publisher: "Penerbit".to_string(),
        page_count: 123,
        year: 1999,
    }
}

#[test]
fn export_all_writes_the_fixed_path() -> Result<(), ReportError> {
    let tmpdir = TempDir::new().expect("temp dir");
    let library = Library::at(tmpdir.path());

    let books = vec![book("1"), book("2")];
    let path = ReportWriter::new(&library).export_all(&books)?;

    assert!(path.ends_with("pdf/all_books.pdf"));
    assert!(path.exists());
    assert!(fs::metadata(&path).expect("report metadata").len() > 0);

    Ok(())
}

#[test]
fn empty_catalog_still_produces_a_document() -> Result<(), ReportError> {
    let empty_dir = TempDir::new().expect("temp dir");
    let full_dir = TempDir::new().expect("temp dir");

    let empty_library = Library::at(empty_dir.path());
    let full_library = Library::at(full_dir.path());

    let empty_path = ReportWriter::new(&empty_library).export_all(&[])?;
    let full_path =
        ReportWriter::new(&full_library).export_all(&[book("1"), book("2"), book("3")])?;

    // the empty report carries only the heading, so it must be a strictly
    // smaller document than one with record blocks
    let empty_len = fs::metadata(&empty_path).expect("report metadata").len();
    let full_len = fs::metadata(&full_path).expect("report metadata").len();
    assert!(empty_len > 0);
    assert!(empty_len < full_len);

    Ok(())
}

#[test]
fn export_one_names_the_file_after_the_id() -> Result<(), ReportError> {
    let tmpdir = TempDir::new().expect("temp dir");
    let library = Library::at(tmpdir.path());

    let path = ReportWriter::new(&library).export_one(&book("7"))?;

    assert!(path.ends_with("pdf/book_7.pdf"));
    assert!(path.exists());

    Ok(())
}

#[test]
fn large_catalogs_export_without_error() -> Result<(), ReportError> {
    let tmpdir = TempDir::new().expect("temp dir");
    let library = Library::at(tmpdir.path());

    // enough records to spill across several pages
    let books: Vec<Book> = (1..=40).map(|i| book(&i.to_string())).collect();
    let path = ReportWriter::new(&library).export_all(&books)?;

    assert!(path.exists());
    assert!(fs::metadata(&path).expect("report metadata").len() > 0);

    Ok(())
}
