use biblio_core::catalog::{Catalog, CatalogError};
use biblio_core::domain::{Book, BookPatch};

fn book(id: &str) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Judul {id}"),
        author: "Penulis".to_string(),
        publisher: "Penerbit".to_string(),
        page_count: 100,
        year: 2000,
    }
}

#[test]
fn every_distinct_add_grows_the_catalog() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();

    for id in ["1", "2", "3", "4", "5"] {
        catalog.add(book(id))?;
    }

    assert_eq!(catalog.len(), 5);
    for id in ["1", "2", "3", "4", "5"] {
        assert_eq!(catalog.find(id)?.id, id);
    }

    Ok(())
}

#[test]
fn duplicate_id_is_rejected_and_catalog_unchanged() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();
    catalog.add(book("1"))?;

    let mut second = book("1");
    second.title = "Penyusup".to_string();
    let result = catalog.add(second);

    assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "1"));
    assert_eq!(catalog.len(), 1);
    // the original record is still the one in place
    assert_eq!(catalog.find("1")?.title, "Judul 1");

    Ok(())
}

#[test]
fn removed_book_is_no_longer_findable() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();
    catalog.add(book("1"))?;

    let removed = catalog.remove("1")?;
    assert_eq!(removed.id, "1");

    assert!(matches!(catalog.find("1"), Err(CatalogError::NotFound(_))));
    assert!(catalog.is_empty());

    Ok(())
}

#[test]
fn removing_unknown_id_reports_not_found() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();
    catalog.add(book("1"))?;

    let result = catalog.remove("99");

    assert!(matches!(result, Err(CatalogError::NotFound(id)) if id == "99"));
    assert_eq!(catalog.len(), 1);

    Ok(())
}

#[test]
fn empty_patch_leaves_every_field_unchanged() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();
    catalog.add(book("1"))?;
    let before = catalog.find("1")?.clone();

    let patch = BookPatch::parse("", "", "", "", "").expect("empty input is a valid patch");
    catalog.update("1", &patch)?;

    assert_eq!(*catalog.find("1")?, before);

    Ok(())
}

#[test]
fn update_applies_only_set_fields() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();
    catalog.add(book("1"))?;

    let patch =
        BookPatch::parse("Judul Baru", "", "", "250", "").expect("patch input should parse");
    let updated = catalog.update("1", &patch)?;

    assert_eq!(updated.title, "Judul Baru");
    assert_eq!(updated.page_count, 250);
    assert_eq!(updated.author, "Penulis");
    assert_eq!(updated.year, 2000);

    Ok(())
}

#[test]
fn bad_numeric_input_never_reaches_the_catalog() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();
    catalog.add(book("1"))?;
    let before = catalog.find("1")?.clone();

    // the patch fails to parse, so there is nothing to apply
    assert!(BookPatch::parse("Judul Baru", "", "", "banyak", "").is_err());
    assert_eq!(*catalog.find("1")?, before);

    Ok(())
}

#[test]
fn insertion_order_is_preserved() -> Result<(), CatalogError> {
    let mut catalog = Catalog::new();
    for id in ["c", "a", "b"] {
        catalog.add(book(id))?;
    }

    let ids: Vec<_> = catalog.books().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);

    Ok(())
}
