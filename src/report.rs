use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;
use tracing::info;

use crate::domain::Book;
use crate::store::layout::{Library, StoreError};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report directory unavailable: {0}")]
    Storage(#[from] StoreError),

    #[error("could not write report: {0}")]
    ExportFailed(#[from] std::io::Error),

    #[error("could not render report: {0}")]
    Render(#[from] printpdf::Error),
}

// A4 portrait, all distances in millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;
const TITLE_STEP: f32 = 10.0;
const LINE_STEP: f32 = 8.0;
const RECORD_GAP: f32 = 12.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

/// Renders book records into paginated PDF reports under the library's
/// `pdf` directory.
///
/// The writer holds no state of its own; records are rendered in the order
/// given, one five-line block per book, with a page break whenever the
/// cursor passes the bottom margin.
pub struct ReportWriter<'a> {
    library: &'a Library,
}

impl<'a> ReportWriter<'a> {
    pub fn new(library: &'a Library) -> Self {
        ReportWriter { library }
    }

    /// Exports every given book into one document at `pdf/all_books.pdf`.
    ///
    /// An empty slice still produces a valid document containing only the
    /// heading.
    ///
    /// # Errors
    /// Returns [`ReportError`] if the directory cannot be created or the
    /// document cannot be rendered or written.
    pub fn export_all(&self, books: &[Book]) -> Result<PathBuf, ReportError> {
        let path = self.library.reports_dir().join("all_books.pdf");
        self.render("Daftar Buku", books, &path)?;
        Ok(path)
    }

    /// Exports a single book to `pdf/book_{id}.pdf`.
    ///
    /// # Errors
    /// Same failure modes as [`ReportWriter::export_all`].
    pub fn export_one(&self, book: &Book) -> Result<PathBuf, ReportError> {
        let path = self
            .library
            .reports_dir()
            .join(format!("book_{}.pdf", book.id));
        self.render("Detail Buku", std::slice::from_ref(book), &path)?;
        Ok(path)
    }

    fn render(&self, heading: &str, books: &[Book], path: &Path) -> Result<(), ReportError> {
        self.library.ensure_reports_dir()?;

        let (doc, first_page, first_layer) =
            PdfDocument::new(heading, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "isi");
        let title_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let body_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut y = PAGE_HEIGHT - MARGIN_TOP;

        layer.use_text(heading, TITLE_SIZE, Mm(MARGIN_LEFT), Mm(y), &title_font);
        y -= TITLE_STEP;

        for book in books {
            let lines = [
                format!("Judul: {}", book.title),
                format!("Penulis: {}", book.author),
                format!("Penerbit: {}", book.publisher),
                format!("Jumlah Halaman: {}", book.page_count),
                format!("Tahun Terbit: {}", book.year),
            ];

            for line in &lines {
                if y < MARGIN_BOTTOM {
                    let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "isi");
                    layer = doc.get_page(page).get_layer(new_layer);
                    y = PAGE_HEIGHT - MARGIN_TOP;
                }
                layer.use_text(line.as_str(), BODY_SIZE, Mm(MARGIN_LEFT), Mm(y), &body_font);
                y -= LINE_STEP;
            }

            // Blocks are separated by the wider record gap.
            y -= RECORD_GAP - LINE_STEP;
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file))?;

        info!(path = %path.display(), count = books.len(), "report exported");
        Ok(())
    }
}
