use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiblioError {
    #[error(transparent)]
    Book(#[from] crate::domain::BookError),

    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error(transparent)]
    Store(#[from] crate::store::layout::StoreError),

    #[error(transparent)]
    Report(#[from] crate::report::ReportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type BiblioResult<T> = Result<T, BiblioError>;
