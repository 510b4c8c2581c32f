use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Graph loading error: {0}")]
    Load(#[from] crate::loader::LoaderError),
    #[error("Search error: {0}")]
    Search(#[from] crate::search::SearchError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
