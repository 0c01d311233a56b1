use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Asset error: {0}")]
    Asset(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Render error: {0}")]
    Render(#[from] genpdf::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
