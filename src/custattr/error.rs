use thiserror::Error;

/// Errors surfaced by attribute decoration.
///
/// `Input`, `State` and `Localized` are raised by the metadata, config and
/// option collaborators and pass through the decorator unchanged. The
/// remaining variants belong to the catalog loader, config layer and CLI.
#[derive(Error, Debug)]
pub enum AttrError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Invalid state: {0}")]
    State(String),

    #[error("{0}")]
    Localized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for AttrError {
    fn from(err: confique::Error) -> Self {
        AttrError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AttrError>;
