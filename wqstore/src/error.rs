//! Types d'erreurs pour wqstore

/// Erreurs des opérations de stockage de la file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour wqstore
pub type Result<T> = std::result::Result<T, Error>;
