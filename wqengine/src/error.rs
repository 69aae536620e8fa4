//! Types d'erreurs pour wqengine

use thiserror::Error;

/// Erreurs du moteur de file
#[derive(Error, Debug)]
pub enum Error {
    /// Erreur du stockage local
    #[error("Store error: {0}")]
    Store(#[from] wqstore::Error),

    /// Erreur de la source distante
    #[error("Source error: {0}")]
    Source(#[from] wqsource::Error),

    /// Autres erreurs
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias de type pour les résultats wqengine
pub type Result<T> = std::result::Result<T, Error>;
