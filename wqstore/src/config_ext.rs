//! Extension de wqconfig pour le stockage de la file

use std::path::PathBuf;

/// Trait d'extension pour wqconfig::Config
pub trait StoreConfigExt {
    /// Retourne le chemin de la base de données de la file
    fn queue_db_path(&self) -> PathBuf;
}

impl StoreConfigExt for wqconfig::Config {
    fn queue_db_path(&self) -> PathBuf {
        // Utilise get_managed_dir pour créer le répertoire queue s'il n'existe pas
        let queue_dir = self
            .get_managed_dir(&["queue", "directory"], "queue")
            .expect("Failed to get or create queue directory");

        PathBuf::from(queue_dir).join("queue.db")
    }
}
