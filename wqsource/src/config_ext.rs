//! Extension pour intégrer la source gist dans wqconfig
//!
//! Ce module fournit le trait `GistConfigExt` qui permet d'ajouter les
//! réglages de la source distante à wqconfig::Config.
//!
//! # Fonctionnalités
//!
//! - Activation/désactivation de la source
//! - URL du document distant
//! - Timeout des requêtes
//!
//! # Exemple
//!
//! ```no_run
//! use wqconfig::get_config;
//! use wqsource::GistConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//!
//! // Check if enabled
//! if !config.get_gist_enabled()? {
//!     println!("Remote queue source is disabled");
//!     return Ok(());
//! }
//!
//! println!("Queue document: {}", config.get_gist_queue_url()?);
//! # Ok(())
//! # }
//! ```

use crate::client::{DEFAULT_QUEUE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use anyhow::Result;
use serde_yaml::Value;
use wqconfig::Config;

/// Trait d'extension pour gérer la configuration de la source gist
///
/// # Auto-persist des valeurs par défaut
///
/// Les getters persistent automatiquement les valeurs par défaut dans la
/// configuration si elles n'existent pas encore.
pub trait GistConfigExt {
    // ========================================================================
    // Enable/Disable
    // ========================================================================

    /// Vérifie si la source distante est activée
    fn get_gist_enabled(&self) -> Result<bool>;

    /// Active ou désactive la source distante
    fn set_gist_enabled(&self, enabled: bool) -> Result<()>;

    // ========================================================================
    // Document URL
    // ========================================================================

    /// Récupère l'URL du document de file distant
    fn get_gist_queue_url(&self) -> Result<String>;

    /// Définit l'URL du document de file distant
    fn set_gist_queue_url(&self, url: &str) -> Result<()>;

    // ========================================================================
    // Request timeout
    // ========================================================================

    /// Récupère le timeout des requêtes (en secondes)
    fn get_gist_request_timeout_secs(&self) -> Result<u64>;

    /// Définit le timeout des requêtes (en secondes)
    fn set_gist_request_timeout_secs(&self, timeout_secs: u64) -> Result<()>;
}

impl GistConfigExt for Config {
    fn get_gist_enabled(&self) -> Result<bool> {
        match self.get_value(&["sources", "gist", "enabled"]) {
            Ok(Value::Bool(b)) => Ok(b),
            _ => {
                // Default: enabled
                self.set_gist_enabled(true)?;
                Ok(true)
            }
        }
    }

    fn set_gist_enabled(&self, enabled: bool) -> Result<()> {
        self.set_value(&["sources", "gist", "enabled"], Value::Bool(enabled))
    }

    fn get_gist_queue_url(&self) -> Result<String> {
        match self.get_value(&["sources", "gist", "url"]) {
            Ok(Value::String(s)) if !s.is_empty() => Ok(s),
            _ => {
                // Not set, use default and persist
                self.set_gist_queue_url(DEFAULT_QUEUE_URL)?;
                Ok(DEFAULT_QUEUE_URL.to_string())
            }
        }
    }

    fn set_gist_queue_url(&self, url: &str) -> Result<()> {
        self.set_value(&["sources", "gist", "url"], Value::String(url.to_string()))
    }

    fn get_gist_request_timeout_secs(&self) -> Result<u64> {
        match self.get_value(&["sources", "gist", "request_timeout_secs"]) {
            Ok(Value::Number(n)) => {
                if let Some(timeout) = n.as_u64() {
                    Ok(timeout)
                } else {
                    // Invalid number, use default
                    self.set_gist_request_timeout_secs(DEFAULT_REQUEST_TIMEOUT_SECS)?;
                    Ok(DEFAULT_REQUEST_TIMEOUT_SECS)
                }
            }
            _ => {
                // Not set, use default and persist
                self.set_gist_request_timeout_secs(DEFAULT_REQUEST_TIMEOUT_SECS)?;
                Ok(DEFAULT_REQUEST_TIMEOUT_SECS)
            }
        }
    }

    fn set_gist_request_timeout_secs(&self, timeout_secs: u64) -> Result<()> {
        self.set_value(
            &["sources", "gist", "request_timeout_secs"],
            Value::Number(serde_yaml::Number::from(timeout_secs)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_REQUEST_TIMEOUT_SECS, 30);
        assert!(DEFAULT_QUEUE_URL.starts_with("https://gist.githubusercontent.com/"));
    }
}
