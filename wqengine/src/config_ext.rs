//! Extension pour intégrer le moteur de file dans wqconfig
//!
//! Ce module fournit le trait `EngineConfigExt` qui permet d'ajouter les
//! réglages du moteur à wqconfig::Config.
//!
//! # Exemple
//!
//! ```no_run
//! use wqconfig::get_config;
//! use wqengine::EngineConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! println!("Load timeout: {}s", config.get_load_timeout_secs()?);
//! # Ok(())
//! # }
//! ```

use crate::engine::DEFAULT_LOAD_TIMEOUT_SECS;
use anyhow::Result;
use serde_yaml::Value;
use wqconfig::Config;

/// Trait d'extension pour gérer la configuration du moteur
///
/// # Auto-persist des valeurs par défaut
///
/// Les getters persistent automatiquement les valeurs par défaut dans la
/// configuration si elles n'existent pas encore.
pub trait EngineConfigExt {
    /// Récupère le délai maximal de chargement (en secondes)
    fn get_load_timeout_secs(&self) -> Result<u64>;

    /// Définit le délai maximal de chargement (en secondes)
    fn set_load_timeout_secs(&self, timeout_secs: u64) -> Result<()>;
}

impl EngineConfigExt for Config {
    fn get_load_timeout_secs(&self) -> Result<u64> {
        match self.get_value(&["playback", "load_timeout_secs"]) {
            Ok(Value::Number(n)) => {
                if let Some(timeout) = n.as_u64() {
                    Ok(timeout)
                } else {
                    // Invalid number, use default
                    self.set_load_timeout_secs(DEFAULT_LOAD_TIMEOUT_SECS)?;
                    Ok(DEFAULT_LOAD_TIMEOUT_SECS)
                }
            }
            _ => {
                // Not set, use default and persist
                self.set_load_timeout_secs(DEFAULT_LOAD_TIMEOUT_SECS)?;
                Ok(DEFAULT_LOAD_TIMEOUT_SECS)
            }
        }
    }

    fn set_load_timeout_secs(&self, timeout_secs: u64) -> Result<()> {
        self.set_value(
            &["playback", "load_timeout_secs"],
            Value::Number(serde_yaml::Number::from(timeout_secs)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_LOAD_TIMEOUT_SECS, 10);
    }
}
