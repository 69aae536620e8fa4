//! États observables du moteur

use std::fmt;

/// État courant du cycle de vie de la file
///
/// Chaque chargement part de `Loading` et se termine sur l'un des trois
/// états stables. Un nouvel appel à `load()` repart de `Loading`, y compris
/// depuis `Ready` quand la file vient de se vider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueState {
    /// Un chargement est en cours
    Loading,
    /// Une file non vide est disponible
    Ready,
    /// Le dernier chargement a abouti sur une file vide
    Empty,
    /// Le dernier chargement a échoué (diagnostic joint)
    Error(String),
}

impl QueueState {
    /// Vrai si un chargement est en cours
    pub fn is_loading(&self) -> bool {
        matches!(self, QueueState::Loading)
    }

    /// Vrai si une file non vide est disponible
    pub fn is_ready(&self) -> bool {
        matches!(self, QueueState::Ready)
    }

    /// Vrai si le dernier chargement a abouti sur une file vide
    pub fn is_empty(&self) -> bool {
        matches!(self, QueueState::Empty)
    }

    /// Vrai si le dernier chargement a échoué
    pub fn is_error(&self) -> bool {
        matches!(self, QueueState::Error(_))
    }
}

impl fmt::Display for QueueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueState::Loading => write!(f, "loading"),
            QueueState::Ready => write!(f, "ready"),
            QueueState::Empty => write!(f, "empty"),
            QueueState::Error(message) => write!(f, "error: {}", message),
        }
    }
}
