//! Évènements de transition du moteur

use std::time::SystemTime;
use wqstore::VideoItem;

/// Évènement émis quand l'état du moteur ou la position courante change
///
/// `Ready` embarque un instantané de la file et la position courante pour
/// que les abonnés puissent s'afficher sans repasser par le moteur.
#[derive(Debug, Clone)]
pub enum QueueEvent {
    /// Un chargement démarre
    Loading,
    /// Une file non vide est disponible
    Ready { queue: Vec<VideoItem>, cursor: usize },
    /// Le chargement a abouti sur une file vide
    Empty,
    /// Le chargement a échoué
    Error { message: String },
}

/// Enveloppe horodatée diffusée sur le canal interne
#[derive(Debug, Clone)]
pub struct QueueEventEnvelope {
    pub event: QueueEvent,
    pub timestamp: SystemTime,
}
