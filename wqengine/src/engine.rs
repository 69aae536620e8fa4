//! Moteur de synchronisation de la file de lecture
//!
//! Le moteur restaure la file depuis le stockage local quand il en contient
//! une, et ne consulte le document distant qu'en dernier recours. Toutes les
//! mutations passent par lui ; les abonnés sont notifiés à chaque transition.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock as StdRwLock};
use std::time::Duration;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use wqsource::{extract_video_id, GistQueueClient};
use wqstore::{QueueStore, VideoItem};

use crate::error::Result;
use crate::events::{QueueEvent, QueueEventEnvelope};
use crate::state::QueueState;

/// Délai maximal accordé à un chargement complet (secondes)
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 10;

/// File, curseur et état observable, sous un même verrou
struct EngineCore {
    queue: Vec<VideoItem>,
    cursor: usize,
    state: QueueState,
}

struct EngineInner {
    store: Arc<dyn QueueStore>,
    client: GistQueueClient,
    core: RwLock<EngineCore>,
    /// Numéro de la tentative de chargement la plus récente
    generation: AtomicU64,
    load_timeout: Duration,
    callbacks: StdRwLock<HashMap<u64, Arc<dyn Fn(&QueueEvent) + Send + Sync>>>,
    cb_counter: AtomicU64,
    event_tx: broadcast::Sender<QueueEventEnvelope>,
}

/// Moteur de file de lecture
///
/// Clonable à volonté : tous les clones partagent le même état interne.
pub struct QueueEngine {
    inner: Arc<EngineInner>,
}

impl Clone for QueueEngine {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl QueueEngine {
    /// Crée un moteur avec le délai de chargement par défaut.
    pub fn new(store: Arc<dyn QueueStore>, client: GistQueueClient) -> Self {
        Self::builder().build(store, client)
    }

    /// Builder pour ajuster le moteur avant construction.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Crée un moteur entièrement paramétré depuis la configuration globale.
    ///
    /// Le client distant lit `sources.gist.*`, le délai de chargement
    /// `playback.load_timeout_secs`.
    #[cfg(feature = "wqconfig")]
    pub async fn from_config(store: Arc<dyn QueueStore>) -> Result<Self> {
        use crate::config_ext::EngineConfigExt;

        let config = wqconfig::get_config();
        let load_timeout = config.get_load_timeout_secs()?;
        let client = GistQueueClient::from_config().await?;

        Ok(Self::builder()
            .load_timeout(Duration::from_secs(load_timeout))
            .build(store, client))
    }

    /// Charge la file : stockage local d'abord, document distant en secours.
    ///
    /// Une file persistée non vide est adoptée telle quelle, sans aucune
    /// consultation réseau. Sinon le document distant est récolté, filtré
    /// par l'extracteur d'identifiants puis persisté avec son horodatage,
    /// même quand il ne reste aucune entrée exploitable.
    ///
    /// Le chargement complet est borné par le délai du moteur ; à
    /// expiration l'état passe en `Error` et la tentative est abandonnée.
    /// Retourne l'état observable une fois la tentative réglée ; `Err`
    /// signale uniquement un échec d'écriture du stockage, l'état en
    /// mémoire étant déjà établi.
    pub async fn load(&self) -> Result<QueueState> {
        let attempt = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.transition(attempt, QueueState::Loading).await;

        match tokio::time::timeout(self.inner.load_timeout, self.load_inner(attempt)).await {
            Ok(result) => result?,
            Err(_) => {
                let message = format!("Loading timeout after {:?}", self.inner.load_timeout);
                warn!("QueueEngine: {}", message);
                self.transition(attempt, QueueState::Error(message)).await;
            }
        }

        Ok(self.state().await)
    }

    async fn load_inner(&self, attempt: u64) -> Result<()> {
        // Lecture locale d'abord : une file persistée non vide suffit.
        let stored = match self.inner.store.load_queue().await {
            Ok(queue) => queue,
            Err(e) => {
                warn!("QueueEngine: failed to read persisted queue: {}", e);
                Vec::new()
            }
        };

        if !stored.is_empty() {
            info!(
                "QueueEngine: {} video(s) restored from local store",
                stored.len()
            );
            self.commit(attempt, stored, 0).await;
            return Ok(());
        }

        // Rien en local : on consulte le document distant.
        let urls = match self.inner.client.fetch_queue().await {
            Ok(urls) => urls,
            Err(e) => {
                let message = format!("Failed to fetch remote queue: {}", e);
                warn!("QueueEngine: {}", message);
                self.transition(attempt, QueueState::Error(message)).await;
                return Ok(());
            }
        };

        // Une tentative plus récente a pris la main pendant l'attente
        // réseau : on abandonne sans rien persister.
        if self.inner.generation.load(Ordering::SeqCst) != attempt {
            debug!("QueueEngine: stale load attempt {} discarded", attempt);
            return Ok(());
        }

        let total = urls.len();
        let queue: Vec<VideoItem> = urls
            .into_iter()
            .filter_map(|url| extract_video_id(&url).map(|id| VideoItem::new(id, url)))
            .collect();

        if queue.len() < total {
            debug!(
                "QueueEngine: {} remote entry(ies) without a usable video id skipped",
                total - queue.len()
            );
        }

        // La récolte distante est persistée même vide, avec son horodatage.
        let mut persist_error = None;
        if let Err(e) = self.inner.store.save_queue(&queue).await {
            persist_error = Some(e);
        } else if let Err(e) = self.inner.store.save_last_fetch_time().await {
            persist_error = Some(e);
        }

        if queue.is_empty() {
            info!("QueueEngine: remote queue holds no playable video");
            self.transition(attempt, QueueState::Empty).await;
        } else {
            info!(
                "QueueEngine: {} video(s) fetched from remote document",
                queue.len()
            );
            self.commit(attempt, queue, 0).await;
        }

        match persist_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Consomme l'élément courant en fin de lecture.
    ///
    /// Toutes les occurrences de l'identifiant courant sont retirées du
    /// stockage et de la mémoire ; le curseur reste en place pour que le
    /// successeur glisse dessous, ou recule sur le dernier élément. Quand la
    /// file se vide, un rechargement complet est déclenché et peut repartir
    /// du document distant.
    ///
    /// Un échec d'écriture du stockage remonte à l'appelant mais n'annule
    /// pas la consommation en mémoire ; la divergence se résorbe au
    /// prochain persist ou au prochain chargement à froid.
    ///
    /// Retourne l'élément consommé, ou `None` hors de l'état `Ready`.
    pub async fn on_ended(&self) -> Result<Option<VideoItem>> {
        let current = {
            let core = self.inner.core.read().await;
            if core.state != QueueState::Ready {
                return Ok(None);
            }
            match core.queue.get(core.cursor) {
                Some(video) => video.clone(),
                None => return Ok(None),
            }
        };

        debug!(
            "QueueEngine: video {} finished, removing it from the queue",
            current.id
        );

        let store_result = self.inner.store.remove_video(&current.id).await;
        if let Err(ref e) = store_result {
            warn!(
                "QueueEngine: failed to remove {} from the store: {}",
                current.id, e
            );
        }

        let (event, needs_reload) = {
            let mut core = self.inner.core.write().await;
            core.queue.retain(|video| video.id != current.id);

            if core.queue.is_empty() {
                core.cursor = 0;
                (None, true)
            } else {
                if core.cursor >= core.queue.len() {
                    core.cursor = core.queue.len() - 1;
                }
                (
                    Some(QueueEvent::Ready {
                        queue: core.queue.clone(),
                        cursor: core.cursor,
                    }),
                    false,
                )
            }
        };

        if let Some(event) = event {
            self.notify(event);
        }

        if needs_reload {
            info!("QueueEngine: queue exhausted, reloading");
            self.load().await?;
        }

        store_result?;
        Ok(Some(current))
    }

    /// Réagit à une erreur de lecture.
    ///
    /// L'élément fautif est abandonné exactement comme en fin de lecture
    /// normale ; seul le diagnostic est journalisé en plus.
    pub async fn on_error(&self, diagnostic: &str) -> Result<Option<VideoItem>> {
        warn!(
            "QueueEngine: playback error on current video: {}",
            diagnostic
        );
        self.on_ended().await
    }

    /// Avance d'une position. Sans effet sur le dernier élément.
    pub async fn skip_next(&self) {
        let event = {
            let mut core = self.inner.core.write().await;
            if core.state != QueueState::Ready || core.cursor + 1 >= core.queue.len() {
                return;
            }
            core.cursor += 1;
            QueueEvent::Ready {
                queue: core.queue.clone(),
                cursor: core.cursor,
            }
        };
        self.notify(event);
    }

    /// Recule d'une position. Sans effet sur le premier élément.
    pub async fn skip_previous(&self) {
        let event = {
            let mut core = self.inner.core.write().await;
            if core.state != QueueState::Ready || core.cursor == 0 {
                return;
            }
            core.cursor -= 1;
            QueueEvent::Ready {
                queue: core.queue.clone(),
                cursor: core.cursor,
            }
        };
        self.notify(event);
    }

    /// Revient au premier élément de la file.
    pub async fn restart(&self) {
        let event = {
            let mut core = self.inner.core.write().await;
            if core.state != QueueState::Ready || core.cursor == 0 {
                return;
            }
            core.cursor = 0;
            QueueEvent::Ready {
                queue: core.queue.clone(),
                cursor: core.cursor,
            }
        };
        self.notify(event);
    }

    /// Vide le stockage local puis recharge depuis le document distant.
    pub async fn refresh(&self) -> Result<QueueState> {
        info!("QueueEngine: refresh requested, clearing local queue");
        self.inner.store.clear_queue().await?;
        self.load().await
    }

    /// État observable courant.
    pub async fn state(&self) -> QueueState {
        self.inner.core.read().await.state.clone()
    }

    /// Instantané de la file et de la position courante.
    pub async fn snapshot(&self) -> (Vec<VideoItem>, usize) {
        let core = self.inner.core.read().await;
        (core.queue.clone(), core.cursor)
    }

    /// Élément courant, si la file est prête.
    pub async fn current(&self) -> Option<VideoItem> {
        let core = self.inner.core.read().await;
        if core.state != QueueState::Ready {
            return None;
        }
        core.queue.get(core.cursor).cloned()
    }

    /// Position courante dans la file.
    pub async fn position(&self) -> usize {
        self.inner.core.read().await.cursor
    }

    /// Nombre d'éléments en file.
    pub async fn len(&self) -> usize {
        self.inner.core.read().await.queue.len()
    }

    /// Vrai si la file en mémoire est vide.
    pub async fn is_empty(&self) -> bool {
        self.inner.core.read().await.queue.is_empty()
    }

    /// Horodatage du dernier accès distant (ms depuis l'époque, 0 si jamais).
    pub async fn last_fetch_time(&self) -> Result<u64> {
        Ok(self.inner.store.last_fetch_time().await?)
    }

    /// Accès au stockage sous-jacent.
    pub fn store(&self) -> Arc<dyn QueueStore> {
        self.inner.store.clone()
    }

    /// Accès au client du document distant.
    pub fn client(&self) -> &GistQueueClient {
        &self.inner.client
    }

    /// Enregistre un callback de transition.
    ///
    /// Retourne un jeton (u64) pour désenregistrer plus tard.
    pub fn register_callback<F>(&self, cb: F) -> u64
    where
        F: Fn(&QueueEvent) + Send + Sync + 'static,
    {
        let token = self.inner.cb_counter.fetch_add(1, Ordering::Relaxed);
        let mut guard = self.inner.callbacks.write().unwrap();
        guard.insert(token, Arc::new(cb));
        token
    }

    /// Désenregistre un callback via son jeton.
    pub fn unregister_callback(&self, token: u64) {
        let mut guard = self.inner.callbacks.write().unwrap();
        guard.remove(&token);
    }

    /// Souscrit au flux d'évènements horodatés.
    pub fn subscribe(&self) -> broadcast::Receiver<QueueEventEnvelope> {
        self.inner.event_tx.subscribe()
    }

    /// Installe une file non vide et passe en `Ready`, sauf si la tentative
    /// a été doublée entre-temps.
    async fn commit(&self, attempt: u64, queue: Vec<VideoItem>, cursor: usize) {
        let event = {
            let mut core = self.inner.core.write().await;
            if self.inner.generation.load(Ordering::SeqCst) != attempt {
                debug!("QueueEngine: stale load attempt {} discarded", attempt);
                return;
            }
            core.queue = queue;
            core.cursor = cursor;
            core.state = QueueState::Ready;
            QueueEvent::Ready {
                queue: core.queue.clone(),
                cursor: core.cursor,
            }
        };
        self.notify(event);
    }

    /// Applique une transition d'état, sauf si la tentative a été doublée.
    async fn transition(&self, attempt: u64, state: QueueState) {
        let event = {
            let mut core = self.inner.core.write().await;
            if self.inner.generation.load(Ordering::SeqCst) != attempt {
                debug!("QueueEngine: stale load attempt {} discarded", attempt);
                return;
            }
            core.state = state.clone();
            match state {
                QueueState::Loading => QueueEvent::Loading,
                QueueState::Ready => QueueEvent::Ready {
                    queue: core.queue.clone(),
                    cursor: core.cursor,
                },
                QueueState::Empty => QueueEvent::Empty,
                QueueState::Error(message) => QueueEvent::Error { message },
            }
        };
        self.notify(event);
    }

    fn notify(&self, event: QueueEvent) {
        let envelope = QueueEventEnvelope {
            event: event.clone(),
            timestamp: std::time::SystemTime::now(),
        };

        let guard = self.inner.callbacks.read().unwrap();
        for cb in guard.values() {
            cb(&event);
        }

        // Diffusion via canal interne (ignoré si aucun abonné)
        let _ = self.inner.event_tx.send(envelope);
    }
}

/// Builder du moteur de file
pub struct EngineBuilder {
    load_timeout: Duration,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            load_timeout: Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS),
        }
    }
}

impl EngineBuilder {
    /// Crée un builder avec les réglages par défaut.
    pub fn new() -> Self {
        Self::default()
    }

    /// Délai maximal accordé à un chargement complet.
    pub fn load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    /// Assemble le moteur.
    pub fn build(self, store: Arc<dyn QueueStore>, client: GistQueueClient) -> QueueEngine {
        QueueEngine {
            inner: Arc::new(EngineInner {
                store,
                client,
                core: RwLock::new(EngineCore {
                    queue: Vec::new(),
                    cursor: 0,
                    state: QueueState::Empty,
                }),
                generation: AtomicU64::new(0),
                load_timeout: self.load_timeout,
                callbacks: StdRwLock::new(HashMap::new()),
                cb_counter: AtomicU64::new(0),
                event_tx: broadcast::channel(256).0,
            }),
        }
    }
}
