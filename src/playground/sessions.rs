use super::client::ParseClient;
use super::handle::PlaygroundHandle;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

struct Session {
    handle: PlaygroundHandle,
    last_seen: Instant,
}

/// Live playgrounds, one per visitor session
pub struct SessionRegistry {
    client: Arc<dyn ParseClient>,
    sessions: Mutex<HashMap<Uuid, Session>>,
    max_sessions: usize,
}

impl SessionRegistry {
    /// Create an empty registry whose playgrounds use `client`
    pub fn new(client: Arc<dyn ParseClient>, max_sessions: usize) -> Self {
        Self {
            client,
            sessions: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Look up the playground for `id`, starting a new session if there is none
    pub async fn get_or_create(&self, id: Option<Uuid>) -> (Uuid, PlaygroundHandle) {
        let mut sessions = self.sessions.lock().await;

        if let Some(id) = id {
            if let Some(session) = sessions.get_mut(&id) {
                if session.handle.is_alive() {
                    session.last_seen = Instant::now();
                    return (id, session.handle.clone());
                }
                sessions.remove(&id);
            }
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                if let Some(evicted) = sessions.remove(&oldest) {
                    info!("Evicting playground session {}", oldest);
                    let _ = evicted.handle.shutdown().await;
                }
            }
        }

        let id = Uuid::new_v4();
        let handle = PlaygroundHandle::spawn(Arc::clone(&self.client));
        sessions.insert(
            id,
            Session {
                handle: handle.clone(),
                last_seen: Instant::now(),
            },
        );
        debug!("Started playground session {}", id);

        (id, handle)
    }

    /// End the session `id`, dropping any result still in flight
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.lock().await.remove(&id);
        match removed {
            Some(session) => {
                let _ = session.handle.shutdown().await;
                debug!("Ended playground session {}", id);
                true
            }
            None => false,
        }
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Shutdown every playground
    pub async fn shutdown_all(&self) {
        let sessions: Vec<(Uuid, Session)> = self.sessions.lock().await.drain().collect();
        info!("Shutting down {} playground session(s)", sessions.len());

        for (_, session) in sessions {
            let _ = session.handle.shutdown().await;
        }
    }
}
