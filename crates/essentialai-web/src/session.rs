//! Per-session results slot.
//!
//! Each browser session (identified by a cookie) owns at most one serialized
//! ResultsBundle. A new prediction overwrites the slot; slots older than the
//! TTL are treated as gone and purged on the next write.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use essentialai_common::{EssentialError, ResultsBundle};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

struct Slot {
    payload: String,
    written_at: Instant,
}

pub struct SessionStore {
    slots: RwLock<HashMap<Uuid, Slot>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self { slots: RwLock::new(HashMap::new()), ttl }
    }

    /// Serialize `bundle` into the session's slot, replacing what was there.
    pub async fn put(&self, id: Uuid, bundle: &ResultsBundle) -> Result<(), EssentialError> {
        let payload = bundle.to_json()?;
        let mut slots = self.slots.write().await;
        let ttl = self.ttl;
        slots.retain(|_, slot| slot.written_at.elapsed() < ttl);
        slots.insert(id, Slot { payload, written_at: Instant::now() });
        Ok(())
    }

    /// Read the session's bundle. Missing, expired or unreadable slots are `None`.
    pub async fn get(&self, id: &Uuid) -> Option<ResultsBundle> {
        let slots = self.slots.read().await;
        let slot = slots.get(id)?;
        if slot.written_at.elapsed() >= self.ttl {
            return None;
        }
        match ResultsBundle::from_json(&slot.payload) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                warn!(session = %id, "Discarding unreadable stored results: {}", e);
                None
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }
}

/// Session id carried by the request, if any.
pub fn session_id(jar: &CookieJar, cookie_name: &str) -> Option<Uuid> {
    jar.get(cookie_name).and_then(|c| Uuid::parse_str(c.value()).ok())
}

/// Reuse the request's session id or mint a new one and set its cookie.
pub fn ensure_session(jar: CookieJar, cookie_name: &str) -> (CookieJar, Uuid) {
    if let Some(id) = session_id(&jar, cookie_name) {
        return (jar, id);
    }
    let id = Uuid::new_v4();
    let cookie = Cookie::build((cookie_name.to_string(), id.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/");
    (jar.add(cookie), id)
}
