//! Session middleware
//!
//! Each browser gets its own page controllers, keyed by the `hr_session`
//! cookie.

use axum::{
    extract::{State, Request},
    middleware::Next,
    response::Response,
    http::{header::{COOKIE, SET_COOKIE}, HeaderMap, HeaderValue},
};
use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::{AppState, AppError};
use crate::pages::{AttritionPage, LeakagePage};

pub const SESSION_COOKIE: &str = "hr_session";

/// Dashboard state of one browser
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub attrition: Mutex<AttritionPage>,
    pub leakage: Mutex<LeakagePage>,
    last_seen: Mutex<DateTime<Utc>>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            attrition: Mutex::new(AttritionPage::new()),
            leakage: Mutex::new(LeakagePage::new()),
            last_seen: Mutex::new(now),
        }
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        *self.last_seen.lock()
    }

    fn touch(&self, now: DateTime<Utc>) {
        *self.last_seen.lock() = now;
    }
}

/// In-memory session registry
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Session>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_minutes: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout: Duration::minutes(idle_minutes),
        }
    }

    /// Look up a live session and mark it as seen
    pub fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.get_at(id, Utc::now())
    }

    /// Look up a session as of `now`. An idle-expired session is dropped.
    pub fn get_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<Arc<Session>> {
        let session = self.sessions.read().get(&id).cloned()?;

        if now - session.last_seen() > self.idle_timeout {
            self.sessions.write().remove(&id);
            tracing::debug!("Session expired: {}", id);
            return None;
        }

        session.touch(now);
        Some(session)
    }

    /// Create a session, pruning idle ones first
    pub fn create(&self) -> Arc<Session> {
        let now = Utc::now();
        self.prune(now);

        let session = Arc::new(Session::new(now));
        self.sessions.write().insert(session.id, session.clone());
        tracing::debug!("Session created: {}", session.id);
        session
    }

    /// Drop sessions idle for longer than the timeout. Returns how many were removed.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen() <= self.idle_timeout);

        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!("Pruned {} idle session(s)", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

/// Middleware: resolve or create the browser's session
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let existing = session_id_from_cookies(req.headers())
        .and_then(|id| state.sessions.get(id));

    let (session, created) = match existing {
        Some(session) => (session, false),
        None => (state.sessions.create(), true),
    };
    let session_id = session.id;

    // Insert into request extensions
    req.extensions_mut().insert(session);

    let mut response = next.run(req).await;

    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session_id);
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        response.headers_mut().append(SET_COOKIE, value);
    }

    Ok(response)
}

/// Extract the session id from `Cookie` headers
fn session_id_from_cookies(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}
