use chrono::Utc;
use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use web_sys::{window, Storage};

use super::error::{StoreError, StoreResult};
use super::DataStore;
use crate::config::{StoreConfig, SESSION_STORAGE_KEY};
use crate::listeners::{ListenerSet, Subscription};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: i64,
    pub user: SessionUser,
}

/// Tokens are exchanged this long before they expire.
pub const REFRESH_MARGIN_SECS: i64 = 60;

impl Session {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// Seconds from `now` until the token should be refreshed, zero if
    /// that moment has passed.
    pub fn refresh_delay_at(&self, now: i64) -> i64 {
        (self.expires_at - REFRESH_MARGIN_SECS - now).max(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: SessionUser,
}

const DEFAULT_LIFETIME_SECS: i64 = 3600;

fn session_from_token(body: &str, now: i64) -> StoreResult<Session> {
    let token: TokenResponse = serde_json::from_str(body).map_err(StoreError::decode)?;
    let expires_at = token
        .expires_at
        .unwrap_or_else(|| now + token.expires_in.unwrap_or(DEFAULT_LIFETIME_SECS));
    Ok(Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_at,
        user: token.user,
    })
}

thread_local! {
    static AUTH_LISTENERS: ListenerSet<AuthEvent> = ListenerSet::new();
}

fn notify(event: AuthEvent) {
    AUTH_LISTENERS.with(|listeners| listeners.emit(&event));
}

/// Calls `on_change` on every sign in and sign out until the returned
/// subscription is dropped.
pub fn on_auth_state_change(on_change: impl Fn(&AuthEvent) + 'static) -> Subscription {
    AUTH_LISTENERS.with(|listeners| listeners.register(on_change))
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn store_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(text) => {
            if let Err(e) = storage.set_item(SESSION_STORAGE_KEY, &text) {
                warn!("could not persist session: {:?}", e);
            }
        }
        Err(e) => warn!("could not encode session: {}", e),
    }
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

/// Drops the persisted session and tells listeners the user is signed out.
fn discard_session() {
    clear_session();
    notify(AuthEvent::SignedOut);
}

/// The persisted session, if one exists and has not expired. Unreadable or
/// expired sessions are discarded.
pub fn get_session() -> Option<Session> {
    let text = local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    let session: Session = match serde_json::from_str(&text) {
        Ok(session) => session,
        Err(e) => {
            warn!("discarding unreadable session: {}", e);
            discard_session();
            return None;
        }
    };
    if session.is_expired_at(Utc::now().timestamp()) {
        info!("session expired");
        discard_session();
        return None;
    }
    Some(session)
}

/// Posts to the GoTrue token endpoint and persists the session it returns.
async fn exchange_token(config: &StoreConfig, grant_type: &str, body: serde_json::Value) -> StoreResult<Session> {
    let url = format!("{}/auth/v1/token?grant_type={}", config.url, grant_type);
    let response = Request::post(&url)
        .header("apikey", &config.anon_key)
        .json(&body)
        .map_err(StoreError::encode)?
        .send()
        .await
        .map_err(StoreError::network)?;

    let status = response.status();
    let text = response.text().await.map_err(StoreError::network)?;
    if !response.ok() {
        // Bad credentials come back as 400 with an error_description.
        return Err(StoreError::from_status(status, &text));
    }

    let session = session_from_token(&text, Utc::now().timestamp())?;
    store_session(&session);
    notify(AuthEvent::SignedIn(session.clone()));
    Ok(session)
}

pub async fn sign_in_with_password(store: &DataStore, email: &str, password: &str) -> StoreResult<Session> {
    let config = store.storage().ok_or(StoreError::NotConfigured)?;
    let session = exchange_token(config, "password", json!({ "email": email, "password": password })).await?;
    info!("signed in as {}", session.user.email.as_deref().unwrap_or(&session.user.id));
    Ok(session)
}

/// Whether the server turned the refresh token down, as opposed to the
/// request never arriving.
fn refresh_rejected(e: &StoreError) -> bool {
    matches!(e, StoreError::Unauthorized | StoreError::Status { .. } | StoreError::Decode(_))
}

/// Trades the session's refresh token for a new one. A rejected token
/// signs the user out; network failures leave the session in place.
pub async fn refresh_session(store: &DataStore, session: &Session) -> StoreResult<Session> {
    let config = store.storage().ok_or(StoreError::NotConfigured)?;
    let result = exchange_token(config, "refresh_token", json!({ "refresh_token": session.refresh_token })).await;
    match &result {
        Ok(_) => info!("session refreshed"),
        Err(e) if refresh_rejected(e) => {
            warn!("session refresh rejected: {}", e);
            discard_session();
        }
        Err(e) => warn!("session refresh failed: {}", e),
    }
    result
}

/// Revokes the token server side when possible. The local session is
/// cleared either way.
pub async fn sign_out(store: &DataStore) {
    if let (Some(config), Some(session)) = (store.storage(), get_session()) {
        let url = format!("{}/auth/v1/logout", config.url);
        let result = Request::post(&url)
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await;
        if let Err(e) = result {
            warn!("logout request failed: {}", e);
        }
    }
    info!("signed out");
    discard_session();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn token_with_relative_expiry() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {"id": "u1", "email": "admin@whymedia.test", "role": "authenticated"}
        }"#;
        let session = session_from_token(body, 1_000).unwrap();
        assert_eq!(session.expires_at, 4_600);
        assert_eq!(session.user.email.as_deref(), Some("admin@whymedia.test"));
    }

    #[test]
    fn absolute_expiry_wins() {
        let body = r#"{"access_token":"a","refresh_token":"r","expires_in":10,"expires_at":99,"user":{"id":"u"}}"#;
        assert_eq!(session_from_token(body, 0).unwrap().expires_at, 99);
    }

    #[test]
    fn garbage_token_is_a_decode_error() {
        assert!(matches!(session_from_token("{}", 0), Err(StoreError::Decode(_))));
    }

    #[test]
    fn expiry_boundary() {
        let session = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: 100,
            user: SessionUser { id: "u".into(), email: None },
        };
        assert!(!session.is_expired_at(99));
        assert!(session.is_expired_at(100));
    }

    #[test]
    fn listeners_stop_after_drop() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            on_auth_state_change(move |event| seen.borrow_mut().push(event.clone()))
        };
        notify(AuthEvent::SignedOut);
        drop(subscription);
        notify(AuthEvent::SignedOut);
        assert_eq!(*seen.borrow(), vec![AuthEvent::SignedOut]);
    }

    #[test]
    fn refresh_response_replaces_both_tokens() {
        let body = r#"{"access_token":"a2","refresh_token":"r2","expires_in":3600,"user":{"id":"u1"}}"#;
        let session = session_from_token(body, 5_000).unwrap();
        assert_eq!(session.access_token, "a2");
        assert_eq!(session.refresh_token, "r2");
        assert_eq!(session.expires_at, 8_600);
    }

    #[test]
    fn refresh_is_scheduled_before_expiry() {
        let session = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: 1_000,
            user: SessionUser { id: "u".into(), email: None },
        };
        assert_eq!(session.refresh_delay_at(0), 1_000 - REFRESH_MARGIN_SECS);
        assert_eq!(session.refresh_delay_at(1_000 - REFRESH_MARGIN_SECS), 0);
        assert_eq!(session.refresh_delay_at(2_000), 0);
    }

    #[test]
    fn only_server_rejections_end_the_session() {
        assert!(refresh_rejected(&StoreError::Unauthorized));
        assert!(refresh_rejected(&StoreError::from_status(400, r#"{"error_description":"Invalid Refresh Token"}"#)));
        assert!(!refresh_rejected(&StoreError::network("offline")));
        assert!(!refresh_rejected(&StoreError::NotConfigured));
    }
}
