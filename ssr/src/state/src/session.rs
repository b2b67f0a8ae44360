use leptos::prelude::*;

use utils::api::{is_auth_endpoint, ApiError};
use utils::event_bus::{SessionBus, SessionCleared, SessionClearReason};
use utils::storage;
use utils::types::UserSummary;

/// A signed token has three non-empty dot-separated segments. Shape
/// check only; the client never verifies signatures.
pub fn token_has_valid_format(token: &str) -> bool {
    let mut segments = 0;
    for segment in token.split('.') {
        if segment.is_empty() {
            return false;
        }
        segments += 1;
    }
    segments == 3
}

/// What durable storage holds right now. Read fresh at every gate
/// check so the in-memory state and storage cannot drift apart, e.g.
/// when another tab logged out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<UserSummary>,
}

impl SessionSnapshot {
    pub fn read() -> Self {
        Self {
            token: storage::auth_token(),
            user: storage::user_profile(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        match (self.token.as_deref(), &self.user) {
            (Some(token), Some(_)) => token_has_valid_format(token),
            _ => false,
        }
    }
}

pub fn session_state() -> SessionState {
    expect_context()
}

/// Session context: one writer (the auth flow), many readers.
/// Components subscribe to the signals; anything about to fetch calls
/// [`SessionState::check_session`] for a storage-backed answer.
#[derive(Clone, Copy)]
pub struct SessionState {
    user: RwSignal<Option<UserSummary>>,
    session_valid: RwSignal<bool>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: RwSignal::new(None),
            session_valid: RwSignal::new(false),
        }
    }
}

impl SessionState {
    /// Re-derives validity synchronously from durable storage and
    /// mirrors the result into the signals. Called on mount, on every
    /// session-cleared broadcast, and before every tree fetch.
    pub fn check_session(&self) -> bool {
        let snapshot = SessionSnapshot::read();
        let valid = snapshot.is_authenticated();
        self.user.try_set(snapshot.user);
        self.session_valid.try_set(valid);
        valid
    }

    pub fn is_valid(&self) -> Signal<bool> {
        self.session_valid.into()
    }

    pub fn user(&self) -> Signal<Option<UserSummary>> {
        self.user.into()
    }

    /// Untracked read for event handlers that need the id right now.
    pub fn user_id_if_available(&self) -> Option<String> {
        self.user.with_untracked(|u| u.as_ref().map(|u| u.id.clone()))
    }

    /// Establishes a session after login or OTP verification.
    pub fn establish(&self, token: &str, user: &UserSummary) {
        storage::set_auth_token(token);
        storage::set_user_profile(user);
        storage::remove_pending_signup_email();
        self.user.set(Some(user.clone()));
        self.session_valid.set(token_has_valid_format(token));
    }

    /// App-level current-user refresh, e.g. from a fresh tree payload.
    pub fn refresh_user(&self, user: &UserSummary) {
        storage::set_user_profile(user);
        self.user.try_set(Some(user.clone()));
    }

    /// Purges all durable session records and broadcasts the clear.
    pub fn clear(&self, bus: SessionBus, reason: SessionClearReason, endpoint: &str) {
        storage::purge_session();
        self.user.try_set(None);
        self.session_valid.try_set(false);
        bus.publish(SessionCleared {
            reason,
            endpoint: endpoint.to_string(),
        });
    }

    /// Routes a 401 from a session-consuming endpoint into exactly one
    /// purge-and-broadcast. Auth endpoints surface their errors inline
    /// instead.
    pub fn note_api_error(&self, bus: SessionBus, err: &ApiError) {
        if let ApiError::Unauthorized { endpoint } = err {
            if !is_auth_endpoint(endpoint) {
                self.clear(bus, SessionClearReason::Unauthorized, endpoint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_format_requires_three_nonempty_segments() {
        assert!(token_has_valid_format("aa.bb.cc"));
        assert!(!token_has_valid_format("aa.bb"));
        assert!(!token_has_valid_format("aa.bb.cc.dd"));
        assert!(!token_has_valid_format("aa..cc"));
        assert!(!token_has_valid_format(".bb.cc"));
        assert!(!token_has_valid_format("aa.bb."));
        assert!(!token_has_valid_format(""));
        assert!(!token_has_valid_format("aabbcc"));
    }

    fn user() -> UserSummary {
        serde_json::from_str(r#"{ "id": "u1", "username": "rider" }"#).unwrap()
    }

    #[test]
    fn authenticated_needs_token_and_user() {
        let snapshot = SessionSnapshot {
            token: Some("aa.bb.cc".to_string()),
            user: Some(user()),
        };
        assert!(snapshot.is_authenticated());

        let no_user = SessionSnapshot {
            token: Some("aa.bb.cc".to_string()),
            user: None,
        };
        assert!(!no_user.is_authenticated());

        let no_token = SessionSnapshot {
            token: None,
            user: Some(user()),
        };
        assert!(!no_token.is_authenticated());

        let bad_token = SessionSnapshot {
            token: Some("oops".to_string()),
            user: Some(user()),
        };
        assert!(!bad_token.is_authenticated());
    }
}
