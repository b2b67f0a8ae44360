use gloo::storage::{LocalStorage, SessionStorage, Storage};

use consts::{
    AUTH_TOKEN_STORE, PENDING_SIGNUP_EMAIL_STORE, REFERRAL_TRAIL_STORE, USER_PROFILE_STORE,
};

use crate::types::UserSummary;

/// Durable-storage accessors. Reads are synchronous so callers can gate
/// on the stored session at the moment of checking, even when another
/// tab has logged out underneath the in-memory state. Unparsable
/// records read as absent.

pub fn auth_token() -> Option<String> {
    LocalStorage::get(AUTH_TOKEN_STORE).ok()
}

pub fn set_auth_token(token: &str) {
    if let Err(e) = LocalStorage::set(AUTH_TOKEN_STORE, token) {
        log::warn!("failed to persist auth token: {e}");
    }
}

pub fn user_profile() -> Option<UserSummary> {
    LocalStorage::get(USER_PROFILE_STORE).ok()
}

pub fn set_user_profile(user: &UserSummary) {
    if let Err(e) = LocalStorage::set(USER_PROFILE_STORE, user) {
        log::warn!("failed to persist user profile: {e}");
    }
}

pub fn pending_signup_email() -> Option<String> {
    LocalStorage::get(PENDING_SIGNUP_EMAIL_STORE).ok()
}

pub fn set_pending_signup_email(email: &str) {
    if let Err(e) = LocalStorage::set(PENDING_SIGNUP_EMAIL_STORE, email) {
        log::warn!("failed to persist pending signup email: {e}");
    }
}

pub fn remove_pending_signup_email() {
    LocalStorage::delete(PENDING_SIGNUP_EMAIL_STORE);
}

/// Removes all four session records, the referral trail included.
pub fn purge_session() {
    LocalStorage::delete(AUTH_TOKEN_STORE);
    LocalStorage::delete(USER_PROFILE_STORE);
    LocalStorage::delete(PENDING_SIGNUP_EMAIL_STORE);
    SessionStorage::delete(REFERRAL_TRAIL_STORE);
}
