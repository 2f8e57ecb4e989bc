//! Session store for the admin credential and cached profile.
//!
//! Owns the two `localStorage` slots the backend session lives in: the
//! bearer token and a denormalized copy of the signed-in user's profile.
//! The only writers are login (`set`), logout (`clear`), and the HTTP
//! pipeline's 401 eviction (`clear`). Storage absence is a normal state:
//! every accessor degrades to `None` instead of failing the request.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// The stored bearer token, if a session exists.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The cached profile stored alongside the token, for display before the
/// first `/auth/me` round trip completes.
pub fn cached_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage().and_then(|s| s.get_item(USER_KEY).ok().flatten())?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a fresh session after a successful login.
pub fn set(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(TOKEN_KEY, token);
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = s.set_item(USER_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Drop both slots. Token and profile are invalidated in lockstep so the
/// login page never observes a stale credential.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.remove_item(TOKEN_KEY);
            let _ = s.remove_item(USER_KEY);
        }
    }
}
