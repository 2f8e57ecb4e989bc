//! Authenticated HTTP pipeline for the school CMS API.
//!
//! Every backend call funnels through here. Outbound requests pick up the
//! bearer credential from the session store when one is present; a 401
//! response evicts the session (token and cached profile) and forces a
//! full navigation to the login page before the error reaches the caller.
//! Storage is cleared before the redirect is issued. Every other failure
//! (non-401 statuses, transport errors, undecodable bodies) passes through
//! unmodified as a typed error. No retries, no client-side timeouts.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since the
//! backend is only reachable from the browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Versioned API prefix; every call-group path is appended to this.
pub const API_BASE: &str = "/api";

/// Full-navigation target after a 401 eviction.
pub const LOGIN_PATH: &str = "/admin/login";

/// Error taxonomy of the pipeline. Only `Unauthorized` is handled centrally
/// (eviction + redirect); callers decide what to do with the rest.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: network unreachable, request aborted.
    #[error("network error: {0}")]
    Network(String),
    /// Non-401 HTTP error status; the body is passed through unmodified.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body could not be parsed as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The backend rejected the credential. By the time the caller sees
    /// this, the session is already evicted and the redirect issued.
    #[error("session expired")]
    Unauthorized,
    /// Browser-only call made outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// `Authorization` header value for a stored token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response status signals authentication failure and must evict
/// the session.
pub fn is_auth_failure(status: u16) -> bool {
    status == 401
}

/// Join the API base, a call-group path, and query pairs.
///
/// Query parameters are passed through as given; call groups supply plain
/// tokens and numbers, never values that need escaping.
pub fn join_url(path: &str, query: &[(&str, String)]) -> String {
    let mut url = format!("{API_BASE}{path}");
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<(), T>(Verb::Get, path, &[], None).await
}

/// GET with list filter/pagination parameters.
pub async fn get_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    request::<(), T>(Verb::Get, path, query, None).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Verb::Post, path, &[], Some(body)).await
}

/// POST without a body (`/init-admin`).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<(), T>(Verb::Post, path, &[], None).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Verb::Put, path, &[], Some(body)).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<(), T>(Verb::Delete, path, &[], None).await
}

#[allow(clippy::unused_async)]
async fn request<B: Serialize, T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = join_url(path, query);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };

        if let Some(token) = super::session::token() {
            builder = builder.header("Authorization", &bearer(&token));
        }

        let sent = match body {
            Some(b) => {
                builder
                    .json(b)
                    .map_err(|e| ApiError::Decode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if is_auth_failure(status) {
            // Eviction must complete before the redirect so the login page
            // never observes a stale credential.
            super::session::clear();
            redirect_to_login();
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, query, body);
        Err(ApiError::Unavailable)
    }
}

/// Full navigation (not a router transition) to the login entry point,
/// discarding in-progress page state.
#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}
