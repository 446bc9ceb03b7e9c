//! # HTTP access layer
//!
//! [`ApiClient`] is the only place that talks HTTP. For every request it:
//!
//! 1. reads the bearer token from [`SessionStorage`] and refuses to send anything
//!    without one ([`ApiError::Unauthenticated`]), except for the login endpoint;
//! 2. issues the request with a JSON or form-urlencoded body;
//! 3. on `401` clears the stored session and returns [`ApiError::SessionExpired`]
//!    (again except for login, where a 401 means bad credentials);
//! 4. maps any other non-2xx answer through [`ApiError::from_status`];
//! 5. decodes the body into the caller's type.
//!
//! It never navigates. Redirecting to the login page is up to whoever receives
//! the auth error.
//!
//! Endpoint-specific methods live in the grouping modules ([`crate::auth`],
//! [`crate::employees`], ...) as further `impl ApiClient` blocks.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{KeyValueStore, SessionStorage};

use crate::error::{ApiError, ApiResult};
use crate::settings::Settings;

/// Path of the login endpoint. Sent without a bearer token.
pub const LOGIN_PATH: &str = "/token";

#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStorage<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, session: SessionStorage<S>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    /// Client configured from [`Settings`] over the given store.
    pub fn from_settings(settings: &Settings, store: S) -> Self {
        Self::new(
            settings.api.base_url.clone(),
            SessionStorage::new(store, settings.session_keys()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session storage shared with the UI.
    pub fn session(&self) -> &SessionStorage<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the raw body of a 2xx response.
    async fn send<F>(&self, method: Method, path: &str, attach: F) -> ApiResult<String>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let is_login = path == LOGIN_PATH;
        let mut request = self.http.request(method.clone(), self.url(path));

        if !is_login {
            let Some(token) = self.session.token() else {
                tracing::debug!("No session token, not sending {method} {path}");
                return Err(ApiError::Unauthenticated);
            };
            request = request.bearer_auth(token);
        }

        let response = attach(request).send().await.map_err(|e| {
            let error = ApiError::Transport(e.to_string());
            trace_failure(&method, path, &error);
            error
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let error = ApiError::Transport(e.to_string());
            trace_failure(&method, path, &error);
            error
        })?;

        if status == StatusCode::UNAUTHORIZED && !is_login {
            tracing::info!("{method} {path} answered 401, clearing session");
            self.session.clear();
            return Err(ApiError::SessionExpired);
        }

        if !status.is_success() {
            let error = ApiError::from_status(status.as_u16(), &body);
            trace_failure(&method, path, &error);
            return Err(error);
        }

        Ok(body)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.send(Method::GET, path, |r| r).await?;
        decode(path, &body)
    }

    /// `GET` with a serialized query string.
    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let body = self.send(Method::GET, path, |r| r.query(query)).await?;
        decode(path, &body)
    }

    pub async fn post<T, B>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(Method::POST, path, |r| r.json(payload)).await?;
        decode(path, &body)
    }

    /// `POST` with a form-urlencoded body.
    pub async fn post_form<T, B>(&self, path: &str, form: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(Method::POST, path, |r| r.form(form)).await?;
        decode(path, &body)
    }

    /// `POST` whose success body may or may not be the created entity.
    pub async fn post_echo<T, B>(&self, path: &str, payload: &B) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(Method::POST, path, |r| r.json(payload)).await?;
        Ok(decode_echo(&body))
    }

    /// `PUT` whose success body may or may not be the updated entity.
    pub async fn put_echo<T, B>(&self, path: &str, payload: &B) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(Method::PUT, path, |r| r.json(payload)).await?;
        Ok(decode_echo(&body))
    }

    /// `DELETE`. The body is usually `{"message": ...}` and is returned as-is.
    pub async fn delete(&self, path: &str) -> ApiResult<serde_json::Value> {
        let body = self.send(Method::DELETE, path, |r| r).await?;
        decode(path, &body)
    }
}

/// Decode a success body. An empty body decodes as JSON `null`.
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> ApiResult<T> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!("Could not decode response of {path}: {e}");
        ApiError::Decode(e.to_string())
    })
}

/// The entity echoed back by a create/update, if the body is one.
fn decode_echo<T: DeserializeOwned>(body: &str) -> Option<T> {
    serde_json::from_str(body).ok()
}

fn trace_failure(method: &Method, path: &str, error: &ApiError) {
    tracing::warn!("{method} {path} failed: {error}");
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("API error: {method} {path}: {error}").into());
}
