//! Session context and hooks for the UI.
//!
//! The application root mounts [`SessionProvider`], which owns both the
//! [`Client`] and the [`AuthState`] signal. Every transition (sign-in, sign-out,
//! expiry) goes through the helpers here so storage and in-memory state change
//! together.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{PlatformStore, Role, Session};

/// API client over the platform's session store.
pub type Client = ApiClient<PlatformStore>;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored session has been read after the first render.
    pub loading: bool,
    /// The last session ended because the server rejected the token.
    pub expired: bool,
    /// Path the user was on when they were sent to the login page.
    pub return_to: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
            expired: false,
            return_to: None,
        }
    }
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
            expired: false,
            return_to: None,
        }
    }

    pub fn signed_out(expired: bool) -> Self {
        Self {
            session: None,
            loading: false,
            expired,
            return_to: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    /// State after `error`, or `None` if the error does not end the session.
    ///
    /// Only the first auth error of a signed-in session changes anything, so a
    /// burst of failing requests resets the state once.
    pub fn after_error(&self, error: &ApiError) -> Option<AuthState> {
        if !error.is_auth() || self.session.is_none() {
            return None;
        }
        Some(AuthState {
            return_to: self.return_to.clone(),
            ..AuthState::signed_out(matches!(error, ApiError::SessionExpired))
        })
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared API client.
pub fn use_api() -> Client {
    use_context::<Client>()
}

/// Provider component that owns the session and the API client.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_context_provider(|| {
        Client::from_settings(api::settings(), store::platform_store())
    });
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Read the stored session once mounted
    use_effect(move || {
        let session = client.session().load();
        match &session {
            Some(s) => tracing::info!("Restored session for {}", s.role),
            None => tracing::debug!("No stored session"),
        }
        auth_state.set(match session {
            Some(session) => AuthState::signed_in(session),
            None => AuthState::signed_out(false),
        });
    });

    rsx! {
        {children}
    }
}

/// Sign in and record the session. Returns the role so the caller can route to
/// its landing page. On failure nothing changes.
pub async fn sign_in(
    mut auth: Signal<AuthState>,
    client: &Client,
    email: &str,
    password: &str,
) -> Result<Role, ApiError> {
    let session = client.login(email, password).await?;
    let role = session.role;
    auth.set(AuthState::signed_in(session));
    Ok(role)
}

/// Clear storage and state.
pub fn sign_out(mut auth: Signal<AuthState>, client: &Client) {
    client.logout();
    auth.set(AuthState::signed_out(false));
}

/// Remember where an anonymous visitor was headed.
pub fn remember_return_to(mut auth: Signal<AuthState>, path: String) {
    if auth.peek().return_to.as_deref() != Some(path.as_str()) {
        auth.write().return_to = Some(path);
    }
}

/// Forget the expiry marker once the login page has shown it.
pub fn acknowledge_expiry(mut auth: Signal<AuthState>) {
    if auth.peek().expired {
        auth.write().expired = false;
    }
}
