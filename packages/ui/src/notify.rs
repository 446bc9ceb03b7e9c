//! Toast notifications and the error reporter.
//!
//! [`ToastProvider`] owns the toast queue and renders it. Pages get a
//! [`Reporter`] through [`use_reporter`] and hand it every failure; the reporter
//! turns each one into a single toast and ends the session on auth errors.

use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;

use crate::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Turns outcomes into toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct Reporter {
    toasts: Signal<Toasts>,
    auth: Signal<AuthState>,
    lifetime: Duration,
}

impl Reporter {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    /// A failure that did not come from the API (e.g. a form check).
    pub fn failure(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Report an API error.
    ///
    /// Auth errors reset the session context instead of toasting here: the route
    /// guard then sends the user to the login page, which announces an expired
    /// session itself. A missing token still gets its own toast.
    pub fn error(&self, error: &ApiError) {
        self.error_in(None, error);
    }

    /// Report an API error raised while doing `what` (e.g. "Failed to load teams").
    pub fn error_with(&self, what: &str, error: &ApiError) {
        self.error_in(Some(what), error);
    }

    fn error_in(&self, what: Option<&str>, error: &ApiError) {
        let mut auth = self.auth;
        if error.is_auth() {
            let next = auth.peek().after_error(error);
            if let Some(next) = next {
                tracing::info!("Session ended: {error}");
                auth.set(next);
                if matches!(error, ApiError::Unauthenticated) {
                    self.show(ToastKind::Error, error.to_string());
                }
            }
            return;
        }

        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!("API error: {error}").into());
        tracing::error!("{}: {error}", what.unwrap_or("Request failed"));

        let message = match what {
            Some(what) => format!("{what}: {error}"),
            None => error.to_string(),
        };
        self.show(ToastKind::Error, message);
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(kind, message);
        let lifetime = self.lifetime;

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::sleep(lifetime).await;
            toasts.write().dismiss(id);
        });
        // No timer outside the browser; toasts stay until closed.
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (id, lifetime);
    }
}

pub fn use_reporter() -> Reporter {
    use_context::<Reporter>()
}

/// Owns the toast queue. Mount inside [`crate::SessionProvider`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    let auth = use_context::<Signal<AuthState>>();
    use_context_provider(|| Reporter {
        toasts,
        auth,
        lifetime: Duration::from_secs(api::settings().notifications.toast_secs),
    });

    rsx! {
        {children}
        ToastHost { toasts }
    }
}

#[component]
fn ToastHost(toasts: Signal<Toasts>) -> Element {
    let mut toasts = toasts;
    let items = toasts.read().items().to_vec();

    rsx! {
        div {
            class: "toast-host",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    role: "status",
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastKind::Error, "Failed to load teams");
        let second = toasts.push(ToastKind::Success, "Team created successfully");
        assert_ne!(first, second);
        assert_eq!(toasts.items().len(), 2);

        toasts.dismiss(first);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].message, "Team created successfully");

        toasts.dismiss(first);
        assert_eq!(toasts.items().len(), 1);
    }

    #[test]
    fn test_kind_styles() {
        let mut toasts = Toasts::default();
        toasts.push(ToastKind::Success, "Team created successfully");
        toasts.push(ToastKind::Error, "Failed to load teams");
        let classes: Vec<_> = toasts.items().iter().map(|t| t.kind.class()).collect();
        assert_eq!(classes, ["toast toast-success", "toast toast-error"]);
    }
}
