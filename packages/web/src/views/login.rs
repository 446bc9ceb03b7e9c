//! Email and password sign-in.

use api::ApiError;
use dioxus::prelude::*;
use ui::components::{Button, Card, Field, Input, Spinner};
use ui::{acknowledge_expiry, sign_in, use_api, use_auth, use_reporter, APP_TITLE};

use super::Redirect;
use crate::Route;

const EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[component]
pub fn Login(session: String) -> Element {
    let auth = use_auth();
    let client = use_api();
    let reporter = use_reporter();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Announce an expired session once per visit
    let from_query = session == "expired";
    use_effect(move || {
        if from_query || auth.peek().expired {
            reporter.failure(EXPIRED_MESSAGE);
            acknowledge_expiry(auth);
        }
    });

    if let Some(role) = auth.read().role() {
        return rsx! { Redirect { to: Route::landing(role) } };
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            submitting.set(true);
            match sign_in(auth, &client, &email(), &password()).await {
                Ok(role) => {
                    reporter.success("Signed in");
                    nav.replace(Route::landing(role));
                }
                Err(ApiError::Validation(message)) => reporter.failure(message),
                Err(ApiError::Rejected { status: 401, .. }) => {
                    reporter.failure("Invalid email or password")
                }
                Err(e) => reporter.error_with("Login failed", &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "login-page",
            Card {
                class: "login-card",
                title: "{APP_TITLE}",
                description: "Enter your credentials to sign in",
                form {
                    class: "login-form",
                    onsubmit,
                    Field {
                        label: "Email",
                        target: "email",
                        Input {
                            id: "email",
                            kind: "email",
                            placeholder: "name@company.com",
                            value: email(),
                            oninput: move |v| email.set(v),
                        }
                    }
                    Field {
                        label: "Password",
                        target: "password",
                        Input {
                            id: "password",
                            kind: "password",
                            value: password(),
                            oninput: move |v| password.set(v),
                        }
                    }
                    Button {
                        kind: "submit",
                        class: "btn-block",
                        disabled: submitting(),
                        if submitting() {
                            Spinner {}
                            "Signing in..."
                        } else {
                            "Sign In"
                        }
                    }
                }
                p { class: "login-footer", "Attendance Operations Platform" }
            }
        }
    }
}
