//! Route guard and layout shell around every protected page.

use dioxus::prelude::*;
use store::Role;
use ui::components::FullPageSpinner;
use ui::{decide, remember_return_to, sign_out, use_api, use_auth, GuardDecision, Sidebar};

use super::Redirect;
use crate::Route;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const EMPLOYEE_ONLY: &[Role] = &[Role::Employee];

#[component]
pub fn AdminShell() -> Element {
    rsx! { Shell { allowed: ADMIN_ONLY } }
}

#[component]
pub fn EmployeeShell() -> Element {
    rsx! { Shell { allowed: EMPLOYEE_ONLY } }
}

#[component]
fn Shell(allowed: &'static [Role]) -> Element {
    let auth = use_auth();
    let client = use_api();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let collapsed = use_signal(|| false);

    let decision = decide(&auth.read(), allowed);
    let role = match decision {
        GuardDecision::Loading => return rsx! { FullPageSpinner {} },
        GuardDecision::Login { expired } => {
            return rsx! {
                LoginRedirect { expired, from: route.to_string() }
            };
        }
        GuardDecision::Landing(role) => {
            tracing::debug!("{role} may not open {route}");
            return rsx! { Redirect { to: Route::landing(role) } };
        }
        GuardDecision::Render => auth.read().role(),
    };
    let Some(role) = role else {
        return rsx! { FullPageSpinner {} };
    };

    rsx! {
        div {
            class: "app-shell",
            Sidebar {
                role,
                active_path: route.to_string(),
                collapsed,
                on_navigate: move |path: &'static str| {
                    match path.parse::<Route>() {
                        Ok(route) => {
                            nav.push(route);
                        }
                        Err(e) => tracing::warn!("Unroutable sidebar path {path}: {e}"),
                    }
                },
                on_logout: move |_| {
                    sign_out(auth, &client);
                    nav.replace(Route::login(false));
                },
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Record where the visitor was going, then show the login page.
#[component]
fn LoginRedirect(expired: bool, from: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    use_effect(move || {
        remember_return_to(auth, from.clone());
        nav.replace(Route::login(expired));
    });
    rsx! { FullPageSpinner {} }
}
