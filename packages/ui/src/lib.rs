//! This crate contains all shared UI for the workspace: the session context,
//! toast reporting, the navigation sidebar, small presentational components and
//! the pure list/chart/chat logic the pages are built from.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    acknowledge_expiry, remember_return_to, sign_in, sign_out, use_api, use_auth, AuthState,
    Client, SessionProvider,
};

pub mod guard;
pub use guard::{decide, landing_path, GuardDecision};

mod notify;
pub use notify::{use_reporter, Reporter, Toast, ToastKind, ToastProvider, Toasts};

mod sidebar;
pub use sidebar::{nav_items, NavIcon, NavItem, Sidebar, APP_TITLE};

pub mod chat;
pub mod crud;
pub mod listing;
pub mod trends;
