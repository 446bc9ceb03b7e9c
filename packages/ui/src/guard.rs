//! Route guard decision.
//!
//! The component that renders protected pages lives with the route table; this
//! module only decides what it should do.

use store::Role;

use crate::auth::AuthState;

/// What a protected route renders for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Stored session not read yet: show a spinner only.
    Loading,
    /// Nobody signed in. `expired` adds the "session expired" marker to the login URL.
    Login { expired: bool },
    /// Signed in with a role the route does not admit.
    Landing(Role),
    Render,
}

pub fn decide(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match state.role() {
        None => GuardDecision::Login {
            expired: state.expired,
        },
        Some(role) if !allowed.contains(&role) => GuardDecision::Landing(role),
        Some(_) => GuardDecision::Render,
    }
}

/// Where a role lands after sign-in.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Employee => "/dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Session;

    const ADMIN_ONLY: &[Role] = &[Role::Admin];

    #[test]
    fn test_loading_shows_spinner() {
        assert_eq!(decide(&AuthState::default(), ADMIN_ONLY), GuardDecision::Loading);
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        assert_eq!(
            decide(&AuthState::signed_out(false), ADMIN_ONLY),
            GuardDecision::Login { expired: false }
        );
        assert_eq!(
            decide(&AuthState::signed_out(true), &Role::ALL),
            GuardDecision::Login { expired: true }
        );
    }

    #[test]
    fn test_wrong_role_goes_to_own_landing() {
        let state = AuthState::signed_in(Session::new("t", Role::Employee));
        assert_eq!(decide(&state, ADMIN_ONLY), GuardDecision::Landing(Role::Employee));
        assert_eq!(landing_path(Role::Employee), "/dashboard");
    }

    #[test]
    fn test_allowed_role_renders() {
        let state = AuthState::signed_in(Session::new("t", Role::Admin));
        assert_eq!(decide(&state, ADMIN_ONLY), GuardDecision::Render);
        assert_eq!(landing_path(Role::Admin), "/admin/dashboard");
    }
}
