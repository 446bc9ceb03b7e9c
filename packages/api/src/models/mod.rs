//! # Wire records
//!
//! Typed request and response bodies for every endpoint the client talks to.
//! Field names follow the backend's JSON (`employee_id`, `team_name`, ...).
//!
//! Entities that live in an editable list implement [`Entity`] so list patching
//! code can find them by id.

pub mod attendance;
pub mod auth;
pub mod chat;
pub mod employee;
pub mod summary;
pub mod team;
pub mod trends;

pub use attendance::{AttendancePayload, AttendanceRecord, AttendanceStatus};
pub use auth::{LoginForm, TokenResponse};
pub use chat::{ChatRequest, ChatResponse};
pub use employee::{Employee, EmployeePayload, EmployeeRef};
pub use summary::AttendanceSummary;
pub use team::{Team, TeamPayload};
pub use trends::{GroupBy, TrendParams, TrendResult};

/// A record with a server-assigned numeric id.
pub trait Entity {
    fn id(&self) -> i64;
}

/// `None` for a blank (or whitespace-only) form value.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Presence check used by every payload validator.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
