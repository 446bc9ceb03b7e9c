//! # API crate: HTTP access layer for the AttendOps backend
//!
//! Every screen of the web client gets its data through [`ApiClient`]. The client
//! owns a [`reqwest::Client`], the backend base URL and the persisted
//! [`Session`](store::Session); endpoint methods are spread over grouping modules
//! that each add an `impl ApiClient` block.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Request pipeline: bearer token, 401 handling, status mapping, decoding |
//! | [`error`] | [`ApiError`] taxonomy and server error-message extraction |
//! | [`settings`] | Layered configuration (defaults, `attendops.toml`, `ATTENDOPS_*` env) |
//! | [`models`] | Typed request/response records |
//! | [`auth`] | `login` / `logout` |
//! | [`employees`] | `/employees/` CRUD and `/employees/current` |
//! | [`teams`] | `/teams/` CRUD |
//! | [`attendance`] | `/attendance/` CRUD, per-employee/team lists, summary, trends |
//! | [`chat`] | `/chat/` assistant |

pub mod attendance;
pub mod auth;
pub mod chat;
pub mod client;
pub mod employees;
pub mod error;
pub mod models;
pub mod settings;
pub mod teams;

pub use client::{ApiClient, LOGIN_PATH};
pub use error::{ApiError, ApiResult};
pub use models::{
    AttendancePayload, AttendanceRecord, AttendanceStatus, AttendanceSummary, Employee,
    EmployeePayload, EmployeeRef, Entity, GroupBy, Team, TeamPayload, TrendParams, TrendResult,
};
pub use settings::{settings, Settings};
pub use store::{Role, Session};
