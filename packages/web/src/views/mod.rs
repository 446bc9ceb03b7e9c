mod login;
pub use login::Login;

mod root;
pub use root::Root;

mod shell;
pub use shell::{AdminShell, EmployeeShell};

mod not_found;
pub use not_found::NotFound;

mod admin;
pub use admin::{AdminDashboard, Attendance, Chat, Employees, Teams};

mod employee;
pub use employee::{EmployeeDashboard, MyAttendance};

use dioxus::prelude::*;

use crate::Route;

/// Replace the current route once mounted.
#[component]
pub fn Redirect(to: Route) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(to.clone());
    });
    rsx! {}
}

/// Today's date in the browser's time zone.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse the value of an `<input type="date">`.
pub(crate) fn parse_date(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parse the value of a `<select>` holding an id; the empty option is `None`.
pub(crate) fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
