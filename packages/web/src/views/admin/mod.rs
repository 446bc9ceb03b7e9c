mod attendance;
mod chat;
mod dashboard;
mod employees;
mod teams;
mod trends_chart;

pub use attendance::Attendance;
pub use chat::Chat;
pub use dashboard::AdminDashboard;
pub use employees::Employees;
pub use teams::Teams;
