mod attendance;
mod dashboard;

pub use attendance::MyAttendance;
pub use dashboard::EmployeeDashboard;
