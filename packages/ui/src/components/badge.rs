use api::AttendanceStatus;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> Element {
    let class = match status {
        AttendanceStatus::Present => "badge badge-present",
        AttendanceStatus::Absent => "badge badge-absent",
        AttendanceStatus::Wfh => "badge badge-wfh",
        AttendanceStatus::Leave => "badge badge-leave",
    };
    rsx! {
        span { class, "{status.label()}" }
    }
}
