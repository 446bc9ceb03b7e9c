use api::{AttendanceRecord, AttendanceStatus, EmployeeRef};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, Field, FullPageSpinner, Input, Pagination, Select, SelectOption, StatusBadge};
use ui::listing::{clamp_page, format_date, my_attendance, paginate};
use ui::{use_api, use_reporter};

use crate::views::parse_date;

fn clock(time: Option<chrono::NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// The signed-in employee's own attendance history.
#[component]
pub fn MyAttendance() -> Element {
    let client = use_api();
    let reporter = use_reporter();

    let mut status = use_signal(|| Option::<AttendanceStatus>::None);
    let mut date = use_signal(|| Option::<chrono::NaiveDate>::None);
    let mut page = use_signal(|| 1usize);

    let records = use_resource(move || {
        let client = client.clone();
        async move {
            match client.attendance_for_employee(EmployeeRef::Current).await {
                Ok(records) => records,
                Err(e) => {
                    reporter.error_with("Failed to load attendance records", &e);
                    Vec::<AttendanceRecord>::new()
                }
            }
        }
    });

    let Some(all) = records.read().clone() else {
        return rsx! { FullPageSpinner {} };
    };

    let filtered = my_attendance(&all, status(), date());
    let current_page = clamp_page(page(), filtered.len());
    let rows = paginate(&filtered, current_page);
    let filtering = status().is_some() || date().is_some();
    let status_options: Vec<SelectOption> = AttendanceStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect();

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                h1 { "My Attendance" }
            }

            Card {
                title: "Attendance History",
                description: "Your attendance records, newest first",

                div {
                    class: "toolbar filters",
                    Field {
                        label: "Status",
                        target: "my-status",
                        Select {
                            id: "my-status",
                            value: status().map(|s| s.as_str().to_string()).unwrap_or_default(),
                            placeholder: "All statuses",
                            options: status_options,
                            onchange: move |v: String| {
                                status.set(v.parse().ok());
                                page.set(1);
                            },
                        }
                    }
                    Field {
                        label: "Date",
                        target: "my-date",
                        Input {
                            id: "my-date",
                            kind: "date",
                            value: date().map(|d| d.to_string()).unwrap_or_default(),
                            oninput: move |v: String| {
                                date.set(parse_date(&v));
                                page.set(1);
                            },
                        }
                    }
                    if filtering {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                status.set(None);
                                date.set(None);
                                page.set(1);
                            },
                            "Clear Filters"
                        }
                    }
                }

                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Status" }
                            th { "Check In" }
                            th { "Check Out" }
                            th { "Notes" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: 5, class: "empty", "No attendance records found" } }
                        }
                        for record in rows {
                            tr {
                                key: "{record.record_id}",
                                td { {format_date(record.attendance_date)} }
                                td { StatusBadge { status: record.status } }
                                td { {clock(record.check_in_time)} }
                                td { {clock(record.check_out_time)} }
                                td { class: "notes", {record.notes.clone().unwrap_or_else(|| "-".into())} }
                            }
                        }
                    }
                }
                Pagination { len: filtered.len(), page }
            }
        }
    }
}
