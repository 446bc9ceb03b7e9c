use api::models::attendance::parse_time;
use api::{AttendancePayload, AttendanceRecord, AttendanceStatus, Employee, Team};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Card, ConfirmDialog, Field, FullPageSpinner, Input, Modal, Pagination,
    Select, SelectOption, Spinner, StatusBadge, Textarea,
};
use ui::crud::{apply_created, apply_deleted, apply_updated, CreateOutcome, DeleteConfirmation, FormMode, Phase};
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::listing::{clamp_page, employee_name, format_date, paginate, AttendanceFilter, AttendanceTab};
use ui::{use_api, use_reporter, Client, Icon, Reporter};

use crate::views::{parse_date, parse_id, today};

async fn load_records(client: &Client, reporter: Reporter, mut records: Signal<Vec<AttendanceRecord>>) {
    match client.list_attendance().await {
        Ok(list) => records.set(list),
        Err(e) => reporter.error_with("Failed to load attendance records", &e),
    }
}

fn status_options() -> Vec<SelectOption> {
    AttendanceStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

fn time_value(time: Option<chrono::NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

#[component]
pub fn Attendance() -> Element {
    let client = use_api();
    let reporter = use_reporter();

    let records = use_signal(Vec::<AttendanceRecord>::new);
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut teams = use_signal(Vec::<Team>::new);
    let mut phase = use_signal(|| Phase::Loading);
    let mut filter = use_signal(AttendanceFilter::default);
    let mut page = use_signal(|| 1usize);
    let mut mode = use_signal(|| Option::<FormMode>::None);
    let mut form = use_signal(AttendancePayload::default);
    let mut deleting = use_signal(DeleteConfirmation::<AttendanceRecord>::default);

    // Records, then the employees and teams the filters and labels need.
    use_hook({
        let client = client.clone();
        move || {
            spawn(async move {
                load_records(&client, reporter, records).await;
                match client.list_employees().await {
                    Ok(list) => employees.set(list),
                    Err(e) => reporter.error_with("Failed to load employees", &e),
                }
                match client.list_teams().await {
                    Ok(list) => teams.set(list),
                    Err(e) => reporter.error_with("Failed to load teams", &e),
                }
                phase.set(Phase::Ready);
            });
        }
    });

    let submit = {
        let client = client.clone();
        move |_| {
            let Some(current) = mode() else { return };
            let payload = form();
            if let Err(e) = payload.validate() {
                reporter.error(&e);
                return;
            }
            let client = client.clone();
            let mut records = records;
            spawn(async move {
                phase.set(Phase::Submitting);
                match current {
                    FormMode::Create => match client.create_attendance(&payload).await {
                        Ok(echoed) => {
                            reporter.success("Attendance record created successfully");
                            if apply_created(&mut *records.write(), echoed) == CreateOutcome::Refetch {
                                load_records(&client, reporter, records).await;
                            }
                        }
                        Err(e) => reporter.error_with("Failed to create attendance record", &e),
                    },
                    FormMode::Edit(id) => match client.update_attendance(id, &payload).await {
                        Ok(echoed) => {
                            if let Some(updated) = echoed.or_else(|| payload.into_record(id)) {
                                apply_updated(&mut *records.write(), updated);
                            }
                            reporter.success("Attendance record updated successfully");
                        }
                        Err(e) => reporter.error_with("Failed to update attendance record", &e),
                    },
                }
                mode.set(None);
                phase.set(Phase::Ready);
            });
        }
    };

    let confirm_delete = {
        let client = client.clone();
        move |_| {
            let Some(target) = deleting.write().confirm() else { return };
            let client = client.clone();
            let mut records = records;
            spawn(async move {
                phase.set(Phase::Submitting);
                match client.delete_attendance(target.record_id).await {
                    Ok(()) => {
                        apply_deleted(&mut *records.write(), target.record_id);
                        reporter.success("Attendance record deleted successfully");
                    }
                    Err(e) => reporter.error_with("Failed to delete attendance record", &e),
                }
                phase.set(Phase::Ready);
            });
        }
    };

    if phase() == Phase::Loading {
        return rsx! { FullPageSpinner {} };
    }

    let employee_list = employees();
    let current_filter = filter();
    let filtered = current_filter.apply(&records.read(), &employee_list, today());
    let current_page = clamp_page(page(), filtered.len());
    let rows = paginate(&filtered, current_page);
    let busy = phase() == Phase::Submitting;
    let delete_open = deleting.read().is_open();

    let employee_options: Vec<SelectOption> = employee_list
        .iter()
        .map(|e| SelectOption::new(e.employee_id.to_string(), e.name.clone()))
        .collect();
    let team_options: Vec<SelectOption> = teams
        .read()
        .iter()
        .map(|t| SelectOption::new(t.team_id.to_string(), t.team_name.clone()))
        .collect();

    let mut set_filter = move |update: Box<dyn FnOnce(&mut AttendanceFilter)>| {
        update(&mut *filter.write());
        page.set(1);
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                h1 { "Attendance" }
                Button {
                    onclick: move |_| {
                        form.set(AttendancePayload {
                            attendance_date: Some(today()),
                            ..Default::default()
                        });
                        mode.set(Some(FormMode::Create));
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Record"
                }
            }

            Card {
                title: "Attendance Records",
                description: "View and manage attendance",

                div {
                    class: "tabs",
                    for tab in AttendanceTab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: if current_filter.tab == tab { "tab active" } else { "tab" },
                            onclick: move |_| set_filter(Box::new(move |f| f.tab = tab)),
                            "{tab.label()}"
                        }
                    }
                }

                div {
                    class: "toolbar filters",
                    Input {
                        id: "filter-date",
                        kind: "date",
                        value: current_filter.date.map(|d| d.to_string()).unwrap_or_default(),
                        oninput: move |v: String| set_filter(Box::new(move |f| f.date = parse_date(&v))),
                    }
                    Select {
                        id: "filter-employee",
                        value: current_filter.employee_id.map(|id| id.to_string()).unwrap_or_default(),
                        placeholder: "All employees",
                        options: employee_options.clone(),
                        onchange: move |v: String| set_filter(Box::new(move |f| f.employee_id = parse_id(&v))),
                    }
                    Select {
                        id: "filter-team",
                        value: current_filter.team_id.map(|id| id.to_string()).unwrap_or_default(),
                        placeholder: "All teams",
                        options: team_options,
                        onchange: move |v: String| set_filter(Box::new(move |f| f.team_id = parse_id(&v))),
                    }
                    Select {
                        id: "filter-status",
                        value: current_filter.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
                        placeholder: "All statuses",
                        options: status_options(),
                        onchange: move |v: String| set_filter(Box::new(move |f| f.status = v.parse().ok())),
                    }
                    if !current_filter.is_empty() {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                let tab = filter.peek().tab;
                                filter.set(AttendanceFilter { tab, ..Default::default() });
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
                            th { "Employee" }
                            th { "Date" }
                            th { "Status" }
                            th { "Check In" }
                            th { "Check Out" }
                            th { "Notes" }
                            th { class: "actions", "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: 7, class: "empty", "No attendance records found" } }
                        }
                        for record in rows {
                            tr {
                                key: "{record.record_id}",
                                td { {employee_name(&employee_list, record.employee_id)} }
                                td { {format_date(record.attendance_date)} }
                                td { StatusBadge { status: record.status } }
                                td { {record.check_in_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".into())} }
                                td { {record.check_out_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".into())} }
                                td { class: "notes", {record.notes.clone().unwrap_or_else(|| "-".into())} }
                                td {
                                    class: "actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit",
                                        onclick: {
                                            let record = record.clone();
                                            move |_| {
                                                form.set(AttendancePayload::from_record(&record));
                                                mode.set(Some(FormMode::Edit(record.record_id)));
                                            }
                                        },
                                        Icon { icon: FaPen, width: 14, height: 14 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: {
                                            let record = record.clone();
                                            move |_| deleting.write().request(record.clone())
                                        },
                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination { len: filtered.len(), page }
            }

            if let Some(current) = mode() {
                Modal {
                    title: (if current == FormMode::Create { "Add Attendance Record" } else { "Edit Attendance Record" }).to_string(),
                    on_close: move |_| mode.set(None),
                    div {
                        class: "form-grid",
                        Field {
                            label: "Employee",
                            target: "record-employee",
                            Select {
                                id: "record-employee",
                                value: form.read().employee_id.map(|id| id.to_string()).unwrap_or_default(),
                                placeholder: "Select employee",
                                options: employee_options,
                                onchange: move |v: String| form.write().employee_id = parse_id(&v),
                            }
                        }
                        Field {
                            label: "Date",
                            target: "record-date",
                            Input {
                                id: "record-date",
                                kind: "date",
                                value: form.read().attendance_date.map(|d| d.to_string()).unwrap_or_default(),
                                oninput: move |v: String| form.write().attendance_date = parse_date(&v),
                            }
                        }
                        Field {
                            label: "Status",
                            target: "record-status",
                            Select {
                                id: "record-status",
                                value: form.read().status.as_str().to_string(),
                                options: status_options(),
                                onchange: move |v: String| {
                                    if let Ok(status) = v.parse::<AttendanceStatus>() {
                                        form.write().status = status;
                                    }
                                },
                            }
                        }
                        Field {
                            label: "Check-in Time",
                            target: "record-check-in",
                            Input {
                                id: "record-check-in",
                                kind: "time",
                                value: time_value(form.read().check_in_time),
                                oninput: move |v: String| form.write().check_in_time = parse_time(&v),
                            }
                        }
                        Field {
                            label: "Check-out Time",
                            target: "record-check-out",
                            Input {
                                id: "record-check-out",
                                kind: "time",
                                value: time_value(form.read().check_out_time),
                                oninput: move |v: String| form.write().check_out_time = parse_time(&v),
                            }
                        }
                        Field {
                            label: "Notes",
                            target: "record-notes",
                            Textarea {
                                id: "record-notes",
                                value: form.read().notes.clone().unwrap_or_default(),
                                placeholder: "Optional notes",
                                oninput: move |v: String| form.write().notes = api::models::optional_text(&v),
                            }
                        }
                    }
                    footer {
                        class: "modal-footer",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| mode.set(None),
                            "Cancel"
                        }
                        Button {
                            disabled: busy,
                            onclick: submit,
                            if busy {
                                Spinner {}
                            }
                            if current == FormMode::Create { "Create" } else { "Update" }
                        }
                    }
                }
            }

            if delete_open {
                ConfirmDialog {
                    message: "Are you sure you want to delete this attendance record? This action cannot be undone.",
                    busy,
                    on_cancel: move |_| deleting.write().cancel(),
                    on_confirm: confirm_delete,
                }
            }
        }
    }
}
