use api::{Employee, EmployeePayload, Team};
use dioxus::prelude::*;
use store::Role;
use ui::components::{
    Button, ButtonVariant, Card, ConfirmDialog, Field, FullPageSpinner, Input, Modal, Pagination,
    Select, SelectOption, Spinner,
};
use ui::crud::{apply_created, apply_deleted, apply_updated, CreateOutcome, DeleteConfirmation, FormMode, Phase};
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::listing::{clamp_page, filter_employees, paginate, team_name};
use ui::{use_api, use_reporter, Client, Icon, Reporter};

use crate::views::parse_id;

async fn load(
    client: Client,
    reporter: Reporter,
    mut employees: Signal<Vec<Employee>>,
    mut teams: Signal<Vec<Team>>,
) {
    match client.list_employees().await {
        Ok(list) => employees.set(list),
        Err(e) => reporter.error_with("Failed to load employees", &e),
    }
    match client.list_teams().await {
        Ok(list) => teams.set(list),
        Err(e) => reporter.error_with("Failed to load teams", &e),
    }
}

#[component]
pub fn Employees() -> Element {
    let client = use_api();
    let reporter = use_reporter();

    let employees = use_signal(Vec::<Employee>::new);
    let teams = use_signal(Vec::<Team>::new);
    let mut phase = use_signal(|| Phase::Loading);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut mode = use_signal(|| Option::<FormMode>::None);
    let mut form = use_signal(EmployeePayload::default);
    let mut deleting = use_signal(DeleteConfirmation::<Employee>::default);

    use_hook({
        let client = client.clone();
        move || {
            spawn(async move {
                load(client, reporter, employees, teams).await;
                phase.set(Phase::Ready);
            });
        }
    });

    let submit = {
        let client = client.clone();
        move |_| {
            let Some(current) = mode() else { return };
            let payload = form();
            if let Err(e) = payload.validate(current == FormMode::Create) {
                reporter.error(&e);
                return;
            }
            let client = client.clone();
            spawn(async move {
                phase.set(Phase::Submitting);
                submit_employee(client, reporter, current, payload, employees, teams).await;
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
            let mut employees = employees;
            spawn(async move {
                phase.set(Phase::Submitting);
                match client.delete_employee(target.employee_id).await {
                    Ok(()) => {
                        apply_deleted(&mut *employees.write(), target.employee_id);
                        reporter.success("Employee deleted successfully");
                    }
                    Err(e) => reporter.error_with("Failed to delete employee", &e),
                }
                phase.set(Phase::Ready);
            });
        }
    };

    if phase() == Phase::Loading {
        return rsx! { FullPageSpinner {} };
    }

    let filtered = filter_employees(&employees.read(), &search());
    let current_page = clamp_page(page(), filtered.len());
    let rows = paginate(&filtered, current_page);
    let team_list = teams();
    let busy = phase() == Phase::Submitting;
    let delete_name = deleting.read().target().map(|e| e.name.clone());

    let team_options: Vec<SelectOption> = team_list
        .iter()
        .map(|t| SelectOption::new(t.team_id.to_string(), t.team_name.clone()))
        .collect();
    let role_options: Vec<SelectOption> = Role::ALL
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.as_str()))
        .collect();

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                h1 { "Employees" }
                Button {
                    onclick: move |_| {
                        form.set(EmployeePayload::default());
                        mode.set(Some(FormMode::Create));
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Employee"
                }
            }

            Card {
                title: "Employee Management",
                description: "View and manage employees",
                div {
                    class: "toolbar",
                    Input {
                        id: "employee-search",
                        placeholder: "Search by name or email...",
                        value: search(),
                        oninput: move |v| {
                            search.set(v);
                            page.set(1);
                        },
                    }
                }
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Name" }
                            th { "Email" }
                            th { "Team" }
                            th { "Role" }
                            th { class: "actions", "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: 6, class: "empty", "No employees found" } }
                        }
                        for employee in rows {
                            tr {
                                key: "{employee.employee_id}",
                                td { "{employee.employee_id}" }
                                td { "{employee.name}" }
                                td { "{employee.email}" }
                                td { {team_name(&team_list, employee.team_id)} }
                                td { "{employee.role}" }
                                td {
                                    class: "actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit",
                                        onclick: {
                                            let employee = employee.clone();
                                            move |_| {
                                                form.set(EmployeePayload::from_employee(&employee));
                                                mode.set(Some(FormMode::Edit(employee.employee_id)));
                                            }
                                        },
                                        Icon { icon: FaPen, width: 14, height: 14 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: {
                                            let employee = employee.clone();
                                            move |_| deleting.write().request(employee.clone())
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
                    title: (if current == FormMode::Create { "Add Employee" } else { "Edit Employee" }).to_string(),
                    description: "Fill in the employee details below.",
                    on_close: move |_| mode.set(None),
                    div {
                        class: "form-grid",
                        Field {
                            label: "Name",
                            target: "employee-name",
                            Input {
                                id: "employee-name",
                                value: form.read().name.clone(),
                                oninput: move |v| form.write().name = v,
                            }
                        }
                        Field {
                            label: "Email",
                            target: "employee-email",
                            Input {
                                id: "employee-email",
                                kind: "email",
                                value: form.read().email.clone(),
                                oninput: move |v| form.write().email = v,
                            }
                        }
                        Field {
                            label: "Team",
                            target: "employee-team",
                            Select {
                                id: "employee-team",
                                value: form.read().team_id.map(|id| id.to_string()).unwrap_or_default(),
                                placeholder: "No team",
                                options: team_options,
                                onchange: move |v: String| form.write().team_id = parse_id(&v),
                            }
                        }
                        Field {
                            label: "Role",
                            target: "employee-role",
                            Select {
                                id: "employee-role",
                                value: form.read().role.as_str().to_string(),
                                options: role_options,
                                onchange: move |v: String| {
                                    if let Ok(role) = v.parse::<Role>() {
                                        form.write().role = role;
                                    }
                                },
                            }
                        }
                        Field {
                            label: (if current == FormMode::Create { "Password" } else { "New Password (optional)" }).to_string(),
                            target: "employee-password",
                            Input {
                                id: "employee-password",
                                kind: "password",
                                value: form.read().password.clone().unwrap_or_default(),
                                oninput: move |v: String| form.write().set_password(&v),
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

            if let Some(name) = delete_name {
                ConfirmDialog {
                    message: format!("Are you sure you want to delete {name}? This action cannot be undone."),
                    busy,
                    on_cancel: move |_| deleting.write().cancel(),
                    on_confirm: confirm_delete,
                }
            }
        }
    }
}

async fn submit_employee(
    client: Client,
    reporter: Reporter,
    mode: FormMode,
    payload: EmployeePayload,
    mut employees: Signal<Vec<Employee>>,
    teams: Signal<Vec<Team>>,
) {
    match mode {
        FormMode::Create => match client.create_employee(&payload).await {
            Ok(echoed) => {
                reporter.success("Employee created successfully");
                if apply_created(&mut *employees.write(), echoed) == CreateOutcome::Refetch {
                    load(client, reporter, employees, teams).await;
                }
            }
            Err(e) => reporter.error_with("Failed to create employee", &e),
        },
        FormMode::Edit(id) => match client.update_employee(id, &payload).await {
            Ok(echoed) => {
                let updated = echoed.unwrap_or_else(|| payload.into_employee(id));
                apply_updated(&mut *employees.write(), updated);
                reporter.success("Employee updated successfully");
            }
            Err(e) => reporter.error_with("Failed to update employee", &e),
        },
    }
}
