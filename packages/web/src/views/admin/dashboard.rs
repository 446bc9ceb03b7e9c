use api::{AttendanceSummary, Employee, Team};
use dioxus::prelude::*;
use ui::components::{Card, Spinner, StatCard};
use ui::{use_api, use_reporter};

use super::trends_chart::TrendsChart;

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    summary: Option<AttendanceSummary>,
    employees: Option<Vec<Employee>>,
    teams: Option<Vec<Team>>,
}

fn count<T>(items: &Option<Vec<T>>) -> String {
    items
        .as_ref()
        .map(|v| v.len().to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api();
    let reporter = use_reporter();

    let loaded = use_resource(move || {
        let client = client.clone();
        async move {
            let mut data = DashboardData::default();
            match client.attendance_summary().await {
                Ok(summary) => data.summary = Some(summary),
                Err(e) => reporter.error_with("Failed to load attendance summary", &e),
            }
            match client.list_employees().await {
                Ok(list) => data.employees = Some(list),
                Err(e) => reporter.error_with("Failed to load employees", &e),
            }
            match client.list_teams().await {
                Ok(list) => data.teams = Some(list),
                Err(e) => reporter.error_with("Failed to load teams", &e),
            }
            data
        }
    });

    let Some(data) = loaded.read().clone() else {
        return rsx! {
            div { class: "page page-loading", Spinner { size: 32 } }
        };
    };

    let summary = data.summary.unwrap_or_default();
    let employee_count = count(&data.employees);
    let team_count = count(&data.teams);
    let employees = data.employees.unwrap_or_default();
    let teams = data.teams.unwrap_or_default();

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                h1 { "Admin Dashboard" }
            }

            div {
                class: "stat-grid",
                StatCard {
                    title: "Total Employees",
                    value: employee_count,
                    caption: "Registered in the system",
                }
                StatCard {
                    title: "Total Teams",
                    value: team_count,
                    caption: "Active teams",
                }
            }

            div {
                class: "summary-grid",
                Card {
                    title: "Yesterday",
                    description: "Attendance summary",
                    p { class: "summary-text", "{summary.yesterday_summary}" }
                }
                Card {
                    title: "Last Week",
                    description: "Attendance summary",
                    p { class: "summary-text", "{summary.last_week_summary}" }
                }
            }

            TrendsChart {
                employees,
                teams,
            }
        }
    }
}
