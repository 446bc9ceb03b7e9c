use api::{AttendanceRecord, Employee, EmployeeRef, Team};
use dioxus::prelude::*;
use ui::components::{Card, FullPageSpinner, StatCard, StatusBadge};
use ui::listing::{format_date, recent};
use ui::{use_api, use_reporter};

const RECENT_RECORDS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
struct Overview {
    profile: Option<Employee>,
    team: Option<Team>,
    records: Vec<AttendanceRecord>,
}

#[component]
pub fn EmployeeDashboard() -> Element {
    let client = use_api();
    let reporter = use_reporter();

    let loaded = use_resource(move || {
        let client = client.clone();
        async move {
            let mut overview = Overview::default();
            match client.get_employee(EmployeeRef::Current).await {
                Ok(profile) => {
                    if let Some(team_id) = profile.team_id {
                        match client.get_team(team_id).await {
                            Ok(team) => overview.team = Some(team),
                            Err(e) => reporter.error_with("Failed to load team", &e),
                        }
                    }
                    overview.profile = Some(profile);
                }
                Err(e) => reporter.error_with("Failed to load profile", &e),
            }
            match client.attendance_for_employee(EmployeeRef::Current).await {
                Ok(records) => overview.records = recent(&records, RECENT_RECORDS),
                Err(e) => reporter.error_with("Failed to load attendance records", &e),
            }
            overview
        }
    });

    let Some(overview) = loaded.read().clone() else {
        return rsx! { FullPageSpinner {} };
    };

    let name = overview
        .profile
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    let email = overview
        .profile
        .as_ref()
        .map(|p| p.email.clone())
        .unwrap_or_else(|| "-".to_string());
    let team = match (&overview.profile, &overview.team) {
        (_, Some(team)) => team.team_name.clone(),
        (Some(p), None) if p.team_id.is_some() => "Unknown".to_string(),
        _ => "Not assigned".to_string(),
    };
    let latest = overview
        .records
        .first()
        .map(|r| r.status.label().to_string())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                h1 {
                    if name.is_empty() { "Welcome" } else { "Welcome, {name}" }
                }
            }

            div {
                class: "stat-grid",
                StatCard { title: "Email", value: email }
                StatCard { title: "Team", value: team }
                StatCard { title: "Latest Status", value: latest, caption: "Most recent record" }
            }

            Card {
                title: "Recent Attendance",
                description: "Your last {RECENT_RECORDS} records",
                if overview.records.is_empty() {
                    p { class: "empty", "No attendance records found" }
                } else {
                    ul {
                        class: "recent-list",
                        for record in overview.records {
                            li {
                                key: "{record.record_id}",
                                span { class: "recent-date", {format_date(record.attendance_date)} }
                                StatusBadge { status: record.status }
                            }
                        }
                    }
                }
            }
        }
    }
}
