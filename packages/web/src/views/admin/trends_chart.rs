use api::{AttendanceStatus, Employee, GroupBy, Team, TrendParams};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, Field, Input, Select, SelectOption, Spinner};
use ui::icons::FaArrowsRotate;
use ui::trends::{rows, DateRange, Preset, TrendBars, EMPTY_MESSAGE};
use ui::{use_api, use_reporter, Icon};

use crate::views::{parse_date, parse_id, today};

/// Bar chart of attendance counts over a date range, with grouping and filters.
#[component]
pub fn TrendsChart(employees: Vec<Employee>, teams: Vec<Team>) -> Element {
    let client = use_api();
    let reporter = use_reporter();

    let mut range = use_signal(|| DateRange::month_to_date(today()));
    let mut group_by = use_signal(GroupBy::default);
    let mut team_id = use_signal(|| Option::<i64>::None);
    let mut employee_id = use_signal(|| Option::<i64>::None);
    let mut status = use_signal(|| Option::<AttendanceStatus>::None);
    let mut refresh = use_signal(|| 0u32);

    // Reruns whenever a filter signal read here changes.
    let results = use_resource(move || {
        let client = client.clone();
        let _ = refresh();
        let DateRange { start, end } = range();
        let grouping = group_by();
        let params = TrendParams {
            group_by: Some(grouping),
            team_id: team_id(),
            employee_id: employee_id(),
            status: status(),
            ..TrendParams::new(start, end)
        };
        async move {
            match client.attendance_trends(&params).await {
                Ok(results) => rows(&results, grouping),
                Err(e) => {
                    reporter.error_with("Failed to load attendance trends", &e);
                    Vec::new()
                }
            }
        }
    });

    let current = range();
    let loaded = results.read().clone();
    let team_options: Vec<SelectOption> = teams
        .iter()
        .map(|t| SelectOption::new(t.team_id.to_string(), t.team_name.clone()))
        .collect();
    let employee_options: Vec<SelectOption> = employees
        .iter()
        .map(|e| SelectOption::new(e.employee_id.to_string(), e.name.clone()))
        .collect();
    let group_options: Vec<SelectOption> = GroupBy::ALL
        .iter()
        .map(|g| SelectOption::new(g.as_str(), g.label()))
        .collect();
    let status_options: Vec<SelectOption> = AttendanceStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect();

    rsx! {
        Card {
            class: "trends-card",
            title: "Attendance Trends",
            description: "Attendance breakdown for the selected period",

            div {
                class: "toolbar presets",
                for preset in Preset::ALL {
                    Button {
                        key: "{preset.label()}",
                        variant: (if preset.range(today()) == current { ButtonVariant::Primary } else { ButtonVariant::Outline }),
                        onclick: move |_| range.set(preset.range(today())),
                        "{preset.label()}"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Refresh",
                    onclick: move |_| refresh += 1,
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                }
            }

            div {
                class: "toolbar filters",
                Field {
                    label: "From",
                    target: "trends-start",
                    Input {
                        id: "trends-start",
                        kind: "date",
                        value: current.start.to_string(),
                        oninput: move |v: String| {
                            if let Some(start) = parse_date(&v) {
                                range.write().start = start;
                            }
                        },
                    }
                }
                Field {
                    label: "To",
                    target: "trends-end",
                    Input {
                        id: "trends-end",
                        kind: "date",
                        value: current.end.to_string(),
                        oninput: move |v: String| {
                            if let Some(end) = parse_date(&v) {
                                range.write().end = end;
                            }
                        },
                    }
                }
                Field {
                    label: "Group by",
                    target: "trends-group",
                    Select {
                        id: "trends-group",
                        value: group_by().as_str().to_string(),
                        options: group_options,
                        onchange: move |v: String| {
                            if let Some(g) = GroupBy::ALL.into_iter().find(|g| g.as_str() == v) {
                                group_by.set(g);
                            }
                        },
                    }
                }
                Field {
                    label: "Team",
                    target: "trends-team",
                    Select {
                        id: "trends-team",
                        value: team_id().map(|id| id.to_string()).unwrap_or_default(),
                        placeholder: "All teams",
                        options: team_options,
                        onchange: move |v: String| team_id.set(parse_id(&v)),
                    }
                }
                Field {
                    label: "Employee",
                    target: "trends-employee",
                    Select {
                        id: "trends-employee",
                        value: employee_id().map(|id| id.to_string()).unwrap_or_default(),
                        placeholder: "All employees",
                        options: employee_options,
                        onchange: move |v: String| employee_id.set(parse_id(&v)),
                    }
                }
                Field {
                    label: "Status",
                    target: "trends-status",
                    Select {
                        id: "trends-status",
                        value: status().map(|s| s.as_str().to_string()).unwrap_or_default(),
                        placeholder: "All statuses",
                        options: status_options,
                        onchange: move |v: String| status.set(v.parse().ok()),
                    }
                }
            }

            match loaded {
                None => rsx! {
                    div { class: "chart-loading", Spinner { size: 24 } }
                },
                Some(bars) if bars.is_empty() => rsx! {
                    p { class: "chart-empty", "{EMPTY_MESSAGE}" }
                },
                Some(bars) => rsx! { TrendBars { bars } },
            }
        }
    }
}
