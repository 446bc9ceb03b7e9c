//! Presentation transform for the attendance trends chart.

use api::{GroupBy, TrendResult};
use chrono::{Datelike, Duration, NaiveDate};
use dioxus::prelude::*;

pub const EMPTY_MESSAGE: &str = "No data available for the selected filters";

/// One bar of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendRow {
    /// Unique among the rows of one response; team and employee groupings
    /// return one row per status, so the label alone repeats.
    pub key: String,
    pub label: String,
    pub status: String,
    pub count: u64,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
}

pub fn rows(results: &[TrendResult], group_by: GroupBy) -> Vec<TrendRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let label = match group_by {
                GroupBy::Team => r.team_name.clone(),
                GroupBy::Employee => r.employee_name.clone(),
                GroupBy::Status => None,
            }
            .unwrap_or_else(|| r.status.clone());
            TrendRow {
                key: format!("{i}-{label}-{}", r.status),
                label,
                status: r.status.clone(),
                count: r.count,
                percentage: r.percentage.round().max(0.0) as u32,
            }
        })
        .collect()
}

/// Top of the y axis: the largest count plus 20%, rounded up. 100 when empty.
pub fn y_ceiling(rows: &[TrendRow]) -> u64 {
    match rows.iter().map(|r| r.count).max() {
        Some(max) => (max as f64 * 1.2).ceil() as u64,
        None => 100,
    }
}

/// Vertical bars with a three-tick y axis. Expects a non-empty `bars`.
#[component]
pub fn TrendBars(bars: Vec<TrendRow>) -> Element {
    let ceiling = y_ceiling(&bars).max(1);
    let middle = ceiling / 2;
    let columns: Vec<_> = bars
        .into_iter()
        .map(|bar| {
            let style = format!("height: {:.1}%", bar.count as f64 / ceiling as f64 * 100.0);
            let detail = (bar.label != bar.status).then(|| bar.status.clone());
            (bar, style, detail)
        })
        .collect();

    rsx! {
        div {
            class: "bar-chart",
            div {
                class: "bar-axis",
                span { "{ceiling}" }
                span { "{middle}" }
                span { "0" }
            }
            div {
                class: "bars",
                for (bar, style, detail) in columns {
                    div {
                        key: "{bar.key}",
                        class: "bar-column",
                        title: "{bar.label} {bar.status}: {bar.count} ({bar.percentage}%)",
                        div {
                            class: "bar",
                            style: "{style}",
                            span { class: "bar-value", "{bar.count}" }
                        }
                        span { class: "bar-label", "{bar.label}" }
                        if let Some(detail) = detail {
                            span { class: "bar-status", "{detail}" }
                        }
                        span { class: "bar-percent", "{bar.percentage}%" }
                    }
                }
            }
        }
    }
}

/// Inclusive date range of the chart query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// First of the current month through today.
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start: today.with_day(1).unwrap_or(today),
            end: today,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Week,
    Month,
    Quarter,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Week, Preset::Month, Preset::Quarter];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Week => "Last 7 days",
            Preset::Month => "This month",
            Preset::Quarter => "Last 90 days",
        }
    }

    pub fn range(&self, today: NaiveDate) -> DateRange {
        match self {
            Preset::Week => DateRange {
                start: today - Duration::days(7),
                end: today,
            },
            Preset::Month => DateRange::month_to_date(today),
            Preset::Quarter => DateRange {
                start: today - Duration::days(90),
                end: today,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: &str, count: u64, percentage: f64) -> TrendResult {
        TrendResult {
            team_id: None,
            team_name: None,
            employee_id: None,
            employee_name: None,
            status: status.into(),
            count,
            percentage,
            earliest_date: None,
            latest_date: None,
        }
    }

    #[test]
    fn test_rows_and_ceiling() {
        let results = vec![result("Present", 50, 62.5), result("Absent", 30, 37.5)];
        let rows = rows(&results, GroupBy::Status);
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.label.as_str(), r.count, r.percentage))
            .collect();
        assert_eq!(summary, [("Present", 50, 63), ("Absent", 30, 38)]);
        assert_eq!(y_ceiling(&rows), 60);
    }

    #[test]
    fn test_empty_ceiling() {
        assert_eq!(y_ceiling(&[]), 100);
    }

    #[test]
    fn test_labels_follow_grouping() {
        let mut by_team = result("Present", 4, 40.0);
        by_team.team_name = Some("Ops".into());
        let mut by_employee = result("Present", 6, 60.0);
        by_employee.employee_name = Some("Ada".into());

        assert_eq!(rows(&[by_team.clone()], GroupBy::Team)[0].label, "Ops");
        assert_eq!(rows(&[by_employee], GroupBy::Employee)[0].label, "Ada");
        // Falls back to the status when the name is missing.
        assert_eq!(rows(&[by_team], GroupBy::Employee)[0].label, "Present");
    }

    #[test]
    fn test_team_rows_have_distinct_keys() {
        let mut present = result("Present", 8, 80.0);
        present.team_name = Some("Ops".into());
        let mut absent = result("Absent", 2, 20.0);
        absent.team_name = Some("Ops".into());

        let rows = rows(&[present, absent], GroupBy::Team);
        assert_eq!(rows[0].label, rows[1].label);
        assert_ne!(rows[0].key, rows[1].key);
        let statuses: Vec<_> = rows.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, ["Present", "Absent"]);
    }

    #[test]
    fn test_team_bars_rerender() {
        use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};

        fn chart() -> Element {
            let mut present = result("Present", 8, 80.0);
            present.team_name = Some("Ops".into());
            let mut absent = result("Absent", 2, 20.0);
            absent.team_name = Some("Ops".into());
            let bars = rows(&[present, absent], GroupBy::Team);
            rsx! { TrendBars { bars } }
        }

        let mut dom = VirtualDom::new(chart);
        dom.rebuild_in_place();
        // A second pass diffs the keyed bars against the first.
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn test_presets() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(
            DateRange::month_to_date(today).start,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(
            Preset::Week.range(today).start,
            NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()
        );
        assert_eq!(
            Preset::Quarter.range(today).start,
            NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
        );
        assert_eq!(Preset::Month.range(today), DateRange::month_to_date(today));
    }
}
