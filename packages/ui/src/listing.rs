//! Client-side filtering, sorting and pagination for the list pages.
//!
//! All lists are small and already in memory, so every function here takes a
//! slice and returns a fresh `Vec` in display order.

use std::ops::RangeInclusive;

use api::{AttendanceRecord, AttendanceStatus, Employee, Team};
use chrono::{Duration, NaiveDate};

pub const PAGE_SIZE: usize = 10;
const WINDOW: usize = 5;

/// Number of pages needed for `len` items. Zero for an empty list.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Pagination controls appear only when the list spans more than one page.
pub fn show_pagination(len: usize) -> bool {
    len > PAGE_SIZE
}

/// Keep `page` (1-based) within `1..=page_count(len)`.
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, page_count(len).max(1))
}

/// Items on 1-based `page`.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    items.iter().skip(start).take(PAGE_SIZE).cloned().collect()
}

/// Page numbers shown around `current`: up to five, starting two before it.
/// A `current` past the last page is treated as the last page.
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    let current = current.min(total);
    let start = current.saturating_sub(2).max(1);
    let end = total.min(start + WINDOW - 1);
    start..=end
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Employees whose name or email contains `query` (case-insensitive), by id.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let query = query.to_lowercase();
    let mut found: Vec<Employee> = employees
        .iter()
        .filter(|e| contains_ci(&e.name, &query) || contains_ci(&e.email, &query))
        .cloned()
        .collect();
    found.sort_by_key(|e| e.employee_id);
    found
}

/// Teams whose name contains `query` (case-insensitive), by id.
pub fn filter_teams(teams: &[Team], query: &str) -> Vec<Team> {
    let query = query.to_lowercase();
    let mut found: Vec<Team> = teams
        .iter()
        .filter(|t| contains_ci(&t.team_name, &query))
        .cloned()
        .collect();
    found.sort_by_key(|t| t.team_id);
    found
}

/// Quick date tabs on the attendance page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttendanceTab {
    #[default]
    All,
    Today,
    Week,
}

impl AttendanceTab {
    pub const ALL: [AttendanceTab; 3] = [AttendanceTab::All, AttendanceTab::Today, AttendanceTab::Week];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceTab::All => "All Records",
            AttendanceTab::Today => "Today",
            AttendanceTab::Week => "Last 7 Days",
        }
    }

    fn admits(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            AttendanceTab::All => true,
            AttendanceTab::Today => date == today,
            AttendanceTab::Week => date >= today - Duration::days(7) && date <= today,
        }
    }
}

/// Filters of the admin attendance page. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendanceFilter {
    pub date: Option<NaiveDate>,
    pub employee_id: Option<i64>,
    pub team_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub tab: AttendanceTab,
}

impl AttendanceFilter {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.employee_id.is_none()
            && self.team_id.is_none()
            && self.status.is_none()
    }

    /// Matching records, oldest first. The team filter goes through the
    /// record's employee; records of unknown employees never match it.
    pub fn apply(
        &self,
        records: &[AttendanceRecord],
        employees: &[Employee],
        today: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        let mut found: Vec<AttendanceRecord> = records
            .iter()
            .filter(|r| self.date.map_or(true, |d| r.attendance_date == d))
            .filter(|r| self.employee_id.map_or(true, |id| r.employee_id == id))
            .filter(|r| {
                self.team_id.map_or(true, |team| {
                    employees
                        .iter()
                        .find(|e| e.employee_id == r.employee_id)
                        .is_some_and(|e| e.team_id == Some(team))
                })
            })
            .filter(|r| self.status.map_or(true, |s| r.status == s))
            .filter(|r| self.tab.admits(r.attendance_date, today))
            .cloned()
            .collect();
        found.sort_by_key(|r| r.attendance_date);
        found
    }
}

/// The signed-in employee's records, newest first, optionally narrowed.
pub fn my_attendance(
    records: &[AttendanceRecord],
    status: Option<AttendanceStatus>,
    date: Option<NaiveDate>,
) -> Vec<AttendanceRecord> {
    let mut found: Vec<AttendanceRecord> = records
        .iter()
        .filter(|r| status.map_or(true, |s| r.status == s))
        .filter(|r| date.map_or(true, |d| r.attendance_date == d))
        .cloned()
        .collect();
    found.sort_by(|a, b| b.attendance_date.cmp(&a.attendance_date));
    found
}

/// The `n` most recent records.
pub fn recent(records: &[AttendanceRecord], n: usize) -> Vec<AttendanceRecord> {
    let mut found = my_attendance(records, None, None);
    found.truncate(n);
    found
}

/// Name of the employee with `id`, or "Unknown".
pub fn employee_name(employees: &[Employee], id: i64) -> String {
    employees
        .iter()
        .find(|e| e.employee_id == id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Name of the team `id` refers to: "Not assigned" without a team, "Unknown"
/// when the team is missing from `teams`.
pub fn team_name(teams: &[Team], id: Option<i64>) -> String {
    let Some(id) = id else {
        return "Not assigned".to_string();
    };
    teams
        .iter()
        .find(|t| t.team_id == id)
        .map(|t| t.team_name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// `Mar 04, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    fn employee(id: i64, name: &str, email: &str, team_id: Option<i64>) -> Employee {
        Employee {
            employee_id: id,
            name: name.into(),
            email: email.into(),
            team_id,
            role: Role::Employee,
        }
    }

    fn team(id: i64, name: &str) -> Team {
        Team {
            team_id: id,
            team_name: name.into(),
            created_at: None,
            updated_at: None,
        }
    }

    fn record(id: i64, employee_id: i64, date: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            record_id: id,
            employee_id,
            attendance_date: date,
            status,
            check_in_time: None,
            check_out_time: None,
            notes: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
        assert!(!show_pagination(10));
        assert!(show_pagination(11));
    }

    #[test]
    fn test_paginate() {
        let items: Vec<usize> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3), vec![21, 22, 23, 24, 25]);
        assert!(paginate(&items, 4).is_empty());
        assert_eq!(clamp_page(4, 25), 3);
        assert_eq!(clamp_page(0, 0), 1);
    }

    #[test]
    fn test_pages_rebuild_the_list() {
        for len in [0, 1, 9, 10, 11, 20, 37] {
            let items: Vec<usize> = (0..len).collect();
            let rebuilt: Vec<usize> = (1..=page_count(len))
                .flat_map(|page| paginate(&items, page))
                .collect();
            assert_eq!(rebuilt, items, "len {len}");
        }
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3), 1..=3);
        assert_eq!(page_window(1, 10), 1..=5);
        assert_eq!(page_window(6, 10), 4..=8);
        assert_eq!(page_window(10, 10), 8..=10);

        for total in 1..=12 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(window.contains(&current));
                assert!(window.clone().count() <= 5);
                assert!(*window.end() <= total);
            }
        }
    }

    #[test]
    fn test_page_window_past_last_page() {
        // The last page emptied after a delete.
        let window = page_window(4, 3);
        assert_eq!(window, 1..=3);
        assert!(window.contains(&clamp_page(4, 30)));
    }

    #[test]
    fn test_employee_search() {
        let employees = vec![
            employee(3, "Carla", "carla@corp.test", None),
            employee(1, "Ada", "ada@corp.test", Some(1)),
            employee(2, "Bob", "bob@ADA.test", None),
        ];
        let ids: Vec<_> = filter_employees(&employees, "ADA")
            .iter()
            .map(|e| e.employee_id)
            .collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(filter_employees(&employees, "").len(), 3);
        assert_eq!(filter_employees(&employees, "").first().map(|e| e.employee_id), Some(1));
    }

    #[test]
    fn test_search_keeps_whitespace() {
        let employees = vec![
            employee(1, "Ada Lovelace", "ada@corp.test", None),
            employee(2, "Bea", "bea@corp.test", None),
        ];
        let names: Vec<_> = filter_employees(&employees, "a ")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Ada Lovelace"]);

        let teams = vec![team(1, "Ops"), team(2, "Dev Ops")];
        let ids: Vec<_> = filter_teams(&teams, "v o").iter().map(|t| t.team_id).collect();
        assert_eq!(ids, [2]);
        let ids: Vec<_> = filter_teams(&teams, " ops").iter().map(|t| t.team_id).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn test_team_search() {
        let teams = vec![team(2, "Platform"), team(1, "Ops"), team(3, "DevOps")];
        let ids: Vec<_> = filter_teams(&teams, "ops").iter().map(|t| t.team_id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_attendance_filters() {
        let employees = vec![
            employee(7, "Ada", "ada@corp.test", Some(1)),
            employee(8, "Bob", "bob@corp.test", Some(2)),
        ];
        let records = vec![
            record(1, 7, day(5), AttendanceStatus::Present),
            record(2, 8, day(3), AttendanceStatus::Wfh),
            record(3, 7, day(1), AttendanceStatus::Absent),
            record(4, 99, day(4), AttendanceStatus::Present),
        ];
        let today = day(10);

        let all = AttendanceFilter::default().apply(&records, &employees, today);
        let ids: Vec<_> = all.iter().map(|r| r.record_id).collect();
        assert_eq!(ids, [3, 2, 4, 1]);

        let by_employee = AttendanceFilter {
            employee_id: Some(7),
            ..Default::default()
        };
        let ids: Vec<_> = by_employee
            .apply(&records, &employees, today)
            .iter()
            .map(|r| r.record_id)
            .collect();
        assert_eq!(ids, [3, 1]);

        let by_team = AttendanceFilter {
            team_id: Some(2),
            ..Default::default()
        };
        let ids: Vec<_> = by_team
            .apply(&records, &employees, today)
            .iter()
            .map(|r| r.record_id)
            .collect();
        assert_eq!(ids, [2]);

        let present = AttendanceFilter {
            status: Some(AttendanceStatus::Present),
            date: Some(day(5)),
            ..Default::default()
        };
        assert_eq!(present.apply(&records, &employees, today).len(), 1);
    }

    #[test]
    fn test_attendance_tabs() {
        let records = vec![
            record(1, 7, day(10), AttendanceStatus::Present),
            record(2, 7, day(3), AttendanceStatus::Present),
            record(3, 7, day(2), AttendanceStatus::Present),
            record(4, 7, day(11), AttendanceStatus::Present),
        ];
        let today = day(10);

        let filter = |tab| AttendanceFilter {
            tab,
            ..Default::default()
        };
        let ids = |tab| -> Vec<i64> {
            filter(tab)
                .apply(&records, &[], today)
                .iter()
                .map(|r| r.record_id)
                .collect()
        };
        assert_eq!(ids(AttendanceTab::Today), [1]);
        assert_eq!(ids(AttendanceTab::Week), [2, 1]);
        assert_eq!(ids(AttendanceTab::All).len(), 4);
    }

    #[test]
    fn test_my_attendance_newest_first() {
        let records = vec![
            record(1, 7, day(1), AttendanceStatus::Present),
            record(2, 7, day(9), AttendanceStatus::Leave),
            record(3, 7, day(4), AttendanceStatus::Present),
        ];
        let ids: Vec<_> = my_attendance(&records, None, None)
            .iter()
            .map(|r| r.record_id)
            .collect();
        assert_eq!(ids, [2, 3, 1]);

        let present = my_attendance(&records, Some(AttendanceStatus::Present), None);
        assert_eq!(present.len(), 2);
        assert_eq!(recent(&records, 2).len(), 2);
        assert_eq!(recent(&records, 2)[0].record_id, 2);
    }

    #[test]
    fn test_lookups() {
        let teams = vec![team(1, "Ops")];
        assert_eq!(team_name(&teams, Some(1)), "Ops");
        assert_eq!(team_name(&teams, Some(5)), "Unknown");
        assert_eq!(team_name(&teams, None), "Not assigned");
        assert_eq!(employee_name(&[], 3), "Unknown");
        assert_eq!(format_date(day(4)), "Mar 04, 2024");
    }
}
