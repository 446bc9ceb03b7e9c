use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AttendanceStatus;

/// Dimension the trends endpoint aggregates by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Team,
    Employee,
    #[default]
    Status,
}

impl GroupBy {
    pub const ALL: [GroupBy; 3] = [GroupBy::Team, GroupBy::Employee, GroupBy::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Team => "team",
            GroupBy::Employee => "employee",
            GroupBy::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Team => "Team",
            GroupBy::Employee => "Employee",
            GroupBy::Status => "Status",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query string of `GET /trends/`. Unset filters are left out of the URL.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
}

impl TrendParams {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            group_by: None,
            employee_id: None,
            team_id: None,
            status: None,
        }
    }
}

/// One aggregated bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub status: String,
    pub count: u64,
    pub percentage: f64,
    #[serde(default)]
    pub earliest_date: Option<NaiveDate>,
    #[serde(default)]
    pub latest_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_filters_are_skipped() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let mut params = TrendParams::new(start, end);
        params.group_by = Some(GroupBy::Team);

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["start_date"], "2024-03-01");
        assert_eq!(json["group_by"], "team");
        assert!(json.get("employee_id").is_none());
        assert!(json.get("status").is_none());
    }
}
