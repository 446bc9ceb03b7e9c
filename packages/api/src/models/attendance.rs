use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "WFH")]
    Wfh,
    Leave,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Wfh,
        AttendanceStatus::Leave,
    ];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Wfh => "WFH",
            AttendanceStatus::Leave => "Leave",
        }
    }

    /// Human label for selects and badges.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Wfh => "Work from Home",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ApiError::Validation(format!("Unknown status: {s}")))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub record_id: i64,
    pub employee_id: i64,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in_time: Option<NaiveTime>,
    #[serde(default)]
    pub check_out_time: Option<NaiveTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Entity for AttendanceRecord {
    fn id(&self) -> i64 {
        self.record_id
    }
}

/// Body of `POST /attendance/` and `PUT /attendance/{id}`.
///
/// Employee and date are optional here only so an unfinished form can be held in
/// one value; [`validate`](Self::validate) rejects a payload missing either.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendancePayload {
    pub employee_id: Option<i64>,
    pub attendance_date: Option<NaiveDate>,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl Default for AttendancePayload {
    fn default() -> Self {
        Self {
            employee_id: None,
            attendance_date: None,
            status: AttendanceStatus::Present,
            check_in_time: None,
            check_out_time: None,
            notes: None,
        }
    }
}

impl AttendancePayload {
    pub fn from_record(record: &AttendanceRecord) -> Self {
        Self {
            employee_id: Some(record.employee_id),
            attendance_date: Some(record.attendance_date),
            status: record.status,
            check_in_time: record.check_in_time,
            check_out_time: record.check_out_time,
            notes: record.notes.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.employee_id.is_none() || self.attendance_date.is_none() {
            return Err(ApiError::Validation(
                "Employee and date are required".into(),
            ));
        }
        Ok(())
    }

    /// The record as it will look after the server accepts this payload.
    /// `None` when the payload does not validate.
    pub fn into_record(self, record_id: i64) -> Option<AttendanceRecord> {
        Some(AttendanceRecord {
            record_id,
            employee_id: self.employee_id?,
            attendance_date: self.attendance_date?,
            status: self.status,
            check_in_time: self.check_in_time,
            check_out_time: self.check_out_time,
            notes: self.notes,
        })
    }
}

/// Parse a time input value (`HH:MM` or `HH:MM:SS`). Blank input is `None`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_and_label() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Wfh).unwrap(),
            r#""WFH""#
        );
        assert_eq!(AttendanceStatus::Wfh.label(), "Work from Home");
        assert_eq!(AttendanceStatus::Leave.label(), "Leave");
        assert_eq!("Absent".parse::<AttendanceStatus>(), Ok(AttendanceStatus::Absent));
        assert!("Sick".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn test_decode_record() {
        let record: AttendanceRecord = serde_json::from_str(
            r#"{"record_id": 1, "employee_id": 7, "attendance_date": "2024-03-04",
                "status": "WFH", "check_in_time": "09:15:00", "check_out_time": null, "notes": null}"#,
        )
        .unwrap();
        assert_eq!(record.status, AttendanceStatus::Wfh);
        assert_eq!(record.check_in_time, NaiveTime::from_hms_opt(9, 15, 0));
        assert!(record.check_out_time.is_none());
    }

    #[test]
    fn test_employee_and_date_required() {
        let payload = AttendancePayload::default();
        assert_eq!(
            payload.validate(),
            Err(ApiError::Validation("Employee and date are required".into()))
        );
        assert!(payload.into_record(1).is_none());

        let payload = AttendancePayload {
            employee_id: Some(7),
            attendance_date: NaiveDate::from_ymd_opt(2024, 3, 4),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
        assert_eq!(payload.into_record(9).map(|r| r.record_id), Some(9));
    }

    #[test]
    fn test_parse_time_inputs() {
        assert_eq!(parse_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_time("17:05:10"), NaiveTime::from_hms_opt(17, 5, 10));
        assert_eq!(parse_time(""), None);
    }
}
