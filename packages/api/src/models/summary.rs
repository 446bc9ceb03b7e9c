use serde::{Deserialize, Serialize};

/// Narrative summaries returned by `GET /summarize_attendance/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    #[serde(default)]
    pub yesterday_summary: String,
    #[serde(default)]
    pub last_week_summary: String,
}
