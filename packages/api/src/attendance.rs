//! Attendance records plus the two aggregate endpoints built on them
//! (narrative summary and trends).

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    AttendancePayload, AttendanceRecord, AttendanceSummary, EmployeeRef, TrendParams, TrendResult,
};

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn list_attendance(&self) -> ApiResult<Vec<AttendanceRecord>> {
        self.get("/attendance/").await
    }

    pub async fn get_attendance(&self, id: i64) -> ApiResult<AttendanceRecord> {
        self.get(&format!("/attendance/{id}")).await
    }

    pub async fn attendance_for_employee(
        &self,
        employee: EmployeeRef,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        self.get(&format!("/attendance/employee/{employee}")).await
    }

    pub async fn attendance_for_team(&self, team_id: i64) -> ApiResult<Vec<AttendanceRecord>> {
        self.get(&format!("/attendance/team/{team_id}")).await
    }

    /// Create a record. `Ok(None)` when the server did not echo it.
    pub async fn create_attendance(
        &self,
        payload: &AttendancePayload,
    ) -> ApiResult<Option<AttendanceRecord>> {
        payload.validate()?;
        self.post_echo("/attendance/", payload).await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        payload: &AttendancePayload,
    ) -> ApiResult<Option<AttendanceRecord>> {
        payload.validate()?;
        self.put_echo(&format!("/attendance/{id}"), payload).await
    }

    pub async fn delete_attendance(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/attendance/{id}")).await.map(|_| ())
    }

    pub async fn attendance_summary(&self) -> ApiResult<AttendanceSummary> {
        self.get("/summarize_attendance/").await
    }

    pub async fn attendance_trends(&self, params: &TrendParams) -> ApiResult<Vec<TrendResult>> {
        self.get_with("/trends/", params).await
    }
}
