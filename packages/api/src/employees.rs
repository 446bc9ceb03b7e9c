use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Employee, EmployeePayload, EmployeeRef};

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.get("/employees/").await
    }

    /// A single employee; [`EmployeeRef::Current`] is the signed-in user.
    pub async fn get_employee(&self, employee: EmployeeRef) -> ApiResult<Employee> {
        self.get(&format!("/employees/{employee}")).await
    }

    /// Create an employee. `Ok(None)` when the server did not echo the record.
    pub async fn create_employee(&self, payload: &EmployeePayload) -> ApiResult<Option<Employee>> {
        payload.validate(true)?;
        self.post_echo("/employees/", payload).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> ApiResult<Option<Employee>> {
        payload.validate(false)?;
        self.put_echo(&format!("/employees/{id}"), payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/employees/{id}")).await.map(|_| ())
    }
}
