use std::fmt;

use serde::{Deserialize, Serialize};
use store::Role;

use super::{is_blank, Entity};
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    pub role: Role,
}

impl Entity for Employee {
    fn id(&self) -> i64 {
        self.employee_id
    }
}

/// Body of `POST /employees/` and `PUT /employees/{id}`.
///
/// `password` is required when creating and only sent on update when the admin
/// typed a new one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    pub team_id: Option<i64>,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for EmployeePayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            team_id: None,
            role: Role::Employee,
            password: None,
        }
    }
}

impl EmployeePayload {
    /// Pre-fill the edit form from an existing employee. The password stays empty.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            team_id: employee.team_id,
            role: employee.role,
            password: None,
        }
    }

    /// Take the password field verbatim; only an empty field means "no password".
    pub fn set_password(&mut self, value: &str) {
        self.password = (!value.is_empty()).then(|| value.to_string());
    }

    pub fn validate(&self, creating: bool) -> Result<(), ApiError> {
        if is_blank(&self.name) || is_blank(&self.email) {
            return Err(ApiError::Validation("Name and email are required".into()));
        }
        if creating && self.password.as_deref().map_or(true, str::is_empty) {
            return Err(ApiError::Validation(
                "Password is required for new employees".into(),
            ));
        }
        Ok(())
    }

    /// The employee as it will look after the server accepts this payload.
    pub fn into_employee(self, employee_id: i64) -> Employee {
        Employee {
            employee_id,
            name: self.name,
            email: self.email,
            team_id: self.team_id,
            role: self.role,
        }
    }
}

/// Path segment addressing an employee: the signed-in user or a concrete id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeRef {
    Current,
    Id(i64),
}

impl fmt::Display for EmployeeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeRef::Current => f.write_str("current"),
            EmployeeRef::Id(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmployeePayload {
        EmployeePayload {
            name: "Ada".into(),
            email: "ada@corp.test".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_and_email_required() {
        let mut p = payload();
        p.email = "  ".into();
        assert_eq!(
            p.validate(false),
            Err(ApiError::Validation("Name and email are required".into()))
        );
    }

    #[test]
    fn test_password_required_only_on_create() {
        let p = payload();
        assert!(p.validate(false).is_ok());
        assert_eq!(
            p.validate(true),
            Err(ApiError::Validation(
                "Password is required for new employees".into()
            ))
        );

        let p = EmployeePayload {
            password: Some("secret".into()),
            ..payload()
        };
        assert!(p.validate(true).is_ok());
    }

    #[test]
    fn test_password_kept_verbatim() {
        let mut p = payload();
        p.set_password(" pass phrase ");
        assert_eq!(p.password.as_deref(), Some(" pass phrase "));
        assert!(p.validate(true).is_ok());

        p.set_password("");
        assert!(p.password.is_none());
        assert!(p.validate(true).is_err());
    }

    #[test]
    fn test_password_omitted_from_update_body() {
        let json = serde_json::to_value(payload()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "EMPLOYEE");
        assert!(json["team_id"].is_null());
    }

    #[test]
    fn test_employee_ref_path() {
        assert_eq!(EmployeeRef::Current.to_string(), "current");
        assert_eq!(EmployeeRef::Id(7).to_string(), "7");
    }
}
