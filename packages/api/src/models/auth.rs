use serde::{Deserialize, Serialize};
use store::Role;

use super::is_blank;
use crate::error::ApiError;

/// Form body of `POST /token`. The backend names the email field `username`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.username) || self.password.is_empty() {
            return Err(ApiError::Validation(
                "Please enter both email and password".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub role: Role,
}
