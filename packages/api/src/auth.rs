//! Sign-in and sign-out.

use store::{KeyValueStore, Session};

use crate::client::{ApiClient, LOGIN_PATH};
use crate::error::ApiResult;
use crate::models::{LoginForm, TokenResponse};

impl<S: KeyValueStore> ApiClient<S> {
    /// Exchange credentials for a token and persist the session.
    ///
    /// Nothing is written to storage unless the server accepted the credentials.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let form = LoginForm::new(email.trim(), password);
        form.validate()?;

        let token: TokenResponse = self.post_form(LOGIN_PATH, &form).await?;
        let session = Session::new(token.access_token, token.role);
        self.session().persist(&session)?;

        tracing::info!("Signed in as {}", session.role);
        Ok(session)
    }

    /// Forget the stored session. No server call is made.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("Signed out");
    }
}
